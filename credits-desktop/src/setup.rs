use std::fs;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use credits_core::config::SystemConfig;
use env_logger::{Builder, Env, Target};

use crate::config_gen;

pub fn init(config_path: &Path) {
    config_gen::ensure_config_exists(config_path);

    if let Err(e) = credits_shared::config::init(config_path) {
        eprintln!("Config load warning: {}", e);
    }

    init_logger();
}

// Stdout is reserved for resolved credits, so log lines never go there.
fn init_logger() {
    let sys_cfg: SystemConfig = credits_shared::config::get("system");
    let env = Env::default().default_filter_or(&sys_cfg.log_level);

    let sink = LogSink::new(open_log_file(Path::new(&sys_cfg.log_path)));
    Builder::from_env(env).target(Target::Pipe(Box::new(sink))).init();
}

fn open_log_file(log_dir: &Path) -> Option<File> {
    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("Failed to create log dir {:?}: {}", log_dir, e);
        return None;
    }
    let path = log_dir.join("credits.log");
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}, logging to stderr only.", path, e);
            None
        }
    }
}

/// Writes every log line to stderr and, while it keeps accepting writes, to
/// the log file. A file that fails once is dropped for the rest of the run.
struct LogSink<W> {
    stderr: W,
    file: Option<File>,
}

impl LogSink<io::Stderr> {
    fn new(file: Option<File>) -> Self {
        Self { stderr: io::stderr(), file }
    }
}

impl<W: Write> Write for LogSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.stderr.write(buf)?;
        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.write_all(&buf[..n]) {
                let msg = format!("Log file write failed: {}, logging to stderr only.", e);
                let _ = writeln!(self.stderr, "{}", msg);
                self.file = None;
            }
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stderr.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
