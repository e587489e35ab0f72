mod config_gen;
mod setup;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use credits_core::assets::BindAssets;
use credits_core::config::SystemConfig;
use credits_core::{
    AssetIndex, AssetResolver, CreditsProject, GeneralSettings, PassthroughResolver, StyleDefaults,
};

const USAGE: &str = "usage: credits-desktop [--config <file>] [--out <file>] [<credits path>]";

struct Args {
    config: PathBuf,
    out: Option<PathBuf>,
    credits: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { config: PathBuf::from("config.toml"), out: None, credits: None };
    let mut it = env::args().skip(1);

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = it.next().context(USAGE)?.into(),
            "--out" => args.out = Some(it.next().context(USAGE)?.into()),
            "-h" | "--help" => anyhow::bail!(USAGE),
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag '{}'\n{}", flag, USAGE),
            path => args.credits = Some(path.into()),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    setup::init(&args.config);
    log::info!(">>> Credits Desktop Started <<<");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn asset_resolver(sys_cfg: &SystemConfig) -> Box<dyn AssetResolver + Send + Sync> {
    if sys_cfg.assets_path.is_empty() {
        log::info!("No asset root configured, accepting asset handles as written.");
        Box::new(PassthroughResolver)
    } else {
        Box::new(AssetIndex::new(&sys_cfg.assets_path))
    }
}

fn run(args: Args) -> Result<()> {
    let sys_cfg: SystemConfig = credits_shared::config::get("system");
    let assets = asset_resolver(&sys_cfg);

    let defaults: StyleDefaults = credits_shared::config::get("defaults");
    let defaults = defaults
        .bind_assets(assets.as_ref())
        .context("Invalid [defaults] config section")?;
    let general: GeneralSettings = credits_shared::config::get("general");
    let general = general
        .bind_assets(assets.as_ref())
        .context("Invalid [general] config section")?;

    let credits_path = args.credits.unwrap_or_else(|| PathBuf::from(&sys_cfg.credits_path));
    log::info!("Loading credits from: {:?}", credits_path);

    let mut project = CreditsProject::from_config(assets);
    project.load_project(&credits_path)?;

    let resolved = project.resolve(&defaults, &general);
    log::info!("Resolved {} sections", resolved.sections.len());

    let out = args
        .out
        .or_else(|| (!sys_cfg.output_path.is_empty()).then(|| PathBuf::from(&sys_cfg.output_path)));
    match out {
        Some(path) => {
            resolved.save(&path)?;
            log::info!("Resolved credits written to {:?}", path);
        }
        None => resolved.write_to(std::io::stdout().lock())?,
    }
    Ok(())
}
