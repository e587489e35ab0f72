use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::assets::{AssetKind, AssetResolver};

/// Asset lookup backed by a directory scan.
///
/// Files are indexed by kind (from the extension) and by both their stem and
/// their `/`-separated path relative to the root, so `"Roboto"` and
/// `"fonts/Roboto.ttf"` name the same font.
pub struct AssetIndex {
    root_path: PathBuf,
    entries: HashMap<AssetKind, HashMap<String, PathBuf>>,
}

impl AssetIndex {
    pub fn new(root_path: impl AsRef<Path>) -> Self {
        let mut index = Self {
            root_path: root_path.as_ref().to_path_buf(),
            entries: HashMap::new(),
        };

        index.scan_assets();
        index
    }

    fn scan_assets(&mut self) {
        log::info!("Scanning assets in {:?}...", self.root_path);

        for entry in WalkDir::new(&self.root_path).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let kind = path
                .extension()
                .and_then(|s| s.to_str())
                .and_then(AssetKind::from_extension);
            let Some(kind) = kind else {
                continue;
            };

            let table = self.entries.entry(kind).or_default();
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Some(previous) = table.insert(stem.to_string(), path.to_path_buf()) {
                    log::warn!("Asset '{}' found twice: {:?} shadows {:?}", stem, path, previous);
                }
            }
            if let Ok(relative) = path.strip_prefix(&self.root_path) {
                let key = relative.to_string_lossy().replace('\\', "/");
                table.insert(key, path.to_path_buf());
            }
        }

        log::info!(
            "Asset scan complete. Fonts: {}, Images: {}, Audio: {}, Curves: {}, Materials: {}",
            self.count(AssetKind::Font),
            self.count(AssetKind::Image),
            self.count(AssetKind::Audio),
            self.count(AssetKind::Curve),
            self.count(AssetKind::Material),
        );
    }

    /// Number of distinct files of `kind`.
    pub fn count(&self, kind: AssetKind) -> usize {
        let Some(table) = self.entries.get(&kind) else {
            return 0;
        };
        let mut paths: Vec<&PathBuf> = table.values().collect();
        paths.sort();
        paths.dedup();
        paths.len()
    }
}

impl AssetResolver for AssetIndex {
    fn resolve(&self, kind: AssetKind, path: &str) -> Option<String> {
        let key = path.trim().replace('\\', "/");
        let found = self.entries.get(&kind)?.get(&key)?;
        Some(found.to_string_lossy().into_owned())
    }
}
