use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::assets::{AssetResolver, BindAssets, PassthroughResolver};
use crate::config::SystemConfig;
use crate::defaults::StyleDefaults;
use crate::error::ConfigurationError;
use crate::model::{Name, Section, SectionSimple};
use crate::overrides::OverrideTable;
use crate::resolver::Resolver;
use crate::settings::{GeneralSettings, MusicCue};

/// One authored credits file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditsDocument {
    pub sections: Vec<SectionSimple>,
    pub overrides: OverrideTable,
    pub music: Vec<MusicCue>,
}

impl CreditsDocument {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Everything the presentation layer needs to roll the credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCredits {
    pub settings: GeneralSettings,
    pub music: Vec<MusicCue>,
    pub sections: Vec<Section>,
}

impl ResolvedCredits {
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
        self.write_to(file)
    }
}

/// Collects credits documents into one project.
///
/// Sections and music are concatenated in load order. Override tables are
/// merged; the same override key in two files is an error naming both.
pub struct CreditsProject {
    pub sections: Vec<SectionSimple>,
    pub overrides: OverrideTable,
    pub music: Vec<MusicCue>,

    assets: Box<dyn AssetResolver + Send + Sync>,
    strict_role_names: bool,
    role_sources: FxHashMap<(Name, Name), String>,
    name_sources: FxHashMap<(Name, Name, Name), String>,
    section_override_source: Option<String>,
}

impl CreditsProject {
    pub fn new(assets: Box<dyn AssetResolver + Send + Sync>) -> Self {
        Self {
            sections: Vec::new(),
            overrides: OverrideTable::empty(),
            music: Vec::new(),
            assets,
            strict_role_names: false,
            role_sources: FxHashMap::default(),
            name_sources: FxHashMap::default(),
            section_override_source: None,
        }
    }

    /// A project set up from the global `[system]` config section.
    pub fn from_config(assets: Box<dyn AssetResolver + Send + Sync>) -> Self {
        let cfg: SystemConfig = credits_shared::config::get("system");
        Self::new(assets).with_strict_role_names(cfg.strict_role_names)
    }

    pub fn with_strict_role_names(mut self, strict: bool) -> Self {
        self.strict_role_names = strict;
        self
    }

    /// Loads `root` if it is a file, otherwise every `*.toml` below it in
    /// path order.
    pub fn load_project(&mut self, root: impl AsRef<Path>) -> Result<()> {
        let root = root.as_ref();
        if root.is_file() {
            return self.load_file(root);
        }
        if !root.exists() {
            anyhow::bail!("Credits path {:?} does not exist", root);
        }
        log::info!("Scanning credits project at: {:?}", root);

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == "toml"))
            .collect();
        files.sort();

        for path in &files {
            self.load_file(path)?;
        }

        log::info!(
            "Project loaded. Files: {}, Sections: {}, Role overrides: {}, Name overrides: {}",
            files.len(),
            self.sections.len(),
            self.overrides.role_overrides().len(),
            self.overrides.name_overrides().len()
        );
        Ok(())
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read credits file: {:?}", path))?;
        let document = CreditsDocument::parse(&content)
            .with_context(|| format!("Failed to parse credits file: {:?}", path))?;

        log::debug!("Loaded {:?}: {} sections", path, document.sections.len());
        self.add_document(document, &path.display().to_string())
    }

    /// Adds an already parsed document. `source` names it in error messages.
    pub fn add_document(&mut self, document: CreditsDocument, source: &str) -> Result<()> {
        let assets = self.assets.as_ref();
        let sections = document
            .sections
            .bind_assets(assets)
            .with_context(|| format!("Unresolved asset in {}", source))?;
        let overrides = document
            .overrides
            .bind_assets(assets)
            .with_context(|| format!("Unresolved asset in {}", source))?;
        let music = document
            .music
            .bind_assets(assets)
            .with_context(|| format!("Unresolved asset in {}", source))?;

        if self.strict_role_names {
            for section in &sections {
                section
                    .validate_unique_roles()
                    .with_context(|| format!("Strict role names violated in {}", source))?;
            }
        }

        self.check_collisions(&overrides, source)?;
        self.record_sources(&overrides, source);

        self.overrides = std::mem::take(&mut self.overrides).merge(overrides)?;
        self.sections.extend(sections);
        self.music.extend(music);
        Ok(())
    }

    fn check_collisions(&self, incoming: &OverrideTable, source: &str) -> Result<()> {
        if incoming.is_section_override_enabled() {
            if let Some(existing) = &self.section_override_source {
                let msg = format!("Section override defined in both {} and {}", existing, source);
                let err = ConfigurationError::DuplicateSectionOverride;
                return Err(anyhow::Error::new(err).context(msg));
            }
        }

        for record in incoming.role_overrides() {
            let key = (record.parent_section.clone(), record.role_to_override.clone());
            if let Some(existing) = self.role_sources.get(&key) {
                let err = ConfigurationError::DuplicateRoleOverride {
                    section: key.0,
                    role: key.1,
                };
                let msg = format!("Role override collision between {} and {}", existing, source);
                return Err(anyhow::Error::new(err).context(msg));
            }
        }

        for record in incoming.name_overrides() {
            let key = (
                record.parent_section.clone(),
                record.parent_role.clone(),
                record.name_to_override.clone(),
            );
            if let Some(existing) = self.name_sources.get(&key) {
                let err = ConfigurationError::DuplicateNameOverride {
                    section: key.0,
                    role: key.1,
                    name: key.2,
                };
                let msg = format!("Name override collision between {} and {}", existing, source);
                return Err(anyhow::Error::new(err).context(msg));
            }
        }
        Ok(())
    }

    fn record_sources(&mut self, incoming: &OverrideTable, source: &str) {
        if incoming.is_section_override_enabled() {
            self.section_override_source = Some(source.to_string());
        }
        for record in incoming.role_overrides() {
            let key = (record.parent_section.clone(), record.role_to_override.clone());
            self.role_sources.insert(key, source.to_string());
        }
        for record in incoming.name_overrides() {
            let key = (
                record.parent_section.clone(),
                record.parent_role.clone(),
                record.name_to_override.clone(),
            );
            self.name_sources.insert(key, source.to_string());
        }
    }

    pub fn resolve(&self, defaults: &StyleDefaults, settings: &GeneralSettings) -> ResolvedCredits {
        let resolver = Resolver::new(defaults, &self.overrides);
        ResolvedCredits {
            settings: settings.clone(),
            music: self.music.clone(),
            sections: resolver.resolve_all(&self.sections),
        }
    }
}

impl Default for CreditsProject {
    fn default() -> Self {
        Self::new(Box::new(PassthroughResolver))
    }
}
