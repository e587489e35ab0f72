//! Sparse styling patches keyed by section, role and name.
//!
//! Overrides target entries by identifier, never by position, so a table can
//! be written before the credits it styles. Records that match nothing are
//! simply never used.

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::defaults::StyleDefaults;
use crate::error::ConfigurationError;
use crate::model::{Name, RoleDefaults, SectionDefaults, StyledText};

/// Replacement section styling. There is one per table and it applies to
/// every section, whatever its title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOverride {
    #[serde(deserialize_with = "section_data")]
    pub data: SectionDefaults,
}

impl SectionOverride {
    pub fn new(data: SectionDefaults) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleOverride {
    pub parent_section: Name,
    pub role_to_override: Name,
    #[serde(deserialize_with = "role_data")]
    pub data: RoleDefaults,
}

impl RoleOverride {
    pub fn new(
        parent_section: impl Into<Name>,
        role_to_override: impl Into<Name>,
        data: RoleDefaults,
    ) -> Self {
        Self {
            parent_section: parent_section.into(),
            role_to_override: role_to_override.into(),
            data,
        }
    }
}

impl Default for RoleOverride {
    fn default() -> Self {
        // The flag is carried but never applied: the authored role decides it.
        Self {
            parent_section: Name::none(),
            role_to_override: Name::none(),
            data: RoleDefaults { display_role_name: false, ..RoleDefaults::default() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameOverride {
    pub parent_section: Name,
    pub parent_role: Name,
    pub name_to_override: Name,
    #[serde(deserialize_with = "name_data")]
    pub data: StyledText,
}

impl NameOverride {
    pub fn new(
        parent_section: impl Into<Name>,
        parent_role: impl Into<Name>,
        name_to_override: impl Into<Name>,
        data: StyledText,
    ) -> Self {
        Self {
            parent_section: parent_section.into(),
            parent_role: parent_role.into(),
            name_to_override: name_to_override.into(),
            data,
        }
    }
}

impl Default for NameOverride {
    fn default() -> Self {
        Self {
            parent_section: Name::none(),
            parent_role: Name::none(),
            name_to_override: Name::none(),
            data: StyleDefaults::name_text(),
        }
    }
}

// Authored `data` only lists the fields it changes; the rest keep the look
// of the level the record overrides.
fn layered<'de, D, T>(deserializer: D, base: &T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Serialize,
{
    let authored = toml::Value::deserialize(deserializer)?;
    credits_shared::config::layer_over(base, authored).map_err(serde::de::Error::custom)
}

fn section_data<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SectionDefaults, D::Error> {
    layered(deserializer, &SectionDefaults::default())
}

fn role_data<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RoleDefaults, D::Error> {
    layered(deserializer, &RoleOverride::default().data)
}

fn name_data<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StyledText, D::Error> {
    layered(deserializer, &StyleDefaults::name_text())
}

/// The authored shape of an [`OverrideTable`], before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideRecords {
    pub section_override: SectionOverride,
    pub section_override_enabled: bool,
    pub role_overrides: Vec<RoleOverride>,
    pub name_overrides: Vec<NameOverride>,
}

type RoleKey = (Name, Name);
type NameKey = (Name, Name, Name);

/// Validated override set with indexed lookups.
///
/// Construction rejects duplicate keys, so every lookup has at most one
/// answer. Authoring order of the records is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OverrideRecords", into = "OverrideRecords")]
pub struct OverrideTable {
    section_override: SectionOverride,
    section_override_enabled: bool,
    role_overrides: Vec<RoleOverride>,
    name_overrides: Vec<NameOverride>,
    role_index: FxHashMap<RoleKey, usize>,
    name_index: FxHashMap<NameKey, usize>,
}

impl OverrideTable {
    pub fn new(
        section_override: SectionOverride,
        section_override_enabled: bool,
        role_overrides: Vec<RoleOverride>,
        name_overrides: Vec<NameOverride>,
    ) -> Result<Self, ConfigurationError> {
        let mut role_index = FxHashMap::default();
        for (idx, record) in role_overrides.iter().enumerate() {
            let key = (record.parent_section.clone(), record.role_to_override.clone());
            if role_index.insert(key, idx).is_some() {
                return Err(ConfigurationError::DuplicateRoleOverride {
                    section: record.parent_section.clone(),
                    role: record.role_to_override.clone(),
                });
            }
        }

        let mut name_index = FxHashMap::default();
        for (idx, record) in name_overrides.iter().enumerate() {
            let key = (
                record.parent_section.clone(),
                record.parent_role.clone(),
                record.name_to_override.clone(),
            );
            if name_index.insert(key, idx).is_some() {
                return Err(ConfigurationError::DuplicateNameOverride {
                    section: record.parent_section.clone(),
                    role: record.parent_role.clone(),
                    name: record.name_to_override.clone(),
                });
            }
        }

        log::debug!(
            "Override table built: section override {}, {} role overrides, {} name overrides",
            if section_override_enabled { "on" } else { "off" },
            role_overrides.len(),
            name_overrides.len()
        );

        Ok(Self {
            section_override,
            section_override_enabled,
            role_overrides,
            name_overrides,
            role_index,
            name_index,
        })
    }

    /// A table that overrides nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The global section styling, if it is switched on.
    pub fn find_section_override(&self) -> Option<&SectionDefaults> {
        self.section_override_enabled.then_some(&self.section_override.data)
    }

    pub fn find_role_override(&self, section: &Name, role: &Name) -> Option<&RoleDefaults> {
        if section.is_none() || role.is_none() {
            return None;
        }
        let idx = self.role_index.get(&(section.clone(), role.clone()))?;
        Some(&self.role_overrides[*idx].data)
    }

    pub fn find_name_override(
        &self,
        section: &Name,
        role: &Name,
        name: &Name,
    ) -> Option<&StyledText> {
        if section.is_none() || role.is_none() || name.is_none() {
            return None;
        }
        let idx = self.name_index.get(&(section.clone(), role.clone(), name.clone()))?;
        Some(&self.name_overrides[*idx].data)
    }

    /// Role overrides whose parent is `section`, in authoring order.
    pub fn role_overrides_for<'a>(
        &'a self,
        section: &'a Name,
    ) -> impl Iterator<Item = &'a RoleOverride> + 'a {
        self.role_overrides.iter().filter(move |o| &o.parent_section == section)
    }

    /// Name overrides whose parent is `section`, in authoring order.
    pub fn name_overrides_for<'a>(
        &'a self,
        section: &'a Name,
    ) -> impl Iterator<Item = &'a NameOverride> + 'a {
        self.name_overrides.iter().filter(move |o| &o.parent_section == section)
    }

    pub fn section_override(&self) -> &SectionOverride {
        &self.section_override
    }

    pub fn is_section_override_enabled(&self) -> bool {
        self.section_override_enabled
    }

    pub fn role_overrides(&self) -> &[RoleOverride] {
        &self.role_overrides
    }

    pub fn name_overrides(&self) -> &[NameOverride] {
        &self.name_overrides
    }

    pub fn is_empty(&self) -> bool {
        !self.section_override_enabled
            && self.role_overrides.is_empty()
            && self.name_overrides.is_empty()
    }

    /// Combines two tables. Keys present in both, or two enabled section
    /// overrides, are rejected.
    pub fn merge(self, other: OverrideTable) -> Result<Self, ConfigurationError> {
        let (section_override, section_override_enabled) =
            match (self.section_override_enabled, other.section_override_enabled) {
                (true, true) => return Err(ConfigurationError::DuplicateSectionOverride),
                (false, true) => (other.section_override, true),
                (enabled, false) => (self.section_override, enabled),
            };

        let mut role_overrides = self.role_overrides;
        role_overrides.extend(other.role_overrides);
        let mut name_overrides = self.name_overrides;
        name_overrides.extend(other.name_overrides);

        Self::new(section_override, section_override_enabled, role_overrides, name_overrides)
    }
}

impl TryFrom<OverrideRecords> for OverrideTable {
    type Error = ConfigurationError;

    fn try_from(records: OverrideRecords) -> Result<Self, Self::Error> {
        Self::new(
            records.section_override,
            records.section_override_enabled,
            records.role_overrides,
            records.name_overrides,
        )
    }
}

impl From<OverrideTable> for OverrideRecords {
    fn from(table: OverrideTable) -> Self {
        Self {
            section_override: table.section_override,
            section_override_enabled: table.section_override_enabled,
            role_overrides: table.role_overrides,
            name_overrides: table.name_overrides,
        }
    }
}
