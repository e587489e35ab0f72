use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::model::{LinearColor, Name, Padding, SimpleText, StyledText, TextStyle};

/// Where a role caption sits relative to the names under it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextPosition {
    #[default]
    Side,
    Top,
}

/// Top or bottom edge; used for section titles and for where the whole roll
/// starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleDefaults {
    pub role: StyledText,
    pub role_position: TextPosition,
    pub display_role_name: bool,
}

impl RoleDefaults {
    pub const COLOR: LinearColor = LinearColor::rgb(0.1, 0.8, 0.5);

    pub fn new(role: StyledText, role_position: TextPosition, display_role_name: bool) -> Self {
        Self { role, role_position, display_role_name }
    }
}

impl Default for RoleDefaults {
    fn default() -> Self {
        Self {
            role: StyledText {
                text_style: TextStyle::sized(TextStyle::DEFAULT_FONT_SIZE, Self::COLOR),
                ..StyledText::default()
            },
            role_position: TextPosition::Side,
            display_role_name: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDefaults {
    pub title: StyledText,
    pub title_position: StartingPosition,
    pub section_padding: Padding,
}

impl SectionDefaults {
    pub const TITLE_FONT_SIZE: u32 = 30;
    pub const TITLE_COLOR: LinearColor = LinearColor::rgb(0.9, 0.4, 0.06);
    pub const TITLE_PADDING: Padding = Padding::bottom(15.0);
    pub const SECTION_PADDING: Padding = Padding::bottom(80.0);

    pub fn new(
        title: StyledText,
        title_position: StartingPosition,
        section_padding: Padding,
    ) -> Self {
        Self { title, title_position, section_padding }
    }
}

impl Default for SectionDefaults {
    fn default() -> Self {
        Self {
            title: StyledText {
                text_style: TextStyle::sized(Self::TITLE_FONT_SIZE, Self::TITLE_COLOR),
                padding: Self::TITLE_PADDING,
                ..StyledText::default()
            },
            title_position: StartingPosition::Top,
            section_padding: Self::SECTION_PADDING,
        }
    }
}

/// An authored role: caption, whether to show it, and who plays it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleSimple {
    pub role: SimpleText,
    pub display_role_name: bool,
    pub played_by: Vec<SimpleText>,
}

impl RoleSimple {
    pub fn new(role: SimpleText, display_role_name: bool, played_by: Vec<SimpleText>) -> Self {
        Self { role, display_role_name, played_by }
    }

    pub fn key(&self) -> Name {
        self.role.key()
    }
}

/// An authored section: a title and its roles, in display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSimple {
    pub title: SimpleText,
    pub roles: Vec<RoleSimple>,
}

impl SectionSimple {
    pub fn new(title: SimpleText, roles: Vec<RoleSimple>) -> Self {
        Self { title, roles }
    }

    pub fn key(&self) -> Name {
        self.title.key()
    }

    /// Role names that occur more than once, each reported once, in order of
    /// their second appearance.
    pub fn duplicate_role_names(&self) -> Vec<Name> {
        let mut seen = Vec::with_capacity(self.roles.len());
        let mut duplicates = Vec::new();
        for role in &self.roles {
            let key = role.key();
            if seen.contains(&key) {
                if !duplicates.contains(&key) {
                    duplicates.push(key);
                }
            } else {
                seen.push(key);
            }
        }
        duplicates
    }

    /// Rejects sections where two roles share a name, since overrides could
    /// not tell them apart.
    pub fn validate_unique_roles(&self) -> Result<(), ConfigurationError> {
        match self.duplicate_role_names().into_iter().next() {
            Some(role) => Err(ConfigurationError::DuplicateRole { section: self.key(), role }),
            None => Ok(()),
        }
    }
}

/// A resolved role, ready to draw.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub role_properties: RoleDefaults,
    pub played_by_names: Vec<StyledText>,
}

impl Role {
    pub fn new(role_properties: RoleDefaults, played_by_names: Vec<StyledText>) -> Self {
        Self { role_properties, played_by_names }
    }
}

/// A resolved section, ready to draw.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub section_properties: SectionDefaults,
    pub roles: Vec<Role>,
}

impl Section {
    pub fn new(section_properties: SectionDefaults, roles: Vec<Role>) -> Self {
        Self { section_properties, roles }
    }
}
