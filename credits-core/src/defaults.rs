use serde::{Deserialize, Serialize};

use crate::model::{LinearColor, Padding, RoleDefaults, SectionDefaults, StyledText, TextStyle};

/// Baseline styling for each level of the credits tree, used wherever no
/// override matches.
///
/// Loaded from the `[defaults]` config section; anything left out there falls
/// back to the stock look below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    pub section: SectionDefaults,
    pub role: RoleDefaults,
    pub name: StyledText,
}

impl StyleDefaults {
    pub const NAME_COLOR: LinearColor = LinearColor::rgb(0.9, 0.9, 0.9);
    pub const NAME_PADDING: Padding = Padding::bottom(10.0);

    pub fn new(section: SectionDefaults, role: RoleDefaults, name: StyledText) -> Self {
        Self { section, role, name }
    }

    /// Stock look of a played-by name.
    pub fn name_text() -> StyledText {
        StyledText {
            text_style: TextStyle::sized(TextStyle::DEFAULT_FONT_SIZE, Self::NAME_COLOR),
            padding: Self::NAME_PADDING,
            ..StyledText::default()
        }
    }
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            section: SectionDefaults::default(),
            role: RoleDefaults::default(),
            name: Self::name_text(),
        }
    }
}
