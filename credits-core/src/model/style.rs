use serde::{Deserialize, Serialize};

use crate::assets::{FontRef, ImageRef, MaterialRef};
use crate::model::Name;

/// Linear RGBA color, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LinearColor {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for LinearColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Inner margin around a text or image block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Only a bottom gap, which is how every stock credits level spaces itself.
    pub const fn bottom(bottom: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, bottom)
    }
}

/// Font settings plus the text they apply to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub text: String,
    pub font: FontRef,
    pub font_material: Option<MaterialRef>,
    pub font_size: u32,
    pub color: LinearColor,
}

impl TextStyle {
    pub const DEFAULT_FONT_SIZE: u32 = 24;

    pub fn new(
        text: impl Into<String>,
        font: FontRef,
        font_material: Option<MaterialRef>,
        font_size: u32,
        color: LinearColor,
    ) -> Self {
        Self { text: text.into(), font, font_material, font_size, color }
    }

    /// Default font, no material, the given size and color, empty text.
    pub fn sized(font_size: u32, color: LinearColor) -> Self {
        Self::new(String::new(), FontRef::default(), None, font_size, color)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::sized(Self::DEFAULT_FONT_SIZE, LinearColor::WHITE)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

impl ImageSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Optional image shown with (or instead of) a text line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageStyle {
    pub image: Option<ImageRef>,
    pub size_override_enabled: bool,
    pub size_override: ImageSize,
}

impl ImageStyle {
    pub fn new(
        image: Option<ImageRef>,
        size_override_enabled: bool,
        size_override: ImageSize,
    ) -> Self {
        Self { image, size_override_enabled, size_override }
    }

    /// The authored image always wins. Its size wins only when the author
    /// explicitly turned the size override on.
    pub fn with_content(&self, authored: &ImageStyle) -> ImageStyle {
        let (size_override_enabled, size_override) = if authored.size_override_enabled {
            (true, authored.size_override)
        } else {
            (self.size_override_enabled, self.size_override)
        };

        ImageStyle {
            image: authored.image.clone(),
            size_override_enabled,
            size_override,
        }
    }
}

/// Fully styled text-or-image unit: role captions, section titles and
/// played-by names all use it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyledText {
    pub text_style: TextStyle,
    pub image_style: ImageStyle,
    pub padding: Padding,
}

impl StyledText {
    pub fn new(text_style: TextStyle, image_style: ImageStyle, padding: Padding) -> Self {
        Self { text_style, image_style, padding }
    }

    /// Keeps this value's styling and takes text and image from `content`.
    pub fn with_content(&self, content: &SimpleText) -> StyledText {
        StyledText {
            text_style: TextStyle {
                text: content.text.clone(),
                ..self.text_style.clone()
            },
            image_style: self.image_style.with_content(&content.image_style),
            padding: self.padding,
        }
    }

    pub fn text(&self) -> &str {
        &self.text_style.text
    }
}

/// What a designer types: the words and an optional image, no styling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleText {
    pub text: String,
    pub image_style: ImageStyle,
}

impl SimpleText {
    pub fn new(text: impl Into<String>, image_style: ImageStyle) -> Self {
        Self { text: text.into(), image_style }
    }

    /// Text only, no image.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, ImageStyle::default())
    }

    /// Identifier overrides use to target this entry.
    pub fn key(&self) -> Name {
        Name::from(self.text.as_str())
    }
}

impl From<&str> for SimpleText {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}
