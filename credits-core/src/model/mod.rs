//! Credits value types.
//!
//! Two parallel trees share the same Section → Role → Name shape: the
//! *simple* tree is what a designer types (text and images only), the
//! resolved tree carries full styling and is what the presentation layer
//! draws. Every type is a plain value with public fields; `Default` gives the
//! designer-facing baseline and `new` takes every field explicitly.

mod hierarchy;
mod name;
mod style;

pub use hierarchy::{
    Role, RoleDefaults, RoleSimple, Section, SectionDefaults, SectionSimple, StartingPosition,
    TextPosition,
};
pub use name::Name;
pub use style::{ImageSize, ImageStyle, LinearColor, Padding, SimpleText, StyledText, TextStyle};
