//! Asset handles and the capability that hands them out.
//!
//! The core never loads an asset. Fonts, textures, sounds and curves are
//! opaque tokens that the host's asset system produced; the core only compares
//! and passes them on.

mod bind;
mod index;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use bind::BindAssets;
pub use index::AssetIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Font,
    Material,
    Image,
    Audio,
    Curve,
}

impl AssetKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "ttf" | "otf" => Some(Self::Font),
            "mat" => Some(Self::Material),
            "png" | "jpg" | "jpeg" => Some(Self::Image),
            "mp3" | "wav" | "ogg" | "flac" => Some(Self::Audio),
            "curve" | "json" => Some(Self::Curve),
            _ => None,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Font => "font",
            Self::Material => "material",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Curve => "curve",
        };
        f.write_str(name)
    }
}

macro_rules! asset_ref {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const KIND: AssetKind = $kind;

            pub fn new(path: impl Into<String>) -> Self {
                Self(path.into())
            }

            pub fn path(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

asset_ref!(
    /// Font face. Always present on a resolved text style.
    FontRef => AssetKind::Font
);
asset_ref!(MaterialRef => AssetKind::Material);
asset_ref!(ImageRef => AssetKind::Image);
asset_ref!(AudioRef => AssetKind::Audio);
asset_ref!(
    /// Float curve sampled over the credits' running time.
    CurveRef => AssetKind::Curve
);

impl FontRef {
    pub const DEFAULT: &'static str = "Roboto";
}

impl Default for FontRef {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

/// Turns an authored asset path or identifier into a handle.
///
/// `None` means the host has no such asset.
pub trait AssetResolver {
    fn resolve(&self, kind: AssetKind, path: &str) -> Option<String>;

    fn font(&self, path: &str) -> Option<FontRef> {
        self.resolve(AssetKind::Font, path).map(FontRef::new)
    }

    fn material(&self, path: &str) -> Option<MaterialRef> {
        self.resolve(AssetKind::Material, path).map(MaterialRef::new)
    }

    fn image(&self, path: &str) -> Option<ImageRef> {
        self.resolve(AssetKind::Image, path).map(ImageRef::new)
    }

    fn audio(&self, path: &str) -> Option<AudioRef> {
        self.resolve(AssetKind::Audio, path).map(AudioRef::new)
    }

    fn curve(&self, path: &str) -> Option<CurveRef> {
        self.resolve(AssetKind::Curve, path).map(CurveRef::new)
    }
}

/// Accepts every non-blank path unchanged. Used when the host resolves
/// assets itself after the credits are resolved.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughResolver;

impl AssetResolver for PassthroughResolver {
    fn resolve(&self, _kind: AssetKind, path: &str) -> Option<String> {
        let path = path.trim();
        (!path.is_empty()).then(|| path.to_string())
    }
}
