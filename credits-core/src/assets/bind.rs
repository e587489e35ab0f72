use crate::assets::{AssetKind, AssetResolver, CurveRef};
use crate::defaults::StyleDefaults;
use crate::error::ConfigurationError;
use crate::model::{
    ImageStyle, RoleDefaults, RoleSimple, SectionDefaults, SectionSimple, SimpleText, StyledText,
    TextStyle,
};
use crate::overrides::{NameOverride, OverrideTable, RoleOverride, SectionOverride};
use crate::settings::{GeneralSettings, MusicCue};

/// Re-maps every asset handle in a value through an [`AssetResolver`].
///
/// Fonts and music are required: failing to resolve them is a
/// [`ConfigurationError::MissingAsset`]. Materials, images and curves are
/// optional and are dropped with a warning instead.
pub trait BindAssets: Sized {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError>;
}

fn missing(kind: AssetKind, path: &str) -> ConfigurationError {
    ConfigurationError::MissingAsset { kind, path: path.to_string() }
}

fn optional<H>(kind: AssetKind, path: &str, found: Option<H>) -> Option<H> {
    if found.is_none() {
        log::warn!("Optional {} asset '{}' not found, leaving it unset.", kind, path);
    }
    found
}

impl<T: BindAssets> BindAssets for Vec<T> {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        self.iter().map(|item| item.bind_assets(assets)).collect()
    }
}

impl BindAssets for TextStyle {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        let font = assets
            .font(self.font.path())
            .ok_or_else(|| missing(AssetKind::Font, self.font.path()))?;
        let font_material = self
            .font_material
            .as_ref()
            .and_then(|m| optional(AssetKind::Material, m.path(), assets.material(m.path())));

        Ok(TextStyle { font, font_material, ..self.clone() })
    }
}

impl BindAssets for ImageStyle {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        let image = self
            .image
            .as_ref()
            .and_then(|i| optional(AssetKind::Image, i.path(), assets.image(i.path())));

        Ok(ImageStyle { image, ..self.clone() })
    }
}

impl BindAssets for StyledText {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(StyledText {
            text_style: self.text_style.bind_assets(assets)?,
            image_style: self.image_style.bind_assets(assets)?,
            padding: self.padding,
        })
    }
}

impl BindAssets for SimpleText {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(SimpleText {
            text: self.text.clone(),
            image_style: self.image_style.bind_assets(assets)?,
        })
    }
}

impl BindAssets for RoleDefaults {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(RoleDefaults { role: self.role.bind_assets(assets)?, ..self.clone() })
    }
}

impl BindAssets for SectionDefaults {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(SectionDefaults { title: self.title.bind_assets(assets)?, ..self.clone() })
    }
}

impl BindAssets for RoleSimple {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(RoleSimple {
            role: self.role.bind_assets(assets)?,
            display_role_name: self.display_role_name,
            played_by: self.played_by.bind_assets(assets)?,
        })
    }
}

impl BindAssets for SectionSimple {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(SectionSimple {
            title: self.title.bind_assets(assets)?,
            roles: self.roles.bind_assets(assets)?,
        })
    }
}

impl BindAssets for SectionOverride {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(SectionOverride::new(self.data.bind_assets(assets)?))
    }
}

impl BindAssets for RoleOverride {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(RoleOverride { data: self.data.bind_assets(assets)?, ..self.clone() })
    }
}

impl BindAssets for NameOverride {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(NameOverride { data: self.data.bind_assets(assets)?, ..self.clone() })
    }
}

impl BindAssets for OverrideTable {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        OverrideTable::new(
            self.section_override().bind_assets(assets)?,
            self.is_section_override_enabled(),
            self.role_overrides().to_vec().bind_assets(assets)?,
            self.name_overrides().to_vec().bind_assets(assets)?,
        )
    }
}

impl BindAssets for StyleDefaults {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        Ok(StyleDefaults {
            section: self.section.bind_assets(assets)?,
            role: self.role.bind_assets(assets)?,
            name: self.name.bind_assets(assets)?,
        })
    }
}

impl BindAssets for GeneralSettings {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        let bind_curve = |curve: &Option<CurveRef>| {
            curve
                .as_ref()
                .and_then(|c| optional(AssetKind::Curve, c.path(), assets.curve(c.path())))
        };

        Ok(GeneralSettings {
            speed_curve: bind_curve(&self.speed_curve),
            opacity_curve: bind_curve(&self.opacity_curve),
            volume_curve: bind_curve(&self.volume_curve),
            ..self.clone()
        })
    }
}

impl BindAssets for MusicCue {
    fn bind_assets(&self, assets: &dyn AssetResolver) -> Result<Self, ConfigurationError> {
        let audio = assets
            .audio(self.audio.path())
            .ok_or_else(|| missing(AssetKind::Audio, self.audio.path()))?;

        Ok(MusicCue { audio, ..self.clone() })
    }
}
