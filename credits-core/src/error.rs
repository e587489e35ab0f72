use crate::assets::AssetKind;
use crate::model::Name;

/// Problems in authored credits data. Raised when a table or project is
/// built, never during resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("duplicate role override for role '{role}' in section '{section}'")]
    DuplicateRoleOverride { section: Name, role: Name },

    #[error("duplicate name override for '{name}' under role '{role}' in section '{section}'")]
    DuplicateNameOverride { section: Name, role: Name, name: Name },

    #[error("more than one enabled section override")]
    DuplicateSectionOverride,

    #[error("role '{role}' appears more than once in section '{section}'")]
    DuplicateRole { section: Name, role: Name },

    #[error("{kind} asset '{path}' could not be resolved")]
    MissingAsset { kind: AssetKind, path: String },
}
