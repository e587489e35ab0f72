pub mod assets;
pub mod config;
pub mod defaults;
pub mod error;
pub mod manager;
pub mod model;
pub mod overrides;
pub mod resolver;
pub mod settings;

pub use assets::{AssetIndex, AssetResolver, PassthroughResolver};
pub use defaults::StyleDefaults;
pub use error::ConfigurationError;
pub use manager::{CreditsDocument, CreditsProject, ResolvedCredits};
pub use model::{Name, Role, RoleSimple, Section, SectionSimple, SimpleText, StyledText};
pub use overrides::{NameOverride, OverrideTable, RoleOverride, SectionOverride};
pub use resolver::{resolve, Resolver};
pub use settings::{GeneralSettings, MusicCue, QueueMode};
