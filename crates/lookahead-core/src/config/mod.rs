mod dirs;
mod settings;
mod validation;

pub use dirs::Directories;
pub use settings::{Config, ProviderConfig, ProviderKind, SearchConfig};
#[cfg(test)]
pub(crate) use validation::unknown_fields;
pub use validation::warn_unknown_fields;
