mod manager;
mod source;
mod validate;
mod yaml;

pub use manager::ConfigManager;
pub use source::{ConfigSource, FileConfigSource};
pub use validate::Validate;
pub use yaml::{ConfigFormat, YamlConfigFormat};
