use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileConfigSource, Validate, YamlConfigFormat};

const CONFIG_FILE_NAME: &str = "xox_service_config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub log_prefix: Option<String>,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix
            && prefix.is_empty()
        {
            return Err("Log prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}

pub fn default_config_manager() -> ConfigManager<FileConfigSource, ServiceConfig, YamlConfigFormat>
{
    ConfigManager::from_yaml_file(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    fn temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_xox_service_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = ServiceConfig {
            log_prefix: Some("GameService".to_string()),
            rng_seed: Some(42),
        };

        let format = YamlConfigFormat::new();
        let serialized = format.serialize(&config).unwrap();
        let deserialized: ServiceConfig = format.deserialize(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_manager() {
        let file_path = temp_file_path();
        let manager: ConfigManager<FileConfigSource, ServiceConfig> =
            ConfigManager::from_yaml_file(&file_path);

        let config = ServiceConfig {
            log_prefix: None,
            rng_seed: Some(7),
        };
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<FileConfigSource, ServiceConfig> =
            ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_missing_file_yields_default_config() {
        let manager: ConfigManager<FileConfigSource, ServiceConfig> =
            ConfigManager::from_yaml_file(&temp_file_path());

        assert_eq!(manager.get_config().unwrap(), ServiceConfig::default());
    }

    #[test]
    fn test_empty_log_prefix_is_rejected() {
        let manager: ConfigManager<FileConfigSource, ServiceConfig> =
            ConfigManager::from_yaml_file(&temp_file_path());

        let config = ServiceConfig {
            log_prefix: Some(String::new()),
            rng_seed: None,
        };
        assert!(manager.set_config(&config).is_err());
    }

    #[test]
    fn test_default_manager_yields_defaults_without_file() {
        let manager = default_config_manager();
        assert_eq!(manager.get_config().unwrap(), ServiceConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let format = YamlConfigFormat::new();
        let config: ServiceConfig = format.deserialize("rng_seed: 123\n").unwrap();

        assert_eq!(config.rng_seed, Some(123));
        assert_eq!(config.log_prefix, None);
    }
}
