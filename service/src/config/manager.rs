use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{ConfigFormat, ConfigSource, FileConfigSource, Validate, YamlConfigFormat};

pub struct ConfigManager<TSource, TConfig, TFormat = YamlConfigFormat>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TFormat: ConfigFormat<TConfig>,
{
    source: TSource,
    format: TFormat,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileConfigSource, TConfig, YamlConfigFormat>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileConfigSource::new(file_path.to_string()), YamlConfigFormat::new())
    }
}

impl<TSource, TConfig, TFormat> ConfigManager<TSource, TConfig, TFormat>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TFormat: ConfigFormat<TConfig>,
{
    pub fn new(source: TSource, format: TFormat) -> Self {
        Self {
            source,
            format,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.source.load()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.format.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.format.serialize(config)?;
        self.source.store(&content)?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}
