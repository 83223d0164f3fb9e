use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ConfigParsingError;

/// Environment variables with this prefix override file values, `__` separates nesting levels
pub const ENV_PREFIX: &str = "ORG_";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

/// Merged configuration. `core` is read by the services, `app` by the hosting binary.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom> {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default)]
    pub members: MembersConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersConfig {
    /// Upper bound of `pageSize` accepted by the member listing
    pub max_page_size: u32,
}

impl Default for MembersConfig {
    fn default() -> Self {
        Self { max_page_size: 100 }
    }
}

enum ConfigSource {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl ConfigSource {
    fn from_path(path: &Path) -> Result<Self, ConfigParsingError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "config_yaml")]
            Some("yml" | "yaml") => Ok(Self::Yaml(Yaml::file(path))),
            #[cfg(feature = "config_json")]
            Some("json") => Ok(Self::Json(Json::file(path))),
            _ => Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported config file: {}",
                path.display()
            ))),
        }
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    /// Merges the files in order, later files override earlier ones.
    /// `ORG_`-prefixed environment variables are applied last when `config_env` is enabled.
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let sources = files
            .iter()
            .map(|path| ConfigSource::from_path(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::merge(sources)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let sources = configs
            .into_iter()
            .map(|config| ConfigSource::Yaml(Yaml::string(config.as_ref())));

        Self::merge(sources)
    }

    fn merge(sources: impl IntoIterator<Item = ConfigSource>) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for source in sources {
            figment = match source {
                #[cfg(feature = "config_yaml")]
                ConfigSource::Yaml(data) => figment.merge(data),
                #[cfg(feature = "config_json")]
                ConfigSource::Json(data) => figment.merge(data),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(false));
        }

        figment
            .extract()
            .map_err(|error| ConfigParsingError::GeneralParsingError(error.to_string()))
    }
}
