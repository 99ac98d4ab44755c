use contracts::shared::StoreKey;
use serde::Deserialize;

use crate::shared::storage::PersistedStore;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub navigation: NavigationConfig,
    pub session: SessionConfig,
    pub orders: OrdersConfig,
    pub compare: CompareConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    pub default_page: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub recently_viewed_cap: usize,
    pub notifications_cap: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OrdersConfig {
    pub history_cap: usize,
    pub recent_limit: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CompareConfig {
    pub max_items: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub results_per_search: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "debug"

[navigation]
default_page = "home"

[session]
recently_viewed_cap = 10
notifications_cap = 50

[orders]
history_cap = 20
recent_limit = 3

[compare]
max_items = 3

[catalog]
results_per_search = 8
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            navigation: NavigationConfig::default(),
            session: SessionConfig::default(),
            orders: OrdersConfig::default(),
            compare: CompareConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_page: "home".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            recently_viewed_cap: 10,
            notifications_cap: 50,
        }
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            history_cap: 20,
            recent_limit: 3,
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self { max_items: 3 }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            results_per_search: 8,
        }
    }
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Load configuration
///
/// Search order:
/// 1. TOML document stored under the `appConfig` key (developer override)
/// 2. Embedded default config
pub fn load_config(store: &PersistedStore) -> anyhow::Result<AppConfig> {
    if let Some(contents) = store.get_raw(StoreKey::AppConfig) {
        return AppConfig::from_toml(&contents);
    }
    AppConfig::from_toml(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::testing::memory_store;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let store = memory_store();
        store.set_raw(StoreKey::AppConfig, "[compare]\nmax_items = 4\n[logging]\nlevel = \"warn\"");
        let config = load_config(&store).unwrap();
        assert_eq!(config.compare.max_items, 4);
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.orders.history_cap, 20);
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        let store = memory_store();
        store.set_raw(StoreKey::AppConfig, "[compare\nmax_items = ");
        assert!(load_config(&store).is_err());
    }
}
