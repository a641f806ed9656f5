use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::load());
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub menu_config: MenuConfig,
    pub account_config: AccountConfig,
    pub log_config: LogConfig,
}

/// Ordered list of account menu item ids. Each id names a panel element
/// (`<id>`) and a button element (`<id>_button`) on the account page.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MenuConfig {
    pub items: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AccountConfig {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    pub log_level: String,
    pub log_file: String,
}

impl AppConfig {
    fn default() -> Self {
        AppConfig {
            menu_config: MenuConfig {
                items: vec!["my_posts".to_string(), "account_details".to_string()],
            },
            account_config: AccountConfig {
                username: "guest".to_string(),
                email: "guest@example.com".to_string(),
            },
            log_config: LogConfig {
                log_level: "warn".to_string(),
                log_file: "data/log/postboard.log".to_string(),
            },
        }
    }

    pub fn load() -> Self {
        // Load config from data/config/app_config.toml
        // If the file does not exist, make a new one with default values
        // If parse error, backup the old file and make a new one with default values
        match std::fs::read_to_string("./data/config/app_config.toml") {
            Err(_) => {
                std::fs::create_dir_all("./data/config").unwrap_or_else(|err| {
                    panic!("Failed to create config directory: {}", err);
                });

                let default_config = AppConfig::default();
                std::fs::write(
                    "./data/config/app_config.toml",
                    toml::to_string(&default_config).unwrap(),
                )
                .unwrap();
                default_config
            }
            Ok(content) => toml::from_str(&content).unwrap_or_else(|_| {
                let backup_file = format!(
                    "data/config/app_config.toml.{}.broken",
                    chrono::Local::now().format("%Y%m%d%H%M%S")
                );
                std::fs::rename("./data/config/app_config.toml", &backup_file).unwrap();
                let default_config = AppConfig::default();
                std::fs::write(
                    "./data/config/app_config.toml",
                    toml::to_string(&default_config).unwrap(),
                )
                .unwrap();
                default_config
            }),
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) {
        std::fs::write(
            "data/config/app_config.toml",
            toml::to_string(&self).unwrap(),
        )
        .unwrap();
    }
}
