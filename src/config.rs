//! # Configuration
//!
//! [`ShopConfig`] is read from an optional `config/shop.{toml,yaml,json}` file and then from
//! `SHOP__`-prefixed environment variables, later sources winning:
//!
//! ```bash
//! SHOP__MAILBOX_CAPACITY=64 SHOP__LOG_FILTER=debug cargo run
//! ```

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShopConfig {
    /// Channel capacity of every store actor.
    #[serde(default = "default_mailbox_capacity")]
    pub mailbox_capacity: usize,
    /// Default `EnvFilter` directive; `RUST_LOG` overrides it.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Log span open/close events.
    #[serde(default)]
    pub log_span_events: bool,
}

fn default_mailbox_capacity() -> usize {
    32
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: default_mailbox_capacity(),
            log_filter: default_log_filter(),
            log_span_events: false,
        }
    }
}

impl ShopConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config/shop")
    }

    /// Like [`ShopConfig::load`] with a different file name. The file is optional.
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let settings: ShopConfig = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("SHOP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if settings.mailbox_capacity == 0 {
            return Err(config::ConfigError::Message(
                "mailbox_capacity must be at least 1".to_string(),
            ));
        }
        Ok(settings)
    }
}
