//! Runtime configuration from environment variables

use anyhow::Context;
use drills_compress::CompressionVariant;

pub const STRATEGY_VAR: &str = "DRILLS_STRATEGY";
pub const LOG_VAR: &str = "DRILLS_LOG";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Strategy used by `compress` when none is given on the command line
    pub default_strategy: Option<CompressionVariant>,

    /// Log filter directive used when RUST_LOG is unset
    pub log_directive: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            default_strategy: None,
            log_directive: "warn".to_string(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();

        if let Some(name) = get(STRATEGY_VAR) {
            let variant = name
                .trim()
                .parse::<CompressionVariant>()
                .with_context(|| format!("invalid {}", STRATEGY_VAR))?;
            config.default_strategy = Some(variant);
        }
        if let Some(directive) = get(LOG_VAR) {
            config.log_directive = directive;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
