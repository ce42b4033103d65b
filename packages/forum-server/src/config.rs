//! Server configuration.
//!
//! Sources, later overriding earlier: built-in defaults, optional
//! `forum.toml` in the working directory, `FORUM_*` environment variables.

use serde::Deserialize;

/// Configuration for the forum server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    /// Attach a permissive CORS layer so browser wallets on any origin can call the API.
    #[serde(default = "defaults::allow_any_origin")]
    pub allow_any_origin: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: defaults::bind_address(),
            allow_any_origin: defaults::allow_any_origin(),
        }
    }
}

impl Config {
    /// Load from `forum.toml` (optional) and `FORUM_*` env vars.
    pub fn load() -> Result<Self, crate::Error> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("forum").required(false))
                .add_source(config::Environment::with_prefix("FORUM")),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, crate::Error> {
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| crate::Error::Config(e.to_string()))
    }
}

mod defaults {
    pub fn bind_address() -> String {
        "0.0.0.0:3000".into()
    }

    pub fn allow_any_origin() -> bool {
        true
    }
}
