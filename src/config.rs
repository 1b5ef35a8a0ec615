//! Static configuration resolved once at startup.
//!
//! Values come from `NEWSDESK_*` environment variables (a `.env` file is
//! honored via dotenvy in `main`), layered over the defaults below.

use std::sync::LazyLock;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite connection URL, e.g. `sqlite:newsdesk.db`.
    pub database_url: String,
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
    /// Default log filter when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:newsdesk.db".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("NEWSDESK_"))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid NEWSDESK_* environment configuration"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let cfg = Config::default();
        assert_eq!(cfg.database_url, "sqlite:newsdesk.db");
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000");
        assert_eq!(cfg.loglevel, "info");
    }
}
