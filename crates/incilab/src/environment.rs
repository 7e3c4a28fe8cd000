//! Build environment

use std::str::FromStr;

use incilab_common::Error;

/// Base URL used by development builds: the local backend address the web
/// dev server proxies `/api` to.
pub const DEV_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable selecting the build environment.
pub const ENV_VAR: &str = "INCILAB_ENV";

/// Build environment controlling base-URL resolution
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Fixed local backend address; server configuration is ignored
    Development,
    /// Base URL computed from the persisted server configuration
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(Error::Client(format!("unknown environment: {s}"))),
        }
    }
}

impl Environment {
    /// Environment from `INCILAB_ENV`, defaulting to Production.
    pub fn from_env() -> Self {
        std::env::var(ENV_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}
