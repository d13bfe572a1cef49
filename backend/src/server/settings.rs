//! Server settings parsed from the environment.
//!
//! Centralises the environment-driven settings so they are validated
//! consistently and can be tested in isolation. Debug builds tolerate
//! missing toggles with a warning; release builds require explicit, valid
//! values.

use std::net::SocketAddr;

use mockable::Env;
use tracing::warn;

const BIND_ADDR_ENV: &str = "BIND_ADDR";
const BIND_ADDR_DEFAULT: &str = "0.0.0.0:8080";
const BIND_ADDR_EXPECTED: &str = "host:port socket address";

/// Build mode for settings validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate defaults and emit warnings for missing toggles.
    Debug,
    /// Release builds require explicit, valid settings.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Validated server settings.
#[derive(Clone, Copy, Debug)]
pub struct ServerSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

/// Errors raised while validating server settings.
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Build server settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use backend::server::{BuildMode, server_settings_from_env};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "BIND_ADDR" => Some("127.0.0.1:9090".to_owned()),
///     _ => None,
/// });
///
/// let settings = server_settings_from_env(&env, BuildMode::Release).expect("valid settings");
/// assert_eq!(settings.bind_addr.port(), 9090);
/// ```
pub fn server_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<ServerSettings, SettingsError> {
    let bind_addr = bind_addr_from_env(env, mode)?;
    Ok(ServerSettings { bind_addr })
}

fn default_bind_addr() -> SocketAddr {
    match BIND_ADDR_DEFAULT.parse() {
        Ok(addr) => addr,
        Err(err) => unreachable!("default bind address must parse: {err}"),
    }
}

fn bind_addr_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<SocketAddr, SettingsError> {
    match env.string(BIND_ADDR_ENV) {
        Some(value) => match value.parse() {
            Ok(addr) => Ok(addr),
            Err(_) => {
                if mode.is_debug() {
                    warn!(value = %value, "invalid BIND_ADDR; using default");
                    Ok(default_bind_addr())
                } else {
                    Err(SettingsError::InvalidEnv {
                        name: BIND_ADDR_ENV,
                        value,
                        expected: BIND_ADDR_EXPECTED,
                    })
                }
            }
        },
        None => {
            if mode.is_debug() {
                warn!("BIND_ADDR not set; using default");
                Ok(default_bind_addr())
            } else {
                Err(SettingsError::MissingEnv {
                    name: BIND_ADDR_ENV,
                })
            }
        }
    }
}
