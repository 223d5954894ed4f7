use std::env;
use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use dotenvy::dotenv;

pub const DEFAULT_REALM: &str = "DS-K1T341AMF";

/// Shared secret of the terminal's digest auth.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("realm", &self.realm)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub credentials: Credentials,
    pub lunch_probability: f64,

    // Rate limiting, 0 disables
    pub rate_search_per_min: u32,

    pub roster_file: Option<PathBuf>,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let password = var("BIOMETRIC_PASSWORD")
            .ok_or_else(|| anyhow!("BIOMETRIC_PASSWORD must be set"))?;

        let lunch_probability: f64 = var("LUNCH_PUNCH_PROBABILITY")
            .unwrap_or_else(|| "0.99".to_string())
            .parse()
            .context("LUNCH_PUNCH_PROBABILITY must be a number")?;
        if !(0.0..=1.0).contains(&lunch_probability) {
            bail!("LUNCH_PUNCH_PROBABILITY must be within [0, 1], got {lunch_probability}");
        }

        Ok(Self {
            server_addr: var("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8035".to_string()),
            credentials: Credentials {
                username: var("BIOMETRIC_USER").unwrap_or_else(|| "admin".to_string()),
                password,
                realm: var("BIOMETRIC_REALM").unwrap_or_else(|| DEFAULT_REALM.to_string()),
            },
            lunch_probability,
            rate_search_per_min: var("RATE_SEARCH_PER_MIN")
                .unwrap_or_else(|| "0".to_string())
                .parse()
                .context("RATE_SEARCH_PER_MIN must be a non-negative integer")?,
            roster_file: var("ROSTER_FILE").map(PathBuf::from),
            log_dir: var("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
        })
    }

    /// Port part of `server_addr`, if it has one.
    pub fn port(&self) -> Option<u16> {
        self.server_addr.rsplit_once(':')?.1.parse().ok()
    }
}
