//! Server configuration read from the environment.
//!
//! `main` loads a `.env` file first (if any) so every variable below can live
//! there during development.

use std::env;
use std::path::PathBuf;

pub const HOST_VAR: &str = "FURNITURE_HOST";
pub const PORT_VAR: &str = "FURNITURE_PORT";
pub const MODEL_PATH_VAR: &str = "FURNITURE_MODEL_PATH";
pub const OPEN_BROWSER_VAR: &str = "FURNITURE_OPEN_BROWSER";
pub const JSON_LIMIT_VAR: &str = "FURNITURE_JSON_LIMIT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MODEL_PATH: &str = "furniture_price_model.json";
const DEFAULT_JSON_LIMIT: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Model artifact loaded once at start-up.
    pub model_path: PathBuf,
    pub open_browser: bool,
    /// Largest accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    /// for absent or blank values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get(PORT_VAR) {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("{} must be a port number, got '{}': {}", PORT_VAR, v, e))?,
            None => DEFAULT_PORT,
        };
        let model_path = get(MODEL_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));
        let open_browser = match get(OPEN_BROWSER_VAR) {
            Some(v) => parse_bool(OPEN_BROWSER_VAR, &v)?,
            None => true,
        };
        let json_limit = match get(JSON_LIMIT_VAR) {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("{} must be a byte count, got '{}': {}", JSON_LIMIT_VAR, v, e))?,
            None => DEFAULT_JSON_LIMIT,
        };

        Ok(Self {
            host,
            port,
            model_path,
            open_browser,
            json_limit,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(format!("{} must be true or false, got '{}'", key, other)),
    }
}
