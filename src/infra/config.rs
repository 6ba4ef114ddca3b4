use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::get_env_default;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Origin allowed to call the API from a browser (the landing page).
    pub cors_origin: HeaderValue,
    /// When set, JSON logs are also written to this file.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 5000)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:5000"))
                .parse()
                .map_err(|e| anyhow::anyhow!("CORS_ORIGIN must be a valid header value: {e}"))?;
        let log_file = log_file_path(get_env_default("LOG_FILE", String::new()));

        Ok(Self {
            bind_addr,
            cors_origin,
            log_file,
        })
    }
}

/// An unset or blank `LOG_FILE` disables file logging.
fn log_file_path(raw: String) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}
