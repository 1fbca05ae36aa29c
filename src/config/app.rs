use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_port(env::var("PORT").ok())?;
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
            seed_demo_data,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a `PORT` value, defaulting to 8000 when unset.
fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(value) => value.trim().parse().context("PORT must be a valid port number"),
        None => Ok(8000),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            seed_demo_data: false,
        }
    }
}
