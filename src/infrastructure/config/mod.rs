use crate::domain::joke::Category;
use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://joke.deno.dev";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub data_dir: PathBuf,
    pub default_category: Category,
    pub http_timeout_secs: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            base_url: env::var("JOKES_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            data_dir: env::var("JOKES_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            default_category: env::var("JOKES_DEFAULT_CATEGORY")
                .unwrap_or_else(|_| "general".to_string())
                .parse()
                .map_err(|e| AppError::Config(format!("JOKES_DEFAULT_CATEGORY: {}", e)))?,
            http_timeout_secs: parse_timeout_secs(
                &env::var("JOKES_HTTP_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string()),
            )?,
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_timeout_secs(value: &str) -> AppResult<u64> {
    match value.parse::<u64>() {
        Ok(0) => Err(AppError::Config(
            "JOKES_HTTP_TIMEOUT_SECS: must be greater than zero".to_string(),
        )),
        Ok(secs) => Ok(secs),
        Err(e) => Err(AppError::Config(format!("JOKES_HTTP_TIMEOUT_SECS: {}", e))),
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("jokes"))
        .unwrap_or_else(|| PathBuf::from(".jokes"))
}
