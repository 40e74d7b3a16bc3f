use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::types::ReferenceMode;

pub const DATA_FILE_NAME: &str = "data.json";
pub const LINKS_FILE_NAME: &str = "links.json";
pub const ASSET_DIR_NAME: &str = "img";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Admin
    pub admin_username: String,
    pub admin_password: String,
    pub session_secret: String,

    // Storage
    pub data_file: PathBuf,
    pub links_file: PathBuf,
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,

    // Web server
    pub web_host: String,
    pub web_port: u16,
    pub site_url: Option<String>,

    // Dashboard
    pub reference_mode: ReferenceMode,
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string()));
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("static"));

        let admin_password =
            env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD environment variable is required")?;
        let session_secret = match env::var("SECRET_KEY") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("SECRET_KEY not set, signing sessions with the admin password");
                admin_password.clone()
            }
        };

        let reference_mode = match env::var("USAGE_MATCH") {
            Ok(raw) => raw
                .parse::<ReferenceMode>()
                .map_err(|e| anyhow::anyhow!("USAGE_MATCH: {e}"))?,
            Err(_) => ReferenceMode::default(),
        };

        Ok(Self {
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password,
            session_secret,
            data_file: data_dir.join(DATA_FILE_NAME),
            links_file: data_dir.join(LINKS_FILE_NAME),
            upload_dir: static_dir.join(ASSET_DIR_NAME),
            static_dir,
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("WEB_PORT must be a number")?,
            site_url: env::var("SITE_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            reference_mode,
        })
    }

    /// Config rooted at `dir`, for tests and local tooling.
    pub fn for_data_dir(dir: &Path, username: &str, password: &str) -> Self {
        let static_dir = dir.join("static");
        Self {
            admin_username: username.to_string(),
            admin_password: password.to_string(),
            session_secret: format!("{password}-session"),
            data_file: dir.join(DATA_FILE_NAME),
            links_file: dir.join(LINKS_FILE_NAME),
            upload_dir: static_dir.join(ASSET_DIR_NAME),
            static_dir,
            web_host: "127.0.0.1".to_string(),
            web_port: 5000,
            site_url: None,
            reference_mode: ReferenceMode::default(),
        }
    }
}
