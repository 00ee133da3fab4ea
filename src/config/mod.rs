//! Configuration module for the portfolio backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::view::PageFeatures;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file holding contact records
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Endpoint of the HTTP mail relay
    pub mail_relay_url: String,
    /// Sender address used for outbound notifications
    pub mail_from: String,
    /// Fixed recipient of every contact notification
    pub mail_to: String,
    /// Directory with the built site, served from `/` when set
    pub static_dir: Option<PathBuf>,
    /// Feature flags selecting the page variant
    pub features: PageFeatures,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("PORTFOLIO_DB_PATH")
            .unwrap_or_else(|_| "./data/contacts.sqlite".to_string())
            .into();

        let bind_addr = env::var("PORTFOLIO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid PORTFOLIO_BIND_ADDR format");

        let log_level = env::var("PORTFOLIO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mail_relay_url = env::var("PORTFOLIO_MAIL_RELAY_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8025/send".to_string());
        let mail_from =
            env::var("PORTFOLIO_MAIL_FROM").unwrap_or_else(|_| "portfolio@localhost".to_string());
        let mail_to =
            env::var("PORTFOLIO_MAIL_TO").unwrap_or_else(|_| "owner@localhost".to_string());

        let static_dir = env::var("PORTFOLIO_STATIC_DIR").ok().map(PathBuf::from);

        let features = PageFeatures {
            particle_background: env_flag("PORTFOLIO_PARTICLES"),
            extended_projects: env_flag("PORTFOLIO_EXTENDED_PROJECTS"),
            extended_contact_form: env_flag("PORTFOLIO_EXTENDED_FORM"),
        };

        Self {
            db_path,
            bind_addr,
            log_level,
            mail_relay_url,
            mail_from,
            mail_to,
            static_dir,
            features,
        }
    }
}

/// Read a boolean flag; `1`, `true`, `yes` and `on` enable it.
fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
