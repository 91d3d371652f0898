use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::contact::delivery::DEFAULT_EMAILJS_API_URL;
use crate::contact::EmailJsCredentials;
use crate::shell::Theme;

/// Upper bound for `TOAST_DURATION_MS`; the page hands it to `setTimeout`.
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to `Config::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub static_dir: PathBuf,
    pub theme: Theme,
    pub emailjs_api_url: String,
    pub emailjs: EmailJsCredentials,
    pub emailjs_timeout_secs: u64,
    pub toast_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            static_dir: PathBuf::from("public"),
            theme: Theme::Light,
            emailjs_api_url: DEFAULT_EMAILJS_API_URL.to_string(),
            emailjs: EmailJsCredentials {
                service_id: EmailJsCredentials::PLACEHOLDER_SERVICE_ID.to_string(),
                template_id: EmailJsCredentials::PLACEHOLDER_TEMPLATE_ID.to_string(),
                public_key: EmailJsCredentials::PLACEHOLDER_PUBLIC_KEY.to_string(),
            },
            emailjs_timeout_secs: 15,
            toast_duration_ms: 5_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let parse_u64 = |key: &str, default: u64| -> Result<u64> {
            match lookup(key) {
                Some(raw) => raw
                    .parse::<u64>()
                    .with_context(|| format!("{key} must be a non-negative integer")),
                None => Ok(default),
            }
        };

        let toast_duration_ms = parse_u64("TOAST_DURATION_MS", defaults.toast_duration_ms)?;
        if !(1..=MAX_TOAST_DURATION_MS).contains(&toast_duration_ms) {
            bail!("TOAST_DURATION_MS must be between 1 and {MAX_TOAST_DURATION_MS}");
        }

        Ok(Config {
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            theme: match lookup("SITE_THEME") {
                Some(raw) => raw.parse::<Theme>().map_err(|e| anyhow!("SITE_THEME: {e}"))?,
                None => defaults.theme,
            },
            emailjs_api_url: lookup("EMAILJS_API_URL").unwrap_or(defaults.emailjs_api_url),
            emailjs: EmailJsCredentials {
                service_id: lookup("EMAILJS_SERVICE_ID").unwrap_or(defaults.emailjs.service_id),
                template_id: lookup("EMAILJS_TEMPLATE_ID")
                    .unwrap_or(defaults.emailjs.template_id),
                public_key: lookup("EMAILJS_PUBLIC_KEY").unwrap_or(defaults.emailjs.public_key),
            },
            emailjs_timeout_secs: parse_u64("EMAILJS_TIMEOUT_SECS", defaults.emailjs_timeout_secs)?,
            toast_duration_ms,
        })
    }
}
