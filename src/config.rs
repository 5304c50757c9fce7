use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::DEFAULT_PORT;
use crate::page::{PageContext, ShareText, DEFAULT_SHARE_TEXT};
use crate::share::{WindowFeatures, POPUP_HEIGHT, POPUP_WIDTH};
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_share_text")]
    pub share_text: String,

    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub popup: PopupConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory served under `/static`; `robots.txt` and `images/favicon.ico` are read from it too.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_requests_per_minute")]
    pub requests_per_minute: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupConfig {
    #[serde(default = "default_popup_width")]
    pub width: u32,
    #[serde(default = "default_popup_height")]
    pub height: u32,
}

/// Page shared by the server when a request does not name one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_url")]
    pub url: String,
    #[serde(default = "default_site_title")]
    pub title: String,
}

fn default_share_text() -> String {
    DEFAULT_SHARE_TEXT.to_string()
}

fn default_toast_duration_ms() -> u64 {
    2000
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_popup_width() -> u32 {
    POPUP_WIDTH
}

fn default_popup_height() -> u32 {
    POPUP_HEIGHT
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_requests_per_minute() -> u32 {
    500
}

fn default_site_url() -> String {
    "http://localhost/".to_string()
}

fn default_site_title() -> String {
    "Stand With Iran".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_text: default_share_text(),
            toast_duration_ms: default_toast_duration_ms(),
            port: default_port(),
            popup: PopupConfig::default(),
            site: SiteConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            request_timeout_secs: default_request_timeout_secs(),
            requests_per_minute: default_requests_per_minute(),
        }
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: default_popup_width(),
            height: default_popup_height(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: default_site_url(),
            title: default_site_title(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    pub fn share_text(&self) -> ShareText {
        ShareText::new(self.share_text.clone())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn popup(&self) -> WindowFeatures {
        WindowFeatures::sized(self.popup.width, self.popup.height)
    }

    pub fn site_page(&self) -> PageContext {
        PageContext::new(self.site.url.clone(), self.site.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.share_text, DEFAULT_SHARE_TEXT);
        assert_eq!(config.toast_duration(), Duration::from_millis(2000));
        assert_eq!(config.popup(), WindowFeatures::sized(550, 420));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("share_text"));
        assert!(toml_str.contains("[popup]"));
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let toml_str = r#"
        share_text = "Hello"

        [popup]
        width = 700
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.share_text().as_str(), "Hello");
        assert_eq!(config.popup(), WindowFeatures::sized(700, 420));
        assert_eq!(config.toast_duration_ms, 2000);
        assert_eq!(config.site.title, "Stand With Iran");
        assert_eq!(config.server.requests_per_minute, 500);
        assert_eq!(config.server.request_timeout_secs, 60);
        assert_eq!(config.server.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.toast_duration_ms, 2000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "toast_duration_ms = 500\n[site]\nurl = \"https://example.org/\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.toast_duration(), Duration::from_millis(500));
        assert_eq!(config.site_page().url, "https://example.org/");
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "toast_duration_ms = \"soon\"").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
