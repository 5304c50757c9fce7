pub mod encode;
pub mod links;

pub use links::{build_share_link, build_share_links, ShareLink};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Popup size used for the platforms that open as a small dialog.
pub const POPUP_WIDTH: u32 = 550;
pub const POPUP_HEIGHT: u32 = 420;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[value(alias = "x")]
    Twitter,
    Facebook,
    #[value(name = "whatsapp")]
    WhatsApp,
    Telegram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::WhatsApp,
        Platform::Telegram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::WhatsApp => "whatsapp",
            Platform::Telegram => "telegram",
        }
    }

    /// Twitter and Facebook open as a sized popup; the others use the host default.
    pub fn opens_as_popup(&self) -> bool {
        matches!(self, Platform::Twitter | Platform::Facebook)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(Platform::Twitter),
            "facebook" => Ok(Platform::Facebook),
            "whatsapp" => Ok(Platform::WhatsApp),
            "telegram" => Ok(Platform::Telegram),
            other => Err(format!("Unknown platform '{other}'")),
        }
    }
}

/// Dimensions requested for the new browsing context. `None` means host default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl WindowFeatures {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn popup() -> Self {
        Self::sized(POPUP_WIDTH, POPUP_HEIGHT)
    }

    pub fn is_default(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

impl fmt::Display for WindowFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(width) = self.width {
            parts.push(format!("width={width}"));
        }
        if let Some(height) = self.height {
            parts.push(format!("height={height}"));
        }
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("twitter".parse::<Platform>(), Ok(Platform::Twitter));
        assert_eq!("X".parse::<Platform>(), Ok(Platform::Twitter));
        assert_eq!(" WhatsApp ".parse::<Platform>(), Ok(Platform::WhatsApp));
        assert_eq!("telegram".parse::<Platform>(), Ok(Platform::Telegram));
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_cli_and_from_str_accept_same_names() {
        for name in ["twitter", "x", "facebook", "whatsapp", "telegram"] {
            let parsed: Platform = name.parse().unwrap();
            assert_eq!(<Platform as ValueEnum>::from_str(name, true), Ok(parsed));
        }
    }

    #[test]
    fn test_platform_display_roundtrips() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn test_popup_platforms() {
        assert!(Platform::Twitter.opens_as_popup());
        assert!(Platform::Facebook.opens_as_popup());
        assert!(!Platform::WhatsApp.opens_as_popup());
        assert!(!Platform::Telegram.opens_as_popup());
    }

    #[test]
    fn test_window_features_display() {
        assert_eq!(WindowFeatures::popup().to_string(), "width=550,height=420");
        assert_eq!(WindowFeatures::default().to_string(), "");
        assert!(WindowFeatures::default().is_default());
    }

    #[test]
    fn test_platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::WhatsApp).unwrap();
        assert_eq!(json, "\"whatsapp\"");
    }
}
