//! # Site Configuration
//!
//! Shell configuration is compiled into the bundle from `data/site.json` and validated on
//! startup. There is no runtime environment in the browser, so nothing is read from env vars.
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().ok();
//! let config = core_config();
//! assert_eq!(config.scroll_threshold_px, 20.0);
//! ```
//!
//! [`core_config()`] falls back to [`Config::default()`] when [`init_config()`] was never
//! called or failed, so the page always renders.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::scroll::{SCROLL_THRESHOLD_PX, SCROLL_TO_TOP_OFFSET_PX};

const EMBEDDED_SITE: &str = include_str!("../data/site.json");

/// An in-page or outbound link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    /// Fragment target within the page.
    pub fn is_fragment(&self) -> bool {
        self.href.starts_with('#')
    }
}

/// Two-tone wordmark shown in the navbar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub accent: String,
}

/// Shell configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Offset past which the navbar switches to its scrolled chrome.
    pub scroll_threshold_px: f64,

    /// Offset past which the scroll-to-top button appears.
    pub scroll_to_top_offset_px: f64,

    pub brand: Brand,

    /// Desktop and overlay navigation, in display order.
    pub nav_links: Vec<NavLink>,

    /// Desktop call to action.
    pub cta: NavLink,

    /// Outbound messenger contact, opened in a new tab.
    pub contact: NavLink,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            scroll_to_top_offset_px: SCROLL_TO_TOP_OFFSET_PX,
            brand: Brand {
                name: "БАЙ".to_string(),
                accent: "ПРОДАКШН".to_string(),
            },
            nav_links: vec![
                NavLink::new("Главная", "#"),
                NavLink::new("AI Идеи", "#generator"),
                NavLink::new("Форматы", "#formats"),
                NavLink::new("Контакты", "#contact"),
            ],
            cta: NavLink::new("Связаться", "#formats"),
            contact: NavLink::new("Связаться в Telegram", "https://t.me/bai_khairullin"),
        }
    }
}

impl Config {
    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The configuration compiled into the bundle.
    pub fn from_embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SITE)
    }

    /// Validate values the shell relies on.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, value) in [
            ("scroll_threshold_px", self.scroll_threshold_px),
            ("scroll_to_top_offset_px", self.scroll_to_top_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }

        if self.brand.name.trim().is_empty() {
            return Err("brand.name must not be empty".to_string());
        }

        if self.nav_links.is_empty() {
            return Err("nav_links must not be empty".to_string());
        }

        if let Some(link) = self.nav_links.iter().chain([&self.cta]).find(|l| !l.is_fragment()) {
            return Err(format!("'{}' must link to an in-page fragment, got '{}'", link.label, link.href));
        }

        if !self.contact.href.starts_with("https://") {
            return Err(format!("contact must be an https URL, got '{}'", self.contact.href));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load, validate and install the embedded configuration.
///
/// # Errors
///
/// Returns an error if the embedded document does not parse, fails validation, or a
/// configuration has already been installed.
pub fn init_config() -> Result<()> {
    let config = Config::from_embedded()?;
    config.validate().map_err(AppError::Config)?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration, or the defaults if none was installed.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(|| {
        tracing::warn!("config not initialized, using defaults");
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_matches_defaults() {
        let config = Config::from_embedded().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = Config::from_json(r#"{ "scroll_threshold_px": 64 }"#).unwrap();
        assert_eq!(config.scroll_threshold_px, 64.0);
        assert_eq!(config.nav_links.len(), 4);
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let config = Config {
            scroll_threshold_px: -1.0,
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().contains("scroll_threshold_px"));
    }

    #[test]
    fn test_rejects_external_nav_link() {
        let mut config = Config::default();
        config.nav_links.push(NavLink::new("Blog", "https://example.com"));
        assert!(config.validate().unwrap_err().contains("Blog"));
    }

    #[test]
    fn test_rejects_plain_http_contact() {
        let mut config = Config::default();
        config.contact.href = "http://t.me/someone".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_decoding_error() {
        let err = Config::from_json("{ nope").unwrap_err();
        assert_eq!(err.code(), "Decoding");
    }
}
