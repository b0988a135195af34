//! Site configuration
//!
//! `site.toml` is bundled into the binary and parsed once at startup into a
//! [`SiteConfig`], which the page receives explicitly instead of reading
//! globals. The contact number override comes from the build environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::contact::{Channel, ChannelKind, ContactNumber};
use crate::pricing::BillingPeriod;

/// Bundled site configuration
pub const SITE_TOML: &str = include_str!("../site.toml");

const DEFAULT_TRIAL_MESSAGE: &str =
    "Hi Elite House. I'd like to start the 24-hour free trial. Please share the next steps.";

// =============================================================================
// File-based Configuration (site.toml)
// =============================================================================

/// Configuration as written in site.toml
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    pub brand: BrandConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Watermark image path (optional)
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub channel: ChannelKind,
    /// Required when channel = "telegram"
    #[serde(default)]
    pub telegram_url: Option<String>,
    pub trial_message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub default_billing: BillingPeriod,
}

impl FileConfig {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse site.toml")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("contact.channel is \"telegram\" but contact.telegram_url is missing")]
    MissingTelegramUrl,
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Everything the page needs, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub brand_name: String,
    pub title: String,
    pub description: String,
    pub logo: Option<String>,
    pub channel: Channel,
    pub trial_message: String,
    pub default_billing: BillingPeriod,
}

impl SiteConfig {
    /// Build the runtime config from the file config and the number override
    pub fn from_file(file_config: FileConfig, number_override: Option<&str>) -> Result<Self, ConfigError> {
        let channel = match file_config.contact.channel {
            ChannelKind::WhatsApp => Channel::WhatsApp {
                number: ContactNumber::resolve(number_override),
            },
            ChannelKind::Telegram => {
                let url = file_config
                    .contact
                    .telegram_url
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::MissingTelegramUrl)?;
                Channel::Telegram { url }
            }
        };

        Ok(Self {
            brand_name: file_config.brand.name,
            title: file_config.brand.title,
            description: file_config.brand.description,
            logo: file_config.brand.logo.filter(|logo| !logo.is_empty()),
            channel,
            trial_message: file_config.contact.trial_message,
            default_billing: file_config.pricing.default_billing,
        })
    }

    /// Parse TOML text and resolve it
    pub fn load(content: &str, number_override: Option<&str>) -> Result<Self> {
        let file_config = FileConfig::parse(content)?;
        Ok(Self::from_file(file_config, number_override)?)
    }

    /// Parse and resolve, or fall back to the stock WhatsApp page
    pub fn load_or_default(content: &str, number_override: Option<&str>) -> Self {
        match Self::load(content, number_override) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Using default site config: {err:#}");
                Self {
                    channel: Channel::WhatsApp {
                        number: ContactNumber::resolve(number_override),
                    },
                    ..Self::default()
                }
            }
        }
    }

    /// Bundled config, or the stock page if it cannot be loaded
    pub fn bundled_or_default(number_override: Option<&str>) -> Self {
        Self::load_or_default(SITE_TOML, number_override)
    }

    /// Pre-filled trial request link used by every call to action
    pub fn trial_link(&self) -> String {
        self.channel.deep_link(&self.trial_message)
    }

    /// Trial message the visitor has to send by hand, when the link cannot carry it
    pub fn manual_message(&self) -> Option<&str> {
        (!self.channel.carries_message()).then_some(self.trial_message.as_str())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Elite House".to_string(),
            title: "Elite House | Premium Television Done Properly".to_string(),
            description: "Elite House delivers a polished, dependable subscription with priority support.".to_string(),
            logo: None,
            channel: Channel::default(),
            trial_message: DEFAULT_TRIAL_MESSAGE.to_string(),
            default_billing: BillingPeriod::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TELEGRAM_TOML: &str = r#"
        [brand]
        name = "Elite House"
        title = "Elite House"
        description = "Premium television"

        [contact]
        channel = "telegram"
        telegram_url = "https://t.me/elitehouse"
        trial_message = "Hi"
    "#;

    #[test]
    fn test_bundled_config_parses() {
        let config = SiteConfig::load(SITE_TOML, None).unwrap();
        assert_eq!(config.brand_name, "Elite House");
        assert_eq!(config.default_billing, BillingPeriod::SixMonth);
        assert_eq!(config.channel, Channel::default());
        assert_eq!(config.logo, None);
    }

    #[test]
    fn test_bundled_trial_link_uses_fallback_number() {
        let config = SiteConfig::load(SITE_TOML, None).unwrap();
        let link = config.trial_link();
        assert!(link.starts_with("https://wa.me/447922309925?text=Hi%20Elite%20House."));
    }

    #[test]
    fn test_number_override_reaches_link() {
        let config = SiteConfig::load(SITE_TOML, Some("15550001111")).unwrap();
        assert!(config.trial_link().starts_with("https://wa.me/15550001111?text="));
    }

    #[test]
    fn test_telegram_channel() {
        let config = SiteConfig::load(TELEGRAM_TOML, Some("15550001111")).unwrap();
        assert_eq!(config.channel.name(), "Telegram");
        assert_eq!(config.trial_link(), "https://t.me/elitehouse");
        // No [pricing] table: default selection applies
        assert_eq!(config.default_billing, BillingPeriod::SixMonth);
    }

    #[test]
    fn test_trial_message_surfaced_only_when_link_drops_it() {
        let whatsapp = SiteConfig::load(SITE_TOML, None).unwrap();
        assert_eq!(whatsapp.manual_message(), None);

        let telegram = SiteConfig::load(TELEGRAM_TOML, None).unwrap();
        assert_eq!(telegram.manual_message(), Some("Hi"));
    }

    #[test]
    fn test_telegram_without_url_is_rejected() {
        let toml = TELEGRAM_TOML.replace("telegram_url = \"https://t.me/elitehouse\"", "");
        let file_config = FileConfig::parse(&toml).unwrap();
        assert_eq!(
            SiteConfig::from_file(file_config, None),
            Err(ConfigError::MissingTelegramUrl)
        );
    }

    #[test]
    fn test_unknown_billing_is_a_parse_error() {
        let toml = format!("{TELEGRAM_TOML}\n[pricing]\ndefault_billing = \"weekly\"\n");
        assert!(SiteConfig::load(&toml, None).is_err());
    }

    #[test]
    fn test_default_billing_from_file() {
        let toml = format!("{TELEGRAM_TOML}\n[pricing]\ndefault_billing = \"annual\"\n");
        let config = SiteConfig::load(&toml, None).unwrap();
        assert_eq!(config.default_billing, BillingPeriod::Annual);
    }

    #[test]
    fn test_broken_file_falls_back_to_default() {
        assert!(SiteConfig::load("not = [valid", None).is_err());

        let fallback = SiteConfig::load_or_default("not = [valid", Some("15550001111"));
        assert_eq!(fallback.brand_name, "Elite House");
        assert!(fallback.trial_link().starts_with("https://wa.me/15550001111?text=Hi%20Elite%20House."));
    }

    #[test]
    fn test_misconfigured_telegram_falls_back_to_whatsapp() {
        let toml = TELEGRAM_TOML.replace("telegram_url = \"https://t.me/elitehouse\"", "");
        let config = SiteConfig::load_or_default(&toml, None);
        assert_eq!(config.channel, Channel::default());
    }
}
