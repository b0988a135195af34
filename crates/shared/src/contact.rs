//! Contact number resolution and messaging deep links

use serde::Deserialize;

/// Number used when no override is configured at build time
pub const FALLBACK_WHATSAPP_NUMBER: &str = "447922309925";

/// Build-time environment variable carrying the override
pub const WHATSAPP_NUMBER_VAR: &str = "WHATSAPP_NUMBER";

const WHATSAPP_BASE: &str = "https://wa.me/";

/// WhatsApp number in international form, digits only, no leading `+`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Resolve from an optional override, falling back to the stock number.
    /// Blank overrides count as absent.
    pub fn resolve(override_value: Option<&str>) -> Self {
        match override_value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(number) => {
                if !number.bytes().all(|b| b.is_ascii_digit()) {
                    log::warn!("{WHATSAPP_NUMBER_VAR} '{number}' contains non-digits, wa.me links may not open");
                }
                Self(number.to_string())
            }
            None => {
                log::debug!("{WHATSAPP_NUMBER_VAR} not set, using fallback contact number");
                Self(FALLBACK_WHATSAPP_NUMBER.to_string())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContactNumber {
    fn default() -> Self {
        Self(FALLBACK_WHATSAPP_NUMBER.to_string())
    }
}

/// Build a `wa.me` chat link with the message pre-filled
pub fn build_deep_link(number: &ContactNumber, message: &str) -> String {
    format!("{WHATSAPP_BASE}{}?text={}", number.as_str(), urlencoding::encode(message))
}

/// Which messaging app every call to action opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    WhatsApp { number: ContactNumber },
    /// Public channel link. Telegram cannot pre-fill a message into it.
    Telegram { url: String },
}

impl Channel {
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn kind(&self) -> ChannelKind {
        match self {
            Channel::WhatsApp { .. } => ChannelKind::WhatsApp,
            Channel::Telegram { .. } => ChannelKind::Telegram,
        }
    }

    /// Whether `deep_link` puts the message into the link
    pub fn carries_message(&self) -> bool {
        matches!(self, Channel::WhatsApp { .. })
    }

    pub fn deep_link(&self, message: &str) -> String {
        match self {
            Channel::WhatsApp { number } => build_deep_link(number, message),
            Channel::Telegram { url } => url.clone(),
        }
    }
}

impl Default for Channel {
    fn default() -> Self {
        Channel::WhatsApp {
            number: ContactNumber::default(),
        }
    }
}

/// Channel selector as written in `site.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    #[default]
    WhatsApp,
    Telegram,
}

impl ChannelKind {
    pub fn name(self) -> &'static str {
        match self {
            ChannelKind::WhatsApp => "WhatsApp",
            ChannelKind::Telegram => "Telegram",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_param(link: &str) -> &str {
        link.split_once("?text=").map(|(_, text)| text).unwrap()
    }

    #[test]
    fn test_fallback_link_for_hi() {
        let number = ContactNumber::resolve(None);
        assert_eq!(build_deep_link(&number, "Hi"), "https://wa.me/447922309925?text=Hi");
    }

    #[test]
    fn test_blank_override_uses_fallback() {
        assert_eq!(ContactNumber::resolve(Some("")).as_str(), FALLBACK_WHATSAPP_NUMBER);
        assert_eq!(ContactNumber::resolve(Some("   ")).as_str(), FALLBACK_WHATSAPP_NUMBER);
    }

    #[test]
    fn test_override_embedded_verbatim() {
        let number = ContactNumber::resolve(Some("15551234567"));
        assert_ne!(number, ContactNumber::default());

        let link = build_deep_link(&number, "Hello");
        assert_eq!(link, "https://wa.me/15551234567?text=Hello");
    }

    #[test]
    fn test_override_is_not_normalised() {
        // Only surrounding whitespace is dropped
        let number = ContactNumber::resolve(Some(" +44 7000 "));
        assert_eq!(number.as_str(), "+44 7000");
    }

    #[test]
    fn test_link_shape() {
        let number = ContactNumber::default();
        let link = build_deep_link(&number, "Any message at all");

        let rest = link.strip_prefix("https://wa.me/").unwrap();
        let (digits, _) = rest.split_once("?text=").unwrap();
        assert!(!digits.is_empty());
        assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_message_round_trips() {
        let number = ContactNumber::default();
        let messages = [
            "Hi Elite House. I'd like to start the 24-hour free trial. Please share the next steps.",
            "a&b=c?d#e/f+g",
            "100% £ price — ünïcödé 📺",
            "",
        ];

        for message in messages {
            let link = build_deep_link(&number, message);
            let encoded = text_param(&link);
            assert!(!encoded.contains(' '), "unencoded space in {link}");
            assert!(!encoded.contains('&'), "unencoded ampersand in {link}");
            assert_eq!(urlencoding::decode(encoded).unwrap(), message);
        }
    }

    #[test]
    fn test_whatsapp_channel_carries_message() {
        let channel = Channel::default();
        assert!(channel.carries_message());
        assert_eq!(channel.name(), "WhatsApp");
        assert_eq!(channel.deep_link("Hi"), "https://wa.me/447922309925?text=Hi");
    }

    #[test]
    fn test_telegram_channel_returns_fixed_url() {
        let channel = Channel::Telegram {
            url: "https://t.me/elitehouse".to_string(),
        };
        assert!(!channel.carries_message());
        assert_eq!(channel.name(), "Telegram");
        assert_eq!(channel.deep_link("Hi"), "https://t.me/elitehouse");
        assert_eq!(channel.deep_link("something else"), "https://t.me/elitehouse");
    }

    #[test]
    fn test_channel_kind_names() {
        assert_eq!(ChannelKind::default(), ChannelKind::WhatsApp);
        assert_eq!(ChannelKind::WhatsApp.name(), "WhatsApp");
        assert_eq!(ChannelKind::Telegram.name(), "Telegram");
    }
}
