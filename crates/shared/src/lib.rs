//! Framework-free pieces of the Elite House landing page: configuration,
//! pricing, messaging deep links, scroll reveal state and page copy.

pub mod config;
pub mod contact;
pub mod content;
pub mod pricing;
pub mod reveal;

pub use config::{ConfigError, FileConfig, SiteConfig};
pub use contact::{Channel, ChannelKind, ContactNumber, FALLBACK_WHATSAPP_NUMBER, WHATSAPP_NUMBER_VAR, build_deep_link};
pub use pricing::{BillingPeriod, PricingEntry, get_pricing};
pub use reveal::{REVEAL_THRESHOLD, RevealState};
