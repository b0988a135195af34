mod backdrop;
mod cta;
mod epg;
mod pricing;
mod reveal;
mod section;

pub use backdrop::Backdrop;
pub use cta::{ChannelIcon, ShimmerButton};
pub use epg::EpgMock;
pub use pricing::{PricingCard, PricingToggle};
pub use reveal::Reveal;
pub use section::{Card, Section, SectionTitle};
