//! Static page copy: feature cards, FAQ, onboarding steps, EPG mock data

use crate::contact::Channel;

/// Placeholder replaced with the configured messaging app name
pub const CHANNEL_PLACEHOLDER: &str = "{channel}";

/// Substitute the channel name into a copy template
pub fn with_channel(template: &str, channel_name: &str) -> String {
    template.replace(CHANNEL_PLACEHOLDER, channel_name)
}

pub fn cta_label(channel_name: &str) -> String {
    format!("Start Trial on {channel_name}")
}

pub struct FeatureCard {
    pub heading: &'static str,
    pub body: &'static str,
    pub footer: &'static str,
    /// Reveal delay in milliseconds
    pub delay_ms: u32,
}

pub static FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        heading: "Members-Only Live Access",
        body: "Worldwide live television, organised clearly and presented cleanly.",
        footer: "Live access, delivered reliably.",
        delay_ms: 100,
    },
    FeatureCard {
        heading: "Private Film & Series Library",
        body: "Over 100,000 films and series available instantly. Browse smoothly. Press play confidently.",
        footer: "A library for those who expect more.",
        delay_ms: 200,
    },
    FeatureCard {
        heading: "Direct Support",
        body: "{channel} assistance handled quickly and personally. Setup, upgrades and support, streamlined.",
        footer: "Support reserved for active members.",
        delay_ms: 300,
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    /// Replaces `answer` when the channel link cannot carry the trial message
    pub manual_answer: Option<&'static str>,
}

impl FaqEntry {
    /// Answer text for the configured channel, placeholder substituted
    pub fn answer_for(&self, channel: &Channel) -> String {
        let template = match self.manual_answer {
            Some(manual) if !channel.carries_message() => manual,
            _ => self.answer,
        };
        with_channel(template, channel.name())
    }
}

pub static FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I start the 24-hour trial?",
        answer: "Tap any {channel} button and send the pre-filled message. We'll reply with setup steps.",
        manual_answer: Some("Tap any {channel} button and message us that you'd like the 24-hour trial. We'll reply with setup steps."),
    },
    FaqEntry {
        question: "Which devices does it work on?",
        answer: "Most popular streaming platforms are supported. If you're unsure, ask us on {channel}.",
        manual_answer: None,
    },
    FaqEntry {
        question: "Can I upgrade my plan later?",
        answer: "Yes. Message us anytime and we'll upgrade you seamlessly. Quick, simple, and handled via {channel}.",
        manual_answer: None,
    },
    FaqEntry {
        question: "How quickly will you reply?",
        answer: "Support is handled directly through {channel}, so responses are typically fast, personal, and effortless.",
        manual_answer: None,
    },
];

pub static ONBOARDING_STEPS: &[&str] = &["Message us on {channel}", "Trial activated", "Start watching"];

// =============================================================================
// EPG mock
// =============================================================================

/// Width of one 30-minute slot in pixels
pub const EPG_SLOT_WIDTH: u32 = 120;

/// Programme blocks span three slots
pub const EPG_BLOCK_SLOTS: u32 = 3;

/// Horizontal position of the "now" line, as a CSS percentage
pub const EPG_NOW_LEFT: &str = "52.5%";

/// (row, block) highlighted as currently airing
pub const EPG_NOW_BLOCK: (usize, usize) = (2, 1);

pub static EPG_TIMELINE: &[&str] = &[
    "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30", "22:00", "22:30", "23:00", "23:30",
];

pub struct EpgRow {
    pub channel_number: &'static str,
    pub abbr: &'static str,
    pub name: &'static str,
    pub blocks: [&'static str; 4],
}

pub static EPG_ROWS: &[EpgRow] = &[
    EpgRow {
        channel_number: "101",
        abbr: "VC",
        name: "Velour Cinema",
        blocks: [
            "10,000+ Live Channels",
            "100,000+ Video On Demand",
            "4K Ultra HD Streaming",
            "Seamless channel playback",
        ],
    },
    EpgRow {
        channel_number: "102",
        abbr: "AS",
        name: "Apex Sports",
        blocks: [
            "LIVE Championship",
            "All channels working perfectly",
            "Zero missing listings",
            "Reliable premium streaming",
        ],
    },
    EpgRow {
        channel_number: "103",
        abbr: "NV",
        name: "Nova Vista",
        blocks: [
            "Instant access",
            "Precision programme guide data",
            "Smooth browsing experience",
            "Consistent presentation",
        ],
    },
    EpgRow {
        channel_number: "104",
        abbr: "OR",
        name: "Orion Discovery",
        blocks: [
            "Fast {channel} setup",
            "Clean channel lineup",
            "Stable playback",
            "Support when you need it",
        ],
    },
    EpgRow {
        channel_number: "105",
        abbr: "LX",
        name: "Luxe Kids",
        blocks: [
            "Family-ready experience",
            "Clear titles & logos",
            "No broken channels",
            "Premium reliability",
        ],
    },
];

/// Total width of one pass of the timeline
pub fn epg_programme_width() -> u32 {
    EPG_TIMELINE.len() as u32 * EPG_SLOT_WIDTH
}

/// Blocks mentioning a live event get a LIVE pill
pub fn is_live(block: &str) -> bool {
    block.to_uppercase().contains("LIVE")
}

pub fn is_now_block(row: usize, block: usize) -> bool {
    (row, block) == EPG_NOW_BLOCK
}

// =============================================================================
// Background particles
// =============================================================================

/// (x %, y %, radius, animation duration in seconds)
pub static PARTICLE_SEEDS: &[(f64, f64, f64, f64)] = &[
    (8.0, 18.0, 1.2, 16.0),
    (22.0, 62.0, 1.6, 20.0),
    (35.0, 28.0, 1.1, 18.0),
    (44.0, 78.0, 1.4, 26.0),
    (58.0, 14.0, 1.0, 22.0),
    (66.0, 52.0, 1.7, 30.0),
    (74.0, 32.0, 1.2, 24.0),
    (82.0, 70.0, 1.3, 28.0),
    (90.0, 24.0, 1.1, 19.0),
    (12.0, 84.0, 1.5, 32.0),
    (28.0, 8.0, 1.0, 21.0),
    (52.0, 88.0, 1.2, 34.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Diameter in pixels
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

/// Expand the seeds into render-ready particles, staggering their start
pub fn particles() -> Vec<Particle> {
    PARTICLE_SEEDS
        .iter()
        .enumerate()
        .map(|(i, &(x, y, r, duration))| Particle {
            x,
            y,
            size: r * 6.0,
            duration,
            delay: (i as f64 * 0.7) % 5.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telegram() -> Channel {
        Channel::Telegram {
            url: "https://t.me/elitehouse".to_string(),
        }
    }

    #[test]
    fn test_with_channel() {
        assert_eq!(with_channel("Message us on {channel}", "Telegram"), "Message us on Telegram");
        assert_eq!(with_channel("Trial activated", "WhatsApp"), "Trial activated");
    }

    #[test]
    fn test_cta_label() {
        assert_eq!(cta_label("WhatsApp"), "Start Trial on WhatsApp");
    }

    #[test]
    fn test_copy_mentions_configured_channel_only() {
        let all_copy = FAQ
            .iter()
            .flat_map(|f| [f.question, f.answer].into_iter().chain(f.manual_answer))
            .chain(FEATURE_CARDS.iter().flat_map(|c| [c.heading, c.body, c.footer]))
            .chain(ONBOARDING_STEPS.iter().copied())
            .chain(EPG_ROWS.iter().flat_map(|r| r.blocks));

        for text in all_copy {
            let rendered = with_channel(text, "Telegram");
            assert!(!rendered.contains("WhatsApp"), "hardcoded channel in '{text}'");
            assert!(!rendered.contains('{'), "unreplaced placeholder in '{text}'");
        }
    }

    #[test]
    fn test_telegram_faq_never_promises_prefilled_message() {
        let channel = telegram();
        for entry in FAQ {
            let answer = entry.answer_for(&channel);
            assert!(!answer.to_lowercase().contains("pre-filled"), "'{answer}'");
            assert!(!answer.contains('{'), "unreplaced placeholder in '{answer}'");
        }
        assert!(FAQ[0].answer_for(&channel).starts_with("Tap any Telegram button"));
    }

    #[test]
    fn test_whatsapp_faq_keeps_prefilled_wording() {
        let answer = FAQ[0].answer_for(&Channel::default());
        assert_eq!(
            answer,
            "Tap any WhatsApp button and send the pre-filled message. We'll reply with setup steps."
        );
    }

    #[test]
    fn test_feature_card_delays_stagger() {
        let delays: Vec<u32> = FEATURE_CARDS.iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![100, 200, 300]);
    }

    #[test]
    fn test_timeline_is_half_hourly() {
        assert_eq!(EPG_TIMELINE.len(), 12);
        assert_eq!(EPG_TIMELINE.first(), Some(&"18:00"));
        assert_eq!(EPG_TIMELINE.last(), Some(&"23:30"));
        assert_eq!(epg_programme_width(), 1440);
    }

    #[test]
    fn test_is_live() {
        assert!(is_live("LIVE Championship"));
        assert!(is_live("10,000+ Live Channels"));
        assert!(!is_live("Stable playback"));
    }

    #[test]
    fn test_now_block() {
        assert!(is_now_block(2, 1));
        assert!(!is_now_block(1, 2));
        assert_eq!(EPG_ROWS[EPG_NOW_BLOCK.0].blocks[EPG_NOW_BLOCK.1], "Precision programme guide data");
    }

    #[test]
    fn test_particles() {
        let particles = particles();
        assert_eq!(particles.len(), PARTICLE_SEEDS.len());

        assert_eq!(particles[0].delay, 0.0);
        assert!((particles[1].size - 9.6).abs() < 1e-9);
        assert!((particles[3].delay - 2.1).abs() < 1e-9);

        // 8 * 0.7 = 5.6 wraps around
        assert!((particles[8].delay - 0.6).abs() < 1e-9);
        assert!(particles.iter().all(|p| (0.0..5.0).contains(&p.delay)));
    }
}
