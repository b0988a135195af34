//! Membership pricing table

use serde::Deserialize;
use std::fmt;

/// Renewal cadence a visitor can pick on the pricing toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Monthly,
    #[default]
    SixMonth,
    Annual,
}

/// Display strings for one billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingEntry {
    pub price: &'static str,
    pub note: &'static str,
    pub savings: Option<&'static str>,
}

const MONTHLY: PricingEntry = PricingEntry {
    price: "£14.99",
    note: "per month",
    savings: None,
};

const SIX_MONTH: PricingEntry = PricingEntry {
    price: "£60",
    note: "every 6 months",
    savings: Some("Save £29.94"),
};

const ANNUAL: PricingEntry = PricingEntry {
    price: "£100",
    note: "per year",
    savings: Some("Save £79.88"),
};

/// Look up the pricing entry for a billing period
pub fn get_pricing(period: BillingPeriod) -> &'static PricingEntry {
    match period {
        BillingPeriod::Monthly => &MONTHLY,
        BillingPeriod::SixMonth => &SIX_MONTH,
        BillingPeriod::Annual => &ANNUAL,
    }
}

impl BillingPeriod {
    /// Toggle order, left to right
    pub const ALL: [BillingPeriod; 3] = [BillingPeriod::Monthly, BillingPeriod::SixMonth, BillingPeriod::Annual];

    /// Key as written in `site.toml`
    pub fn key(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::SixMonth => "sixmonth",
            BillingPeriod::Annual => "annual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::SixMonth => "6 Months",
            BillingPeriod::Annual => "1 Year",
        }
    }

    /// Highlight pill shown next to the label on the toggle
    pub fn badge(self) -> Option<&'static str> {
        match self {
            BillingPeriod::Annual => Some("Best Value"),
            _ => None,
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_period_has_price_and_note() {
        for period in BillingPeriod::ALL {
            let entry = get_pricing(period);
            assert!(!entry.price.is_empty(), "{period} has no price");
            assert!(!entry.note.is_empty(), "{period} has no note");
        }
    }

    #[test]
    fn test_only_monthly_has_no_savings() {
        assert_eq!(get_pricing(BillingPeriod::Monthly).savings, None);
        assert!(get_pricing(BillingPeriod::SixMonth).savings.is_some());
        assert!(get_pricing(BillingPeriod::Annual).savings.is_some());
    }

    #[test]
    fn test_six_month_entry() {
        let entry = get_pricing(BillingPeriod::SixMonth);
        assert_eq!(entry.price, "£60");
        assert_eq!(entry.note, "every 6 months");
        assert_eq!(entry.savings, Some("Save £29.94"));
    }

    #[test]
    fn test_annual_entry() {
        let entry = get_pricing(BillingPeriod::Annual);
        assert_eq!(entry.price, "£100");
        assert_eq!(entry.note, "per year");
        assert_eq!(entry.savings, Some("Save £79.88"));
    }

    #[test]
    fn test_default_selection_is_six_month() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::SixMonth);
    }

    #[test]
    fn test_labels_and_badge() {
        assert_eq!(BillingPeriod::Monthly.label(), "Monthly");
        assert_eq!(BillingPeriod::SixMonth.label(), "6 Months");
        assert_eq!(BillingPeriod::Annual.label(), "1 Year");

        assert_eq!(BillingPeriod::Annual.badge(), Some("Best Value"));
        assert_eq!(BillingPeriod::Monthly.badge(), None);
        assert_eq!(BillingPeriod::SixMonth.badge(), None);
    }

    #[derive(Deserialize)]
    struct Selection {
        billing: BillingPeriod,
    }

    #[test]
    fn test_keys_match_config_format() {
        for period in BillingPeriod::ALL {
            let selection: Selection = toml::from_str(&format!("billing = \"{period}\"")).unwrap();
            assert_eq!(selection.billing, period);
        }
    }

    #[test]
    fn test_config_rejects_unknown_key() {
        assert!(toml::from_str::<Selection>("billing = \"weekly\"").is_err());

        // Keys are case-sensitive
        assert!(toml::from_str::<Selection>("billing = \"Annual\"").is_err());
    }
}
