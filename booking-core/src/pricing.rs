//! Pricing cards, the one-time/package toggle and the promo code box.

use serde::{Deserialize, Serialize};

use crate::config::PromoRepeat;
use crate::error::PromoError;

pub const DEFAULT_BASE_PRICE: u32 = 129;
pub const DEFAULT_ONE_TIME_PRICE: &str = "$129";
pub const DEFAULT_PACKAGE_PRICE: &str = "$299";

pub const PROMO_CODES: [&str; 2] = ["FOSSE20", "FOSS20"];
pub const DISCOUNT_LABEL: &str = "-20%";
const DISCOUNT_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingMode {
    #[default]
    #[serde(rename = "one")]
    Single,
    #[serde(rename = "package")]
    Package,
}

impl PricingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "one",
            Self::Package => "package",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCard {
    pub name: String,
    pub one_time: String,
    pub package: String,
}

impl PriceCard {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            one_time: DEFAULT_ONE_TIME_PRICE.to_string(),
            package: DEFAULT_PACKAGE_PRICE.to_string(),
        }
    }

    pub fn with_prices(name: &str, one_time: &str, package: &str) -> Self {
        Self {
            name: name.to_string(),
            one_time: one_time.to_string(),
            package: package.to_string(),
        }
    }

    pub fn price(&self, mode: PricingMode) -> &str {
        match mode {
            PricingMode::Single => &self.one_time,
            PricingMode::Package => &self.package,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoOutcome {
    Applied { total: u32 },
    AlreadyApplied { total: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPanel {
    mode: PricingMode,
    cards: Vec<PriceCard>,
    base_total: u32,
    displayed_total: u32,
    badges: usize,
    promo_invalid: bool,
    repeat: PromoRepeat,
}

impl PricingPanel {
    pub fn new(cards: Vec<PriceCard>, base_total: u32, repeat: PromoRepeat) -> Self {
        Self {
            mode: PricingMode::Single,
            cards,
            base_total,
            displayed_total: base_total,
            badges: 0,
            promo_invalid: false,
            repeat,
        }
    }

    pub fn mode(&self) -> PricingMode {
        self.mode
    }

    pub fn cards(&self) -> &[PriceCard] {
        &self.cards
    }

    /// Price strings for every card under the current mode.
    pub fn prices(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.price(self.mode)).collect()
    }

    pub fn displayed_total(&self) -> u32 {
        self.displayed_total
    }

    pub fn formatted_total(&self) -> String {
        format!("${}", self.displayed_total)
    }

    pub fn badges(&self) -> usize {
        self.badges
    }

    pub fn is_promo_invalid(&self) -> bool {
        self.promo_invalid
    }

    /// Applies server-provided settings. The displayed total follows the new
    /// base unless a discount is already showing.
    pub fn configure(&mut self, base_total: u32, repeat: PromoRepeat) {
        self.base_total = base_total;
        self.repeat = repeat;
        if self.badges == 0 {
            self.displayed_total = base_total;
        }
    }

    /// Returns whether the mode actually changed.
    pub fn set_mode(&mut self, mode: PricingMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn apply_promo(&mut self, code: &str) -> Result<PromoOutcome, PromoError> {
        let normalized = code.trim().to_uppercase();
        if !PROMO_CODES.contains(&normalized.as_str()) {
            self.promo_invalid = true;
            tracing::debug!(code = %normalized, "promo code rejected");
            return Err(PromoError::Unrecognized(code.trim().to_string()));
        }
        self.promo_invalid = false;

        if self.badges > 0 && self.repeat == PromoRepeat::Ignore {
            return Ok(PromoOutcome::AlreadyApplied {
                total: self.displayed_total,
            });
        }

        // Always discounted from the base, so repeats never stack.
        self.displayed_total = discounted(self.base_total);
        self.badges += 1;
        tracing::debug!(total = self.displayed_total, "promo applied");
        Ok(PromoOutcome::Applied {
            total: self.displayed_total,
        })
    }

    /// Ends the invalid flash on the promo input.
    pub fn clear_promo_flag(&mut self) {
        self.promo_invalid = false;
    }
}

impl Default for PricingPanel {
    fn default() -> Self {
        Self::new(
            vec![PriceCard::new("Single workshop"), PriceCard::new("Team seat")],
            DEFAULT_BASE_PRICE,
            PromoRepeat::default(),
        )
    }
}

/// 20% off, rounded to the nearest whole unit.
pub fn discounted(value: u32) -> u32 {
    (f64::from(value) * DISCOUNT_FACTOR).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(repeat: PromoRepeat) -> PricingPanel {
        PricingPanel::new(vec![PriceCard::new("Single")], 129, repeat)
    }

    #[test]
    fn valid_codes_take_twenty_percent_off_the_base() {
        for code in ["FOSSE20", "foss20", "  Fosse20 "] {
            let mut panel = panel(PromoRepeat::Ignore);
            assert_eq!(panel.apply_promo(code), Ok(PromoOutcome::Applied { total: 103 }));
            assert_eq!(panel.formatted_total(), "$103");
            assert_eq!(panel.badges(), 1);
        }
    }

    #[test]
    fn wrong_code_flags_and_keeps_total() {
        let mut panel = panel(PromoRepeat::Ignore);
        assert_eq!(
            panel.apply_promo("WRONG"),
            Err(PromoError::Unrecognized("WRONG".to_string()))
        );
        assert_eq!(panel.displayed_total(), 129);
        assert!(panel.is_promo_invalid());
        assert_eq!(panel.badges(), 0);

        panel.clear_promo_flag();
        assert!(!panel.is_promo_invalid());
    }

    #[test]
    fn repeat_policy_controls_second_application() {
        let mut ignore = panel(PromoRepeat::Ignore);
        ignore.apply_promo("FOSSE20").unwrap();
        assert_eq!(
            ignore.apply_promo("FOSSE20"),
            Ok(PromoOutcome::AlreadyApplied { total: 103 })
        );
        assert_eq!(ignore.badges(), 1);

        let mut reapply = panel(PromoRepeat::Reapply);
        reapply.apply_promo("FOSSE20").unwrap();
        assert_eq!(
            reapply.apply_promo("FOSS20"),
            Ok(PromoOutcome::Applied { total: 103 })
        );
        assert_eq!(
            reapply.apply_promo("FOSSE20"),
            Ok(PromoOutcome::Applied { total: 103 })
        );
        assert_eq!(reapply.badges(), 3);
        assert_eq!(reapply.formatted_total(), "$103");
    }

    #[test]
    fn configure_keeps_an_applied_discount() {
        let mut fresh = panel(PromoRepeat::Ignore);
        fresh.configure(200, PromoRepeat::Ignore);
        assert_eq!(fresh.formatted_total(), "$200");

        let mut applied = panel(PromoRepeat::Ignore);
        applied.apply_promo("FOSSE20").unwrap();
        applied.configure(200, PromoRepeat::Reapply);
        assert_eq!(applied.displayed_total(), 103);
        assert_eq!(
            applied.apply_promo("FOSSE20"),
            Ok(PromoOutcome::Applied { total: 160 })
        );
        assert_eq!(applied.badges(), 2);
    }

    #[test]
    fn mode_switch_swaps_price_strings() {
        let mut panel = PricingPanel::new(
            vec![
                PriceCard::new("Single"),
                PriceCard::with_prices("Team", "$149", "$349"),
            ],
            129,
            PromoRepeat::Ignore,
        );
        assert_eq!(panel.prices(), vec!["$129", "$149"]);
        assert!(panel.set_mode(PricingMode::Package));
        assert_eq!(panel.prices(), vec!["$299", "$349"]);
        assert!(!panel.set_mode(PricingMode::Package));
        assert_eq!(panel.mode().as_str(), "package");
    }
}
