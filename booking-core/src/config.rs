use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pricing::DEFAULT_BASE_PRICE;

pub const REQUIRE_SCHEDULE_VAR: &str = "BOOKING_REQUIRE_SCHEDULE";
pub const PROMO_REPEAT_VAR: &str = "BOOKING_PROMO_REPEAT";
pub const BASE_PRICE_VAR: &str = "BOOKING_BASE_PRICE";

/// Whether a date and slot must be picked before the form can be submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulePolicy {
    #[default]
    Optional,
    Required,
}

/// What a second valid promo application does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoRepeat {
    /// Already discounted; nothing changes.
    #[default]
    Ignore,
    /// Add another badge; the total is recomputed from the base price.
    Reapply,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub schedule: SchedulePolicy,
    pub promo_repeat: PromoRepeat,
    pub base_price: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            schedule: SchedulePolicy::default(),
            promo_repeat: PromoRepeat::default(),
            base_price: DEFAULT_BASE_PRICE,
        }
    }
}

impl PageConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(REQUIRE_SCHEDULE_VAR) {
            config.schedule = if parse_bool(REQUIRE_SCHEDULE_VAR, &raw)? {
                SchedulePolicy::Required
            } else {
                SchedulePolicy::Optional
            };
        }

        if let Some(raw) = lookup(PROMO_REPEAT_VAR) {
            config.promo_repeat = match raw.trim().to_ascii_lowercase().as_str() {
                "ignore" => PromoRepeat::Ignore,
                "reapply" => PromoRepeat::Reapply,
                _ => {
                    return Err(ConfigError::InvalidPromoRepeat {
                        key: PROMO_REPEAT_VAR,
                        value: raw,
                    })
                }
            };
        }

        if let Some(raw) = lookup(BASE_PRICE_VAR) {
            config.base_price = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                key: BASE_PRICE_VAR,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = PageConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.base_price, 129);
        assert_eq!(config.schedule, SchedulePolicy::Optional);
        assert_eq!(config.promo_repeat, PromoRepeat::Ignore);
    }

    #[test]
    fn reads_every_key() {
        let config = PageConfig::from_lookup(lookup(&[
            (REQUIRE_SCHEDULE_VAR, "true"),
            (PROMO_REPEAT_VAR, "Reapply"),
            (BASE_PRICE_VAR, " 150 "),
        ]))
        .unwrap();
        assert_eq!(config.schedule, SchedulePolicy::Required);
        assert_eq!(config.promo_repeat, PromoRepeat::Reapply);
        assert_eq!(config.base_price, 150);
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(matches!(
            PageConfig::from_lookup(lookup(&[(REQUIRE_SCHEDULE_VAR, "maybe")])),
            Err(ConfigError::InvalidBool { .. })
        ));
        assert!(matches!(
            PageConfig::from_lookup(lookup(&[(BASE_PRICE_VAR, "-3")])),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            PageConfig::from_lookup(lookup(&[(PROMO_REPEAT_VAR, "twice")])),
            Err(ConfigError::InvalidPromoRepeat { .. })
        ));
    }
}
