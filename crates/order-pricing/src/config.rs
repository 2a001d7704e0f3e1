//! Pricing configuration.

use crate::error::PricingError;
use serde::Deserialize;

/// One row of the discount schedule: customers with at least `min_orders`
/// paid orders earn `percent` off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DiscountTier {
    pub min_orders: u32,
    pub percent: u8,
}

/// Pricing configuration for repeat-customer discounts.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Discount schedule, sorted by ascending threshold.
    /// Default: 0+ orders → 0%, 3+ → 10%, 10+ → 20%.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<DiscountTier>,
}

fn default_tiers() -> Vec<DiscountTier> {
    vec![
        DiscountTier {
            min_orders: 0,
            percent: 0,
        },
        DiscountTier {
            min_orders: 3,
            percent: 10,
        },
        DiscountTier {
            min_orders: 10,
            percent: 20,
        },
    ]
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

impl PricingConfig {
    /// Check that the schedule is total and unambiguous: non-empty, starts
    /// at zero orders, strictly increasing thresholds, percents within 100.
    pub fn validate(&self) -> Result<(), PricingError> {
        let first = self
            .tiers
            .first()
            .ok_or_else(|| PricingError::InvalidSchedule("schedule is empty".into()))?;

        if first.min_orders != 0 {
            return Err(PricingError::InvalidSchedule(
                "first tier must start at 0 orders".into(),
            ));
        }

        for pair in self.tiers.windows(2) {
            if pair[1].min_orders <= pair[0].min_orders {
                return Err(PricingError::InvalidSchedule(format!(
                    "thresholds must be strictly increasing (saw {} after {})",
                    pair[1].min_orders, pair[0].min_orders
                )));
            }
        }

        if let Some(tier) = self.tiers.iter().find(|t| t.percent > 100) {
            return Err(PricingError::InvalidSchedule(format!(
                "discount of {}% exceeds 100%",
                tier.percent
            )));
        }

        Ok(())
    }
}
