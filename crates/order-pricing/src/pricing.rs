//! Discount and price calculation for orders.

use crate::config::PricingConfig;
use crate::error::PricingError;

/// Discount percentage for a customer with `order_count` paid orders.
///
/// The highest tier whose threshold is at or below `order_count` wins.
/// With a schedule that passes [`PricingConfig::validate`] this is total:
/// the base tier starts at zero.
pub fn discount_percent(order_count: u32, config: &PricingConfig) -> u8 {
    config
        .tiers
        .iter()
        .rev()
        .find(|tier| order_count >= tier.min_orders)
        .map(|tier| tier.percent)
        .unwrap_or(0)
}

/// Apply a percentage discount to a base price.
///
/// The discounted total is floored: 99 at 10% off is 89, not 89.1 rounded.
/// Percents above 100 clamp the price to zero.
pub fn discounted_price(base: u64, percent: u8) -> u64 {
    let percent = u64::from(percent.min(100));
    base * (100 - percent) / 100
}

/// Pricing calculator with a validated schedule.
pub struct PricingCalculator {
    config: PricingConfig,
}

impl PricingCalculator {
    /// Create a calculator, rejecting malformed schedules up front.
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Discount percentage for a customer's order count.
    pub fn discount_for(&self, order_count: u32) -> u8 {
        discount_percent(order_count, &self.config)
    }

    /// Final price for a base price and order count.
    pub fn price(&self, base: u64, order_count: u32) -> u64 {
        discounted_price(base, self.discount_for(order_count))
    }
}
