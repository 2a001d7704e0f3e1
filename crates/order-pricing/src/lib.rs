//! Tiered repeat-customer pricing.
//!
//! Discounts come from a sorted threshold schedule: the highest tier at or
//! below the customer's paid-order count applies, and the discounted total
//! is floored to a whole unit. The schedule ships with sane defaults and
//! can be overridden from configuration.

mod config;
mod error;
mod pricing;

pub use config::{DiscountTier, PricingConfig};
pub use error::PricingError;
pub use pricing::{discount_percent, discounted_price, PricingCalculator};
