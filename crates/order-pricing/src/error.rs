//! Pricing error types.

use thiserror::Error;

/// Errors that can occur when loading pricing configuration.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Discount schedule failed validation.
    #[error("Invalid discount schedule: {0}")]
    InvalidSchedule(String),
}
