//! Per-chat session state for the order flow.
//!
//! The bot keeps one [`SessionData`] per chat while a user configures an
//! order (game, style, language, currency, starting balance). This crate
//! owns the session types plus the small helpers that normalize free-text
//! input and locate prebuilt game artifacts. Persistence of the session
//! itself belongs to the storage layer.

mod artifacts;
mod input;
mod types;

pub use artifacts::library_artifact_path;
pub use input::{
    parse_balance_input, sanitize_currency_input, DEFAULT_CURRENCY, DEFAULT_STARTING_BALANCE,
    MAX_CURRENCY_LENGTH,
};
pub use types::{create_initial_session, OrderConfig, SessionData};
