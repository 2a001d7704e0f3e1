//! Session and order configuration types.

use serde::{Deserialize, Serialize};

/// Order configuration accumulated while a user walks the order flow.
///
/// Every field starts unset and is filled in step by step by the bot's
/// conversation handlers. Persisted as JSON by the storage layer, so the
/// field names keep the camelCase form the rest of the stack expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_balance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_id: Option<String>,
}

impl OrderConfig {
    /// Whether the user has picked a style yet.
    pub fn has_theme(&self) -> bool {
        self.theme_id.is_some()
    }
}

/// Per-chat session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub config: OrderConfig,
}

/// Create a fresh session with an empty order configuration.
///
/// Each call returns an owned value, so mutating one caller's session
/// never affects another's.
pub fn create_initial_session() -> SessionData {
    SessionData::default()
}
