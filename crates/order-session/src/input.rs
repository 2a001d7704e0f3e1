//! Normalization of free-text user input from the order flow.

/// Starting balance used when the user skips the balance step.
pub const DEFAULT_STARTING_BALANCE: u64 = 1000;

/// Currency label used when the user skips the currency step.
pub const DEFAULT_CURRENCY: &str = "$";

/// Longest currency label we accept.
pub const MAX_CURRENCY_LENGTH: usize = 5;

/// Sanitize a user-supplied currency label.
///
/// Whitespace-only input falls back to [`DEFAULT_CURRENCY`]; anything else
/// is trimmed and truncated to `max_len` characters.
pub fn sanitize_currency_input(input: &str, max_len: usize) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_CURRENCY.to_string();
    }
    trimmed.chars().take(max_len).collect()
}

/// Parse a starting-balance amount out of free text.
///
/// Non-digit characters are ignored, so "2 500 $" parses as 2500. Missing,
/// zero, or overflowing amounts fall back to `fallback`.
pub fn parse_balance_input(input: &str, fallback: u64) -> u64 {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(n) if n > 0 => n,
        _ => fallback,
    }
}
