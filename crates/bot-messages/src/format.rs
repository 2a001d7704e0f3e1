//! Structured-text builders for bot replies.
//!
//! Replies use Telegram HTML formatting, so labels are wrapped in `<b>`
//! tags. User-facing copy is Russian, matching the bot's audience.

use order_session::{OrderConfig, DEFAULT_CURRENCY, DEFAULT_STARTING_BALANCE};

/// Render the order summary shown before payment.
///
/// Returns `None` until the user has picked a style; language, balance,
/// and currency fall back to their defaults when the flow hasn't set them.
pub fn build_order_summary(config: &OrderConfig) -> Option<String> {
    let theme_id = config.theme_id.as_deref()?;
    let language = config.language.as_deref().unwrap_or("en");
    let balance = config.starting_balance.unwrap_or(DEFAULT_STARTING_BALANCE);
    let currency = config.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);

    Some(format!(
        "<b>Заказ готов:</b>\n\
         <b>Стиль:</b> {}\n\
         <b>Язык:</b> {}\n\
         <b>Баланс:</b> {} {}",
        theme_id, language, balance, currency
    ))
}

/// Render the profile reply: id, paid-order count, wallet balance, and
/// the user's referral link.
pub fn build_profile_message(
    user_id: i64,
    orders_paid: u32,
    wallet_balance: u64,
    bot_username: &str,
) -> String {
    format!(
        "<b>Профиль:</b>\n\
         <b>ID:</b> {}\n\
         <b>Заказы:</b> {}\n\
         <b>Баланс:</b> ${}\n\
         <b>Реф-ссылка:</b> t.me/{}?start={}",
        user_id, orders_paid, wallet_balance, bot_username, user_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_summary_requires_theme() {
        assert!(build_order_summary(&OrderConfig::default()).is_none());
    }

    #[test]
    fn test_order_summary_defaults() {
        let config = OrderConfig {
            theme_id: Some("cyber_city".into()),
            ..Default::default()
        };

        let summary = build_order_summary(&config).unwrap();
        assert!(summary.contains("<b>Стиль:</b> cyber_city"));
        assert!(summary.contains("<b>Язык:</b> en"));
        assert!(summary.contains("<b>Баланс:</b> 1000 $"));
    }

    #[test]
    fn test_order_summary_honors_overrides() {
        let config = OrderConfig {
            theme_id: Some("neon_farm".into()),
            language: Some("de".into()),
            starting_balance: Some(2500),
            currency: Some("€".into()),
            ..Default::default()
        };

        let summary = build_order_summary(&config).unwrap();
        assert!(summary.starts_with("<b>Заказ готов:</b>\n"));
        assert!(summary.contains("<b>Язык:</b> de"));
        assert!(summary.contains("<b>Баланс:</b> 2500 €"));
    }

    #[test]
    fn test_profile_message_fields() {
        let message = build_profile_message(42, 3, 15, "mybot");

        assert!(message.contains("<b>ID:</b> 42"));
        assert!(message.contains("<b>Заказы:</b> 3"));
        assert!(message.contains("<b>Баланс:</b> $15"));
        assert!(message.contains("<b>Реф-ссылка:</b> t.me/mybot?start=42"));
    }

    #[test]
    fn test_profile_message_referral_uses_same_id() {
        let message = build_profile_message(777, 0, 0, "gamegen_bot");
        assert!(message.contains("t.me/gamegen_bot?start=777"));
    }
}
