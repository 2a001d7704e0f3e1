//! Inline-keyboard callback parsing.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which payment flow a callback button refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Single,
    Sub,
}

/// Decoded payment callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    pub order_id: String,
}

/// Decode a `pay_<kind>_<order>` callback token.
///
/// The order id is everything after the kind prefix and may itself contain
/// underscores (`pay_sub_abc_def` refers to order `abc_def`). Tokens that
/// don't match the grammar yield `None`; stray callbacks are expected
/// traffic, not errors.
pub fn parse_pay_callback(data: &str) -> Option<PaymentIntent> {
    let rest = data.strip_prefix("pay_")?;

    let (kind, order_id) = if let Some(order_id) = rest.strip_prefix("single_") {
        (PaymentKind::Single, order_id)
    } else if let Some(order_id) = rest.strip_prefix("sub_") {
        (PaymentKind::Sub, order_id)
    } else {
        debug!("Unrecognized payment callback: {}", data);
        return None;
    };

    if order_id.is_empty() {
        return None;
    }

    Some(PaymentIntent {
        kind,
        order_id: order_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_payment() {
        let intent = parse_pay_callback("pay_single_ord_1").unwrap();
        assert_eq!(intent.kind, PaymentKind::Single);
        assert_eq!(intent.order_id, "ord_1");
    }

    #[test]
    fn test_parse_subscription_keeps_underscores_in_order_id() {
        let intent = parse_pay_callback("pay_sub_abc_def").unwrap();
        assert_eq!(intent.kind, PaymentKind::Sub);
        assert_eq!(intent.order_id, "abc_def");
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(parse_pay_callback("pay_other_1").is_none());
    }

    #[test]
    fn test_parse_rejects_empty_order_id() {
        assert!(parse_pay_callback("pay_single_").is_none());
        assert!(parse_pay_callback("pay_sub_").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert!(parse_pay_callback("invalid").is_none());
        assert!(parse_pay_callback("").is_none());
        assert!(parse_pay_callback("single_ord_1").is_none());
    }

    #[test]
    fn test_intent_serialization() {
        let intent = PaymentIntent {
            kind: PaymentKind::Sub,
            order_id: "ord_9".into(),
        };

        let json = serde_json::to_string(&intent).unwrap();
        assert!(json.contains("\"type\":\"sub\""));
        assert!(json.contains("\"orderId\":\"ord_9\""));

        let back: PaymentIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intent);
    }
}
