//! Reply formatting and callback decoding for the order bot.
//!
//! Pure string in, string out: the message builders render Telegram-HTML
//! replies from plain values, and the callback parser turns inline-button
//! payloads back into typed payment intents. Sending, localization, and
//! balance lookups stay with the handler layer.

mod callback;
mod format;

pub use callback::{parse_pay_callback, PaymentIntent, PaymentKind};
pub use format::{build_order_summary, build_profile_message};
