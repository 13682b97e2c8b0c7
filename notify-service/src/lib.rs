//! Operator notification delivery over the Telegram Bot API.
//!
//! Endpoint used:
//!   * POST /bot:token/sendMessage

mod errors;
mod telegram;

pub use errors::{NotifyServiceError, NotifyServiceResult};
pub use telegram::TelegramClient;
