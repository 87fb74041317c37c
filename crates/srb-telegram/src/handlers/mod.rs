//! Telegram update handlers.
//!
//! Each handler converts the teloxide message, calls into the `srb-core`
//! relay, and isolates failures: a broken update is logged and swallowed so
//! it never takes the polling loop down.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::router::AppState;

mod commands;
mod relay;

pub async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return commands::handle_command(bot, msg, state).await;
        }
    }

    relay::handle_relay(msg, state).await
}
