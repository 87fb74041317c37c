use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::inbound_from_message;
use crate::router::AppState;

pub async fn handle_relay(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let inbound = inbound_from_message(&msg);

    if let Err(e) = state
        .relay
        .route_incoming(&inbound, state.messenger.as_ref())
        .await
    {
        eprintln!(
            "routing message {} from chat {} failed: {e}",
            inbound.message_id.0, inbound.chat_id.0
        );
    }
    Ok(())
}
