use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageId, MessageRef},
    messaging::types::MediaRef,
    Result,
};

/// Cross-messenger port.
///
/// Telegram is the first implementation; the relay core only ever talks
/// through this trait, which also gives tests a seam to record sends.
/// Every call is a single attempt: the relay never retries.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;

    async fn send_photo(&self, chat_id: ChatId, media: &MediaRef) -> Result<MessageRef>;

    async fn send_document(&self, chat_id: ChatId, media: &MediaRef) -> Result<MessageRef>;

    /// Forward an existing message into another chat, preserving its identity.
    async fn forward_message(
        &self,
        to: ChatId,
        from: ChatId,
        message_id: MessageId,
    ) -> Result<MessageRef>;
}
