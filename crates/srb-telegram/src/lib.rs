//! Telegram adapter (teloxide).
//!
//! This crate implements the `srb-core` MessagingPort over the Telegram Bot
//! API and converts teloxide messages into the core inbound model.

use async_trait::async_trait;

use teloxide::{prelude::*, types::InputFile};

pub mod handlers;
pub mod router;

use srb_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{InboundMessage, MediaRef},
    },
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Delivery(format!("telegram error: {e}"))
    }

    fn msg_ref(chat_id: ChatId, msg: &Message) -> MessageRef {
        MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        }
    }
}

/// Map a teloxide message into the core inbound model.
///
/// Photos: Telegram sends sizes in ascending order; the last one is the
/// original-quality rendition, and its `file_unique_id` is what stays stable
/// across forwards (which is what makes reply correlation work).
pub fn inbound_from_message(msg: &Message) -> InboundMessage {
    InboundMessage {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
        text: msg.text().map(str::to_owned),
        caption: msg.caption().map(str::to_owned),
        photo: msg.photo().and_then(|sizes| sizes.last()).map(|p| MediaRef {
            file_id: p.file.id.clone(),
            file_unique_id: p.file.unique_id.clone(),
        }),
        document: msg.document().map(|d| MediaRef {
            file_id: d.file.id.clone(),
            file_unique_id: d.file.unique_id.clone(),
        }),
        audio: msg.audio().map(|a| MediaRef {
            file_id: a.file.id.clone(),
            file_unique_id: a.file.unique_id.clone(),
        }),
        reply_to: msg
            .reply_to_message()
            .map(|q| Box::new(inbound_from_message(q))),
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn send_photo(&self, chat_id: ChatId, media: &MediaRef) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_photo(
                Self::tg_chat(chat_id),
                InputFile::file_id(media.file_id.clone()),
            )
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn send_document(&self, chat_id: ChatId, media: &MediaRef) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_document(
                Self::tg_chat(chat_id),
                InputFile::file_id(media.file_id.clone()),
            )
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(chat_id, &msg))
    }

    async fn forward_message(
        &self,
        to: ChatId,
        from: ChatId,
        message_id: MessageId,
    ) -> Result<MessageRef> {
        let msg = self
            .bot
            .forward_message(
                Self::tg_chat(to),
                Self::tg_chat(from),
                Self::tg_msg_id(message_id),
            )
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(to, &msg))
    }
}
