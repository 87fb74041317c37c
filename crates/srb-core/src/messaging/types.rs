use crate::domain::{ChatId, MessageId};

/// An attachment, as the platform identifies it.
///
/// `file_id` is what the platform accepts for re-sending; `file_unique_id`
/// is stable across forwards and bots, which makes it usable as a
/// correlation key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRef {
    pub file_id: String,
    pub file_unique_id: String,
}

/// Cross-messenger incoming message model.
///
/// Telegram-specific field access lives in the Telegram adapter; the relay
/// core only sees this shape.
#[derive(Clone, Debug, Default)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub text: Option<String>,
    pub caption: Option<String>,
    pub photo: Option<MediaRef>,
    pub document: Option<MediaRef>,
    pub audio: Option<MediaRef>,
    pub reply_to: Option<Box<InboundMessage>>,
}

impl InboundMessage {
    /// Derive the correlation key for this message.
    ///
    /// Precedence: text, else photo, else document, else audio (stable media
    /// ids for the latter three). Empty string when none apply.
    pub fn content_key(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        if let Some(photo) = &self.photo {
            return photo.file_unique_id.clone();
        }
        if let Some(document) = &self.document {
            return document.file_unique_id.clone();
        }
        if let Some(audio) = &self.audio {
            return audio.file_unique_id.clone();
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(unique: &str) -> MediaRef {
        MediaRef {
            file_id: format!("send-{unique}"),
            file_unique_id: unique.to_string(),
        }
    }

    #[test]
    fn text_wins_over_media() {
        let msg = InboundMessage {
            text: Some("hi".to_string()),
            photo: Some(media("p1")),
            ..Default::default()
        };
        assert_eq!(msg.content_key(), "hi");
    }

    #[test]
    fn media_precedence_is_photo_document_audio() {
        let msg = InboundMessage {
            photo: Some(media("p1")),
            document: Some(media("d1")),
            audio: Some(media("a1")),
            ..Default::default()
        };
        assert_eq!(msg.content_key(), "p1");

        let msg = InboundMessage {
            document: Some(media("d1")),
            audio: Some(media("a1")),
            ..Default::default()
        };
        assert_eq!(msg.content_key(), "d1");

        let msg = InboundMessage {
            audio: Some(media("a1")),
            ..Default::default()
        };
        assert_eq!(msg.content_key(), "a1");
    }

    #[test]
    fn caption_alone_does_not_produce_a_key() {
        let msg = InboundMessage {
            caption: Some("just a caption".to_string()),
            ..Default::default()
        };
        assert_eq!(msg.content_key(), "");
    }
}
