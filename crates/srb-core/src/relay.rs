use tokio::sync::Mutex;

use crate::{
    admins::AdminSet,
    domain::{ChatId, MessageRef},
    errors::Error,
    history::CorrelationTable,
    messaging::{port::MessagingPort, types::InboundMessage},
    Result,
};

const USER_GREETING: &str = "Hi! You can ask our team any question here. \
We will answer as soon as we can.";

const ADMIN_GREETING: &str = "Hi! You are an administrator of this bot. \
Answer incoming messages with text and/or a picture using Reply. \
This matters: without Reply nobody but you will see the answer. \
When another administrator answers an incoming message, \
the bot will send you a notification.";

const SERVICE_COMMAND_NOTICE: &str = "This is a service command.";

const REPLY_USAGE_REMINDER: &str = "To answer, use Reply on the message with the question.";

const CONTEXT_GONE_NOTICE: &str = "The original question is no longer in the history \
(cleared or overwritten), so the answer was not delivered.";

const UNSUPPORTED_REPLY_NOTICE: &str = "Nothing in that reply can be delivered. \
Answer with text, a picture, or a document.";

const HISTORY_CLEARED_NOTICE: &str = "History cleared.";

/// The router: decides per inbound message whether the sender is an admin or
/// a user, and either stores-and-forwards the question or routes the admin's
/// reply back to whoever asked.
///
/// Owns all mutable state; shared as an `Arc` through the dispatcher. The
/// correlation table sits behind a mutex because teloxide may run handlers
/// concurrently.
pub struct Relay {
    admins: AdminSet,
    history: Mutex<CorrelationTable>,
}

impl Relay {
    pub fn new(admins: AdminSet) -> Self {
        Self {
            admins,
            history: Mutex::new(CorrelationTable::new()),
        }
    }

    pub fn admins(&self) -> &AdminSet {
        &self.admins
    }

    pub fn is_admin(&self, sender: ChatId) -> bool {
        self.admins.contains(sender)
    }

    /// `/start`: canned greeting, admin and user variants. No state mutation.
    pub async fn handle_start(
        &self,
        sender: ChatId,
        messenger: &dyn MessagingPort,
    ) -> Result<()> {
        let text = if self.is_admin(sender) {
            ADMIN_GREETING
        } else {
            USER_GREETING
        };
        messenger.send_text(sender, text).await?;
        Ok(())
    }

    /// `/show_history`: dump the correlation table to the admin. Read-only.
    pub async fn handle_show_history(
        &self,
        sender: ChatId,
        messenger: &dyn MessagingPort,
    ) -> Result<()> {
        if !self.is_admin(sender) {
            messenger.send_text(sender, SERVICE_COMMAND_NOTICE).await?;
            return Ok(());
        }

        let dump = { self.history.lock().await.render() };
        messenger.send_text(sender, &dump).await?;
        Ok(())
    }

    /// `/clear_history`: atomically empty the correlation table.
    pub async fn handle_clear_history(
        &self,
        sender: ChatId,
        messenger: &dyn MessagingPort,
    ) -> Result<()> {
        if !self.is_admin(sender) {
            messenger.send_text(sender, SERVICE_COMMAND_NOTICE).await?;
            return Ok(());
        }

        self.history.lock().await.clear();
        messenger.send_text(sender, HISTORY_CLEARED_NOTICE).await?;
        Ok(())
    }

    /// Everything that is not a known command lands here.
    pub async fn route_incoming(
        &self,
        msg: &InboundMessage,
        messenger: &dyn MessagingPort,
    ) -> Result<()> {
        if self.is_admin(msg.chat_id) {
            self.relay_admin_reply(msg, messenger).await
        } else {
            self.forward_question(msg, messenger).await
        }
    }

    /// A user question: remember who asked, then fan the raw message out to
    /// every admin. Forwards are independent; one failed admin does not stop
    /// the others.
    async fn forward_question(
        &self,
        msg: &InboundMessage,
        messenger: &dyn MessagingPort,
    ) -> Result<()> {
        let key = msg.content_key();
        {
            let mut history = self.history.lock().await;
            history.record(key, msg.chat_id);
        }

        for admin in self.admins.ids() {
            if let Err(e) = messenger
                .forward_message(admin, msg.chat_id, msg.message_id)
                .await
            {
                eprintln!("forward to admin {} failed: {e}", admin.0);
            }
        }
        Ok(())
    }

    /// An admin message: must be a Reply to a forwarded question. Each present
    /// part of the reply (text, photo, caption, document) is delivered to the
    /// asking user as its own message, then the other admins are notified.
    async fn relay_admin_reply(
        &self,
        msg: &InboundMessage,
        messenger: &dyn MessagingPort,
    ) -> Result<()> {
        let Some(question) = msg.reply_to.as_deref() else {
            messenger.send_text(msg.chat_id, REPLY_USAGE_REMINDER).await?;
            return Ok(());
        };

        let qkey = question.content_key();
        let asker = { self.history.lock().await.resolve(&qkey) };
        let asker = match asker {
            Ok(chat) => chat,
            Err(Error::Lookup { .. }) => {
                messenger.send_text(msg.chat_id, CONTEXT_GONE_NOTICE).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        // The last present part wins as the cross-admin summary.
        let mut summary: Option<String> = None;

        if let Some(text) = &msg.text {
            self.deliver(messenger, msg.chat_id, "answer", messenger.send_text(asker, text).await)
                .await;
            summary = Some(text.clone());
        }
        if let Some(photo) = &msg.photo {
            self.deliver(
                messenger,
                msg.chat_id,
                "picture",
                messenger.send_photo(asker, photo).await,
            )
            .await;
            summary = Some("the answer contains a picture".to_string());
        }
        if let Some(caption) = &msg.caption {
            self.deliver(
                messenger,
                msg.chat_id,
                "caption",
                messenger.send_text(asker, caption).await,
            )
            .await;
            summary = Some(format!(
                "the answer contains a picture captioned \"{caption}\""
            ));
        }
        if let Some(document) = &msg.document {
            self.deliver(
                messenger,
                msg.chat_id,
                "document",
                messenger.send_document(asker, document).await,
            )
            .await;
            summary = Some("the answer contains a document".to_string());
        }

        let Some(summary) = summary else {
            messenger
                .send_text(msg.chat_id, UNSUPPORTED_REPLY_NOTICE)
                .await?;
            return Ok(());
        };

        let who = self
            .admins
            .display_name(msg.chat_id)
            .unwrap_or("An administrator");
        let question_label = question.text.clone().unwrap_or(qkey);
        let note =
            format!("{who} answered the question \"{question_label}\". The answer: {summary}");

        for admin in self.admins.others(msg.chat_id) {
            if let Err(e) = messenger.send_text(admin, &note).await {
                eprintln!("notifying admin {} failed: {e}", admin.0);
            }
        }
        Ok(())
    }

    /// Log a failed send and tell the replying admin, without failing the
    /// whole reply. Success and failure are otherwise not inspected.
    async fn deliver(
        &self,
        messenger: &dyn MessagingPort,
        admin: ChatId,
        what: &str,
        outcome: Result<MessageRef>,
    ) {
        if let Err(e) = outcome {
            eprintln!("delivering {what} failed: {e}");
            let _ = messenger
                .send_text(admin, &format!("Could not deliver the {what}: {e}"))
                .await;
        }
    }
}
