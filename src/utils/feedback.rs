use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode};

/// A single outgoing message produced by the conversation controller.
///
/// The controller never talks to Telegram directly; handlers hand these to
/// a [`ReplySender`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Plain text, no parse mode.
    Text(String),
    /// Text using Telegram's HTML parse mode.
    Html(String),
    /// Plain text with an inline keyboard attached.
    WithKeyboard {
        /// Message body.
        text: String,
        /// Buttons shown under the message.
        keyboard: InlineKeyboardMarkup,
    },
    /// MarkdownV2 text that replaces the message a button was pressed on.
    EditMarkdown(String),
}

impl Reply {
    /// The message body, regardless of how it is delivered.
    pub fn text(&self) -> &str {
        match self {
            Reply::Text(text) | Reply::Html(text) | Reply::EditMarkdown(text) => text,
            Reply::WithKeyboard { text, .. } => text,
        }
    }
}

/// Delivers [`Reply`] values to one chat
pub struct ReplySender {
    bot: Bot,
    chat_id: ChatId,
}

impl ReplySender {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Sends a reply as a new message.
    ///
    /// An [`Reply::EditMarkdown`] with no message to edit is sent fresh.
    pub async fn send(&self, reply: Reply) -> ResponseResult<Message> {
        match reply {
            Reply::Text(text) => self.bot.send_message(self.chat_id, text).await,
            Reply::Html(text) => {
                self.bot
                    .send_message(self.chat_id, text)
                    .parse_mode(ParseMode::Html)
                    .await
            }
            Reply::WithKeyboard { text, keyboard } => {
                self.bot
                    .send_message(self.chat_id, text)
                    .reply_markup(keyboard)
                    .await
            }
            Reply::EditMarkdown(text) => {
                self.bot
                    .send_message(self.chat_id, text)
                    .parse_mode(ParseMode::MarkdownV2)
                    .await
            }
        }
    }

    /// Sends every reply in order, stopping at the first failure.
    pub async fn send_all(&self, replies: Vec<Reply>) -> ResponseResult<()> {
        for reply in replies {
            self.send(reply).await?;
        }
        Ok(())
    }

    /// Replaces the text of `message_id` when the reply is an edit, otherwise
    /// sends it as a new message.
    pub async fn edit_or_send(&self, message_id: MessageId, reply: Reply) -> ResponseResult<Message> {
        match reply {
            Reply::EditMarkdown(text) => {
                self.bot
                    .edit_message_text(self.chat_id, message_id, text)
                    .parse_mode(ParseMode::MarkdownV2)
                    .await
            }
            other => self.send(other).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButton;

    #[test]
    fn test_reply_text_for_every_variant() {
        assert_eq!(Reply::Text("a".into()).text(), "a");
        assert_eq!(Reply::Html("<b>b</b>".into()).text(), "<b>b</b>");
        assert_eq!(Reply::EditMarkdown("*c*".into()).text(), "*c*");

        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            "x", "y",
        )]]);
        let reply = Reply::WithKeyboard {
            text: "d".into(),
            keyboard,
        };
        assert_eq!(reply.text(), "d");
    }
}
