pub mod callback;
pub mod general_message;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::Command;
use crate::bot::controller::Conversation;

/// Error type shared by every endpoint in the dispatch tree.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

pub struct BotHandler {
    pub conversation: Conversation,
}

impl BotHandler {
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation }
    }

    /// Commands first, then other text messages, then button presses.
    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let conv_commands = self.conversation.clone();
        let conv_text = self.conversation.clone();
        let conv_callback = self.conversation.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let conversation = conv_commands.clone();
                        async move { message::command_handler(bot, msg, cmd, conversation).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| msg.text().is_some())
                    .endpoint(move |bot: Bot, msg: Message| {
                        let conversation = conv_text.clone();
                        async move {
                            general_message::handle_general_message(bot, msg, conversation).await
                        }
                    }),
            )
            .branch(
                Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                    let conversation = conv_callback.clone();
                    async move { callback::callback_handler(bot, q, conversation).await }
                }),
            )
    }
}
