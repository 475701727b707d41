use teloxide::prelude::*;

use crate::bot::controller::Conversation;
use crate::bot::handlers::HandlerResult;
use crate::utils::feedback::ReplySender;

/// Any text that is not a known command: a city name, or something we
/// answer with guidance.
pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
    conversation: Conversation,
) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let text = msg.text().unwrap_or_default();

    let replies = conversation.receive_text(user.id, text).await;
    ReplySender::new(bot, msg.chat.id).send_all(replies).await?;
    Ok(())
}
