use teloxide::prelude::*;

use crate::bot::controller::Conversation;
use crate::bot::handlers::HandlerResult;
use crate::utils::feedback::ReplySender;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    conversation: Conversation,
) -> HandlerResult {
    // Stop the button's loading spinner before anything else
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    tracing::info!(
        "Callback received: '{}' from user {} ({})",
        data,
        q.from.id.0,
        q.from.username.as_deref().unwrap_or("unknown")
    );

    let Some(reply) = conversation.select_country(q.from.id, data).await else {
        return Ok(());
    };

    match q.message.as_ref() {
        Some(message) => {
            ReplySender::new(bot, message.chat.id)
                .edit_or_send(message.id, reply)
                .await?;
        }
        None => {
            // Inline-mode message: no chat to edit, fall back to a DM
            ReplySender::new(bot, ChatId::from(q.from.id))
                .send(reply)
                .await?;
        }
    }

    Ok(())
}
