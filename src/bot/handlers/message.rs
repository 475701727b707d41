use teloxide::prelude::*;

use crate::bot::commands::Command;
use crate::bot::controller::Conversation;
use crate::bot::handlers::HandlerResult;
use crate::utils::feedback::ReplySender;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    conversation: Conversation,
) -> HandlerResult {
    let sender = ReplySender::new(bot, msg.chat.id);

    let Some(user) = msg.from() else {
        tracing::debug!("Ignoring {:?} without a sender in chat {}", cmd, msg.chat.id.0);
        return Ok(());
    };

    let replies = match cmd {
        Command::Start => conversation.start(user.id, &user.first_name),
        Command::Help => conversation.help(user.id),
        Command::Times => conversation.times(user.id).await,
    };

    sender.send_all(replies).await?;
    Ok(())
}
