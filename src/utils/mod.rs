/// Clock parsing and schedule formatting
pub mod datetime;
/// Reply values and their delivery to Telegram
pub mod feedback;
/// Consistently prefixed log lines
pub mod logging;
/// MarkdownV2 escaping
pub mod markdown;
/// Callback payload and free-text input checks
pub mod validation;
