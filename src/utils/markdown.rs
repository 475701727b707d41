//! Helpers for Telegram's MarkdownV2 parse mode.
//!
//! Every character in [`MARKDOWN_V2_SPECIAL`] must be backslash-escaped when
//! it is meant literally, including `.` and `-` which appear in almost every
//! sentence and city name.

/// Characters with special meaning in MarkdownV2.
pub const MARKDOWN_V2_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes markdown special characters for MarkdownV2 parsing mode.
///
/// # Example
/// ```
/// use prayer_night_bot::utils::markdown::escape_markdown;
///
/// let escaped = escape_markdown("Al-Ain (UAE).");
/// assert_eq!(escaped, "Al\\-Ain \\(UAE\\)\\.");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if MARKDOWN_V2_SPECIAL.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Escapes `text` and wraps it in MarkdownV2 bold markers.
pub fn bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}
