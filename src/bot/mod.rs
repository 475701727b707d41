/// Bot command declarations
pub mod commands;
/// Transport-independent conversation flow
pub mod controller;
/// teloxide endpoints and the dispatch tree
pub mod handlers;
/// Inline keyboards
pub mod keyboards;
/// Fixed Arabic strings and schedule rendering
pub mod texts;
