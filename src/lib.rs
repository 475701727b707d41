//! # Prayer Night Bot
//!
//! A Telegram bot that looks up the day's prayer times for a chosen city
//! and derives the night schedule from them.
//!
//! ## Features
//! - Country selection by inline buttons, city by free text
//! - Night duration between Maghrib and the next Fajr
//! - Islamic midnight as a wake-up suggestion
//! - Start of the last sixth of the night as a sleep suggestion
//! - `/times` re-runs the lookup for the saved location
//! - In-memory sessions, HTTP health endpoints

/// Bot commands, conversation flow and Telegram handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Prayer-times client, schedule arithmetic, session state, health
pub mod services;
/// Utility functions for datetime, validation, and formatting
pub mod utils;
