/// HTTP health endpoints
pub mod health;
/// Islamic midnight and sleep-suggestion arithmetic
pub mod night_schedule;
/// Upstream prayer-times client
pub mod prayer_times;
/// Per-user location and pending-selection state
pub mod session_store;
