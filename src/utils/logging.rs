use tracing::{error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user_id: u64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_START: {} by user {} - {}", command, user_id, d),
        None => info!("CMD_START: {} by user {}", command, user_id),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user_id: u64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} by user {} - {}", command, user_id, d),
        None => info!("CMD_SUCCESS: {} by user {}", command, user_id),
    }
}

/// Logs a request that ended in a user-facing error message
pub fn log_command_error(command: &str, user_id: u64, error: &str) {
    warn!("CMD_ERROR: {} by user {} - {}", command, user_id, error);
}

/// Logs a failed call to the prayer-times service
pub fn log_upstream_error(operation: &str, error: &str, details: Option<&str>) {
    match details {
        Some(d) => error!("UPSTREAM_ERROR: {} failed: {} - {}", operation, error, d),
        None => error!("UPSTREAM_ERROR: {} failed: {}", operation, error),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
