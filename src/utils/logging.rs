//! Diagnostic logging setup
//!
//! Events go to stderr so stdout carries only the rendered output.
//! `RUST_LOG` wins over the configured level.

use crate::utils::error::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset
pub fn effective_level(debug: bool, configured: &str) -> String {
    if debug {
        "debug".to_string()
    } else {
        configured.to_lowercase()
    }
}

pub fn init_logging(debug: bool, configured: &str) -> AppResult<()> {
    let level = effective_level(debug, configured);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to initialise logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_overrides_config() {
        assert_eq!(effective_level(true, "warn"), "debug");
        assert_eq!(effective_level(false, "INFO"), "info");
    }
}
