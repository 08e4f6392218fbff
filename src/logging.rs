use tracing_subscriber::EnvFilter;

use crate::error::{EcoError, Result};

/// Build the log filter.
///
/// A non-empty `RUST_LOG` is used as given; otherwise the crate logs at
/// `level`.
pub fn env_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            EcoError::InvalidInput(format!("Invalid RUST_LOG '{}': {}", directives, e))
        }),
        None => EnvFilter::try_new(format!("eco_plate_rs={}", level))
            .map_err(|_| EcoError::InvalidInput(format!("Invalid log level: {}", level))),
    }
}

/// Install the stderr subscriber, honouring `RUST_LOG` over `level`.
pub fn init_logging(level: &str) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = env_filter(rust_log.as_deref(), level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
