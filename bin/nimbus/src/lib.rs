//! Nimbus CLI Library
//!
//! Command implementations for the `nimbus` developer CLI.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (search, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use nimbus::cmd;
//!
//! // Query the catalog configured in nimbus.toml
//! cmd::search::run(Path::new("nimbus.toml"), &["button".to_string()], None, false).unwrap();
//! ```

pub mod cmd;

pub use nimbus_core::Config;
pub use nimbus_search::RecordStore;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
