//! Nimbus Core Library
//!
//! Site configuration and error handling shared by the Nimbus design library
//! crates, the site frontend and the `nimbus` CLI.

pub mod config;
pub mod error;

pub use config::{ClipboardConfig, Config, SearchConfig, SiteConfig};
pub use error::{CoreError, Result};
