//! Check command - validate configuration and the search catalog

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use nimbus_core::Config;
use nimbus_search::RecordStore;

use super::load_store;

/// Validation result.
#[derive(Debug, Default)]
pub struct Report {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and catalog");

    let mut report = Report::default();

    println!("Checking configuration...");
    let config = if config_path.exists() {
        match Config::load_with_env(config_path) {
            Ok(c) => {
                println!("  ✓ Configuration valid");
                Some(c)
            }
            Err(e) => {
                report.add_error(format!("Configuration error: {e}"));
                println!("  ✗ Configuration invalid: {e}");
                None
            }
        }
    } else {
        println!("  ⚠ {} not found, using defaults", config_path.display());
        Some(Config::default())
    };

    if let Some(config) = config {
        println!("\nChecking search catalog...");
        match load_store(&config, config_path, None) {
            Ok(store) => {
                let categories = store.search("").len();
                println!(
                    "  ✓ {} records in {categories} categories",
                    store.len()
                );
                check_records(&store, &mut report);
            }
            Err(e) => {
                report.add_error(format!("Catalog error: {e:#}"));
                println!("  ✗ Catalog invalid: {e:#}");
            }
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", report.errors.len());
    println!("  Warnings: {}", report.warnings.len());

    if report.has_errors() {
        println!();
        println!("Errors:");
        for err in &report.errors {
            println!("  ✗ {err}");
        }
    }

    if report.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &report.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if report.has_errors() {
        bail!("Validation failed with {} error(s)", report.errors.len());
    }

    if strict && report.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            report.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Flag records that load fine but would render poorly.
pub fn check_records(store: &RecordStore, report: &mut Report) {
    for record in store {
        if !record.target.starts_with('/') {
            report.add_warning(format!(
                "'{}': target '{}' should start with '/'",
                record.title, record.target
            ));
        }
        if record.description.trim().is_empty() {
            report.add_warning(format!("'{}': description is empty", record.title));
        }
    }
}
