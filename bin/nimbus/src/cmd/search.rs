//! Search command - query the command palette catalog from a terminal

use std::{fmt::Write, path::Path};

use color_eyre::eyre::Result;
use nimbus_core::Config;
use nimbus_search::GroupedResults;

use super::{load_config, load_store};

/// Run the search command.
///
/// Joins `terms` with spaces into one query, exactly as typed in the palette.
pub fn run(config_path: &Path, terms: &[String], catalog: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let store = load_store(&config, config_path, catalog)?;

    let query = terms.join(" ");
    tracing::info!(%query, records = store.len(), "Searching catalog");

    let grouped = store.search(&query);
    if json {
        println!("{}", serde_json::to_string_pretty(&grouped)?);
    } else {
        print!("{}", render(&grouped, &config));
    }

    Ok(())
}

/// Render grouped results as category headings followed by indented entries.
pub fn render(grouped: &GroupedResults<'_>, config: &Config) -> String {
    if grouped.is_empty() {
        return "No results found\n".to_string();
    }

    let mut out = String::new();
    for (i, group) in grouped.groups().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", group.category);
        for record in &group.records {
            let _ = writeln!(
                out,
                "  {} — {}",
                record.title,
                config.href_for(&record.target)
            );
        }
    }
    let _ = writeln!(out, "\n{} result(s)", grouped.total());
    out
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use nimbus_search::RecordStore;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_render_groups_with_hrefs() {
        let store = RecordStore::builtin();
        let grouped = store.search("messaging");
        let out = render(&grouped, &Config::default());

        assert!(out.starts_with("Brand\n  Messaging — /brand/messaging/\n"));
        assert!(out.contains("\nPatterns\n  Messaging Patterns — /patterns/messaging/\n"));
        assert!(out.ends_with("2 result(s)\n"));
    }

    #[test]
    fn test_render_applies_base_path() {
        let store = RecordStore::builtin();
        let grouped = store.search("but");
        let mut config = Config::default();
        config.site.base_path = "/nimbus".to_string();
        config.site.trailing_slash = false;

        let out = render(&grouped, &config);
        assert!(out.contains("  Button — /nimbus/components/buttons\n"));
    }

    #[test]
    fn test_render_no_results() {
        let store = RecordStore::builtin();
        let grouped = store.search("zzz");
        assert_eq!(render(&grouped, &Config::default()), "No results found\n");
    }

    #[test]
    fn test_run_with_custom_catalog() {
        let mut catalog = NamedTempFile::new().unwrap();
        write!(
            catalog,
            r#"[{{"title": "Tooltip", "description": "Hover hints", "category": "Components", "target": "/components/tooltip"}}]"#
        )
        .unwrap();

        let missing_config = Path::new("does-not-exist/nimbus.toml");
        let terms = vec!["tool".to_string()];
        assert!(run(missing_config, &terms, Some(catalog.path()), true).is_ok());
    }

    #[test]
    fn test_run_rejects_invalid_catalog() {
        let mut catalog = NamedTempFile::new().unwrap();
        write!(catalog, "not json").unwrap();

        let missing_config = Path::new("does-not-exist/nimbus.toml");
        assert!(run(missing_config, &[], Some(catalog.path()), false).is_err());
    }
}
