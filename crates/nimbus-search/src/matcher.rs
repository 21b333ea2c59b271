//! Case-insensitive substring matching over search records.
//!
//! Matching is plain substring containment, not tokenized or fuzzy: `"but"`
//! matches `"Button"`. Text is lower-cased with [`str::to_lowercase`]; there is
//! no locale-aware folding, so e.g. `"STRASSE"` does not match `"Straße"`.

use crate::record::SearchRecord;

/// Normalize raw input into a match query.
///
/// Returns `None` when the input is empty after trimming, which means
/// "no filter" rather than "match nothing".
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether `record` matches an already normalized query.
///
/// Keywords are compared as authored; they are lower-case by construction.
pub fn matches(record: &SearchRecord, query: &str) -> bool {
    record.title.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
        || record.category.to_lowercase().contains(query)
        || record.keywords.iter().any(|k| k.contains(query))
}

/// Filter `records` by `query`, preserving their order.
///
/// An empty or whitespace-only query returns every record.
pub fn filter_records<'a>(query: &str, records: &'a [SearchRecord]) -> Vec<&'a SearchRecord> {
    match normalize_query(query) {
        None => records.iter().collect(),
        Some(query) => records.iter().filter(|r| matches(r, &query)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<SearchRecord> {
        vec![
            SearchRecord::new("Button", "Clickable control", "Components", "/components/buttons")
                .with_keywords(["cta", "submit"]),
            SearchRecord::new("Colors", "Brand hues", "Design", "/design/colors")
                .with_keywords(["palette"]),
        ]
    }

    fn titles<'a>(records: &[&'a SearchRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  BuTton "), Some("button".to_string()));
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \t\n"), None);
    }

    #[test]
    fn test_title_substring() {
        let records = sample();
        assert_eq!(titles(&filter_records("but", &records)), vec!["Button"]);
    }

    #[test]
    fn test_keyword_hit() {
        let records = sample();
        assert_eq!(titles(&filter_records("palette", &records)), vec!["Colors"]);
    }

    #[test]
    fn test_description_and_category_hits() {
        let records = sample();
        assert_eq!(titles(&filter_records("hues", &records)), vec!["Colors"]);
        assert_eq!(titles(&filter_records("COMPONENTS", &records)), vec!["Button"]);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let records = sample();
        assert_eq!(titles(&filter_records("", &records)), vec!["Button", "Colors"]);
        assert_eq!(titles(&filter_records("   ", &records)), vec!["Button", "Colors"]);
    }

    #[test]
    fn test_no_match() {
        let records = sample();
        assert!(filter_records("zzz", &records).is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let records = sample();
        assert_eq!(
            filter_records("  cta  ", &records),
            filter_records("cta", &records)
        );
    }

    #[test]
    fn test_keywords_are_not_lowercased() {
        // Keywords are trusted to be lower-case; an upper-case keyword never matches.
        let record = SearchRecord::new("Odd", "x", "Misc", "/odd").with_keywords(["Shout"]);
        assert!(!matches(&record, "shout"));
    }

    #[test]
    fn test_no_locale_folding() {
        let record = SearchRecord::new("Straße", "x", "Misc", "/strasse");
        assert!(matches(&record, "straße"));
        assert!(!matches(&record, "strasse"));
    }
}
