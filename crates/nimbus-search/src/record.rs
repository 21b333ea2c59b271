//! Searchable records and the immutable store that holds them.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Result, SearchError, catalog,
    grouper::{GroupedResults, group_by_category},
    matcher::filter_records,
};

/// A single entry in the command palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Display name, unique within a store.
    pub title: String,

    /// One-line summary.
    pub description: String,

    /// Grouping label (e.g. "Brand", "Components").
    pub category: String,

    /// Lower-case match-only tokens, never displayed.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Navigation destination, opaque to the engine.
    pub target: String,
}

impl SearchRecord {
    /// Create a record without keywords.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            keywords: Vec::new(),
            target: target.into(),
        }
    }

    /// Set the match-only keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Immutable, validated list of records backing the command palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<SearchRecord>,
}

impl RecordStore {
    /// Build a store, rejecting records that break the catalog invariants.
    pub fn new(records: Vec<SearchRecord>) -> Result<Self> {
        validate(&records)?;

        let store = Self { records };
        debug!(
            records = store.len(),
            categories = store.search("").len(),
            "loaded search catalog"
        );
        Ok(store)
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        Self {
            records: catalog::builtin_records(),
        }
    }

    /// Parse a store from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<SearchRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a store from a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All records in authoring order.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Iterate over records in authoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `query`, in store order.
    pub fn filter(&self, query: &str) -> Vec<&SearchRecord> {
        let matched = filter_records(query, &self.records);
        trace!(query, matched = matched.len(), "filtered catalog");
        matched
    }

    /// Records matching `query`, grouped by category.
    pub fn search(&self, query: &str) -> GroupedResults<'_> {
        group_by_category(self.filter(query))
    }

    /// Find the record navigating to `target`, ignoring a trailing slash.
    pub fn find_by_target(&self, target: &str) -> Option<&SearchRecord> {
        let wanted = target.trim_end_matches('/');
        self.records
            .iter()
            .find(|r| r.target.trim_end_matches('/') == wanted)
    }
}

fn validate(records: &[SearchRecord]) -> Result<()> {
    let mut titles = HashSet::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.title.trim().is_empty() {
            return Err(SearchError::EmptyTitle { index });
        }
        if !titles.insert(record.title.as_str()) {
            return Err(SearchError::DuplicateTitle(record.title.clone()));
        }
        if record.category.trim().is_empty() {
            return Err(SearchError::EmptyCategory {
                title: record.title.clone(),
            });
        }
        if let Some(keyword) = record.keywords.iter().find(|k| k.to_lowercase() != **k) {
            return Err(SearchError::UnnormalizedKeyword {
                title: record.title.clone(),
                keyword: keyword.clone(),
            });
        }
    }

    Ok(())
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a SearchRecord;
    type IntoIter = std::slice::Iter<'a, SearchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> SearchRecord {
        SearchRecord::new("Button", "Clickable control", "Components", "/components/buttons")
            .with_keywords(["cta", "submit"])
    }

    #[test]
    fn test_store_accepts_valid_records() {
        let colors = SearchRecord::new("Colors", "Palette", "Design", "/design/colors")
            .with_keywords(["palette"]);
        let store = RecordStore::new(vec![button(), colors]).unwrap();

        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.records()[0].title, "Button");
    }

    #[test]
    fn test_store_rejects_duplicate_titles() {
        let err = RecordStore::new(vec![button(), button()]).unwrap_err();
        assert!(matches!(err, SearchError::DuplicateTitle(ref t) if t == "Button"));
    }

    #[test]
    fn test_store_rejects_empty_title() {
        let blank = SearchRecord::new(" ", "x", "Design", "/x");
        let err = RecordStore::new(vec![button(), blank]).unwrap_err();
        assert!(matches!(err, SearchError::EmptyTitle { index: 1 }));
    }

    #[test]
    fn test_store_rejects_empty_category() {
        let orphan = SearchRecord::new("Orphan", "x", "", "/x");
        let err = RecordStore::new(vec![orphan]).unwrap_err();
        assert!(err.to_string().contains("Orphan"));
    }

    #[test]
    fn test_store_rejects_uppercase_keywords() {
        let shouting = SearchRecord::new("Modal", "Dialog", "Components", "/components/modals")
            .with_keywords(["Dialog"]);
        let err = RecordStore::new(vec![shouting]).unwrap_err();
        assert!(matches!(
            err,
            SearchError::UnnormalizedKeyword { ref keyword, .. } if keyword == "Dialog"
        ));
    }

    #[test]
    fn test_store_from_json() {
        let json = r#"[
            {"title": "Button", "description": "Clickable", "category": "Components",
             "keywords": ["cta"], "target": "/components/buttons"},
            {"title": "Colors", "description": "Palette", "category": "Design",
             "target": "/design/colors"}
        ]"#;

        let store = RecordStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.records()[1].keywords.is_empty());
    }

    #[test]
    fn test_store_from_invalid_json() {
        let err = RecordStore::from_json("{not json").unwrap_err();
        assert!(matches!(err, SearchError::Json(_)));
    }

    #[test]
    fn test_store_load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(&vec![button()]).expect("serialize");
        std::fs::write(&path, json).expect("write");

        let store = RecordStore::load(&path).unwrap();
        assert_eq!(store.records(), &[button()]);
    }

    #[test]
    fn test_find_by_target() {
        let store = RecordStore::builtin();
        let found = store.find_by_target("/design/colors/").unwrap();
        assert_eq!(found.title, "Colors");
        assert!(store.find_by_target("/nowhere").is_none());
    }

    #[test]
    fn test_builtin_store_is_valid() {
        let builtin = RecordStore::builtin();
        let validated = RecordStore::new(builtin.records().to_vec()).unwrap();
        assert_eq!(validated, builtin);
        assert_eq!(builtin.len(), 16);
    }
}
