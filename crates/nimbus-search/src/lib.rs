//! Nimbus Search Library
//!
//! The engine behind the site's command palette.
//!
//! # Features
//!
//! - **Record store**: immutable, validated list of searchable pages
//! - **Query matcher**: case-insensitive substring filter over title,
//!   description, category and keywords
//! - **Result grouper**: partitions matches by category in first-seen order
//!
//! # Example
//!
//! ```
//! use nimbus_search::RecordStore;
//!
//! let store = RecordStore::builtin();
//!
//! // An empty query browses the whole catalog
//! assert_eq!(store.filter("   ").len(), store.len());
//!
//! // Matches are grouped by category for display
//! let grouped = store.search("but");
//! assert_eq!(grouped.categories().collect::<Vec<_>>(), vec!["Components"]);
//! ```

pub mod catalog;
pub mod grouper;
pub mod matcher;
pub mod record;

pub use grouper::{GroupedResults, ResultGroup, group_by_category};
pub use matcher::{filter_records, matches, normalize_query};
pub use record::{RecordStore, SearchRecord};
use thiserror::Error;

/// Errors raised while building a record store.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A record has an empty title.
    #[error("Record #{index} has an empty title")]
    EmptyTitle { index: usize },

    /// Two records share a title.
    #[error("Duplicate record title: {0}")]
    DuplicateTitle(String),

    /// A record has an empty category.
    #[error("Record '{title}' has an empty category")]
    EmptyCategory { title: String },

    /// A keyword was not lower-cased at authoring time.
    #[error("Record '{title}' has keyword '{keyword}' that is not lower-case")]
    UnnormalizedKeyword { title: String, keyword: String },

    /// Catalog JSON could not be parsed.
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
