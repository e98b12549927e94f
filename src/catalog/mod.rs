//! # Catalog
//!
//! Where book data comes from. The rest of the app only sees the
//! [`Catalog`] trait, so the TUI and the reducer never care whether the
//! rows are the fixed placeholder tables or the sample library.
//!
//! ```text
//!                 ┌──────────────────┐
//!                 │  dyn Catalog     │
//!                 └────────┬─────────┘
//!             ┌────────────┴────────────┐
//!             ▼                         ▼
//!   ┌───────────────────┐     ┌───────────────────┐
//!   │ PlaceholderCatalog│     │  SampleCatalog    │
//!   │ (fixed literals)  │     │ (15-book library) │
//!   └───────────────────┘     └───────────────────┘
//! ```

mod placeholder;
mod sample;

pub use placeholder::PlaceholderCatalog;
pub use sample::{DEFAULT_RECOMMENDATION_LIMIT, SampleCatalog};

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One row in a result or recommendation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl BookSummary {
    pub fn new(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
        }
    }
}

/// The book shown in the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
}

/// A source of book data.
///
/// Every method is infallible and synchronous: catalogs are built from
/// literal tables, so there is nothing to wait on and nothing to fail.
pub trait Catalog {
    /// Short name shown in the status bar and logs.
    fn name(&self) -> &str;

    /// Rows for the search table. The query is free text and never rejected.
    fn search(&self, query: &str) -> Vec<BookSummary>;

    /// Expand a selected row into the record shown by the details view.
    fn details(&self, selected: &BookSummary) -> BookDetail;

    /// Rows for the recommendations table, given the book currently viewed (if any).
    fn recommendations(&self, current: Option<&BookDetail>) -> Vec<BookSummary>;
}

/// Which catalog implementation to run with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Fixed tables: every search, detail and recommendation is the same literal.
    #[default]
    Placeholder,
    /// The fifteen-book sample library with substring search and genre recommendations.
    Sample,
}

impl CatalogKind {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Placeholder => "placeholder",
            CatalogKind::Sample => "sample",
        }
    }

    /// Parse a config/env value. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Some(CatalogKind::Placeholder),
            "sample" => Some(CatalogKind::Sample),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build the catalog selected by `kind`.
pub fn build_catalog(kind: CatalogKind, recommendation_limit: usize) -> Box<dyn Catalog> {
    match kind {
        CatalogKind::Placeholder => Box::new(PlaceholderCatalog),
        CatalogKind::Sample => Box::new(SampleCatalog::new(recommendation_limit)),
    }
}
