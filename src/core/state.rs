//! # Application State
//!
//! Core state for the book browser. Domain data only: no TUI types.
//! Selection highlights, focus and scroll positions live in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Box<dyn Catalog>           // where rows come from
//! ├── view: ViewState                     // the one active panel
//! ├── query: String                       // last submitted search
//! ├── results: Vec<BookSummary>           // search table rows
//! ├── current: Option<BookDetail>         // book in the details view
//! ├── recommendations: Vec<BookSummary>   // recommendation table rows
//! ├── status_message: String              // status bar text
//! └── live_search: bool                   // search on every keystroke
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::info;

use crate::catalog::{BookDetail, BookSummary, Catalog, build_catalog};
use crate::core::config::ResolvedConfig;

/// The single active panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Search,
    Details,
    Recommendations,
}

impl ViewState {
    /// Tab order, left to right.
    pub const ALL: [ViewState; 3] = [
        ViewState::Search,
        ViewState::Details,
        ViewState::Recommendations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Search => "Book Search",
            ViewState::Details => "Book Details",
            ViewState::Recommendations => "Recommendations",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ViewState::Search => 0,
            ViewState::Details => 1,
            ViewState::Recommendations => 2,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which table a row index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Results,
    Recommendations,
}

pub struct App {
    pub catalog: Box<dyn Catalog>,
    pub view: ViewState,
    pub query: String,
    pub results: Vec<BookSummary>,
    /// None until a row has been opened.
    pub current: Option<BookDetail>,
    pub recommendations: Vec<BookSummary>,
    pub status_message: String,
    pub live_search: bool,
}

impl App {
    /// Creates the app with the search table already showing every book the
    /// catalog returns for an empty query.
    pub fn new(catalog: Box<dyn Catalog>) -> Self {
        let results = catalog.search("");
        info!(
            "Starting with {} catalog, {} initial rows",
            catalog.name(),
            results.len()
        );
        Self {
            catalog,
            view: ViewState::Search,
            query: String::new(),
            results,
            current: None,
            recommendations: Vec::new(),
            status_message: String::from("Welcome to Book Discovery!"),
            live_search: true,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let catalog = build_catalog(config.catalog, config.recommendation_limit);
        let mut app = Self::new(catalog);
        app.live_search = config.live_search;
        app
    }

    /// Rows of the given table.
    pub fn listing(&self, listing: Listing) -> &[BookSummary] {
        match listing {
            Listing::Results => &self.results,
            Listing::Recommendations => &self.recommendations,
        }
    }
}
