//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TabBar`: The three view titles, active one highlighted
//! - `StatusBar`: Catalog name and status message
//! - `DetailsPanel`: One book's fields and description (borrows its scroll offset)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Query field, emits `Changed` / `Submit`
//! - `BookTable`: Transient wrapper over a persistent `BookTableState`
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into the
//! `App`. The view state in particular is always passed in:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TabBar::new(app.view).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! TabBar::default().render(frame, area); // reads the active view from somewhere
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── tab_bar.rs        (View tabs + click hit-testing)
//! ├── status_bar.rs     (Catalog and status line)
//! ├── search_box.rs     (Query input)
//! ├── book_table.rs     (Title/Author/Genre table, selection, double-click)
//! └── details_panel.rs  (Book details with scrolling description)
//! ```

pub mod book_table;
pub mod details_panel;
pub mod search_box;
mod status_bar;
mod tab_bar;

pub use book_table::{BookTable, BookTableState, Click};
pub use details_panel::DetailsPanel;
pub use search_box::{SearchBox, SearchEvent};
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
