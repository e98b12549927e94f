//! # Actions
//!
//! Everything that can happen in the book browser becomes an `Action`.
//! User presses Enter in the search box? That's `Action::Search(query)`.
//! User double-clicks a row? That's `Action::ViewDetails { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an `Effect` for the event loop to carry out.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{App, Listing, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a search and show the search view.
    Search(String),
    /// Open the row at `index` of `listing` in the details view.
    ViewDetails { listing: Listing, index: usize },
    /// Fill the recommendations table from the current book.
    GetRecommendations,
    BackToSearch,
    /// Explicit tab switch. No data changes; the status line follows the new view.
    ShowView(ViewState),
    Quit,
}

/// Side effects the event loop has to perform after `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (view={:?})", action, app.view);
    match action {
        Action::Search(query) => {
            app.results = app.catalog.search(&query);
            app.status_message = if app.results.is_empty() {
                "No matching books found".to_string()
            } else {
                format!("{} books", app.results.len())
            };
            app.query = query;
            app.view = ViewState::Search;
            Effect::None
        }
        Action::ViewDetails { listing, index } => {
            let Some(selected) = app.listing(listing).get(index).cloned() else {
                app.status_message = "No book selected".to_string();
                return Effect::None;
            };
            let detail = app.catalog.details(&selected);
            info!("Viewing details for {:?}", detail.title);
            app.status_message = format!("Viewing: {}", detail.title);
            app.current = Some(detail);
            app.view = ViewState::Details;
            Effect::None
        }
        Action::GetRecommendations => {
            app.recommendations = app.catalog.recommendations(app.current.as_ref());
            info!("Fetched {} recommendations", app.recommendations.len());
            app.status_message = match (&app.current, app.recommendations.len()) {
                (_, 0) => "No recommendations available".to_string(),
                (Some(current), n) => format!("{n} books like {}", current.title),
                (None, n) => format!("{n} recommendations"),
            };
            app.view = ViewState::Recommendations;
            Effect::None
        }
        Action::BackToSearch => {
            app.view = ViewState::Search;
            app.status_message.clear();
            Effect::None
        }
        Action::ShowView(view) => {
            app.view = view;
            app.status_message = match view {
                ViewState::Search => String::new(),
                ViewState::Details => match &app.current {
                    Some(current) => format!("Viewing: {}", current.title),
                    None => String::new(),
                },
                ViewState::Recommendations => match app.recommendations.len() {
                    0 => String::new(),
                    n => format!("{n} recommendations"),
                },
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
