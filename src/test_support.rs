//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::catalog::{PlaceholderCatalog, SampleCatalog};
use crate::core::state::App;

/// Creates a test App backed by the fixed placeholder tables.
pub fn test_app() -> App {
    App::new(Box::new(PlaceholderCatalog))
}

/// Creates a test App backed by the fifteen-book sample library.
pub fn test_sample_app() -> App {
    App::new(Box::new(SampleCatalog::default()))
}

/// Flattens a rendered `TestBackend` buffer into one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
