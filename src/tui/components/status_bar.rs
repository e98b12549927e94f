//! # StatusBar Component
//!
//! One-line bar under the tabs showing which catalog is loaded and the
//! latest status message.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! StatusBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut status_bar = StatusBar::new("sample".to_string(), "3 books".to_string());
//! status_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Book Discovery (catalog: sample) | 3 books"`
//! 2. **Default**: `"Book Discovery (catalog: sample)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct StatusBar {
    /// Name of the active catalog (e.g. "placeholder")
    pub catalog_name: String,
    /// Status message (e.g. "No matching books found")
    pub status_message: String,
}

impl StatusBar {
    pub fn new(catalog_name: String, status_message: String) -> Self {
        Self {
            catalog_name,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Book Discovery (catalog: {})", self.catalog_name)
        } else {
            format!(
                "Book Discovery (catalog: {}) | {}",
                self.catalog_name, self.status_message
            )
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::Gray)),
            area,
        );
    }
}
