//! # TabBar Component
//!
//! The three view titles along the top edge. The active view is highlighted.
//! Clicking a title switches to that view, so the same geometry used to draw
//! the titles is exposed through [`TabBar::tab_at`] for hit-testing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use unicode_width::UnicodeWidthStr;

use crate::core::state::ViewState;
use crate::tui::component::Component;

// Tabs pads each title with one space on both sides and separates titles with
// a one-column divider.
const PADDING: u16 = 1;
const DIVIDER_WIDTH: u16 = 1;

pub struct TabBar {
    pub active: ViewState,
}

impl TabBar {
    pub fn new(active: ViewState) -> Self {
        Self { active }
    }

    /// Which tab (if any) covers column `x` of a bar drawn at `area`.
    pub fn tab_at(x: u16, area: Rect) -> Option<ViewState> {
        if x < area.x {
            return None;
        }
        let mut start = area.x;
        for view in ViewState::ALL {
            let width = PADDING * 2 + view.label().width() as u16;
            if x >= start && x < start + width {
                return Some(view);
            }
            start += width + DIVIDER_WIDTH;
        }
        None
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = ViewState::ALL.iter().map(|v| Line::from(v.label()));
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }
}
