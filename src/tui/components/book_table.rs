//! # BookTable Component
//!
//! Three-column (Title, Author, Genre) table used by both the search view
//! and the recommendations view.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookTableState` lives in `TuiState` (selection, last click)
//! - `BookTable` is created each frame with borrowed rows and state
//!
//! Rows are read-only. A row is "activated" (opened in the details view) by
//! Enter or by a double-click: two clicks on the same row within
//! [`DOUBLE_CLICK_WINDOW`].

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Row, Table, TableState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::BookSummary;
use crate::tui::component::Component;

pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

const HEADERS: [&str; 3] = ["Title", "Author", "Genre"];
// Title : Author : Genre
const COLUMN_WEIGHTS: [u16; 3] = [5, 4, 3];
const COLUMN_SPACING: u16 = 1;

/// Rows above the first data row inside the table area: top border and header.
pub const ROWS_BEFORE_DATA: u16 = 2;

/// What a mouse click on a row amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Select(usize),
    Activate(usize),
}

/// Persistent state for one book table.
#[derive(Debug, Default)]
pub struct BookTableState {
    pub table_state: TableState,
    last_click: Option<(usize, Instant)>,
}

impl BookTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Reset the selection after the rows were replaced.
    pub fn reset(&mut self, len: usize) {
        self.table_state = TableState::default();
        self.table_state.select((len > 0).then_some(0));
        self.last_click = None;
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.table_state.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = self.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(prev));
    }

    /// Register a click on `row` at time `now`.
    pub fn click(&mut self, row: usize, now: Instant) -> Click {
        let is_double = matches!(
            self.last_click,
            Some((last_row, at)) if last_row == row && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        self.table_state.select(Some(row));
        if is_double {
            self.last_click = None;
            Click::Activate(row)
        } else {
            self.last_click = Some((row, now));
            Click::Select(row)
        }
    }

    /// Map a screen row to a data row index, given where the table was drawn.
    pub fn row_at(&self, y: u16, area: Rect, len: usize) -> Option<usize> {
        let first = area.y + ROWS_BEFORE_DATA;
        let last = area.y + area.height.saturating_sub(1); // bottom border
        if y < first || y >= last {
            return None;
        }
        let index = self.table_state.offset() + (y - first) as usize;
        (index < len).then_some(index)
    }
}

/// Transient render wrapper for a book table.
pub struct BookTable<'a> {
    pub rows: &'a [BookSummary],
    pub state: &'a mut BookTableState,
    pub title: &'a str,
    pub empty_message: &'a str,
    /// Key hints shown on the bottom border.
    pub hints: &'a str,
    pub focused: bool,
}

impl Component for BookTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Blue
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.title))
            .title_bottom(Line::from(self.hints).centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let widths = column_widths(inner.width);
        let header = Row::new(HEADERS).style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );

        if self.rows.is_empty() {
            let table = Table::new(Vec::<Row>::new(), widths.map(Constraint::Length))
                .header(header)
                .column_spacing(COLUMN_SPACING)
                .block(block);
            frame.render_widget(table, area);

            let message_area = Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(1),
                ..inner
            };
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, message_area);
            return;
        }

        let rows = self.rows.iter().map(|book| {
            Row::new([
                truncate_to_width(&book.title, widths[0]),
                truncate_to_width(&book.author, widths[1]),
                truncate_to_width(&book.genre, widths[2]),
            ])
        });

        let highlight = if self.focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };

        let table = Table::new(rows, widths.map(Constraint::Length))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(highlight)
            .block(block);

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

/// Split `width` columns between Title, Author and Genre by weight.
pub fn column_widths(width: u16) -> [u16; 3] {
    let available = width.saturating_sub(COLUMN_SPACING * 2);
    let total: u32 = COLUMN_WEIGHTS.iter().map(|&w| u32::from(w)).sum();
    // Each share is at most `available`, so it fits back in u16
    let share = |weight: u16| (u32::from(available) * u32::from(weight) / total) as u16;
    let title = share(COLUMN_WEIGHTS[0]);
    let author = share(COLUMN_WEIGHTS[1]);
    let genre = available - title - author;
    [title, author, genre]
}

/// Truncate to `max_width` display columns, ending in "..." when cut.
pub fn truncate_to_width(s: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
