//! # SearchBox Component
//!
//! Single-line query field at the top of the search view.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste and editing keys
//! - Report every edit (`Changed`) so the parent can run a live search
//! - Report Enter (`Submit`) for the explicit "Search" action
//! - Scroll horizontally when the query is wider than the field
//!
//! Unlike a chat input the buffer is not cleared on submit: the query stays
//! visible next to its results.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Enter book title, author, or genre...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Enter pressed. Carries the full query (possibly empty).
    Submit(String),
    /// The query text changed.
    Changed(String),
}

pub struct SearchBox {
    /// Query text (Internal State)
    pub buffer: String,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: 0,
        }
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }

    /// Columns to skip so the cursor stays inside a field `width` columns wide.
    fn horizontal_offset(&self, width: u16) -> usize {
        let cursor_col = self.buffer[..self.cursor].width();
        let width = width as usize;
        if width == 0 {
            return 0;
        }
        (cursor_col + 1).saturating_sub(width)
    }

    /// The slice of the buffer visible after skipping `skip` columns.
    fn visible_text(&self, skip: usize) -> String {
        let mut skipped = 0;
        self.buffer
            .chars()
            .skip_while(|c| {
                if skipped >= skip {
                    return false;
                }
                skipped += c.width().unwrap_or(0);
                true
            })
            .collect()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Search ")
            .title_bottom(Line::from(" Enter Search ").right_aligned());

        let inner = block.inner(area);
        let skip = self.horizontal_offset(inner.width);

        let content = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.visible_text(skip))
        };

        frame.render_widget(Paragraph::new(content).block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let col = self.buffer[..self.cursor].width().saturating_sub(skip) as u16;
            frame.set_cursor_position((inner.x + col.min(inner.width - 1), inner.y));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}
