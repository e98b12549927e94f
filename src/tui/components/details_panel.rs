//! # DetailsPanel Component
//!
//! Title, author and genre centered at the top, the wrapped description
//! below. The description scrolls when it is taller than the panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::catalog::BookDetail;
use crate::tui::component::Component;

const HINTS: &str = " Enter/r Get Recommendations  b Back to Search  ↑↓ Scroll ";
const NOTHING_SELECTED: &str = "Select a book to view details";

// title, author, genre, blank line
const HEADER_HEIGHT: u16 = 4;

pub struct DetailsPanel<'a> {
    pub detail: Option<&'a BookDetail>,
    /// Description scroll offset in lines. Clamped during render.
    pub scroll: &'a mut u16,
}

impl DetailsPanel<'_> {
    fn description_lines(description: &str, width: u16) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        textwrap::wrap(description, width as usize)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }
}

impl Component for DetailsPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Book Details ")
            .title_bottom(Line::from(HINTS).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(detail) = self.detail else {
            *self.scroll = 0;
            let prompt = Paragraph::new(NOTHING_SELECTED)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(prompt, inner);
            return;
        };

        let [header_area, description_area] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(inner);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                detail.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                detail.author.as_str(),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                detail.genre.as_str(),
                Style::default().fg(Color::Yellow),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, header_area);

        let lines = Self::description_lines(&detail.description, description_area.width);
        let max_scroll = lines.len().saturating_sub(description_area.height as usize) as u16;
        *self.scroll = (*self.scroll).min(max_scroll);

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(*self.scroll as usize)
            .map(Line::from)
            .collect();
        frame.render_widget(Paragraph::new(visible), description_area);
    }
}
