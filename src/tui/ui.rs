use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Listing, ViewState};
use crate::tui::component::Component;
use crate::tui::components::{BookTable, DetailsPanel, StatusBar, TabBar};
use crate::tui::{Focus, TuiState};

const SEARCH_BOX_HEIGHT: u16 = 3;

/// `[tabs, status, body]`
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(1), Min(0)]).areas(area)
}

/// `[search box, results table]`
pub fn search_layout(body: Rect) -> [Rect; 2] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(SEARCH_BOX_HEIGHT), Min(0)]).areas(body)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [tabs_area, status_area, body] = screen_layout(frame.area());

    TabBar::new(app.view).render(frame, tabs_area);
    StatusBar::new(app.catalog.name().to_string(), app.status_message.clone())
        .render(frame, status_area);

    match app.view {
        ViewState::Search => draw_search(frame, body, app, tui),
        ViewState::Details => {
            DetailsPanel {
                detail: app.current.as_ref(),
                scroll: &mut tui.details_scroll,
            }
            .render(frame, body);
        }
        ViewState::Recommendations => {
            let hints = if tui.recommendations_table.selected().is_some() {
                " Enter See Book Details  b Back to Search  q Quit "
            } else {
                " b Back to Search  q Quit "
            };
            BookTable {
                rows: &app.recommendations,
                state: &mut tui.recommendations_table,
                title: "Recommendations",
                empty_message: "No recommendations available",
                hints,
                focused: true,
            }
            .render(frame, body);
        }
    }
}

fn draw_search(frame: &mut Frame, body: Rect, app: &App, tui: &mut TuiState) {
    let [search_area, table_area] = search_layout(body);

    tui.search_box.focused = tui.focus == Focus::Input;
    tui.search_box.render(frame, search_area);

    let hints = match tui.focus {
        Focus::Input => " ↓ Results  Tab Switch view  Ctrl+C Quit ",
        Focus::Table => " Enter View Details  / Search  Tab Switch view  q Quit ",
    };
    BookTable {
        rows: &app.results,
        state: &mut tui.results_table,
        title: "Results",
        empty_message: "No matching books found",
        hints,
        focused: tui.focus == Focus::Table,
    }
    .render(frame, table_area);
}

/// What a mouse click at a screen position landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tab(ViewState),
    SearchBox,
    /// A book table, drawn at the given area.
    Table(Listing, Rect),
    Nothing,
}

/// Hit test a click against the layout `draw_ui` produces for `view`.
pub fn hit_test(view: ViewState, frame_area: Rect, col: u16, row: u16) -> Hit {
    let [tabs_area, _status_area, body] = screen_layout(frame_area);

    if contains(tabs_area, col, row) {
        return TabBar::tab_at(col, tabs_area).map_or(Hit::Nothing, Hit::Tab);
    }

    match view {
        ViewState::Search => {
            let [search_area, table_area] = search_layout(body);
            if contains(search_area, col, row) {
                Hit::SearchBox
            } else if contains(table_area, col, row) {
                Hit::Table(Listing::Results, table_area)
            } else {
                Hit::Nothing
            }
        }
        ViewState::Recommendations if contains(body, col, row) => {
            Hit::Table(Listing::Recommendations, body)
        }
        _ => Hit::Nothing,
    }
}

fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_search_view() {
        let app = test_app();
        let mut tui = TuiState::new(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Book Search"));
        assert!(text.contains("catalog: placeholder"));
        assert!(text.contains("The Great Gatsby"));
        assert!(text.contains("Pride and Prejudice"));
    }

    #[test]
    fn test_draw_details_view_without_book() {
        let mut app = test_app();
        app.view = ViewState::Details;
        let mut tui = TuiState::new(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Select a book to view details"));
    }

    #[test]
    fn test_draw_empty_recommendations() {
        let mut app = test_app();
        app.view = ViewState::Recommendations;
        let mut tui = TuiState::new(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains("No recommendations available"));
        assert!(!text.contains("See Book Details"));
    }

    #[test]
    fn test_hit_test_tabs() {
        let area = Rect::new(0, 0, 100, 24);
        assert_eq!(
            hit_test(ViewState::Search, area, 16, 0),
            Hit::Tab(ViewState::Details)
        );
        assert_eq!(hit_test(ViewState::Search, area, 99, 0), Hit::Nothing);
    }

    #[test]
    fn test_hit_test_search_view() {
        let area = Rect::new(0, 0, 100, 24);
        // tabs 0, status 1, search box 2..5, table 5..24
        assert_eq!(hit_test(ViewState::Search, area, 10, 3), Hit::SearchBox);
        assert_eq!(
            hit_test(ViewState::Search, area, 10, 8),
            Hit::Table(Listing::Results, Rect::new(0, 5, 100, 19))
        );
    }

    #[test]
    fn test_hit_test_details_body_is_nothing() {
        let area = Rect::new(0, 0, 100, 24);
        assert_eq!(hit_test(ViewState::Details, area, 10, 8), Hit::Nothing);
        assert_eq!(
            hit_test(ViewState::Recommendations, area, 10, 8),
            Hit::Table(Listing::Recommendations, Rect::new(0, 2, 100, 22))
        );
    }
}
