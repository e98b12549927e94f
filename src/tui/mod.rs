//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event (key, mouse, paste or resize).
//!
//! ## Focus
//!
//! The search view has two focus targets. In `Focus::Input` keys edit the
//! query; in `Focus::Table` they move the row selection and plain letters
//! act as shortcuts. The other views have a single focus target.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Listing, ViewState};
use crate::tui::component::EventHandler;
use crate::tui::components::{BookTableState, Click, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Where keystrokes go while the search view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the query. Esc or ↓ moves to the table.
    Input,
    /// Arrow keys move the selection. Typing jumps back to the input.
    Table,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub focus: Focus,
    pub results_table: BookTableState,
    pub recommendations_table: BookTableState,
    pub details_scroll: u16,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut results_table = BookTableState::new();
        results_table.reset(app.results.len());
        let mut recommendations_table = BookTableState::new();
        recommendations_table.reset(app.recommendations.len());
        Self {
            search_box: SearchBox::new(),
            focus: Focus::Input, // User expects to type immediately
            results_table,
            recommendations_table,
            details_scroll: 0,
        }
    }

    fn table_mut(&mut self, listing: Listing) -> &mut BookTableState {
        match listing {
            Listing::Results => &mut self.results_table,
            Listing::Recommendations => &mut self.recommendations_table,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();
    info!("Book Discovery exiting");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            let frame_area = terminal.get_frame().area();
            if handle_event(app, tui, event, frame_area, Instant::now()) == Effect::Quit {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Dispatch one terminal event. Returns the effect of any action it produced.
pub fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
    now: Instant,
) -> Effect {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => Effect::None,
        TuiEvent::ForceQuit => dispatch(app, tui, Action::Quit),
        TuiEvent::NextTab => dispatch(app, tui, Action::ShowView(app.view.next())),
        TuiEvent::PrevTab => dispatch(app, tui, Action::ShowView(app.view.prev())),
        TuiEvent::MouseClick(col, row) => handle_click(app, tui, col, row, frame_area, now),
        _ => match app.view {
            ViewState::Search => match tui.focus {
                Focus::Input => handle_search_input(app, tui, event),
                Focus::Table => handle_results_table(app, tui, event),
            },
            ViewState::Details => handle_details(app, tui, event),
            ViewState::Recommendations => handle_recommendations(app, tui, event),
        },
    }
}

/// Run `action` through the reducer and keep presentation state in step with
/// whatever data it replaced.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    debug!("Dispatching {:?}", action);
    let resets = match &action {
        Action::Search(_) => Some(Listing::Results),
        Action::GetRecommendations => Some(Listing::Recommendations),
        _ => None,
    };
    let opens_details = matches!(action, Action::ViewDetails { .. });

    let effect = update(app, action);

    if let Some(listing) = resets {
        let len = app.listing(listing).len();
        tui.table_mut(listing).reset(len);
    }
    if opens_details {
        tui.details_scroll = 0;
    }
    effect
}

fn open_selected(app: &mut App, tui: &mut TuiState, listing: Listing) -> Effect {
    match tui.table_mut(listing).selected() {
        Some(index) => dispatch(app, tui, Action::ViewDetails { listing, index }),
        None => Effect::None,
    }
}

fn handle_search_input(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::Escape | TuiEvent::CursorDown) {
        tui.focus = Focus::Table;
        return Effect::None;
    }
    if matches!(event, TuiEvent::ScrollUp | TuiEvent::ScrollDown) {
        return handle_results_table(app, tui, event);
    }

    match tui.search_box.handle_event(&event) {
        Some(SearchEvent::Submit(query)) => {
            let effect = dispatch(app, tui, Action::Search(query));
            if !app.results.is_empty() {
                tui.focus = Focus::Table;
            }
            effect
        }
        Some(SearchEvent::Changed(query)) if app.live_search => {
            dispatch(app, tui, Action::Search(query))
        }
        _ => Effect::None,
    }
}

fn handle_results_table(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let len = app.results.len();
    match event {
        TuiEvent::CursorUp | TuiEvent::ScrollUp => {
            // Up from the first row goes back to the query
            if tui.results_table.selected().is_none_or(|i| i == 0)
                && matches!(event, TuiEvent::CursorUp)
            {
                tui.focus = Focus::Input;
            } else {
                tui.results_table.select_prev(len);
            }
            Effect::None
        }
        TuiEvent::CursorDown | TuiEvent::ScrollDown => {
            tui.results_table.select_next(len);
            Effect::None
        }
        TuiEvent::Submit => open_selected(app, tui, Listing::Results),
        TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit),
        TuiEvent::InputChar('/') => {
            tui.focus = Focus::Input;
            Effect::None
        }
        // Typing auto-switches to the query and forwards the event
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
            tui.focus = Focus::Input;
            handle_search_input(app, tui, event)
        }
        _ => Effect::None,
    }
}

fn handle_details(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Submit | TuiEvent::InputChar('r') => {
            dispatch(app, tui, Action::GetRecommendations)
        }
        TuiEvent::Escape | TuiEvent::InputChar('b') => dispatch(app, tui, Action::BackToSearch),
        TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit),
        TuiEvent::CursorUp | TuiEvent::ScrollUp => {
            tui.details_scroll = tui.details_scroll.saturating_sub(1);
            Effect::None
        }
        TuiEvent::CursorDown | TuiEvent::ScrollDown => {
            // Clamped against the wrapped description on the next render
            tui.details_scroll = tui.details_scroll.saturating_add(1);
            Effect::None
        }
        _ => Effect::None,
    }
}

fn handle_recommendations(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let len = app.recommendations.len();
    match event {
        TuiEvent::CursorUp | TuiEvent::ScrollUp => {
            tui.recommendations_table.select_prev(len);
            Effect::None
        }
        TuiEvent::CursorDown | TuiEvent::ScrollDown => {
            tui.recommendations_table.select_next(len);
            Effect::None
        }
        TuiEvent::Submit => open_selected(app, tui, Listing::Recommendations),
        TuiEvent::Escape | TuiEvent::InputChar('b') => dispatch(app, tui, Action::BackToSearch),
        TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit),
        _ => Effect::None,
    }
}

fn handle_click(
    app: &mut App,
    tui: &mut TuiState,
    col: u16,
    row: u16,
    frame_area: Rect,
    now: Instant,
) -> Effect {
    match ui::hit_test(app.view, frame_area, col, row) {
        Hit::Tab(view) => dispatch(app, tui, Action::ShowView(view)),
        Hit::SearchBox => {
            tui.focus = Focus::Input;
            Effect::None
        }
        Hit::Table(listing, area) => {
            let len = app.listing(listing).len();
            let table = tui.table_mut(listing);
            let Some(index) = table.row_at(row, area, len) else {
                return Effect::None;
            };
            if listing == Listing::Results {
                tui.focus = Focus::Table;
            }
            match tui.table_mut(listing).click(index, now) {
                Click::Activate(index) => dispatch(app, tui, Action::ViewDetails { listing, index }),
                Click::Select(_) => Effect::None,
            }
        }
        Hit::Nothing => Effect::None,
    }
}
