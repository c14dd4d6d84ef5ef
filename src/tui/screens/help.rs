//! Help screen: key bindings for the screen that opened it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// A key and what it does.
type Binding = (&'static str, &'static str);

static MENU_INPUT_KEYS: &[Binding] = &[
    ("Alt+m", "next input mode"),
    ("Shift+Alt+M", "previous input mode"),
    ("Alt+i", "image source: file or URL"),
    ("Tab / Shift+Tab", "next / previous enabled field"),
    ("Up / Down", "pick an example (Example mode)"),
    ("Enter", "submit the menu; on the image path, pick the file"),
    ("Ctrl+s", "submit the menu from any field"),
    ("Ctrl+g", "convert the image or URL into menu JSON"),
    ("Esc", "quit"),
];

static MENU_DISPLAY_KEYS: &[Binding] = &[
    ("Up / Down", "scroll"),
    ("Home", "back to the top"),
    ("Tab", "switch between menu and JSON"),
    ("q / Esc", "back to the input form"),
];

static HELP_KEYS: &[Binding] = &[("Up / Down", "scroll"), ("q / Esc", "close help")];

static GLOBAL_KEYS: &[Binding] = &[("F1", "this help")];

fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::MenuInput => "Menu Input",
        Screen::MenuDisplay => "Menu",
        Screen::Help => "Help",
    }
}

/// Returns the bindings listed for `screen`, screen keys first.
fn bindings(screen: Screen) -> impl Iterator<Item = &'static Binding> {
    let own = match screen {
        Screen::MenuInput => MENU_INPUT_KEYS,
        Screen::MenuDisplay => MENU_DISPLAY_KEYS,
        Screen::Help => HELP_KEYS,
    };
    own.iter().chain(GLOBAL_KEYS)
}

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    origin: Screen,
    offset: usize,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Help for the input form, scrolled to the top.
    pub fn new() -> Self {
        Self {
            origin: Screen::MenuInput,
            offset: 0,
        }
    }

    /// Returns the first binding row shown.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the screen that opened help, where closing it returns to.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Scrolls back to the first binding.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let last = bindings(self.origin).count().saturating_sub(1);
        match key.code {
            KeyCode::Up => self.offset = self.offset.saturating_sub(1),
            KeyCode::Down => self.offset = (self.offset + 1).min(last),
            KeyCode::Char('q') | KeyCode::Esc => return Action::Navigate(self.origin),
            _ => {}
        }
        Action::None
    }
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Help: {} ", screen_title(state.origin())))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let rows: Vec<Row> = bindings(state.origin())
        .skip(state.offset())
        .map(|(key, desc)| {
            Row::new(vec![*key, *desc]).style(Style::default().fg(Color::Gray))
        })
        .collect();
    let header = Row::new(vec!["Key", "Action"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(0)]).header(header);
    frame.render_widget(table, table_area);

    let footer =
        Paragraph::new("Up/Down: scroll  q/Esc: close").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
