//! Menu display screen: the submitted menu, as a menu or as raw JSON.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::Merchant;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// Which rendering of the menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayView {
    /// Categories and items with prices.
    #[default]
    Menu,
    /// The stored record, pretty-printed.
    Json,
}

/// State for the menu display screen.
#[derive(Debug, Clone, Default)]
pub struct MenuDisplayState {
    scroll: u16,
    view: DisplayView,
}

impl MenuDisplayState {
    /// Creates a display state scrolled to the top of the menu view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the active view.
    pub fn view(&self) -> DisplayView {
        self.view
    }

    /// Scrolls back to the top, keeping the view.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for MenuDisplayState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll = 0;
                Action::None
            }
            KeyCode::Tab => {
                self.view = match self.view {
                    DisplayView::Menu => DisplayView::Json,
                    DisplayView::Json => DisplayView::Menu,
                };
                self.scroll = 0;
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::MenuInput),
            _ => Action::None,
        }
    }
}

fn menu_lines(merchant: &Merchant) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let category_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from(Span::styled(
        merchant.display_name().to_string(),
        title_style,
    ))];
    if let Some(description) = &merchant.description {
        lines.push(Line::from(Span::styled(description.clone(), dim)));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "{} categories, {} items",
            merchant.categories.len(),
            merchant.item_count()
        ),
        dim,
    )));

    for category in &merchant.categories {
        lines.push(Line::from(""));
        let name = category.name.as_deref().unwrap_or("Other");
        lines.push(Line::from(Span::styled(name.to_string(), category_style)));
        for item in &category.items {
            let mut spans = vec![Span::raw(format!(
                "  {}",
                item.name.as_deref().unwrap_or("(unnamed)")
            ))];
            if let Some(price) = item.price_text() {
                spans.push(Span::styled(
                    format!("  {price}"),
                    Style::default().fg(Color::Green),
                ));
            }
            lines.push(Line::from(spans));
            if let Some(description) = &item.description {
                lines.push(Line::from(Span::styled(format!("    {description}"), dim)));
            }
        }
    }
    lines
}

fn json_lines(merchant: &Merchant) -> Vec<Line<'static>> {
    merchant
        .to_pretty_json()
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect()
}

/// Renders the menu display screen.
#[mutants::skip]
pub fn draw_menu_display(
    state: &MenuDisplayState,
    merchant: Option<&Merchant>,
    frame: &mut Frame,
    area: Rect,
) {
    let title = match state.view() {
        DisplayView::Menu => " Menu ",
        DisplayView::Json => " Menu (JSON) ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines = match merchant {
        None => vec![Line::from(Span::styled(
            "No menu submitted yet.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(m) => match state.view() {
            DisplayView::Menu => menu_lines(m),
            DisplayView::Json => json_lines(m),
        },
    };
    let total = lines.len() as u16;
    let capped_scroll = state.scroll().min(total.saturating_sub(content_area.height));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer = Paragraph::new("↑/↓: scroll  Tab: menu/JSON  F1: help  q/Esc: back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use serde_json::json;

    use super::*;
    use crate::model::parse_merchant;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn pizzeria() -> Merchant {
        let text = json!({
            "name": "Luigi's",
            "description": "Wood-fired since 1982",
            "categories": [
                {
                    "name": "Pizzas",
                    "items": [
                        {"name": "Margherita", "description": "Tomato, basil", "price": 9.5},
                        {"name": "Diavola", "price": "R$ 42,00"}
                    ]
                }
            ],
            "phone": "555-0100"
        })
        .to_string();
        parse_merchant(&text).unwrap()
    }

    mod handle_key {
        use super::*;

        #[test]
        fn arrows_scroll_and_saturate() {
            let mut state = MenuDisplayState::new();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 0);
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 2);
            state.handle_key(press(KeyCode::Home));
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn tab_toggles_view_and_resets_scroll() {
            let mut state = MenuDisplayState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.view(), DisplayView::Json);
            assert_eq!(state.scroll(), 0);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.view(), DisplayView::Menu);
        }

        #[test]
        fn esc_and_q_go_back_to_input() {
            let mut state = MenuDisplayState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Esc)),
                Action::Navigate(Screen::MenuInput)
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::Navigate(Screen::MenuInput)
            );
        }

        #[test]
        fn reset_keeps_view() {
            let mut state = MenuDisplayState::new();
            state.handle_key(press(KeyCode::Tab));
            state.handle_key(press(KeyCode::Down));
            state.reset();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.view(), DisplayView::Json);
        }
    }

    mod content {
        use super::*;

        fn text(lines: Vec<Line<'static>>) -> String {
            lines
                .into_iter()
                .map(|l| {
                    l.spans
                        .into_iter()
                        .map(|s| s.content.into_owned())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        }

        #[test]
        fn menu_view_lists_items_with_prices() {
            let output = text(menu_lines(&pizzeria()));
            assert!(output.contains("Luigi's"));
            assert!(output.contains("Wood-fired since 1982"));
            assert!(output.contains("1 categories, 2 items"));
            assert!(output.contains("Pizzas"));
            assert!(output.contains("Margherita  9.5"));
            assert!(output.contains("Diavola  R$ 42,00"));
            assert!(output.contains("Tomato, basil"));
        }

        #[test]
        fn menu_view_handles_bare_record() {
            let output = text(menu_lines(&Merchant::default()));
            assert!(output.contains("Untitled menu"));
            assert!(output.contains("0 categories, 0 items"));
        }

        #[test]
        fn json_view_keeps_unknown_fields() {
            let output = text(json_lines(&pizzeria()));
            assert!(output.contains(r#""phone": "555-0100""#));
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(state: &MenuDisplayState, merchant: Option<&Merchant>) -> String {
            let backend = TestBackend::new(80, 20);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_menu_display(state, merchant, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_menu() {
            let output = render(&MenuDisplayState::new(), Some(&pizzeria()));
            assert!(output.contains("Menu"));
            assert!(output.contains("Margherita"));
        }

        #[test]
        fn renders_placeholder_without_menu() {
            let output = render(&MenuDisplayState::new(), None);
            assert!(output.contains("No menu submitted yet."));
        }

        #[test]
        fn footer_mentions_back() {
            let output = render(&MenuDisplayState::new(), None);
            assert!(output.contains("Esc"));
        }
    }
}
