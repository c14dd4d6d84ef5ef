//! Menu input screen: mode bar, form fields, example picker.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::controller::MenuInputController;
use crate::model::{ImageFile, ImageSubMode, InputMode};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, draw_form, next_enabled, prev_enabled};
use crate::tui::widgets::status_bar::{StatusBarContext, draw_status_bar};

/// Field index for the menu JSON.
const JSON: usize = 0;
/// Field index for the menu URL.
const URL: usize = 1;
/// Field index for the image file path.
const IMAGE_PATH: usize = 2;

/// Rows used by the URL and image path fields.
const SHORT_FIELD_HEIGHT: u16 = 3;

/// State for the menu input screen.
#[derive(Debug, Clone)]
pub struct MenuInputState {
    controller: MenuInputController,
    focus: Option<usize>,
    image_path: String,
    notice: Option<String>,
}

impl MenuInputState {
    /// Wraps a controller, focusing the first enabled field.
    pub fn new(controller: MenuInputController) -> Self {
        let mut state = Self {
            controller,
            focus: None,
            image_path: String::new(),
            notice: None,
        };
        state.reset_focus();
        state
    }

    /// Returns the form controller.
    pub fn controller(&self) -> &MenuInputController {
        &self.controller
    }

    /// Returns the form controller for the app to drive conversions and
    /// submits.
    pub fn controller_mut(&mut self) -> &mut MenuInputController {
        &mut self.controller
    }

    /// Returns the focused field index, if any field can take focus.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Returns the image path typed so far.
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// Returns the one-off message shown above the status bar.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Shows a one-off message until the next key press.
    pub fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }

    fn enabled_fields(&self) -> [bool; 3] {
        [
            self.controller.is_json_editable(),
            self.controller.is_url_enabled(),
            self.controller.is_file_enabled(),
        ]
    }

    fn reset_focus(&mut self) {
        self.focus = next_enabled(&self.enabled_fields(), None);
        if self.controller.selected_file().is_none() {
            self.image_path.clear();
        }
    }

    fn cycle_mode(&mut self, forward: bool) {
        let current = self.controller.input_mode();
        let modes = self.controller.modes();
        let mode = if forward {
            modes.next(current)
        } else {
            modes.prev(current)
        };
        // The mode comes from the controller's own set.
        if self.controller.select_mode(mode).is_ok() {
            self.reset_focus();
        }
    }

    fn toggle_sub_mode(&mut self) {
        if !self.controller.is_sub_mode_enabled() {
            return;
        }
        let sub_mode = self
            .controller
            .image_sub_mode()
            .map_or(ImageSubMode::UploadImage, ImageSubMode::toggled);
        self.controller.select_image_sub_mode(sub_mode);
        self.reset_focus();
    }

    fn step_example(&mut self, forward: bool) {
        let examples = self.controller.examples();
        if examples.is_empty() {
            return;
        }
        let current = self
            .controller
            .selected_example()
            .and_then(|name| examples.iter().position(|e| e.name == name));
        let index = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(examples.len() - 1),
            (Some(i), false) => i.saturating_sub(1),
        };
        let example = examples[index].clone();
        self.controller.select_example(&example);
    }

    fn insert_str(&mut self, text: &str) {
        match self.focus {
            Some(JSON) => self.controller.push_json_str(text),
            Some(URL) => {
                let url = format!("{}{text}", self.controller.menu_url());
                self.controller.change_url(url);
            }
            Some(IMAGE_PATH) => self.image_path.push_str(text),
            _ => {}
        }
    }

    fn insert_char(&mut self, ch: char) {
        match self.focus {
            Some(JSON) => self.controller.push_json_char(ch),
            Some(URL) | Some(IMAGE_PATH) => self.insert_str(ch.encode_utf8(&mut [0; 4])),
            _ => {}
        }
    }

    fn delete_char(&mut self) {
        match self.focus {
            Some(JSON) => self.controller.pop_json_char(),
            Some(URL) => {
                let mut url = self.controller.menu_url().to_string();
                url.pop();
                self.controller.change_url(url);
            }
            Some(IMAGE_PATH) => {
                self.image_path.pop();
            }
            _ => {}
        }
    }

    fn enter(&mut self) -> Action {
        if self.focus == Some(IMAGE_PATH) {
            let path = self.image_path.trim();
            if !path.is_empty() {
                self.controller.upload_file(ImageFile::new(path));
            }
            return Action::None;
        }
        Action::Submit
    }
}

impl ScreenState for MenuInputState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        self.notice = None;

        // Alt+m / Shift+Alt+M cycle the input mode; Alt+i toggles the image source
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('m') => {
                    self.cycle_mode(true);
                    return Action::None;
                }
                KeyCode::Char('i') => {
                    self.toggle_sub_mode();
                    return Action::None;
                }
                _ => {}
            }
        }
        const ALT_SHIFT: KeyModifiers = KeyModifiers::ALT.union(KeyModifiers::SHIFT);
        if key.modifiers == ALT_SHIFT && key.code == KeyCode::Char('M') {
            self.cycle_mode(false);
            return Action::None;
        }
        if key.modifiers == KeyModifiers::CONTROL {
            return match key.code {
                KeyCode::Char('g') => Action::Convert,
                // Submits from any field, including the image path where
                // Enter picks the file.
                KeyCode::Char('s') => Action::Submit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = next_enabled(&self.enabled_fields(), self.focus);
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = prev_enabled(&self.enabled_fields(), self.focus);
                Action::None
            }
            KeyCode::Up => {
                self.step_example(false);
                Action::None
            }
            KeyCode::Down => {
                self.step_example(true);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Enter => self.enter(),
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_paste(&mut self, text: &str) -> Action {
        self.notice = None;
        self.insert_str(text);
        Action::None
    }
}

fn mode_bar(controller: &MenuInputController) -> Line<'static> {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::Gray);

    let mut spans = vec![Span::styled("Mode: ", Style::default().fg(Color::DarkGray))];
    for mode in controller.modes().modes() {
        let style = if *mode == controller.input_mode() {
            active
        } else {
            inactive
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw(" "));
    }

    if controller.is_sub_mode_enabled() {
        spans.push(Span::styled("  Source: ", Style::default().fg(Color::DarkGray)));
        for sub in [ImageSubMode::UploadImage, ImageSubMode::InsertUrl] {
            let style = if controller.image_sub_mode() == Some(sub) {
                active
            } else {
                inactive
            };
            spans.push(Span::styled(format!(" {} ", sub.label()), style));
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

fn build_form(state: &MenuInputState, json_height: u16) -> Form {
    let controller = state.controller();
    let image_label = match controller.selected_file() {
        Some(file) => format!("Image file (selected: {})", file.name()),
        None => "Image file (Enter to pick)".to_string(),
    };
    Form::new(
        vec![
            FormField::new("Menu JSON", controller.json_text())
                .enabled(controller.is_json_editable())
                .height(json_height)
                .error(controller.error().map(ToString::to_string)),
            FormField::new("Menu URL", controller.menu_url())
                .enabled(controller.is_url_enabled())
                .height(SHORT_FIELD_HEIGHT),
            FormField::new(image_label, state.image_path())
                .enabled(controller.is_file_enabled())
                .height(SHORT_FIELD_HEIGHT),
        ],
        state.focus(),
    )
}

/// Renders the menu input screen.
#[mutants::skip]
pub fn draw_menu_input(state: &MenuInputState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Menu Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let controller = state.controller();
    let show_examples = controller.input_mode() == InputMode::UseExample;
    let examples_height = if show_examples {
        controller.examples().len() as u16 + 2
    } else {
        0
    };

    let [mode_area, examples_area, form_area, notice_area, status_area, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(examples_height),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    frame.render_widget(Paragraph::new(mode_bar(controller)), mode_area);

    if show_examples {
        let items: Vec<ListItem> = controller
            .examples()
            .iter()
            .map(|e| {
                let selected = controller.selected_example() == Some(e.name.as_str());
                let (marker, style) = if selected {
                    ("> ", Style::default().fg(Color::Yellow))
                } else {
                    ("  ", Style::default())
                };
                ListItem::new(Span::styled(format!("{marker}{}", e.name), style))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title("Examples (Up/Down to pick)")
                .borders(Borders::ALL),
        );
        frame.render_widget(list, examples_area);
    }

    let json_height = form_area
        .height
        .saturating_sub(2 * SHORT_FIELD_HEIGHT)
        .max(3);
    draw_form(&build_form(state, json_height), frame, form_area);

    if let Some(notice) = state.notice() {
        let notice = Paragraph::new(Span::styled(notice, Style::default().fg(Color::Yellow)));
        frame.render_widget(notice, notice_area);
    }

    draw_status_bar(&StatusBarContext::from_controller(controller), frame, status_area);

    let footer_text = if controller.input_mode().is_remote() {
        "Alt+m: mode  Alt+i: source  Tab: field  Ctrl+g: convert  Ctrl+s: submit  F1: help  Esc: quit"
    } else {
        "Alt+m: mode  Tab: field  Enter/Ctrl+s: submit  F1: help  Esc: quit"
    };
    let footer = Paragraph::new(Line::from(footer_text)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
