//! Form widget for the menu input screen.
//!
//! The widget owns no field values: screens build a [`Form`] from their
//! state on every draw and keep focus themselves.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Title shown on the field border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Error message shown under the field, if any.
    pub error: Option<String>,
    /// Disabled fields are greyed out and never take focus.
    pub enabled: bool,
    /// Rows the field occupies, borders included.
    pub height: u16,
}

impl FormField {
    /// Creates an enabled single-line field.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            error: None,
            enabled: true,
            height: 3,
        }
    }

    /// Sets whether the field accepts input.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the field height in rows, borders included. Minimum 3.
    pub fn height(mut self, height: u16) -> Self {
        self.height = height.max(3);
        self
    }

    /// Attaches an error message.
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

/// A stack of fields with at most one focused.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: Option<usize>,
}

impl Form {
    /// Creates a form. Focus on a disabled or missing field is dropped.
    pub fn new(fields: Vec<FormField>, focus: Option<usize>) -> Self {
        let focus = focus.filter(|&i| fields.get(i).is_some_and(|f| f.enabled));
        Self { fields, focus }
    }

    /// Returns the focused field index.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }
}

/// Returns the next enabled index after `current`, wrapping around.
///
/// `None` when nothing is enabled. With no current focus, starts from the
/// top.
pub fn next_enabled(enabled: &[bool], current: Option<usize>) -> Option<usize> {
    let len = enabled.len();
    let start = current.map_or(0, |c| c + 1);
    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&i| enabled[i])
}

/// Returns the previous enabled index before `current`, wrapping around.
pub fn prev_enabled(enabled: &[bool], current: Option<usize>) -> Option<usize> {
    let len = enabled.len();
    if len == 0 {
        return None;
    }
    let start = current.map_or(len - 1, |c| (c + len - 1) % len);
    (0..len)
        .map(|offset| (start + len - offset) % len)
        .find(|&i| enabled[i])
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(f.height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = form.focus == Some(i);

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else if field.enabled {
            Color::Gray
        } else {
            Color::DarkGray
        };
        let text_style = if field.enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let label = if field.enabled {
            field.label.clone()
        } else {
            format!("{} (disabled)", field.label)
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::styled(&field.value, text_style)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        // Keep the end of long values (where typing happens) in view.
        let inner_width = rows[i].width.saturating_sub(2).max(1) as usize;
        let inner_height = field.height.saturating_sub(2).max(1) as usize;
        let wrapped_rows = field.value.chars().count() / inner_width + 1;
        let scroll = wrapped_rows.saturating_sub(inner_height) as u16;

        let paragraph = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block);
        frame.render_widget(paragraph, rows[i]);

        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + field.height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
