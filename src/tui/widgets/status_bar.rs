//! Status bar widget: one-line summary of the menu input form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::controller::MenuInputController;

/// Where the form stands, as far as the status bar cares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    /// No menu JSON yet.
    #[default]
    Empty,
    /// Menu JSON present and ready to submit.
    Ready,
    /// A conversion is running.
    Converting,
    /// An error is showing.
    Failed(String),
}

/// Data passed to the status bar widget; decoupled from the controller so
/// rendering can be tested on plain values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Label of the active input mode.
    pub mode: String,
    /// Label of the image sub-mode, when one is picked.
    pub sub_mode: Option<String>,
    /// Whether a conversion has a file or URL to work with.
    pub is_image_selected: bool,
    pub state: FormState,
}

impl StatusBarContext {
    /// Builds the context from the current form state.
    pub fn from_controller(controller: &MenuInputController) -> Self {
        let state = if controller.is_loading() {
            FormState::Converting
        } else if let Some(err) = controller.error() {
            FormState::Failed(err.to_string())
        } else if controller.is_valid() {
            FormState::Ready
        } else {
            FormState::Empty
        };
        Self {
            mode: controller.input_mode().label().to_string(),
            sub_mode: controller
                .image_sub_mode()
                .map(|s| s.label().to_string()),
            is_image_selected: controller.is_image_selected(),
            state,
        }
    }
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned):
/// - `[Image: Upload image] source set  Converting...` (state in Yellow)
/// - `[JSON]  Ready to submit` (state in Green)
/// - `[URL]  Error: ...` (state in Red)
///
/// Renders nothing if `ctx.mode` is empty.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.mode.is_empty() {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);

    let mut spans: Vec<Span> = Vec::new();
    match &ctx.sub_mode {
        Some(sub) => spans.push(Span::styled(format!("[{}: {sub}]", ctx.mode), cyan)),
        None => spans.push(Span::styled(format!("[{}]", ctx.mode), cyan)),
    }
    if ctx.is_image_selected {
        spans.push(Span::styled(" source set", cyan));
    }
    spans.push(Span::raw("  "));

    match &ctx.state {
        FormState::Empty => spans.push(Span::styled(
            "No menu yet",
            Style::default().fg(Color::DarkGray),
        )),
        FormState::Ready => spans.push(Span::styled(
            "Ready to submit",
            Style::default().fg(Color::Green),
        )),
        FormState::Converting => spans.push(Span::styled(
            "Converting...",
            Style::default().fg(Color::Yellow),
        )),
        FormState::Failed(msg) => spans.push(Span::styled(
            format!("Error: {msg}"),
            Style::default().fg(Color::Red),
        )),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
