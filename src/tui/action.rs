//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// Screens only touch their own state. Anything that needs the store, the
/// converter or another screen goes through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Parse the menu JSON and store it.
    Submit,
    /// Send the picked image or URL to the conversion service.
    Convert,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;

    /// Process pasted text. Screens without text input ignore it.
    fn handle_paste(&mut self, _text: &str) -> Action {
        Action::None
    }
}
