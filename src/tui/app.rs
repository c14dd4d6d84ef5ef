use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::controller::{ConversionOutcome, MenuInputController};
use crate::convert::{ConversionError, ConversionRequest, MenuConverter};
use crate::model::ModeSet;
use crate::route::{Navigator, Route};
use crate::store::{InMemoryMerchantStore, MerchantStore};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    HelpState, MenuDisplayState, MenuInputState, draw_help, draw_menu_display, draw_menu_input,
};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Enter, pick or convert the menu JSON.
    MenuInput,
    /// Show the submitted menu.
    MenuDisplay,
    /// Show keybinding help.
    Help,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::MenuInput => Screen::MenuInput,
            Route::MenuDisplay => Screen::MenuDisplay,
        }
    }
}

/// Routes controller navigation onto the app's current screen.
struct ScreenNavigator<'a>(&'a mut Screen);

impl Navigator for ScreenNavigator<'_> {
    fn navigate(&mut self, route: Route) {
        debug!(%route, "navigating");
        *self.0 = Screen::from(route);
    }
}

/// Text shown after a conversion attempt.
fn outcome_notice(outcome: ConversionOutcome) -> &'static str {
    match outcome {
        ConversionOutcome::Converted => "Menu converted. Review it and press Enter to submit.",
        ConversionOutcome::NotMenu => "No menu found in that input.",
        ConversionOutcome::Failed => "Conversion failed.",
        ConversionOutcome::NoInput => "Pick an image or enter a URL before converting.",
        ConversionOutcome::Busy => "A conversion is already running.",
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    store: InMemoryMerchantStore,
    menu_input: MenuInputState,
    menu_display: MenuDisplayState,
    help: HelpState,
    converter: Box<dyn MenuConverter>,
    runtime: Runtime,
    pending: Option<ConversionRequest>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::MenuInput`] screen.
    ///
    /// Conversions run on a current-thread runtime owned by the app.
    pub fn new(
        store: InMemoryMerchantStore,
        modes: ModeSet,
        converter: Box<dyn MenuConverter>,
    ) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let controller = MenuInputController::from_store(modes, &store);
        Ok(Self {
            screen: Screen::MenuInput,
            store,
            menu_input: MenuInputState::new(controller),
            menu_display: MenuDisplayState::new(),
            help: HelpState::new(),
            converter,
            runtime,
            pending: None,
            should_quit: false,
        })
    }

    /// Main event loop: draw → read event → dispatch → run any conversion.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Paste(text) => self.handle_paste(&text),
                _ => {}
            }
            if self.pending.is_some() {
                // Show the loading state before blocking on the call.
                terminal.draw(|frame| self.draw(frame))?;
                self.run_pending_conversion();
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::MenuInput => draw_menu_input(&self.menu_input, frame, area),
            Screen::MenuDisplay => {
                draw_menu_display(&self.menu_display, self.store.merchant(), frame, area)
            }
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::MenuInput => self.menu_input.handle_key(key),
            Screen::MenuDisplay => self.menu_display.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Handles bracketed paste. Only the input screen takes text.
    pub fn handle_paste(&mut self, text: &str) {
        let action = match self.screen {
            Screen::MenuInput => self.menu_input.handle_paste(text),
            Screen::MenuDisplay => self.menu_display.handle_paste(text),
            Screen::Help => self.help.handle_paste(text),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if screen == Screen::MenuDisplay {
                    self.menu_display.reset();
                }
                self.screen = screen;
            }
            Action::Submit => {
                let mut navigator = ScreenNavigator(&mut self.screen);
                let submitted = self
                    .menu_input
                    .controller_mut()
                    .submit(&mut self.store, &mut navigator);
                if submitted.is_ok() {
                    self.menu_display.reset();
                }
            }
            Action::Convert => self.begin_conversion(),
            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    fn begin_conversion(&mut self) {
        match self.menu_input.controller_mut().begin_conversion() {
            Ok(request) => self.pending = Some(request),
            Err(ConversionError::InFlight) => {
                self.menu_input
                    .set_notice(outcome_notice(ConversionOutcome::Busy));
            }
            Err(_) => {
                self.menu_input
                    .set_notice(outcome_notice(ConversionOutcome::NoInput));
            }
        }
    }

    /// Sends the conversion queued by the last key press, blocking until the
    /// service answers. Does nothing when none is queued.
    pub fn run_pending_conversion(&mut self) {
        let Some(request) = self.pending.take() else {
            return;
        };
        let result = self.runtime.block_on(self.converter.convert(request));
        let outcome = self.menu_input.controller_mut().finish_conversion(result);
        self.menu_input.set_notice(outcome_notice(outcome));
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the merchant store.
    pub fn store(&self) -> &InMemoryMerchantStore {
        &self.store
    }

    /// Returns the input screen state.
    pub fn menu_input(&self) -> &MenuInputState {
        &self.menu_input
    }

    /// Returns the conversion waiting to be sent, if any.
    pub fn pending_conversion(&self) -> Option<&ConversionRequest> {
        self.pending.as_ref()
    }
}
