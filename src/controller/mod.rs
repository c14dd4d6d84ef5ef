//! The menu input form: mode switching, validation, conversion and submit.

mod error;
mod menu_input;
mod status;

pub use error::{FormError, ModeUnavailable, SubmitError};
pub use menu_input::{ConversionOutcome, GUIDANCE_MESSAGE, MenuInputController};
pub use status::FormStatus;
