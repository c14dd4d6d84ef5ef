use crate::convert::ConversionError;
use crate::model::{InputMode, ValidationError};

/// Why a submit was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// There is no menu JSON to submit.
    #[error("paste a menu, pick an example or generate one before continuing")]
    EmptyInput,

    /// The menu JSON is not a well-formed menu record.
    #[error("error parsing JSON, the menu data is incomplete; please try again ({0})")]
    ParseFailure(#[from] ValidationError),
}

/// An error the form is currently showing to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// The requested input mode is not offered by this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input mode {0} is not available in this form")]
pub struct ModeUnavailable(pub InputMode);
