use super::error::FormError;

/// The form's single source of truth for loading and error display.
///
/// Validity itself is not stored: it follows from the JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// No menu JSON and nothing to report.
    #[default]
    Idle,
    /// Menu JSON is present and no error is showing.
    Valid,
    /// A conversion call is in flight. `error` is whatever was showing when
    /// it started; it comes back if the call does not replace it.
    Loading { error: Option<FormError> },
    /// An error is showing.
    Error(FormError),
}

impl FormStatus {
    /// Returns `true` while a conversion call is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, FormStatus::Loading { .. })
    }

    /// Returns the error being shown, if any.
    pub fn error(&self) -> Option<&FormError> {
        match self {
            FormStatus::Error(e) | FormStatus::Loading { error: Some(e) } => Some(e),
            FormStatus::Idle | FormStatus::Valid | FormStatus::Loading { error: None } => None,
        }
    }

    /// Moves the showing error out, leaving the status otherwise untouched.
    pub(super) fn take_error(&mut self) -> Option<FormError> {
        match std::mem::take(self) {
            FormStatus::Error(e) => Some(e),
            FormStatus::Loading { error } => {
                *self = FormStatus::Loading { error: None };
                error
            }
            other => {
                *self = other;
                None
            }
        }
    }
}
