use std::fmt;

use super::validation::ValidationError;

/// How the user supplies the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Type or paste the menu JSON directly.
    #[default]
    UseSchema,
    /// Have the conversion service read a menu from a web page.
    UseUrl,
    /// Load one of the bundled example menus.
    UseExample,
    /// Have the conversion service read a menu from an image.
    UseImage,
}

static ALL_MODES: &[InputMode] = &[
    InputMode::UseSchema,
    InputMode::UseUrl,
    InputMode::UseExample,
    InputMode::UseImage,
];

impl InputMode {
    /// Returns the stable identifier for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::UseSchema => "useSchema",
            InputMode::UseUrl => "useURL",
            InputMode::UseExample => "useExample",
            InputMode::UseImage => "useImage",
        }
    }

    /// Returns the short label shown in the mode bar.
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::UseSchema => "JSON",
            InputMode::UseUrl => "URL",
            InputMode::UseExample => "Example",
            InputMode::UseImage => "Image",
        }
    }

    /// Returns all modes.
    pub fn all() -> &'static [InputMode] {
        ALL_MODES
    }

    /// Returns `true` if this mode sends its input to the conversion service.
    pub fn is_remote(&self) -> bool {
        matches!(self, InputMode::UseUrl | InputMode::UseImage)
    }
}

#[mutants::skip]
impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the image for [`InputMode::UseImage`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSubMode {
    /// A local image file.
    UploadImage,
    /// A link to an image.
    InsertUrl,
}

impl ImageSubMode {
    /// Returns the other sub-mode.
    pub fn toggled(self) -> Self {
        match self {
            ImageSubMode::UploadImage => ImageSubMode::InsertUrl,
            ImageSubMode::InsertUrl => ImageSubMode::UploadImage,
        }
    }

    /// Returns the label shown next to the sub-mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            ImageSubMode::UploadImage => "Upload image",
            ImageSubMode::InsertUrl => "Insert URL",
        }
    }
}

/// The ordered set of input modes a form offers.
///
/// Never empty and never contains duplicates. The first mode is the one a
/// fresh form starts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSet {
    modes: Vec<InputMode>,
}

impl ModeSet {
    /// Builds a mode set, dropping repeated modes but keeping first-seen order.
    pub fn new(modes: impl IntoIterator<Item = InputMode>) -> Result<Self, ValidationError> {
        let mut unique: Vec<InputMode> = Vec::new();
        for mode in modes {
            if !unique.contains(&mode) {
                unique.push(mode);
            }
        }
        if unique.is_empty() {
            return Err(ValidationError::EmptyModeSet);
        }
        Ok(Self { modes: unique })
    }

    /// Schema, URL and example modes.
    pub fn url_form() -> Self {
        Self {
            modes: vec![
                InputMode::UseSchema,
                InputMode::UseUrl,
                InputMode::UseExample,
            ],
        }
    }

    /// Schema, example and image modes.
    pub fn image_form() -> Self {
        Self {
            modes: vec![
                InputMode::UseSchema,
                InputMode::UseExample,
                InputMode::UseImage,
            ],
        }
    }

    /// Returns the modes in display order.
    pub fn modes(&self) -> &[InputMode] {
        &self.modes
    }

    /// Returns the starting mode.
    pub fn first(&self) -> InputMode {
        self.modes[0]
    }

    /// Returns `true` if `mode` is offered.
    pub fn contains(&self, mode: InputMode) -> bool {
        self.modes.contains(&mode)
    }

    /// Returns the mode after `mode`, wrapping around.
    ///
    /// A mode outside the set cycles to the first mode.
    pub fn next(&self, mode: InputMode) -> InputMode {
        match self.modes.iter().position(|m| *m == mode) {
            Some(i) => self.modes[(i + 1) % self.modes.len()],
            None => self.first(),
        }
    }

    /// Returns the mode before `mode`, wrapping around.
    pub fn prev(&self, mode: InputMode) -> InputMode {
        match self.modes.iter().position(|m| *m == mode) {
            Some(i) => self.modes[(i + self.modes.len() - 1) % self.modes.len()],
            None => self.first(),
        }
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        Self::image_form()
    }
}
