use tracing::{debug, error, info, warn};

use super::error::{FormError, ModeUnavailable, SubmitError};
use super::status::FormStatus;
use crate::convert::{ConversionError, ConversionReply, ConversionRequest, MenuConverter};
use crate::model::{Example, ImageFile, ImageSubMode, InputMode, ModeSet, parse_merchant};
use crate::route::{Navigator, Route};
use crate::store::MerchantStore;

/// Text put in the JSON field when a conversion produced no menu.
pub const GUIDANCE_MESSAGE: &str = "We could not extract a menu from this input. \
The image may be unreadable, may not show a menu, may be corrupted, or may be too large. \
Try again with a clearer picture, or split a long menu into several smaller images.";

/// What a conversion attempt did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Menu JSON was put in the JSON field.
    Converted,
    /// The service did not recognize a menu; guidance text was put in the
    /// JSON field.
    NotMenu,
    /// The call failed; guidance text was put in the JSON field and the
    /// error is showing.
    Failed,
    /// There was no image or URL, so nothing was sent.
    NoInput,
    /// Another conversion is still running, so nothing was sent.
    Busy,
}

/// State machine behind the menu input form.
///
/// Owns every form field. All mutation goes through its methods, each of
/// which leaves the derived state (validity, enablement, image selection)
/// consistent.
#[derive(Debug, Clone)]
pub struct MenuInputController {
    modes: ModeSet,
    examples: Vec<Example>,
    input_mode: InputMode,
    image_sub_mode: Option<ImageSubMode>,
    json_text: String,
    menu_url: String,
    selected_file: Option<ImageFile>,
    selected_example: Option<String>,
    status: FormStatus,
}

impl MenuInputController {
    /// Creates an empty form offering `modes`, starting in the first one.
    pub fn new(modes: ModeSet, examples: Vec<Example>) -> Self {
        let input_mode = modes.first();
        Self {
            modes,
            examples,
            input_mode,
            image_sub_mode: None,
            json_text: String::new(),
            menu_url: String::new(),
            selected_file: None,
            selected_example: None,
            status: FormStatus::Idle,
        }
    }

    /// Creates an empty form offering the store's examples.
    pub fn from_store<S: MerchantStore + ?Sized>(modes: ModeSet, store: &S) -> Self {
        Self::new(modes, store.examples().to_vec())
    }

    // --- Accessors ---

    pub fn modes(&self) -> &ModeSet {
        &self.modes
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn image_sub_mode(&self) -> Option<ImageSubMode> {
        self.image_sub_mode
    }

    pub fn json_text(&self) -> &str {
        &self.json_text
    }

    pub fn menu_url(&self) -> &str {
        &self.menu_url
    }

    pub fn selected_file(&self) -> Option<&ImageFile> {
        self.selected_file.as_ref()
    }

    /// Name of the example last copied into the JSON field.
    pub fn selected_example(&self) -> Option<&str> {
        self.selected_example.as_deref()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    // --- Derived state ---

    /// Returns `true` when there is menu JSON to submit.
    pub fn is_valid(&self) -> bool {
        !self.json_text.is_empty()
    }

    /// Returns `true` when the form should display an error.
    pub fn show_error(&self) -> bool {
        self.status.error().is_some()
    }

    /// Returns the error the form displays, if any.
    pub fn error(&self) -> Option<&FormError> {
        self.status.error()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Returns `true` when a conversion has something to work with.
    pub fn is_image_selected(&self) -> bool {
        !self.menu_url.is_empty() || self.selected_file.is_some()
    }

    /// Recomputes whether a conversion has a file or URL to work with.
    ///
    /// Image selection is derived from the fields, so this only reports it.
    pub fn check_image_selection(&self) -> bool {
        self.is_image_selected()
    }

    /// Returns `true` when the user may type into the JSON field.
    pub fn is_json_editable(&self) -> bool {
        self.input_mode == InputMode::UseSchema
    }

    /// Returns `true` when the URL field accepts input.
    pub fn is_url_enabled(&self) -> bool {
        match self.input_mode {
            InputMode::UseUrl => true,
            InputMode::UseImage => self.image_sub_mode == Some(ImageSubMode::InsertUrl),
            InputMode::UseSchema | InputMode::UseExample => false,
        }
    }

    /// Returns `true` when an image file may be picked.
    pub fn is_file_enabled(&self) -> bool {
        self.input_mode == InputMode::UseImage
            && self.image_sub_mode == Some(ImageSubMode::UploadImage)
    }

    /// Returns `true` when the image sub-mode selector is active.
    pub fn is_sub_mode_enabled(&self) -> bool {
        self.input_mode == InputMode::UseImage
    }

    // --- Mode transitions ---

    /// Switches the input mode.
    ///
    /// Always clears the JSON text and any error or loading state, then
    /// resets the fields the new mode does not use.
    pub fn select_mode(&mut self, mode: InputMode) -> Result<(), ModeUnavailable> {
        if !self.modes.contains(mode) {
            warn!(%mode, "input mode not offered by this form");
            return Err(ModeUnavailable(mode));
        }
        debug!(from = %self.input_mode, to = %mode, "switching input mode");

        self.input_mode = mode;
        self.json_text.clear();
        self.selected_example = None;
        self.status = FormStatus::Idle;

        self.image_sub_mode = None;
        self.selected_file = None;
        // Only URL mode keeps the URL; image mode starts with no source.
        if mode != InputMode::UseUrl {
            self.menu_url.clear();
        }
        self.check_validity();
        Ok(())
    }

    /// Picks where the image comes from. Ignored outside image mode.
    ///
    /// Choosing one source clears the other, so at most one of file and URL
    /// is ever set under image mode.
    pub fn select_image_sub_mode(&mut self, sub_mode: ImageSubMode) {
        if self.input_mode != InputMode::UseImage {
            debug!(mode = %self.input_mode, "image sub-mode ignored outside image mode");
            return;
        }
        self.image_sub_mode = Some(sub_mode);
        match sub_mode {
            ImageSubMode::UploadImage => self.menu_url.clear(),
            ImageSubMode::InsertUrl => self.selected_file = None,
        }
        self.clear_error();
    }

    // --- Field edits ---

    /// Copies an example's JSON into the form. Only applies in example mode.
    pub fn select_example(&mut self, example: &Example) {
        if self.input_mode != InputMode::UseExample {
            debug!(name = %example.name, "example ignored outside example mode");
            return;
        }
        self.selected_example = Some(example.name.clone());
        self.json_text = example.text.clone();
        self.check_validity();
    }

    /// Looks up an example by name and selects it. Unknown names are ignored.
    pub fn select_example_by_name(&mut self, name: &str) {
        let Some(example) = self.examples.iter().find(|e| e.name == name).cloned() else {
            debug!(name, "no example with that name");
            return;
        };
        self.select_example(&example);
    }

    /// Replaces the JSON text. Only applies when the field is editable.
    pub fn set_json_text(&mut self, text: impl Into<String>) {
        if !self.is_json_editable() {
            return;
        }
        self.json_text = text.into();
        self.check_validity();
    }

    /// Appends a typed character to the JSON field.
    pub fn push_json_char(&mut self, ch: char) {
        if !self.is_json_editable() {
            return;
        }
        self.json_text.push(ch);
        self.check_validity();
    }

    /// Appends text to the JSON field, e.g. a paste.
    pub fn push_json_str(&mut self, text: &str) {
        if !self.is_json_editable() {
            return;
        }
        self.json_text.push_str(text);
        self.check_validity();
    }

    /// Removes the last character of the JSON field.
    pub fn pop_json_char(&mut self) {
        if !self.is_json_editable() {
            return;
        }
        self.json_text.pop();
        self.check_validity();
    }

    /// Empties the JSON field regardless of mode.
    pub fn clear_json_text(&mut self) {
        self.json_text.clear();
        self.check_validity();
    }

    /// Records the image to convert. Ignored unless the file field is
    /// enabled.
    ///
    /// The file and URL fields are never enabled together, and picking a
    /// sub-mode clears the other source, so at most one is ever set.
    pub fn upload_file(&mut self, file: ImageFile) {
        if !self.is_file_enabled() {
            debug!(name = file.name(), "image ignored while the file field is disabled");
            return;
        }
        debug!(name = file.name(), "image selected");
        self.selected_file = Some(file);
    }

    /// Updates the menu URL. Ignored unless the URL field is enabled.
    pub fn change_url(&mut self, value: impl Into<String>) {
        if !self.is_url_enabled() {
            debug!(mode = %self.input_mode, "URL ignored while the URL field is disabled");
            return;
        }
        self.menu_url = value.into();
    }

    /// Recomputes the status after the JSON text changed.
    ///
    /// Loading and error states stay until a conversion finishes or the
    /// mode changes.
    pub fn check_validity(&mut self) {
        if matches!(self.status, FormStatus::Loading { .. } | FormStatus::Error(_)) {
            return;
        }
        self.status = if self.is_valid() {
            FormStatus::Valid
        } else {
            FormStatus::Idle
        };
    }

    fn clear_error(&mut self) {
        self.status.take_error();
        self.check_validity();
    }

    // --- Conversion ---

    /// Starts a conversion: picks the request and enters the loading state.
    ///
    /// A picked image wins over a URL. With neither, nothing changes and
    /// [`ConversionError::NoInputProvided`] is returned.
    pub fn begin_conversion(&mut self) -> Result<ConversionRequest, ConversionError> {
        if self.is_loading() {
            warn!("conversion requested while another is running");
            return Err(ConversionError::InFlight);
        }
        let request = if let Some(file) = &self.selected_file {
            ConversionRequest::Image(file.clone())
        } else if !self.menu_url.is_empty() {
            ConversionRequest::Url(self.menu_url.clone())
        } else {
            warn!("conversion requested without an image or URL");
            return Err(ConversionError::NoInputProvided);
        };

        info!(endpoint = request.endpoint(), "requesting menu conversion");
        let error = self.status.take_error();
        self.status = FormStatus::Loading { error };
        Ok(request)
    }

    /// Applies the result of the call started by
    /// [`begin_conversion`](Self::begin_conversion) and leaves the loading state.
    pub fn finish_conversion(
        &mut self,
        result: Result<ConversionReply, ConversionError>,
    ) -> ConversionOutcome {
        let earlier_error = self.status.take_error();
        self.status = match earlier_error {
            Some(e) => FormStatus::Error(e),
            None => FormStatus::Idle,
        };

        match result {
            Ok(ConversionReply::Menu(json)) => {
                info!(bytes = json.len(), "menu conversion succeeded");
                self.json_text = json;
                self.check_validity();
                ConversionOutcome::Converted
            }
            Ok(ConversionReply::NotMenu) => {
                warn!("conversion service found no menu in the input");
                self.json_text = GUIDANCE_MESSAGE.to_string();
                self.check_validity();
                ConversionOutcome::NotMenu
            }
            Err(e) => {
                error!(error = %e, "menu conversion failed");
                self.json_text = GUIDANCE_MESSAGE.to_string();
                self.status = FormStatus::Error(FormError::Conversion(e));
                ConversionOutcome::Failed
            }
        }
    }

    /// Runs a whole conversion against `converter`.
    pub async fn request_conversion<C: MenuConverter + ?Sized>(
        &mut self,
        converter: &C,
    ) -> ConversionOutcome {
        let request = match self.begin_conversion() {
            Ok(request) => request,
            Err(ConversionError::InFlight) => return ConversionOutcome::Busy,
            Err(_) => return ConversionOutcome::NoInput,
        };
        let result = converter.convert(request).await;
        self.finish_conversion(result)
    }

    // --- Submit ---

    /// Parses the JSON text, stores the menu and moves to the display route.
    ///
    /// On failure the error is shown, the text is kept for correction and
    /// neither `store` nor `navigator` is touched.
    pub fn submit<S, N>(&mut self, store: &mut S, navigator: &mut N) -> Result<(), SubmitError>
    where
        S: MerchantStore + ?Sized,
        N: Navigator + ?Sized,
    {
        if self.json_text.is_empty() {
            warn!("submit attempted without menu JSON");
            return Err(self.fail_submit(SubmitError::EmptyInput));
        }
        match parse_merchant(&self.json_text) {
            Ok(merchant) => {
                info!(name = merchant.display_name(), "menu accepted");
                store.set_merchant(merchant);
                navigator.navigate(Route::MenuDisplay);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "menu JSON rejected");
                Err(self.fail_submit(SubmitError::ParseFailure(e)))
            }
        }
    }

    fn fail_submit(&mut self, err: SubmitError) -> SubmitError {
        self.status = FormStatus::Error(FormError::Submit(err.clone()));
        err
    }
}
