use std::path::{Path, PathBuf};

/// A local image picked for conversion.
///
/// Only the path is held; the bytes are read when the conversion request is
/// sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    path: PathBuf,
    name: String,
}

impl ImageFile {
    /// Creates a handle for the image at `path`. The display name is the
    /// file name, or the whole path when it has none.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Guesses the MIME type from the file extension.
    pub fn mime_type(&self) -> Option<&'static str> {
        let ext = self.path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            "bmp" => Some("image/bmp"),
            "tif" | "tiff" => Some("image/tiff"),
            "heic" => Some("image/heic"),
            _ => None,
        }
    }
}
