//! Client for the remote service that turns a menu URL or image into menu
//! JSON text.

mod error;
mod http;
mod wire;

use async_trait::async_trait;

use crate::model::ImageFile;

pub use error::ConversionError;
pub use http::{API_KEY_HEADER, DEFAULT_API_URL, HttpConverter};
pub use wire::NOT_MENU_SENTINEL;

/// What to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionRequest {
    /// A web page showing the menu.
    Url(String),
    /// A local image of the menu.
    Image(ImageFile),
}

impl ConversionRequest {
    /// Path of the service endpoint that handles this request.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ConversionRequest::Url(_) => "/generate-json-from-url",
            ConversionRequest::Image(_) => "/generate-json-from-image",
        }
    }
}

/// A successful answer from the conversion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionReply {
    /// Menu JSON text.
    Menu(String),
    /// The input was read but does not look like a menu.
    NotMenu,
}

/// Converts menu URLs and images into menu JSON.
#[async_trait]
pub trait MenuConverter: Send + Sync {
    async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionReply, ConversionError>;
}
