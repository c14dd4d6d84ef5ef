use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, error};

use super::error::ConversionError;
use super::wire::{ConversionResponse, UrlConversionBody};
use super::{ConversionReply, ConversionRequest, MenuConverter};
use crate::model::ImageFile;

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "app";

/// [`MenuConverter`] backed by the HTTP conversion service.
#[derive(Debug, Clone)]
pub struct HttpConverter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpConverter {
    /// Creates a converter for the service at `base_url`. Trailing slashes
    /// are ignored.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn convert_url(
        &self,
        endpoint: &str,
        menu_url: &str,
    ) -> Result<reqwest::Response, ConversionError> {
        let response = self
            .client
            .post(self.url(endpoint))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&UrlConversionBody { menu_url })
            .send()
            .await?;
        Ok(response)
    }

    async fn convert_image(
        &self,
        endpoint: &str,
        file: &ImageFile,
    ) -> Result<reqwest::Response, ConversionError> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|e| ConversionError::ImageRead {
                path: file.path().to_path_buf(),
                reason: e.to_string(),
            })?;
        debug!(name = file.name(), size = bytes.len(), "uploading menu image");

        let mut part = Part::bytes(bytes).file_name(file.name().to_string());
        if let Some(mime) = file.mime_type() {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.url(endpoint))
            .header(API_KEY_HEADER, &self.api_key)
            .multipart(form)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl MenuConverter for HttpConverter {
    async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionReply, ConversionError> {
        let endpoint = request.endpoint();
        let response = match &request {
            ConversionRequest::Url(menu_url) => self.convert_url(endpoint, menu_url).await?,
            ConversionRequest::Image(file) => self.convert_image(endpoint, file).await?,
        };

        let status = response.status();
        if !status.is_success() {
            error!(
                endpoint,
                status = status.as_u16(),
                "conversion service rejected request"
            );
            return Err(ConversionError::Status(status.as_u16()));
        }

        let body: ConversionResponse = response.json().await?;
        body.into_reply()
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    /// Accepts one connection on a local port, answers it with `status` and
    /// `body`, and yields the raw request it received.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            let head_len = loop {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "connection closed before the headers ended");
                raw.extend_from_slice(&buf[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let content_length = String::from_utf8_lossy(&raw[..head_len])
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().unwrap())
                })
                .unwrap_or(0);
            while raw.len() < head_len + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }

            let reply = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&raw).into_owned()
        });
        (base_url, handle)
    }

    /// A converter that talks to `base_url` directly, ignoring proxy
    /// settings from the environment.
    fn local_converter(base_url: &str) -> HttpConverter {
        HttpConverter {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
            ..HttpConverter::new(base_url, "secret")
        }
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let converter = HttpConverter::new("http://localhost:5000/api//", "key");
        assert_eq!(converter.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn url_joins_with_and_without_slash() {
        let converter = HttpConverter::new(DEFAULT_API_URL, "key");
        assert_eq!(
            converter.url("/generate-json-from-url"),
            "http://127.0.0.1:5000/api/generate-json-from-url"
        );
        assert_eq!(
            converter.url("generate-json-from-image"),
            "http://127.0.0.1:5000/api/generate-json-from-image"
        );
    }

    #[test]
    fn endpoints_per_request_kind() {
        assert_eq!(
            ConversionRequest::Url("https://example.com".into()).endpoint(),
            "/generate-json-from-url"
        );
        assert_eq!(
            ConversionRequest::Image(ImageFile::new("menu.png")).endpoint(),
            "/generate-json-from-image"
        );
    }

    #[tokio::test]
    async fn url_conversion_posts_menu_url_with_key() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"json":"{\"name\":\"Pizza\"}"}"#).await;

        let reply = local_converter(&base_url)
            .convert(ConversionRequest::Url("https://example.com/menu".into()))
            .await;
        let request = server.await.unwrap();

        assert_eq!(reply, Ok(ConversionReply::Menu(r#"{"name":"Pizza"}"#.into())));
        assert!(request.starts_with("POST /api/generate-json-from-url HTTP/1.1\r\n"));
        assert!(request.contains("\r\napp: secret\r\n"));
        assert!(request.contains("application/json"));
        assert!(request.ends_with(r#"{"menuURL":"https://example.com/menu"}"#));
    }

    #[tokio::test]
    async fn image_conversion_uploads_multipart_image_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.png");
        std::fs::write(&path, b"not really a png").unwrap();
        let (base_url, server) = serve_once("200 OK", r#"{"json":{"name":"Pizza"}}"#).await;

        let reply = local_converter(&base_url)
            .convert(ConversionRequest::Image(ImageFile::new(&path)))
            .await;
        let request = server.await.unwrap();

        assert_eq!(reply, Ok(ConversionReply::Menu(r#"{"name":"Pizza"}"#.into())));
        assert!(request.starts_with("POST /api/generate-json-from-image HTTP/1.1\r\n"));
        assert!(request.contains("\r\napp: secret\r\n"));
        assert!(request.contains("multipart/form-data; boundary="));
        assert!(request.contains(r#"name="image"; filename="menu.png""#));
        assert!(request.contains("image/png"));
        assert!(request.contains("not really a png"));
    }

    #[tokio::test]
    async fn error_status_is_reported_with_its_code() {
        let (base_url, server) =
            serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        let reply = local_converter(&base_url)
            .convert(ConversionRequest::Url("https://example.com/menu".into()))
            .await;
        server.await.unwrap();

        assert_eq!(reply, Err(ConversionError::Status(500)));
    }

    #[tokio::test]
    async fn sentinel_reply_is_not_a_menu() {
        let (base_url, server) = serve_once("200 OK", r#"{"json":"NOT_MENU_INFO"}"#).await;

        let reply = local_converter(&base_url)
            .convert(ConversionRequest::Url("https://example.com/cat.jpg".into()))
            .await;
        server.await.unwrap();

        assert_eq!(reply, Ok(ConversionReply::NotMenu));
    }

    #[tokio::test]
    async fn missing_image_fails_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        let converter = HttpConverter::new("http://127.0.0.1:9", "key");
        let result = converter
            .convert(ConversionRequest::Image(ImageFile::new(&path)))
            .await;
        match result {
            Err(ConversionError::ImageRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ImageRead, got {other:?}"),
        }
    }
}
