use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ConversionReply;
use super::error::ConversionError;

/// Value of `json` when the service judged the input not to be a menu.
pub const NOT_MENU_SENTINEL: &str = "NOT_MENU_INFO";

/// Body of `POST /generate-json-from-url`.
#[derive(Debug, Serialize)]
pub(crate) struct UrlConversionBody<'a> {
    #[serde(rename = "menuURL")]
    pub menu_url: &'a str,
}

/// Response of both conversion endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConversionResponse {
    #[serde(default)]
    pub json: Option<Value>,
}

impl ConversionResponse {
    /// Interprets the payload.
    ///
    /// A JSON string is taken verbatim; an object or array the service
    /// returned unquoted is serialized back to text.
    pub fn into_reply(self) -> Result<ConversionReply, ConversionError> {
        match self.json {
            None | Some(Value::Null) => Err(ConversionError::MissingPayload),
            Some(Value::String(s)) if s.is_empty() => Err(ConversionError::MissingPayload),
            Some(Value::String(s)) if s == NOT_MENU_SENTINEL => Ok(ConversionReply::NotMenu),
            Some(Value::String(s)) => Ok(ConversionReply::Menu(s)),
            Some(other @ (Value::Object(_) | Value::Array(_))) => {
                Ok(ConversionReply::Menu(other.to_string()))
            }
            Some(_) => Err(ConversionError::MissingPayload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(body: &str) -> Result<ConversionReply, ConversionError> {
        serde_json::from_str::<ConversionResponse>(body)
            .unwrap()
            .into_reply()
    }

    #[test]
    fn url_body_uses_service_field_name() {
        let body = UrlConversionBody {
            menu_url: "https://example.com/menu",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"menuURL":"https://example.com/menu"}"#
        );
    }

    #[test]
    fn string_payload_is_menu() {
        assert_eq!(
            reply(r#"{"json":"{\"name\":\"Pizza\"}"}"#),
            Ok(ConversionReply::Menu(r#"{"name":"Pizza"}"#.into()))
        );
    }

    #[test]
    fn sentinel_is_not_menu() {
        assert_eq!(
            reply(r#"{"json":"NOT_MENU_INFO"}"#),
            Ok(ConversionReply::NotMenu)
        );
    }

    #[test]
    fn object_payload_is_serialized() {
        assert_eq!(
            reply(r#"{"json":{"name":"Pizza"}}"#),
            Ok(ConversionReply::Menu(r#"{"name":"Pizza"}"#.into()))
        );
    }

    #[test]
    fn missing_null_empty_or_scalar_payload_is_an_error() {
        for body in [
            "{}",
            r#"{"json":null}"#,
            r#"{"json":""}"#,
            r#"{"json":42}"#,
            r#"{"other":"x"}"#,
        ] {
            assert_eq!(
                reply(body),
                Err(ConversionError::MissingPayload),
                "body {body}"
            );
        }
    }
}
