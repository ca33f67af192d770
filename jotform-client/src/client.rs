// jotform-client/src/client.rs
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::params::OutputFormat;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.jotform.com";
const API_VERSION: &str = "v1";

/// Client for the JotForm REST API, generic over the HTTP transport.
///
/// Every endpoint method issues a single stateless request and returns the
/// unwrapped response payload as raw bytes; no response schema is imposed on
/// the caller.
pub struct JotformClient<C: HttpClient> {
    pub(crate) http: C,
    base_url: String,
    output: OutputFormat,
}

#[cfg(feature = "reqwest")]
impl JotformClient<crate::http::ReqwestClient> {
    /// Create a client with the bundled reqwest transport.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_http(crate::http::ReqwestClient::new().with_api_key(api_key.into()))
    }
}

impl<C: HttpClient> JotformClient<C> {
    /// Create a client over a custom transport. The transport is responsible
    /// for attaching the `apiKey` header.
    pub fn with_http(http: C) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            output: OutputFormat::default(),
        }
    }

    /// Point the client at a different API host (EU residency endpoint,
    /// test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_output_format(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
    }

    fn endpoint(&self, path: &str) -> String {
        let suffix = match self.output {
            OutputFormat::Json => "",
            OutputFormat::Xml => ".xml",
        };
        format!("{}/{}/{}{}", self.base_url, API_VERSION, path, suffix)
    }

    pub(crate) async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Vec<u8>> {
        let url = self.endpoint(path);
        debug!(%url, ?query, "GET");
        let body = self.http.get(&url, query).await?;
        self.unwrap_envelope(body)
    }

    pub(crate) async fn post(&self, path: &str, form: &[(String, String)]) -> Result<Vec<u8>> {
        let url = self.endpoint(path);
        debug!(%url, ?form, "POST");
        let body = self.http.post_form(&url, form).await?;
        self.unwrap_envelope(body)
    }

    pub(crate) async fn put(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let url = self.endpoint(path);
        debug!(%url, body_len = body.len(), "PUT");
        let body = self.http.put(&url, body).await?;
        self.unwrap_envelope(body)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(path);
        debug!(%url, "DELETE");
        let body = self.http.delete(&url).await?;
        self.unwrap_envelope(body)
    }

    /// JSON responses arrive wrapped in an envelope object; the payload is
    /// its `content` field, re-encoded. XML responses pass through whole.
    fn unwrap_envelope(&self, body: Vec<u8>) -> Result<Vec<u8>> {
        if self.output == OutputFormat::Xml {
            return Ok(body);
        }

        let envelope: Value = serde_json::from_slice(&body)?;
        let object = envelope.as_object().ok_or(Error::UnexpectedResponse)?;

        match object.get("content") {
            Some(content) => Ok(serde_json::to_vec(content)?),
            None => Err(Error::Api {
                code: object.get("responseCode").and_then(Value::as_i64),
                message: object
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("response envelope has no content")
                    .to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockHttp, Recorded};

    #[tokio::test]
    async fn get_unwraps_content_field() {
        let http = MockHttp::returning(r#"{"responseCode":200,"content":{"username":"ada"}}"#);
        let client = JotformClient::with_http(http);

        let payload = client.get("user", &[]).await.unwrap();

        assert_eq!(payload, br#"{"username":"ada"}"#);
        let requests = client.http.take_requests();
        assert_eq!(
            requests,
            vec![Recorded::Get {
                url: "https://api.jotform.com/v1/user".to_string(),
                query: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn missing_content_surfaces_envelope_message() {
        let http = MockHttp::returning(r#"{"responseCode":401,"message":"Invalid API key"}"#);
        let client = JotformClient::with_http(http);

        let err = client.get("user", &[]).await.unwrap_err();

        match err {
            Error::Api { code, message } => {
                assert_eq!(code, Some(401));
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_object_body_is_rejected() {
        let http = MockHttp::returning("[1,2,3]");
        let client = JotformClient::with_http(http);

        let err = client.get("user", &[]).await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse));
    }

    #[tokio::test]
    async fn xml_mode_appends_suffix_and_passes_body_through() {
        let http = MockHttp::returning("<user><username>ada</username></user>");
        let client = JotformClient::with_http(http).with_output_format(OutputFormat::Xml);

        let payload = client.get("user", &[]).await.unwrap();

        assert_eq!(payload, b"<user><username>ada</username></user>");
        let requests = client.http.take_requests();
        assert_eq!(
            requests,
            vec![Recorded::Get {
                url: "https://api.jotform.com/v1/user.xml".to_string(),
                query: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn base_url_override_is_used() {
        let http = MockHttp::returning(r#"{"content":null}"#);
        let client = JotformClient::with_http(http).with_base_url("https://eu-api.jotform.com");

        client.get("user", &[]).await.unwrap();

        let requests = client.http.take_requests();
        assert_eq!(
            requests,
            vec![Recorded::Get {
                url: "https://eu-api.jotform.com/v1/user".to_string(),
                query: vec![],
            }]
        );
    }
}
