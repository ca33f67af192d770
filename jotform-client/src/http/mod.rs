// jotform-client/src/http/mod.rs
use async_trait::async_trait;

/// Error from HTTP request
#[derive(Debug, Clone)]
pub struct HttpError {
    pub status: Option<u16>,
    pub message: String,
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(status) = self.status {
            write!(f, "HTTP error {}: {}", status, self.message)
        } else {
            write!(f, "HTTP error: {}", self.message)
        }
    }
}

impl std::error::Error for HttpError {}

/// Generic HTTP client trait - users can implement their own
///
/// The JotForm surface needs exactly four request shapes: GET with query
/// parameters, an urlencoded form POST, a raw-body PUT and a bare DELETE.
/// Query and form pairs are encoded by the transport.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET with query parameters, return response bytes
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>, HttpError>;

    /// POST an application/x-www-form-urlencoded body
    async fn post_form(&self, url: &str, form: &[(String, String)])
        -> Result<Vec<u8>, HttpError>;

    /// PUT a pre-encoded body
    async fn put(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>, HttpError>;

    /// DELETE, no body
    async fn delete(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(feature = "reqwest")]
pub use reqwest::ReqwestClient;
