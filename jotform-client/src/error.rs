// jotform-client/src/error.rs
use crate::http::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or non-2xx status from the service
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Response body could not be parsed as JSON
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Response was not the expected envelope object
    #[error("unexpected non-json response")]
    UnexpectedResponse,

    /// The service answered 2xx but the envelope reported a failure
    #[error("API error: {message}")]
    Api {
        /// The envelope's `responseCode`, when present
        code: Option<i64>,
        message: String,
    },
}
