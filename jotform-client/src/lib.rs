// jotform-client/src/lib.rs
//
// Thin client for the JotForm REST API. Every operation is a one-shot
// stateless call; payloads are returned as raw bytes for the caller to
// interpret.
pub mod client;
pub mod error;
pub mod http;
pub mod params;

mod folder;
mod form;
mod report;
mod submission;
mod system;
mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{JotformClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use http::{HttpClient, HttpError};
pub use params::{HistoryQuery, ListOptions, OutputFormat};

// Re-export reqwest client when feature is enabled
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
