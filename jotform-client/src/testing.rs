// jotform-client/src/testing.rs
//
// In-crate mock transport. Records every request issued through the
// `HttpClient` seam and replays a canned response body.
use crate::http::{HttpClient, HttpError};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Recorded {
    Get {
        url: String,
        query: Vec<(String, String)>,
    },
    PostForm {
        url: String,
        form: Vec<(String, String)>,
    },
    Put {
        url: String,
        body: Vec<u8>,
    },
    Delete {
        url: String,
    },
}

pub(crate) struct MockHttp {
    requests: Mutex<Vec<Recorded>>,
    response: Vec<u8>,
}

impl MockHttp {
    pub(crate) fn returning(response: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: response.as_bytes().to_vec(),
        }
    }

    pub(crate) fn take_requests(&self) -> Vec<Recorded> {
        std::mem::take(&mut self.requests.lock().unwrap())
    }

    fn record(&self, request: Recorded) -> Result<Vec<u8>, HttpError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Drain the requests a client issued through a [`MockHttp`] transport.
pub(crate) fn requests_of(client: &crate::client::JotformClient<MockHttp>) -> Vec<Recorded> {
    client.http.take_requests()
}

#[async_trait]
impl HttpClient for MockHttp {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>, HttpError> {
        self.record(Recorded::Get {
            url: url.to_string(),
            query: query.to_vec(),
        })
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(String, String)],
    ) -> Result<Vec<u8>, HttpError> {
        self.record(Recorded::PostForm {
            url: url.to_string(),
            form: form.to_vec(),
        })
    }

    async fn put(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>, HttpError> {
        self.record(Recorded::Put {
            url: url.to_string(),
            body,
        })
    }

    async fn delete(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        self.record(Recorded::Delete {
            url: url.to_string(),
        })
    }
}
