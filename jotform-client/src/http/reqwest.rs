// jotform-client/src/http/reqwest.rs
use super::{HttpClient, HttpError};
use async_trait::async_trait;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct ReqwestClient {
    inner: reqwest::Client,
    api_key: Option<String>,
}

impl ReqwestClient {
    pub fn new() -> Self {
        // The API intermittently drops kept-alive connections mid-response,
        // so reuse is disabled.
        let inner = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(0)
            .build()
            .expect("TLS backend initialization failed");

        Self {
            inner,
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    fn apply_key(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(key) = &self.api_key {
            req = req.header("apiKey", key);
        }
        req
    }

    async fn run(&self, req: reqwest::RequestBuilder) -> Result<Vec<u8>, HttpError> {
        let resp = self.apply_key(req).send().await.map_err(|e| HttpError {
            status: None,
            message: e.to_string(),
        })?;

        let status = resp.status();
        let is_success = status.is_success();
        let status_code = status.as_u16();

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| HttpError {
                status: Some(status_code),
                message: e.to_string(),
            })?
            .to_vec();

        if !is_success {
            return Err(HttpError {
                status: Some(status_code),
                message: String::from_utf8_lossy(&bytes).to_string(),
            });
        }

        Ok(bytes)
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>, HttpError> {
        let mut req = self.inner.get(url);
        if !query.is_empty() {
            req = req.query(query);
        }
        self.run(req.header("content-type", "application/x-www-form-urlencoded"))
            .await
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(String, String)],
    ) -> Result<Vec<u8>, HttpError> {
        self.run(self.inner.post(url).form(form)).await
    }

    async fn put(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>, HttpError> {
        self.run(self.inner.put(url).body(body)).await
    }

    async fn delete(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        self.run(self.inner.delete(url)).await
    }
}
