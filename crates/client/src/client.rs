// crates/client/src/client.rs
//! The shared HTTP client and its request plumbing.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::extract_error_message;
use crate::{ApiError, ClientConfig};

/// Async client for the Fin Manager backend.
///
/// Cheap to clone is not a goal — share it behind an `Arc`. The underlying
/// reqwest client carries a cookie store so the backend session cookie set
/// at login rides along on every call.
pub struct FinanceClient {
    http: reqwest::Client,
    base_url: String,
}

impl FinanceClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a response to `Ok` or an [`ApiError::Api`], logging either way.
    async fn check(resp: Response, method: &'static str, path: &str) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            tracing::debug!(method, path, status = status.as_u16(), "request ok");
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        tracing::warn!(method, path, status = status.as_u16(), %message, "request failed");
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self.http.get(self.url(path)).query(query).send().await?;
        Ok(Self::check(resp, "GET", path).await?.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Ok(Self::check(resp, "POST", path).await?.json().await?)
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        Ok(Self::check(resp, "PUT", path).await?.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.http.delete(self.url(path)).send().await?;
        Self::check(resp, "DELETE", path).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let resp = self.http.post(self.url(path)).multipart(form).send().await?;
        Ok(Self::check(resp, "POST", path).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = FinanceClient::new(ClientConfig::new("http://host/api/v1/")).unwrap();
        assert_eq!(client.base_url(), "http://host/api/v1");
        assert_eq!(client.url("/finance/accounts/"), "http://host/api/v1/finance/accounts/");
    }
}
