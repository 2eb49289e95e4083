//! HTTP client with bearer authentication and envelope unwrapping
//!
//! Every call goes out exactly once. Failures are mapped onto
//! [`ClientError`] at this boundary so callers never see a raw
//! `reqwest` error without context.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::credential::CredentialProvider;
use crate::error::{ClientError, Result};
use crate::model::ApiResponse;

/// HTTP client shared by every resource of one session
pub struct EquusHttpClient {
    client: Client,
    config: ClientConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl EquusHttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig("base url is empty".to_string()));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialProvider> {
        &self.credentials
    }

    /// Build full URL with context path
    pub(crate) fn build_url(&self, path: &str) -> String {
        let base_url = self.config.base_url.trim_end_matches('/');
        let context_path = self.config.context_path.trim_matches('/');

        if context_path.is_empty() {
            format!("{}{}", base_url, path)
        } else {
            format!("{}/{}{}", base_url, context_path, path)
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T> {
        self.execute(
            |client, url, token| async move {
                with_bearer(client.get(&url), token.as_deref()).send().await
            },
            path,
            fallback,
        )
        .await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        fallback: &str,
    ) -> Result<T> {
        self.execute(
            |client, url, token| async move {
                with_bearer(client.get(&url), token.as_deref())
                    .query(query)
                    .send()
                    .await
            },
            path,
            fallback,
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        self.execute(
            |client, url, token| async move {
                with_bearer(client.post(&url), token.as_deref())
                    .json(body)
                    .send()
                    .await
            },
            path,
            fallback,
        )
        .await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        self.execute(
            |client, url, token| async move {
                with_bearer(client.put(&url), token.as_deref())
                    .json(body)
                    .send()
                    .await
            },
            path,
            fallback,
        )
        .await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        self.execute(
            |client, url, token| async move {
                with_bearer(client.patch(&url), token.as_deref())
                    .json(body)
                    .send()
                    .await
            },
            path,
            fallback,
        )
        .await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T> {
        self.execute(
            |client, url, token| async move {
                with_bearer(client.delete(&url), token.as_deref())
                    .send()
                    .await
            },
            path,
            fallback,
        )
        .await
    }

    /// Issue one request and unwrap the envelope. No retries.
    async fn execute<T, F, Fut>(&self, request_fn: F, path: &str, fallback: &str) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(Client, String, Option<String>) -> Fut,
        Fut: std::future::Future<Output = std::result::Result<Response, reqwest::Error>>,
    {
        let url = self.build_url(path);
        let token = self.credentials.token();

        debug!("Sending request to {}", url);

        match request_fn(self.client.clone(), url, token).await {
            Ok(response) => self.handle_response(response, fallback).await,
            Err(e) => {
                warn!("Request to {} failed: {}", path, e);
                Err(e.into())
            }
        }
    }

    /// Handle response status and parse the envelope
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        fallback: &str,
    ) -> Result<T> {
        let status = response.status();
        debug!("Response status {} from {}", status, response.url().path());

        if status == StatusCode::FORBIDDEN {
            warn!("Session rejected by server, clearing credential");
            self.credentials.clear();
            return Err(ClientError::SessionExpired);
        }

        let body = response.text().await?;

        if status.is_success() {
            let envelope: ApiResponse<T> = serde_json::from_str(&body)?;
            return envelope.into_result(fallback);
        }

        error!("Request failed with status {}: {}", status, body);

        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|e| e.message().map(str::to_string));

        Err(ClientError::Request {
            message: message.unwrap_or_else(|| fallback.to_string()),
            kind: None,
            code: Some(i64::from(status.as_u16())),
        })
    }
}

fn with_bearer(builder: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
        None => builder,
    }
}
