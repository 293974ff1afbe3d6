use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::errors::{Result, SigeaError};
use crate::models::common::{ApiResponse, PaginatedList};
use crate::session::Session;

/// HTTP transport shared by every resource client.
///
/// Attaches the bearer token when the session has one, unwraps the
/// `{success, message, data, pagination}` envelope and maps failures onto
/// the crate error taxonomy. A 401 clears the session before the error is
/// returned, so callers can route back to a login view.
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl Transport {
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        // timeout_secs == 0 keeps the original behavior of no client timeout
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub(crate) fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode the response envelope.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiResponse<T>> {
        let response = self.authorized(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Global 401 handling: drop the session once, then surface the
            // authentication error to the caller
            if let Err(e) = self.session.clear().await {
                warn!("Failed to clear session after 401: {e}");
            }
            let message = Self::backend_message(response).await;
            return Err(SigeaError::authentication(
                message.unwrap_or_else(|| "Sessao expirada, faca login novamente".to_string()),
            ));
        }

        if !status.is_success() {
            let message = Self::backend_message(response)
                .await
                .unwrap_or_else(|| format!("Request failed with status {status}"));
            return Err(match status {
                StatusCode::FORBIDDEN => SigeaError::authorization(message),
                StatusCode::NOT_FOUND => SigeaError::not_found(message),
                _ => SigeaError::backend(message),
            });
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.success {
            return Err(SigeaError::backend(
                envelope
                    .message
                    .unwrap_or_else(|| "Operation failed".to_string()),
            ));
        }
        Ok(envelope)
    }

    /// Backend-supplied message of a failed response, when the body still
    /// carries the envelope.
    async fn backend_message(response: reqwest::Response) -> Option<String> {
        response
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
    }

    fn require_data<T>(envelope: ApiResponse<T>) -> Result<T> {
        envelope
            .data
            .ok_or_else(|| SigeaError::api_contract("Response is missing its data field"))
    }

    pub async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        Self::require_data(self.execute(request).await?)
    }

    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<PaginatedList<T>> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let envelope: ApiResponse<Vec<T>> = self.execute(request).await?;
        let pagination = envelope.pagination().cloned();
        let items = Self::require_data(envelope)?;
        debug!(path, total = ?pagination.as_ref().map(|p| p.total), "list fetched");
        Ok(PaginatedList { items, pagination })
    }

    pub async fn post_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http.post(self.url(path)).json(body);
        Self::require_data(self.execute(request).await?)
    }

    pub async fn put_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http.put(self.url(path)).json(body);
        Self::require_data(self.execute(request).await?)
    }

    /// DELETE where the envelope carries no meaningful data.
    pub async fn delete_empty(&self, path: &str) -> Result<()> {
        let request = self.http.delete(self.url(path));
        let _: ApiResponse<serde_json::Value> = self.execute(request).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let request = self.http.post(self.url(path)).multipart(form);
        Self::require_data(self.execute(request).await?)
    }

    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let request = self.http.put(self.url(path)).multipart(form);
        Self::require_data(self.execute(request).await?)
    }

    /// Raw binary fetch (file download); no envelope on this route.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.authorized(self.http.get(self.url(path))).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            if let Err(e) = self.session.clear().await {
                warn!("Failed to clear session after 401: {e}");
            }
            return Err(SigeaError::authentication("Sessao expirada"));
        }
        if !status.is_success() {
            return Err(match status {
                StatusCode::NOT_FOUND => SigeaError::not_found("Arquivo nao encontrado"),
                _ => SigeaError::backend(format!("Download failed with status {status}")),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
