//! HTTP client for the Mobile Services templated card registration endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Response, StatusCode};
use tracing::debug;

use super::wire::{
    parse_list_response, RegistrationMethod, RegistrationRequest, RegistrationScope, RemoteCard,
};
use super::CardRegistry;
use crate::models::CardParameters;
use crate::sync::{SyncError, SyncResult};
use crate::util::{compact_text, normalize_base_url};

/// Path of the templated registration endpoint below the service base URL.
pub const REGISTRATION_PATH: &str = "/mobileservices/origin/hcpms/CARDS/v1/register/templated";

/// reqwest-backed [`CardRegistry`].
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    endpoint: String,
    client: reqwest::Client,
}

impl RegistrationClient {
    /// Builds a client for an explicit service base URL.
    pub fn new(base_url: impl Into<String>) -> SyncResult<Self> {
        Self::build(base_url.into(), reqwest::Client::builder())
    }

    /// Builds a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> SyncResult<Self> {
        Self::build(base_url.into(), reqwest::Client::builder().timeout(timeout))
    }

    fn build(base_url: String, builder: reqwest::ClientBuilder) -> SyncResult<Self> {
        let base_url =
            normalize_base_url(&base_url, "base_url").map_err(SyncError::InvalidConfiguration)?;
        Ok(Self {
            endpoint: format!("{base_url}{REGISTRATION_PATH}"),
            client: builder.build()?,
        })
    }

    /// Returns the full registration endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(
        &self,
        request: &RegistrationRequest<'_>,
        expected: StatusCode,
    ) -> SyncResult<Response> {
        debug!(method = %request.method, username = request.username, "Mobile Cards request");
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        if response.status() != expected {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Status {
                method: request.method,
                status,
                body: compact_text(&body),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CardRegistry for RegistrationClient {
    async fn list(&self, scope: &RegistrationScope) -> SyncResult<Vec<RemoteCard>> {
        let request = RegistrationRequest::new(RegistrationMethod::List, scope);
        let response = self.send(&request, StatusCode::OK).await?;
        let body = response.text().await?;
        debug!(body = %compact_text(&body), "Query Cards");
        parse_list_response(&body)
    }

    async fn register(
        &self,
        scope: &RegistrationScope,
        parameters: &CardParameters,
        link: &str,
    ) -> SyncResult<()> {
        let request = RegistrationRequest::new(RegistrationMethod::Register, scope)
            .with_parameters(parameters)
            .with_link(link);
        self.send(&request, StatusCode::OK).await?;
        Ok(())
    }

    async fn delete(
        &self,
        scope: &RegistrationScope,
        parameters: &CardParameters,
    ) -> SyncResult<()> {
        let request =
            RegistrationRequest::new(RegistrationMethod::Delete, scope).with_parameters(parameters);
        self.send(&request, StatusCode::OK).await?;
        Ok(())
    }

    async fn delete_all(&self, scope: &RegistrationScope) -> SyncResult<()> {
        let request = RegistrationRequest::new(RegistrationMethod::DeleteAll, scope);
        self.send(&request, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}
