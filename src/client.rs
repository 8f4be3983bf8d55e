//! HTTP client for the clinic REST API.
//!
//! Every call is a single request/response round trip: no retries, no
//! caching. A non-success status becomes [`ClientError::Status`] carrying the
//! server's error text.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::models::user::ROLE_DOCTOR;
use crate::models::{ErrorResponse, MessageResponse, Resource, User};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url {url}: {source}")]
    BaseUrl { url: String, source: url::ParseError },
    #[error("base url {0} cannot carry a path")]
    CannotBeABase(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method} {path} returned {status}: {message}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct ClinicClient {
    http: reqwest::Client,
    base: Url,
}

impl ClinicClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|source| ClientError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::CannotBeABase(base_url.to_string()));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// `GET /{resource}` with optional query filters.
    pub async fn list<R: Resource>(&self, filters: &[(&str, String)]) -> Result<Vec<R>, ClientError> {
        let request = self.request(Method::GET, &[R::PATH]).query(filters);
        self.send(Method::GET, request).await
    }

    /// `GET /{resource}/{id}`
    pub async fn get<R: Resource>(&self, id: i64) -> Result<R, ClientError> {
        let id = id.to_string();
        let request = self.request(Method::GET, &[R::PATH, &id]);
        self.send(Method::GET, request).await
    }

    /// `POST /{resource}`
    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::POST, &[R::PATH]).json(payload);
        self.send(Method::POST, request).await
    }

    /// `PUT /{resource}/{id}`
    pub async fn update<R: Resource>(&self, id: i64, payload: &R::Payload) -> Result<MessageResponse, ClientError> {
        let id = id.to_string();
        let request = self.request(Method::PUT, &[R::PATH, &id]).json(payload);
        self.send(Method::PUT, request).await
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let id = id.to_string();
        let request = self.request(Method::DELETE, &[R::PATH, &id]);
        self.send(Method::DELETE, request).await
    }

    /// `GET /users?role=doctor`
    pub async fn doctors(&self) -> Result<Vec<User>, ClientError> {
        let request = self
            .request(Method::GET, &["users"])
            .query(&[("role", ROLE_DOCTOR)]);
        self.send(Method::GET, request).await
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http.request(method, self.url(segments))
    }

    async fn send<T: DeserializeOwned>(&self, method: Method, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let path = response.url().path().to_string();
        debug!("{} {} -> {}", method, path, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(ClientError::Status {
                method,
                path,
                status,
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
