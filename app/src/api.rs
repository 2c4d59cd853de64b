//! This module provides the client for the portfolio REST API.
//!
//! One JSON request is issued per logical operation (list, create, update,
//! delete) against a fixed base URL. Non-2xx responses become a
//! [`RequestError`]; absent or empty bodies are reported as `None` rather than
//! parsed. The client never retries, caches, or de-duplicates requests: the
//! caller decides whether to surface, log, or retry a failure.

use reqwest::{Client, Method, StatusCode, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::types::{EntityId, Resource, Resume};

/// Failure of a single API request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never completed (connection refused, DNS, aborted fetch).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-2xx status.
    #[error("API error: {body}")]
    Status { status: u16, body: String },
    /// A body was returned but could not be decoded as the expected type.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// A typed result was expected but the response had no body.
    #[error("empty response body from {path}")]
    EmptyBody { path: String },
}

impl RequestError {
    /// The HTTP status of the failed response, if one was received.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// JSON client bound to the API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one request and normalizes the response.
    ///
    /// Returns `Ok(None)` for `204 No Content`, `Content-Length: 0`, or a body
    /// that is empty once read.
    pub async fn send<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<R>, RequestError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_owned();
            let body = match response.text().await {
                Ok(text) if !text.is_empty() => text,
                _ => reason,
            };
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn send_expecting<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, RequestError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(method, path, body)
            .await?
            .ok_or_else(|| RequestError::EmptyBody {
                path: path.to_owned(),
            })
    }

    /// Fetches the whole collection of `T`, in server order.
    pub async fn list<T: Resource>(&self) -> Result<Vec<T>, RequestError> {
        self.send_expecting::<(), _>(Method::GET, T::COLLECTION, None)
            .await
    }

    /// Creates a record and returns it as stored by the API.
    pub async fn create<T, B>(&self, payload: &B) -> Result<T, RequestError>
    where
        T: Resource,
        B: Serialize + ?Sized,
    {
        self.send_expecting(Method::POST, T::COLLECTION, Some(payload))
            .await
    }

    /// Applies a (partial) update to one record and returns the updated record.
    pub async fn update<T, B>(&self, id: EntityId, payload: &B) -> Result<T, RequestError>
    where
        T: Resource,
        B: Serialize + ?Sized,
    {
        self.send_expecting(Method::PUT, &T::member_path(id), Some(payload))
            .await
    }

    /// Removes one record. The API answers with no body.
    pub async fn delete<T: Resource>(&self, id: EntityId) -> Result<(), RequestError> {
        self.send::<(), serde_json::Value>(Method::DELETE, &T::member_path(id), None)
            .await
            .map(|_| ())
    }

    /// Latest uploaded résumé; `None` when nothing has been uploaded yet.
    pub async fn latest_resume(&self) -> Result<Option<Resume>, RequestError> {
        let resume: Option<Option<Resume>> =
            self.send::<(), _>(Method::GET, "/resume/latest", None).await?;
        Ok(resume.flatten())
    }
}
