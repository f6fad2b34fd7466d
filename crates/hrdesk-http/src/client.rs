//! HTTP client for the HR backend.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use hrdesk_core::error::{ProtocolError, TransportError};
use hrdesk_core::{ApiUrl, AuthToken, Error, Result, Upload};

use crate::endpoints::ErrorResponse;

fn map_transport(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

/// HTTP client bound to one backend.
///
/// Each call is a single request; there is no retry or caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given backend.
    pub fn new(base: ApiUrl, timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("hrdesk/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(map_transport)?;

        Ok(Self { client, base })
    }

    /// Returns the backend URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    pub fn url(&self, path: &[&str]) -> String {
        self.base.endpoint(path)
    }

    /// Authenticated GET returning JSON.
    #[instrument(skip(self, token), fields(api = %self.base))]
    pub async fn get<R>(&self, path: &[&str], token: &AuthToken) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "GET");

        let request = self.client.get(&url).bearer_auth(token.as_str());
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Authenticated GET returning the raw body.
    #[instrument(skip(self, token), fields(api = %self.base))]
    pub async fn get_bytes(&self, path: &[&str], token: &AuthToken) -> Result<Vec<u8>> {
        let url = self.url(path);
        debug!(%url, "GET (bytes)");

        let request = self.client.get(&url).bearer_auth(token.as_str());
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(map_transport)?;
        Ok(bytes.to_vec())
    }

    /// Unauthenticated POST with a JSON body.
    #[instrument(skip(self, body), fields(api = %self.base))]
    pub async fn post<B, R>(&self, path: &[&str], body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");

        let request = self.client.post(&url).json(body);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Authenticated POST with a JSON body.
    #[instrument(skip(self, body, token), fields(api = %self.base))]
    pub async fn post_authed<B, R>(&self, path: &[&str], body: &B, token: &AuthToken) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST (authenticated)");

        let request = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(body);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Authenticated PUT with a JSON body.
    #[instrument(skip(self, body, token), fields(api = %self.base))]
    pub async fn put_authed<B, R>(&self, path: &[&str], body: &B, token: &AuthToken) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "PUT");

        let request = self
            .client
            .put(&url)
            .bearer_auth(token.as_str())
            .json(body);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Authenticated DELETE; the response body is ignored.
    #[instrument(skip(self, token), fields(api = %self.base))]
    pub async fn delete_authed(&self, path: &[&str], token: &AuthToken) -> Result<()> {
        let url = self.url(path);
        debug!(%url, "DELETE");

        let request = self.client.delete(&url).bearer_auth(token.as_str());
        self.send(request).await?;
        Ok(())
    }

    /// Authenticated multipart POST carrying `file` as field `file`.
    #[instrument(skip(self, file, token), fields(api = %self.base, file = %file.file_name))]
    pub async fn upload_authed<R>(
        &self,
        path: &[&str],
        file: Upload,
        token: &AuthToken,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, size = file.bytes.len(), "POST (multipart)");

        let mime = file.mime_type();
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(mime)
            .map_err(map_transport)?;
        let form = Form::new().part("file", part);

        let request = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .multipart(form);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Send a request, turning non-success statuses into protocol errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(map_transport)?;

        let status = response.status();
        trace!(status = %status, "Response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Protocol(Self::parse_error_response(response).await))
        }
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R> {
        response.json::<R>().await.map_err(map_transport)
    }

    /// Parse an error response, keeping its `detail` when there is one.
    async fn parse_error_response(response: Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.detail_text()),
            Err(_) => ProtocolError::new(status, None),
        }
    }
}
