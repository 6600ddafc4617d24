//! reqwest-backed [`HttpClient`] for the platform's web endpoints.
//!
//! Every request carries the session's client-wide parameters (device and
//! locale fields, plus values routes have stored such as `room_id`), the
//! configured user agent and extra headers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use liveroom_core::{DEFAULT_USER_AGENT, HttpClient, HttpError, HttpResponse, SessionParams};
use liveroom_logging::redact_sensitive_data;

pub struct WebClient {
    client: Client,
    params: Arc<SessionParams>,
    user_agent: String,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl WebClient {
    pub fn new(params: Arc<SessionParams>) -> Self {
        Self {
            client: Client::new(),
            params,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
            timeout: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl HttpClient for WebClient {
    async fn get_response(
        &self,
        url: &str,
        extra_params: &[(String, String)],
    ) -> Result<HttpResponse, HttpError> {
        // Route parameters take precedence over session-wide ones.
        let mut query = self.params.snapshot();
        query.extend(extra_params.iter().cloned());

        let mut builder = self
            .client
            .get(url)
            .query(&query)
            .header(USER_AGENT, &self.user_agent);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let request = builder.build().map_err(map_reqwest_error)?;
        debug!(url = %redact_sensitive_data(request.url().as_str()), "Sending GET request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse::new(status.as_u16(), body))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else {
        HttpError::Transport(err.to_string())
    }
}
