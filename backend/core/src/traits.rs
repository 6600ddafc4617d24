use async_trait::async_trait;
use serde_json::Value;

use crate::error::HttpError;

/// Performs GET requests on behalf of the web routes.
///
/// Implementations own transport concerns: connection reuse, headers,
/// client-wide query parameters, timeouts and retries.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET against `url` with `extra_params` appended to the query.
    async fn get_response(
        &self,
        url: &str,
        extra_params: &[(String, String)],
    ) -> Result<HttpResponse, HttpError>;
}

/// Mutable client-wide parameters shared by every route of a session.
pub trait SessionParameterStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key`, replacing any previous value.
    fn set(&self, key: &str, value: String);
}

/// A completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body as JSON.
    pub fn json(&self) -> Result<Value, HttpError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_decodes_body() {
        let resp = HttpResponse::new(200, r#"{"message":"success"}"#);
        assert_eq!(resp.json().unwrap()["message"], "success");
    }

    #[test]
    fn json_reports_decode_errors() {
        let resp = HttpResponse::new(200, "<html>blocked</html>");
        assert!(matches!(resp.json(), Err(HttpError::Decode(_))));
    }
}
