use super::error::ClientError;
use crate::search::protocol::{
    ERROR_BAD_ORDER_FIELD, ErrorResponse, HEADER_ACCESS_TOKEN, PARAM_LIMIT, PARAM_OFFSET,
    PARAM_ORDER_BY, PARAM_ORDER_FIELD, PARAM_QUERY,
};
use crate::search::types::SearchRequest;
use crate::store::types::Record;

use reqwest::StatusCode;
use std::time::Duration;

/// Per-call deadline unless overridden with `with_timeout`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
/// Largest page a caller can ask for; bigger limits are capped silently.
pub const MAX_LIMIT: i64 = 25;

pub struct SearchClient {
    pub access_token: String,
    pub url: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl SearchClient {
    pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs one search and returns the decoded page.
    pub async fn find_users(&self, request: &SearchRequest) -> Result<Vec<Record>, ClientError> {
        if request.limit < 0 {
            return Err(ClientError::InvalidLimit);
        }
        if request.offset < 0 {
            return Err(ClientError::InvalidOffset);
        }

        let limit = request.limit.min(MAX_LIMIT);
        let params = [
            (PARAM_LIMIT, limit.to_string()),
            (PARAM_OFFSET, request.offset.to_string()),
            (PARAM_QUERY, request.query.clone()),
            (PARAM_ORDER_FIELD, request.order_field.clone()),
            (PARAM_ORDER_BY, request.order_by.as_wire().to_string()),
        ];

        let response = self
            .http_client
            .get(&self.url)
            .header(HEADER_ACCESS_TOKEN, &self.access_token)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();

        match status {
            StatusCode::UNAUTHORIZED => {
                tracing::debug!("Search rejected: bad access token");
                Err(ClientError::Unauthorized)
            }
            StatusCode::BAD_REQUEST => {
                let body = response.text().await.map_err(|e| self.transport_error(e))?;
                Err(bad_request_error(&body, &request.order_field))
            }
            status if !status.is_success() => {
                tracing::warn!("Search failed with status {}", status);
                Err(ClientError::UnexpectedStatus(status))
            }
            _ => {
                let body = response.text().await.map_err(|e| self.transport_error(e))?;
                serde_json::from_str(&body).map_err(|e| {
                    tracing::warn!("Failed to decode search result: {}", e);
                    ClientError::Decode(e)
                })
            }
        }
    }

    fn transport_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            tracing::warn!("Search to {} timed out after {:?}", self.url, self.timeout);
            ClientError::Timeout(self.timeout)
        } else {
            tracing::warn!("Search to {} failed: {}", self.url, error);
            ClientError::Transport(error)
        }
    }
}

/// Classifies a `400` body: `ErrorBadOrderField` is specific, everything else
/// (other codes or an undecodable body) is reported with the raw body.
fn bad_request_error(body: &str, order_field: &str) -> ClientError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) if error == ERROR_BAD_ORDER_FIELD => {
            ClientError::BadOrderField(order_field.to_string())
        }
        Ok(_) | Err(_) => {
            tracing::debug!("Search rejected as bad request: {}", body);
            ClientError::BadRequest(body.to_string())
        }
    }
}
