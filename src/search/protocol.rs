//! Search Wire Protocol
//!
//! Names shared by the search endpoint and `SearchClient`, plus the JSON error body
//! returned with `400 Bad Request`.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Root path; the search endpoint answers here.
pub const ENDPOINT_ROOT: &str = "/";
/// Explicit path for the search endpoint.
pub const ENDPOINT_SEARCH: &str = "/search";

// --- Request ---

/// Header carrying the caller's access token. Compared for exact equality.
pub const HEADER_ACCESS_TOKEN: &str = "AccessToken";

pub const PARAM_QUERY: &str = "query";
pub const PARAM_OFFSET: &str = "offset";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_ORDER_FIELD: &str = "order_field";
pub const PARAM_ORDER_BY: &str = "order_by";

// --- Error codes ---

pub const ERROR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";
pub const ERROR_BAD_ORDER_BY: &str = "ErrorBadOrderBy";
pub const ERROR_BAD_OFFSET: &str = "ErrorBadOffset";
pub const ERROR_BAD_LIMIT: &str = "ErrorBadLimit";

/// Body of a `400 Bad Request`, e.g. `{"Error":"ErrorBadOrderField"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}
