use super::engine::evaluate;
use super::protocol::{ENDPOINT_ROOT, ENDPOINT_SEARCH, ErrorResponse, HEADER_ACCESS_TOKEN};
use super::types::{OrderBy, SearchError, SearchRequest};
use crate::store::memory::RecordStore;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Raw query parameters. Kept as strings so that a non-integer `offset`, `limit`
/// or `order_by` is reported by the handler instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
}

/// The secret every caller must present in the `AccessToken` header.
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

/// Builds the router serving the search endpoint on `/` and `/search`.
pub fn router(store: Arc<RecordStore>, token: AccessToken) -> Router {
    Router::new()
        .route(ENDPOINT_ROOT, get(handle_search))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .layer(Extension(store))
        .layer(Extension(token))
}

pub async fn handle_search(
    Extension(store): Extension<Arc<RecordStore>>,
    Extension(token): Extension<AccessToken>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Response {
    let span = tracing::debug_span!("search", request_id = %Uuid::new_v4());
    span.in_scope(|| respond(&store, &token, &headers, params))
}

fn respond(
    store: &RecordStore,
    token: &AccessToken,
    headers: &HeaderMap,
    params: SearchParams,
) -> Response {
    let presented = headers
        .get(HEADER_ACCESS_TOKEN)
        .and_then(|value| value.to_str().ok());

    if presented != Some(token.0.as_str()) {
        tracing::warn!("Rejected search request: bad access token");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let request = match parse_request(params) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match evaluate(store.records(), &request) {
        Ok(page) => {
            tracing::debug!(
                "Served {} records (query={:?}, offset={}, limit={})",
                page.len(),
                request.query,
                request.offset,
                request.limit
            );
            (StatusCode::OK, Json(page)).into_response()
        }
        Err(e) => bad_request(&e),
    }
}

/// Turns raw parameters into a `SearchRequest`.
///
/// Missing or non-integer numbers fail the whole request with `500`, an `order_by`
/// outside `-1`/`0`/`1` is a `400` carrying `ErrorBadOrderBy`.
fn parse_request(params: SearchParams) -> Result<SearchRequest, Response> {
    let offset = parse_int("offset", params.offset.as_deref())
        .ok_or_else(|| StatusCode::INTERNAL_SERVER_ERROR.into_response())?;
    let limit = parse_int("limit", params.limit.as_deref())
        .ok_or_else(|| StatusCode::INTERNAL_SERVER_ERROR.into_response())?;
    let order_by = parse_int("order_by", params.order_by.as_deref())
        .ok_or_else(|| StatusCode::INTERNAL_SERVER_ERROR.into_response())?;

    let order_by = OrderBy::try_from(order_by).map_err(|e| bad_request(&e))?;

    Ok(SearchRequest {
        limit,
        offset,
        query: params.query.unwrap_or_default(),
        order_field: params.order_field.unwrap_or_default(),
        order_by,
    })
}

fn bad_request(error: &SearchError) -> Response {
    tracing::debug!("Search rejected: {}", error);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.code().to_string(),
        }),
    )
        .into_response()
}

fn parse_int(name: &str, raw: Option<&str>) -> Option<i64> {
    match raw.map(str::parse::<i64>) {
        Some(Ok(value)) => Some(value),
        Some(Err(e)) => {
            tracing::warn!("Failed to parse {}: {}", name, e);
            None
        }
        None => {
            tracing::warn!("Missing parameter {}", name);
            None
        }
    }
}
