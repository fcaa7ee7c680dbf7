use super::protocol::{ERROR_BAD_LIMIT, ERROR_BAD_OFFSET, ERROR_BAD_ORDER_BY, ERROR_BAD_ORDER_FIELD};

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Sort directive. Wire values: `0` as is, `-1` ascending, `1` descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum OrderBy {
    #[default]
    AsIs,
    Asc,
    Desc,
}

impl OrderBy {
    pub fn as_wire(self) -> i64 {
        match self {
            OrderBy::AsIs => 0,
            OrderBy::Asc => -1,
            OrderBy::Desc => 1,
        }
    }
}

impl TryFrom<i64> for OrderBy {
    type Error = SearchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderBy::AsIs),
            -1 => Ok(OrderBy::Asc),
            1 => Ok(OrderBy::Desc),
            other => Err(SearchError::BadOrderBy(other)),
        }
    }
}

impl From<OrderBy> for i64 {
    fn from(order_by: OrderBy) -> Self {
        order_by.as_wire()
    }
}

/// The record attribute a page is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Age,
    Name,
}

impl FromStr for OrderField {
    type Err = SearchError;

    /// An empty field name means `Name`; anything outside `Id`/`Age`/`Name` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(OrderField::Id),
            "Age" => Ok(OrderField::Age),
            "Name" | "" => Ok(OrderField::Name),
            other => Err(SearchError::BadOrderField(other.to_string())),
        }
    }
}

/// One search call.
///
/// `order_field` stays a raw string so that both the client and the endpoint can
/// carry whatever the caller asked for; it is validated by the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    pub query: String,
    pub order_field: String,
    pub order_by: OrderBy,
}

/// Semantic rejections produced while evaluating a `SearchRequest`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid order field {0:?}")]
    BadOrderField(String),

    #[error("invalid order_by {0}, expected -1, 0 or 1")]
    BadOrderBy(i64),

    #[error("offset must be >= 0, got {0}")]
    BadOffset(i64),

    #[error("limit must be >= 0, got {0}")]
    BadLimit(i64),
}

impl SearchError {
    /// Stable, machine-readable code sent in the `Error` field of a 400 body.
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::BadOrderField(_) => ERROR_BAD_ORDER_FIELD,
            SearchError::BadOrderBy(_) => ERROR_BAD_ORDER_BY,
            SearchError::BadOffset(_) => ERROR_BAD_OFFSET,
            SearchError::BadLimit(_) => ERROR_BAD_LIMIT,
        }
    }
}
