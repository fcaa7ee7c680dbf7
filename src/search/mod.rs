//! Search Service Module
//!
//! Answers user searches against the in-memory `RecordStore`.
//!
//! ## Overview
//! A search is a pure function of the stored records and one `SearchRequest`:
//! the records are filtered by a substring query, optionally sorted by one field,
//! and sliced into a single page. The HTTP layer only authenticates the caller,
//! turns query parameters into a `SearchRequest`, and maps evaluator errors onto
//! status codes.
//!
//! ## Submodules
//! - **`engine`**: Filtering, sorting and pagination.
//! - **`handlers`**: The Axum handler and router for the search endpoint.
//! - **`protocol`**: Wire constants (paths, header, parameter names, error codes).
//! - **`types`**: Request, sort directives and the evaluator error type.

pub mod engine;
pub mod handlers;
pub mod protocol;
pub mod types;
