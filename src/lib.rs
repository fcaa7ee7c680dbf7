//! User Search Service Library
//!
//! A small record-search service and the client that talks to it.
//! The binary (`main.rs`) only wires these pieces together.
//!
//! ## Modules
//! - **`store`**: The read-only, in-memory record collection loaded from an XML dataset.
//! - **`search`**: Filtering, sorting and pagination of records, plus the Axum endpoint
//!   that exposes it behind a static access token.
//! - **`client`**: `SearchClient`, which calls the endpoint under a timeout and turns
//!   every outcome into a typed result or error.
//! - **`config`**: Server settings from flags and environment.

pub mod client;
pub mod config;
pub mod search;
pub mod store;
