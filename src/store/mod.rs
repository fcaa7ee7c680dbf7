//! Record Store Module
//!
//! Holds the user records the search service answers from.
//!
//! ## Lifecycle
//! The store is built once at process start from an XML dataset and never mutated
//! afterwards. It is shared between request handlers behind an `Arc`, so concurrent
//! reads need no locking.
//!
//! ## Submodules
//! - **`memory`**: The read-only in-memory `RecordStore` and its XML loader.
//! - **`types`**: The `Record` served to clients and the raw XML row layout.

pub mod memory;
pub mod types;

#[cfg(test)]
mod tests;
