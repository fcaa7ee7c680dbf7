//! Search Client Module
//!
//! Typed HTTP client for the search endpoint.
//!
//! ## Response classification
//! Every call ends in exactly one outcome, checked in this order:
//! 1. **Validation**: negative limit/offset fail before anything is sent; limits above
//!    `MAX_LIMIT` are capped.
//! 2. **Transport**: a deadline hit is a `Timeout`, any other send failure is `Transport`.
//! 3. **Status**: 401, 400 (with its `{"Error": ...}` body) and other non-2xx codes each
//!    map to their own error.
//! 4. **Decoding**: a 2xx body that is not a JSON array of records is a `Decode` error.
//!
//! Nothing is retried.

pub mod client;
pub mod error;
