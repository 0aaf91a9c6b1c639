//! `kafbat_core` — portable Rust core for the Kafbat Kafka management UI.
//!
//! This crate contains the WASM-safe computation the UI layers delegate to:
//! display-data preparation over domain records fetched by the HTTP/query
//! layer, and classification of user-supplied filter strings. It compiles to
//! `wasm32-unknown-unknown` and performs no I/O.
//!
//! Modules:
//! - `records` — domain record and field-key types
//! - `index`   — unique keying and grouping of record collections
//! - `filter`  — filter-string classification and matching (literal + regex)

pub mod filter;
pub mod index;
pub mod records;
