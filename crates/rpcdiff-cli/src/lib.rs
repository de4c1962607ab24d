//! Batch comparison of JSON-RPC responses between two endpoints
//!
//! Reads request payloads from a directory, posts each one to two HTTP
//! endpoints (or checks the first endpoint against a pre-recorded expected
//! response), and accumulates a Markdown report of every difference found.
//!
//! The binary lives in `main.rs`; everything else is exposed as a library
//! so integration tests can drive the pipeline directly.

pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sniff;
