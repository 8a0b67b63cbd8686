//! HTTP transport with a fixed per-request abort window.
//!
//! All outgoing requests go through this module: a transport trait for
//! mockability, and a deadline helper that bounds every call to a fixed
//! wall-clock window.

mod client;
mod deadline;

pub use client::{HttpClient, MockClient, MockResponse, NetworkClient, NetworkClientBuilder};
pub use deadline::with_deadline;
