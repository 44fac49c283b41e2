//! HTTP client for the Aladhan prayer-times API.
//!
//! [`AladhanClient`] holds the base URL and a shared [`reqwest::Client`];
//! each method maps to one upstream endpoint and relays the response body
//! verbatim as JSON. No retry, no caching; the only timeout at this layer
//! is the per-request client timeout.

pub mod client;

pub use client::{AladhanClient, AladhanError};
