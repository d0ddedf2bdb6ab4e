//! Outbound calls to the third-party APIs behind `/cat` and `/joke`.
//!
//! This module handles:
//! - Payload types for the cat and joke APIs
//! - A pooled HTTP client shared by all handlers

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{JokePayload, Upstream, CAT_PLACEHOLDER_URL};
