//! Novelty JSON API.
//!
//! A small HTTP facade: a few routes return locally computed values (a random
//! color, a photo URL, the time), two proxy a single call to a third-party API
//! (cats, jokes), and two serve liveness/readiness probes.
//!
//! ```text
//! GET /color        {"cor": "#FF5733"}
//! GET /cat          {"cat_image_url": "https://..."}
//! GET /joke         {"joke": "setup - punchline"}
//! GET /ready        {"status": "READY", "hostname": "..."}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: Fixed enumerations and locally computed values
//! - [`upstream`]: Pooled client for the cat and joke APIs
//! - [`api`]: HTTP routes, probes and OpenAPI document
//! - [`metrics`]: Upstream call metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod upstream;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
