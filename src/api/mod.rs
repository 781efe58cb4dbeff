//! Canvas API module.
//!
//! This module provides:
//! - Authenticated HTTP client with pagination and streaming downloads
//! - Typed response structures for the consumed endpoints

pub mod client;
pub mod types;

pub use client::{parse_next_link, CanvasApi};
pub use types::*;
