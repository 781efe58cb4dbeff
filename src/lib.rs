//! Canvas Export - mirror a Canvas LMS course to a local directory.
//!
//! This library walks a course via the Canvas REST API and writes its
//! content to disk as HTML documents and downloaded files.
//!
//! # Features
//!
//! - Module export with per-module directories and combined HTML documents
//! - Standalone page, assignment, and front-page export
//! - Course file download with original filenames
//! - Link-header pagination across all listing endpoints
//! - Video embed URL normalization and embedded file-link resolution
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use canvas_export::{api::CanvasApi, config::Config, export::run_export};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = CanvasApi::new(&config.api.base_url, config.api.access_token.clone())?;
//!     let stats = run_export(&api, &config).await?;
//!     println!("{} files downloaded", stats.files_downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod html;
pub mod output;

// Re-exports for convenience
pub use api::CanvasApi;
pub use config::Config;
pub use error::{Error, Result};
pub use export::{run_export, ExportStats};
