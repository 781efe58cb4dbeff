//! Filesystem module.
//!
//! This module provides:
//! - Filename sanitization for entity titles
//! - Export-tree path construction

pub mod naming;
pub mod paths;

pub use naming::sanitize_filename;
pub use paths::{combined_pages_path, ensure_dir, module_dir_name};
