//! HTML post-processing.
//!
//! This module provides:
//! - Video embed normalization (rewriting iframe sources to canonical URLs)
//! - File-link extraction (finding `/files/<id>` references in page bodies)
//!
//! The two transforms are independent; exporters apply the rewrite first
//! and then extract file references from the rewritten markup.

pub mod embeds;
pub mod links;

pub use embeds::{normalize_embed_src, rewrite_video_embeds};
pub use links::{extract_file_links, file_id_from_link};
