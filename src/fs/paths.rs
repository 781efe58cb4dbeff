//! Path and directory management for the export tree.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize_filename;

/// Subdirectory for standalone pages.
pub const PAGES_DIR: &str = "all_pages";

/// Subdirectory for assignments.
pub const ASSIGNMENTS_DIR: &str = "assignments";

/// Subdirectory for course-level files.
pub const FILES_DIR: &str = "all_files";

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Directory name for a module: `<id>_<sanitized name>`.
///
/// The id and name are joined before sanitizing, matching the on-disk
/// layout of `<module-dir>_combined_pages.html`.
pub fn module_dir_name(module_id: u64, module_name: &str) -> String {
    sanitize_filename(&format!("{}_{}", module_id, module_name))
}

/// Path to the combined HTML document of a module directory.
pub fn combined_pages_path(module_dir: &Path, dir_name: &str) -> PathBuf {
    module_dir.join(format!("{}_combined_pages.html", dir_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_dir_name() {
        assert_eq!(module_dir_name(42, "Week 1: Intro"), "42_Week 1_ Intro");
    }

    #[test]
    fn test_combined_pages_path() {
        let dir = PathBuf::from("/out/42_Week 1");
        assert_eq!(
            combined_pages_path(&dir, "42_Week 1"),
            PathBuf::from("/out/42_Week 1/42_Week 1_combined_pages.html")
        );
    }
}
