//! Entity exporters and the export driver.
//!
//! Each exporter follows the same shape: fetch a listing, branch per
//! record, post-process HTML and/or download files, and write output under
//! deterministic sanitized paths. The driver runs them in a fixed order
//! against one course.

use std::path::Path;

use crate::api::CanvasApi;
use crate::config::Config;
use crate::error::Result;
use crate::fs::ensure_dir;

pub mod assignments;
pub mod files;
pub mod front_page;
pub mod modules;
pub mod pages;

pub use assignments::export_assignments;
pub use files::export_files;
pub use front_page::export_front_page;
pub use modules::export_modules;
pub use pages::export_pages;

/// Stylesheet embedded in every generated HTML document.
pub const STYLE_BLOCK: &str = r#"
<style>
  body {
    font-family: Arial, sans-serif;
    margin: 20px;
    line-height: 1.6;
    background: #f9f9f9;
  }
  h2 {
    margin-top: 1.5rem;
    color: #003366;
  }
  hr {
    margin: 1.5rem 0;
    border: 0;
    height: 1px;
    background: #ccc;
  }
  a {
    color: #007c92;
    text-decoration: none;
  }
  a:hover {
    text-decoration: underline;
  }
  .embedded-video {
    margin: 1rem 0;
    background: #fff;
    padding: 10px;
    border: 1px solid #ccc;
  }
</style>
"#;

/// Counters accumulated across the whole export.
#[derive(Debug, Default)]
pub struct ExportStats {
    pub modules: u64,
    pub pages: u64,
    pub assignments: u64,
    pub files_downloaded: u64,
    pub skipped: u64,
}

/// Wrap a single entity body in a full HTML document with an `<h1>` heading.
pub(crate) fn wrap_page_document(heading: &str, body: &str) -> String {
    format!(
        "<html><head>{}</head><body><h1>{}</h1>\n{}</body></html>",
        STYLE_BLOCK, heading, body
    )
}

/// Wrap accumulated module fragments in a full HTML document.
pub(crate) fn wrap_combined_document(fragments: &[String]) -> String {
    format!(
        "<html>\n<head>\n{}\n</head>\n<body>\n{}\n</body>\n</html>",
        STYLE_BLOCK,
        fragments.join("\n")
    )
}

/// Run the full course export: modules, standalone pages, assignments,
/// front page, then course files, strictly in order.
pub async fn run_export(api: &CanvasApi, config: &Config) -> Result<ExportStats> {
    let output_dir = config.output_dir();
    ensure_dir(&output_dir)?;

    let course_id = config.export.course_id.as_str();
    let mut stats = ExportStats::default();

    tracing::info!("Exporting modules");
    export_modules(api, course_id, &output_dir, &mut stats).await?;

    tracing::info!("Exporting standalone pages");
    export_pages(api, course_id, &output_dir, &mut stats).await?;

    tracing::info!("Exporting assignments");
    export_assignments(api, course_id, &output_dir, &mut stats).await?;

    tracing::info!("Exporting front page");
    export_front_page(api, course_id, &output_dir, &mut stats).await?;

    tracing::info!("Exporting course files");
    export_files(api, course_id, &output_dir, &mut stats).await?;

    Ok(stats)
}

/// Write a generated HTML document to disk.
pub(crate) fn write_document(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
