//! Front page export: a single HTML document at the export root.

use std::path::Path;

use crate::api::{CanvasApi, Page};
use crate::error::Result;
use crate::export::{wrap_page_document, write_document, ExportStats};
use crate::fs::sanitize_filename;
use crate::html::rewrite_video_embeds;

/// Export the course front page if one exists.
///
/// Absence is not an error: any HTTP status failure is treated as "no
/// front page" and the export continues.
pub async fn export_front_page(
    api: &CanvasApi,
    course_id: &str,
    base_dir: &Path,
    stats: &mut ExportStats,
) -> Result<()> {
    let page: Page = match api
        .fetch_one(&format!("courses/{}/front_page", course_id))
        .await
    {
        Ok(page) => page,
        Err(e) if e.is_http_status() => {
            tracing::info!("No front page or not accessible");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let title = sanitize_filename(page.title.as_deref().unwrap_or("HomePage"));
    let body = rewrite_video_embeds(page.body.as_deref().unwrap_or(""));

    let path = base_dir.join(format!("{}_frontpage.html", title));
    write_document(&path, &wrap_page_document(&title, &body))?;
    tracing::info!("Saved front page to {}", path.display());
    stats.pages += 1;

    Ok(())
}
