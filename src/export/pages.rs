//! Standalone page export: one HTML document per wiki page under
//! `all_pages/`.

use std::path::Path;

use crate::api::{CanvasApi, Page};
use crate::error::Result;
use crate::export::{wrap_page_document, write_document, ExportStats};
use crate::fs::paths::PAGES_DIR;
use crate::fs::{ensure_dir, sanitize_filename};
use crate::html::rewrite_video_embeds;

/// Export every standalone page of a course.
///
/// A 404 on the listing means the pages feature is disabled for this
/// course; the export continues with no page output.
pub async fn export_pages(
    api: &CanvasApi,
    course_id: &str,
    base_dir: &Path,
    stats: &mut ExportStats,
) -> Result<()> {
    let listing: Vec<Page> = match api
        .fetch_list(&format!("courses/{}/pages", course_id), &[])
        .await
    {
        Ok(listing) => listing,
        Err(e) if e.is_not_found() => {
            tracing::info!("Pages are disabled or not accessible for this course");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if listing.is_empty() {
        tracing::info!("No pages found");
        return Ok(());
    }

    let pages_dir = base_dir.join(PAGES_DIR);
    ensure_dir(&pages_dir)?;

    for entry in &listing {
        let Some(slug) = entry.url.as_deref() else {
            tracing::warn!("Page listing entry missing url slug, skipping");
            stats.skipped += 1;
            continue;
        };

        let title = sanitize_filename(entry.title.as_deref().unwrap_or("Untitled Page"));

        // The listing omits bodies; fetch the full page by slug.
        let page: Page = match api
            .fetch_one(&format!("courses/{}/pages/{}", course_id, slug))
            .await
        {
            Ok(page) => page,
            Err(e) if e.is_not_found() => {
                tracing::warn!("Page slug '{}' not found or pages disabled", slug);
                stats.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let fixed = rewrite_video_embeds(page.body.as_deref().unwrap_or(""));

        let path = pages_dir.join(format!("{}.html", title));
        write_document(&path, &wrap_page_document(&title, &fixed))?;
        tracing::info!("Saved {}.html", title);
        stats.pages += 1;
    }

    Ok(())
}
