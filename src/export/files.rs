//! Course file export: every course-level file downloaded under
//! `all_files/` with its original filename.

use std::path::Path;

use crate::api::{CanvasApi, FileInfo};
use crate::error::Result;
use crate::export::ExportStats;
use crate::fs::ensure_dir;
use crate::fs::paths::FILES_DIR;

/// Export every course-level file.
///
/// A 403 on the listing means the files area is restricted; a 404 means
/// it is disabled. Both yield an empty file export without aborting.
pub async fn export_files(
    api: &CanvasApi,
    course_id: &str,
    base_dir: &Path,
    stats: &mut ExportStats,
) -> Result<()> {
    let files: Vec<FileInfo> = match api
        .fetch_list(&format!("courses/{}/files", course_id), &[])
        .await
    {
        Ok(files) => files,
        Err(e) if e.is_forbidden() => {
            tracing::info!("Files area is restricted or you do not have permissions");
            return Ok(());
        }
        Err(e) if e.is_not_found() => {
            tracing::info!("Files are disabled for this course");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if files.is_empty() {
        tracing::info!("No files found");
        return Ok(());
    }

    let files_dir = base_dir.join(FILES_DIR);
    ensure_dir(&files_dir)?;

    for file in &files {
        // Re-resolve through the global endpoint for a fresh download URL.
        let info: FileInfo = match api.fetch_one(&format!("files/{}", file.id)).await {
            Ok(info) => info,
            Err(e) if e.is_not_found() => {
                tracing::warn!("File {} not found or no permission", file.filename);
                stats.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        tracing::info!("Downloading {}", file.filename);
        api.download_file(&info.url, &files_dir.join(&file.filename))
            .await?;
        stats.files_downloaded += 1;
    }

    Ok(())
}
