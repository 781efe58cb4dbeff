//! Assignment export: one HTML document per assignment under
//! `assignments/`.

use std::path::Path;

use crate::api::{Assignment, CanvasApi};
use crate::error::Result;
use crate::export::{wrap_page_document, write_document, ExportStats};
use crate::fs::paths::ASSIGNMENTS_DIR;
use crate::fs::{ensure_dir, sanitize_filename};
use crate::html::rewrite_video_embeds;

/// Export every assignment of a course.
pub async fn export_assignments(
    api: &CanvasApi,
    course_id: &str,
    base_dir: &Path,
    stats: &mut ExportStats,
) -> Result<()> {
    let assignments: Vec<Assignment> = match api
        .fetch_list(&format!("courses/{}/assignments", course_id), &[])
        .await
    {
        Ok(assignments) => assignments,
        Err(e) if e.is_not_found() => {
            tracing::info!("Assignments are disabled or not accessible for this course");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if assignments.is_empty() {
        tracing::info!("No assignments found");
        return Ok(());
    }

    let assignments_dir = base_dir.join(ASSIGNMENTS_DIR);
    ensure_dir(&assignments_dir)?;

    for assignment in &assignments {
        let title = sanitize_filename(assignment.name.as_deref().unwrap_or("Untitled"));
        let description = rewrite_video_embeds(assignment.description.as_deref().unwrap_or(""));

        tracing::info!("Assignment {} (ID {})", title, assignment.id);

        let path = assignments_dir.join(format!("{}.html", title));
        write_document(&path, &wrap_page_document(&title, &description))?;
        stats.assignments += 1;
    }

    Ok(())
}
