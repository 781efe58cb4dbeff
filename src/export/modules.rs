//! Module export: per-module directories with downloaded files and one
//! combined HTML document for page/link/tool items.

use std::path::Path;

use crate::api::{CanvasApi, FileInfo, Module, ModuleItem, ModuleItemType, Page};
use crate::error::{Error, Result};
use crate::export::{wrap_combined_document, write_document, ExportStats};
use crate::fs::{combined_pages_path, ensure_dir, module_dir_name};
use crate::html::{extract_file_links, file_id_from_link, rewrite_video_embeds};

/// Export all modules of a course.
pub async fn export_modules(
    api: &CanvasApi,
    course_id: &str,
    base_dir: &Path,
    stats: &mut ExportStats,
) -> Result<()> {
    let modules: Vec<Module> = api
        .fetch_list(&format!("courses/{}/modules", course_id), &[])
        .await?;

    if modules.is_empty() {
        tracing::info!("No modules found");
        return Ok(());
    }

    for module in &modules {
        export_module(api, course_id, module, base_dir, stats).await?;
        stats.modules += 1;
    }

    Ok(())
}

/// Export one module into `<id>_<sanitized name>/`.
async fn export_module(
    api: &CanvasApi,
    course_id: &str,
    module: &Module,
    base_dir: &Path,
    stats: &mut ExportStats,
) -> Result<()> {
    let dir_name = module_dir_name(module.id, &module.name);
    let module_dir = base_dir.join(&dir_name);
    ensure_dir(&module_dir)?;

    tracing::info!("Module {} ({})", module.name, module.id);

    let items: Vec<ModuleItem> = api
        .fetch_list(
            &format!("courses/{}/modules/{}/items", course_id, module.id),
            &[],
        )
        .await?;

    let mut combined: Vec<String> = Vec::new();

    for item in &items {
        match item.item_type {
            ModuleItemType::File => {
                export_file_item(api, course_id, item, &module_dir, stats).await?;
            }
            ModuleItemType::Page => {
                export_page_item(api, course_id, item, &module_dir, &mut combined, stats).await?;
            }
            ModuleItemType::ExternalUrl => {
                let url = item.external_url.as_deref().ok_or_else(|| {
                    Error::Api(format!("ExternalUrl item '{}' has no external_url", item.title))
                })?;
                tracing::info!("External link: {} -> {}", item.title, url);
                combined.push(format!(
                    "<h2>{}</h2>\n<p>External link: <a href=\"{}\">{}</a></p>\n<hr>",
                    item.title, url, url
                ));
            }
            ModuleItemType::ExternalTool => {
                tracing::info!("External tool: {}", item.title);
                combined.push(format!(
                    "<h2>{}</h2>\n<p>External Tool (LTI)</p>\n<hr>",
                    item.title
                ));
            }
            ModuleItemType::Other => {
                tracing::warn!("Unhandled item type for '{}'", item.title);
                stats.skipped += 1;
            }
        }
    }

    if !combined.is_empty() {
        let path = combined_pages_path(&module_dir, &dir_name);
        write_document(&path, &wrap_combined_document(&combined))?;
        tracing::info!("Wrote combined module document {}", path.display());
    }

    Ok(())
}

/// Download the file referenced by a `File` item into the module directory.
async fn export_file_item(
    api: &CanvasApi,
    course_id: &str,
    item: &ModuleItem,
    module_dir: &Path,
    stats: &mut ExportStats,
) -> Result<()> {
    let file_id = item
        .content_id
        .ok_or_else(|| Error::Api(format!("File item '{}' has no content_id", item.title)))?;

    let info: FileInfo = api
        .fetch_one(&format!("courses/{}/files/{}", course_id, file_id))
        .await?;

    tracing::info!("Downloading {}", info.filename);
    api.download_file(&info.url, &module_dir.join(&info.filename))
        .await?;
    stats.files_downloaded += 1;

    Ok(())
}

/// Fetch a `Page` item, post-process its body, accumulate it into the
/// combined buffer, and download any files it references.
///
/// A 404 on the page slug skips this item only. HTTP failures on embedded
/// files are per-file: logged and skipped.
async fn export_page_item(
    api: &CanvasApi,
    course_id: &str,
    item: &ModuleItem,
    module_dir: &Path,
    combined: &mut Vec<String>,
    stats: &mut ExportStats,
) -> Result<()> {
    let slug = item
        .page_url
        .as_deref()
        .ok_or_else(|| Error::Api(format!("Page item '{}' has no page_url", item.title)))?;

    tracing::info!("Downloading page: {} (slug: {})", item.title, slug);

    let page: Page = match api
        .fetch_one(&format!("courses/{}/pages/{}", course_id, slug))
        .await
    {
        Ok(page) => page,
        Err(e) if e.is_not_found() => {
            tracing::warn!("Page disabled or not accessible: {}", item.title);
            stats.skipped += 1;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let title = page.title.as_deref().unwrap_or("Untitled");
    let body = page.body.as_deref().unwrap_or("");
    let fixed = rewrite_video_embeds(body);

    combined.push(format!("<h2>{}</h2>\n{}\n<hr>", title, fixed));
    stats.pages += 1;

    for href in extract_file_links(&fixed) {
        let Some(file_id) = file_id_from_link(&href) else {
            continue;
        };

        match download_embedded_file(api, &file_id, module_dir).await {
            Ok(()) => stats.files_downloaded += 1,
            Err(e) if e.is_http_status() => {
                tracing::warn!("Error downloading embedded file {}: {}", file_id, e);
                stats.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Resolve an embedded file reference via the global files endpoint and
/// download it next to the module's other files.
async fn download_embedded_file(api: &CanvasApi, file_id: &str, module_dir: &Path) -> Result<()> {
    let info: FileInfo = api.fetch_one(&format!("files/{}", file_id)).await?;

    tracing::info!("Downloading embedded file {}", info.filename);
    api.download_file(&info.url, &module_dir.join(&info.filename))
        .await
}
