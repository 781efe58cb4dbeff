//! Canvas API response types.

use serde::Deserialize;

/// A course module.
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    pub id: u64,
    pub name: String,
}

/// Discriminant of a module item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ModuleItemType {
    File,
    Page,
    ExternalUrl,
    ExternalTool,
    /// Any item type this tool does not handle (Assignment, Quiz,
    /// Discussion, SubHeader, ...).
    #[serde(other)]
    Other,
}

/// A single entry in a module.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleItem {
    #[serde(rename = "type")]
    pub item_type: ModuleItemType,

    #[serde(default)]
    pub title: String,

    /// Id of the referenced file, for `File` items.
    pub content_id: Option<u64>,

    /// Slug of the referenced page, for `Page` items.
    pub page_url: Option<String>,

    /// Target URL, for `ExternalUrl` items.
    pub external_url: Option<String>,
}

/// A wiki page. Listing responses omit `body`; fetching by slug fills it.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// URL slug used to fetch the full page.
    pub url: Option<String>,

    pub title: Option<String>,

    pub body: Option<String>,
}

/// An assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct Assignment {
    pub id: u64,

    pub name: Option<String>,

    /// HTML description; may be absent or null.
    pub description: Option<String>,
}

/// File metadata with a direct download URL.
#[derive(Debug, Clone, Deserialize)]
pub struct FileInfo {
    pub id: u64,

    pub filename: String,

    /// Direct (authorized) download URL.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_item_type_deserializes_known_variants() {
        let item: ModuleItem = serde_json::from_str(
            r#"{"type": "Page", "title": "Intro", "page_url": "intro"}"#,
        )
        .unwrap();
        assert_eq!(item.item_type, ModuleItemType::Page);
        assert_eq!(item.page_url.as_deref(), Some("intro"));
    }

    #[test]
    fn test_module_item_type_catch_all() {
        let item: ModuleItem =
            serde_json::from_str(r#"{"type": "Quiz", "title": "Quiz 1"}"#).unwrap();
        assert_eq!(item.item_type, ModuleItemType::Other);
    }

    #[test]
    fn test_page_listing_without_body() {
        let page: Page =
            serde_json::from_str(r#"{"url": "syllabus", "title": "Syllabus"}"#).unwrap();
        assert!(page.body.is_none());
    }
}
