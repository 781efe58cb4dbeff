//! Extraction of internal file-storage links from page HTML.

use scraper::{Html, Selector};

/// Collect every anchor href that references the LMS file-storage scheme.
pub fn extract_file_links(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let anchors = Selector::parse("a[href]").unwrap();

    fragment
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.contains("/files/"))
        .map(str::to_string)
        .collect()
}

/// Extract the numeric file id from an href like
/// `/courses/12345/files/67890/download`.
///
/// Returns `None` when the href has no `/files/` segment or the segment
/// after it is not purely numeric.
pub fn file_id_from_link(href: &str) -> Option<String> {
    let (_, right_side) = href.split_once("/files/")?;

    let id = right_side
        .split('/')
        .next()
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("");

    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        Some(id.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_from_download_link() {
        assert_eq!(
            file_id_from_link("/courses/12345/files/67890/download"),
            Some("67890".to_string())
        );
    }

    #[test]
    fn test_file_id_from_link_with_query() {
        assert_eq!(
            file_id_from_link("/courses/12345/files/67890?verifier=abc"),
            Some("67890".to_string())
        );
    }

    #[test]
    fn test_non_numeric_segment_rejected() {
        assert_eq!(file_id_from_link("/courses/12345/files/abc"), None);
    }

    #[test]
    fn test_no_files_segment() {
        assert_eq!(file_id_from_link("/courses/12345/pages/intro"), None);
        assert_eq!(file_id_from_link("/courses/12345/files/"), None);
    }

    #[test]
    fn test_extract_file_links() {
        let html = r#"
            <p><a href="/courses/1/files/99/download">slides</a></p>
            <p><a href="https://example.com/other">external</a></p>
            <p><a href="/courses/1/files/100?verifier=x">notes</a></p>
        "#;
        let links = extract_file_links(html);
        assert_eq!(
            links,
            vec![
                "/courses/1/files/99/download".to_string(),
                "/courses/1/files/100?verifier=x".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_ignores_anchors_without_href() {
        assert!(extract_file_links("<a name=\"top\">anchor</a>").is_empty());
    }
}
