//! End-to-end export tests against a mock LMS API.

use std::path::PathBuf;

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use canvas_export::api::CanvasApi;
use canvas_export::config::{ApiConfig, Config, ExportConfig};
use canvas_export::export::{export_files, export_pages, run_export, ExportStats};

fn config_for(server: &MockServer, course_id: &str, output_dir: PathBuf) -> Config {
    Config {
        api: ApiConfig {
            base_url: format!("{}/api/v1/", server.uri()),
            access_token: "test-token".to_string(),
        },
        export: ExportConfig {
            course_id: course_id.to_string(),
            output_dir: Some(output_dir),
        },
    }
}

fn api_for(server: &MockServer) -> CanvasApi {
    CanvasApi::new(&format!("{}/api/v1/", server.uri()), "test-token".to_string()).unwrap()
}

async fn mount_json(server: &MockServer, url_path: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, url_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_module_export_end_to_end() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_json(
        &server,
        "/api/v1/courses/101/modules",
        serde_json::json!([{ "id": 7, "name": "Week 1: Basics" }]),
    )
    .await;

    mount_json(
        &server,
        "/api/v1/courses/101/modules/7/items",
        serde_json::json!([
            { "type": "Page", "title": "Lecture", "page_url": "lecture-1" },
            { "type": "ExternalUrl", "title": "Reading", "external_url": "https://example.com/reading" },
            { "type": "ExternalTool", "title": "Discussion Board" },
            { "type": "Quiz", "title": "Quiz 1" }
        ]),
    )
    .await;

    mount_json(
        &server,
        "/api/v1/courses/101/pages/lecture-1",
        serde_json::json!({
            "url": "lecture-1",
            "title": "Lecture 1",
            "body": "<p>Slides: <a href=\"/courses/101/files/555/download\">slides</a></p>\
                     <iframe src=\"embed/abc\"></iframe>"
        }),
    )
    .await;

    mount_json(
        &server,
        "/api/v1/files/555",
        serde_json::json!({
            "id": 555,
            "filename": "slides.pdf",
            "url": format!("{}/dl/555", server.uri())
        }),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/dl/555"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"pdf bytes".to_vec()))
        .mount(&server)
        .await;

    // The other exporters see an empty / absent course.
    mount_status(&server, "/api/v1/courses/101/pages", 404).await;
    mount_json(&server, "/api/v1/courses/101/assignments", serde_json::json!([])).await;
    mount_status(&server, "/api/v1/courses/101/front_page", 404).await;
    mount_status(&server, "/api/v1/courses/101/files", 403).await;

    let config = config_for(&server, "101", out.path().to_path_buf());
    let api = api_for(&server);
    let stats = run_export(&api, &config).await.unwrap();

    let module_dir = out.path().join("7_Week 1_ Basics");
    assert!(module_dir.is_dir(), "module directory should exist");

    let combined = module_dir.join("7_Week 1_ Basics_combined_pages.html");
    let html = std::fs::read_to_string(&combined).unwrap();
    assert!(html.contains("<h2>Lecture 1</h2>"), "page title heading missing");
    assert!(
        html.contains("https://www.youtube.com/embed/abc"),
        "embed src should be normalized"
    );
    assert!(html.contains("https://example.com/reading"));
    assert!(html.contains("External Tool (LTI)"));
    assert!(!html.contains("Quiz 1"), "unhandled items contribute nothing");

    let downloaded = module_dir.join("slides.pdf");
    assert_eq!(std::fs::read(&downloaded).unwrap(), b"pdf bytes");

    assert_eq!(stats.modules, 1);
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.files_downloaded, 1);
}

#[tokio::test]
async fn test_pages_listing_404_yields_empty_export() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_status(&server, "/api/v1/courses/101/pages", 404).await;

    let api = api_for(&server);
    let mut stats = ExportStats::default();
    export_pages(&api, "101", out.path(), &mut stats)
        .await
        .expect("404 on the pages listing must not abort the export");

    assert!(!out.path().join("all_pages").exists());
    assert_eq!(stats.pages, 0);
}

#[tokio::test]
async fn test_files_listing_403_yields_empty_export() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_status(&server, "/api/v1/courses/101/files", 403).await;

    let api = api_for(&server);
    let mut stats = ExportStats::default();
    export_files(&api, "101", out.path(), &mut stats)
        .await
        .expect("403 on the files listing must not abort the export");

    assert!(!out.path().join("all_files").exists());
    assert_eq!(stats.files_downloaded, 0);
}

#[tokio::test]
async fn test_missing_page_slug_skips_item_only() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_json(
        &server,
        "/api/v1/courses/101/modules",
        serde_json::json!([{ "id": 3, "name": "Week 2" }]),
    )
    .await;

    mount_json(
        &server,
        "/api/v1/courses/101/modules/3/items",
        serde_json::json!([
            { "type": "Page", "title": "Gone", "page_url": "gone" },
            { "type": "Page", "title": "Kept", "page_url": "kept" }
        ]),
    )
    .await;

    mount_status(&server, "/api/v1/courses/101/pages/gone", 404).await;
    mount_json(
        &server,
        "/api/v1/courses/101/pages/kept",
        serde_json::json!({ "url": "kept", "title": "Kept", "body": "<p>still here</p>" }),
    )
    .await;

    let api = api_for(&server);
    let mut stats = ExportStats::default();
    canvas_export::export::export_modules(&api, "101", out.path(), &mut stats)
        .await
        .unwrap();

    let html =
        std::fs::read_to_string(out.path().join("3_Week 2").join("3_Week 2_combined_pages.html"))
            .unwrap();
    assert!(html.contains("<h2>Kept</h2>"));
    assert!(!html.contains("Gone"));
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.skipped, 1);
}

#[tokio::test]
async fn test_standalone_pages_are_written_per_record() {
    let server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_json(
        &server,
        "/api/v1/courses/101/pages",
        serde_json::json!([
            { "url": "syllabus", "title": "Syllabus: Fall" },
            { "title": "No Slug" }
        ]),
    )
    .await;

    mount_json(
        &server,
        "/api/v1/courses/101/pages/syllabus",
        serde_json::json!({ "url": "syllabus", "title": "Syllabus: Fall", "body": "<p>plan</p>" }),
    )
    .await;

    let api = api_for(&server);
    let mut stats = ExportStats::default();
    export_pages(&api, "101", out.path(), &mut stats).await.unwrap();

    // Forbidden characters in the title are sanitized in the filename.
    let page_file = out.path().join("all_pages").join("Syllabus_ Fall.html");
    let html = std::fs::read_to_string(&page_file).unwrap();
    assert!(html.contains("<h1>Syllabus_ Fall</h1>"));
    assert!(html.contains("<p>plan</p>"));

    assert_eq!(stats.pages, 1);
    assert_eq!(stats.skipped, 1, "listing entry without a slug is skipped");
}
