//! Projects with some artifacts missing or malformed

use super::helpers::{complete_project, line_with, run_checklist, write_file};

#[test]
fn manifest_without_start_url_fails_one_field() {
    let project = complete_project();
    write_file(
        project.path(),
        "manifest.json",
        r##"{"name": "n", "short_name": "s", "theme_color": "#000",
            "background_color": "#fff", "display": "minimal-ui", "icons": []}"##,
    );
    let (text, tally) = run_checklist(project.path());

    assert!(line_with(&text, "Missing required field: start_url").contains("❌"));
    assert_eq!(text.matches("Missing required field").count(), 1);
    assert!(line_with(&text, "Icons defined").ends_with("Icons defined: 0"));
    assert!(line_with(&text, "Display mode").ends_with("minimal-ui"));
    assert_eq!(tally.failed, 1);
}

#[test]
fn malformed_manifest_does_not_stop_the_run() {
    let project = complete_project();
    write_file(project.path(), "manifest.json", "{\"name\": \"broken\",");
    let (text, tally) = run_checklist(project.path());

    assert!(line_with(&text, "Error parsing manifest").contains("❌"));
    assert!(!text.contains("Missing required field"));
    assert!(!text.contains("Theme color"));
    // later groups still ran
    assert!(line_with(&text, "Install Event").contains("✅"));
    assert!(line_with(&text, "GitHub Actions Workflow").contains("✅"));
    assert!(text.contains("PWA Verification Complete!"));
    assert_eq!(tally.failed, 1);
}

#[test]
fn service_worker_missing_install_is_a_warning() {
    let project = complete_project();
    write_file(
        project.path(),
        "sw.js",
        "self.addEventListener('fetch', event => {});\n",
    );
    let (text, tally) = run_checklist(project.path());

    assert!(line_with(&text, "Fetch Event").contains("✅"));
    assert!(line_with(&text, "Install Event").contains("⚠️"));
    assert!(line_with(&text, "Activate Event").contains("⚠️"));
    assert!(line_with(&text, "Cache API").contains("⚠️"));
    assert!(line_with(&text, "Background Sync").contains("⚠️"));
    assert!(line_with(&text, "Push Notifications").contains("⚠️"));
    assert_eq!(tally.warnings, 5);
    assert_eq!(tally.failed, 0);
}

#[test]
fn uppercase_markers_satisfy_case_insensitive_checks() {
    let project = complete_project();
    write_file(
        project.path(),
        "sw.js",
        "// PUSH and Sync are handled elsewhere\n",
    );
    let (text, _) = run_checklist(project.path());

    assert!(line_with(&text, "Push Notifications").contains("✅"));
    assert!(line_with(&text, "Background Sync").contains("✅"));
}

#[test]
fn index_html_is_checked_by_both_html_groups() {
    let project = complete_project();
    write_file(
        project.path(),
        "index.html",
        "<html><head><meta name=\"viewport\"></head><body><div id=\"snippetList\"></div></body></html>",
    );
    let (text, tally) = run_checklist(project.path());

    assert!(line_with(&text, "Viewport").contains("✅"));
    assert!(line_with(&text, "Twitter Card").contains("❌"));
    assert!(line_with(&text, "Snippet List").contains("✅"));
    assert!(line_with(&text, "Snippet Tabs").contains("❌"));
    // 9 meta tags and 7 snippet ids missing
    assert_eq!(tally.failed, 16);
}

#[test]
fn missing_css_skips_style_checks() {
    let project = complete_project();
    std::fs::remove_file(project.path().join("custom.css")).unwrap();
    let (text, tally) = run_checklist(project.path());

    assert!(!text.contains("Console Container"));
    assert!(!text.contains("Preview Container"));
    // project structure line and style group target line
    assert_eq!(tally.failed, 2);
}

#[test]
fn unreadable_target_aborts_before_banner() {
    let project = complete_project();
    write_file(project.path(), "app.js", [0xffu8, 0xfe, 0xfd]);

    let mut out = Vec::new();
    let result = pwacheck::ChecklistRunner::new(project.path()).run_all(&mut out);
    let text = String::from_utf8_lossy(&out);

    assert!(result.is_err());
    assert!(text.contains("Snippet Manager Markup"));
    assert!(!text.contains("PWA Verification Complete!"));
}
