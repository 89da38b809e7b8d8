//! A project tree that satisfies the whole checklist

use serial_test::serial;

use super::helpers::{complete_project, line_with, run_checklist};

#[test]
fn complete_project_passes_every_check() {
    let project = complete_project();
    let (text, tally) = run_checklist(project.path());

    assert_eq!(tally.failed, 0, "unexpected failures:\n{text}");
    assert_eq!(tally.warnings, 0, "unexpected warnings:\n{text}");
    assert_eq!(tally.passed, 72);
    assert!(!text.contains("NOT FOUND"));
    assert!(!text.contains("❌"));
}

#[test]
fn complete_project_manifest_summaries() {
    let project = complete_project();
    let (text, _) = run_checklist(project.path());

    assert!(line_with(&text, "name: Dark Chatbot Builder Pro").contains("✅"));
    assert!(line_with(&text, "icons: 2 items").contains("✅"));
    assert!(line_with(&text, "Icons defined").ends_with("Icons defined: 2"));
    assert!(line_with(&text, "Theme color").ends_with("Theme color: #6f42c1"));
    assert!(line_with(&text, "Display mode").ends_with("Display mode: standalone"));
}

#[test]
fn groups_appear_in_order() {
    let project = complete_project();
    let (text, _) = run_checklist(project.path());

    let sections: Vec<&str> = text
        .lines()
        .filter(|l| l.contains("🔍 Checking"))
        .collect();
    let expected = [
        "Project Structure",
        "PWA Manifest",
        "Service Worker",
        "PWA Icons",
        "SEO Files",
        "HTML Meta Tags",
        "Snippet Manager Markup",
        "Snippet Manager Logic",
        "Snippet Manager Styles",
        "Deployment Files",
    ];
    assert_eq!(sections.len(), expected.len());
    for (line, title) in sections.iter().zip(expected) {
        assert!(line.contains(title), "{line:?} should mention {title}");
    }
}

#[test]
#[serial]
fn plain_output_lines() {
    colored::control::set_override(false);
    let project = complete_project();
    let (text, _) = run_checklist(project.path());
    colored::control::unset_override();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "🚀 Dark Chatbot Builder Pro - PWA Verification");
    assert_eq!(lines[1], "=".repeat(50));
    assert!(lines.contains(&"🔍 Checking Service Worker..."));
    assert!(lines.contains(&"✅ Service Worker: sw.js (321 bytes)"));
    assert!(lines.contains(&"  ✅ Install Event"));
    assert!(lines.contains(&"✅ Security.txt: .well-known/security.txt (37 bytes)"));
    assert!(lines.contains(&"  ✅ start_url: ./index.html"));
    assert!(lines.contains(&"  🖥️ Display mode: standalone"));

    let tail = &lines[lines.len() - 5..];
    assert_eq!(
        tail,
        [
            "📊 72 passed, 0 failed, 0 warnings",
            "✅ PWA Verification Complete!",
            "🌐 Local server running at: http://localhost:8000",
            "📱 Test PWA features in Chrome/Edge DevTools",
            "🚀 Ready for production deployment!",
        ]
        .as_slice()
    );
}
