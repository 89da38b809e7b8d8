//! The built-in Dark Chatbot Builder Pro checklist

use super::{Check, CheckGroup, GroupBody, TargetFile, REQUIRED_FIELDS};
use crate::report::Status;

pub const MANIFEST: TargetFile = TargetFile {
    path: "manifest.json",
    description: "PWA Manifest",
};

pub const SERVICE_WORKER: TargetFile = TargetFile {
    path: "sw.js",
    description: "Service Worker",
};

pub const INDEX_HTML: TargetFile = TargetFile {
    path: "index.html",
    description: "Main HTML File",
};

pub const APP_JS: TargetFile = TargetFile {
    path: "app.js",
    description: "Application Logic",
};

pub const CUSTOM_CSS: TargetFile = TargetFile {
    path: "custom.css",
    description: "Custom Styles",
};

/// Icon sizes the manifest advertises, in ascending order
pub const ICON_SIZES: &[&str] = &[
    "72x72", "96x96", "128x128", "144x144", "152x152", "192x192", "384x384", "512x512",
];

const CORE_FILES: &[(&str, &str)] = &[
    ("index.html", "Main Application"),
    ("app.js", "Application Logic"),
    ("custom.css", "Custom Styles"),
    ("README.md", "Documentation"),
    ("PWA_ENHANCEMENT_REPORT.md", "Enhancement Report"),
];

const SEO_FILES: &[(&str, &str)] = &[
    ("sitemap.xml", "XML Sitemap"),
    ("robots.txt", "Robots.txt"),
    ("favicon.svg", "Favicon"),
    ("social-preview.svg", "Social Media Preview"),
    (".well-known/security.txt", "Security.txt"),
];

const DEPLOYMENT_FILES: &[(&str, &str)] = &[
    ("netlify.toml", "Netlify Configuration"),
    (".htaccess", "Apache Configuration"),
    ("_headers", "Netlify Headers"),
    ("package.json", "NPM Package Configuration"),
    (".github/workflows/deploy.yml", "GitHub Actions Workflow"),
];

const ICON_PATHS: &[&str] = &[
    "icons/icon-72x72.svg",
    "icons/icon-96x96.svg",
    "icons/icon-128x128.svg",
    "icons/icon-144x144.svg",
    "icons/icon-152x152.svg",
    "icons/icon-192x192.svg",
    "icons/icon-384x384.svg",
    "icons/icon-512x512.svg",
];

/// All groups in report order.
pub fn default_groups() -> Vec<CheckGroup> {
    vec![
        CheckGroup::files("Project Structure", CORE_FILES),
        manifest(),
        service_worker(),
        icons(),
        CheckGroup::files("SEO Files", SEO_FILES),
        html_meta_tags(),
        snippet_markup(),
        snippet_logic(),
        snippet_styles(),
        CheckGroup::files("Deployment Files", DEPLOYMENT_FILES),
    ]
}

fn manifest() -> CheckGroup {
    CheckGroup {
        title: "PWA Manifest",
        target: Some(MANIFEST),
        body: GroupBody::Manifest {
            required_fields: REQUIRED_FIELDS,
        },
    }
}

fn service_worker() -> CheckGroup {
    CheckGroup::content(
        "Service Worker",
        SERVICE_WORKER,
        vec![
            Check::literal("Install Event", "addEventListener('install'"),
            Check::literal("Activate Event", "addEventListener('activate'"),
            Check::literal("Fetch Event", "addEventListener('fetch'"),
            Check::literal("Cache API", "caches.open"),
            Check::case_insensitive("Background Sync", "sync"),
            Check::case_insensitive("Push Notifications", "push"),
        ],
        Status::Warn,
    )
}

fn icons() -> CheckGroup {
    let checks = ICON_SIZES
        .iter()
        .zip(ICON_PATHS)
        .map(|(size, &path)| Check::exists(format!("Icon {size}"), path))
        .collect();

    CheckGroup {
        title: "PWA Icons",
        target: None,
        body: GroupBody::Checks {
            checks,
            on_miss: Status::Fail,
        },
    }
}

fn html_meta_tags() -> CheckGroup {
    CheckGroup::content(
        "HTML Meta Tags",
        INDEX_HTML,
        vec![
            Check::literal("Viewport", r#"name="viewport""#),
            Check::literal("Description", r#"name="description""#),
            Check::literal("Keywords", r#"name="keywords""#),
            Check::literal("Theme Color", r#"name="theme-color""#),
            Check::literal("Open Graph Title", r#"property="og:title""#),
            Check::literal("Open Graph Image", r#"property="og:image""#),
            Check::literal("Twitter Card", r#"name="twitter:card""#),
            Check::literal("Canonical URL", r#"rel="canonical""#),
            Check::literal("Manifest Link", r#"rel="manifest""#),
            Check::literal("Structured Data", "application/ld+json"),
        ],
        Status::Fail,
    )
}

fn snippet_markup() -> CheckGroup {
    CheckGroup::content(
        "Snippet Manager Markup",
        INDEX_HTML,
        vec![
            Check::literal("Snippet Editor", r#"id="snippetEditor""#),
            Check::literal("Snippet Tabs", r#"id="snippetTabs""#),
            Check::literal("HTML Editor", r#"id="htmlCode""#),
            Check::literal("CSS Editor", r#"id="cssCode""#),
            Check::literal("JS Editor", r#"id="jsCode""#),
            Check::literal("Snippet Preview", r#"id="snippetPreview""#),
            Check::literal("Console Output", r#"id="consoleOutput""#),
            Check::literal("Snippet List", r#"id="snippetList""#),
        ],
        Status::Fail,
    )
}

fn snippet_logic() -> CheckGroup {
    CheckGroup::content(
        "Snippet Manager Logic",
        APP_JS,
        vec![
            Check::literal("Toggle Editor", "toggleSnippetEditor"),
            Check::literal("Save Snippet", "saveSnippet"),
            Check::literal("Run Snippet", "runSnippet"),
            Check::literal("Render Snippets", "renderSnippets"),
            Check::literal("Clear Console", "clearConsole"),
            Check::literal("Sample Snippets", "addSampleSnippets"),
        ],
        Status::Fail,
    )
}

fn snippet_styles() -> CheckGroup {
    CheckGroup::content(
        "Snippet Manager Styles",
        CUSTOM_CSS,
        vec![
            Check::literal("Snippet Editor", ".snippet-editor"),
            Check::literal("Code Editor", ".code-editor"),
            Check::literal("Console Container", ".console-container"),
            Check::literal("Console Output", ".console-output"),
            Check::literal("Snippet Item", ".snippet-item"),
            Check::literal("Preview Container", ".preview-container"),
        ],
        Status::Fail,
    )
}
