//! # Preview Service
//!
//! Composes a project's HTML and CSS code tabs into one sandboxed document.
//!
//! ## Philosophy
//!
//! - **Derived, never stored**: A preview is recomputed from the tabs each time
//! - **First match wins**: The first `.html` and first `.css` code tab are used
//! - **Sandboxed by default**: Documents carry the policy the renderer must apply
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An HTML parser (insertion points are found by plain substring search)
//! - A renderer (the host embeds the document in its own frame)

pub mod sandbox;

pub use sandbox::SandboxPolicy;

use serde::{Deserialize, Serialize};
use tracing::debug;
use workbench_types::Tab;

/// Shown in place of the document when a project has no HTML file
pub const NO_HTML_MESSAGE: &str = "No HTML file found in current project";

/// Secondary line under [`NO_HTML_MESSAGE`]
pub const NO_HTML_HINT: &str = "Create an HTML file in your project to see a preview here.";

/// Status line while a document is shown
pub const SHOWING_PREVIEW_STATUS: &str = "Showing preview of project files";

/// Result of composing a project's preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preview {
    /// Nothing to render
    Empty { message: String },
    /// Document to load into a sandboxed frame
    Document { html: String, sandbox: SandboxPolicy },
}

impl Preview {
    pub fn is_empty(&self) -> bool {
        matches!(self, Preview::Empty { .. })
    }

    /// Composed document, if there is one
    pub fn html(&self) -> Option<&str> {
        match self {
            Preview::Document { html, .. } => Some(html),
            Preview::Empty { .. } => None,
        }
    }

    /// Header status text for the preview pane
    pub fn status(&self) -> &str {
        match self {
            Preview::Empty { message } => message,
            Preview::Document { .. } => SHOWING_PREVIEW_STATUS,
        }
    }
}

/// Builds the preview for a project's tabs
pub fn compose_preview(tabs: &[Tab]) -> Preview {
    let html_tab = tabs.iter().find(|tab| tab.is_code_file_with_suffix(".html"));
    let css_tab = tabs.iter().find(|tab| tab.is_code_file_with_suffix(".css"));

    let Some(html_tab) = html_tab else {
        debug!(tabs = tabs.len(), "no html tab to preview");
        return Preview::Empty {
            message: NO_HTML_MESSAGE.to_string(),
        };
    };

    let css = css_tab.map(|tab| tab.content.as_str()).unwrap_or("");
    Preview::Document {
        html: inline_stylesheet(&html_tab.content, css),
        sandbox: SandboxPolicy::scripts_only(),
    }
}

/// Inserts `css` into `html` as a `<style>` element
///
/// Before the first `</head>` if present; otherwise a new head is placed
/// before the first `<body`; otherwise the head is prepended. Empty HTML or
/// empty CSS leaves the HTML as it is.
pub fn inline_stylesheet(html: &str, css: &str) -> String {
    if html.is_empty() || css.is_empty() {
        return html.to_string();
    }

    if let Some(index) = html.find("</head>") {
        return format!("{}<style>{}</style>{}", &html[..index], css, &html[index..]);
    }

    let head = format!("<head><style>{}</style></head>", css);
    match html.find("<body") {
        Some(index) => format!("{}{}{}", &html[..index], head, &html[index..]),
        None => format!("{}{}", head, html),
    }
}
