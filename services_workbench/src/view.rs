//! View routing helpers
//!
//! Which surface renders the active tab, and which icon a tab gets in the
//! sidebar. Pure functions of the tab; the host draws the pixels.

use serde::{Deserialize, Serialize};
use workbench_types::{Tab, TabKind};

/// Shown in the main area when no tab is active
pub const NO_TAB_MESSAGE: &str = "No tab selected. Create or select a tab to get started.";

/// Shown in the tab bar when no project is current
pub const NO_PROJECT_MESSAGE: &str = "No project selected";

/// Language the code editor falls back to for untagged tabs
pub const FALLBACK_LANGUAGE: &str = "plaintext";

/// Surface that renders the main content area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainView {
    /// No active tab
    Empty,
    /// Syntax-highlighting editor
    CodeEditor { language: String },
    /// Notes editor
    NotesEditor,
    /// HTML/CSS preview of the current project
    HtmlPreview,
}

impl MainView {
    pub fn for_tab(tab: Option<&Tab>) -> Self {
        let Some(tab) = tab else {
            return MainView::Empty;
        };
        match tab.kind {
            TabKind::Code => MainView::CodeEditor {
                language: tab
                    .language
                    .as_deref()
                    .filter(|language| !language.is_empty())
                    .unwrap_or(FALLBACK_LANGUAGE)
                    .to_string(),
            },
            TabKind::Note => MainView::NotesEditor,
            TabKind::HtmlPreview => MainView::HtmlPreview,
        }
    }
}

/// Icon class for a tab in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileIcon {
    Code,
    Json,
    Text,
}

const CODE_SUFFIXES: &[&str] = &[".html", ".css", ".js", ".jsx", ".ts", ".tsx"];

impl FileIcon {
    /// Chosen from the name's suffix, case-sensitively
    pub fn for_name(name: &str) -> Self {
        if CODE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            FileIcon::Code
        } else if name.ends_with(".json") {
            FileIcon::Json
        } else {
            FileIcon::Text
        }
    }
}
