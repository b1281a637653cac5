//! Projects and tabs

use crate::draft::TabDraft;
use crate::ids::{ProjectId, TabId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a tab holds and which surface edits it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabKind {
    /// Source file edited in the code editor
    #[serde(rename = "code")]
    Code,
    /// Freeform markdown-ish note
    #[serde(rename = "note")]
    Note,
    /// Live HTML/CSS preview of the project
    #[serde(rename = "html")]
    HtmlPreview,
}

impl fmt::Display for TabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabKind::Code => write!(f, "code"),
            TabKind::Note => write!(f, "note"),
            TabKind::HtmlPreview => write!(f, "html"),
        }
    }
}

/// A single editable unit owned by one project
///
/// `id` and `kind` are fixed at creation; only `content` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: TabKind,
    /// Editor language tag, meaningful for `TabKind::Code` only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Tab {
    /// Materializes a draft under the given id
    pub fn from_draft(id: TabId, draft: TabDraft) -> Self {
        Self {
            id,
            name: draft.name,
            content: draft.content,
            kind: draft.kind,
            language: draft.language,
        }
    }

    /// Returns true for code tabs whose name ends with `suffix` (e.g. `".html"`)
    pub fn is_code_file_with_suffix(&self, suffix: &str) -> bool {
        self.kind == TabKind::Code && self.name.ends_with(suffix)
    }
}

/// A named, ordered collection of tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Display order; closing a tab picks its neighbor by position
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

impl Project {
    /// Creates an empty project
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tabs: Vec::new(),
        }
    }

    /// Looks up a tab by id
    pub fn tab(&self, tab_id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| &t.id == tab_id)
    }

    /// Looks up a tab by id, mutably
    pub fn tab_mut(&mut self, tab_id: &TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| &t.id == tab_id)
    }

    /// Position of a tab in display order
    pub fn tab_index(&self, tab_id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == tab_id)
    }

    /// Returns true if the tab belongs to this project
    pub fn contains_tab(&self, tab_id: &TabId) -> bool {
        self.tab_index(tab_id).is_some()
    }

    /// First tab in display order
    pub fn first_tab(&self) -> Option<&Tab> {
        self.tabs.first()
    }
}
