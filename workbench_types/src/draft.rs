//! Tab drafts
//!
//! A draft is everything a tab needs except its id. The presets below mirror
//! what the tab bar's "New File" / "New Note" / "HTML Preview" menu creates.

use crate::model::TabKind;
use serde::{Deserialize, Serialize};

const REACT_COMPONENT_STUB: &str = "// React component\n\nimport React from \"react\";\n\nfunction Component() {\n  return (\n    <div>\n      <h1>Hello World</h1>\n    </div>\n  );\n}\n\nexport default Component;";

const HTML_STARTER: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>New Page</title>\n</head>\n<body>\n  <h1>Hello World</h1>\n</body>\n</html>";

const CSS_STARTER: &str = "/* CSS styles */\n\nbody {\n  font-family: sans-serif;\n  margin: 0;\n  padding: 20px;\n}\n\nh1 {\n  color: navy;\n}";

const JSON_STARTER: &str = "{\n  \"name\": \"example\",\n  \"version\": \"1.0.0\"\n}";

/// Fields for a tab that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDraft {
    pub name: String,
    pub kind: TabKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl TabDraft {
    /// Creates a draft with no language tag
    pub fn new(name: impl Into<String>, kind: TabKind, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            content: content.into(),
            language: None,
        }
    }

    /// Sets the editor language tag
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Code file whose language and starter content follow its extension
    pub fn code_file(name: impl Into<String>) -> Self {
        let name = name.into();
        let (language, content) = starter_for_file_name(&name);
        Self::new(name, TabKind::Code, content).with_language(language)
    }

    /// Note titled `title`; a blank title becomes "Untitled Note"
    pub fn note(title: impl Into<String>) -> Self {
        let mut title = title.into();
        if title.trim().is_empty() {
            title = "Untitled Note".to_string();
        }
        let content = format!("# {}\n\nStart writing your notes here...\n", title);
        Self::new(title, TabKind::Note, content)
    }

    /// Preview tab rendering the project's HTML and CSS files
    pub fn html_preview() -> Self {
        Self::new("Preview", TabKind::HtmlPreview, "")
    }
}

/// Lowercased text after the last `.`, or the whole name if it has none
fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Language tag and starter content for a new code file
pub fn starter_for_file_name(name: &str) -> (String, String) {
    let extension = extension_of(name);
    let (language, content) = match extension.as_str() {
        "js" => ("javascript", "// JavaScript file\n\n"),
        "ts" => ("typescript", "// TypeScript file\n\n"),
        "jsx" => ("jsx", REACT_COMPONENT_STUB),
        "tsx" => ("tsx", REACT_COMPONENT_STUB),
        "html" => ("html", HTML_STARTER),
        "css" => ("css", CSS_STARTER),
        "json" => ("json", JSON_STARTER),
        _ => ("plaintext", ""),
    };
    (language.to_string(), content.to_string())
}
