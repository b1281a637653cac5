//! Seed data for a workbench with no persisted projects

use workbench_types::{Project, ProjectId, Tab, TabDraft, TabId, TabKind};

pub const SEED_PROJECT_NAME: &str = "My Project";

const SEED_HTML: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>My Project</title>\n</head>\n<body>\n  <h1>Hello World</h1>\n</body>\n</html>";

const SEED_CSS: &str = "body {\n  font-family: sans-serif;\n  margin: 0;\n  padding: 20px;\n}\n\nh1 {\n  color: navy;\n}";

const SEED_NOTES: &str =
    "# Project Notes\n\n- Add responsive design\n- Implement dark mode\n- Fix navigation issues";

/// The starter project: a page, its stylesheet and a notes tab
pub fn seed_projects() -> Vec<Project> {
    let mut project = Project::new(ProjectId::new(), SEED_PROJECT_NAME);
    project.tabs = vec![
        Tab::from_draft(
            TabId::new(),
            TabDraft::new("index.html", TabKind::Code, SEED_HTML).with_language("html"),
        ),
        Tab::from_draft(
            TabId::new(),
            TabDraft::new("styles.css", TabKind::Code, SEED_CSS).with_language("css"),
        ),
        Tab::from_draft(
            TabId::new(),
            TabDraft::new("Project Notes", TabKind::Note, SEED_NOTES),
        ),
    ];
    vec![project]
}
