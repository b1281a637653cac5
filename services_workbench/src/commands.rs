//! Command interface for the workbench store
//!
//! A serializable mirror of every store mutation, so a presentation layer can
//! dispatch (or record and replay) commands instead of calling methods.

use crate::WorkbenchStore;
use serde::{Deserialize, Serialize};
use services_storage::KeyValueStore;
use workbench_types::{ProjectId, TabDraft, TabId};

/// Workbench command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkbenchCommand {
    CreateProject {
        name: String,
    },
    SelectProject {
        project_id: ProjectId,
    },
    CreateTab {
        project_id: ProjectId,
        draft: TabDraft,
    },
    SelectTab {
        project_id: ProjectId,
        tab_id: TabId,
    },
    UpdateTabContent {
        project_id: ProjectId,
        tab_id: TabId,
        content: String,
    },
    CloseTab {
        project_id: ProjectId,
        tab_id: TabId,
    },
    ToggleAssistantPanel,
}

impl WorkbenchCommand {
    /// Short name for logs and history
    pub fn name(&self) -> &'static str {
        match self {
            WorkbenchCommand::CreateProject { .. } => "create_project",
            WorkbenchCommand::SelectProject { .. } => "select_project",
            WorkbenchCommand::CreateTab { .. } => "create_tab",
            WorkbenchCommand::SelectTab { .. } => "select_tab",
            WorkbenchCommand::UpdateTabContent { .. } => "update_tab_content",
            WorkbenchCommand::CloseTab { .. } => "close_tab",
            WorkbenchCommand::ToggleAssistantPanel => "toggle_assistant_panel",
        }
    }
}

/// Result of executing a workbench command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResult {
    /// Project was created
    ProjectCreated { project_id: ProjectId },
    /// Tab was created
    TabCreated { tab_id: TabId },
    /// Command applied
    Applied,
    /// Command referred to something that does not exist
    Ignored,
}

impl<S: KeyValueStore> WorkbenchStore<S> {
    /// Executes a workbench command
    pub fn execute_command(&mut self, command: WorkbenchCommand) -> CommandResult {
        tracing::debug!(command = command.name(), "executing command");
        match command {
            WorkbenchCommand::CreateProject { name } => CommandResult::ProjectCreated {
                project_id: self.create_project(name),
            },
            WorkbenchCommand::SelectProject { project_id } => {
                applied(self.select_project(&project_id))
            }
            WorkbenchCommand::CreateTab { project_id, draft } => {
                match self.create_tab(&project_id, draft) {
                    Some(tab_id) => CommandResult::TabCreated { tab_id },
                    None => CommandResult::Ignored,
                }
            }
            WorkbenchCommand::SelectTab { project_id, tab_id } => {
                applied(self.select_tab(&project_id, &tab_id))
            }
            WorkbenchCommand::UpdateTabContent {
                project_id,
                tab_id,
                content,
            } => applied(self.update_tab_content(&project_id, &tab_id, content)),
            WorkbenchCommand::CloseTab { project_id, tab_id } => {
                applied(self.close_tab(&project_id, &tab_id))
            }
            WorkbenchCommand::ToggleAssistantPanel => {
                self.toggle_assistant_panel();
                CommandResult::Applied
            }
        }
    }
}

fn applied(found: bool) -> CommandResult {
    if found {
        CommandResult::Applied
    } else {
        CommandResult::Ignored
    }
}
