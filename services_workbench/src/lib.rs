//! # Workbench Service
//!
//! The workbench domain store: projects, tabs, the selection cursor, the
//! assistant panel flag, and their persistence.
//!
//! ## Philosophy
//!
//! - **One source of truth**: Projects are stored once; the current project and
//!   active tab are ids, resolved by lookup on every read
//! - **Explicitly constructed**: A store is opened over injected storage and
//!   settings; there is no global instance
//! - **Mutation and persistence commit together**: Every operation that changes
//!   projects writes them before returning
//! - **Fail-soft**: Unknown ids are no-ops; storage failures degrade the session
//!   to in-memory and are never surfaced to callers
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A sync engine (single user, single process)
//! - An undo stack
//! - A renderer (views are data, see [`view`])
//!
//! ## Example
//!
//! ```ignore
//! use services_settings::WorkbenchSettings;
//! use services_storage::MemoryStore;
//! use services_workbench::WorkbenchStore;
//! use workbench_types::TabDraft;
//!
//! let mut store = WorkbenchStore::open(MemoryStore::new(), WorkbenchSettings::default());
//! let demo = store.create_project("Demo");
//! let tab = store.create_tab(&demo, TabDraft::code_file("a.js")).unwrap();
//! assert_eq!(store.active_tab().map(|t| &t.id), Some(&tab));
//! ```

pub mod commands;
pub mod events;
pub mod persistence;
pub mod seed;
pub mod view;

pub use commands::{CommandResult, WorkbenchCommand};
pub use events::WorkbenchEvent;
pub use persistence::PersistenceError;
pub use view::{FileIcon, MainView};

use events::EventLog;
use input_types::InputEvent;
use persistence::{decode_projects, encode_projects};
use serde::{Deserialize, Serialize};
use services_assistant::{AssistantSession, Responder};
use services_preview::{compose_preview, Preview};
use services_settings::WorkbenchSettings;
use services_shortcuts::{Action, ShortcutMatcher};
use services_storage::KeyValueStore;
use tracing::{debug, info, warn};
use workbench_types::{Project, ProjectId, Tab, TabDraft, TabId};

/// Immutable copy of the store's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbenchSnapshot {
    /// Creation order
    pub projects: Vec<Project>,
    pub current_project_id: Option<ProjectId>,
    pub active_tab_id: Option<TabId>,
    pub assistant_panel_open: bool,
}

impl WorkbenchSnapshot {
    pub fn project(&self, project_id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == project_id)
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current_project_id
            .as_ref()
            .and_then(|id| self.project(id))
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        let tab_id = self.active_tab_id.as_ref()?;
        self.current_project()?.tab(tab_id)
    }
}

/// Whether writes still reach durable storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistenceStatus {
    /// Every committed mutation has been written
    Durable,
    /// A write failed; the session is in-memory only from here on
    Degraded { reason: String },
}

impl PersistenceStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, PersistenceStatus::Degraded { .. })
    }
}

/// The workbench domain store
///
/// Invariants after every call:
/// - `active_tab_id`, if set, names a tab of the current project
/// - no current project implies no active tab
/// - project ids are unique, and tab ids are unique within their project
pub struct WorkbenchStore<S: KeyValueStore> {
    storage: S,
    settings: WorkbenchSettings,
    projects: Vec<Project>,
    current_project_id: Option<ProjectId>,
    active_tab_id: Option<TabId>,
    assistant_panel_open: bool,
    shortcuts: ShortcutMatcher<Action>,
    events: EventLog,
    persistence: PersistenceStatus,
}

impl<S: KeyValueStore> WorkbenchStore<S> {
    /// Loads persisted projects or seeds a starter project
    ///
    /// Missing or malformed blobs are treated alike: the seed project is
    /// created and written. A persisted empty array is kept as is. If the
    /// slot cannot be read at all, the seed is used in memory only so the
    /// unreadable blob is not overwritten.
    pub fn open(storage: S, settings: WorkbenchSettings) -> Self {
        let mut shortcuts = ShortcutMatcher::new();
        shortcuts.bind(
            settings.toggle_assistant.clone(),
            Action::ToggleAssistantPanel,
        );

        let mut store = Self {
            events: EventLog::new(settings.event_history_limit),
            storage,
            settings,
            projects: Vec::new(),
            current_project_id: None,
            active_tab_id: None,
            assistant_panel_open: false,
            shortcuts,
            persistence: PersistenceStatus::Durable,
        };

        match store.storage.get(&store.settings.projects_key) {
            Ok(Some(blob)) => match decode_projects(&blob) {
                Ok(projects) => {
                    info!(projects = projects.len(), "loaded persisted projects");
                    store.projects = projects;
                }
                Err(err) => {
                    warn!(error = %err, "persisted projects unusable, seeding");
                    store.seed();
                }
            },
            Ok(None) => {
                info!("no persisted projects, seeding");
                store.seed();
            }
            Err(err) => {
                warn!(error = %err, "projects slot unreadable, continuing in memory");
                store.degrade(err.to_string());
                store.projects = seed::seed_projects();
            }
        }

        if let Some(project) = store.projects.first() {
            store.current_project_id = Some(project.id.clone());
            store.active_tab_id = project.first_tab().map(|t| t.id.clone());
        }
        store
    }

    fn seed(&mut self) {
        self.projects = seed::seed_projects();
        self.commit();
    }

    // Reads

    /// Cloned copy of the whole state
    pub fn snapshot(&self) -> WorkbenchSnapshot {
        WorkbenchSnapshot {
            projects: self.projects.clone(),
            current_project_id: self.current_project_id.clone(),
            active_tab_id: self.active_tab_id.clone(),
            assistant_panel_open: self.assistant_panel_open,
        }
    }

    /// Projects in creation order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, project_id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == project_id)
    }

    pub fn current_project_id(&self) -> Option<&ProjectId> {
        self.current_project_id.as_ref()
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current_project_id
            .as_ref()
            .and_then(|id| self.project(id))
    }

    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.active_tab_id.as_ref()
    }

    /// Resolved from the current project on every call
    pub fn active_tab(&self) -> Option<&Tab> {
        let tab_id = self.active_tab_id.as_ref()?;
        self.current_project()?.tab(tab_id)
    }

    pub fn is_assistant_panel_open(&self) -> bool {
        self.assistant_panel_open
    }

    /// Preview of the current project; the empty state when there is none
    pub fn preview(&self) -> Preview {
        let tabs = self
            .current_project()
            .map(|p| p.tabs.as_slice())
            .unwrap_or(&[]);
        compose_preview(tabs)
    }

    /// Surface that renders the active tab
    pub fn main_view(&self) -> MainView {
        MainView::for_tab(self.active_tab())
    }

    /// Drains queued events, oldest first
    pub fn take_events(&mut self) -> Vec<WorkbenchEvent> {
        self.events.drain()
    }

    pub fn persistence_status(&self) -> &PersistenceStatus {
        &self.persistence
    }

    pub fn settings(&self) -> &WorkbenchSettings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Gives the storage back, e.g. to reopen a store over it
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Starts an assistant conversation using the configured greeting and delay
    pub fn start_assistant_session<R: Responder>(&self, responder: R) -> AssistantSession<R> {
        AssistantSession::new(
            responder,
            self.settings.greeting.clone(),
            self.settings.reply_delay_ms,
        )
    }

    // Mutations

    /// Appends an empty project and makes it current
    ///
    /// Names are not validated; empty names are allowed.
    pub fn create_project(&mut self, name: impl Into<String>) -> ProjectId {
        let project_id = self.fresh_project_id();
        let project = Project::new(project_id.clone(), name);
        info!(project_id = %project_id, name = %project.name, "project created");

        self.projects.push(project);
        self.current_project_id = Some(project_id.clone());
        self.active_tab_id = None;
        self.commit();

        self.events.push(WorkbenchEvent::ProjectCreated {
            project_id: project_id.clone(),
        });
        project_id
    }

    /// Makes a project current and activates its first tab
    pub fn select_project(&mut self, project_id: &ProjectId) -> bool {
        let Some(project) = self.project(project_id) else {
            debug!(project_id = %project_id, "select_project: unknown project");
            return false;
        };
        let first_tab = project.first_tab().map(|t| t.id.clone());

        self.current_project_id = Some(project_id.clone());
        self.active_tab_id = first_tab;
        self.events.push(WorkbenchEvent::ProjectSelected {
            project_id: project_id.clone(),
        });
        true
    }

    /// Appends a tab built from `draft`
    ///
    /// The new tab becomes active only if its project is current.
    pub fn create_tab(&mut self, project_id: &ProjectId, draft: TabDraft) -> Option<TabId> {
        let index = self.project_index(project_id);
        let Some(index) = index else {
            debug!(project_id = %project_id, "create_tab: unknown project");
            return None;
        };

        let tab_id = self.fresh_tab_id();
        self.projects[index]
            .tabs
            .push(Tab::from_draft(tab_id.clone(), draft));

        if self.current_project_id.as_ref() == Some(project_id) {
            self.active_tab_id = Some(tab_id.clone());
        }
        self.commit();

        self.events.push(WorkbenchEvent::TabCreated {
            project_id: project_id.clone(),
            tab_id: tab_id.clone(),
        });
        Some(tab_id)
    }

    /// Activates a tab, making its project current if it is not already
    ///
    /// Selecting the already active tab is accepted but changes nothing.
    pub fn select_tab(&mut self, project_id: &ProjectId, tab_id: &TabId) -> bool {
        let found = self
            .project(project_id)
            .map(|p| p.contains_tab(tab_id))
            .unwrap_or(false);
        if !found {
            debug!(project_id = %project_id, tab_id = %tab_id, "select_tab: unknown tab");
            return false;
        }

        let already_active = self.current_project_id.as_ref() == Some(project_id)
            && self.active_tab_id.as_ref() == Some(tab_id);
        if already_active {
            return true;
        }

        self.current_project_id = Some(project_id.clone());
        self.active_tab_id = Some(tab_id.clone());
        self.events.push(WorkbenchEvent::TabSelected {
            project_id: project_id.clone(),
            tab_id: tab_id.clone(),
        });
        true
    }

    /// Replaces a tab's content; everything else about the tab is kept
    pub fn update_tab_content(
        &mut self,
        project_id: &ProjectId,
        tab_id: &TabId,
        content: impl Into<String>,
    ) -> bool {
        let content = content.into();
        let tab = self
            .projects
            .iter_mut()
            .find(|p| &p.id == project_id)
            .and_then(|p| p.tab_mut(tab_id));
        let Some(tab) = tab else {
            debug!(project_id = %project_id, tab_id = %tab_id, "update_tab_content: unknown tab");
            return false;
        };

        if tab.content == content {
            return true;
        }
        tab.content = content;
        self.commit();

        self.events.push(WorkbenchEvent::TabContentUpdated {
            project_id: project_id.clone(),
            tab_id: tab_id.clone(),
        });
        true
    }

    /// Removes a tab
    ///
    /// Closing the active tab activates its left neighbor, else its right
    /// neighbor, else nothing. Closing any other tab leaves the selection alone.
    pub fn close_tab(&mut self, project_id: &ProjectId, tab_id: &TabId) -> bool {
        let located = self.project_index(project_id).and_then(|project_index| {
            self.projects[project_index]
                .tab_index(tab_id)
                .map(|tab_index| (project_index, tab_index))
        });
        let Some((project_index, tab_index)) = located else {
            debug!(project_id = %project_id, tab_id = %tab_id, "close_tab: unknown tab");
            return false;
        };

        let was_active = self.current_project_id.as_ref() == Some(project_id)
            && self.active_tab_id.as_ref() == Some(tab_id);

        let tabs = &mut self.projects[project_index].tabs;
        tabs.remove(tab_index);

        let mut next_active = None;
        if was_active {
            // After removal the right neighbor has slid into `tab_index`
            let neighbor = if tab_index > 0 {
                tabs.get(tab_index - 1)
            } else {
                tabs.get(tab_index)
            };
            next_active = neighbor.map(|t| t.id.clone());
            self.active_tab_id = next_active.clone();
        }
        self.commit();

        self.events.push(WorkbenchEvent::TabClosed {
            project_id: project_id.clone(),
            tab_id: tab_id.clone(),
            next_active,
        });
        true
    }

    /// Flips the assistant panel flag
    pub fn toggle_assistant_panel(&mut self) {
        self.assistant_panel_open = !self.assistant_panel_open;
        debug!(open = self.assistant_panel_open, "assistant panel toggled");
        self.events.push(WorkbenchEvent::AssistantPanelToggled {
            open: self.assistant_panel_open,
        });
    }

    /// Feeds a document-level input event through the shortcut matcher
    ///
    /// Fired actions are applied and returned.
    pub fn handle_input(&mut self, event: &InputEvent) -> Vec<Action> {
        let fired = self.shortcuts.handle_event(event);
        for action in &fired {
            match action {
                Action::ToggleAssistantPanel => self.toggle_assistant_panel(),
                Action::Custom(name) => debug!(action = %name, "no handler for shortcut action"),
            }
        }
        fired
    }

    /// Shortcut bindings, for hosts that add their own
    pub fn shortcuts_mut(&mut self) -> &mut ShortcutMatcher<Action> {
        &mut self.shortcuts
    }

    // Internals

    fn project_index(&self, project_id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| &p.id == project_id)
    }

    fn fresh_project_id(&self) -> ProjectId {
        loop {
            let id = ProjectId::new();
            if self.project(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_tab_id(&self) -> TabId {
        loop {
            let id = TabId::new();
            if !self.projects.iter().any(|p| p.contains_tab(&id)) {
                return id;
            }
        }
    }

    /// Writes projects, swallowing and recording any failure
    fn commit(&mut self) {
        if self.persistence.is_degraded() {
            debug!("persistence degraded, skipping write");
            return;
        }
        if let Err(err) = self.write_projects() {
            warn!(error = %err, "failed to persist projects, continuing in memory");
            self.degrade(err.to_string());
        }
    }

    /// Switches to in-memory only and queues the one degradation event
    fn degrade(&mut self, reason: String) {
        self.persistence = PersistenceStatus::Degraded {
            reason: reason.clone(),
        };
        self.events
            .push(WorkbenchEvent::PersistenceDegraded { reason });
    }

    fn write_projects(&mut self) -> Result<(), PersistenceError> {
        let blob = encode_projects(&self.projects)?;
        self.storage.set(&self.settings.projects_key, &blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services_storage::{FailingStore, FailurePolicy, MemoryStore};
    use workbench_types::TabKind;

    fn empty_store() -> WorkbenchStore<MemoryStore> {
        let storage = MemoryStore::with_value("workbench-projects", "[]");
        WorkbenchStore::open(storage, WorkbenchSettings::default())
    }

    fn assert_active_invariant<S: KeyValueStore>(store: &WorkbenchStore<S>) {
        if let Some(tab_id) = store.active_tab_id() {
            let project = store.current_project().expect("active tab without project");
            assert!(project.contains_tab(tab_id));
        }
        if store.current_project_id().is_none() {
            assert!(store.active_tab_id().is_none());
        }
    }

    #[test]
    fn test_cold_start_seeds_and_persists() {
        let store = WorkbenchStore::open(MemoryStore::new(), WorkbenchSettings::default());

        assert_eq!(store.projects().len(), 1);
        let project = store.current_project().unwrap();
        assert_eq!(project.name, "My Project");
        assert_eq!(store.active_tab().unwrap().name, "index.html");
        assert!(!store.is_assistant_panel_open());
        assert!(store.storage().get("workbench-projects").unwrap().is_some());
    }

    #[test]
    fn test_empty_array_is_prior_state() {
        let store = empty_store();
        assert!(store.projects().is_empty());
        assert!(store.current_project().is_none());
        assert!(store.active_tab().is_none());
        assert_eq!(store.main_view(), MainView::Empty);
    }

    #[test]
    fn test_create_project_becomes_current() {
        let mut store = empty_store();
        let id = store.create_project("Demo");

        assert_eq!(store.current_project_id(), Some(&id));
        assert!(store.active_tab().is_none());
        assert_eq!(
            store.take_events(),
            vec![WorkbenchEvent::ProjectCreated { project_id: id }]
        );
    }

    #[test]
    fn test_create_project_allows_empty_name() {
        let mut store = empty_store();
        let id = store.create_project("");
        assert_eq!(store.project(&id).unwrap().name, "");
    }

    #[test]
    fn test_create_tab_in_current_project_activates_it() {
        let mut store = empty_store();
        let demo = store.create_project("Demo");
        let tab = store
            .create_tab(
                &demo,
                TabDraft::new("a.js", TabKind::Code, "").with_language("javascript"),
            )
            .unwrap();

        assert_eq!(store.current_project().unwrap().tabs.len(), 1);
        assert_eq!(store.active_tab().unwrap().id, tab);
        assert_active_invariant(&store);
    }

    #[test]
    fn test_create_tab_in_other_project_keeps_selection() {
        let mut store = empty_store();
        let first = store.create_project("First");
        let first_tab = store.create_tab(&first, TabDraft::note("n")).unwrap();
        let second = store.create_project("Second");
        store.select_project(&first);

        store.create_tab(&second, TabDraft::note("m")).unwrap();
        assert_eq!(store.current_project_id(), Some(&first));
        assert_eq!(store.active_tab_id(), Some(&first_tab));
        assert_eq!(store.project(&second).unwrap().tabs.len(), 1);
    }

    #[test]
    fn test_create_tab_unknown_project_is_noop() {
        let mut store = empty_store();
        let before = store.snapshot();
        assert!(store
            .create_tab(&ProjectId::from("missing"), TabDraft::note("x"))
            .is_none());
        assert_eq!(store.snapshot(), before);
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_select_project_activates_first_tab() {
        let mut store = empty_store();
        let a = store.create_project("A");
        let a1 = store.create_tab(&a, TabDraft::note("1")).unwrap();
        store.create_tab(&a, TabDraft::note("2")).unwrap();
        let b = store.create_project("B");

        assert!(store.select_project(&a));
        assert_eq!(store.active_tab_id(), Some(&a1));

        assert!(store.select_project(&b));
        assert_eq!(store.active_tab_id(), None);

        assert!(!store.select_project(&ProjectId::from("nope")));
        assert_eq!(store.current_project_id(), Some(&b));
    }

    #[test]
    fn test_select_tab_switches_project() {
        let mut store = empty_store();
        let a = store.create_project("A");
        let a1 = store.create_tab(&a, TabDraft::note("1")).unwrap();
        let _b = store.create_project("B");

        assert!(store.select_tab(&a, &a1));
        assert_eq!(store.current_project_id(), Some(&a));
        assert_eq!(store.active_tab_id(), Some(&a1));
        assert_active_invariant(&store);
    }

    #[test]
    fn test_select_tab_rejects_foreign_tab() {
        let mut store = empty_store();
        let a = store.create_project("A");
        let a1 = store.create_tab(&a, TabDraft::note("1")).unwrap();
        let b = store.create_project("B");

        assert!(!store.select_tab(&b, &a1));
        assert_eq!(store.current_project_id(), Some(&b));
        assert_eq!(store.active_tab_id(), None);
    }

    #[test]
    fn test_select_active_tab_is_idempotent() {
        let mut store = empty_store();
        let a = store.create_project("A");
        let t = store.create_tab(&a, TabDraft::note("1")).unwrap();
        store.take_events();
        let before = store.snapshot();

        assert!(store.select_tab(&a, &t));
        assert_eq!(store.snapshot(), before);
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_update_inactive_tab_keeps_active() {
        let mut store = empty_store();
        let p = store.create_project("P");
        let t = store.create_tab(&p, TabDraft::note("T")).unwrap();
        let other = store.create_tab(&p, TabDraft::note("Other")).unwrap();
        assert_eq!(store.active_tab_id(), Some(&other));

        assert!(store.update_tab_content(&p, &t, "new text"));
        assert_eq!(store.active_tab_id(), Some(&other));
        assert_eq!(store.project(&p).unwrap().tab(&t).unwrap().content, "new text");
    }

    #[test]
    fn test_update_active_tab_visible_immediately() {
        let mut store = empty_store();
        let p = store.create_project("P");
        let t = store
            .create_tab(&p, TabDraft::code_file("main.ts"))
            .unwrap();

        store.update_tab_content(&p, &t, "let x = 1;");
        let active = store.active_tab().unwrap();
        assert_eq!(active.content, "let x = 1;");
        assert_eq!(active.kind, TabKind::Code);
        assert_eq!(active.language.as_deref(), Some("typescript"));
    }

    #[test]
    fn test_update_unknown_tab_is_noop() {
        let mut store = empty_store();
        let p = store.create_project("P");
        store.take_events();
        assert!(!store.update_tab_content(&p, &TabId::from("x"), "text"));
        assert!(!store.update_tab_content(&ProjectId::from("x"), &TabId::from("x"), "text"));
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_close_tab_neighbor_policy() {
        let mut store = empty_store();
        let p = store.create_project("P");
        let a = store.create_tab(&p, TabDraft::note("A")).unwrap();
        let b = store.create_tab(&p, TabDraft::note("B")).unwrap();
        let c = store.create_tab(&p, TabDraft::note("C")).unwrap();
        store.select_tab(&p, &b);

        assert!(store.close_tab(&p, &b));
        assert_eq!(store.active_tab_id(), Some(&a));
        let ids: Vec<&TabId> = store.project(&p).unwrap().tabs.iter().map(|t| &t.id).collect();
        assert_eq!(ids, vec![&a, &c]);

        assert!(store.close_tab(&p, &a));
        assert_eq!(store.active_tab_id(), Some(&c));

        assert!(store.close_tab(&p, &c));
        assert_eq!(store.active_tab_id(), None);
        assert_active_invariant(&store);
    }

    #[test]
    fn test_close_inactive_tab_keeps_active() {
        let mut store = empty_store();
        let p = store.create_project("P");
        let a = store.create_tab(&p, TabDraft::note("A")).unwrap();
        let b = store.create_tab(&p, TabDraft::note("B")).unwrap();

        assert!(store.close_tab(&p, &a));
        assert_eq!(store.active_tab_id(), Some(&b));
        assert!(!store.close_tab(&p, &a));
    }

    #[test]
    fn test_close_tab_in_other_project_with_same_id() {
        let storage = MemoryStore::with_value(
            "workbench-projects",
            r#"[
                {"id":"p1","name":"A","tabs":[{"id":"t","name":"1","content":"","type":"note"}]},
                {"id":"p2","name":"B","tabs":[{"id":"t","name":"2","content":"","type":"note"}]}
            ]"#,
        );
        let mut store = WorkbenchStore::open(storage, WorkbenchSettings::default());
        assert_eq!(store.active_tab_id(), Some(&TabId::from("t")));

        assert!(store.close_tab(&ProjectId::from("p2"), &TabId::from("t")));
        assert_eq!(store.current_project_id(), Some(&ProjectId::from("p1")));
        assert_eq!(store.active_tab_id(), Some(&TabId::from("t")));
    }

    #[test]
    fn test_toggle_assistant_panel() {
        let mut store = empty_store();
        let before = store.projects().to_vec();
        store.toggle_assistant_panel();
        assert!(store.is_assistant_panel_open());
        store.toggle_assistant_panel();
        assert!(!store.is_assistant_panel_open());
        assert_eq!(store.projects(), before.as_slice());
    }

    #[test]
    fn test_selection_changes_are_not_written() {
        let mut store = WorkbenchStore::open(MemoryStore::new(), WorkbenchSettings::default());
        let writes = store.storage().write_count();
        let project_id = store.current_project_id().cloned().unwrap();

        store.select_project(&project_id);
        store.toggle_assistant_panel();
        assert_eq!(store.storage().write_count(), writes);

        store.create_project("Another");
        assert_eq!(store.storage().write_count(), writes + 1);
    }

    #[test]
    fn test_failed_write_degrades_once() {
        let storage = FailingStore::new(
            MemoryStore::with_value("workbench-projects", "[]"),
            FailurePolicy::Always,
        );
        let mut store = WorkbenchStore::open(storage, WorkbenchSettings::default());

        let p = store.create_project("P");
        let t = store.create_tab(&p, TabDraft::note("N")).unwrap();

        assert!(store.persistence_status().is_degraded());
        assert_eq!(store.active_tab_id(), Some(&t));
        // Only the first failure reaches storage
        assert_eq!(store.storage().rejected_count(), 1);

        let degraded: Vec<_> = store
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, WorkbenchEvent::PersistenceDegraded { .. }))
            .collect();
        assert_eq!(degraded.len(), 1);
    }

    #[test]
    fn test_preview_follows_current_project() {
        let mut store = WorkbenchStore::open(MemoryStore::new(), WorkbenchSettings::default());
        let preview = store.preview();
        assert!(preview
            .html()
            .unwrap()
            .contains("<style>body {\n  font-family"));

        store.create_project("Empty");
        assert!(store.preview().is_empty());
    }

    #[test]
    fn test_host_bound_shortcut_is_reported() {
        let mut store = empty_store();
        store.shortcuts_mut().bind(
            services_shortcuts::KeyCombination::parse("Control+p").unwrap(),
            Action::Custom("open_palette".to_string()),
        );

        store.handle_input(&InputEvent::key(input_types::KeyEvent::pressed(
            input_types::Key::Control,
            input_types::Modifiers::CTRL,
        )));
        let fired = store.handle_input(&InputEvent::key(input_types::KeyEvent::pressed(
            input_types::Key::Character('p'),
            input_types::Modifiers::CTRL,
        )));

        assert_eq!(fired, vec![Action::Custom("open_palette".to_string())]);
        assert!(!store.is_assistant_panel_open());
    }

    #[test]
    fn test_assistant_session_uses_settings() {
        let store = empty_store();
        let session = store.start_assistant_session(services_assistant::StubResponder);
        assert_eq!(session.history()[0].text, store.settings().greeting);
    }
}
