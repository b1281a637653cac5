//! Integration tests for the workbench store over real storage and settings

use input_types::{InputEvent, Key, KeyEvent, Modifiers};
use services_assistant::StubResponder;
use services_settings::{apply_overrides_json, create_default_registry, WorkbenchSettings};
use services_shortcuts::Action;
use services_storage::{FailingStore, FailurePolicy, FileStore, KeyValueStore, MemoryStore};
use services_workbench::{
    persistence::decode_projects, MainView, PersistenceStatus, WorkbenchEvent, WorkbenchStore,
};
use tempfile::tempdir;
use workbench_types::{ProjectId, TabDraft, TabKind};

const PROJECTS_KEY: &str = "workbench-projects";

fn open_empty() -> WorkbenchStore<MemoryStore> {
    WorkbenchStore::open(
        MemoryStore::with_value(PROJECTS_KEY, "[]"),
        WorkbenchSettings::default(),
    )
}

fn down(key: Key, modifiers: Modifiers) -> InputEvent {
    InputEvent::key(KeyEvent::pressed(key, modifiers))
}

fn up(key: Key, modifiers: Modifiers) -> InputEvent {
    InputEvent::key(KeyEvent::released(key, modifiers))
}

#[test]
fn test_demo_project_scenario() {
    let mut store = open_empty();
    let demo = store.create_project("Demo");
    let tab = store
        .create_tab(
            &demo,
            TabDraft::new("a.js", TabKind::Code, "").with_language("javascript"),
        )
        .unwrap();

    assert_eq!(store.current_project().unwrap().tabs.len(), 1);
    assert_eq!(store.active_tab().unwrap().id, tab);
    assert_eq!(
        store.main_view(),
        MainView::CodeEditor {
            language: "javascript".to_string()
        }
    );
}

#[test]
fn test_reopen_reproduces_projects() {
    let dir = tempdir().unwrap();

    let snapshot = {
        let mut store = WorkbenchStore::open(
            FileStore::open(dir.path()).unwrap(),
            WorkbenchSettings::default(),
        );
        let p = store.create_project("Persisted");
        let t = store.create_tab(&p, TabDraft::note("Plan")).unwrap();
        store.update_tab_content(&p, &t, "# Plan\n\n- ship it");
        store.snapshot()
    };

    let reopened = WorkbenchStore::open(
        FileStore::open(dir.path()).unwrap(),
        WorkbenchSettings::default(),
    );
    assert_eq!(reopened.projects(), snapshot.projects.as_slice());

    // Selection is session state: cold start picks the first project
    assert_eq!(reopened.current_project().unwrap().name, "My Project");
    assert_eq!(reopened.active_tab().unwrap().name, "index.html");
    assert!(!reopened.is_assistant_panel_open());
}

#[test]
fn test_reopen_over_same_memory_store() {
    let mut store = open_empty();
    let p = store.create_project("Kept");
    store.create_tab(&p, TabDraft::html_preview()).unwrap();
    let projects = store.projects().to_vec();

    let reopened = WorkbenchStore::open(store.into_storage(), WorkbenchSettings::default());
    assert_eq!(reopened.projects(), projects.as_slice());
    assert_eq!(reopened.current_project_id(), Some(&p));
    assert_eq!(reopened.main_view(), MainView::HtmlPreview);
}

#[test]
fn test_corrupted_blob_falls_back_to_seed() {
    for blob in [
        "not json",
        r#"{"projects": []}"#,
        r#"[{"id":"p","name":"A","tabs":[]},{"id":"p","name":"B","tabs":[]}]"#,
        r#"[{"id":"","name":"A","tabs":[]}]"#,
    ] {
        let store = WorkbenchStore::open(
            MemoryStore::with_value(PROJECTS_KEY, blob),
            WorkbenchSettings::default(),
        );
        assert_eq!(store.projects().len(), 1, "blob: {}", blob);
        assert_eq!(store.projects()[0].name, "My Project");

        // The seed replaced the unusable blob
        let written = store.storage().get(PROJECTS_KEY).unwrap().unwrap();
        assert_eq!(decode_projects(&written).unwrap(), store.projects());
    }
}

#[test]
fn test_persisted_blob_layout() {
    let mut store = open_empty();
    let p = store.create_project("Layout");
    store.create_tab(&p, TabDraft::code_file("index.html")).unwrap();
    store.create_tab(&p, TabDraft::note("Todo")).unwrap();

    let blob = store.storage().get(PROJECTS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let tabs = &value[0]["tabs"];

    assert_eq!(value[0]["name"], "Layout");
    assert_eq!(tabs[0]["type"], "code");
    assert_eq!(tabs[0]["language"], "html");
    assert_eq!(tabs[1]["type"], "note");
    assert!(tabs[1].get("language").is_none());
    assert!(value[0].get("current").is_none());
}

#[test]
fn test_storage_failure_keeps_memory_state() {
    let storage = FailingStore::new(
        MemoryStore::with_value(PROJECTS_KEY, "[]"),
        FailurePolicy::AfterWrites(1),
    );
    let mut store = WorkbenchStore::open(storage, WorkbenchSettings::default());

    let first = store.create_project("First");
    assert_eq!(store.persistence_status(), &PersistenceStatus::Durable);

    let second = store.create_project("Second");
    let tab = store.create_tab(&second, TabDraft::note("N")).unwrap();
    assert!(store.persistence_status().is_degraded());

    // Memory is authoritative for the rest of the session
    assert_eq!(store.projects().len(), 2);
    assert_eq!(store.active_tab_id(), Some(&tab));

    // Durable storage lags: it still holds the state after the first write
    let durable = store.storage().inner().get(PROJECTS_KEY).unwrap().unwrap();
    let durable = decode_projects(&durable).unwrap();
    assert_eq!(durable.len(), 1);
    assert_eq!(durable[0].id, first);
    assert_eq!(store.storage().rejected_count(), 1);
}

#[test]
fn test_unreadable_slot_is_not_overwritten() {
    let dir = tempdir().unwrap();
    // A directory where the slot file should be makes reads fail
    std::fs::create_dir(dir.path().join(PROJECTS_KEY)).unwrap();

    let mut store = WorkbenchStore::open(
        FileStore::open(dir.path()).unwrap(),
        WorkbenchSettings::default(),
    );
    assert!(store.persistence_status().is_degraded());
    assert_eq!(store.projects()[0].name, "My Project");

    store.create_project("Memory only");
    assert!(dir.path().join(PROJECTS_KEY).is_dir());

    // Hosts watching events learn about the degraded session exactly once
    let degraded = store
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, WorkbenchEvent::PersistenceDegraded { .. }))
        .count();
    assert_eq!(degraded, 1);
}

#[test]
fn test_meta_backspace_toggles_panel_once_per_press() {
    let mut store = open_empty();

    assert!(store.handle_input(&down(Key::Meta, Modifiers::META)).is_empty());
    assert_eq!(
        store.handle_input(&down(Key::Backspace, Modifiers::META)),
        vec![Action::ToggleAssistantPanel]
    );
    assert!(store.is_assistant_panel_open());

    store.handle_input(&up(Key::Backspace, Modifiers::META));
    store.handle_input(&down(Key::Backspace, Modifiers::META));
    assert!(!store.is_assistant_panel_open());

    let toggles = store
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, WorkbenchEvent::AssistantPanelToggled { .. }))
        .count();
    assert_eq!(toggles, 2);
}

#[test]
fn test_focus_loss_prevents_false_toggle() {
    let mut store = open_empty();

    store.handle_input(&down(Key::Meta, Modifiers::META));
    store.handle_input(&InputEvent::FocusLost);
    let fired = store.handle_input(&down(Key::Delete, Modifiers::none()));

    assert!(fired.is_empty());
    assert!(!store.is_assistant_panel_open());
}

#[test]
fn test_settings_overrides_reach_store() {
    let mut registry = create_default_registry();
    apply_overrides_json(
        &mut registry,
        r#"{
            "storage.projects_key": "alt-projects",
            "shortcuts.toggle_assistant": "Control+j",
            "assistant.reply_delay_ms": 10,
            "events.history_limit": 2
        }"#,
    )
    .unwrap();
    let settings = WorkbenchSettings::from_registry(&registry).unwrap();

    let mut store = WorkbenchStore::open(MemoryStore::new(), settings);
    assert!(store.storage().get("alt-projects").unwrap().is_some());
    assert!(store.storage().get(PROJECTS_KEY).unwrap().is_none());

    store.handle_input(&down(Key::Control, Modifiers::CTRL));
    store.handle_input(&down(Key::Character('j'), Modifiers::CTRL));
    assert!(store.is_assistant_panel_open());

    // Only the newest events survive the cap
    store.create_project("A");
    store.create_project("B");
    let events = store.take_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[1], WorkbenchEvent::ProjectCreated { .. }));

    let mut session = store.start_assistant_session(StubResponder);
    session.send("hi", 0).unwrap();
    assert!(session.poll(9).is_none());
    assert!(session.poll(10).is_some());
}

#[test]
fn test_preview_scenario() {
    let mut store = open_empty();
    let p = store.create_project("Site");
    let html = store
        .create_tab(&p, TabDraft::code_file("index.html"))
        .unwrap();
    let css = store.create_tab(&p, TabDraft::code_file("site.css")).unwrap();
    store.update_tab_content(&p, &html, "<html><head></head><body></body></html>");
    store.update_tab_content(&p, &css, "body{color:red}");

    let preview = store.preview();
    assert!(preview
        .html()
        .unwrap()
        .contains("<style>body{color:red}</style></head>"));

    store.close_tab(&p, &html);
    assert!(store.preview().is_empty());
}

#[test]
fn test_unknown_ids_leave_state_untouched() {
    let mut store = open_empty();
    let p = store.create_project("P");
    store.create_tab(&p, TabDraft::note("N")).unwrap();
    store.take_events();
    let before = store.snapshot();
    let ghost = ProjectId::from("ghost");

    assert!(!store.select_project(&ghost));
    assert!(store.create_tab(&ghost, TabDraft::note("x")).is_none());
    assert!(!store.close_tab(&ghost, &before.active_tab_id.clone().unwrap()));

    assert_eq!(store.snapshot(), before);
    assert!(store.take_events().is_empty());
}
