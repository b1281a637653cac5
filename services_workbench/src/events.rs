//! Store events
//!
//! Every applied mutation queues one event. The presentation layer drains the
//! queue to decide what to re-render; no-ops queue nothing.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use workbench_types::{ProjectId, TabId};

/// Something that changed in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkbenchEvent {
    ProjectCreated {
        project_id: ProjectId,
    },
    ProjectSelected {
        project_id: ProjectId,
    },
    TabCreated {
        project_id: ProjectId,
        tab_id: TabId,
    },
    TabSelected {
        project_id: ProjectId,
        tab_id: TabId,
    },
    TabContentUpdated {
        project_id: ProjectId,
        tab_id: TabId,
    },
    TabClosed {
        project_id: ProjectId,
        tab_id: TabId,
        /// Replacement active tab when the closed tab was active
        next_active: Option<TabId>,
    },
    AssistantPanelToggled {
        open: bool,
    },
    /// Durable storage refused a write; the session continues in memory
    PersistenceDegraded {
        reason: String,
    },
}

/// Bounded FIFO of events; the oldest are dropped first
#[derive(Debug, Clone)]
pub(crate) struct EventLog {
    events: VecDeque<WorkbenchEvent>,
    limit: usize,
    dropped: usize,
}

impl EventLog {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            events: VecDeque::new(),
            limit: limit.max(1),
            dropped: 0,
        }
    }

    pub(crate) fn push(&mut self, event: WorkbenchEvent) {
        if self.events.len() == self.limit {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<WorkbenchEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn dropped(&self) -> usize {
        self.dropped
    }
}
