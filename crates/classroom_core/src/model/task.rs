//! To-do task record.
//!
//! # Invariants
//! - `user_id` is optional; an unowned task is valid.
//! - `done` starts as `false`.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// One task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<EntityId>,
    title: String,
    description: Option<String>,
    done: bool,
    user_id: Option<EntityId>,
}

impl Task {
    /// Creates a transient, open, unowned task.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description,
            done: false,
            user_id: None,
        }
    }

    /// Rebuilds a stored task from all of its columns.
    pub fn with_id(
        id: EntityId,
        title: impl Into<String>,
        description: Option<String>,
        done: bool,
        user_id: Option<EntityId>,
    ) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            description,
            done,
            user_id,
        }
    }

    /// Builder-style owner assignment for freshly created tasks.
    pub fn owned_by(mut self, user_id: EntityId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn user_id(&self) -> Option<EntityId> {
        self.user_id
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn set_user_id(&mut self, user_id: Option<EntityId>) {
        self.user_id = user_id;
    }

    pub(crate) fn mark_persisted(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
