//! Student record.
//!
//! # Responsibility
//! - Carry the `students` table attributes.
//! - Provide the classroom lab helpers (`talk`, favourite language).

use super::EntityId;
use serde::{Deserialize, Serialize};

/// One student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: Option<EntityId>,
    first_name: String,
    surname: String,
    /// Whole years. Not range checked.
    age: i64,
}

impl Student {
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>, age: i64) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            surname: surname.into(),
            age,
        }
    }

    pub fn with_id(
        id: EntityId,
        first_name: impl Into<String>,
        surname: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(first_name, surname, age)
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    /// `"<first_name> <surname>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.surname = surname.into();
    }

    pub fn set_age(&mut self, age: i64) {
        self.age = age;
    }

    pub fn talk(&self) -> &'static str {
        "I can talk"
    }

    pub fn say_favourite_language(&self, language: &str) -> String {
        format!("I love {language}")
    }

    pub(crate) fn mark_persisted(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
