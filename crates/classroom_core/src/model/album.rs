//! Album record from the music library.
//!
//! # Invariants
//! - `artist_id` always names an artist; the store rejects dangling values.
//! - Resolving the artist is a separate fetch (`AlbumRepository::artist`).

use super::EntityId;
use serde::{Deserialize, Serialize};

/// One album row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    id: Option<EntityId>,
    title: String,
    artist_id: EntityId,
    genre: String,
}

impl Album {
    /// Creates a transient album; `id` is assigned on first save.
    pub fn new(title: impl Into<String>, artist_id: EntityId, genre: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist_id,
            genre: genre.into(),
        }
    }

    /// Rebuilds an album that already exists in the store.
    pub fn with_id(
        id: EntityId,
        title: impl Into<String>,
        artist_id: EntityId,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(title, artist_id, genre)
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist_id(&self) -> EntityId {
        self.artist_id
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_artist_id(&mut self, artist_id: EntityId) {
        self.artist_id = artist_id;
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    pub(crate) fn mark_persisted(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
