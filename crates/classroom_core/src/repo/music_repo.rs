//! Music library mapping: `artists` and `albums`.

use super::crud::{select_sql, CrudRepository, SqlRepository};
use super::record::{sealed::AssignId, text_value, BelongsTo, Record, RowReader};
use super::RepoResult;
use crate::executor::{QueryExecutor, Row};
use crate::model::album::Album;
use crate::model::artist::Artist;
use crate::model::EntityId;
use rusqlite::types::Value;

impl AssignId for Artist {
    fn assign_id(&mut self, id: EntityId) {
        self.mark_persisted(id);
    }
}

impl Record for Artist {
    const TABLE: &'static str = "artists";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> Option<EntityId> {
        Artist::id(self)
    }

    fn values(&self) -> Vec<Value> {
        vec![text_value(self.name())]
    }

    fn from_row(row: &Row) -> RepoResult<Self> {
        let reader = RowReader::new(row, Self::TABLE);
        Ok(Self::with_id(reader.int("id")?, reader.text("name")?))
    }
}

impl AssignId for Album {
    fn assign_id(&mut self, id: EntityId) {
        self.mark_persisted(id);
    }
}

impl Record for Album {
    const TABLE: &'static str = "albums";
    const COLUMNS: &'static [&'static str] = &["title", "artist_id", "genre"];

    fn id(&self) -> Option<EntityId> {
        Album::id(self)
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text_value(self.title()),
            Value::Integer(self.artist_id()),
            text_value(self.genre()),
        ]
    }

    fn from_row(row: &Row) -> RepoResult<Self> {
        let reader = RowReader::new(row, Self::TABLE);
        Ok(Self::with_id(
            reader.int("id")?,
            reader.text("title")?,
            reader.int("artist_id")?,
            reader.text("genre")?,
        ))
    }
}

impl BelongsTo<Artist> for Album {
    fn parent_id(&self) -> Option<EntityId> {
        Some(self.artist_id())
    }
}

/// Album queries beyond plain CRUD.
pub trait AlbumRepository: CrudRepository<Album> {
    /// Albums of one artist, in id order.
    fn albums_by_artist(&self, artist_id: EntityId) -> RepoResult<Vec<Album>>;

    /// Resolves the album's artist; `None` if the artist row is gone.
    fn artist(&self, album: &Album) -> RepoResult<Option<Artist>> {
        self.resolve(album)
    }
}

impl<X: QueryExecutor + ?Sized> AlbumRepository for SqlRepository<'_, Album, X> {
    fn albums_by_artist(&self, artist_id: EntityId) -> RepoResult<Vec<Album>> {
        self.fetch(
            &format!("{} WHERE artist_id = ?1 ORDER BY id", select_sql::<Album>()),
            &[Value::Integer(artist_id)],
        )
    }
}
