//! Music library use-case service.
//!
//! # Invariants
//! - An album always needs an existing artist; the store enforces it.
//! - Catalogue entries keep album store order; artists are fetched one
//!   keyed select per album.

use crate::model::album::Album;
use crate::model::artist::Artist;
use crate::model::EntityId;
use crate::repo::{AlbumRepository, CrudRepository, RepoResult};
use log::info;

/// Album paired with its resolved artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub album: Album,
    /// `None` when the artist row no longer exists.
    pub artist: Option<Artist>,
}

pub struct MusicLibraryService<A, B>
where
    A: CrudRepository<Artist>,
    B: AlbumRepository,
{
    artists: A,
    albums: B,
}

impl<A, B> MusicLibraryService<A, B>
where
    A: CrudRepository<Artist>,
    B: AlbumRepository,
{
    pub fn new(artists: A, albums: B) -> Self {
        Self { artists, albums }
    }

    pub fn add_artist(&self, name: impl Into<String>) -> RepoResult<Artist> {
        let mut artist = Artist::new(name);
        let id = self.artists.save(&mut artist)?;
        info!("event=artist_add module=service status=ok id={id}");
        Ok(artist)
    }

    pub fn add_album(
        &self,
        title: impl Into<String>,
        artist_id: EntityId,
        genre: impl Into<String>,
    ) -> RepoResult<Album> {
        let mut album = Album::new(title, artist_id, genre);
        let id = self.albums.save(&mut album)?;
        info!("event=album_add module=service status=ok id={id} artist_id={artist_id}");
        Ok(album)
    }

    pub fn artists(&self) -> RepoResult<Vec<Artist>> {
        self.artists.select_all()
    }

    pub fn catalogue(&self) -> RepoResult<Vec<CatalogueEntry>> {
        self.albums
            .select_all()?
            .into_iter()
            .map(|album| -> RepoResult<CatalogueEntry> {
                let artist = self.albums.artist(&album)?;
                Ok(CatalogueEntry { album, artist })
            })
            .collect()
    }

    pub fn discography(&self, artist_id: EntityId) -> RepoResult<Vec<Album>> {
        self.albums.albums_by_artist(artist_id)
    }

    pub fn remove_album(&self, id: EntityId) -> RepoResult<()> {
        self.albums.delete(id)
    }
}
