//! Command handlers; each opens the database, runs one flow and prints it.

use crate::{AlbumCommand, StudentCommand};
use anyhow::{Context, Result};
use classroom_core::db::{open_db, Connection};
use classroom_core::{
    Album, Artist, CatalogueEntry, MusicLibraryService, SqlRepository, SqliteExecutor, Student,
    StudentService,
};
use std::path::Path;

pub(crate) fn ping() {
    println!("classroom_core ping={}", classroom_core::ping());
    println!("classroom_core version={}", classroom_core::core_version());
}

pub(crate) fn students(db: &Path, command: StudentCommand) -> Result<()> {
    let conn = open(db)?;
    let executor = SqliteExecutor::try_new(&conn).context("database is not ready")?;
    let service = StudentService::new(SqlRepository::<Student, _>::new(&executor));

    match command {
        StudentCommand::List => {
            for student in service.roster().context("failed to list students")? {
                print_student(&student);
            }
        }
        StudentCommand::Add {
            first_name,
            surname,
            age,
        } => {
            let student = service
                .enroll(first_name, surname, age)
                .context("failed to add student")?;
            print_student(&student);
        }
        StudentCommand::Find { surname } => {
            match service.lookup(&surname).context("failed to search students")? {
                Some(student) => print_student(&student),
                None => println!("Student not found"),
            }
        }
        StudentCommand::SetAge { surname, age } => {
            match service
                .change_age(&surname, age)
                .context("failed to update student")?
            {
                Some(student) => println!("{} updated!", student.full_name()),
                None => println!("Student not found"),
            }
        }
        StudentCommand::Delete { id } => {
            service.remove(id).context("failed to delete student")?;
        }
        StudentCommand::Seed => {
            let seeded = service.seed_sample().context("failed to seed students")?;
            if seeded.is_empty() {
                println!("Students already enrolled; nothing seeded");
            }
            for student in &seeded {
                print_student(student);
            }
        }
    }

    Ok(())
}

pub(crate) fn albums(db: &Path, command: AlbumCommand) -> Result<()> {
    let conn = open(db)?;
    let executor = SqliteExecutor::try_new(&conn).context("database is not ready")?;
    let service = MusicLibraryService::new(
        SqlRepository::<Artist, _>::new(&executor),
        SqlRepository::<Album, _>::new(&executor),
    );

    match command {
        AlbumCommand::List => {
            for entry in service.catalogue().context("failed to list albums")? {
                print_catalogue_entry(&entry);
            }
        }
        AlbumCommand::AddArtist { name } => {
            let artist = service.add_artist(name).context("failed to add artist")?;
            println!(
                "Artist {}: {}",
                artist.id().unwrap_or_default(),
                artist.name()
            );
        }
        AlbumCommand::Add {
            title,
            artist_id,
            genre,
        } => {
            let album = service
                .add_album(title, artist_id, genre)
                .with_context(|| format!("failed to add album for artist {artist_id}"))?;
            println!(
                "Album {}: {} ({})",
                album.id().unwrap_or_default(),
                album.title(),
                album.genre()
            );
        }
        AlbumCommand::Delete { id } => {
            service.remove_album(id).context("failed to delete album")?;
        }
    }

    Ok(())
}

fn open(db: &Path) -> Result<Connection> {
    open_db(db).with_context(|| format!("failed to open database `{}`", db.display()))
}

fn print_student(student: &Student) {
    println!(
        "Student {}: {} {}, {}",
        student.id().unwrap_or_default(),
        student.first_name(),
        student.surname(),
        student.age()
    );
}

fn print_catalogue_entry(entry: &CatalogueEntry) {
    let artist = entry
        .artist
        .as_ref()
        .map_or("unknown artist", |artist| artist.name());
    println!(
        "Album {}: {} by {} ({})",
        entry.album.id().unwrap_or_default(),
        entry.album.title(),
        artist,
        entry.album.genre()
    );
}
