//! `classroom` command-line entry point.
//!
//! # Responsibility
//! - Parse options and dispatch to the student and music library commands.
//! - Map failures to a non-zero exit code with a message on stderr.

mod commands;

use clap::{Parser, Subcommand};
use classroom_core::{default_log_level, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "classroom")]
#[command(about = "Student records and music library over a local SQLite file")]
#[command(version)]
struct Cli {
    /// SQLite database file; created and migrated on first use
    #[arg(long, env = "CLASSROOM_DB", default_value = "classroom.sqlite3")]
    db: PathBuf,

    /// Log verbosity: trace, debug, info, warn, error
    #[arg(long, env = "CLASSROOM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, env = "CLASSROOM_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check core linkage and print its version
    Ping,

    /// Manage student records
    #[command(subcommand)]
    Students(StudentCommand),

    /// Manage artists and albums
    #[command(subcommand)]
    Albums(AlbumCommand),
}

#[derive(Subcommand)]
pub(crate) enum StudentCommand {
    /// Display all students
    List,
    /// Add a student
    Add {
        first_name: String,
        surname: String,
        age: i64,
    },
    /// Search for a student by surname
    Find { surname: String },
    /// Update a student's age, looked up by surname
    SetAge { surname: String, age: i64 },
    /// Delete a student by id
    Delete { id: i64 },
    /// Enrol the sample class into an empty roster
    Seed,
}

#[derive(Subcommand)]
pub(crate) enum AlbumCommand {
    /// Display all albums with their artist
    List,
    /// Add an artist
    AddArtist { name: String },
    /// Add an album for an existing artist
    Add {
        title: String,
        artist_id: i64,
        genre: String,
    },
    /// Delete an album by id
    Delete { id: i64 },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let result = match cli.command {
        Commands::Ping => {
            commands::ping();
            Ok(())
        }
        Commands::Students(command) => commands::students(&cli.db, command),
        Commands::Albums(command) => commands::albums(&cli.db, command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_command module=cli status=error error={err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
