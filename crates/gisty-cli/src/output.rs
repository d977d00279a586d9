//! Terminal output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use colored::Colorize;
use gisty_api::{Comment, Gist};
use serde::Serialize;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print a detail line without prefix (suppressed in quiet mode).
pub fn detail(msg: &str) {
    if !is_quiet() {
        println!("{msg}");
    }
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like gist URLs.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Print a horizontal line (suppressed in quiet mode).
pub fn hr() {
    if !is_quiet() {
        println!("{}", "─".repeat(50).dimmed());
    }
}

/// Print a value as pretty JSON (always prints).
///
/// # Errors
/// Returns error if serialization fails.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary of a gist: ID, file count and description.
#[must_use]
pub fn gist_line(gist: &Gist) -> String {
    let id = gist.id.as_deref().unwrap_or("?");
    let files = match gist.files.len() {
        1 => "1 file".to_string(),
        n => format!("{n} files"),
    };
    let visibility = if gist.public == Some(false) {
        format!(" {}", "(secret)".dimmed())
    } else {
        String::new()
    };

    match gist.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => format!("{} {files}{visibility}  {description}", id.cyan()),
        None => format!("{} {files}{visibility}", id.cyan()),
    }
}

/// One line per file: name, size and language.
#[must_use]
pub fn file_lines(gist: &Gist) -> Vec<String> {
    gist.files
        .iter()
        .map(|(name, file)| {
            let mut line = format!("  {name}");
            if let Some(size) = file.size {
                line.push_str(&format!(" ({size} bytes)"));
            }
            if let Some(language) = &file.language {
                line.push_str(&format!(" [{language}]"));
            }
            line
        })
        .collect()
}

/// Header line for a comment: author and creation time.
#[must_use]
pub fn comment_header(comment: &Comment) -> String {
    let author = comment
        .user
        .as_ref()
        .and_then(|u| u.login.as_deref())
        .unwrap_or("unknown");

    match comment.created_at {
        Some(created) => format!("{} {}", author.bold(), timestamp(created).dimmed()),
        None => author.bold().to_string(),
    }
}

fn timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M UTC").to_string()
}
