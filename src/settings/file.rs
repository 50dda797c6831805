//! Settings file: one line, `length,memorable_length,words,number`.
//!
//! Read only. A missing file means defaults; malformed fields keep theirs.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::Settings;
use crate::cli::prompts;

pub fn load(settings: &mut Settings) {
    let path = get_path();
    match fs::read_to_string(&path) {
        Ok(contents) => apply(settings, &contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file");
        }
        Err(e) => prompts::warn(&format!("Failed to read settings: {e}")),
    }
}

fn apply(settings: &mut Settings, contents: &str) {
    let line = contents.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return;
    }

    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        prompts::warn(&format!(
            "Ignoring settings file: expected 4 fields, found {}",
            parts.len()
        ));
        return;
    }

    settings.length = parts[0].parse().unwrap_or(settings.length);
    settings.memorable_length = parts[1].parse().unwrap_or(settings.memorable_length);
    settings.words = parts[2]
        .parse()
        .ok()
        .filter(|&w| w > 0)
        .unwrap_or(settings.words);
    settings.number = parts[3]
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(settings.number);
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/password-generator/settings")
}
