//! User-facing messages on stderr, and the quiet/tty state that gates them.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::Stylize;

/// Set by `-q`; silences warnings and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable or disable quiet mode.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled.
pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Skip questions when quiet or when nobody is there to answer.
pub fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", msg.yellow());
    }
}

/// Red, always shown.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn override_hint() {
    warn("Pass -i/--ignore-security-recommendations to generate anyway.");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        let noun = if count == 1 { "password" } else { "passwords" };
        eprintln!("*** {count} {noun} copied to clipboard ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Falls back silently when quiet or non-interactive.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}
