//! CLI context: flags and settings resolved into generation requests.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use password_generator::{Error, GenerateOptions, Pattern, generate_with_options};
use tracing::debug;
use zeroize::Zeroize;

use super::{CliFlags, help, prompts};
use crate::settings::Settings;

/// Why the run stopped early.
#[derive(Debug, PartialEq)]
pub enum Exit {
    /// Nothing left to do, e.g. after `--help`.
    Done,
    /// An error was already reported to the user.
    Failed,
}

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags, settings: Settings) -> Self {
        Self { settings, flags }
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        let options = self.options()?;
        let count = self.flags.number.unwrap_or(self.settings.number).max(1);
        debug!(count, clipboard = self.flags.clipboard, "generating");

        let clipboard = if self.flags.clipboard {
            self.open_clipboard()?
        } else {
            None
        };
        match clipboard {
            Some(ctx) => to_clipboard(ctx, &options, count),
            None => to_stdout(&options, count),
        }
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            help::print(&self.settings);
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("password-generator {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// Build the library request from flags, falling back to settings.
    pub fn options(&self) -> Result<GenerateOptions, Exit> {
        let memorable = self.flags.is_memorable();
        let mut options = GenerateOptions::default()
            .memorable(memorable)
            .ignore_security_recommendations(self.flags.ignore_security);

        if let Some(ref expr) = self.flags.pattern {
            options = options.pattern(Pattern::regex(expr).map_err(report)?);
        }
        if let Some(ref seed) = self.flags.seed {
            options = options.with_seed(seed);
        }

        if self.flags.wants_words() {
            options = options.words(self.flags.words.unwrap_or(self.settings.words));
        }
        options.length = match self.flags.length {
            Some(len) => len,
            None if memorable => self.settings.memorable_length,
            None => self.settings.length,
        };

        Ok(options)
    }

    fn open_clipboard(&self) -> Result<Option<ClipboardContext>, Exit> {
        match ClipboardContext::new() {
            Ok(ctx) => Ok(Some(ctx)),
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    Ok(None)
                } else {
                    Err(Exit::Done)
                }
            }
        }
    }
}

fn to_stdout(options: &GenerateOptions, count: usize) -> Result<(), Exit> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for _ in 0..count {
        let mut pass = generate_with_options(options).map_err(report)?;
        pass.push('\n');
        let written = out.write_all(pass.as_bytes());
        pass.zeroize();
        if let Err(e) = written {
            prompts::error(&format!("Failed to write output: {e}"));
            return Err(Exit::Failed);
        }
    }
    let _ = out.flush();
    Ok(())
}

fn to_clipboard(
    mut ctx: ClipboardContext,
    options: &GenerateOptions,
    count: usize,
) -> Result<(), Exit> {
    let mut passwords = String::new();
    for i in 0..count {
        let mut pass = generate_with_options(options).map_err(|e| {
            passwords.zeroize();
            report(e)
        })?;
        if i > 0 {
            passwords.push('\n');
        }
        passwords.push_str(&pass);
        pass.zeroize();
    }

    let result = ctx.set_contents(passwords.clone());
    passwords.zeroize();
    match result {
        Ok(()) => {
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied(count);
            Ok(())
        }
        Err(e) => {
            prompts::clipboard_error(&e.to_string());
            Err(Exit::Failed)
        }
    }
}

/// Print a library error and map it to a failed exit.
fn report(err: Error) -> Exit {
    prompts::error(&err.to_string());
    if matches!(err, Error::Insecure(_)) {
        prompts::override_hint();
    }
    Exit::Failed
}
