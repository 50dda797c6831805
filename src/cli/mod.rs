mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;

use tracing_subscriber::EnvFilter;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::parse;

use crate::settings::Settings;

/// Environment variable holding a tracing filter, e.g. `debug`.
pub const LOG_ENV: &str = "PASSWORD_GENERATOR_LOG";

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::warn("Run with --help for usage.");
            return 1;
        }
    };

    prompts::set_quiet(flags.quiet);
    init_tracing(flags.verbose);

    let mut ctx = Context::new(flags, Settings::load());
    match ctx.run() {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Failed) => 1,
    }
}

/// Log to stderr; stdout carries only generated output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
