//! Terminal rendering helpers.

mod output;

pub use output::*;
