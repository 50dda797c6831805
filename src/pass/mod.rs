//! Password and passphrase generation.

pub mod charset;
pub mod entropy;
pub mod generate;
mod options;
mod pattern;
pub mod policy;
pub mod words;

pub use options::{DEFAULT_LENGTH, GenerateOptions};
pub use pattern::Pattern;
