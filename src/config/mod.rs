#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;

#[cfg(feature = "cli")]
pub use cli::{CliArgs, EditorCommand};
pub use profile::ProfileConfig;
