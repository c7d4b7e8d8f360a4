// Adapters layer: concrete collaborators for hosts that do not bring their
// own. The in-memory host backs both test tiers; the file store and terminal
// dialogs back the CLI binary.

pub mod file;
pub mod locales;
pub mod memory;
#[cfg(feature = "cli")]
pub mod prompt;
