// Public API
pub mod cli;
pub mod commands;
pub mod handoff;
pub mod installer;
pub mod launcher;
pub mod logging;
pub mod shell;
pub mod ui;

// Core domain types
mod config;
mod root;
mod store;
mod util;

// Re-export main types
pub use config::Config;
pub use handoff::{HandoffError, HandoffFile};
pub use installer::{InstallError, Installer, LinkOutcome};
pub use launcher::{LaunchError, Launcher};
pub use root::{LookupError, Root, RootSet, Shortcuts};
pub use shell::Shell;
pub use store::{Store, StorePath};
pub use util::xdg;
