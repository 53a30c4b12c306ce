use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::shell::Shell;

/// goto - navigate the file system with bookmarks
///
/// Shortcuts are grouped into roots. Each root has a base directory and a
/// table of shortcuts relative to it; a root may also search the shortcuts
/// of other ("default") roots.
///
///   goto SHORTCUT          expand SHORTCUT in the current root
///   goto ROOT SHORTCUT     expand SHORTCUT in ROOT
///   goto -s ROOT           make ROOT the current root
///
/// Root definitions live in $XDG_CONFIG_HOME/goto/roots/<root>.toml.
/// Run `goto --setup` once to create the defaults.
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(group(ArgGroup::new("mode").multiple(false)))]
pub struct Cli {
    /// Set the current root
    #[arg(short, long, value_name = "ROOT", group = "mode")]
    pub set: Option<String>,

    /// Print information: all (default), configs, roots, or a root name
    #[arg(short, long = "print", group = "mode")]
    pub print: bool,

    /// Open the definition file for a root in $VISUAL
    #[arg(short, long, value_name = "ROOT", group = "mode")]
    pub open: Option<String>,

    /// Show every shortcut available in a root, including its defaults
    #[arg(short, long, group = "mode")]
    pub all: bool,

    /// List all roots
    #[arg(short, long, group = "mode")]
    pub roots: bool,

    /// Open the config file in $VISUAL
    #[arg(short, long, visible_alias = "config", group = "mode")]
    pub configs: bool,

    /// Create a new root; FIRST is used as its path
    #[arg(short, long, num_args = 2, value_names = ["SHORTCUT", "NAME"], group = "mode")]
    pub new: Option<Vec<String>>,

    /// Create the default config files
    #[arg(long, group = "mode")]
    pub setup: bool,

    /// Print completion candidates for a command line
    #[arg(long, value_name = "LINE", allow_hyphen_values = true, group = "mode")]
    pub complete: Option<String>,

    /// Print the shell integration function
    #[arg(long, value_name = "SHELL", value_enum, group = "mode")]
    pub init: Option<Shell>,

    /// Write the resolved path to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub temp_file: Option<PathBuf>,

    /// Shortcut, or root when SECOND is given
    #[arg(value_name = "FIRST")]
    pub first: Option<String>,

    /// Shortcut within the root named by FIRST
    #[arg(value_name = "SECOND")]
    pub second: Option<String>,
}

/// The single operation selected by the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Jump {
        root: Option<String>,
        shortcut: String,
    },
    Set(String),
    Print(String),
    Open(String),
    All(Option<String>),
    Roots,
    Configs,
    New {
        shortcut: String,
        name: String,
        path: Option<String>,
    },
    Setup,
    Complete(String),
    Init(Shell),
    Help,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if let Some(root) = &self.set {
            return Mode::Set(root.clone());
        }
        if self.print {
            return Mode::Print(self.first.clone().unwrap_or_else(|| "all".to_string()));
        }
        if let Some(root) = &self.open {
            return Mode::Open(root.clone());
        }
        if self.all {
            return Mode::All(self.first.clone());
        }
        if self.roots {
            return Mode::Roots;
        }
        if self.configs {
            return Mode::Configs;
        }
        if let Some([shortcut, name]) = self.new.as_deref() {
            return Mode::New {
                shortcut: shortcut.clone(),
                name: name.clone(),
                path: self.first.clone(),
            };
        }
        if self.setup {
            return Mode::Setup;
        }
        if let Some(line) = &self.complete {
            return Mode::Complete(line.clone());
        }
        if let Some(shell) = self.init {
            return Mode::Init(shell);
        }

        match (&self.first, &self.second) {
            (Some(root), Some(shortcut)) => Mode::Jump {
                root: Some(root.clone()),
                shortcut: shortcut.clone(),
            },
            (Some(shortcut), None) => Mode::Jump {
                root: None,
                shortcut: shortcut.clone(),
            },
            _ => Mode::Help,
        }
    }
}
