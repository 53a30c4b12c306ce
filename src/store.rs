use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::root::{Root, RootSet};
use crate::util::xdg;

/// Store path types
#[derive(Debug, Clone, Copy)]
pub enum StorePath {
    /// Store root: $XDG_CONFIG_HOME/goto
    Root,
    /// Settings file: store/config.toml
    ConfigFile,
    /// Root definitions: store/roots
    Roots,
}

/// Store - the resolver's bookmark database
///
/// Rooted at $XDG_CONFIG_HOME/goto. Holds the current-root setting and one
/// TOML file per root.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store at the XDG location
    pub fn new() -> Result<Self> {
        Ok(Self::at(xdg::config_dir()?))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get path for a specific store location
    pub fn path(&self, path_type: StorePath) -> PathBuf {
        match path_type {
            StorePath::Root => self.dir.clone(),
            StorePath::ConfigFile => self.dir.join("config.toml"),
            StorePath::Roots => self.dir.join("roots"),
        }
    }

    pub fn root_file(&self, abbrev: &str) -> PathBuf {
        self.path(StorePath::Roots).join(Root::file_name(abbrev))
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load(&self.path(StorePath::ConfigFile))
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save(&self.path(StorePath::ConfigFile))
    }

    pub fn load_roots(&self) -> Result<RootSet> {
        RootSet::load(&self.path(StorePath::Roots))
    }

    pub fn save_root(&self, root: &Root) -> Result<PathBuf> {
        root.save(&self.path(StorePath::Roots))
    }

    /// Roots written by `--setup`
    pub fn default_roots(&self) -> Vec<Root> {
        vec![
            Root::new("com", "common", "")
                .with_shortcut("root", "")
                .with_shortcut("/", "/"),
            Root::new("goto", "goto", self.dir.display().to_string()).with_shortcut("roots", "roots"),
        ]
    }

    /// Write the default config and roots, overwriting existing ones
    pub fn write_defaults(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create store directory {:?}", self.dir))?;

        self.save_config(&Config::default())?;
        for root in self.default_roots() {
            let path = self.save_root(&root)?;
            tracing::debug!(path = ?path, "wrote default root");
        }
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
