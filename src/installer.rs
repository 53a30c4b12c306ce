//! Links the launcher and resolver binaries into a bin directory.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::launcher::RESOLVER_BIN;
use crate::shell::LAUNCHER_BIN;

/// Flag passed to the freshly linked launcher after installation
pub const SETUP_FLAG: &str = "--setup";

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Missing {}; expected it next to the installer", .0.display())]
    MissingSource(PathBuf),

    #[error("Failed to locate the installer executable: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("Failed to create install directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove existing {path:?}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create symlink {link:?} -> {target:?}: {source}")]
    Link {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to run {path:?} --setup: {source}")]
    Setup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Created,
    Replaced,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedBinary {
    pub link: PathBuf,
    pub target: PathBuf,
    pub outcome: LinkOutcome,
}

#[derive(Debug, Clone)]
pub struct Installer {
    source_dir: PathBuf,
    dest_dir: PathBuf,
}

fn binary_name(name: &str) -> String {
    format!("{name}{}", env::consts::EXE_SUFFIX)
}

impl Installer {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
        }
    }

    /// Install from the directory holding the running executable
    pub fn from_current_exe(dest_dir: impl Into<PathBuf>) -> Result<Self, InstallError> {
        let exe = env::current_exe().map_err(InstallError::CurrentExe)?;
        let source_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::new(source_dir, dest_dir))
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Source binaries in install order: launcher, then resolver
    pub fn sources(&self) -> [PathBuf; 2] {
        [
            self.source_dir.join(binary_name(LAUNCHER_BIN)),
            self.source_dir.join(binary_name(RESOLVER_BIN)),
        ]
    }

    pub fn launcher_link(&self) -> PathBuf {
        self.dest_dir.join(binary_name(LAUNCHER_BIN))
    }

    /// Fail before touching the filesystem if a source binary is missing
    pub fn check_sources(&self) -> Result<(), InstallError> {
        for source in self.sources() {
            if !source.is_file() {
                return Err(InstallError::MissingSource(source));
            }
        }
        Ok(())
    }

    /// Create the destination directory and link both binaries into it
    pub fn install(&self) -> Result<Vec<LinkedBinary>, InstallError> {
        self.check_sources()?;

        fs::create_dir_all(&self.dest_dir).map_err(|source| InstallError::CreateDir {
            path: self.dest_dir.clone(),
            source,
        })?;

        self.sources()
            .into_iter()
            .map(|source| -> Result<LinkedBinary, InstallError> {
                let name = source.file_name().map(|name| name.to_os_string()).unwrap_or_default();
                let link = self.dest_dir.join(name);
                let outcome = link_binary(&source, &link)?;
                Ok(LinkedBinary {
                    link,
                    target: source,
                    outcome,
                })
            })
            .collect()
    }

    /// Run the linked launcher with `--setup`
    pub fn run_setup(&self) -> Result<ExitStatus, InstallError> {
        let launcher = self.launcher_link();
        tracing::debug!(path = ?launcher, "running setup");
        Command::new(&launcher)
            .arg(SETUP_FLAG)
            .status()
            .map_err(|source| InstallError::Setup {
                path: launcher,
                source,
            })
    }

    /// Whether `dest_dir` appears in the given `PATH` value
    pub fn dest_on_path(&self, path_var: Option<&OsStr>) -> bool {
        path_var
            .map(|value| env::split_paths(value).any(|entry| entry == self.dest_dir))
            .unwrap_or(false)
    }
}

/// Point `link` at `target`, replacing whatever was there unless it already
/// points at `target`.
fn link_binary(target: &Path, link: &Path) -> Result<LinkOutcome, InstallError> {
    let mut outcome = LinkOutcome::Created;

    if link.symlink_metadata().is_ok() {
        if fs::read_link(link).map(|existing| existing == target).unwrap_or(false) {
            tracing::debug!(link = ?link, "symlink already up to date");
            return Ok(LinkOutcome::Unchanged);
        }

        // Installing into the source directory: the link path is the binary itself
        if same_file(target, link) {
            tracing::debug!(link = ?link, "binary already in place");
            return Ok(LinkOutcome::Unchanged);
        }

        fs::remove_file(link).map_err(|source| InstallError::Remove {
            path: link.to_path_buf(),
            source,
        })?;
        outcome = LinkOutcome::Replaced;
    }

    symlink(target, link).map_err(|source| InstallError::Link {
        link: link.to_path_buf(),
        target: target.to_path_buf(),
        source,
    })?;
    tracing::debug!(link = ?link, target = ?target, "created symlink");

    Ok(outcome)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
