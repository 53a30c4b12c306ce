//! Decides which directory the calling shell should change into.
//!
//! A child process cannot change its parent's working directory, so the
//! launcher only *decides*: it runs the resolver, reads the handoff file and
//! returns a directory. The shell function from [`crate::shell`] performs the
//! actual `cd` in the caller's own process.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::handoff::{HandoffError, HandoffFile};
use crate::util::xdg;

/// Name of the resolver binary
pub const RESOLVER_BIN: &str = "goto";

/// Option used to tell the resolver where to write its answer
pub const TEMP_FILE_FLAG: &str = "--temp-file";

/// Environment variable that overrides the resolver location
pub const RESOLVER_ENV: &str = "GOTO_RESOLVER";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Handoff(#[from] HandoffError),

    #[error("Failed to run resolver {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Resolver {} failed{}", .program.display(), exit_suffix(.code))]
    ResolverFailed { program: PathBuf, code: Option<i32> },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Launcher {
    program: PathBuf,
    leading_args: Vec<OsString>,
    home: Option<PathBuf>,
}

impl Launcher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            home: xdg::home_dir().ok(),
        }
    }

    /// Locate the resolver: `$GOTO_RESOLVER`, then a `goto` binary next to
    /// the running executable, then `goto` on `PATH`.
    pub fn from_env() -> Self {
        if let Some(program) = env::var_os(RESOLVER_ENV).filter(|value| !value.is_empty()) {
            return Self::new(program);
        }

        let sibling = env::current_exe().ok().and_then(|exe| {
            let candidate = exe
                .parent()?
                .join(format!("{RESOLVER_BIN}{}", env::consts::EXE_SUFFIX));
            candidate.is_file().then_some(candidate)
        });

        Self::new(sibling.unwrap_or_else(|| PathBuf::from(RESOLVER_BIN)))
    }

    /// Add an argument placed before `--temp-file`
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.leading_args.push(arg.into());
        self
    }

    /// Override the directory `~` expands to
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the resolver with `args` and return the directory to change into.
    ///
    /// `Ok(None)` means the resolver succeeded without naming an existing
    /// directory. The handoff file never outlives this call.
    pub fn resolve<I, S>(&self, args: I) -> Result<Option<PathBuf>, LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let handoff = HandoffFile::create()?;

        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .arg(TEMP_FILE_FLAG)
            .arg(handoff.path())
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit());

        tracing::debug!(program = ?self.program, handoff = ?handoff.path(), "running resolver");
        let status = command.status().map_err(|source| LaunchError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        let candidate = handoff.take()?;

        if !status.success() {
            return Err(LaunchError::ResolverFailed {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        let Some(candidate) = candidate else {
            tracing::debug!("resolver returned no path");
            return Ok(None);
        };

        let expanded = expand_home(&candidate, self.home.as_deref());
        let destination = existing_dir(&expanded);
        if destination.is_none() {
            tracing::debug!(path = ?expanded, "resolved path is not a directory");
        }
        Ok(destination)
    }
}

/// Replace a leading `~` (alone or followed by `/`) with `home`.
///
/// `~user` forms are returned unchanged.
pub fn expand_home(candidate: &str, home: Option<&Path>) -> PathBuf {
    let expanded = shellexpand::tilde_with_context(candidate, || home.and_then(Path::to_str));
    PathBuf::from(expanded.into_owned())
}

/// `Some(path)` when `path` names an existing directory
pub fn existing_dir(path: &Path) -> Option<PathBuf> {
    if !path.as_os_str().is_empty() && path.is_dir() {
        Some(path.to_path_buf())
    } else {
        None
    }
}
