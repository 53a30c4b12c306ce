//! Shell integration.
//!
//! The wrapper function runs `goto-launch`, which prints at most one line on
//! stdout: the directory to change into. The function performs the `cd`
//! itself so it happens in the interactive shell's own process.

use clap::ValueEnum;

use crate::launcher::RESOLVER_BIN;

/// Name of the launcher binary
pub const LAUNCHER_BIN: &str = "goto-launch";

/// Shell type for integration output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Zsh,
    Bash,
    Fish,
}

impl Shell {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "zsh" => Some(Shell::Zsh),
            "bash" => Some(Shell::Bash),
            "fish" => Some(Shell::Fish),
            _ => None,
        }
    }

    /// Detect the shell from a `$SHELL`-style path such as `/bin/zsh`
    pub fn from_path(path: &str) -> Option<Self> {
        path.rsplit('/').next().and_then(Self::from_name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shell::Zsh => "zsh",
            Shell::Bash => "bash",
            Shell::Fish => "fish",
        }
    }

    /// Line to add to the shell's rc file
    pub fn init_line(self) -> String {
        match self {
            Shell::Zsh | Shell::Bash => {
                format!("eval \"$(command {RESOLVER_BIN} --init {})\"", self.as_str())
            }
            Shell::Fish => format!("command {RESOLVER_BIN} --init fish | source"),
        }
    }

    /// Rc file the init line usually lives in, relative to `$HOME`
    pub fn rc_file(self) -> &'static str {
        match self {
            Shell::Zsh => ".zshrc",
            Shell::Bash => ".bashrc",
            Shell::Fish => ".config/fish/config.fish",
        }
    }
}

/// Render the wrapper function for `shell`
pub fn function_for(shell: Shell) -> String {
    match shell {
        Shell::Bash => format!("{}{}", posix_function(), bash_completion()),
        Shell::Zsh => format!("{}{}", posix_function(), zsh_completion()),
        Shell::Fish => fish_function(),
    }
}

fn posix_function() -> String {
    format!(
        r#"# {RESOLVER_BIN}: bookmark-based cd
{RESOLVER_BIN}() {{
    local dest
    dest="$(command {LAUNCHER_BIN} "$@")" || return $?
    if [ -n "$dest" ] && [ -d "$dest" ]; then
        cd -- "$dest" || return
    fi
}}
"#
    )
}

fn bash_completion() -> String {
    format!(
        r#"_{RESOLVER_BIN}_complete() {{
    local IFS=$'\n'
    COMPREPLY=($(command {RESOLVER_BIN} --complete "${{COMP_LINE}}" 2>/dev/null))
}}
complete -F _{RESOLVER_BIN}_complete {RESOLVER_BIN}
"#
    )
}

fn zsh_completion() -> String {
    format!(
        r#"_{RESOLVER_BIN}_complete() {{
    local -a candidates
    candidates=("${{(@f)$(command {RESOLVER_BIN} --complete "${{BUFFER}}" 2>/dev/null)}}")
    compadd -a candidates
}}
if (( $+functions[compdef] )); then
    compdef _{RESOLVER_BIN}_complete {RESOLVER_BIN}
fi
"#
    )
}

fn fish_function() -> String {
    format!(
        r#"# {RESOLVER_BIN}: bookmark-based cd
function {RESOLVER_BIN}
    set -l dest (command {LAUNCHER_BIN} $argv)
    or return $status
    if test -n "$dest"; and test -d "$dest"
        cd -- $dest
    end
end
complete -c {RESOLVER_BIN} -f -a '(command {RESOLVER_BIN} --complete (commandline) 2>/dev/null)'
"#
    )
}
