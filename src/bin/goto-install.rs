use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use goto::installer::LinkedBinary;
use goto::{logging, ui, xdg, Installer, LinkOutcome, Shell};

/// Link goto and goto-launch into a bin directory and run first-time setup
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Install directory [default: ~/.local/bin]
    #[arg(value_name = "DEST", env = "GOTO_INSTALL_DIR")]
    dest: Option<PathBuf>,

    /// Skip running `goto-launch --setup`
    #[arg(long)]
    no_setup: bool,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let dest = match args.dest {
        Some(dest) => dest,
        None => xdg::bin_dir()?,
    };

    let installer = Installer::from_current_exe(&dest)?;
    for entry in &installer.install()? {
        report(entry);
    }

    if !args.no_setup {
        let status = installer.run_setup()?;
        if !status.success() {
            ui::warn(format!("Setup exited with {status}"));
        }
    }

    if !installer.dest_on_path(env::var_os("PATH").as_deref()) {
        ui::warn(format!("{} is not on your PATH", dest.display()));
    }

    let shell = env::var("SHELL")
        .ok()
        .and_then(|path| Shell::from_path(&path))
        .unwrap_or(Shell::Bash);
    ui::info(format!(
        "Add this line to {}:\n{}",
        shell.rc_file(),
        shell.init_line()
    ));

    Ok(())
}

fn report(entry: &LinkedBinary) {
    let label = match entry.outcome {
        LinkOutcome::Created => "Linked",
        LinkOutcome::Replaced => "Replaced",
        LinkOutcome::Unchanged => "Unchanged",
    };
    ui::success(
        label,
        format!("{} -> {}", entry.link.display(), entry.target.display()),
    );
}
