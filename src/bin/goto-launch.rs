//! Runs the resolver and prints the directory the calling shell should
//! change into. Meant to be called from the `goto` shell function.

use std::env;
use std::process::ExitCode;

use goto::{logging, ui, LaunchError, Launcher};

fn main() -> ExitCode {
    logging::init();

    let launcher = Launcher::from_env();
    match launcher.resolve(env::args_os().skip(1)) {
        Ok(Some(destination)) => {
            println!("{}", destination.display());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err @ LaunchError::ResolverFailed { code, .. }) => {
            ui::error(&err);
            let code = code
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(1);
            ExitCode::from(code)
        }
        Err(err) => {
            ui::error(&err);
            ExitCode::FAILURE
        }
    }
}
