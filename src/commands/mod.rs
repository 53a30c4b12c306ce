use crate::cli::{Cli, Mode};
use crate::Store;
use anyhow::Result;
use clap::CommandFactory;
use std::io;
use std::path::Path;

mod all;
mod complete;
mod edit;
mod init;
mod jump;
mod new_root;
mod print;
mod roots;
mod set_root;
mod setup;

pub fn execute(cli: Cli) -> Result<()> {
    let mode = cli.mode();

    match mode {
        // Shell integration and help never touch the store
        Mode::Init(shell) => init::execute(shell),
        Mode::Help => {
            Cli::command().print_help()?;
            Ok(())
        }
        mode => {
            let store = Store::new()?;
            dispatch(&store, mode, cli.temp_file.as_deref())
        }
    }
}

pub fn dispatch(store: &Store, mode: Mode, temp_file: Option<&Path>) -> Result<()> {
    match mode {
        Mode::Jump { root, shortcut } => {
            jump::execute(store, root.as_deref(), &shortcut, temp_file)
        }

        Mode::Set(root) => set_root::execute(store, &root),

        Mode::Print(arg) => print::execute(store, &arg),

        Mode::Open(root) => edit::open_root(store, &root),

        Mode::All(root) => all::execute(store, root.as_deref()),

        Mode::Roots => roots::execute(store),

        Mode::Configs => edit::open_config(store),

        Mode::New {
            shortcut,
            name,
            path,
        } => new_root::execute(store, &shortcut, &name, path.as_deref()),

        Mode::Setup => setup::execute(store, &mut io::stdin().lock()).map(|_| ()),

        Mode::Complete(line) => complete::execute(store, &line),

        Mode::Init(shell) => init::execute(shell),

        Mode::Help => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
