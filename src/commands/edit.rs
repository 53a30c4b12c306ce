use crate::{ui, Config, Store, StorePath};
use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use std::process::Command;

/// Editor command line from `$VISUAL`, falling back to `$EDITOR`
pub fn editor_command(visual: Option<String>, editor: Option<String>) -> Option<Vec<String>> {
    [visual, editor]
        .into_iter()
        .flatten()
        .map(|value| {
            value
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .find(|words| !words.is_empty())
}

pub fn configured_editor() -> Option<Vec<String>> {
    editor_command(env::var("VISUAL").ok(), env::var("EDITOR").ok())
}

pub fn open_in_editor(path: &Path) -> Result<()> {
    let Some(command) = configured_editor() else {
        bail!("No editor configured; set $VISUAL or $EDITOR to edit {:?}", path);
    };
    let (program, args) = command
        .split_first()
        .context("Editor command is empty")?;

    tracing::debug!(editor = %program, path = ?path, "opening editor");
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to start editor '{program}'"))?;

    if !status.success() {
        bail!("Editor '{program}' exited with {status}");
    }
    Ok(())
}

pub fn open_root(store: &Store, root: &str) -> Result<()> {
    let roots = store.load_roots()?;
    let path = roots
        .get(root)
        .and_then(|root| root.source.clone())
        .unwrap_or_else(|| store.root_file(root));

    if !path.is_file() {
        bail!("Error opening file: {}", path.display());
    }

    ui::status("Editing", path.display());
    open_in_editor(&path)
}

pub fn open_config(store: &Store) -> Result<()> {
    let path = store.path(StorePath::ConfigFile);
    if !path.exists() {
        Config::default().save(&path)?;
    }

    ui::status("Editing", path.display());
    open_in_editor(&path)
}
