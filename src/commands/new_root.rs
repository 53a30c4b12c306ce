use crate::commands::edit;
use crate::{ui, Root, Store};
use anyhow::{bail, Result};

/// Create an empty root file for `shortcut` and open it for editing
pub fn create(store: &Store, shortcut: &str, name: &str, path: Option<&str>) -> Result<Root> {
    let file = store.root_file(shortcut);
    if file.exists() || store.load_roots()?.contains(shortcut) {
        bail!("Root {shortcut} already exists");
    }

    let root = Root::new(shortcut, name, path.unwrap_or_default());
    let saved = store.save_root(&root)?;
    tracing::debug!(path = ?saved, "created root file");
    Ok(root)
}

pub fn execute(store: &Store, shortcut: &str, name: &str, path: Option<&str>) -> Result<()> {
    let root = create(store, shortcut, name, path)?;
    let file = store.root_file(&root.root);
    ui::success("Created", format!("root {} ({})", root.root, root.name));

    if edit::configured_editor().is_some() {
        edit::open_in_editor(&file)
    } else {
        ui::info(format!("Add shortcuts to {}", file.display()));
        Ok(())
    }
}
