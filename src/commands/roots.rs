use crate::{ui, Store};
use anyhow::Result;

pub fn execute(store: &Store) -> Result<()> {
    let roots = store.load_roots()?;
    if roots.is_empty() {
        ui::info("No roots found. Run 'goto --setup' or 'goto -n' to create one.");
        return Ok(());
    }

    let current = store.load_config()?.current_root;
    for root in roots.iter() {
        let path = if root.path.is_empty() {
            "(no path)"
        } else {
            root.path.as_str()
        };
        let line = format!("{} {path}", root.name);
        if root.root == current {
            ui::success(&root.root, format!("{line} (current)"));
        } else {
            ui::status(&root.root, line);
        }
    }
    Ok(())
}
