use crate::commands::print::format_shortcuts;
use crate::Store;
use anyhow::Result;

pub fn execute(store: &Store, root: Option<&str>) -> Result<()> {
    let roots = store.load_roots()?;
    let root = match root {
        Some(root) => root.to_string(),
        None => store.load_config()?.current_root,
    };

    let shortcuts = roots.merged_shortcuts(&root)?;
    print!("{}", format_shortcuts(&shortcuts)?);
    Ok(())
}
