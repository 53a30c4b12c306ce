use crate::{ui, Store};
use anyhow::Result;

pub fn execute(store: &Store, new_root: &str) -> Result<()> {
    let roots = store.load_roots()?;
    let mut config = store.load_config()?;

    let Some(root) = roots.get(new_root) else {
        let current = roots
            .get(&config.current_root)
            .map(|root| root.name.clone())
            .unwrap_or_else(|| config.current_root.clone());
        anyhow::bail!("{new_root} not recognized, current root is still {current}");
    };

    config.current_root = new_root.to_string();
    store.save_config(&config)?;
    ui::success("Root", format!("New root set to {}", root.name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Root;
    use tempfile::TempDir;

    #[test]
    fn test_set_known_root() {
        let temp = TempDir::new().unwrap();
        let store = Store::at(temp.path());
        store.write_defaults().unwrap();

        execute(&store, "com").unwrap();
        assert_eq!(store.load_config().unwrap().current_root, "com");
    }

    #[test]
    fn test_set_unknown_root_keeps_config() {
        let temp = TempDir::new().unwrap();
        let store = Store::at(temp.path());
        store.write_defaults().unwrap();
        store.save_root(&Root::new("web", "website", "/w")).unwrap();

        let err = execute(&store, "nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "nope not recognized, current root is still goto"
        );
        assert_eq!(store.load_config().unwrap().current_root, "goto");
    }
}
