use crate::handoff;
use crate::Store;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Expand a shortcut into a full path.
///
/// `root` defaults to the current root from the config file.
pub fn resolve(store: &Store, root: Option<&str>, shortcut: &str) -> Result<PathBuf> {
    let roots = store.load_roots()?;
    let root = match root {
        Some(root) => root.to_string(),
        None => store.load_config()?.current_root,
    };

    Ok(roots.resolve(&root, shortcut)?)
}

pub fn execute(
    store: &Store,
    root: Option<&str>,
    shortcut: &str,
    temp_file: Option<&Path>,
) -> Result<()> {
    let destination = resolve(store, root, shortcut)?;
    tracing::debug!(shortcut = %shortcut, destination = ?destination, "resolved shortcut");

    if destination.to_string_lossy().contains(['\n', '\r']) {
        bail!("Refusing path with a line break: {:?}", destination);
    }

    match temp_file {
        Some(path) => handoff::write_destination(path, &destination)
            .with_context(|| format!("Failed to write handoff file {:?}", path))?,
        None => println!("{}", destination.display()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Root};
    use std::fs;
    use tempfile::TempDir;

    fn sample_store(temp: &TempDir) -> Store {
        let store = Store::at(temp.path().join("goto"));
        store
            .save_root(&Root::new("web", "website", "~/code/web").with_shortcut("src", "src"))
            .unwrap();
        store
            .save_root(&Root::new("ops", "operations", "/srv").with_shortcut("logs", "var/log"))
            .unwrap();
        store
            .save_config(&Config {
                current_root: "web".to_string(),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_resolve_uses_current_root() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);

        assert_eq!(
            resolve(&store, None, "src").unwrap(),
            PathBuf::from("~/code/web/src")
        );
    }

    #[test]
    fn test_resolve_explicit_root() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);

        assert_eq!(
            resolve(&store, Some("ops"), "logs").unwrap(),
            PathBuf::from("/srv/var/log")
        );
    }

    #[test]
    fn test_resolve_not_found() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);

        let err = resolve(&store, None, "logs").unwrap_err();
        assert!(err.to_string().contains("not found in website"));
    }

    #[test]
    fn test_execute_writes_handoff_file() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);
        let handoff = temp.path().join("handoff.path");
        fs::write(&handoff, "").unwrap();

        execute(&store, Some("ops"), "logs", Some(handoff.as_path())).unwrap();

        assert_eq!(fs::read_to_string(&handoff).unwrap(), "/srv/var/log\n");
    }

    #[test]
    fn test_execute_not_found_leaves_handoff_empty() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);
        let handoff = temp.path().join("handoff.path");
        fs::write(&handoff, "").unwrap();

        assert!(execute(&store, None, "missing", Some(handoff.as_path())).is_err());
        assert_eq!(fs::read_to_string(&handoff).unwrap(), "");
    }

    #[test]
    fn test_execute_rejects_line_break_in_path() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);
        store
            .save_root(
                &Root::new("odd", "odd", "/tmp\n/etc").with_shortcut("x", "x"),
            )
            .unwrap();
        let handoff = temp.path().join("handoff.path");
        fs::write(&handoff, "").unwrap();

        let err = execute(&store, Some("odd"), "x", Some(handoff.as_path())).unwrap_err();
        assert!(err.to_string().starts_with("Refusing path with a line break"));
        assert_eq!(fs::read_to_string(&handoff).unwrap(), "");
    }
}
