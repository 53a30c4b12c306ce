use crate::{Shortcuts, Store};
use anyhow::{Context, Result};

/// Render a shortcut table as `name = "path"` lines
pub fn format_shortcuts(shortcuts: &Shortcuts) -> Result<String> {
    toml::to_string_pretty(shortcuts).context("Failed to format shortcuts")
}

pub fn render(store: &Store, arg: &str) -> Result<String> {
    let roots = store.load_roots()?;

    match arg {
        "all" => {
            let config = store.load_config()?;
            let root = roots
                .get(&config.current_root)
                .with_context(|| format!("Current root '{}' does not exist", config.current_root))?;
            format_shortcuts(&root.shortcuts)
        }
        "configs" => store.load_config()?.to_toml(),
        "roots" => Ok(roots.abbrevs().map(|abbrev| format!("{abbrev}\n")).collect()),
        other => match roots.get(other) {
            Some(root) => format_shortcuts(&root.shortcuts),
            None => anyhow::bail!("Invalid print arg: {other}"),
        },
    }
}

pub fn execute(store: &Store, arg: &str) -> Result<()> {
    print!("{}", render(store, arg)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Root;
    use tempfile::TempDir;

    fn sample_store(temp: &TempDir) -> Store {
        let store = Store::at(temp.path());
        store.write_defaults().unwrap();
        store
            .save_root(
                &Root::new("web", "website", "~/code/web")
                    .with_default("com")
                    .with_shortcut("src", "src"),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_render_all_is_current_root() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);

        assert_eq!(render(&store, "all").unwrap(), "roots = \"roots\"\n");
    }

    #[test]
    fn test_render_roots() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);

        assert_eq!(render(&store, "roots").unwrap(), "com\ngoto\nweb\n");
    }

    #[test]
    fn test_render_configs() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);

        assert!(render(&store, "configs")
            .unwrap()
            .contains("current_root = \"goto\""));
    }

    #[test]
    fn test_render_named_root_has_own_shortcuts_only() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);

        assert_eq!(render(&store, "web").unwrap(), "src = \"src\"\n");
    }

    #[test]
    fn test_render_invalid() {
        let temp = TempDir::new().unwrap();
        let store = sample_store(&temp);

        let err = render(&store, "bogus").unwrap_err();
        assert_eq!(err.to_string(), "Invalid print arg: bogus");
    }
}
