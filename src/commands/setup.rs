use crate::{ui, Store};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub const CONFIRM_PROMPT: &str = "press 'y' to confirm config overwrite:";

/// Ask for confirmation on `input`, then write the default store
///
/// Returns whether the defaults were written.
pub fn execute(store: &Store, input: &mut impl BufRead) -> Result<bool> {
    println!("{CONFIRM_PROMPT}");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    if answer.trim_end_matches(['\r', '\n']) != "y" {
        println!("aborting");
        return Ok(false);
    }

    store.write_defaults()?;
    ui::success("Wrote", format!("config files to {}", store.dir().display()));
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorePath;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_setup_confirmed() {
        let temp = TempDir::new().unwrap();
        let store = Store::at(temp.path().join("goto"));

        assert!(execute(&store, &mut Cursor::new("y\n")).unwrap());
        assert!(store.path(StorePath::ConfigFile).is_file());
        assert!(store.root_file("com").is_file());
        assert!(store.root_file("goto").is_file());
    }

    #[test]
    fn test_setup_aborted() {
        let temp = TempDir::new().unwrap();
        let store = Store::at(temp.path().join("goto"));

        for answer in ["n\n", "yes\n", ""] {
            assert!(!execute(&store, &mut Cursor::new(answer)).unwrap());
        }
        assert!(!store.dir().exists());
    }
}
