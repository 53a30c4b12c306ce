use crate::{RootSet, Store};
use anyhow::Result;

const ROOT_FLAGS: [&str; 4] = ["-s", "--set", "-o", "--open"];

/// Completion candidates for a command line, sorted
pub fn candidates(roots: &RootSet, current_root: &str, line: &str) -> Vec<String> {
    let words: Vec<&str> = line.split(' ').collect();

    let merged = |root: &str| -> Vec<String> {
        roots
            .merged_shortcuts(root)
            .map(|shortcuts| shortcuts.into_keys().collect())
            .unwrap_or_default()
    };
    let root_names = || roots.abbrevs().map(str::to_string).collect::<Vec<_>>();

    let (options, prefix) = match words.as_slice() {
        [_] => (root_names(), ""),
        [_, flag, rest @ ..] if ROOT_FLAGS.contains(flag) => {
            (root_names(), rest.first().copied().unwrap_or(""))
        }
        [_, word] if roots.contains(word) => (merged(*word), ""),
        [_, word] => (merged(current_root), *word),
        [_, root, word] => (merged(*root), *word),
        _ => (Vec::new(), ""),
    };

    let mut matches: Vec<String> = options
        .into_iter()
        .filter(|option| option.starts_with(prefix))
        .collect();
    matches.sort();
    matches
}

pub fn execute(store: &Store, line: &str) -> Result<()> {
    let roots = store.load_roots()?;
    let current_root = store.load_config()?.current_root;

    for candidate in candidates(&roots, &current_root, line) {
        println!("{candidate}");
    }
    Ok(())
}
