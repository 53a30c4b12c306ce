use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Shortcut name -> path relative to the root's directory
pub type Shortcuts = BTreeMap<String, String>;

const ROOT_FILE_EXTENSION: &str = "toml";

/// A root directory with its own set of shortcuts
///
/// Stored as `roots/<root>.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Abbreviation used on the command line
    pub root: String,
    /// Human readable name
    pub name: String,
    /// Base directory; may start with `~`
    #[serde(default)]
    pub path: String,
    /// Roots whose shortcuts are searched after this root's own
    #[serde(default)]
    pub defaults: Vec<String>,
    #[serde(default)]
    pub shortcuts: Shortcuts,
    /// File this root was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown root '{0}'")]
    UnknownRoot(String),

    #[error("Shortcut '{shortcut}' not found in {root}")]
    ShortcutNotFound { shortcut: String, root: String },
}

impl Root {
    pub fn new(root: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
            path: path.into(),
            defaults: Vec::new(),
            shortcuts: Shortcuts::new(),
            source: None,
        }
    }

    pub fn with_shortcut(mut self, shortcut: &str, relative: &str) -> Self {
        self.shortcuts
            .insert(shortcut.to_string(), relative.to_string());
        self
    }

    pub fn with_default(mut self, root: &str) -> Self {
        self.defaults.push(root.to_string());
        self
    }

    pub fn file_name(abbrev: &str) -> String {
        format!("{abbrev}.{ROOT_FILE_EXTENSION}")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read root file {:?}", path))?;
        let mut root: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse root file {:?}", path))?;
        root.source = Some(path.to_path_buf());
        Ok(root)
    }

    /// Write to `<dir>/<root>.toml`, returning the file path
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create roots directory {:?}", dir))?;

        let path = dir.join(Self::file_name(&self.root));
        let contents = toml::to_string_pretty(self)
            .with_context(|| format!("Failed to serialize root '{}'", self.root))?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write root file {:?}", path))?;
        Ok(path)
    }

    /// Join a shortcut's relative path onto the root directory
    pub fn full_path(&self, relative: &str) -> PathBuf {
        Path::new(&self.path).join(relative)
    }
}

/// All roots found in the roots directory, keyed by abbreviation
#[derive(Debug, Clone, Default)]
pub struct RootSet {
    roots: BTreeMap<String, Root>,
}

impl RootSet {
    /// Load every `*.toml` file in `dir`.
    ///
    /// Files that cannot be read or parsed are skipped with a warning. A
    /// missing directory yields an empty set.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut set = Self::default();
        if !dir.exists() {
            return Ok(set);
        }

        let mut paths = Vec::new();
        for entry in
            fs::read_dir(dir).with_context(|| format!("Failed to read roots directory {:?}", dir))?
        {
            let path = entry?.path();
            let is_root_file = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(ROOT_FILE_EXTENSION);
            if is_root_file {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            match Root::load(&path) {
                Ok(root) if !root.root.is_empty() => set.insert(root),
                Ok(_) => tracing::warn!(path = ?path, "skipping root file without abbreviation"),
                Err(err) => {
                    let error = format!("{err:#}");
                    tracing::warn!(path = ?path, error = %error, "skipping root file");
                }
            }
        }

        Ok(set)
    }

    pub fn from_roots(roots: impl IntoIterator<Item = Root>) -> Self {
        let mut set = Self::default();
        for root in roots {
            set.insert(root);
        }
        set
    }

    pub fn insert(&mut self, root: Root) {
        self.roots.insert(root.root.clone(), root);
    }

    pub fn get(&self, abbrev: &str) -> Option<&Root> {
        self.roots.get(abbrev)
    }

    pub fn contains(&self, abbrev: &str) -> bool {
        self.roots.contains_key(abbrev)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn abbrevs(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Root> {
        self.roots.values()
    }

    fn require(&self, abbrev: &str) -> Result<&Root, LookupError> {
        self.get(abbrev)
            .ok_or_else(|| LookupError::UnknownRoot(abbrev.to_string()))
    }

    /// Shortcut tables in search order: the root's own, then each default
    pub fn shortcut_sources(&self, abbrev: &str) -> Result<Vec<&Shortcuts>, LookupError> {
        let root = self.require(abbrev)?;
        let mut sources = vec![&root.shortcuts];

        for default in &root.defaults {
            match self.get(default) {
                Some(default_root) => sources.push(&default_root.shortcuts),
                None => tracing::warn!(
                    root = %abbrev,
                    default = %default,
                    "default root not found"
                ),
            }
        }

        Ok(sources)
    }

    /// Every shortcut reachable from `abbrev`; earlier sources win
    pub fn merged_shortcuts(&self, abbrev: &str) -> Result<Shortcuts, LookupError> {
        let mut merged = Shortcuts::new();
        for source in self.shortcut_sources(abbrev)? {
            for (shortcut, relative) in source {
                merged
                    .entry(shortcut.clone())
                    .or_insert_with(|| relative.clone());
            }
        }
        Ok(merged)
    }

    /// Expand `shortcut` in `abbrev` into a full path
    pub fn resolve(&self, abbrev: &str, shortcut: &str) -> Result<PathBuf, LookupError> {
        let root = self.require(abbrev)?;
        let relative = self
            .shortcut_sources(abbrev)?
            .into_iter()
            .find_map(|source| source.get(shortcut))
            .ok_or_else(|| LookupError::ShortcutNotFound {
                shortcut: shortcut.to_string(),
                root: root.name.clone(),
            })?;

        Ok(root.full_path(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn sample_set() -> RootSet {
        RootSet::from_roots([
            Root::new("com", "common", "")
                .with_shortcut("root", "")
                .with_shortcut("/", "/")
                .with_shortcut("src", "common-src"),
            Root::new("web", "website", "~/code/web")
                .with_default("com")
                .with_default("missing")
                .with_shortcut("src", "src")
                .with_shortcut("docs", "docs/site"),
        ])
    }

    #[rstest]
    #[case("web", "docs", "~/code/web/docs/site")]
    #[case("web", "src", "~/code/web/src")]
    #[case("web", "/", "/")]
    #[case("com", "src", "common-src")]
    #[case("com", "root", "")]
    fn test_resolve(#[case] root: &str, #[case] shortcut: &str, #[case] expected: &str) {
        assert_eq!(
            sample_set().resolve(root, shortcut).unwrap(),
            PathBuf::from(expected)
        );
    }

    #[test]
    fn test_resolve_unknown_shortcut() {
        let err = sample_set().resolve("web", "nope").unwrap_err();
        assert_eq!(
            err,
            LookupError::ShortcutNotFound {
                shortcut: "nope".to_string(),
                root: "website".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Shortcut 'nope' not found in website");
    }

    #[test]
    fn test_resolve_unknown_root() {
        let err = sample_set().resolve("nope", "src").unwrap_err();
        assert_eq!(err, LookupError::UnknownRoot("nope".to_string()));
    }

    #[test]
    fn test_merged_shortcuts_prefers_own_entries() {
        let merged = sample_set().merged_shortcuts("web").unwrap();
        assert_eq!(merged.get("src").map(String::as_str), Some("src"));
        assert_eq!(merged.get("root").map(String::as_str), Some(""));
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_shortcut_sources_skips_missing_defaults() {
        let set = sample_set();
        assert_eq!(set.shortcut_sources("web").unwrap().len(), 2);
    }

    #[test]
    fn test_save_and_load_dir() {
        let temp = TempDir::new().unwrap();
        for root in sample_set().iter() {
            root.save(temp.path()).unwrap();
        }
        fs::write(temp.path().join("broken.toml"), "root = [").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let loaded = RootSet::load(temp.path()).unwrap();
        assert_eq!(loaded.abbrevs().collect::<Vec<_>>(), vec!["com", "web"]);
        let web = loaded.get("web").unwrap();
        assert_eq!(web.source.as_deref(), Some(temp.path().join("web.toml").as_path()));
        assert_eq!(web.defaults, vec!["com", "missing"]);
        assert_eq!(Some(&web.shortcuts), sample_set().get("web").map(|r| &r.shortcuts));
    }

    #[test]
    fn test_load_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let set = RootSet::load(&temp.path().join("roots")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_root_file_format() {
        let temp = TempDir::new().unwrap();
        let path = Root::new("goto", "goto", "/home/me/.config/goto")
            .with_shortcut("roots", "roots")
            .save(temp.path())
            .unwrap();

        assert_eq!(path, temp.path().join("goto.toml"));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("root = \"goto\""));
        assert!(contents.contains("[shortcuts]"));
        assert!(contents.contains("roots = \"roots\""));
    }
}
