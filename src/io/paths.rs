use crate::catalog::{RuleName, RULES_DIR_NAME};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Location of the installed package and its bundled rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePaths {
    /// Package root (the directory holding `rules/`)
    pub root: PathBuf,
}

impl PackagePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the package root.
    ///
    /// An explicit root always wins and is made absolute against the current
    /// directory. Otherwise the executable's directory and its ancestors are
    /// searched for a `rules/` directory holding catalog rules, falling back to
    /// the source tree the binary was built from.
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        if let Some(root) = explicit {
            let root = std::path::absolute(&root).unwrap_or(root);
            debug!("Using explicit package root {}", root.display());
            return Self::new(root);
        }

        let from_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| Self::find_root_above(&exe));
        if let Some(root) = from_exe {
            debug!("Found bundled rules next to executable in {}", root.display());
            return Self::new(root);
        }

        Self::built_in()
    }

    /// Package root recorded at build time
    pub fn built_in() -> Self {
        Self::new(env!("CARGO_MANIFEST_DIR"))
    }

    /// Nearest ancestor of `start` whose `rules/` directory holds at least one
    /// cataloged rule file
    pub fn find_root_above(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .skip(1)
            .find(|dir| Self::has_catalog_rules(&dir.join(RULES_DIR_NAME)))
            .map(Path::to_path_buf)
    }

    fn has_catalog_rules(rules_dir: &Path) -> bool {
        RuleName::ALL
            .iter()
            .any(|rule| rules_dir.join(rule.file_name()).is_file())
    }

    pub fn rules_dir(&self) -> PathBuf {
        self.root.join(RULES_DIR_NAME)
    }
}

/// Utilities for working with paths
pub struct PathUtils;

impl PathUtils {
    /// Resolve `path` against `base` unless it is already absolute
    pub fn resolve(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }

    /// Base directory string used inside plugin paths.
    ///
    /// Relative directories are written `./dir` (or kept as `../dir`),
    /// absolute ones are kept verbatim, and separators are always `/`.
    pub fn plugin_base(target_dir: &Path) -> String {
        let normalized = Self::normalize_path(&target_dir.to_string_lossy());
        if target_dir.is_absolute() {
            return normalized;
        }

        match target_dir.components().next() {
            Some(Component::CurDir) | Some(Component::ParentDir) => normalized,
            _ => format!("./{normalized}"),
        }
    }

    /// Plugin paths always use forward slashes
    pub fn normalize_path(path: &str) -> String {
        path.replace('\\', "/")
    }
}
