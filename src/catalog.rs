//! Rule catalog
//!
//! The fixed set of GritQL rules shipped in the package's `rules/` directory,
//! and the helpers that turn them into Biome plugin references.

use crate::{PluginError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// File extension of every bundled rule
pub const RULE_EXTENSION: &str = "grit";

/// Directory under the package root holding the rule files
pub const RULES_DIR_NAME: &str = "rules";

/// Where rules live when the package is installed from npm
pub const DEFAULT_PLUGIN_BASE: &str = "./node_modules/biome-plugin-react-compiler/rules";

/// A rule shipped by this package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
    NoTryCatchInRender,
    NoRefAccessInRender,
    NoPropMutation,
    NoPropsArrayPush,
    NoPropsArrayPop,
    NoPropsArraySplice,
    NoPropsArraySort,
    NoPropsArrayReverse,
}

impl RuleName {
    /// Every rule, in catalog order
    pub const ALL: [RuleName; 8] = [
        RuleName::NoTryCatchInRender,
        RuleName::NoRefAccessInRender,
        RuleName::NoPropMutation,
        RuleName::NoPropsArrayPush,
        RuleName::NoPropsArrayPop,
        RuleName::NoPropsArraySplice,
        RuleName::NoPropsArraySort,
        RuleName::NoPropsArrayReverse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::NoTryCatchInRender => "no-try-catch-in-render",
            RuleName::NoRefAccessInRender => "no-ref-access-in-render",
            RuleName::NoPropMutation => "no-prop-mutation",
            RuleName::NoPropsArrayPush => "no-props-array-push",
            RuleName::NoPropsArrayPop => "no-props-array-pop",
            RuleName::NoPropsArraySplice => "no-props-array-splice",
            RuleName::NoPropsArraySort => "no-props-array-sort",
            RuleName::NoPropsArrayReverse => "no-props-array-reverse",
        }
    }

    /// File name of the rule, e.g. `no-prop-mutation.grit`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.as_str(), RULE_EXTENSION)
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = PluginError;

    /// Accepts the bare rule name or its file name
    fn from_str(s: &str) -> Result<Self> {
        let name = s
            .strip_suffix(RULE_EXTENSION)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(s);

        RuleName::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str() == name)
            .ok_or_else(|| PluginError::RuleNotFound(s.to_string()))
    }
}

/// Plugin section for a Biome configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub plugins: Vec<String>,
}

/// Join a base directory and a rule into a plugin path
pub fn plugin_path(base_dir: &str, rule: RuleName) -> String {
    let base = base_dir.trim_end_matches('/');
    if base.is_empty() {
        let root = if base_dir.starts_with('/') { "/" } else { "" };
        return format!("{}{}", root, rule.file_name());
    }
    format!("{}/{}", base, rule.file_name())
}

/// Build plugin paths for the given rules, preserving their order
pub fn plugin_paths<'a, I>(base_dir: &str, rules: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a RuleName>,
{
    rules
        .into_iter()
        .map(|rule| plugin_path(base_dir, *rule))
        .collect()
}

/// Read-only view of the bundled rules under a package root
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules_dir: PathBuf,
}

impl RuleCatalog {
    /// Catalog for a package rooted at `package_root`
    pub fn new(package_root: impl AsRef<Path>) -> Self {
        Self {
            rules_dir: package_root.as_ref().join(RULES_DIR_NAME),
        }
    }

    /// The fixed ordered list of rule names
    pub fn list_rule_names(&self) -> &'static [RuleName] {
        &RuleName::ALL
    }

    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    /// Whether the bundled rules directory is present
    pub fn has_bundled_rules(&self) -> bool {
        self.rules_dir.is_dir()
    }

    pub fn rule_path(&self, rule: RuleName) -> PathBuf {
        self.rules_dir.join(rule.file_name())
    }

    /// Resolve a rule identifier to its bundled file location
    pub fn resolve_rule_path(&self, name: &str) -> Result<PathBuf> {
        let rule = name.parse::<RuleName>()?;
        Ok(self.rule_path(rule))
    }

    pub fn rule_exists(&self, rule: RuleName) -> bool {
        self.rule_path(rule).is_file()
    }

    /// Full text of a bundled rule
    pub fn read_rule_content(&self, name: &str) -> Result<String> {
        let path = self.resolve_rule_path(name)?;
        if !path.is_file() {
            return Err(PluginError::RuleNotFound(name.to_string()));
        }

        debug!("Reading rule {} from {}", name, path.display());
        fs::read_to_string(&path).map_err(|e| PluginError::io(path, e))
    }

    /// Bundled file location of every rule, in catalog order
    pub fn all_rule_paths(&self) -> Vec<PathBuf> {
        RuleName::ALL
            .iter()
            .map(|rule| self.rule_path(*rule))
            .collect()
    }

    /// Plugin paths for every cataloged rule under `base_dir`
    pub fn plugin_config_fragment(&self, base_dir: &str) -> Vec<String> {
        plugin_paths(base_dir, RuleName::ALL.iter())
    }

    /// Plugin config pointing at the npm install location
    pub fn default_plugin_config(&self) -> PluginConfig {
        PluginConfig {
            plugins: self.plugin_config_fragment(DEFAULT_PLUGIN_BASE),
        }
    }
}
