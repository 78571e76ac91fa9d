//! Biome configuration file handling
//!
//! Locates `biome.json` / `biome.jsonc` in a project, reads it (tolerating
//! comments), merges plugin paths into its `plugins` array and writes it back.

use super::jsonc::strip_comments;
use crate::{PluginError, Result};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Recognized configuration file names, in lookup priority order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["biome.json", "biome.jsonc"];

/// Schema referenced by freshly created configuration files
pub const BIOME_SCHEMA_URL: &str = "https://biomejs.dev/schemas/2.0.0/schema.json";

/// A Biome configuration document bound to its file
#[derive(Debug, Clone)]
pub struct BiomeConfig {
    path: PathBuf,
    document: Map<String, Value>,
}

impl BiomeConfig {
    /// First existing configuration file in `project_root`
    pub fn locate(project_root: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| project_root.join(name))
            .find(|path| path.is_file())
    }

    /// Path a new configuration file is created at
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAMES[0])
    }

    /// Read and parse an existing configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PluginError::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse configuration text that belongs to `path`
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let parse_error = |message: String| PluginError::ConfigParse {
            path: path.to_path_buf(),
            message,
        };

        let value: Value =
            serde_json::from_str(&strip_comments(content)).map_err(|e| parse_error(e.to_string()))?;

        let document = match value {
            Value::Object(map) => map,
            other => {
                return Err(parse_error(format!(
                    "expected a JSON object at the top level, found {}",
                    json_kind(&other)
                )))
            }
        };

        let config = Self {
            path: path.to_path_buf(),
            document,
        };
        // Surface a malformed plugins entry before anything is merged
        config.plugins()?;
        Ok(config)
    }

    /// Fresh configuration with the linter enabled and recommended rules on
    pub fn new_default(path: &Path, plugins: Vec<String>) -> Self {
        let mut document = Map::new();
        document.insert("$schema".to_string(), json!(BIOME_SCHEMA_URL));
        document.insert("plugins".to_string(), json!(plugins));
        document.insert(
            "linter".to_string(),
            json!({
                "enabled": true,
                "rules": {
                    "recommended": true
                }
            }),
        );

        Self {
            path: path.to_path_buf(),
            document,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Current plugin list; missing or null counts as empty
    pub fn plugins(&self) -> Result<Vec<String>> {
        let parse_error = |message: String| PluginError::ConfigParse {
            path: self.path.clone(),
            message,
        };

        match self.document.get("plugins") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| match entry {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(parse_error(format!(
                        "plugins entries must be strings, found {}",
                        json_kind(other)
                    ))),
                })
                .collect(),
            Some(other) => Err(parse_error(format!(
                "plugins must be an array, found {}",
                json_kind(other)
            ))),
        }
    }

    /// Union `new_plugins` into the plugin list, keeping existing entries first.
    ///
    /// Returns the entries that were not present before.
    pub fn merge_plugins(&mut self, new_plugins: &[String]) -> Result<Vec<String>> {
        let existing = self.plugins()?;
        let merged = merge_plugin_lists(&existing, new_plugins);

        let before: HashSet<&str> = existing.iter().map(String::as_str).collect();
        let added: Vec<String> = merged
            .iter()
            .filter(|p| !before.contains(p.as_str()))
            .cloned()
            .collect();

        debug!(
            "Merging {} plugin(s) into {}: {} new",
            new_plugins.len(),
            self.path.display(),
            added.len()
        );

        self.document.insert(
            "plugins".to_string(),
            Value::Array(merged.into_iter().map(Value::String).collect()),
        );
        Ok(added)
    }

    /// Pretty-printed document text
    pub fn to_json_string(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(&self.document)?;
        content.push('\n');
        Ok(content)
    }

    /// Write the document back to its file, replacing previous contents
    pub fn save(&self) -> Result<()> {
        let content = self.to_json_string()?;
        fs::write(&self.path, content).map_err(|e| PluginError::io(&self.path, e))
    }
}

/// Ordered set union: `existing` first, then unseen `incoming`, no duplicates
pub fn merge_plugin_lists(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    existing
        .iter()
        .chain(incoming)
        .filter(|p| seen.insert(p.as_str()))
        .cloned()
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
