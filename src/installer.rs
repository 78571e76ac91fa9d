//! One-shot installation of the bundled rules into a consumer project
//!
//! Copies every cataloged rule into a target directory, then merges the
//! corresponding plugin paths into the project's Biome configuration.

use crate::catalog::{plugin_paths, RuleCatalog, RuleName};
use crate::config::BiomeConfig;
use crate::io::PathUtils;
use crate::{PluginError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default target directory for `init`
pub const DEFAULT_TARGET_DIR: &str = "biome-plugins";

/// What happened to the project's Biome configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// An existing file was rewritten with the merged plugin list
    Updated { path: PathBuf, added: Vec<String> },
    /// No configuration existed, so a default one was written
    Created { path: PathBuf },
    /// The existing file could not be used; plugins must be added by hand
    Skipped {
        path: PathBuf,
        reason: String,
        plugins: Vec<String>,
    },
}

/// Options for a full installation
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Where rules are copied to, relative to the project root unless absolute
    pub target_dir: PathBuf,
    /// Merge plugin paths into the Biome configuration
    pub update_config: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            update_config: true,
        }
    }
}

/// Result of a full installation
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub target_dir: PathBuf,
    pub copied: Vec<RuleName>,
    /// Plugin paths for the copied rules, as written to the configuration
    pub plugins: Vec<String>,
    /// `None` when the configuration update was not requested
    pub merge: Option<MergeOutcome>,
}

/// Installs bundled rules into the project at `project_root`
#[derive(Debug, Clone)]
pub struct Installer {
    catalog: RuleCatalog,
    project_root: PathBuf,
}

impl Installer {
    pub fn new(catalog: RuleCatalog, project_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            project_root: project_root.into(),
        }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Copy, then optionally merge the configuration
    pub fn install(&self, options: &InstallOptions) -> Result<InstallReport> {
        let copied = self.copy_rules(&options.target_dir)?;
        let plugins = self.plugin_paths_for(&options.target_dir, &copied);

        let merge = if options.update_config {
            Some(self.merge_configuration(&options.target_dir, &copied)?)
        } else {
            debug!("Skipping Biome configuration update");
            None
        };

        Ok(InstallReport {
            target_dir: options.target_dir.clone(),
            copied,
            plugins,
            merge,
        })
    }

    /// Copy every available bundled rule into `target_dir`.
    ///
    /// Rules whose source file is missing are skipped with a warning. Fails if
    /// the bundled rules directory is absent or nothing could be copied.
    pub fn copy_rules(&self, target_dir: &Path) -> Result<Vec<RuleName>> {
        if !self.catalog.has_bundled_rules() {
            return Err(PluginError::MissingBundledRules {
                path: self.catalog.rules_dir().to_path_buf(),
            });
        }

        let destination = PathUtils::resolve(&self.project_root, target_dir);
        if !destination.exists() {
            fs::create_dir_all(&destination).map_err(|e| PluginError::io(&destination, e))?;
            info!("Created directory: {}", destination.display());
        }

        let mut copied = Vec::new();
        for rule in self.catalog.list_rule_names() {
            let source = self.catalog.rule_path(*rule);
            if !source.is_file() {
                warn!("{} not found, skipping", rule.file_name());
                continue;
            }

            let target = destination.join(rule.file_name());
            if is_same_file(&source, &target) {
                // fs::copy would truncate the source before reading it
                debug!("{} is already in place, not copying", target.display());
                copied.push(*rule);
                continue;
            }

            fs::copy(&source, &target).map_err(|e| PluginError::io(&target, e))?;
            debug!("Copied {} -> {}", source.display(), target.display());
            copied.push(*rule);
        }

        if copied.is_empty() {
            return Err(PluginError::NoRulesCopied);
        }

        Ok(copied)
    }

    /// Plugin paths referencing `rules` inside `target_dir`
    pub fn plugin_paths_for(&self, target_dir: &Path, rules: &[RuleName]) -> Vec<String> {
        plugin_paths(&PathUtils::plugin_base(target_dir), rules)
    }

    /// Merge plugin paths for `copied` into the project's Biome configuration.
    ///
    /// An unreadable or unparsable existing file yields
    /// [`MergeOutcome::Skipped`] rather than an error; only failing to create
    /// a brand new file is reported as `Err`.
    pub fn merge_configuration(
        &self,
        target_dir: &Path,
        copied: &[RuleName],
    ) -> Result<MergeOutcome> {
        let plugins = self.plugin_paths_for(target_dir, copied);

        let Some(path) = BiomeConfig::locate(&self.project_root) else {
            let path = BiomeConfig::default_path(&self.project_root);
            BiomeConfig::new_default(&path, plugins).save()?;
            info!("Created {}", path.display());
            return Ok(MergeOutcome::Created { path });
        };

        match Self::update_existing(&path, &plugins) {
            Ok(added) => {
                info!("Updated {} ({} new plugin(s))", path.display(), added.len());
                Ok(MergeOutcome::Updated { path, added })
            }
            Err(e) => {
                warn!("Error updating {}: {}", path.display(), e);
                Ok(MergeOutcome::Skipped {
                    path,
                    reason: e.to_string(),
                    plugins,
                })
            }
        }
    }

    fn update_existing(path: &Path, plugins: &[String]) -> Result<Vec<String>> {
        let mut config = BiomeConfig::load(path)?;
        let added = config.merge_plugins(plugins)?;
        config.save()?;
        Ok(added)
    }
}

/// Whether both paths exist and resolve to the same file
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RULES_DIR_NAME;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tempfile::TempDir;

    /// Package root with the given rules bundled
    fn package_with(rules: &[RuleName]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let rules_dir = temp_dir.path().join(RULES_DIR_NAME);
        fs::create_dir_all(&rules_dir).unwrap();
        for rule in rules {
            fs::write(
                rules_dir.join(rule.file_name()),
                format!("language js\n\n// {rule}\n"),
            )
            .unwrap();
        }
        temp_dir
    }

    fn installer(package: &TempDir, project: &TempDir) -> Installer {
        Installer::new(RuleCatalog::new(package.path()), project.path())
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_copy_all_rules_into_new_directory() {
        let package = package_with(&RuleName::ALL);
        let project = TempDir::new().unwrap();
        let installer = installer(&package, &project);

        let copied = installer.copy_rules(Path::new("nested/plugins")).unwrap();
        assert_eq!(copied, RuleName::ALL.to_vec());

        let target = project.path().join("nested/plugins");
        for rule in RuleName::ALL {
            let copy = fs::read(target.join(rule.file_name())).unwrap();
            let original = fs::read(package.path().join("rules").join(rule.file_name())).unwrap();
            assert_eq!(copy, original);
        }
    }

    #[test]
    fn test_missing_rule_is_skipped() {
        let package = package_with(&[RuleName::NoPropMutation, RuleName::NoPropsArrayPush]);
        let project = TempDir::new().unwrap();

        let copied = installer(&package, &project)
            .copy_rules(Path::new("biome-plugins"))
            .unwrap();
        assert_eq!(copied, vec![RuleName::NoPropMutation, RuleName::NoPropsArrayPush]);
        assert!(!project
            .path()
            .join("biome-plugins/no-props-array-pop.grit")
            .exists());
    }

    #[test]
    fn test_copy_into_bundled_rules_dir_keeps_contents() {
        let package = package_with(&RuleName::ALL);
        let installer = Installer::new(RuleCatalog::new(package.path()), package.path());
        let rules_dir = package.path().join(RULES_DIR_NAME);
        let before: Vec<Vec<u8>> = RuleName::ALL
            .iter()
            .map(|rule| fs::read(rules_dir.join(rule.file_name())).unwrap())
            .collect();

        for target in ["rules", "./rules"] {
            let copied = installer.copy_rules(Path::new(target)).unwrap();
            assert_eq!(copied, RuleName::ALL.to_vec());
        }

        for (rule, original) in RuleName::ALL.iter().zip(before) {
            let after = fs::read(rules_dir.join(rule.file_name())).unwrap();
            assert!(!after.is_empty(), "{rule} was truncated");
            assert_eq!(after, original);
        }
    }

    #[test]
    fn test_missing_bundled_rules_is_fatal() {
        let package = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();

        let err = installer(&package, &project)
            .copy_rules(Path::new("biome-plugins"))
            .unwrap_err();
        assert!(matches!(err, PluginError::MissingBundledRules { .. }));
        assert!(!project.path().join("biome-plugins").exists());
    }

    #[test]
    fn test_empty_rules_dir_copies_nothing() {
        let package = package_with(&[]);
        let project = TempDir::new().unwrap();

        let err = installer(&package, &project)
            .copy_rules(Path::new("biome-plugins"))
            .unwrap_err();
        assert!(matches!(err, PluginError::NoRulesCopied));
    }

    #[test]
    fn test_merge_creates_default_config() {
        let package = package_with(&RuleName::ALL);
        let project = TempDir::new().unwrap();
        let installer = installer(&package, &project);

        let outcome = installer
            .merge_configuration(Path::new("biome-plugins"), &[RuleName::NoPropMutation])
            .unwrap();
        let path = project.path().join("biome.json");
        assert_eq!(outcome, MergeOutcome::Created { path: path.clone() });

        let doc = read_json(&path);
        assert_eq!(doc["$schema"], "https://biomejs.dev/schemas/2.0.0/schema.json");
        assert_eq!(
            doc["plugins"],
            serde_json::json!(["./biome-plugins/no-prop-mutation.grit"])
        );
        assert_eq!(doc["linter"]["rules"]["recommended"], true);
    }

    #[test]
    fn test_merge_only_references_copied_rules() {
        let package = package_with(&RuleName::ALL);
        let project = TempDir::new().unwrap();
        let copied = [RuleName::NoTryCatchInRender, RuleName::NoPropsArraySort];

        installer(&package, &project)
            .merge_configuration(Path::new("rules-out"), &copied)
            .unwrap();

        let doc = read_json(&project.path().join("biome.json"));
        assert_eq!(
            doc["plugins"],
            serde_json::json!([
                "./rules-out/no-try-catch-in-render.grit",
                "./rules-out/no-props-array-sort.grit"
            ])
        );
    }

    #[test]
    fn test_merge_updates_jsonc_and_keeps_existing_first() {
        let package = package_with(&RuleName::ALL);
        let project = TempDir::new().unwrap();
        let config_path = project.path().join("biome.jsonc");
        fs::write(
            &config_path,
            "{\n  // keep my plugin\n  \"plugins\": [\"./other/rule.grit\"]\n}\n",
        )
        .unwrap();

        let outcome = installer(&package, &project)
            .merge_configuration(Path::new("biome-plugins"), &RuleName::ALL)
            .unwrap();
        match outcome {
            MergeOutcome::Updated { path, added } => {
                assert_eq!(path, config_path);
                assert_eq!(added.len(), 8);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        let doc = read_json(&config_path);
        let plugins = doc["plugins"].as_array().unwrap();
        assert_eq!(plugins.len(), 9);
        assert_eq!(plugins[0], "./other/rule.grit");
        assert_eq!(plugins[1], "./biome-plugins/no-try-catch-in-render.grit");
        assert!(!project.path().join("biome.json").exists());
    }

    #[test]
    fn test_merge_twice_has_no_duplicates() {
        let package = package_with(&RuleName::ALL);
        let project = TempDir::new().unwrap();
        let installer = installer(&package, &project);
        let target = Path::new("biome-plugins");

        installer.merge_configuration(target, &RuleName::ALL).unwrap();
        let second = installer.merge_configuration(target, &RuleName::ALL).unwrap();
        assert!(matches!(second, MergeOutcome::Updated { ref added, .. } if added.is_empty()));

        let doc = read_json(&project.path().join("biome.json"));
        assert_eq!(doc["plugins"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_parse_failure_skips_merge_without_touching_file() {
        let package = package_with(&RuleName::ALL);
        let project = TempDir::new().unwrap();
        let config_path = project.path().join("biome.json");
        let broken = "{ \"plugins\": [ ";
        fs::write(&config_path, broken).unwrap();

        let outcome = installer(&package, &project)
            .merge_configuration(Path::new("biome-plugins"), &[RuleName::NoPropMutation])
            .unwrap();
        match outcome {
            MergeOutcome::Skipped { path, plugins, .. } => {
                assert_eq!(path, config_path);
                assert_eq!(plugins, vec!["./biome-plugins/no-prop-mutation.grit"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(fs::read_to_string(&config_path).unwrap(), broken);
    }

    #[test]
    fn test_install_without_config_update() {
        let package = package_with(&RuleName::ALL);
        let project = TempDir::new().unwrap();

        let report = installer(&package, &project)
            .install(&InstallOptions {
                target_dir: PathBuf::from("./x"),
                update_config: false,
            })
            .unwrap();

        assert_eq!(report.copied.len(), 8);
        assert!(report.merge.is_none());
        assert_eq!(report.plugins[7], "./x/no-props-array-reverse.grit");
        assert!(!project.path().join("biome.json").exists());
    }
}
