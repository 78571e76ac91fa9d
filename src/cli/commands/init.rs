use super::{manual_plugin_block, CommandHandler, CommandResult};
use crate::installer::{InstallOptions, InstallReport, Installer, MergeOutcome};
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Handler for the `init` command
pub struct InitCommand {
    pub installer: Installer,
    pub dir: PathBuf,
    pub update_config: bool,
}

impl CommandHandler for InitCommand {
    fn execute(&self) -> Result<CommandResult> {
        println!("Installing biome-plugin-react-compiler...");
        println!();
        println!("Target directory: {}", self.dir.display());
        println!();

        let report = self.installer.install(&InstallOptions {
            target_dir: self.dir.clone(),
            update_config: self.update_config,
        })?;
        info!(
            "Installed {} rule(s) into {}",
            report.copied.len(),
            report.target_dir.display()
        );

        for rule in &report.copied {
            println!("  Copied: {}", rule.file_name());
        }
        println!();
        println!("Copied {} rules.", report.copied.len());
        println!();

        let result = self.report_config(&report)?;

        println!();
        println!("Done! Run 'biome lint .' to check your code.");
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "init"
    }
}

impl InitCommand {
    /// Create new init command
    pub fn new(installer: Installer, dir: PathBuf, update_config: bool) -> Self {
        Self {
            installer,
            dir,
            update_config,
        }
    }

    fn report_config(&self, report: &InstallReport) -> Result<CommandResult> {
        match &report.merge {
            None => {
                println!("Skipped biome.json update. Add plugins manually:");
                println!("{}", manual_plugin_block(&report.plugins)?);
                Ok(CommandResult::Success(None))
            }
            Some(MergeOutcome::Created { path }) => {
                println!("Created: {}", path.display());
                Ok(CommandResult::Success(None))
            }
            Some(MergeOutcome::Updated { path, added }) => {
                if added.is_empty() {
                    println!("{} already references every plugin.", path.display());
                } else {
                    println!("Updated: {}", path.display());
                }
                Ok(CommandResult::Success(None))
            }
            Some(MergeOutcome::Skipped {
                path,
                reason,
                plugins,
            }) => {
                eprintln!("Error updating {}: {}", path.display(), reason);
                println!("Manually add these plugins to your biome.json:");
                println!("{}", manual_plugin_block(plugins)?);
                Ok(CommandResult::Warning(format!(
                    "{} was not updated",
                    path.display()
                )))
            }
        }
    }
}
