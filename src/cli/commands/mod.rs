pub mod init;
pub mod list;

use crate::catalog::PluginConfig;
use crate::Result;
use tracing::warn;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;

    /// Execute, downgrading errors that do not abort the command to a warning
    fn run(&self) -> Result<CommandResult> {
        match self.execute() {
            Err(e) if !e.is_fatal() => {
                warn!("{}: {}", self.name(), e);
                Ok(CommandResult::Warning(e.to_string()))
            }
            other => other,
        }
    }
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Completed, but something needs the user's attention
    Warning(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Warning(_) => 0,
        }
    }

    /// Get message if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(msg) => msg.as_deref(),
            CommandResult::Warning(msg) => Some(msg),
        }
    }
}

/// `{"plugins": [...]}` block for pasting into biome.json
pub(crate) fn manual_plugin_block(plugins: &[String]) -> Result<String> {
    let config = PluginConfig {
        plugins: plugins.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&config)?)
}
