use crate::installer::DEFAULT_TARGET_DIR;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// React Compiler rules for Biome, packaged as GritQL plugins
#[derive(Parser, Debug)]
#[command(name = "biome-plugin-react-compiler")]
#[command(version)]
#[command(about = "React Compiler lint rules for Biome, packaged as GritQL plugins")]
#[command(after_help = "Examples:
  biome-plugin-react-compiler init
  biome-plugin-react-compiler init --dir ./rules
  biome-plugin-react-compiler list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Package root containing the bundled rules/ directory
    #[arg(long, global = true, env = "BIOME_REACT_COMPILER_ROOT")]
    pub package_root: Option<PathBuf>,

    /// Set log level
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy plugin rules to your project and update biome.json
    Init {
        /// Target directory for rules
        #[arg(long, default_value = DEFAULT_TARGET_DIR)]
        dir: PathBuf,

        /// Don't update biome.json
        #[arg(long)]
        no_update: bool,
    },

    /// List available rules
    List,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::List => "list",
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
