use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use biome_plugin_react_compiler::{
    cli::commands::{init::InitCommand, list::ListCommand, CommandHandler, CommandResult},
    cli::{Cli, Commands, LogLevel},
    io::PackagePaths,
    Installer, PluginError, RuleCatalog,
};

/// Logs go to stderr so stdout only carries command output
fn initialize_tracing(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => {
                    eprintln!();
                    eprintln!("{}", Cli::command().render_help());
                    ExitCode::from(1)
                }
            };
        }
    };

    initialize_tracing(cli.log_level);

    match run(cli) {
        Ok(result) => ExitCode::from(result.exit_code() as u8),
        Err(e) => {
            match e.downcast_ref::<PluginError>() {
                Some(PluginError::NoRulesCopied) => eprintln!("\n{e}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<CommandResult> {
    let Some(command) = cli.command else {
        println!("{}", Cli::command().render_help());
        return Ok(CommandResult::Success(None));
    };
    debug!("Running {} command", command.name());

    let package = PackagePaths::discover(cli.package_root);
    let catalog = RuleCatalog::new(&package.root);

    let handler: Box<dyn CommandHandler> = match command {
        Commands::Init { dir, no_update } => {
            let project_root =
                std::env::current_dir().context("Failed to determine current directory")?;
            Box::new(InitCommand::new(
                Installer::new(catalog, project_root),
                dir,
                !no_update,
            ))
        }
        Commands::List => Box::new(ListCommand::new(catalog)),
    };

    let result = handler.run()?;
    if let Some(message) = result.message() {
        debug!("{}: {}", handler.name(), message);
    }
    Ok(result)
}
