use super::{CommandHandler, CommandResult};
use crate::catalog::RuleCatalog;
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub catalog: RuleCatalog,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    /// One rule name per line, catalog order
    pub fn lines(&self) -> Vec<&'static str> {
        self.catalog
            .list_rule_names()
            .iter()
            .map(|rule| rule.as_str())
            .collect()
    }
}
