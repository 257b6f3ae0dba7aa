mod check;
mod tree;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use check::CheckCmd;
use tree::TreeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "querydoc")]
pub(crate) enum CommandEnum {
    /// Parse and assemble every query document found under the given paths.
    Check(Box<CheckCmd>),

    /// Print the syntax tree of a single query document.
    Tree(Box<TreeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Tree(cmd) => cmd.run(cli).await,
        }
    }
}
