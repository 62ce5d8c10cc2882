mod check;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "apimodel")]
pub(crate) enum CommandEnum {
    /// Index and build every given document, reporting unresolved
    /// references and malformed objects.
    Check(Box<CheckCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await
        }
    }
}
