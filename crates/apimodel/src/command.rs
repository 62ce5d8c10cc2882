use crate::Cli;
use crate::CommandResult;

/// A subcommand of the `apimodel` CLI.
///
/// Commands never print on their own; everything meant for the user is
/// returned in the [`CommandResult`] and written out by `main` once the
/// command completes.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
