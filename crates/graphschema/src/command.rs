use crate::Cli;
use crate::CommandResult;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// Runs the command to completion. Failures are reported through the
    /// returned [`CommandResult`] rather than by panicking.
    async fn run(self, cli: Cli) -> CommandResult;
}
