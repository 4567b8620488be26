mod check;
pub(crate) mod fmt;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use check::CheckCmd;
use fmt::FmtCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphschema")]
pub(crate) enum CommandEnum {
    /// Parse schema files and report any syntax errors.
    Check(Box<CheckCmd>),

    /// Print schema files in canonical form.
    Fmt(Box<FmtCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Fmt(cmd) => cmd.run(cli).await,
        }
    }
}
