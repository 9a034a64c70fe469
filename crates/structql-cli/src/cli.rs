use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(
    name = "structql",
    version,
    about = "Inspect structql field lists and field tags.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Log level: error, warn, info, debug or trace. Takes precedence \
             over the `LOG_LEVEL` environment variable.",
        long,
        value_name="LEVEL",
    )]
    pub log_level: Option<String>,

    #[arg(
        global=true,
        help="Shorthand for `--log-level debug`.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    /// The raw log level requested on the command line, if any. `--verbose`
    /// wins over `--log-level`.
    pub(crate) fn requested_log_level(&self) -> Option<&str> {
        if self.verbose {
            Some("debug")
        } else {
            self.log_level.as_deref()
        }
    }
}
