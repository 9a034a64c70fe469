mod cli;
mod command;
mod command_result;
mod commands;
mod logging;
mod output_utils;


use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    logging::setup_logger(&cli);

    let result = match cli.cmd.take() {
        Some(command) => command.run(cli).await,
        None => CommandResult::from_anyhow(
            cli.run_default().await.map(|()| String::new()),
        ),
    };

    if let Some(stdout) = result.stdout.filter(|stdout| !stdout.is_empty()) {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}
