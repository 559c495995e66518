use std::process::ExitCode;

use clap::Parser;

use lsrs_cli::commands::{self, ListArgs};
use lsrs_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "lsrs",
    version,
    about = "List directory contents with icons, tables, human sizes and JSON"
)]
pub struct Cli {
    #[command(flatten)]
    pub list: ListArgs,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    commands::run(cli.list)
}
