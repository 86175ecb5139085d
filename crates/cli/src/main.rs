use std::process::ExitCode;

use clap::Parser;

mod args;
mod run;

use args::Cli;

fn main() -> ExitCode {
    polyfuse_runtime::logging::init().ok();

    let cli = Cli::parse();
    run::run(cli)
}
