//! windcfg - Command-line tool for checking and inspecting framework configuration

use std::process::ExitCode;

use windcfg::cli;

fn main() -> ExitCode {
    cli::run()
}
