mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, count};
use terminal::logging;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.to_config();

    match count::count(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => count::report_failure(&err),
    }
}
