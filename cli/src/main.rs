mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, demo, find, total};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(cfg.verbose);
    print::banner(cfg.banner);

    let result = match commands.command.unwrap_or_default() {
        Commands::Demo => demo::demo(&cfg),
        Commands::Total => total::total(),
        Commands::Find => find::find(&cfg),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::error(&err);
            ExitCode::FAILURE
        }
    }
}
