mod cli;
mod debug_cmd;
mod parse_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Parse {
            ref file,
            ref output,
            ref format,
        } => parse_cmd::run(file, output, format),
        cli::Commands::Debug {
            ref file,
            ref output,
        } => debug_cmd::run(file, output),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
