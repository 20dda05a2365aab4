use clap::Parser;
use tomesplit_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().execute()
}
