use crate::perft::{self, PerftArgs};
use crate::sess::{CommandError, Shell};

use clap::Parser;
use log::LevelFilter;

use std::io;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Most verbose level of log output written to stderr
    #[clap(short, long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Count move paths from the start position to this depth, then exit
    #[clap(short, long)]
    pub perft: Option<usize>,

    /// With --perft, break the count down by first move
    #[clap(short, long)]
    pub divide: bool,
}

/// Runs the mode selected by `args`: a perft count if one was asked for,
/// otherwise an interactive session on stdin/stdout.
pub fn run(args: &Args) -> Result<(), CommandError> {
    if let Some(depth) = args.perft {
        let perft_args = PerftArgs {
            depth,
            divide: args.divide,
        };
        perft::perft(&perft_args, &mut io::stdout())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut shell = Shell::new();
    shell.run(stdin.lock(), &mut io::stdout())?;
    Ok(())
}
