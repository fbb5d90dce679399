use bitmove::cmdline::{self, Args};

use clap::Parser;
use log::info;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up the logger. Log output goes to stderr, leaving stdout to the session.
    SimpleLogger::new().with_level(args.log_level).init()?;

    info!("logger initialized at level {}", args.log_level);

    cmdline::run(&args)?;
    Ok(())
}
