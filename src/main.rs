use anyhow::Result;
use clap::Parser;
use std::io;
use unicode_hover::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Warnings go to stderr; --log-level or RUST_LOG also opens the debug
    // log file.
    unicode_hover::debug::init_log_bridge(cli.log_level.map(|l| l.to_level_filter()));
    log::info!("Starting unicode-hover {}", unicode_hover::VERSION);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = cli::run(cli, &mut stdin.lock(), &mut stdout.lock());

    if let Err(ref e) = result {
        eprintln!("unicode-hover: error: {e:#}");
        std::process::exit(1);
    }
    result
}
