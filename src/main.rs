use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use mysql_remote_toggle::config::DatabaseConfig;
use mysql_remote_toggle::constants::{DEFAULT_CONFIG_FILE, INVALID_INPUT_MESSAGE, PROMPT};
use mysql_remote_toggle::{parse_choice, set_remote_access, utils};

#[derive(Parser)]
#[command(name = "mysql-remote-toggle")]
#[command(about = "Toggle remote access for a MySQL account by rewriting its grant-table host entry")]
struct Args {
    #[arg(
        short,
        long,
        default_value = DEFAULT_CONFIG_FILE,
        help = "Configuration file path, resolved against the executable's directory when relative"
    )]
    config: PathBuf,

    #[arg(short, long, help = "Verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let verbosity = if args.verbose { "verbose" } else { "normal" };
    utils::setup_logging(verbosity)?;

    let config = DatabaseConfig::load(&args.config).await?;
    info!("Loaded database config for user '{}'", config.user);

    print!("{}", PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match parse_choice(&line) {
        Some(enable) => set_remote_access(&config, enable).await?,
        None => println!("{}", INVALID_INPUT_MESSAGE),
    }

    Ok(())
}
