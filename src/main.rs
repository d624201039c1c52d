use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drawer::cli::run_session;
use drawer::config::CurrencyFormat;
use drawer::display::format_drawer_table;

#[derive(Parser)]
#[command(
    name = "drawer",
    version,
    about = "Count a cash drawer",
    long_about = "Prompts for the number of each bill and coin in the drawer, \
                  then prints a table of counts and values with the total."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let format = CurrencyFormat::default();
    format.validate()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let drawer = run_session(&mut input, &mut stdout).context("Failed to read drawer counts")?;
    let table = format_drawer_table(&drawer.render(&format));

    writeln!(stdout).context("Failed to write summary")?;
    writeln!(stdout, "{}", table).context("Failed to write summary")?;

    Ok(())
}

/// Logs go to stderr so stdout only carries prompts and the table.
///
/// `RUST_LOG=debug` shows each count as it is entered. Default: warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
