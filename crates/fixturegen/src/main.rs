use std::{path::Path, process};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "fixturegen",
    version,
    about = "Write the five-page student exam PDF used to test the page splitter",
    after_help = "OUTPUT:\n  test-data/test_students.pdf (relative to the current directory; the\n  test-data directory must already exist)\n\nLOGGING:\n  Set RUST_LOG=debug to trace each rendered page on stderr.\n"
)]
struct Cli {}

fn main() {
    Cli::parse();
    init_tracing();

    let code = match run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    };
    process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let output = Path::new(fixturecore::DEFAULT_OUTPUT);
    tracing::debug!(path = %output.display(), "writing fixture");
    fixturecore::write_fixture(output)
        .with_context(|| format!("writing fixture: {}", output.display()))?;
    println!("Test PDF created successfully: {}", output.display());
    Ok(())
}
