use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use gildedrose_texttest::Cli;

fn main() -> ExitCode {
    gildedrose_observability::init();

    if let Err(e) = real_main() {
        tracing::error!("{:?}", e);
        eprintln!("error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gildedrose_texttest::run(&cli, &mut out).context("print inventory snapshots")?;
    out.flush().context("flush stdout")?;

    Ok(())
}
