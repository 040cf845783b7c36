use anyhow::{Context, Result};
use clap::Parser;
use roaring_sizecmp::{
    CRoaringMeter, Harness, Reporter, RoaringRsMeter, SizeMeter, Suite,
};
use std::{io, path::PathBuf};

/// Compares the serialized size of 64-bit Roaring bitmaps built by CRoaring
/// and by roaring-rs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file describing the scenarios to run (built-in suite if absent).
    #[arg(short, long)]
    suite: Option<PathBuf>,

    /// Prints the built-in suite as JSON, then exits.
    #[arg(long, conflicts_with = "suite")]
    dump_suite: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();
    let args = Args::parse();

    let stdout = io::stdout();
    if args.dump_suite {
        serde_json::to_writer_pretty(stdout.lock(), &Suite::default())
            .context("cannot write suite")?;
        println!();
        return Ok(());
    }

    let suite = match args.suite {
        Some(path) => Suite::from_path(&path)
            .with_context(|| format!("cannot load suite {}", path.display()))?,
        None => Suite::default(),
    };

    let harness = Harness::new(CRoaringMeter::new(), RoaringRsMeter::new());
    let mut reporter = Reporter::new(
        stdout.lock(),
        harness.baseline().name(),
        harness.candidate().name(),
    );
    let outcomes = harness
        .run(&suite, &mut reporter)
        .context("comparison aborted")?;
    log::info!("{} scenarios compared", outcomes.len());

    Ok(())
}
