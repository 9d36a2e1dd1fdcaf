//! Wordhood benchmark harness binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use wordhood::cli::args::BenchmarkArgs;
use wordhood::cli::commands::run_benchmark;

fn main() {
    let args = BenchmarkArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: BenchmarkArgs) -> anyhow::Result<()> {
    let executable = args.executable.display().to_string();
    let files = run_benchmark(args)
        .with_context(|| format!("benchmark of {executable} failed"))?;

    println!("Build times: {}", files.build.display());
    println!("Memory footprints: {}", files.footprint.display());
    println!("Query times: {}", files.query.display());
    Ok(())
}
