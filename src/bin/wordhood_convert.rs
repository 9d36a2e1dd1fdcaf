//! Wordhood CSV to Parquet converter binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use wordhood::cli::args::ConvertArgs;
use wordhood::cli::commands::run_convert;

fn main() {
    let args = ConvertArgs::parse();

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

    let output = args.output.clone();
    match run_convert(args) {
        Ok(rows) => {
            println!("Wrote {rows} rows to {}", output.display());
            println!("Conversion successful!");
        }
        Err(e) => {
            eprintln!("An error occurred: {e}");
            process::exit(1);
        }
    }
}
