//! Command implementation for the Wordhood CLI.

use std::time::Instant;

use crate::alphabet::Alphabet;
use crate::bench::{BenchmarkConfig, BenchmarkFiles, BenchmarkHarness};
use crate::cli::args::{BenchmarkArgs, ConvertArgs, WordhoodArgs};
use crate::cli::output::{GenerationSummary, output_summary, write_words};
use crate::convert::TableConverter;
use crate::error::{Result, WordhoodError};
use crate::neighborhood::{Distance, NeighborhoodConfig, NeighborhoodGenerator};

/// Validate the arguments, generate the neighborhood and write it out.
///
/// The distance and alphabet are validated before anything is generated or
/// written, so a rejected invocation leaves the output file untouched.
pub fn execute_command(args: WordhoodArgs) -> Result<()> {
    let config = build_config(&args)?;
    let generator = NeighborhoodGenerator::new(config)?;

    if !generator.config().alphabet.covers(&args.word) {
        log::warn!(
            "word {:?} contains characters outside the alphabet {:?}",
            args.word,
            args.alphabet
        );
    }

    log::info!(
        "generating neighborhood of {:?} at distance {}",
        args.word,
        generator.config().distance
    );

    let start_time = Instant::now();
    let neighborhood = generator.generate_with_stats(&args.word);
    let duration = start_time.elapsed();

    write_words(&args.output_file, &neighborhood.words, args.sort)?;
    log::info!(
        "wrote {} words to {}",
        neighborhood.words.len(),
        args.output_file.display()
    );

    if args.summary {
        let config = generator.config();
        let summary = GenerationSummary {
            word: args.word.clone(),
            distance: config.distance.get(),
            alphabet: config.alphabet.to_string(),
            mode: config.mode.to_string(),
            output_file: args.output_file.to_string_lossy().to_string(),
            total_words: neighborhood.words.len(),
            duration_ms: duration.as_millis() as u64,
            levels: neighborhood.levels,
        };
        output_summary(&summary, &args)?;
    }

    Ok(())
}

/// Turn parsed arguments into a generator configuration.
pub fn build_config(args: &WordhoodArgs) -> Result<NeighborhoodConfig> {
    let distance = Distance::parse(&args.distance)?;
    let alphabet = Alphabet::new(&args.alphabet)?;

    let mut config = NeighborhoodConfig::new(distance)
        .with_alphabet(alphabet)
        .with_mode(args.mode.into())
        .with_parallel(args.parallel);
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }

    Ok(config)
}

/// Run the benchmark harness described by `args`.
pub fn run_benchmark(args: BenchmarkArgs) -> Result<BenchmarkFiles> {
    let harness = BenchmarkHarness::new(build_benchmark_config(&args)?);
    let files = harness.run()?;

    log::info!(
        "benchmark reports written to {}, {} and {}",
        files.build.display(),
        files.footprint.display(),
        files.query.display()
    );
    Ok(files)
}

/// Turn parsed benchmark arguments into a harness configuration.
pub fn build_benchmark_config(args: &BenchmarkArgs) -> Result<BenchmarkConfig> {
    if args.datasets.is_empty() || args.algorithms.is_empty() {
        return Err(WordhoodError::invalid_argument(
            "at least one dataset and one algorithm are required",
        ));
    }

    let purge_command = args
        .cache_purge_command
        .split_whitespace()
        .map(str::to_string)
        .collect();

    Ok(BenchmarkConfig::new(
        &args.data,
        &args.executable,
        &args.output,
        &args.query,
        args.num_results.clone(),
    )
    .with_iterations(args.iterations)
    .with_datasets(args.datasets.clone())
    .with_algorithms(args.algorithms.clone())
    .with_ranking(args.ranking.clone())
    .with_purge_command(purge_command))
}

/// Convert the CSV table named by `args` to Parquet, returning the row count.
pub fn run_convert(args: ConvertArgs) -> Result<usize> {
    let converter = build_converter(&args)?;
    let rows = converter.convert_file(&args.input, &args.output)?;

    log::info!(
        "converted {} rows from {} to {}",
        rows,
        args.input.display(),
        args.output.display()
    );
    Ok(rows)
}

/// Turn parsed converter arguments into a [`TableConverter`].
pub fn build_converter(args: &ConvertArgs) -> Result<TableConverter> {
    if !args.delimiter.is_ascii() {
        return Err(WordhoodError::invalid_argument(format!(
            "delimiter must be a single ASCII character, got {:?}",
            args.delimiter
        )));
    }

    Ok(TableConverter::new(args.title.clone(), args.content.clone())
        .with_delimiter(args.delimiter as u8))
}
