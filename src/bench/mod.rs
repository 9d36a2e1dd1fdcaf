//! Benchmark harness for external full-text search executables.
//!
//! The harness runs a search executable once per (iteration, algorithm,
//! dataset) combination, classifies each line the executable prints, and
//! appends the values to three CSV files (build times, memory footprints
//! and per-query times).

pub mod harness;
pub mod report;

pub use harness::{BenchmarkConfig, BenchmarkFiles, BenchmarkHarness};
pub use report::{FootprintKind, OutputLine, ReportWriter, parse_line};
