//! Drives a search executable over every dataset and algorithm.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Local;

use crate::bench::report::{ReportWriter, parse_line};
use crate::error::{Result, WordhoodError};

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Directory holding one subdirectory per dataset.
    pub data_dir: PathBuf,
    /// Search executable to benchmark.
    pub executable: PathBuf,
    /// Directory the CSV reports are written to (created if missing).
    pub output_dir: PathBuf,
    /// Directory holding `<dataset>/performance_queries`.
    pub query_dir: PathBuf,
    /// Number of results per query, passed through verbatim.
    pub num_results: String,
    pub iterations: usize,
    pub datasets: Vec<String>,
    pub algorithms: Vec<String>,
    /// Ranking function selector passed to the executable.
    pub ranking: String,
    /// Command run before each algorithm switch; empty disables it.
    pub purge_command: Vec<String>,
}

impl BenchmarkConfig {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        executable: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        query_dir: impl Into<PathBuf>,
        num_results: impl Into<String>,
    ) -> Self {
        BenchmarkConfig {
            data_dir: data_dir.into(),
            executable: executable.into(),
            output_dir: output_dir.into(),
            query_dir: query_dir.into(),
            num_results: num_results.into(),
            iterations: 5,
            datasets: vec![
                "imdb".to_string(),
                "yelp".to_string(),
                "cnn_dailymail".to_string(),
            ],
            algorithms: vec!["inverted".to_string(), "trigram".to_string()],
            ranking: "bm25".to_string(),
            purge_command: vec!["sudo".to_string(), "purge".to_string()],
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_datasets(mut self, datasets: Vec<String>) -> Self {
        self.datasets = datasets;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<String>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_ranking(mut self, ranking: impl Into<String>) -> Self {
        self.ranking = ranking.into();
        self
    }

    pub fn with_purge_command(mut self, purge_command: Vec<String>) -> Self {
        self.purge_command = purge_command;
        self
    }
}

/// Paths of the three CSV reports of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkFiles {
    pub build: PathBuf,
    pub footprint: PathBuf,
    pub query: PathBuf,
}

impl BenchmarkFiles {
    pub fn new(output_dir: &Path, timestamp: &str) -> Self {
        BenchmarkFiles {
            build: output_dir.join(format!("build_{timestamp}.csv")),
            footprint: output_dir.join(format!("footprint_{timestamp}.csv")),
            query: output_dir.join(format!("query_{timestamp}.csv")),
        }
    }
}

pub struct BenchmarkHarness {
    config: BenchmarkConfig,
}

impl BenchmarkHarness {
    pub fn new(config: BenchmarkConfig) -> Self {
        BenchmarkHarness { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run every combination and return the report paths.
    ///
    /// Nothing is retried. An executable that cannot be started aborts the
    /// run; one that exits unsuccessfully is logged and its output is still
    /// recorded.
    pub fn run(&self) -> Result<BenchmarkFiles> {
        fs::create_dir_all(&self.config.output_dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let files = BenchmarkFiles::new(&self.config.output_dir, &timestamp);
        let mut writer = ReportWriter::create(&files.build, &files.footprint, &files.query)?;

        for iteration in 0..self.config.iterations {
            log::debug!("iteration {} of {}", iteration + 1, self.config.iterations);
            for algorithm in &self.config.algorithms {
                self.purge_cache();

                for dataset in &self.config.datasets {
                    log::info!("{algorithm} on {dataset}");
                    let stdout = self.run_once(algorithm, dataset)?;
                    for line in stdout.lines() {
                        writer.record(dataset, algorithm, &parse_line(line))?;
                    }
                }
            }
        }

        writer.flush()?;
        Ok(files)
    }

    /// Arguments passed to the executable for one dataset and algorithm.
    pub fn command_args(&self, algorithm: &str, dataset: &str) -> Vec<OsString> {
        let query_path = self
            .config
            .query_dir
            .join(dataset)
            .join("performance_queries");

        vec![
            "-d".into(),
            self.config.data_dir.join(dataset).into_os_string(),
            "-a".into(),
            algorithm.into(),
            "-s".into(),
            self.config.ranking.as_str().into(),
            "-n".into(),
            self.config.num_results.as_str().into(),
            "-q".into(),
            query_path.into_os_string(),
            "-o".into(),
            algorithm.into(),
        ]
    }

    fn run_once(&self, algorithm: &str, dataset: &str) -> Result<String> {
        let output = Command::new(&self.config.executable)
            .args(self.command_args(algorithm, dataset))
            .output()
            .map_err(|e| {
                WordhoodError::benchmark(format!(
                    "failed to run {}: {e}",
                    self.config.executable.display()
                ))
            })?;

        if !output.status.success() {
            log::warn!(
                "{} exited with {} for {algorithm} on {dataset}",
                self.config.executable.display(),
                output.status
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn purge_cache(&self) {
        let Some((program, args)) = self.config.purge_command.split_first() else {
            return;
        };

        match Command::new(program).args(args).status() {
            Ok(status) if status.success() => {}
            Ok(status) => log::warn!("cache purge command exited with {status}"),
            Err(e) => log::warn!("failed to run cache purge command {program:?}: {e}"),
        }
    }
}
