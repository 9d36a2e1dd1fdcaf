//! Level-by-level neighborhood expansion.
//!
//! Starting from the singleton frontier `{word}`, each level applies every
//! single-character edit to every word of the current frontier and collects
//! the results into a fresh set, which replaces the frontier. Words from
//! earlier levels are not remembered, and nothing is excluded from being
//! revisited: the source word itself comes back whenever an edit sequence of
//! the final length nets out to it.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use ahash::AHashSet;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::{Result, WordhoodError};
use crate::neighborhood::edits::single_edits;

/// A set of distinct words.
pub type WordSet = AHashSet<String>;

/// A validated edit-distance budget (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Distance(NonZeroUsize);

impl Distance {
    /// Create a distance budget, rejecting zero.
    pub fn new(value: usize) -> Result<Self> {
        NonZeroUsize::new(value)
            .map(Distance)
            .ok_or(WordhoodError::InvalidDistance)
    }

    /// Parse a distance from user input.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer of
    /// at least 1 is rejected; nothing is clamped.
    pub fn parse(input: &str) -> Result<Self> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| WordhoodError::InvalidDistance)?;
        if value < 1 {
            return Err(WordhoodError::InvalidDistance);
        }
        let value = usize::try_from(value).map_err(|_| WordhoodError::InvalidDistance)?;
        Self::new(value)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance(NonZeroUsize::MIN)
    }
}

impl FromStr for Distance {
    type Err = WordhoodError;

    fn from_str(s: &str) -> Result<Self> {
        Distance::parse(s)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the generator returns after the last level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionMode {
    /// Only the frontier reached after exactly `distance` levels.
    #[default]
    Frontier,
    /// The union of the frontiers of levels `1..=distance`.
    Cumulative,
}

impl fmt::Display for ExpansionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionMode::Frontier => write!(f, "frontier"),
            ExpansionMode::Cumulative => write!(f, "cumulative"),
        }
    }
}

/// Configuration for neighborhood generation.
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodConfig {
    /// Number of edit levels to expand.
    pub distance: Distance,
    /// Characters used for substitution and insertion.
    pub alphabet: Alphabet,
    /// Which words make up the result.
    pub mode: ExpansionMode,
    /// Spread per-word candidate generation across a thread pool.
    pub parallel: bool,
    /// Thread pool size when `parallel` is set (defaults to the CPU count).
    pub threads: Option<usize>,
}

impl NeighborhoodConfig {
    pub fn new(distance: Distance) -> Self {
        NeighborhoodConfig {
            distance,
            ..Default::default()
        }
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_mode(mut self, mode: ExpansionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Statistics for one expansion level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    /// 1-based level number.
    pub level: usize,
    /// Size of the frontier the level started from.
    pub input_words: usize,
    /// Candidates generated before deduplication.
    pub candidates: usize,
    /// Size of the frontier the level produced.
    pub frontier_size: usize,
}

/// The words produced by a generation run together with per-level stats.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    pub words: WordSet,
    pub levels: Vec<LevelStats>,
}

/// Generates edit neighborhoods according to a [`NeighborhoodConfig`].
pub struct NeighborhoodGenerator {
    config: NeighborhoodConfig,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl NeighborhoodGenerator {
    /// Create a generator. Builds a thread pool when `config.parallel` is set.
    pub fn new(config: NeighborhoodConfig) -> Result<Self> {
        let thread_pool = if config.parallel {
            let size = config.threads.unwrap_or_else(num_cpus::get);
            if size == 0 {
                return Err(WordhoodError::invalid_argument(
                    "thread count must be at least 1",
                ));
            }
            let pool = ThreadPoolBuilder::new()
                .num_threads(size)
                .thread_name(|i| format!("wordhood-level-{i}"))
                .build()
                .map_err(|e| WordhoodError::internal(format!("Failed to create thread pool: {e}")))?;
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(NeighborhoodGenerator {
            config,
            thread_pool,
        })
    }

    pub fn config(&self) -> &NeighborhoodConfig {
        &self.config
    }

    /// Generate the neighborhood of `word`.
    pub fn generate(&self, word: &str) -> WordSet {
        self.generate_with_stats(word).words
    }

    /// Generate the neighborhood of `word`, recording statistics per level.
    pub fn generate_with_stats(&self, word: &str) -> Neighborhood {
        let start = Instant::now();
        let distance = self.config.distance.get();

        let mut frontier = WordSet::default();
        frontier.insert(word.to_string());

        let mut accumulated = WordSet::default();
        let mut levels = Vec::with_capacity(distance);

        for level in 1..=distance {
            let input_words = frontier.len();
            let (next, candidates) = self.expand_level(&frontier);

            log::debug!(
                "level {level}: {input_words} words -> {candidates} candidates -> {} unique",
                next.len()
            );
            levels.push(LevelStats {
                level,
                input_words,
                candidates,
                frontier_size: next.len(),
            });

            if self.config.mode == ExpansionMode::Cumulative {
                accumulated.extend(next.iter().cloned());
            }
            frontier = next;
        }

        let words = match self.config.mode {
            ExpansionMode::Frontier => frontier,
            ExpansionMode::Cumulative => accumulated,
        };

        log::info!(
            "generated {} words for {word:?} at distance {distance} ({} mode) in {:?}",
            words.len(),
            self.config.mode,
            start.elapsed()
        );

        Neighborhood { words, levels }
    }

    /// Expand one level, returning the next frontier and the number of
    /// candidates generated before deduplication.
    fn expand_level(&self, frontier: &WordSet) -> (WordSet, usize) {
        let alphabet = &self.config.alphabet;
        match &self.thread_pool {
            Some(pool) => {
                let words: Vec<&String> = frontier.iter().collect();
                // The reduce completes before install returns, so no word of
                // the next level is expanded until this one is fully merged.
                pool.install(|| {
                    words
                        .par_iter()
                        .map(|word| expand_word(word, alphabet))
                        .reduce(
                            || (WordSet::default(), 0),
                            |(mut left, left_count), (mut right, right_count)| {
                                if left.len() < right.len() {
                                    std::mem::swap(&mut left, &mut right);
                                }
                                left.extend(right);
                                (left, left_count + right_count)
                            },
                        )
                })
            }
            None => {
                let mut next = WordSet::default();
                let mut candidates = 0;
                for word in frontier.iter() {
                    let (words, count) = expand_word(word, alphabet);
                    candidates += count;
                    next.extend(words);
                }
                (next, candidates)
            }
        }
    }
}

fn expand_word(word: &str, alphabet: &Alphabet) -> (WordSet, usize) {
    let chars: Vec<char> = word.chars().collect();
    let mut local = WordSet::default();
    let mut candidates = 0;
    for candidate in single_edits(&chars, alphabet) {
        candidates += 1;
        local.insert(candidate);
    }
    (local, candidates)
}

/// Expand `frontier` by one level using every single-character edit.
///
/// The returned set replaces the frontier; it does not include `frontier`.
pub fn expand(frontier: &WordSet, alphabet: &Alphabet) -> WordSet {
    let mut next = WordSet::default();
    for word in frontier.iter() {
        next.extend(expand_word(word, alphabet).0);
    }
    next
}

/// Return the frontier reached from `word` after exactly `distance` levels.
pub fn generate(word: &str, distance: Distance, alphabet: &Alphabet) -> WordSet {
    let mut frontier = WordSet::default();
    frontier.insert(word.to_string());
    for _ in 0..distance.get() {
        frontier = expand(&frontier, alphabet);
    }
    frontier
}
