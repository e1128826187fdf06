//! A library for generating and judging seven-letter word puzzles.
//!
//! A puzzle consists of seven distinct lowercase letters, one of which is the
//! *required* (center) letter. A submission is accepted if it is long enough,
//! uses only puzzle letters (repeats allowed), and contains the required
//! letter. A word that uses all seven letters at least once is a *starweave*
//! and earns a bonus.
//!
//! The typical flow is: load a [`Corpus`] from a word list, call [`generate`]
//! with an explicit seed to obtain a [`Puzzle`], then judge live submissions
//! with [`Puzzle::judge`] or the free functions in [`rules`].
//!
//! ```
//! use starweave::*;
//!
//! let corpus = Corpus::from_iterator(vec![
//!     "bluegrab", "algebra", "garble", "burglar", "barge", "gable", "bagel",
//!     "beagle", "agree", "gurgle", "blue", "glue",
//! ]);
//! let options = GeneratorOptions {
//!     min_answers: 5,
//!     ..GeneratorOptions::default()
//! };
//!
//! let puzzle = generate(&corpus, 42, &options).unwrap();
//!
//! assert_eq!(puzzle.letters().len(), 7);
//! assert!(puzzle.judge("barge").is_some());
//! assert!(puzzle.judge("zzzz").is_none());
//! ```

mod data;
mod generator;
mod puzzle;
pub mod rules;

pub use data::Corpus;
pub use generator::*;
pub use puzzle::*;
