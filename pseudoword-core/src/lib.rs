//! Pronounceable pseudoword generation library.
//!
//! This crate learns a character-level Markov model from a list of real
//! words and samples new words from it:
//! - Corpus loading and tokenization
//! - N-gram transition tables with start-state weights
//! - Weighted sampling driven by an injected, seedable RNG
//! - Compound words and avoidance of words already in the corpus
//!
//! ```
//! use pseudoword_core::model::ngram_model::NGramModel;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let model = NGramModel::build(["test"], 3).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! assert_eq!(model.generate(&mut rng, None).unwrap(), "test");
//! ```

/// Crate error type and `Result` alias.
pub mod error;

/// Core n-gram model and generation logic.
pub mod model;

/// Corpus loading (file reading and tokenization).
pub mod io;

pub use error::{Error, PrefixError, Result};
pub use model::generator::Generator;
pub use model::ngram_model::NGramModel;
pub use model::prediction_input::PredictionInput;
