//! Error types for the pseudoword crate

use thiserror::Error;

/// Errors raised while building a model or generating words from it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	#[error("invalid configuration: n must be >= 2, got {n}")]
	InvalidConfig { n: usize },

	#[error("model has no start states (the corpus produced no usable n-grams)")]
	EmptyModel,

	#[error("invalid prefix {prefix:?}: {reason}")]
	InvalidPrefix { prefix: String, reason: PrefixError },

	#[error("state {state:?} was never observed during training")]
	UnknownState { state: String },

	/// The sampler received no candidates.
	///
	/// A model built by `NGramModel::build` never triggers this; seeing it
	/// means a table invariant was broken.
	#[error("cannot sample from an empty distribution")]
	EmptyDistribution,

	#[error("generation exceeded the limit of {limit} steps")]
	GenerationOverrun { limit: usize },

	#[error("probability {value} must be in [0, 1)")]
	InvalidProbability { value: f64 },

	#[error("failed to {operation}: {source}")]
	Io {
		operation: String,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid tokenizer pattern: {0}")]
	Pattern(#[from] regex::Error),
}

/// Why a caller prefix cannot start a walk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
	#[error("at least {min_len} character(s) required, got {len}")]
	TooShort { min_len: usize, len: usize },

	#[error("contains a word boundary marker")]
	Marker,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
