use crate::error::{Error, Result};

/// Input parameters for generating a batch of pseudowords.
///
/// # Responsibilities
/// - Track how many words to produce and how each one starts (`count`, `prefix`)
/// - Track how often words are chained into compounds (`compound_probability`)
/// - Track how hard to try avoiding words of the training corpus (`nb_try`)
///
/// # Invariants
/// - `compound_probability` is always in `[0, 1)`, so compounding stops
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionInput {
	/// Number of words to generate in a batch.
	pub count: usize,

	/// Every word starts with this prefix when set.
	pub prefix: Option<String>,

	/// Number of regenerations allowed while the word is a training word.
	/// 0 accepts the first word.
	pub nb_try: usize,

	/// Probability of appending one more word to the current one.
	compound_probability: f64,
}

impl Default for PredictionInput {
	fn default() -> Self {
		Self::new(10, None, 0)
	}
}

impl PredictionInput {
	/// Creates an input producing `count` words with no compounding.
	pub fn new(count: usize, prefix: Option<String>, nb_try: usize) -> Self {
		Self {
			count,
			prefix,
			nb_try,
			compound_probability: 0.0,
		}
	}

	/// Builder form of `set_compound_probability`.
	pub fn with_compound_probability(mut self, compound_probability: f64) -> Result<Self> {
		self.set_compound_probability(compound_probability)?;
		Ok(self)
	}

	/// Returns the current compound probability.
	pub fn compound_probability(&self) -> f64 {
		self.compound_probability
	}

	/// Sets the compound probability (0.0..1.0).
	///
	/// # Errors
	/// Returns `InvalidProbability` if the value is outside `[0, 1)`; a value
	/// of 1.0 would never stop appending words.
	pub fn set_compound_probability(&mut self, compound_probability: f64) -> Result<()> {
		if !(0.0..1.0).contains(&compound_probability) {
			return Err(Error::InvalidProbability { value: compound_probability });
		}
		self.compound_probability = compound_probability;
		Ok(())
	}
}
