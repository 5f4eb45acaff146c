use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::model::ngram_model::NGramModel;
use crate::model::prediction_input::PredictionInput;

/// High-level generator owning a model and its randomness source.
///
/// # Responsibilities
/// - Keep a learned `NGramModel` together with a seedable RNG
/// - Chain single words into compound words
/// - Retry words that already exist in the training corpus
///
/// The model is only read; several generators may share clones of it.
#[derive(Debug)]
pub struct Generator<R = StdRng> {
	model: NGramModel,
	rng: R,
}

impl Generator<StdRng> {
	/// Creates a generator, seeded for reproducible output when `seed` is set.
	pub fn new(model: NGramModel, seed: Option<u64>) -> Self {
		let rng = match seed {
			Some(value) => StdRng::seed_from_u64(value),
			None => StdRng::seed_from_u64(rand::random::<u64>()),
		};
		Self { model, rng }
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator drawing from a caller-provided RNG.
	pub fn with_rng(model: NGramModel, rng: R) -> Self {
		Self { model, rng }
	}

	pub fn model(&self) -> &NGramModel {
		&self.model
	}

	/// Generates a single word, see `NGramModel::generate`.
	pub fn generate(&mut self, prefix: Option<&str>) -> Result<String> {
		self.model.generate(&mut self.rng, prefix)
	}

	/// Generates a word, then keeps appending unprefixed words while a
	/// uniform draw falls below `compound_probability`.
	fn generate_compound(&mut self, prefix: Option<&str>, compound_probability: f64) -> Result<String> {
		let mut word = self.generate(prefix)?;
		while self.rng.random::<f64>() < compound_probability {
			word.push_str(&self.generate(None)?);
		}
		Ok(word)
	}

	/// Generates one (possibly compound) word, avoiding training words if possible.
	///
	/// # Behavior
	/// - Regenerates up to `nb_try` times while the result is a training word.
	/// - Returns the last attempt if every try produced a known word.
	pub fn predict(&mut self, input: &PredictionInput) -> Result<String> {
		let prefix = input.prefix.as_deref();
		let mut word = self.generate_compound(prefix, input.compound_probability())?;

		let mut nb_try = input.nb_try;
		while nb_try > 0 && self.model.contains_word(&word) {
			log::trace!("{word:?} is a training word, {nb_try} tries left");
			word = self.generate_compound(prefix, input.compound_probability())?;
			nb_try -= 1;
		}

		Ok(word)
	}

	/// Generates `input.count` words.
	///
	/// Stops at the first error; no partial batch is returned.
	pub fn predict_batch(&mut self, input: &PredictionInput) -> Result<Vec<String>> {
		(0..input.count).map(|_| self.predict(input)).collect()
	}
}
