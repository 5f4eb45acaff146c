use std::collections::{HashMap, HashSet};

use rand::Rng;

use super::ngram::{BEGIN, END, NGram, is_sentinel};
use super::sampler;
use super::state::State;
use crate::error::{Error, PrefixError, Result};

/// Default bound on the number of transitions taken by a single walk.
pub const DEFAULT_STEP_LIMIT: usize = 10_000;

/// Character-level n-gram model of words.
///
/// The `NGramModel` stores, for every n-gram observed in the training
/// words, the n-grams that followed it and how often. Words are generated
/// by walking this table from a start state until a state ending with the
/// end marker is reached.
///
/// # Invariants
/// - `n` is always >= 2
/// - Every state has at least one transition, all weights >= 1
/// - `start_states` lists exactly the states whose key begins with `BEGIN`,
///   weighted by their total outgoing count
/// - The tables are never modified after `build`
#[derive(Clone, Debug)]
pub struct NGramModel {
	/// The order of the model (number of characters in the n-gram)
	n: usize,

	/// States in first-observed order
	states: Vec<State>,

	/// Position of each state in `states`
	index: HashMap<NGram, usize>,

	start_states: Vec<(NGram, usize)>,

	/// Distinct training words
	vocabulary: HashSet<String>,

	step_limit: usize,
}

impl NGramModel {
	/// Learns a model of order `n` from a sequence of words.
	///
	/// Each word is wrapped in the `BEGIN`/`END` markers and cut into
	/// overlapping n-grams; every adjacent pair of n-grams is counted as one
	/// transition.
	///
	/// # Notes
	/// - Words too short to produce two n-grams add nothing.
	/// - Words containing a marker character are skipped with a warning.
	/// - A corpus without a single transition gives an empty but valid
	///   model; generating from it fails with `EmptyModel`.
	///
	/// # Errors
	/// Returns `InvalidConfig` if `n < 2`.
	pub fn build<I, S>(tokens: I, n: usize) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		if n < 2 {
			return Err(Error::InvalidConfig { n });
		}

		let mut model = Self {
			n,
			states: Vec::new(),
			index: HashMap::new(),
			start_states: Vec::new(),
			vocabulary: HashSet::new(),
			step_limit: DEFAULT_STEP_LIMIT,
		};

		let mut skipped = 0usize;
		for token in tokens {
			let token = token.as_ref();
			if token.chars().any(is_sentinel) {
				log::warn!("skipping token {token:?}: contains a word boundary marker");
				skipped += 1;
				continue;
			}
			model.add_word(token);
		}

		model.start_states = model
			.states
			.iter()
			.filter(|state| state.key().is_initial())
			.map(|state| (state.key().clone(), state.total()))
			.collect();

		log::debug!(
			"built {}-gram model: {} states, {} start states, {} words ({} skipped)",
			n,
			model.states.len(),
			model.start_states.len(),
			model.vocabulary.len(),
			skipped
		);

		Ok(model)
	}

	fn add_word(&mut self, word: &str) {
		self.vocabulary.insert(word.to_owned());

		let ngrams = NGram::extract(word, self.n);
		for pair in ngrams.windows(2) {
			let position = match self.index.get(&pair[0]) {
				Some(&position) => position,
				None => {
					self.states.push(State::new(pair[0].clone()));
					self.index.insert(pair[0].clone(), self.states.len() - 1);
					self.states.len() - 1
				}
			};
			self.states[position].add_transition(&pair[1]);
		}
	}

	/// Replaces the bound on transitions per generated word.
	pub fn with_step_limit(mut self, step_limit: usize) -> Self {
		self.step_limit = step_limit;
		self
	}

	pub fn order(&self) -> usize {
		self.n
	}

	pub fn step_limit(&self) -> usize {
		self.step_limit
	}

	/// Number of distinct predecessor n-grams.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// `true` when training produced no transition at all.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Looks up a state without creating it.
	pub fn state(&self, key: &NGram) -> Option<&State> {
		self.index.get(key).map(|&position| &self.states[position])
	}

	/// Outgoing transitions of `key`, or `None` if it was never a predecessor.
	pub fn transitions(&self, key: &NGram) -> Option<&[(NGram, usize)]> {
		self.state(key).map(State::transitions)
	}

	/// All states, in first-observed order.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.states.iter()
	}

	/// Initial n-grams with their aggregate weight.
	pub fn start_states(&self) -> &[(NGram, usize)] {
		&self.start_states
	}

	/// Returns `true` if `word` was one of the training words.
	pub fn contains_word(&self, word: &str) -> bool {
		self.vocabulary.contains(word)
	}

	/// Generates one word by a Markov walk over the transition table.
	///
	/// Without a prefix the first state is drawn from the start states.
	/// With a prefix the word starts with the whole prefix, and the walk
	/// continues from the last `n` characters of `BEGIN + prefix`.
	///
	/// # Errors
	/// - `EmptyModel` if no prefix is given and the model has no start state
	/// - `InvalidPrefix` if the prefix has fewer than `n - 1` characters or
	///   contains a marker
	/// - `UnknownState` if the walk reaches an n-gram never seen as a
	///   predecessor (only possible through a prefix)
	/// - `GenerationOverrun` if the walk takes more than `step_limit` steps
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, prefix: Option<&str>) -> Result<String> {
		let (mut word, start) = match prefix {
			Some(prefix) => self.prefixed_start(prefix)?,
			None => {
				if self.start_states.is_empty() {
					return Err(Error::EmptyModel);
				}
				let start = sampler::choose(rng, &self.start_states)?;
				(start.as_str().to_owned(), start.clone())
			}
		};

		let mut current = &start;
		let mut steps = 0;
		while !current.is_terminal() {
			if steps == self.step_limit {
				return Err(Error::GenerationOverrun { limit: self.step_limit });
			}

			let next = self
				.state(current)
				.ok_or_else(|| Error::UnknownState { state: current.to_string() })?
				.predict(rng)?;
			if let Some(c) = next.last_char() {
				word.push(c);
			}
			current = next;
			steps += 1;
		}

		let word = word.strip_prefix(BEGIN).unwrap_or(word.as_str());
		let word = word.strip_suffix(END).unwrap_or(word);
		log::trace!("generated {word:?} in {steps} steps");
		Ok(word.to_owned())
	}

	/// Validates a caller prefix and derives the initial buffer and state.
	fn prefixed_start(&self, prefix: &str) -> Result<(String, NGram)> {
		let min_len = self.n - 1;
		let len = prefix.chars().count();
		let reason = if len < min_len {
			Some(PrefixError::TooShort { min_len, len })
		} else if prefix.chars().any(is_sentinel) {
			Some(PrefixError::Marker)
		} else {
			None
		};
		if let Some(reason) = reason {
			return Err(Error::InvalidPrefix { prefix: prefix.to_owned(), reason });
		}

		let mut word = String::with_capacity(prefix.len() + 2);
		word.push(BEGIN);
		word.push_str(prefix);

		let chars: Vec<char> = word.chars().collect();
		let state = NGram::from_chars(&chars[chars.len() - self.n..]);
		Ok((word, state))
	}
}
