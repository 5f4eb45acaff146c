use rand::Rng;

use super::ngram::NGram;
use super::sampler;
use crate::error::Result;

/// A predecessor n-gram together with every successor observed after it.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - Every successor overlaps `key` by `n - 1` characters
/// - Each weight is strictly positive
/// - Successors keep the order in which they were first observed
#[derive(Clone, Debug)]
pub struct State {
	key: NGram,
	/// Example: [("est", 42), ("esa", 3)]
	transitions: Vec<(NGram, usize)>,
}

impl State {
	/// Creates a new state with no outgoing transitions.
	pub fn new(key: NGram) -> Self {
		Self { key, transitions: Vec::new() }
	}

	pub fn key(&self) -> &NGram {
		&self.key
	}

	/// Records one occurrence of the adjacency `key -> next`.
	///
	/// Successor lists stay short (bounded by the alphabet size), so a
	/// linear scan beats hashing here.
	pub fn add_transition(&mut self, next: &NGram) {
		match self.transitions.iter_mut().find(|(ngram, _)| ngram == next) {
			Some((_, weight)) => *weight += 1,
			None => self.transitions.push((next.clone(), 1)),
		}
	}

	/// Outgoing transitions, in first-observed order.
	pub fn transitions(&self) -> &[(NGram, usize)] {
		&self.transitions
	}

	/// Sum of all outgoing weights.
	pub fn total(&self) -> usize {
		self.transitions.iter().map(|(_, weight)| weight).sum()
	}

	/// Samples the next state proportionally to the observed counts.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&NGram> {
		sampler::choose(rng, &self.transitions)
	}
}
