//! Top-level module for the pseudoword model.
//!
//! This module provides a character-level Markov word model, including:
//! - N-gram states and word boundary markers (`NGram`, `BEGIN`, `END`)
//! - Weighted random sampling (`sampler::choose`)
//! - The learned transition tables and the generation walk (`NGramModel`)
//! - Generation parameters (`PredictionInput`)
//! - A seeded, high-level generation interface (`Generator`)

/// High-level interface producing batches of (compound) pseudowords
/// from a model and a seedable RNG.
pub mod generator;

/// Fixed-order character n-gram model (`n >= 2`).
///
/// Handles corpus ingestion, transition counting and the Markov walk
/// that produces one word.
pub mod ngram_model;

/// N-gram key type and the word boundary markers.
pub mod ngram;

/// Weighted random choice over `(item, weight)` pairs.
pub mod sampler;

/// A predecessor n-gram with its weighted successors.
pub mod state;

/// Batch generation parameters: count, prefix, compounding and retries.
pub mod prediction_input;
