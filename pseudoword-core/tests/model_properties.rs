use std::collections::{BTreeMap, HashSet};

use pseudoword_core::model::ngram::{BEGIN, END};
use pseudoword_core::{Error, NGramModel};
use rand::{SeedableRng, rngs::StdRng};

const CORPUS: &[&str] = &[
	"stone", "stare", "start", "story", "strong", "string", "train", "trace", "treat", "tree",
	"rose", "rosin", "art", "arts", "tonic", "ironic", "trio", "tires", "rest", "nest",
];

/// Every (predecessor, successor, weight) triple, order-independent.
fn table_snapshot(model: &NGramModel) -> BTreeMap<(String, String), usize> {
	model
		.states()
		.flat_map(|state| {
			state
				.transitions()
				.iter()
				.map(move |(next, weight)| ((state.key().to_string(), next.to_string()), *weight))
		})
		.collect()
}

#[test]
fn generated_words_use_only_corpus_characters() {
	let alphabet: HashSet<char> = CORPUS.iter().flat_map(|w| w.chars()).collect();

	for n in 2..=5 {
		let model = NGramModel::build(CORPUS, n).unwrap();
		let mut rng = StdRng::seed_from_u64(n as u64);
		for _ in 0..500 {
			let word = model.generate(&mut rng, None).unwrap();
			assert!(!word.is_empty(), "empty word for n={n}");
			assert!(!word.contains(BEGIN) && !word.contains(END), "marker leaked in {word:?}");
			assert!(word.chars().all(|c| alphabet.contains(&c)), "foreign character in {word:?}");
		}
	}
}

#[test]
fn seeded_runs_are_reproducible() {
	let run = |seed: u64| {
		let model = NGramModel::build(CORPUS, 3).unwrap();
		let mut rng = StdRng::seed_from_u64(seed);
		(0..100)
			.map(|_| model.generate(&mut rng, None).unwrap())
			.collect::<Vec<_>>()
	};

	assert_eq!(run(31337), run(31337));
}

#[test]
fn construction_ignores_token_order() {
	let mut reversed = CORPUS.to_vec();
	reversed.reverse();

	let forward = NGramModel::build(CORPUS, 3).unwrap();
	let again = NGramModel::build(CORPUS, 3).unwrap();
	let backward = NGramModel::build(&reversed, 3).unwrap();

	assert_eq!(table_snapshot(&forward), table_snapshot(&again));
	assert_eq!(table_snapshot(&forward), table_snapshot(&backward));

	let starts = |model: &NGramModel| {
		model
			.start_states()
			.iter()
			.map(|(ngram, weight)| (ngram.to_string(), *weight))
			.collect::<BTreeMap<_, _>>()
	};
	assert_eq!(starts(&forward), starts(&backward));
}

#[test]
fn start_weights_sum_outgoing_counts() {
	let model = NGramModel::build(CORPUS, 2).unwrap();
	let total_start: usize = model.start_states().iter().map(|(_, weight)| weight).sum();
	assert_eq!(total_start, CORPUS.len());

	for (ngram, weight) in model.start_states() {
		assert!(ngram.is_initial());
		assert_eq!(model.state(ngram).unwrap().total(), *weight);
	}
}

#[test]
fn prefix_constrains_output() {
	let model = NGramModel::build(["test", "team"], 2).unwrap();
	let mut rng = StdRng::seed_from_u64(8);
	for _ in 0..200 {
		assert!(model.generate(&mut rng, Some("te")).unwrap().starts_with("te"));
	}
}

#[test]
fn empty_corpus_fails_at_generation() {
	let model = NGramModel::build(Vec::<&str>::new(), 2).unwrap();
	assert!(model.is_empty());

	let mut rng = StdRng::seed_from_u64(0);
	assert!(matches!(model.generate(&mut rng, None), Err(Error::EmptyModel)));
}

#[test]
fn order_above_every_word_gives_inert_model() {
	let model = NGramModel::build(["cat"], 5).unwrap();
	assert!(model.is_empty());

	let mut rng = StdRng::seed_from_u64(0);
	assert!(matches!(model.generate(&mut rng, None), Err(Error::EmptyModel)));
}

#[test]
fn empty_prefix_is_rejected() {
	let model = NGramModel::build(["cat"], 2).unwrap();
	let mut rng = StdRng::seed_from_u64(0);
	assert!(matches!(model.generate(&mut rng, Some("")), Err(Error::InvalidPrefix { .. })));
}

#[test]
fn model_is_shared_across_threads() {
	let model = NGramModel::build(CORPUS, 3).unwrap();

	let batches: Vec<Vec<String>> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4u64)
			.map(|seed| {
				let model = &model;
				scope.spawn(move || {
					let mut rng = StdRng::seed_from_u64(seed);
					(0..50)
						.map(|_| model.generate(&mut rng, None).unwrap())
						.collect::<Vec<_>>()
				})
			})
			.collect();
		handles.into_iter().map(|handle| handle.join().unwrap()).collect()
	});

	for (seed, batch) in batches.iter().enumerate() {
		let mut rng = StdRng::seed_from_u64(seed as u64);
		let expected: Vec<String> = (0..50).map(|_| model.generate(&mut rng, None).unwrap()).collect();
		assert_eq!(batch, &expected);
	}
}
