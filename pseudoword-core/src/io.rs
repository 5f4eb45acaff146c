use std::fs::File;
use std::io::Read;
use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

/// Reads a whole text file into memory.
fn read_file<P: AsRef<Path>>(filename: P) -> Result<String> {
	let filename = filename.as_ref();
	let mut contents = String::new();
	File::open(filename)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| Error::Io {
			operation: format!("read {}", filename.display()),
			source,
		})?;
	Ok(contents)
}

/// Splits text into lowercase words.
///
/// - Any run of non-word characters (`\W+`) separates two words
/// - Empty pieces are dropped
///
/// Example: `"Don't panic!"` → `["don", "t", "panic"]`
pub fn tokenize(text: &str) -> Result<Vec<String>> {
	let separator = Regex::new(r"\W+")?;
	Ok(separator
		.split(text)
		.filter(|word| !word.is_empty())
		.map(str::to_lowercase)
		.collect())
}

/// Gathers the word samples of a dictionary (or any text) file.
pub fn load_words<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let words = tokenize(&read_file(&filename)?)?;
	log::info!("loaded {} words from {}", words.len(), filename.as_ref().display());
	Ok(words)
}
