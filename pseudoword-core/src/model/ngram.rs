use std::fmt;

/// Marker prepended to every training word (ASCII STX).
pub const BEGIN: char = '\u{2}';

/// Marker appended to every training word (ASCII ETX).
pub const END: char = '\u{3}';

/// Returns `true` if `c` is one of the two word-boundary markers.
pub fn is_sentinel(c: char) -> bool {
	c == BEGIN || c == END
}

/// A fixed-length character sequence used both as a table key and as a
/// generation state.
///
/// The length is the model order `n`, counted in `char`s. The
/// `BEGIN`/`END` markers encode the start and end of a word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NGram(String);

impl NGram {
	/// Builds an n-gram from a window of characters.
	pub fn from_chars(chars: &[char]) -> Self {
		Self(chars.iter().collect())
	}

	/// Splits `BEGIN + word + END` into its contiguous n-grams, in order.
	///
	/// Returns an empty list when the wrapped word is shorter than `n`.
	pub fn extract(word: &str, n: usize) -> Vec<NGram> {
		let wrapped: Vec<char> = std::iter::once(BEGIN)
			.chain(word.chars())
			.chain(std::iter::once(END))
			.collect();
		if n == 0 || wrapped.len() < n {
			return Vec::new();
		}
		wrapped.windows(n).map(Self::from_chars).collect()
	}

	/// An n-gram is a valid start state when it opens with `BEGIN`.
	pub fn is_initial(&self) -> bool {
		self.0.starts_with(BEGIN)
	}

	/// A walk stops on a state ending with `END`.
	pub fn is_terminal(&self) -> bool {
		self.0.ends_with(END)
	}

	/// The character this state contributes to a word when entered.
	pub fn last_char(&self) -> Option<char> {
		self.0.chars().next_back()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Length in characters (the model order).
	pub fn len(&self) -> usize {
		self.0.chars().count()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for NGram {
	fn from(s: &str) -> Self {
		Self(s.to_owned())
	}
}

impl fmt::Display for NGram {
	/// Renders the markers as `^` and `$` for readable logs.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in self.0.chars() {
			match c {
				BEGIN => f.write_str("^")?,
				END => f.write_str("$")?,
				c => write!(f, "{c}")?,
			}
		}
		Ok(())
	}
}
