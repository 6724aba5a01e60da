use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Accumulator of letter occurrences over a training corpus.
///
/// A `LetterCounts` stores, for each lower-case letter `a`-`z`, how many
/// times it was observed in the ingested text. Characters outside `a`-`z`
/// (after case-folding) are ignored.
///
/// ## Responsibilities
/// - Accumulate letter occurrences during corpus ingestion
/// - Merge with another accumulator (parallel ingestion support)
/// - Report totals and per-letter counts for alphabet generation
///
/// ## Invariants
/// - Every key is a lower-case ASCII letter
/// - Every stored count is strictly positive; absent letters count as zero
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LetterCounts {
	/// Occurrences indexed by lower-case letter.
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: HashMap<char, u64>,
}

impl LetterCounts {
	/// Creates an empty accumulator.
	pub fn new() -> Self {
		Self { counts: HashMap::new() }
	}

	/// Ingests a piece of text.
	///
	/// - Case-folds to lower case before counting.
	/// - Ignores every character outside `a`-`z`.
	pub fn add_text(&mut self, text: &str) {
		for c in text.chars() {
			for lower in c.to_lowercase() {
				if lower.is_ascii_lowercase() {
					*self.counts.entry(lower).or_insert(0) += 1;
				}
			}
		}
	}

	/// Returns the count for a single letter (zero if never observed).
	pub fn count(&self, letter: char) -> u64 {
		self.counts.get(&letter).copied().unwrap_or(0)
	}

	/// Returns the total number of counted letters.
	pub fn total(&self) -> u64 {
		self.counts.values().sum()
	}

	/// Returns true if no letter has been observed.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Returns the observed letters with their counts, in lexicographic order.
	///
	/// Lexicographic ordering is what the alphabet generator relies on to
	/// keep its output monotonically non-decreasing.
	pub fn sorted_counts(&self) -> Vec<(char, u64)> {
		let mut entries: Vec<(char, u64)> = self.counts.iter().map(|(c, n)| (*c, *n)).collect();
		entries.sort_by_key(|(c, _)| *c);
		entries
	}

	/// Merges another accumulator into this one.
	///
	/// Counts for matching letters are summed. Intended for parallel
	/// ingestion, where multiple partial accumulators are combined.
	pub fn merge(&mut self, other: &Self) {
		for (letter, occurrence) in &other.counts {
			*self.counts.entry(*letter).or_insert(0) += *occurrence;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn counts_of(words: &[&str]) -> LetterCounts {
		let mut counts = LetterCounts::new();
		for word in words {
			counts.add_text(word);
		}
		counts
	}

	#[test]
	fn ignores_non_letters() {
		assert!(counts_of(&[""]).is_empty());
		assert!(counts_of(&["1"]).is_empty());
		assert!(counts_of(&["12345"]).is_empty());
		assert!(counts_of(&["!@#$%"]).is_empty());
	}

	#[test]
	fn counts_single_letters() {
		let counts = counts_of(&["a"]);
		assert_eq!(counts.count('a'), 1);
		assert_eq!(counts.total(), 1);

		let counts = counts_of(&["aa"]);
		assert_eq!(counts.count('a'), 2);

		let counts = counts_of(&["ab"]);
		assert_eq!(counts.count('a'), 1);
		assert_eq!(counts.count('b'), 1);
	}

	#[test]
	fn counts_words_and_folds_case() {
		// "hello world" split across entries, with punctuation and upper case
		for corpus in [
			vec!["hello world"],
			vec!["hello, world!"],
			vec!["hello", "world"],
			vec!["Hello, ", "World!"],
		] {
			let words: Vec<&str> = corpus.iter().copied().collect();
			let counts = counts_of(&words);
			assert_eq!(counts.count('h'), 1);
			assert_eq!(counts.count('e'), 1);
			assert_eq!(counts.count('l'), 3);
			assert_eq!(counts.count('o'), 2);
			assert_eq!(counts.count('w'), 1);
			assert_eq!(counts.count('r'), 1);
			assert_eq!(counts.count('d'), 1);
			assert_eq!(counts.total(), 10);
		}
	}

	#[test]
	fn merge_matches_sequential_counting() {
		let mut left = counts_of(&["hello"]);
		let right = counts_of(&["world"]);
		left.merge(&right);

		let sequential = counts_of(&["hello", "world"]);
		assert_eq!(left.sorted_counts(), sequential.sorted_counts());
	}

	#[test]
	fn sorted_counts_are_lexicographic() {
		let counts = counts_of(&["zebra"]);
		let letters: Vec<char> = counts.sorted_counts().iter().map(|(c, _)| *c).collect();
		assert_eq!(letters, vec!['a', 'b', 'e', 'r', 'z']);
	}
}
