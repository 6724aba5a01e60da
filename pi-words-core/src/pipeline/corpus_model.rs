use std::path::Path;
use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use super::letter_counts::LetterCounts;
use crate::io::{cache_path, corpus_name, read_lines};

/// A named training corpus reduced to its letter statistics.
///
/// This struct manages:
/// - `name`: the corpus identifier (file name without extension).
/// - `counts`: letter occurrences accumulated over the whole corpus.
///
/// Counting a large corpus is the expensive part of a search, so built
/// models are cached next to the source file in a compact binary form and
/// reloaded from the cache on subsequent runs.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CorpusModel {
	name: String,
	counts: LetterCounts,
}

impl CorpusModel {
	/// Builds a model from in-memory corpus entries.
	///
	/// No caching is involved; intended for programmatic corpora and tests.
	pub fn from_entries(name: &str, entries: &[String]) -> Self {
		let mut counts = LetterCounts::new();
		for entry in entries {
			counts.add_text(entry);
		}
		Self { name: name.to_owned(), counts }
	}

	/// Loads a `CorpusModel` from a text file, using a binary cache when present.
	///
	/// - `filepath` is the corpus text file; its stem becomes the model name.
	/// - A sibling `.bin` file is checked first and deserialized with
	///   `postcard` for fast loading.
	/// - Otherwise the text is counted in parallel and the cache is written.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		let binary_data_path = cache_path(&filepath, "bin")?;
		if binary_data_path.exists() {
			let bytes = std::fs::read(binary_data_path)?;
			return Ok(postcard::from_bytes(&bytes)?);
		}

		let name = corpus_name(&filepath)?;
		let counts = Self::count_corpus_file(&filepath)?;
		let model = Self { name, counts };

		let bytes = postcard::to_stdvec(&model)?;
		std::fs::write(binary_data_path, bytes)?;

		Ok(model)
	}

	/// Counts a corpus file's letters with multithreaded merging.
	///
	/// # Behavior
	/// - Splits input lines into chunks (based on CPU cores * factor).
	/// - Spawns threads to count letters for each chunk.
	/// - Merges all partial counts sequentially.
	///
	/// Merging is commutative, so the arrival order of partial counts
	/// does not affect the result.
	fn count_corpus_file<P: AsRef<Path>>(filename: P) -> Result<LetterCounts, Box<dyn std::error::Error>> {
		let lines = read_lines(&filename)?;
		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = (lines.len() + chunks - 1) / chunks;

		if lines.is_empty() {
			return Ok(LetterCounts::new());
		}

		let (tx, rx) = mpsc::channel();
		for chunk in lines.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();

			thread::spawn(move || {
				let mut partial_counts = LetterCounts::new();
				for line in chunk {
					partial_counts.add_text(&line);
				}
				tx.send(partial_counts).expect("Failed to send from thread");
			});
		}
		drop(tx);

		let mut final_counts = LetterCounts::new();
		for partial_counts in rx.iter() {
			final_counts.merge(&partial_counts);
		}

		Ok(final_counts)
	}

	/// Returns the corpus name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns a read-only reference to the accumulated letter counts.
	pub fn counts(&self) -> &LetterCounts {
		&self.counts
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_from_entries() {
		let entries = vec!["Hello, ".to_owned(), "World!".to_owned()];
		let model = CorpusModel::from_entries("greeting", &entries);
		assert_eq!(model.name(), "greeting");
		assert_eq!(model.counts().count('l'), 3);
		assert_eq!(model.counts().total(), 10);
	}

	#[test]
	fn serialization_round_trip() {
		let entries = vec!["the quick brown fox".to_owned()];
		let model = CorpusModel::from_entries("pangram", &entries);

		let bytes = postcard::to_stdvec(&model).expect("serialize");
		let restored: CorpusModel = postcard::from_bytes(&bytes).expect("deserialize");

		assert_eq!(restored.name(), model.name());
		assert_eq!(
			restored.counts().sorted_counts(),
			model.counts().sorted_counts()
		);
	}
}
