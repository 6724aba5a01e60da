use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use super::alphabet_generator::counts_to_alphabet;
use super::base_translator::convert_base;
use super::corpus_model::CorpusModel;
use super::digits_to_string::convert_digits_to_string;
use super::letter_counts::LetterCounts;
use super::pi_generator::compute_pi_in_hex;
use super::search_input::SearchInput;
use super::word_finder::get_substrings;
use crate::io;

/// Outcome of one pipeline run.
///
/// Besides the word-occurrence map, the generated alphabet and digit
/// sequence are reported for diagnostics.
#[derive(Serialize, Clone, Debug)]
pub struct SearchReport {
	/// The frequency-weighted alphabet the digits were rendered with.
	pub alphabet: String,

	/// π digits in the requested base, at the requested precision.
	pub digits: Vec<i32>,

	/// The digit sequence rendered as letters.
	pub haystack: String,

	/// First-occurrence offset of each found target word.
	pub occurrences: HashMap<String, usize>,
}

/// High-level searcher managing loaded corpus models.
///
/// # Responsibilities
/// - Load and manage multiple `CorpusModel`s
/// - Merge the letter counts of a selected corpus subset
/// - Run the full pipeline: alphabet, π digits, base translation,
///   rendering, word search
#[derive(Debug, Default)]
pub struct PiWordSearcher {
	models: HashMap<String, CorpusModel>,
}

impl PiWordSearcher {
	/// Creates a searcher by loading all `.txt` corpora from a directory.
	///
	/// # Parameters
	/// - `filepath`: Path to a directory containing corpus files.
	///   Both `"folder"` and `"folder/"` are accepted.
	///
	/// # Behavior
	/// - Lists all files with the `.txt` extension in the given directory.
	/// - Loads each corpus into the searcher (binary caches are reused).
	/// - The corpus name is derived from the file name (without extension).
	///
	/// # Errors
	/// - Returns an error if the path does not exist or is not a directory.
	/// - Returns an error if a corpus fails to load.
	///
	/// # Notes
	/// - Only files directly contained in the directory are loaded
	///   (subdirectories are ignored).
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		let mut searcher = Self {
			models: HashMap::new(),
		};

		let string_path = match filepath.as_ref().to_str() {
			Some(s) => s,
			None => return Err("Invalid filepath".into()),
		};
		// Normalize "folder" / "folder/"
		let folder = io::normalize_folder(string_path);

		if !folder.is_dir() {
			return Err(format!("Expected a directory, got: {}", folder.display()).into());
		}

		for file in io::list_files(&folder, "txt")? {
			let full_path = folder.join(&file);
			searcher.load_corpus(&full_path)?;
		}

		Ok(searcher)
	}

	/// Loads a `CorpusModel` from a file path.
	///
	/// # Errors
	/// Returns an error if the corpus is already loaded or if file I/O fails.
	pub fn load_corpus<P: AsRef<Path>>(&mut self, filepath: P) -> Result<(), Box<dyn std::error::Error>> {
		let key = io::corpus_name(&filepath)?;
		if self.models.contains_key(&key) {
			return Err(Box::from("Corpus already loaded".to_owned()));
		}
		let model = CorpusModel::new(filepath.as_ref())?;
		self.models.insert(key, model);
		Ok(())
	}

	/// Adds an already-built corpus model.
	///
	/// # Errors
	/// Returns an error if a corpus with the same name is already loaded.
	pub fn add_model(&mut self, model: CorpusModel) -> Result<(), String> {
		let key = model.name().to_owned();
		if self.models.contains_key(&key) {
			return Err(format!("Corpus {} already loaded", key));
		}
		self.models.insert(key, model);
		Ok(())
	}

	/// Returns the list of loaded corpus names, sorted.
	pub fn get_corpus_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.models.keys().map(|k| k.to_owned()).collect();
		names.sort();
		names
	}

	/// Creates a new `SearchInput` selecting every loaded corpus.
	pub fn make_search_input(&self) -> SearchInput {
		SearchInput::new(self.get_corpus_names())
	}

	/// Merges the letter counts of the selected corpora.
	fn merged_counts(&self, input: &SearchInput) -> Result<LetterCounts, String> {
		let mut merged = LetterCounts::new();
		for name in input.corpora() {
			let model = self
				.models
				.get(name)
				.ok_or_else(|| format!("Corpus {} not found", name))?;
			merged.merge(model.counts());
		}
		if merged.is_empty() {
			return Err("Selected corpora contain no letters".to_owned());
		}
		Ok(merged)
	}

	/// Runs the full pipeline for the given input.
	///
	/// # Behavior
	/// 1. Merge the selected corpora's letter counts and partition the
	///    target base into a frequency-weighted alphabet.
	/// 2. Extract π's hexadecimal digits at the requested precision.
	/// 3. Translate them into the target base (skipped when it is 16).
	/// 4. Render the digits as letters and locate the target words.
	///
	/// Deterministic: identical inputs always yield identical reports.
	///
	/// # Errors
	/// Returns an error if a selected corpus is missing or holds no letters.
	pub fn search(&self, input: &SearchInput) -> Result<SearchReport, String> {
		let counts = self.merged_counts(input)?;
		let base = input.base();
		let precision = input.precision();

		// SearchInput guarantees base >= 2, so the alphabet has base slots
		let alphabet = counts_to_alphabet(&counts, base as u64);

		let hex_digits = compute_pi_in_hex(precision)
			.ok_or_else(|| "Invalid precision".to_owned())?;

		let digits = if precision == 0 || base == 16 {
			hex_digits
		} else {
			convert_base(&hex_digits, 16, base, precision)
				.ok_or_else(|| "Base translation failed".to_owned())?
		};

		let haystack = convert_digits_to_string(&digits, base, Some(alphabet.as_slice()))
			.ok_or_else(|| "Digit rendering failed".to_owned())?;

		let occurrences = get_substrings(&haystack, &input.words);

		Ok(SearchReport {
			alphabet: alphabet.into_iter().collect(),
			digits,
			haystack,
			occurrences,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn searcher_with(name: &str, entries: &[&str]) -> PiWordSearcher {
		let entries: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
		let mut searcher = PiWordSearcher::default();
		searcher
			.add_model(CorpusModel::from_entries(name, &entries))
			.expect("fresh searcher");
		searcher
	}

	#[test]
	fn binary_rendering_of_pi() {
		// Equal a/b counts and base 2 give the alphabet "ab", so the
		// haystack is the binary expansion of frac(pi) spelled in a/b:
		// 0.243F hex ~ 0.0010 binary -> "aaba".
		let searcher = searcher_with("balanced", &["ab"]);
		let mut input = searcher.make_search_input();
		input.set_base(2).expect("valid base");
		input.set_precision(4).expect("valid precision");
		input.words = vec!["ab".to_owned(), "bb".to_owned()];

		let report = searcher.search(&input).expect("search runs");
		assert_eq!(report.alphabet, "ab");
		assert_eq!(report.digits, vec![0, 0, 1, 0]);
		assert_eq!(report.haystack, "aaba");
		assert_eq!(report.occurrences.get("ab"), Some(&1));
		assert_eq!(report.occurrences.get("bb"), None);
	}

	#[test]
	fn hexadecimal_base_skips_translation() {
		let searcher = searcher_with("single", &["a"]);
		let mut input = searcher.make_search_input();
		input.set_base(16).expect("valid base");
		input.set_precision(5).expect("valid precision");

		let report = searcher.search(&input).expect("search runs");
		assert_eq!(report.digits, vec![0x2, 0x4, 0x3, 0xF, 0x6]);
		// single-letter corpus: every slot is 'a'
		assert_eq!(report.haystack, "aaaaa");
	}

	#[test]
	fn zero_precision_yields_empty_haystack() {
		let searcher = searcher_with("single", &["a"]);
		let mut input = searcher.make_search_input();
		input.set_precision(0).expect("valid precision");
		input.words = vec!["a".to_owned()];

		let report = searcher.search(&input).expect("search runs");
		assert!(report.digits.is_empty());
		assert!(report.haystack.is_empty());
		assert!(report.occurrences.is_empty());
	}

	#[test]
	fn search_is_deterministic() {
		let searcher = searcher_with("english", &["the quick brown fox jumps over the lazy dog"]);
		let mut input = searcher.make_search_input();
		input.set_base(26).expect("valid base");
		input.set_precision(64).expect("valid precision");
		input.words = vec!["or".to_owned(), "to".to_owned()];

		let first = searcher.search(&input).expect("search runs");
		let second = searcher.search(&input).expect("search runs");
		assert_eq!(first.alphabet, second.alphabet);
		assert_eq!(first.digits, second.digits);
		assert_eq!(first.haystack, second.haystack);
		assert_eq!(first.occurrences, second.occurrences);
	}

	#[test]
	fn empty_corpus_selection_is_an_error() {
		let searcher = PiWordSearcher::default();
		let input = searcher.make_search_input();
		assert!(searcher.search(&input).is_err());
	}

	#[test]
	fn duplicate_corpus_names_are_rejected() {
		let mut searcher = searcher_with("english", &["abc"]);
		let duplicate = CorpusModel::from_entries("english", &["xyz".to_owned()]);
		assert!(searcher.add_model(duplicate).is_err());
	}
}
