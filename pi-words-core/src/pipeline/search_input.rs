/// Input parameters for a word search over the digits of π.
///
/// `SearchInput` contains both **numeric parameters** (target base and digit
/// precision, validated by setters) and **corpus selection** (which loaded
/// corpora contribute to the alphabet weighting).
///
/// # Invariants
/// - `base` is always >= 2
/// - `precision` is always >= 0
/// - `corpora` only names corpora that were available at construction
pub struct SearchInput {
	/// Target words to look for in the rendered digit string.
	pub words: Vec<String>,

	/// Base the π digits are rendered in; also the alphabet length.
	base: i32,

	/// Number of fractional digits to generate.
	precision: i32,

	/// Corpora available for selection (fixed at construction).
	available_corpora: Vec<String>,

	/// Corpora whose letter counts are merged for alphabet weighting.
	corpora: Vec<String>,
}

impl SearchInput {
	/// Creates a new `SearchInput` selecting every available corpus.
	///
	/// Defaults: base 26 (one slot per English letter shape), precision 250.
	///
	/// # Visibility
	/// - `pub(crate)` to prevent construction outside the crate.
	pub(crate) fn new(available_corpora: Vec<String>) -> Self {
		Self {
			words: Vec::new(),
			base: 26,
			precision: 250,
			corpora: available_corpora.clone(),
			available_corpora,
		}
	}

	/// Returns the target base.
	pub fn base(&self) -> i32 {
		self.base
	}

	/// Sets the target base.
	///
	/// # Errors
	/// Returns an error if `base < 2`.
	pub fn set_base(&mut self, base: i32) -> Result<(), String> {
		if base < 2 {
			return Err(format!("Base must be at least 2, got {}", base));
		}
		self.base = base;
		Ok(())
	}

	/// Returns the digit precision.
	pub fn precision(&self) -> i32 {
		self.precision
	}

	/// Sets the digit precision.
	///
	/// A precision of 0 is allowed and produces an empty haystack.
	///
	/// # Errors
	/// Returns an error if `precision` is negative.
	pub fn set_precision(&mut self, precision: i32) -> Result<(), String> {
		if precision < 0 {
			return Err(format!("Precision must be non-negative, got {}", precision));
		}
		self.precision = precision;
		Ok(())
	}

	/// Returns the selected corpora.
	pub fn corpora(&self) -> &[String] {
		&self.corpora
	}

	/// Restricts the alphabet weighting to the given corpora.
	///
	/// # Errors
	/// Returns an error if a name does not match any available corpus
	/// or if the selection is empty.
	pub fn set_corpora(&mut self, names: &[String]) -> Result<(), String> {
		if names.is_empty() {
			return Err("At least one corpus must be selected".to_owned());
		}
		for name in names {
			if !self.available_corpora.contains(name) {
				return Err(format!("Corpus {} not found", name));
			}
		}
		self.corpora = names.to_vec();
		Ok(())
	}
}
