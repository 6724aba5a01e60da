use std::collections::HashMap;

/// Finds the first occurrence of each needle in a haystack.
///
/// Scans left to right; for every non-empty needle that occurs at least
/// once, the map holds the lowest offset at which it starts. Needles with
/// no occurrence, empty needles, and duplicates beyond the first produce
/// no entry. The needle slice is never mutated.
///
/// Offsets are byte offsets; the pipeline haystacks are ASCII letters,
/// where byte and character positions coincide.
///
/// # Parameters
/// - `haystack`: Text to scan. Empty means no matches.
/// - `needles`: Target words. Order and contents are preserved.
///
/// # Returns
/// A map from needle to first-occurrence offset. Never fails: degenerate
/// inputs simply produce an empty map.
pub fn get_substrings(haystack: &str, needles: &[String]) -> HashMap<String, usize> {
	let mut occurrences = HashMap::new();

	if haystack.is_empty() {
		return occurrences;
	}

	for needle in needles {
		if needle.is_empty() || occurrences.contains_key(needle) {
			continue;
		}
		if let Some(offset) = haystack.find(needle.as_str()) {
			occurrences.insert(needle.clone(), offset);
		}
	}

	occurrences
}
