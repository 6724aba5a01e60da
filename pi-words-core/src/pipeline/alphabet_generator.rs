use super::letter_counts::LetterCounts;

/// Generates a `base`-length alphabet weighted by corpus letter frequency.
///
/// Each letter `a`-`z` receives a number of consecutive output slots
/// proportional to its occurrence probability in `training_data`. Slots are
/// assigned in lexicographically ascending letter order, so the returned
/// alphabet is monotonically non-decreasing.
///
/// Slot boundaries come from the cumulative distribution: a letter with
/// cumulative endpoint `C` occupies `round(C * base) - round(C_prev * base)`
/// slots. Rounding the running boundaries (instead of each letter's share
/// independently) guarantees the slot counts sum exactly to `base`.
///
/// # Parameters
/// - `base`: Number of slots to fill. `0` yields an empty alphabet.
/// - `training_data`: Corpus entries to count letters over. Characters
///   outside `a`-`z` (after case-folding) are ignored.
///
/// # Returns
/// - `Some(alphabet)` of length exactly `base` on success.
/// - `None` if `base < 0`, `training_data` is absent, or the corpus
///   contains no letters at all.
pub fn generate_frequency_alphabet(base: i32, training_data: Option<&[String]>) -> Option<Vec<char>> {
	let training_data = training_data?;
	if base < 0 {
		return None;
	}

	let mut counts = LetterCounts::new();
	for entry in training_data {
		counts.add_text(entry);
	}
	if counts.is_empty() {
		return None;
	}

	Some(counts_to_alphabet(&counts, base as u64))
}

/// Partitions `size` slots across the counted letters.
///
/// Boundaries are computed in exact integer arithmetic: the cumulative
/// endpoint of a letter is the rational `cumulative_count * size / total`,
/// rounded half-up. No floating point is involved, so the partition is
/// immune to accumulation error and always sums to `size`.
///
/// An empty accumulator yields an empty alphabet regardless of `size`.
pub fn counts_to_alphabet(counts: &LetterCounts, size: u64) -> Vec<char> {
	let total = counts.total();
	if total == 0 {
		return Vec::new();
	}

	let mut alphabet = Vec::with_capacity(size as usize);
	let mut cumulative = 0u64;
	let mut previous_boundary = 0u64;
	for (letter, count) in counts.sorted_counts() {
		cumulative += count;
		let boundary = round_half_up(cumulative * size, total);
		for _ in previous_boundary..boundary {
			alphabet.push(letter);
		}
		previous_boundary = boundary;
	}
	alphabet
}

/// Rounds the non-negative rational `numerator / denominator` half-up.
///
/// `denominator` must be nonzero.
fn round_half_up(numerator: u64, denominator: u64) -> u64 {
	(2 * numerator + denominator) / (2 * denominator)
}
