/// Renders a digit sequence as a string of letters through an alphabet.
///
/// Digit value `d` maps to `alphabet[d]`; the output has one character per
/// input digit, in order.
///
/// # Parameters
/// - `digits`: Digit sequence, every value must lie in `[0, base)`.
/// - `base`: Radix of the digit sequence, must be >= 2.
/// - `alphabet`: Mapping from digit value to letter. When absent, the
///   digits and base are still validated but the rendered string is empty
///   (callers that only want validation pass `None`).
///
/// # Returns
/// - `Some(string)` on success (empty when `alphabet` is `None`).
/// - `None` if `base < 2`, any digit is out of range, or a present
///   alphabet's length differs from `base`.
pub fn convert_digits_to_string(digits: &[i32], base: i32, alphabet: Option<&[char]>) -> Option<String> {
	if base < 2 {
		return None;
	}
	if digits.iter().any(|&d| d < 0 || d >= base) {
		return None;
	}

	let alphabet = match alphabet {
		Some(a) => a,
		None => return Some(String::new()),
	};
	if alphabet.len() != base as usize {
		return None;
	}

	Some(digits.iter().map(|&d| alphabet[d as usize]).collect())
}
