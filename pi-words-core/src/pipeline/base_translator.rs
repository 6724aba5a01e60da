use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Converts a fixed-precision fractional digit sequence between bases.
///
/// `digits` is read as the fractional value `0.d0 d1 d2 ...` in `from_base`,
/// i.e. `sum(digits[i] * from_base^-(i+1))`. The result is the `to_base`
/// expansion of that same value, truncated to exactly `precision` digits.
///
/// The conversion is exact: the remainder is carried as a big-integer
/// numerator over the fixed denominator `from_base^len`, so no drift occurs
/// at any precision. Precision loss at the tail is still inherent for values
/// that do not terminate in `to_base`; round-trips are only exact for
/// terminating expansions.
///
/// # Parameters
/// - `digits`: Input digit sequence. Not mutated. Empty means zero.
/// - `from_base`, `to_base`: Radices, both must be >= 2.
/// - `precision`: Number of output digits, must be >= 1.
///
/// # Returns
/// - `Some(output)` of length exactly `precision` on success.
/// - `None` if a base is below 2, `precision < 1`, or any input digit
///   lies outside `[0, from_base)`.
pub fn convert_base(digits: &[i32], from_base: i32, to_base: i32, precision: i32) -> Option<Vec<i32>> {
	if from_base < 2 || to_base < 2 || precision < 1 {
		return None;
	}
	if digits.iter().any(|&d| d < 0 || d >= from_base) {
		return None;
	}

	let from = BigUint::from(from_base as u32);
	let to = BigUint::from(to_base as u32);

	// 0.d0 d1 ... d(n-1) in from_base, as numerator / from_base^n
	let mut numerator = BigUint::zero();
	let mut denominator = BigUint::from(1u32);
	for &digit in digits {
		numerator = numerator * &from + BigUint::from(digit as u32);
		denominator *= &from;
	}

	let mut output = Vec::with_capacity(precision as usize);
	for _ in 0..precision {
		numerator *= &to;
		let digit = &numerator / &denominator;
		numerator -= &digit * &denominator;
		// digit < to_base <= i32::MAX, conversion cannot fail
		output.push(digit.to_i32().unwrap_or(0));
	}

	Some(output)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quarter_round_trips_between_base_2_and_10() {
		// .01 in base 2 is .25 in base 10
		assert_eq!(convert_base(&[0, 1], 2, 10, 2), Some(vec![2, 5]));
		assert_eq!(convert_base(&[2, 5], 10, 2, 2), Some(vec![0, 1]));
	}

	#[test]
	fn input_is_not_mutated() {
		let input = vec![0, 1, 1];
		let snapshot = input.clone();
		convert_base(&input, 2, 10, 3);
		assert_eq!(input, snapshot);
	}

	#[test]
	fn binary_fractions_to_decimal() {
		// .10 = one half
		assert_eq!(convert_base(&[1, 0], 2, 10, 2), Some(vec![5, 0]));
		// .1011 = 11/16 = .6875
		assert_eq!(convert_base(&[1, 0, 1, 1], 2, 10, 4), Some(vec![6, 8, 7, 5]));
	}

	#[test]
	fn three_eighths_across_bases() {
		let base2 = [0, 1, 1, 0];
		let base5 = [1, 4, 1, 4, 1, 4];
		let base10 = [3, 7, 5];

		assert_eq!(convert_base(&base2, 2, 5, 6), Some(base5.to_vec()));
		assert_eq!(convert_base(&base2, 2, 10, 3), Some(base10.to_vec()));

		// 3/8 terminates in bases 2 and 10, so these round-trip exactly.
		// Converting back from base 5 would not: .141414... repeats.
		assert_eq!(convert_base(&base10, 10, 2, 4), Some(base2.to_vec()));
		assert_eq!(convert_base(&base10, 10, 5, 6), Some(base5.to_vec()));
	}

	#[test]
	fn assorted_bases() {
		// 1/3 + 1/9 + 2/27 = 14/27 = .518...
		assert_eq!(convert_base(&[1, 1, 2], 3, 10, 3), Some(vec![5, 1, 8]));
		// .3 in base 10 is .0220... in base 3
		assert_eq!(convert_base(&[3], 10, 3, 4), Some(vec![0, 2, 2, 0]));
	}

	#[test]
	fn empty_input_is_zero() {
		assert_eq!(convert_base(&[], 2, 10, 2), Some(vec![0, 0]));
	}

	#[test]
	fn invalid_precision() {
		assert_eq!(convert_base(&[1, 1], 2, 10, 0), None);
		assert_eq!(convert_base(&[1, 1], 2, 10, -1), None);
		assert_eq!(convert_base(&[], 2, 10, 0), None);
	}

	#[test]
	fn invalid_bases() {
		let input = [1, 1];
		assert_eq!(convert_base(&input, 1, 10, 2), None);
		assert_eq!(convert_base(&input, 2, 1, 2), None);
		assert_eq!(convert_base(&input, 1, -10, 2), None);
		assert_eq!(convert_base(&input, 10, -10, 2), None);
		assert_eq!(convert_base(&input, -10, 10, 2), None);
		assert_eq!(convert_base(&input, 0, 10, 2), None);
		assert_eq!(convert_base(&input, 2, 0, 2), None);
	}

	#[test]
	fn invalid_digits() {
		assert_eq!(convert_base(&[-1, 0, 1], 2, 10, 3), None);
		assert_eq!(convert_base(&[0, 1, -1], 2, 10, 3), None);
		// digits >= from_base
		assert_eq!(convert_base(&[3, 5, 6, 9], 2, 10, 4), None);
		assert_eq!(convert_base(&[3, 5, 6, 9], 9, 10, 4), None);
	}

	#[test]
	fn long_precision_has_no_drift() {
		// 1/2 in base 2 rendered to 50 decimal digits: 5 then zeros.
		let output = convert_base(&[1], 2, 10, 50).expect("valid");
		assert_eq!(output[0], 5);
		assert!(output[1..].iter().all(|&d| d == 0));
	}
}
