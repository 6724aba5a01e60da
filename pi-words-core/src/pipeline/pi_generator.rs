use std::sync::mpsc;
use std::thread;

/// Computes `(base ^ exponent) mod modulus` by repeated squaring.
///
/// The full power is never materialized: a modular reduction follows every
/// multiplication, so intermediates stay below `modulus^2`.
///
/// # Parameters
/// - `base`, `exponent`: Must be non-negative.
/// - `modulus`: Must be strictly positive (a zero modulus is undefined).
///
/// # Returns
/// - The residue in `[0, modulus)`.
/// - `-1` (sentinel) if any argument is negative or `modulus` is zero.
///
/// # Notes
/// - `modulus = 1` reduces everything to `0`, including `base ^ 0`.
pub fn power_mod(base: i64, exponent: i64, modulus: i64) -> i64 {
	if base < 0 || exponent < 0 || modulus <= 0 {
		return -1;
	}

	let mut result = 1 % modulus;
	let mut square = base % modulus;
	let mut remaining = exponent;
	while remaining > 0 {
		if remaining & 1 == 1 {
			result = result * square % modulus;
		}
		square = square * square % modulus;
		remaining >>= 1;
	}
	result
}

/// Fractional part of the BBP sub-series `sum(16^(d-k) / (8k + j))`.
///
/// The head (`k <= d`) uses `power_mod` so each term enters already reduced
/// modulo 1, keeping full significance in the `f64` accumulator. The tail
/// (`k > d`) converges geometrically and is summed in floating point until
/// terms fall below `f64` significance.
fn bbp_series(j: i64, d: i64) -> f64 {
	let mut sum = 0.0f64;
	for k in 0..=d {
		let m = 8 * k + j;
		sum += power_mod(16, d - k, m) as f64 / m as f64;
		sum -= sum.floor();
	}

	let mut k = d + 1;
	loop {
		let term = 16f64.powi((d - k) as i32) / (8 * k + j) as f64;
		if term < 1e-17 {
			break;
		}
		sum += term;
		k += 1;
	}
	sum - sum.floor()
}

/// Extracts the hexadecimal digit of π at a 1-based fractional position.
///
/// Uses the Bailey-Borwein-Plouffe identity
/// `pi = sum(16^-k * (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6)))`:
/// scaling by `16^(position-1)` and dropping the integer part leaves the
/// wanted digit at the front of the fractional expansion. Each position is
/// computed independently of all others.
fn hex_digit_at(position: i64) -> i32 {
	let d = position - 1;
	let mut x = 4.0 * bbp_series(1, d) - 2.0 * bbp_series(4, d) - bbp_series(5, d) - bbp_series(6, d);
	x -= x.floor();
	(x * 16.0) as i32
}

/// Computes the first `precision` hexadecimal fractional digits of π.
///
/// Digit positions are independent, so they are extracted in parallel:
/// the position range is chunked across available cores, each worker sends
/// its chunk back tagged with its starting position, and chunks are
/// reassembled in position order. The result is fully deterministic.
///
/// # Parameters
/// - `precision`: Number of fractional digits. `0` yields an empty sequence.
///
/// # Returns
/// - `Some(digits)` of length exactly `precision`, values in `[0, 16)`.
/// - `None` if `precision` is negative.
///
/// # Notes
/// - The series tail is summed in `f64`; at very deep positions the float
///   significance runs out and a digit may come out off by one. This is an
///   inherent property of the extraction, not a defect, and does not occur
///   within the first few thousand digits.
pub fn compute_pi_in_hex(precision: i32) -> Option<Vec<i32>> {
	if precision < 0 {
		return None;
	}
	let precision = precision as usize;
	if precision == 0 {
		return Some(Vec::new());
	}

	let cpus = num_cpus::get();
	let chunk_size = (precision + cpus - 1) / cpus;

	let positions: Vec<i64> = (1..=precision as i64).collect();
	let (tx, rx) = mpsc::channel();
	for chunk in positions.chunks(chunk_size) {
		let tx = tx.clone();
		let chunk: Vec<i64> = chunk.to_vec();

		thread::spawn(move || {
			let digits: Vec<i32> = chunk.iter().map(|&p| hex_digit_at(p)).collect();
			tx.send((chunk[0], digits)).expect("Failed to send from thread");
		});
	}
	drop(tx);

	let mut parts: Vec<(i64, Vec<i32>)> = rx.iter().collect();
	parts.sort_by_key(|(start, _)| *start);

	Some(parts.into_iter().flat_map(|(_, digits)| digits).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn power_mod_basics() {
		assert_eq!(power_mod(5, 7, 23), 17);
		assert_eq!(power_mod(2, 3, 4), 0);
		assert_eq!(power_mod(3, 4, 5), 1);
		assert_eq!(power_mod(17, 19, 23), 5);
		assert_eq!(power_mod(15, 4, 1024), 449);
		assert_eq!(power_mod(4, 5, 4096), 1024);
	}

	#[test]
	fn power_mod_negative_arguments() {
		assert_eq!(power_mod(-1, 1, 1), -1);
		assert_eq!(power_mod(1, -1, 1), -1);
		assert_eq!(power_mod(1, 1, -1), -1);
	}

	#[test]
	fn power_mod_zero_base() {
		assert_eq!(power_mod(0, 1, 1), 0);
		assert_eq!(power_mod(0, 4, 5), 0);
	}

	#[test]
	fn power_mod_zero_exponent() {
		assert_eq!(power_mod(5, 0, 1), 0);
		assert_eq!(power_mod(6, 0, 5), 1);
		assert_eq!(power_mod(7, 0, 23), 1);
	}

	#[test]
	fn pi_hex_reference_digits() {
		// pi = 3.243F6A8885A308D3... in hexadecimal
		assert_eq!(compute_pi_in_hex(1), Some(vec![0x2]));
		assert_eq!(
			compute_pi_in_hex(5),
			Some(vec![0x2, 0x4, 0x3, 0xF, 0x6])
		);
		assert_eq!(
			compute_pi_in_hex(10),
			Some(vec![0x2, 0x4, 0x3, 0xF, 0x6, 0xA, 0x8, 0x8, 0x8, 0x5])
		);
	}

	#[test]
	fn pi_hex_digits_stay_in_range() {
		let digits = compute_pi_in_hex(200).expect("valid precision");
		assert_eq!(digits.len(), 200);
		assert!(digits.iter().all(|&d| (0..16).contains(&d)));
	}

	#[test]
	fn pi_hex_negative_precision() {
		assert_eq!(compute_pi_in_hex(-1), None);
		assert_eq!(compute_pi_in_hex(-10), None);
		assert_eq!(compute_pi_in_hex(-100), None);
	}

	#[test]
	fn pi_hex_zero_precision() {
		assert_eq!(compute_pi_in_hex(0), Some(Vec::new()));
	}

	#[test]
	fn parallel_assembly_matches_sequential_extraction() {
		let parallel = compute_pi_in_hex(64).expect("valid precision");
		let sequential: Vec<i32> = (1..=64).map(hex_digit_at).collect();
		assert_eq!(parallel, sequential);
	}
}
