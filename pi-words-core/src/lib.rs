//! Search for words hidden in the digits of π.
//!
//! This crate provides a modular digit/letter pipeline including:
//! - Hexadecimal π digit extraction (per-digit BBP spigot)
//! - Exact fractional base conversion between arbitrary bases
//! - Corpus-weighted alphabet generation (frequency CDF bucketing)
//! - Digit-to-letter rendering and first-occurrence word search
//! - Internal utilities for I/O and path handling
//!
//! The pipeline is deterministic: re-running with identical inputs always
//! reproduces identical outputs; there is no hidden state between calls.

/// Core pipeline components and the high-level searcher.
///
/// Each stage is exposed individually (usable and testable on its own)
/// together with `PiWordSearcher`, which wires them.
pub mod pipeline;

/// I/O utilities (corpus loading, cache paths, directory listing).
pub mod io;
