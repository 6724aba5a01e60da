//! Top-level module for the π word-search pipeline.
//!
//! This crate provides a corpus-driven search over the digits of π, including:
//! - Letter-frequency accumulation (`LetterCounts`)
//! - Frequency-weighted alphabet generation (`alphabet_generator`)
//! - Exact fractional base conversion (`base_translator`)
//! - Hexadecimal π digit extraction (`pi_generator`)
//! - Digit-to-letter rendering (`digits_to_string`)
//! - First-occurrence word search (`word_finder`)
//! - A high-level search interface (`PiWordSearcher`)

/// Letter-frequency accumulator built from corpus text.
///
/// Supports case-insensitive counting, merging of partial counts
/// (parallel corpus ingestion), and serialization.
pub mod letter_counts;

/// Frequency-weighted alphabet generation.
///
/// Partitions `base` output slots across the letters a-z proportionally
/// to their corpus frequency, using cumulative rounded boundaries.
pub mod alphabet_generator;

/// Exact conversion of fixed-precision fractional digit sequences
/// between arbitrary bases (>= 2).
///
/// Uses big-integer remainder arithmetic, no floating point.
pub mod base_translator;

/// Rendering of a digit sequence into a string of letters
/// through a base-sized alphabet.
pub mod digits_to_string;

/// π digit extraction in hexadecimal.
///
/// Per-digit BBP spigot backed by modular exponentiation; digits are
/// computed independently and assembled in index order.
pub mod pi_generator;

/// First-occurrence substring search over the rendered digit string.
pub mod word_finder;

/// Named training corpus with cached letter counts.
///
/// Supports loading from disk, parallel construction, merging,
/// and compact binary caching.
pub mod corpus_model;

/// High-level interface wiring the full pipeline over loaded corpora.
pub mod searcher;

/// Validated search parameters (base, precision, target words, corpora).
pub mod search_input;
