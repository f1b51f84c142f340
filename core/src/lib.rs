//! Replay RNG Core - File-Backed Randomness Replay
//!
//! Deterministic pseudo-random source whose output is replayed from a file
//! instead of computed algorithmically. A mutation-based input search (e.g.
//! a coverage-guided fuzzer) rewrites the backing file between trials; the
//! program under test consumes "randomness" fully determined by that file.
//!
//! # Architecture
//!
//! - **rng**: The `RandomBits` capability trait, the file-backed replay
//!   source, and the seeded algorithmic fallback generator
//!
//! # Critical Invariants
//!
//! 1. Every bit request consumes exactly one 4-byte little-endian window of
//!    the backing file (fewer only at end-of-file)
//! 2. End-of-file is never an error: exhausted streams replay zeros forever
//! 3. All randomness is deterministic given the backing file's bytes (and,
//!    with no stream open, the fixed fallback seed)

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{FileBackedRandom, Lcg48, RandomBits, RngError};
