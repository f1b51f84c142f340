//! Random bit sources
//!
//! One capability trait (`RandomBits`) with a single required primitive:
//! produce the next 1..=32 bits. Two implementations:
//! - `FileBackedRandom` replays bits from a backing file (the point of
//!   this crate)
//! - `Lcg48` is the classic 48-bit linear congruential generator, used as
//!   the deterministic fallback when no backing stream is open
//!
//! CRITICAL: Both sources are fully deterministic. The file-backed source
//! is determined by the backing file's bytes; the fallback by its seed.

mod file_backed;
mod lcg;
mod source;

pub use file_backed::FileBackedRandom;
pub use lcg::Lcg48;
pub use source::{RandomBits, RngError};
