//! The `RandomBits` capability trait and the rng error taxonomy
//!
//! A random source is anything that can produce up to 32 bits on demand.
//! Everything else a consumer conventionally wants (booleans, bounded
//! integers, floats) is derived from that one primitive, so the file-backed
//! replay source and an ordinary algorithmic PRNG are interchangeable.

use thiserror::Error;

/// Errors that can occur while producing random values
#[derive(Debug, Error)]
pub enum RngError {
    #[error("requested {bits} bits, must be 1-32")]
    InvalidBitCount { bits: u32 },

    #[error("invalid range: min {min} must be less than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("backing stream {operation} failed")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// A source of random bits
///
/// The single required method is [`next_bits`](RandomBits::next_bits); all
/// derived operations are provided on top of it. Implementations must
/// return only the requested low-order bit width (higher bits zero) and
/// reject widths outside 1..=32 with [`RngError::InvalidBitCount`].
///
/// All operations are fallible: a file-backed source can hit genuine I/O
/// errors mid-draw, and those surface through the same `Result` channel as
/// the primitive's own argument validation.
///
/// # Example
/// ```
/// use replay_rng_core_rs::{RandomBits, RngError};
///
/// struct Fixed(u32);
/// impl RandomBits for Fixed {
///     fn next_bits(&mut self, bits: u32) -> Result<u32, RngError> {
///         if !(1..=32).contains(&bits) {
///             return Err(RngError::InvalidBitCount { bits });
///         }
///         let mask = if bits == 32 { u32::MAX } else { (1 << bits) - 1 };
///         Ok(self.0 & mask)
///     }
/// }
///
/// let mut src = Fixed(0b1011);
/// assert_eq!(src.next_bits(2).unwrap(), 0b11);
/// assert!(src.next_bool().unwrap());
/// ```
pub trait RandomBits {
    /// Produce the next `bits` random bits (1..=32 inclusive)
    ///
    /// Returns an integer whose low-order `bits` bits contain the next
    /// random data; all higher bits are zero.
    fn next_bits(&mut self, bits: u32) -> Result<u32, RngError>;

    /// Next random boolean (one bit)
    fn next_bool(&mut self) -> Result<bool, RngError> {
        Ok(self.next_bits(1)? != 0)
    }

    /// Next random u32 (full 32-bit draw)
    fn next_u32(&mut self) -> Result<u32, RngError> {
        self.next_bits(32)
    }

    /// Next random i32 (full 32-bit draw, reinterpreted)
    fn next_i32(&mut self) -> Result<i32, RngError> {
        Ok(self.next_bits(32)? as i32)
    }

    /// Next random u64, composed from two 32-bit draws (high word first)
    fn next_u64(&mut self) -> Result<u64, RngError> {
        let high = self.next_bits(32)? as u64;
        let low = self.next_bits(32)? as u64;
        Ok((high << 32) | low)
    }

    /// Next random value in `[0, bound)`
    ///
    /// Fails with [`RngError::InvalidRange`] if `bound` is zero.
    fn next_below(&mut self, bound: u32) -> Result<u32, RngError> {
        if bound == 0 {
            return Err(RngError::InvalidRange {
                min: 0,
                max: 0,
            });
        }
        Ok(self.next_u32()? % bound)
    }

    /// Next random value in `[min, max)`
    ///
    /// Consumes one 64-bit draw. Fails with [`RngError::InvalidRange`] if
    /// `min >= max`.
    fn range(&mut self, min: i64, max: i64) -> Result<i64, RngError> {
        if min >= max {
            return Err(RngError::InvalidRange { min, max });
        }
        // Wrapping arithmetic keeps the result correct even when the span
        // exceeds i64::MAX (e.g. [i64::MIN, i64::MAX)).
        let span = max.wrapping_sub(min) as u64;
        let offset = self.next_u64()? % span;
        Ok(min.wrapping_add(offset as i64))
    }

    /// Next random f64 in `[0.0, 1.0)`
    ///
    /// Built from 53 random bits (a 26-bit draw then a 27-bit draw),
    /// scaled by 2^-53.
    fn next_f64(&mut self) -> Result<f64, RngError> {
        let high = self.next_bits(26)? as u64;
        let low = self.next_bits(27)? as u64;
        Ok(((high << 27) | low) as f64 * (1.0 / (1u64 << 53) as f64))
    }
}
