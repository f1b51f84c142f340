//! File-backed randomness replay
//!
//! `FileBackedRandom` replays "random" values from a backing file. A
//! mutation-search driver rewrites the file between trials; one trial is
//! one open/close cycle of the stream. Data is read in 4-byte little-endian
//! chunks regardless of how many bits are requested, and once end-of-file
//! is reached every further value is zero.
//!
//! # Critical Invariants
//!
//! 1. Each request consumes exactly one 4-byte window (fewer only at EOF)
//! 2. End-of-file is silent zero-padding, never an error
//! 3. The result carries only the requested low-order bits
//! 4. Reopening resets the cursor to offset 0
//!
//! With no stream open (before the first `open()` or after `close()`),
//! requests fall back to the fixed-seed [`Lcg48`] generator, which is
//! still fully deterministic.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::rng::lcg::Lcg48;
use crate::rng::source::{RandomBits, RngError};

/// Random source replayed from a backing file
///
/// The instance is associated with exactly one backing file path, fixed at
/// construction. The stream over that file is opened and closed explicitly,
/// once per trial, and may be reopened arbitrarily many times.
///
/// # Example
/// ```
/// use replay_rng_core_rs::{FileBackedRandom, RandomBits};
///
/// let path = std::env::temp_dir().join("replay_rng_doc_file_backed.bin");
/// std::fs::write(&path, [0xFF, 0x00, 0x00, 0x00]).unwrap();
///
/// let mut rng = FileBackedRandom::new(&path);
/// rng.open().unwrap();
/// assert_eq!(rng.next_bits(8).unwrap(), 255);
/// assert_eq!(rng.next_bits(8).unwrap(), 0); // exhausted: zeros forever
/// rng.close().unwrap();
/// # std::fs::remove_file(&path).unwrap();
/// ```
#[derive(Debug)]
pub struct FileBackedRandom {
    /// Backing file location, fixed at construction
    path: PathBuf,

    /// Live stream handle; `None` outside an open/close cycle
    stream: Option<BufReader<File>>,

    /// Deterministic fallback used when no stream is open
    fallback: Lcg48,
}

impl FileBackedRandom {
    /// Create a source associated with `path`
    ///
    /// Does not open the file; the path need not exist yet. The fallback
    /// generator is seeded with the fixed constant [`Lcg48::FIXED_SEED`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            stream: None,
            fallback: Lcg48::new(Lcg48::FIXED_SEED),
        }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a stream is currently open
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// (Re)open the backing stream, resetting the cursor to offset 0
    ///
    /// Safe to call repeatedly: opening while already open replaces the
    /// stream, which is what the per-trial reopen loop wants. Fails with
    /// [`RngError::Io`] if the path cannot be opened (missing file,
    /// permission denied).
    pub fn open(&mut self) -> Result<(), RngError> {
        let file = File::open(&self.path).map_err(|source| RngError::Io {
            operation: "open",
            source,
        })?;
        self.stream = Some(BufReader::new(file));
        Ok(())
    }

    /// Close the backing stream
    ///
    /// Idempotent: closing an already-closed source is a no-op. Returns
    /// `Result` for contract symmetry with `open()`, but dropping a
    /// read-only file handle cannot fail observably in Rust, so this
    /// always succeeds. The handle is also released on `Drop`, so no
    /// descriptor leaks on panic or early return.
    pub fn close(&mut self) -> Result<(), RngError> {
        self.stream = None;
        Ok(())
    }

    /// Run one trial: open, run `trial` against this source, close
    ///
    /// The stream is closed on the way out regardless of what `trial`
    /// returns, so a failing program under test cannot leak the handle
    /// across the many cycles a long search performs.
    ///
    /// # Example
    /// ```
    /// use replay_rng_core_rs::{FileBackedRandom, RandomBits};
    ///
    /// let path = std::env::temp_dir().join("replay_rng_doc_run_trial.bin");
    /// std::fs::write(&path, [0x07, 0x00, 0x00, 0x00]).unwrap();
    ///
    /// let mut rng = FileBackedRandom::new(&path);
    /// let drawn = rng.run_trial(|r| r.next_bits(8)).unwrap().unwrap();
    /// assert_eq!(drawn, 7);
    /// assert!(!rng.is_open());
    /// # std::fs::remove_file(&path).unwrap();
    /// ```
    pub fn run_trial<T>(
        &mut self,
        trial: impl FnOnce(&mut Self) -> T,
    ) -> Result<T, RngError> {
        self.open()?;
        let outcome = trial(self);
        self.close()?;
        Ok(outcome)
    }
}

impl RandomBits for FileBackedRandom {
    /// Produce the next `bits` bits from the backing file
    ///
    /// Always consumes a full 4-byte window from the stream, regardless of
    /// `bits`; trailing bits of the window are discarded by the mask. At
    /// end-of-file the unread bytes of the window are zero, so an
    /// exhausted file yields zeros indefinitely. Genuine read failures
    /// surface as [`RngError::Io`]; running out of bytes does not.
    fn next_bits(&mut self, bits: u32) -> Result<u32, RngError> {
        if !(1..=32).contains(&bits) {
            return Err(RngError::InvalidBitCount { bits });
        }

        let Some(stream) = self.stream.as_mut() else {
            // No stream open: deterministic algorithmic fallback
            return self.fallback.next_bits(bits);
        };

        // Zeroed scratch buffer, so a short read leaves zeros (not stale
        // data) in the unread tail
        let mut buf = [0u8; 4];
        let mut filled = 0;
        while filled < buf.len() {
            match stream.read(&mut buf[filled..]) {
                Ok(0) => break, // end-of-file: remaining bytes stay zero
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(RngError::Io {
                        operation: "read",
                        source,
                    })
                }
            }
        }

        let value = u32::from_le_bytes(buf);
        let mask = if bits == 32 { u32::MAX } else { (1 << bits) - 1 };
        Ok(value & mask)
    }
}
