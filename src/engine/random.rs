//! Randomness abstraction
//!
//! Callers that pick bonus tasks or encouragement messages take a
//! [`RandomSource`] instead of calling the OS RNG directly, so tests
//! can pin the selection.

/// Source of uniform random indices
pub trait RandomSource {
    /// Return a value in `0..bound`. `bound` must be non-zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

/// OS-backed random source used in production
#[derive(Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }

        let mut bytes = [0u8; 8];
        let seed = if getrandom::getrandom(&mut bytes).is_ok() {
            u64::from_le_bytes(bytes)
        } else {
            // Fallback: best-effort seed if OS RNG is unavailable.
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0);
            let pid = std::process::id() as u128;
            (nanos ^ pid.rotate_left(17)) as u64
        };

        (seed % bound as u64) as usize
    }
}

/// Deterministic random source for tests, cycling through a fixed
/// sequence of values.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: &[usize]) -> Self {
        assert!(!values.is_empty());
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value % bound
    }
}
