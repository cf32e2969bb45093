//! Append-only storage for plot samples.

use crate::error::{FoucaultError, Result};
use crate::vector::Vec2;

/// Capacity reserved when a buffer is created with [`SampleBuffer::new`].
pub const INITIAL_CAPACITY: usize = 20_000;

/// Ordered `(time, value)` samples in append order.
///
/// Callers append samples with non-decreasing `x`; the buffer does not check.
/// When full, storage doubles (or jumps to [`INITIAL_CAPACITY`] when empty).
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<Vec2>,
}

impl SampleBuffer {
    /// Create an empty buffer with [`INITIAL_CAPACITY`] reserved.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty buffer with a specific initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample, growing storage when full.
    pub fn append(&mut self, point: Vec2) -> Result<()> {
        if self.samples.len() >= self.samples.capacity() {
            self.grow()?;
        }
        self.samples.push(point);
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let current = self.samples.capacity();
        let requested = if current == 0 {
            INITIAL_CAPACITY
        } else {
            current.saturating_mul(2)
        };

        self.samples
            .try_reserve_exact(requested - self.samples.len())
            .map_err(|source| FoucaultError::allocation(requested, source))?;

        tracing::info!(
            "Sample buffer grew from {} to {} samples",
            current,
            self.samples.capacity()
        );
        Ok(())
    }

    /// Number of samples appended so far.
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<Vec2> {
        self.samples.get(index).copied()
    }

    /// Most recently appended sample.
    pub fn last(&self) -> Option<Vec2> {
        self.samples.last().copied()
    }

    /// Current storage capacity.
    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    /// All samples as a slice.
    pub fn as_slice(&self) -> &[Vec2] {
        &self.samples
    }

    /// Iterate over samples in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> + '_ {
        self.samples.iter()
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
