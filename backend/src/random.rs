//! Random number sources
//!
//! Generation code draws through [`RandomSource`] so tests can swap the
//! thread RNG for a fixed sequence and assert exact payloads.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

/// Source of uniform draws
pub trait RandomSource: Send + Sync {
    /// Uniform draw in `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&self, low: f64, high: f64) -> f64;
}

/// Convenience draws built on [`RandomSource::uniform`]
pub trait RandomSourceExt: RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&self) -> f64 {
        self.uniform(0.0, 1.0)
    }

    /// Integer in `low..=high`
    fn int_in(&self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f64;
        let offset = self.uniform(0.0, span).floor() as i64;
        (low + offset).clamp(low, high)
    }

    /// Pick one element. `items` must not be empty.
    fn choose<'a, T>(&self, items: &'a [T]) -> &'a T {
        let last = items.len().saturating_sub(1) as i64;
        &items[self.int_in(0, last) as usize]
    }
}

impl<R: RandomSource + ?Sized> RandomSourceExt for R {}

/// Production source backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRng;

impl RandomSource for ThreadRng {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..high)
    }
}

/// Deterministic source cycling through fixed unit values.
///
/// Each value `u` in `[0, 1)` becomes `low + u * (high - low)`.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Every draw lands at the same relative position
    pub fn constant(unit: f64) -> Self {
        Self::new(vec![unit])
    }

    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}

impl RandomSource for SequenceRng {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}
