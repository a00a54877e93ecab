// Injectable random source used by every randomized decision in the mock service

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};

pub trait RandomSource: Send + Sync + 'static {
    // Uniform sample in [0, 1)
    fn next_f64(&self) -> f64;

    // Uniform sample in [low, high)
    fn uniform(&self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    // True with the given probability
    fn chance(&self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    // Index in 0..len, len must be non-zero
    fn index(&self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

// Pick an element of a slice, None for an empty slice
pub fn pick<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.index(items.len()))
    }
}

// Production source backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

// Reproducible source for demos and statistical tests
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        self.rng.lock().gen::<f64>()
    }
}

// Replays a fixed sequence of samples, cycling when exhausted
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        let values = if values.is_empty() { vec![0.5] } else { values };
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    // Always returns the same sample
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&self) -> f64 {
        let position = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.values[position % self.values.len()]
    }
}
