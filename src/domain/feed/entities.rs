pub use super::value_objects::Label;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Domain entity - one (label, value) observation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    label: Label,
    value: f64,
}

impl Sample {
    pub fn new(label: impl Into<Label>, value: f64) -> Self {
        Self { label: label.into(), value }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Domain entity - capacity-bounded sliding window, newest sample last.
///
/// Appending beyond capacity evicts exactly one sample from the head.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Window {
    pub fn new(capacity: usize) -> Self {
        Self { samples: VecDeque::with_capacity(capacity + 1), capacity }
    }

    /// Build a window from `seed`, keeping only the newest `capacity` samples.
    pub fn with_seed(capacity: usize, seed: impl IntoIterator<Item = Sample>) -> Self {
        let mut window = Self::new(capacity);
        for sample in seed {
            window.append(sample);
        }
        window
    }

    /// Push at the tail and return the evicted head sample, if any.
    pub fn append(&mut self, sample: Sample) -> Option<Sample> {
        self.samples.push_back(sample);
        let evicted = if self.samples.len() > self.capacity { self.samples.pop_front() } else { None };
        debug_assert!(self.samples.len() <= self.capacity);
        evicted
    }

    /// k-th sample counting back from the newest (`k = 0` is the newest).
    pub fn tail(&self, k: usize) -> Option<&Sample> {
        let len = self.samples.len();
        if k >= len {
            return None;
        }
        self.samples.get(len - 1 - k)
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.tail(0)
    }

    /// The first `len` samples as a new window with the same capacity.
    pub fn truncated(&self, len: usize) -> Window {
        Window {
            samples: self.samples.iter().take(len).cloned().collect(),
            capacity: self.capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> Vec<Sample> {
        self.samples.iter().cloned().collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::value).collect()
    }

    /// Min and max value across the window
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(Sample::value);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = &'a Sample;
    type IntoIter = std::collections::vec_deque::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
