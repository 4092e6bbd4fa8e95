//! Perturbation axes around a baseline value.

use serde::{Deserialize, Serialize};

/// `base + k * step` for `k = -half_width..=half_width`.
///
/// Values are computed directly from `k` rather than accumulated, so the
/// center entry reproduces `base` exactly and the sequence is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub base: f64,
    pub step: f64,
    pub half_width: usize,
}

impl SweepAxis {
    pub fn new(base: f64, step: f64, half_width: usize) -> Self {
        Self {
            base,
            step,
            half_width,
        }
    }

    /// Number of points, always `2 * half_width + 1`
    pub fn len(&self) -> usize {
        2 * self.half_width + 1
    }

    /// An axis always holds at least its center point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step multiple `k` of the point at `index`
    pub fn offset(&self, index: usize) -> i64 {
        index as i64 - self.half_width as i64
    }

    /// All step multiples in index order: `-n..=n`
    pub fn offsets(&self) -> impl Iterator<Item = i64> + use<> {
        let n = self.half_width as i64;
        -n..=n
    }

    /// Value at step multiple `k`
    pub fn value_at(&self, k: i64) -> f64 {
        self.base + k as f64 * self.step
    }

    /// Value at `index` (0-based, increasing `k`)
    pub fn value(&self, index: usize) -> Option<f64> {
        (index < self.len()).then(|| self.value_at(self.offset(index)))
    }

    pub fn values(&self) -> Vec<f64> {
        self.offsets().map(|k| self.value_at(k)).collect()
    }
}
