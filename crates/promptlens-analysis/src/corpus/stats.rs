//! Mergeable score statistics.

use serde::{Deserialize, Serialize};

/// Running count, sum and sum of squares. Merging two accumulators equals
/// accumulating both inputs, which keeps corpus folds associative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreAccumulator {
    pub count: u64,
    pub sum: f64,
    pub sum_sq: f64,
}

impl ScoreAccumulator {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_sq += value * value;
    }

    pub fn merge(&mut self, other: &ScoreAccumulator) {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
    }

    /// Mean, or 0 when empty.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// Population standard deviation, or 0 when empty.
    pub fn std_dev(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        // Rounding can push the variance slightly below zero.
        (self.sum_sq / self.count as f64 - mean * mean).max(0.0).sqrt()
    }

    pub fn stats(&self) -> ScoreStats {
        ScoreStats {
            mean: self.mean(),
            std_dev: self.std_dev(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreStats {
    pub mean: f64,
    pub std_dev: f64,
}
