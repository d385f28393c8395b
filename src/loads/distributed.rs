//! Uniformly distributed loads

use serde::{Deserialize, Serialize};

use super::FixedEndCoefficients;

/// A uniformly distributed load covering the full span
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UniformLoad {
    /// Load intensity in kN/m
    pub intensity: f64,
}

impl UniformLoad {
    /// Create a new uniform load
    pub fn new(intensity: f64) -> Self {
        Self { intensity }
    }

    /// Fixed-end coefficients: a uniform load acts symmetrically on both
    /// ends of its span, so g = r = w·L²/4
    pub fn fixed_end(&self, length: f64) -> FixedEndCoefficients {
        let term = self.intensity * length * length / 4.0;
        FixedEndCoefficients { g: term, r: term }
    }

    /// Total force w·L on the span
    pub fn total_force(&self, length: f64) -> f64 {
        self.intensity * length
    }

    /// Static moment w·L²/2 about the right end of the span
    pub fn end_moment(&self, length: f64) -> f64 {
        self.intensity * length * length / 2.0
    }

    /// Running shear w·len at local position `len`
    pub fn shear_at(&self, len: f64) -> f64 {
        self.intensity * len
    }

    /// Running moment w·len²/2 at local position `len`
    pub fn moment_at(&self, len: f64) -> f64 {
        self.intensity * len * len / 2.0
    }

    /// Moment about a downstream sample point: the resultant w·L acts at
    /// the span's midpoint, a lever arm of `distance + len - L/2`
    pub fn carried_moment(&self, span_length: f64, distance: f64, len: f64) -> f64 {
        self.intensity * span_length * (distance + len - span_length / 2.0)
    }
}
