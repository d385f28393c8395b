//! Concentrated point loads

use serde::{Deserialize, Serialize};

use super::FixedEndCoefficients;

/// A single concentrated load within a span
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude in kN
    pub magnitude: f64,
    /// Distance from the span's left end in m
    pub offset: f64,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(magnitude: f64, offset: f64) -> Self {
        Self { magnitude, offset }
    }

    /// Fixed-end coefficients with a = offset, b = L - a:
    /// g = P·a·b·(L+b)/L², r = P·a·b·(L+a)/L²
    pub fn fixed_end(&self, length: f64) -> FixedEndCoefficients {
        let a = self.offset;
        let b = length - a;
        let common = self.magnitude * a * b / (length * length);
        FixedEndCoefficients {
            g: common * (length + b),
            r: common * (length + a),
        }
    }

    /// Total applied force P
    pub fn total_force(&self) -> f64 {
        self.magnitude
    }

    /// Static moment P·(L - offset) about the right end of the span
    pub fn end_moment(&self, length: f64) -> f64 {
        self.magnitude * (length - self.offset)
    }

    /// Running shear: the full magnitude once `len` passes the load
    pub fn shear_at(&self, len: f64) -> f64 {
        if len >= self.offset {
            self.magnitude
        } else {
            0.0
        }
    }

    /// Running moment P·(len - offset) once `len` passes the load
    pub fn moment_at(&self, len: f64) -> f64 {
        if len >= self.offset {
            self.magnitude * (len - self.offset)
        } else {
            0.0
        }
    }

    /// Moment about a downstream sample point, lever arm
    /// `distance + len - offset`
    pub fn carried_moment(&self, distance: f64, len: f64) -> f64 {
        self.magnitude * (distance + len - self.offset)
    }
}
