//! Rectangular cross-section properties

use serde::{Deserialize, Serialize};

/// A rectangular cross-section sized by the optimizer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Section {
    /// Width in m
    pub width: f64,
    /// Height (depth) in m
    pub height: f64,
}

impl Section {
    /// Create a rectangular section
    pub fn rectangular(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Cross-sectional area in m²
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Elastic section modulus about the strong axis in m³ (b·h²/6)
    pub fn elastic_modulus(&self) -> f64 {
        self.width * self.height.powi(2) / 6.0
    }

    /// Second moment of area about the strong axis in m⁴ (b·h³/12)
    pub fn inertia(&self) -> f64 {
        self.width * self.height.powi(3) / 12.0
    }

    /// Bending stress produced by a moment on this section
    pub fn bending_stress(&self, moment: f64) -> f64 {
        moment / self.elastic_modulus()
    }
}
