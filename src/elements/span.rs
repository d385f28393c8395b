//! Span element - one segment of the continuous beam between two supports

use serde::{Deserialize, Serialize};

/// A single span of the continuous beam
///
/// Spans are immutable once created; load effects are folded separately at
/// solve time rather than accumulated onto the span.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Span {
    /// Externally assigned span id
    pub id: u32,
    /// Span length in m
    pub length: f64,
    /// Second moment of area in m⁴
    pub inertia: f64,
}

impl Span {
    /// Create a new span
    pub fn new(id: u32, length: f64, inertia: f64) -> Self {
        Self {
            id,
            length,
            inertia,
        }
    }

    /// Relative flexibility `L·Ic/I` used by the three-moment equations
    ///
    /// `ic` is a normalizing inertia (the maximum across the beam) that
    /// keeps the system coefficients well-scaled.
    pub fn flexibility(&self, ic: f64) -> f64 {
        self.length * ic / self.inertia
    }
}
