//! Load types and their static effects on a span

pub mod distributed;
pub mod point_load;

pub use distributed::UniformLoad;
pub use point_load::PointLoad;

use serde::{Deserialize, Serialize};

/// Fixed-end coefficients of a span's load, the boundary terms of the
/// three-moment equation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FixedEndCoefficients {
    /// Left-end term
    pub g: f64,
    /// Right-end term
    pub r: f64,
}

impl FixedEndCoefficients {
    /// Accumulate another load's contribution
    pub fn add(&mut self, other: FixedEndCoefficients) {
        self.g += other.g;
        self.r += other.r;
    }
}

/// A load applied to one span of the beam
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum BeamLoad {
    /// Uniformly distributed load over the full span
    Uniform(UniformLoad),
    /// Single concentrated load at an offset from the span's left end
    Point(PointLoad),
}

impl BeamLoad {
    /// Fixed-end coefficients for the hosting span
    pub fn fixed_end(&self, length: f64) -> FixedEndCoefficients {
        match self {
            BeamLoad::Uniform(w) => w.fixed_end(length),
            BeamLoad::Point(p) => p.fixed_end(length),
        }
    }

    /// Total applied force on the hosting span
    pub fn total_force(&self, length: f64) -> f64 {
        match self {
            BeamLoad::Uniform(w) => w.total_force(length),
            BeamLoad::Point(p) => p.total_force(),
        }
    }

    /// Static moment about the right end of the hosting span
    pub fn end_moment(&self, length: f64) -> f64 {
        match self {
            BeamLoad::Uniform(w) => w.end_moment(length),
            BeamLoad::Point(p) => p.end_moment(length),
        }
    }

    /// Running shear contribution at local position `len` within the
    /// hosting span
    pub fn shear_at(&self, len: f64) -> f64 {
        match self {
            BeamLoad::Uniform(w) => w.shear_at(len),
            BeamLoad::Point(p) => p.shear_at(len),
        }
    }

    /// Running moment contribution at local position `len` within the
    /// hosting span
    pub fn moment_at(&self, len: f64) -> f64 {
        match self {
            BeamLoad::Uniform(w) => w.moment_at(len),
            BeamLoad::Point(p) => p.moment_at(len),
        }
    }

    /// Moment contribution carried to a strictly downstream span
    ///
    /// `span_length` is the hosting span's length, `distance` the summed
    /// length from the hosting span's left end to the sampled span's left
    /// end, and `len` the local position within the sampled span.
    pub fn carried_moment(&self, span_length: f64, distance: f64, len: f64) -> f64 {
        match self {
            BeamLoad::Uniform(w) => w.carried_moment(span_length, distance, len),
            BeamLoad::Point(p) => p.carried_moment(distance, len),
        }
    }

    /// Local offsets within the hosting span where the shear diagram has a
    /// jump (empty for distributed loads)
    pub fn shear_kink(&self) -> Option<f64> {
        match self {
            BeamLoad::Uniform(_) => None,
            BeamLoad::Point(p) => Some(p.offset),
        }
    }

    /// Distributed intensity, zero for concentrated loads
    pub fn intensity(&self) -> f64 {
        match self {
            BeamLoad::Uniform(w) => w.intensity,
            BeamLoad::Point(_) => 0.0,
        }
    }
}
