//! Result types for beam analysis

use serde::{Deserialize, Serialize};

/// Dense shear and moment diagrams over the whole beam
///
/// The three sequences are equal-length and ordered by position. The shear
/// sequence carries the jump at each support (the shared node is sampled
/// from both adjacent spans), matching the usual plotted diagram.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagram {
    /// Global position from the beam's left end in m
    pub position: Vec<f64>,
    /// Shear at each position in kN
    pub shear: Vec<f64>,
    /// Bending moment at each position in kN·m
    pub moment: Vec<f64>,
}

impl Diagram {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// True if no samples were produced
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }
}

/// Peak absolute shear and moment observed within one span
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpanPeaks {
    /// Maximum |shear| in kN
    pub max_shear: f64,
    /// Maximum |moment| in kN·m
    pub max_moment: f64,
}

impl SpanPeaks {
    /// Fold one sample into the running peaks
    pub(crate) fn record(&mut self, shear: f64, moment: f64) {
        if shear.abs() > self.max_shear {
            self.max_shear = shear.abs();
        }
        if moment.abs() > self.max_moment {
            self.max_moment = moment.abs();
        }
    }
}

/// Summary of a completed analysis, for reporting collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of spans
    pub num_spans: usize,
    /// Total beam length in m
    pub total_length: f64,
    /// Largest |support moment| in kN·m
    pub max_support_moment: f64,
    /// Largest per-span peak |moment| in kN·m
    pub max_moment: f64,
    /// Largest per-span peak |shear| in kN
    pub max_shear: f64,
    /// Number of diagram samples
    pub num_samples: usize,
}
