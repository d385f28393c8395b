//! Analysis options

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// Options for diagram sampling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Spacing of the dense diagram samples in m
    ///
    /// Concentrated-load offsets and shear zero crossings are always
    /// sampled exactly on top of this grid, so the reported per-span
    /// extrema do not depend on the step.
    pub sample_step: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { sample_step: 0.01 }
    }
}

impl AnalysisOptions {
    /// Set the dense sampling step
    pub fn with_sample_step(mut self, step: f64) -> Self {
        self.sample_step = step;
        self
    }

    pub(crate) fn validate(&self) -> BeamResult<()> {
        if !(self.sample_step > 0.0) || !self.sample_step.is_finite() {
            return Err(BeamError::InvalidInput(format!(
                "sample step must be positive and finite, got {}",
                self.sample_step
            )));
        }
        Ok(())
    }
}
