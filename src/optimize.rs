//! Stochastic rectangular cross-section sizing
//!
//! Pure random search: every trial draws a width and height per span,
//! feasible trials are ranked by total material volume, and the minimum
//! is kept. No annealing, no gradients.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::elements::{Section, Span};
use crate::error::{BeamError, BeamResult};
use crate::model::BeamModel;
use crate::results::SpanPeaks;

/// Inclusive sampling range for one section dimension
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DimensionRange {
    /// Lower bound in m
    pub min: f64,
    /// Upper bound in m
    pub max: f64,
}

impl DimensionRange {
    /// Create a new range
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &str) -> BeamResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min <= 0.0 {
            return Err(BeamError::InvalidSearchBounds(format!(
                "{name} bounds must be positive and finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(BeamError::InvalidSearchBounds(format!(
                "{name} bounds are inverted: [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    fn sample(&self, rng: &mut StdRng) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// The best beam found by the search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedBeam {
    /// Total material volume in m³
    pub volume: f64,
    /// One rectangular section per span, in physical order
    pub sections: Vec<Section>,
}

/// Random-search optimizer for per-span rectangular sections
///
/// The trial count scales with the span count (`runs · spans · 2`), and a
/// fixed seed makes the search fully deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionOptimizer {
    /// Base number of runs; total trials = runs · spans · 2
    pub runs: usize,
    /// Safety factor applied to the allowable stress
    pub safety_factor: f64,
    /// Fixed RNG seed; None draws from entropy
    pub seed: Option<u64>,
}

impl Default for SectionOptimizer {
    fn default() -> Self {
        Self {
            runs: 20_000,
            safety_factor: 1.0,
            seed: None,
        }
    }
}

impl SectionOptimizer {
    /// Create an optimizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base run count
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Set the safety factor
    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        self.safety_factor = safety_factor;
        self
    }

    /// Fix the RNG seed for reproducible results
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Search for the minimum-volume set of sections satisfying the
    /// bending-stress constraint on every span
    ///
    /// `allowable_stress` shares units with `moment / section modulus`
    /// (kN/m² throughout this crate). The model must have been analyzed,
    /// so that per-span peak moments are available. Trials violating the
    /// constraint on any span are rejected outright; if no feasible trial
    /// is drawn across the whole search the bounds are too tight and
    /// `NoFeasibleSection` is returned.
    pub fn optimize(
        &self,
        model: &BeamModel,
        width: DimensionRange,
        height: DimensionRange,
        allowable_stress: f64,
    ) -> BeamResult<OptimizedBeam> {
        width.validate("width")?;
        height.validate("height")?;
        if !(allowable_stress > 0.0) || !allowable_stress.is_finite() {
            return Err(BeamError::InvalidSearchBounds(format!(
                "allowable stress must be positive and finite, got {allowable_stress}"
            )));
        }
        if !(self.safety_factor > 0.0) || !self.safety_factor.is_finite() {
            return Err(BeamError::InvalidSearchBounds(format!(
                "safety factor must be positive and finite, got {}",
                self.safety_factor
            )));
        }

        let peaks = model.span_peaks()?;
        let spans = model.spans();
        let stress_limit = allowable_stress / self.safety_factor;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let trials = self.runs * spans.len() * 2;
        let mut best: Option<OptimizedBeam> = None;
        let mut feasible = 0usize;

        for _ in 0..trials {
            let Some(candidate) =
                self.sample_trial(&mut rng, spans, peaks, &width, &height, stress_limit)
            else {
                continue;
            };
            feasible += 1;
            if best.as_ref().map_or(true, |b| candidate.volume < b.volume) {
                best = Some(candidate);
            }
        }

        debug!("section search: {feasible} of {trials} trials feasible");
        best.ok_or(BeamError::NoFeasibleSection)
    }

    /// Draw one trial; None if any span violates the stress constraint
    fn sample_trial(
        &self,
        rng: &mut StdRng,
        spans: &[Span],
        peaks: &[SpanPeaks],
        width: &DimensionRange,
        height: &DimensionRange,
        stress_limit: f64,
    ) -> Option<OptimizedBeam> {
        let mut sections = Vec::with_capacity(spans.len());
        let mut volume = 0.0;

        for (span, peak) in spans.iter().zip(peaks) {
            let section = Section::rectangular(width.sample(rng), height.sample(rng));
            if peak.max_moment / section.elastic_modulus() > stress_limit {
                return None;
            }
            volume += section.area() * span.length;
            sections.push(section);
        }

        Some(OptimizedBeam { volume, sections })
    }
}
