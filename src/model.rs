//! Beam model - continuous beam container and analysis pipeline

use std::collections::HashMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisOptions;
use crate::elements::Span;
use crate::error::{BeamError, BeamResult};
use crate::loads::{BeamLoad, FixedEndCoefficients, PointLoad, UniformLoad};
use crate::math::{self, Mat, Vec as BeamVec};
use crate::results::{AnalysisSummary, Diagram, SpanPeaks};

/// A load resolved to the physical position of its hosting span
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpanLoad {
    /// Physical index of the hosting span
    pub span: usize,
    /// The load itself
    pub load: BeamLoad,
}

/// A continuous beam over multiple supports
///
/// Spans are stored in physical order (left to right); external span ids
/// are resolved to physical indices exactly once, when a span or load is
/// registered. Both beam ends are taken as free of moment (simply
/// supported).
///
/// Sign conventions follow the three-moment solve: the central support of
/// two equal uniformly loaded spans reports `-w·L²/8`, and the sampled
/// moment diagram carries the opposite sign (sagging negative), as it
/// would be plotted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeamModel {
    /// Spans in physical order
    spans: Vec<Span>,
    /// External span id to physical index
    span_index: HashMap<u32, usize>,
    /// All registered loads
    loads: Vec<SpanLoad>,

    /// Support moments, valid after analyze()
    #[serde(skip)]
    support_moments: Option<Vec<f64>>,
    /// Nodal shears, valid after analyze()
    #[serde(skip)]
    nodal_shears: Option<Vec<f64>>,
    /// Dense diagrams, valid after analyze()
    #[serde(skip)]
    diagram: Option<Diagram>,
    /// Per-span peak |shear| and |moment|, valid after analyze()
    #[serde(skip)]
    span_peaks: Option<Vec<SpanPeaks>>,
}

impl BeamModel {
    /// Create a new empty beam
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Append a span at the right end of the beam
    pub fn add_span(&mut self, id: u32, length: f64, inertia: f64) -> BeamResult<()> {
        if !(length > 0.0) || !length.is_finite() {
            return Err(BeamError::InvalidGeometry(format!(
                "span '{id}' has non-positive length {length}"
            )));
        }
        if !(inertia > 0.0) || !inertia.is_finite() {
            return Err(BeamError::InvalidGeometry(format!(
                "span '{id}' has non-positive inertia {inertia}"
            )));
        }
        if self.span_index.contains_key(&id) {
            return Err(BeamError::DuplicateSpan(id));
        }

        self.span_index.insert(id, self.spans.len());
        self.spans.push(Span::new(id, length, inertia));
        self.invalidate();
        Ok(())
    }

    /// Register a uniformly distributed load on a span
    pub fn add_uniform_load(&mut self, span_id: u32, intensity: f64) -> BeamResult<()> {
        let span = self.resolve_span(span_id)?;
        self.loads.push(SpanLoad {
            span,
            load: BeamLoad::Uniform(UniformLoad::new(intensity)),
        });
        self.invalidate();
        Ok(())
    }

    /// Register a concentrated load on a span
    ///
    /// `offset` is measured from the span's left end and must lie within
    /// the span.
    pub fn add_point_load(&mut self, span_id: u32, magnitude: f64, offset: f64) -> BeamResult<()> {
        let span = self.resolve_span(span_id)?;
        let length = self.spans[span].length;
        if !offset.is_finite() || offset < 0.0 || offset > length {
            return Err(BeamError::LoadOutsideSpan { offset, length });
        }
        self.loads.push(SpanLoad {
            span,
            load: BeamLoad::Point(PointLoad::new(magnitude, offset)),
        });
        self.invalidate();
        Ok(())
    }

    /// Resolve an external span id to its physical position
    pub fn resolve_span(&self, id: u32) -> BeamResult<usize> {
        self.span_index
            .get(&id)
            .copied()
            .ok_or(BeamError::SpanNotFound(id))
    }

    /// Spans in physical order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// All registered loads
    pub fn loads(&self) -> &[SpanLoad] {
        &self.loads
    }

    /// Number of spans
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Total beam length
    pub fn total_length(&self) -> f64 {
        self.spans.iter().map(|s| s.length).sum()
    }

    fn invalidate(&mut self) {
        self.support_moments = None;
        self.nodal_shears = None;
        self.diagram = None;
        self.span_peaks = None;
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Run the full analysis with default options
    pub fn analyze(&mut self) -> BeamResult<()> {
        self.analyze_with(AnalysisOptions::default())
    }

    /// Run the full analysis: support moments, nodal shears, dense
    /// diagrams and per-span extrema
    pub fn analyze_with(&mut self, options: AnalysisOptions) -> BeamResult<()> {
        options.validate()?;
        if self.spans.is_empty() {
            return Err(BeamError::InvalidGeometry("beam has no spans".to_string()));
        }

        let coefficients = self.load_coefficients();
        debug!(
            "folded {} loads into fixed-end coefficients for {} spans",
            self.loads.len(),
            self.spans.len()
        );

        let moments = self.solve_support_moments(&coefficients)?;
        let shears = self.solve_nodal_shears(&moments);
        let (diagram, peaks) = self.sample_diagrams(&shears, &options)?;

        info!(
            "analysis complete: {} spans, {} diagram samples",
            self.spans.len(),
            diagram.len()
        );

        self.support_moments = Some(moments);
        self.nodal_shears = Some(shears);
        self.diagram = Some(diagram);
        self.span_peaks = Some(peaks);
        Ok(())
    }

    // ========================
    // Result Accessors
    // ========================

    /// Support moments, one per node (spans + 1)
    pub fn support_moments(&self) -> BeamResult<&[f64]> {
        self.support_moments
            .as_deref()
            .ok_or(BeamError::NotAnalyzed)
    }

    /// Nodal shears, one per node (spans + 1)
    pub fn nodal_shears(&self) -> BeamResult<&[f64]> {
        self.nodal_shears.as_deref().ok_or(BeamError::NotAnalyzed)
    }

    /// Dense shear and moment diagrams over the whole beam
    pub fn diagram(&self) -> BeamResult<&Diagram> {
        self.diagram.as_ref().ok_or(BeamError::NotAnalyzed)
    }

    /// Peak |shear| and |moment| per span
    pub fn span_peaks(&self) -> BeamResult<&[SpanPeaks]> {
        self.span_peaks.as_deref().ok_or(BeamError::NotAnalyzed)
    }

    /// Summary of the completed analysis
    pub fn summary(&self) -> BeamResult<AnalysisSummary> {
        let moments = self.support_moments()?;
        let peaks = self.span_peaks()?;
        let diagram = self.diagram()?;

        Ok(AnalysisSummary {
            num_spans: self.spans.len(),
            total_length: self.total_length(),
            max_support_moment: moments.iter().fold(0.0, |acc, m| acc.max(m.abs())),
            max_moment: peaks.iter().fold(0.0, |acc, p| acc.max(p.max_moment)),
            max_shear: peaks.iter().fold(0.0, |acc, p| acc.max(p.max_shear)),
            num_samples: diagram.len(),
        })
    }

    // ========================
    // Solver Internals
    // ========================

    /// Loads registered on one span, in registration order
    fn loads_on(&self, span: usize) -> impl Iterator<Item = &BeamLoad> {
        self.loads
            .iter()
            .filter(move |sl| sl.span == span)
            .map(|sl| &sl.load)
    }

    /// Fold every load into its span's fixed-end coefficients
    ///
    /// One deterministic pass; contributions add linearly, so the result
    /// is independent of registration order.
    fn load_coefficients(&self) -> Vec<FixedEndCoefficients> {
        let mut coefficients = vec![FixedEndCoefficients::default(); self.spans.len()];
        for sl in &self.loads {
            let length = self.spans[sl.span].length;
            coefficients[sl.span].add(sl.load.fixed_end(length));
        }
        coefficients
    }

    /// Build and solve the three-moment system for the support moments
    ///
    /// Unknowns are M0..Mn; the boundary rows pin both beam ends to zero
    /// moment, and each interior support i contributes
    /// d[i-1]·M[i-1] + 2(d[i-1]+d[i])·M[i] + d[i]·M[i+1]
    ///   = -d[i-1]·r[i-1] - d[i]·g[i]
    /// with d[i] = L[i]·Ic/I[i].
    fn solve_support_moments(&self, coefficients: &[FixedEndCoefficients]) -> BeamResult<Vec<f64>> {
        let n = self.spans.len();

        let ic = self
            .spans
            .iter()
            .map(|s| s.inertia)
            .fold(f64::NEG_INFINITY, f64::max);
        let d: Vec<f64> = self.spans.iter().map(|s| s.flexibility(ic)).collect();

        let mut a = Mat::zeros(n + 1, n + 1);
        let mut b = BeamVec::zeros(n + 1);

        a[(0, 0)] = 1.0;
        a[(n, n)] = 1.0;

        for i in 0..n.saturating_sub(1) {
            a[(i + 1, i)] = d[i];
            a[(i + 1, i + 1)] = 2.0 * (d[i] + d[i + 1]);
            a[(i + 1, i + 2)] = d[i + 1];
            b[i + 1] = -d[i] * coefficients[i].r - d[i + 1] * coefficients[i + 1].g;
        }

        let m = math::solve_linear_system(&a, &b).ok_or(BeamError::SingularSystem)?;
        if !math::all_finite(&m) {
            return Err(BeamError::NonFiniteResult(
                "support-moment vector contains NaN or infinity".to_string(),
            ));
        }

        Ok(m.iter().copied().collect())
    }

    /// Derive the nodal shear values from the support moments
    ///
    /// Each span splits its total load between its two nodes; spans
    /// sharing a node accumulate into it.
    fn solve_nodal_shears(&self, moments: &[f64]) -> Vec<f64> {
        let mut v = vec![0.0; self.spans.len() + 1];

        for (i, span) in self.spans.iter().enumerate() {
            let mut v_left = moments[i + 1] - moments[i];
            let mut total = 0.0;
            for load in self.loads_on(i) {
                total += load.total_force(span.length);
                v_left += load.end_moment(span.length);
            }
            v[i] += v_left / span.length;
            v[i + 1] += total - v_left / span.length;
        }

        v
    }

    /// Summed length from the left end of `from` to the left end of `to`
    ///
    /// The hosting span of a carried load must strictly precede the span
    /// being sampled in physical order.
    fn upstream_distance(&self, from: usize, to: usize) -> BeamResult<f64> {
        if from >= to {
            return Err(BeamError::SpanOrdering(format!(
                "span at position {from} does not strictly precede span at position {to}"
            )));
        }
        Ok(self.spans[from..to].iter().map(|s| s.length).sum())
    }

    /// Shear at local position `len` within a span
    ///
    /// `left_base` is the shear at the right end of the preceding span
    /// (zero for the first span).
    fn local_shear(&self, span: usize, len: f64, left_base: f64, shears: &[f64]) -> f64 {
        let mut s = left_base - shears[span];
        for load in self.loads_on(span) {
            s += load.shear_at(len);
        }
        s
    }

    /// Bending moment at local position `len` within a span
    ///
    /// Accumulates the upstream nodal shears and upstream loads over their
    /// lever arms, then the span's own running load moment.
    fn local_moment(&self, span: usize, len: f64, shears: &[f64]) -> BeamResult<f64> {
        let mut m = -shears[span] * len;
        for j in 0..span {
            m -= shears[j] * (self.upstream_distance(j, span)? + len);
        }

        for sl in &self.loads {
            if sl.span < span {
                let distance = self.upstream_distance(sl.span, span)?;
                m += sl
                    .load
                    .carried_moment(self.spans[sl.span].length, distance, len);
            } else if sl.span == span {
                m += sl.load.moment_at(len);
            }
        }

        Ok(m)
    }

    /// Local sample positions for one span: the dense grid plus every
    /// concentrated-load offset plus every exact zero crossing of the
    /// piecewise-affine shear (the apex of the moment curve)
    fn sample_positions(
        &self,
        span: usize,
        left_base: f64,
        shears: &[f64],
        step: f64,
    ) -> Vec<f64> {
        let length = self.spans[span].length;
        let steps = (length / step).ceil().max(1.0) as usize;

        let mut positions: Vec<f64> = (0..=steps).map(|k| (k as f64 * step).min(length)).collect();

        // Kinks of the shear diagram within the span
        let mut kinks: Vec<f64> = self
            .loads_on(span)
            .filter_map(|load| load.shear_kink())
            .filter(|&a| a > 0.0 && a < length)
            .collect();
        positions.extend_from_slice(&kinks);

        // Between kinks the shear is affine with slope equal to the summed
        // distributed intensity; a sign change there locates the exact
        // extremum of the quadratic moment curve.
        let slope: f64 = self.loads_on(span).map(|load| load.intensity()).sum();
        if slope != 0.0 {
            kinks.sort_by(f64::total_cmp);
            let mut bounds = vec![0.0];
            bounds.extend_from_slice(&kinks);
            bounds.push(length);

            for pair in bounds.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let s_a = self.local_shear(span, a, left_base, shears);
                let s_b = s_a + slope * (b - a);
                if s_a * s_b < 0.0 {
                    positions.push(a - s_a / slope);
                }
            }
        }

        positions.sort_by(f64::total_cmp);
        positions.dedup_by(|a, b| (*a - *b).abs() < 1e-12 * length.max(1.0));
        positions
    }

    /// Walk the beam producing the dense diagrams and per-span peaks
    fn sample_diagrams(
        &self,
        shears: &[f64],
        options: &AnalysisOptions,
    ) -> BeamResult<(Diagram, Vec<SpanPeaks>)> {
        let mut diagram = Diagram::default();
        let mut peaks = vec![SpanPeaks::default(); self.spans.len()];

        let mut left_base = 0.0;
        let mut start = 0.0;
        for (i, span) in self.spans.iter().enumerate() {
            let positions = self.sample_positions(i, left_base, shears, options.sample_step);
            for &len in &positions {
                let s = self.local_shear(i, len, left_base, shears);
                let m = self.local_moment(i, len, shears)?;
                diagram.position.push(start + len);
                diagram.shear.push(s);
                diagram.moment.push(m);
                peaks[i].record(s, m);
            }
            left_base = self.local_shear(i, span.length, left_base, shears);
            start += span.length;
        }

        Ok((diagram, peaks))
    }
}
