//! Integration tests for the continuous-beam analysis pipeline

use approx::{assert_abs_diff_eq, assert_relative_eq};
use clapeyron::prelude::*;

/// Midspan point load on a simply supported span: peak moment P·L/4
#[test]
fn single_span_midspan_point_load() {
    let p = 40.0;
    let l = 4.0;

    let mut beam = BeamModel::new();
    beam.add_span(1, l, 1.0e-4).unwrap();
    beam.add_point_load(1, p, l / 2.0).unwrap();
    beam.analyze().unwrap();

    // Both end moments are zero by the boundary assumption
    let moments = beam.support_moments().unwrap();
    assert_abs_diff_eq!(moments[0], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(moments[1], 0.0, epsilon = 1e-9);

    // Each support carries half the load
    let shears = beam.nodal_shears().unwrap();
    assert_relative_eq!(shears[0], p / 2.0, epsilon = 1e-9);
    assert_relative_eq!(shears[1], p / 2.0, epsilon = 1e-9);

    // Peak moment is P·L/4
    let peaks = beam.span_peaks().unwrap();
    assert_relative_eq!(peaks[0].max_moment, p * l / 4.0, epsilon = 1e-9);
    assert_relative_eq!(peaks[0].max_shear, p / 2.0, epsilon = 1e-9);

    // The sampled diagram carries it at midspan (sagging negative)
    let diagram = beam.diagram().unwrap();
    let mid = diagram
        .position
        .iter()
        .position(|&x| (x - l / 2.0).abs() < 1e-12)
        .expect("midspan must be sampled");
    assert_relative_eq!(diagram.moment[mid], -p * l / 4.0, epsilon = 1e-9);
}

/// Two equal uniformly loaded spans: central support moment -w·L²/8
#[test]
fn two_equal_spans_uniform_load() {
    let w = 10.0;
    let l = 5.0;

    let mut beam = BeamModel::new();
    beam.add_span(1, l, 2.0e-4).unwrap();
    beam.add_span(2, l, 2.0e-4).unwrap();
    beam.add_uniform_load(1, w).unwrap();
    beam.add_uniform_load(2, w).unwrap();
    beam.analyze().unwrap();

    let moments = beam.support_moments().unwrap();
    assert_abs_diff_eq!(moments[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(moments[1], -w * l * l / 8.0, epsilon = 1e-9);
    assert_abs_diff_eq!(moments[2], 0.0, epsilon = 1e-9);
}

/// The extrema of the quadratic moment curve are exact even when the
/// dense grid never lands on them
#[test]
fn uniform_span_peak_moment_is_exact_between_samples() {
    let w = 8.0;
    let l = 5.0;

    let mut beam = BeamModel::new();
    beam.add_span(1, l, 1.0e-4).unwrap();
    beam.add_uniform_load(1, w).unwrap();
    // A step that does not divide L/2, so the apex falls between grid points
    beam.analyze_with(AnalysisOptions::default().with_sample_step(0.3))
        .unwrap();

    let peaks = beam.span_peaks().unwrap();
    assert_relative_eq!(peaks[0].max_moment, w * l * l / 8.0, epsilon = 1e-9);
}

/// Total applied load balances the sum of the nodal shears
#[test]
fn nodal_shears_balance_applied_loads() {
    let mut beam = BeamModel::new();
    beam.add_span(1, 5.0, 2.0e-4).unwrap();
    beam.add_span(2, 6.0, 3.0e-4).unwrap();
    beam.add_span(3, 4.0, 2.0e-4).unwrap();
    beam.add_uniform_load(1, 15.0).unwrap();
    beam.add_uniform_load(2, 10.0).unwrap();
    beam.add_point_load(2, 40.0, 2.5).unwrap();
    beam.add_point_load(3, 25.0, 1.5).unwrap();
    beam.analyze().unwrap();

    let total_load = 15.0 * 5.0 + 10.0 * 6.0 + 40.0 + 25.0;
    let total_shear: f64 = beam.nodal_shears().unwrap().iter().sum();
    assert_relative_eq!(total_shear, total_load, epsilon = 1e-9);
}

/// On a single span the two nodal shears split exactly the span's load
#[test]
fn single_span_shear_split() {
    let w = 12.0;
    let l = 3.0;
    let p = 20.0;

    let mut beam = BeamModel::new();
    beam.add_span(1, l, 1.0e-4).unwrap();
    beam.add_uniform_load(1, w).unwrap();
    beam.add_point_load(1, p, 1.0).unwrap();
    beam.analyze().unwrap();

    let shears = beam.nodal_shears().unwrap();
    assert_relative_eq!(shears[0] + shears[1], w * l + p, epsilon = 1e-9);
}

/// Trapezoid-integrated sampled shear reproduces the sampled moment
///
/// Shear is piecewise affine and the grid hits every kink, so for a beam
/// of distributed loads the trapezoid rule is exact up to rounding.
#[test]
fn integrated_shear_matches_moment_change() {
    let mut beam = BeamModel::new();
    beam.add_span(1, 5.0, 2.0e-4).unwrap();
    beam.add_span(2, 4.0, 2.0e-4).unwrap();
    beam.add_uniform_load(1, 10.0).unwrap();
    beam.add_uniform_load(2, 18.0).unwrap();
    beam.analyze().unwrap();

    let diagram = beam.diagram().unwrap();
    let mut integral = diagram.moment[0];
    for k in 1..diagram.len() {
        let dx = diagram.position[k] - diagram.position[k - 1];
        integral += 0.5 * (diagram.shear[k] + diagram.shear[k - 1]) * dx;
        assert_abs_diff_eq!(integral, diagram.moment[k], epsilon = 1e-6);
    }
}

/// Reported peaks are the maxima actually present in the sampled sequences
#[test]
fn peaks_match_sampled_extrema() {
    let mut beam = BeamModel::new();
    beam.add_span(1, 5.0, 2.0e-4).unwrap();
    beam.add_span(2, 6.0, 3.0e-4).unwrap();
    beam.add_uniform_load(1, 15.0).unwrap();
    beam.add_point_load(2, 40.0, 2.5).unwrap();
    beam.analyze().unwrap();

    let diagram = beam.diagram().unwrap();
    let peaks = beam.span_peaks().unwrap();

    // Moment is continuous across supports, so per-span slices are
    // unambiguous
    let mut start = 0.0;
    for (span, peak) in beam.spans().iter().zip(peaks) {
        let end = start + span.length;
        let max_moment = diagram
            .position
            .iter()
            .zip(&diagram.moment)
            .filter(|(x, _)| **x >= start - 1e-12 && **x <= end + 1e-12)
            .fold(0.0_f64, |acc, (_, m)| acc.max(m.abs()));
        assert_relative_eq!(peak.max_moment, max_moment, epsilon = 1e-12);
        start = end;
    }

    // Shear jumps at supports; compare the global extremum
    let max_shear = diagram
        .shear
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let max_peak_shear = peaks.iter().fold(0.0_f64, |acc, p| acc.max(p.max_shear));
    assert_relative_eq!(max_peak_shear, max_shear, epsilon = 1e-12);
}

/// An unloaded beam produces identically zero results
#[test]
fn unloaded_beam_is_all_zero() {
    let mut beam = BeamModel::new();
    beam.add_span(1, 5.0, 2.0e-4).unwrap();
    beam.add_span(2, 4.0, 1.0e-4).unwrap();
    beam.analyze().unwrap();

    for &m in beam.support_moments().unwrap() {
        assert_abs_diff_eq!(m, 0.0, epsilon = 1e-12);
    }
    for &v in beam.nodal_shears().unwrap() {
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-12);
    }
    let diagram = beam.diagram().unwrap();
    for k in 0..diagram.len() {
        assert_abs_diff_eq!(diagram.shear[k], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(diagram.moment[k], 0.0, epsilon = 1e-12);
    }
}

/// Diagram sequences are equal-length, ordered and cover the whole beam
#[test]
fn diagram_shape_is_consistent() {
    let mut beam = BeamModel::new();
    beam.add_span(1, 5.0, 2.0e-4).unwrap();
    beam.add_span(2, 4.0, 2.0e-4).unwrap();
    beam.add_uniform_load(1, 10.0).unwrap();
    beam.analyze().unwrap();

    let diagram = beam.diagram().unwrap();
    assert_eq!(diagram.position.len(), diagram.shear.len());
    assert_eq!(diagram.position.len(), diagram.moment.len());
    assert!(diagram
        .position
        .windows(2)
        .all(|pair| pair[1] >= pair[0] - 1e-12));
    assert_abs_diff_eq!(diagram.position[0], 0.0);
    assert_relative_eq!(
        diagram.position[diagram.len() - 1],
        beam.total_length(),
        epsilon = 1e-12
    );
}

/// Optimized sections honor the stress constraint end to end
#[test]
fn optimizer_respects_stress_constraint() {
    let mut beam = BeamModel::new();
    beam.add_span(1, 5.0, 2.0e-4).unwrap();
    beam.add_span(2, 6.0, 3.0e-4).unwrap();
    beam.add_uniform_load(1, 15.0).unwrap();
    beam.add_point_load(2, 40.0, 3.0).unwrap();
    beam.analyze().unwrap();

    let allowable = 20_000.0;
    let safety = 1.2;
    let best = SectionOptimizer::new()
        .with_runs(500)
        .with_safety_factor(safety)
        .with_seed(99)
        .optimize(
            &beam,
            DimensionRange::new(0.2, 0.8),
            DimensionRange::new(0.5, 1.5),
            allowable,
        )
        .unwrap();

    assert_eq!(best.sections.len(), beam.span_count());
    assert!(best.volume > 0.0);

    let peaks = beam.span_peaks().unwrap();
    for (section, peak) in best.sections.iter().zip(peaks) {
        assert!(peak.max_moment / section.elastic_modulus() <= allowable / safety + 1e-9);
        assert!(section.width >= 0.2 && section.width <= 0.8);
        assert!(section.height >= 0.5 && section.height <= 1.5);
    }
}
