//! Clapeyron Example - Three-Span Continuous Beam

use anyhow::Result;
use clapeyron::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Clapeyron Example: Three-Span Continuous Beam ===\n");

    let mut beam = BeamModel::new();

    // Beam layout (lengths in m, inertias in m⁴):
    //
    //   |---- 5.0 ----|---- 6.0 ----|---- 4.0 ----|
    //   ^             ^             ^             ^
    //  M=0                                       M=0
    //
    beam.add_span(1, 5.0, 2.0e-4)?;
    beam.add_span(2, 6.0, 3.0e-4)?;
    beam.add_span(3, 4.0, 2.0e-4)?;

    // Uniform loads (kN/m)
    beam.add_uniform_load(1, 15.0)?;
    beam.add_uniform_load(2, 10.0)?;

    // Concentrated loads (kN at offset from the span's left end)
    beam.add_point_load(2, 40.0, 2.5)?;
    beam.add_point_load(3, 25.0, 1.5)?;

    println!("Running three-moment analysis...\n");
    beam.analyze()?;

    println!("Support Moments (kN·m):");
    for (i, m) in beam.support_moments()?.iter().enumerate() {
        println!("  Node {i}: {m:.3}");
    }

    println!("\nNodal Shears (kN):");
    for (i, v) in beam.nodal_shears()?.iter().enumerate() {
        println!("  Node {i}: {v:.3}");
    }

    println!("\nPer-Span Peaks:");
    for (i, peak) in beam.span_peaks()?.iter().enumerate() {
        println!(
            "  Span {}: |V|max={:.3} kN, |M|max={:.3} kN·m",
            i + 1,
            peak.max_shear,
            peak.max_moment
        );
    }

    let summary = beam.summary()?;
    println!(
        "\nSummary: {} spans over {:.1} m, {} diagram samples",
        summary.num_spans, summary.total_length, summary.num_samples
    );

    // Size rectangular sections: widths 0.2-0.8 m, heights 0.5-1.5 m,
    // allowable stress 20 MPa = 20000 kN/m²
    println!("\nRunning section optimization...");
    let optimizer = SectionOptimizer::new().with_seed(2024);
    let best = optimizer.optimize(
        &beam,
        DimensionRange::new(0.2, 0.8),
        DimensionRange::new(0.5, 1.5),
        20_000.0,
    )?;

    println!("Optimized volume: {:.4} m³", best.volume);
    for (i, section) in best.sections.iter().enumerate() {
        println!(
            "  Span {}: b={:.3} m, h={:.3} m",
            i + 1,
            section.width,
            section.height
        );
    }

    println!("\n=== Analysis Complete ===");
    Ok(())
}
