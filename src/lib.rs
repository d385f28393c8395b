//! Clapeyron - continuous beam analysis via the three-moment method
//!
//! This library analyzes a statically-indeterminate multi-span beam:
//! - support moments from the three-moment (Clapeyron) equations
//! - nodal shears and dense shear/moment diagrams with exact per-span
//!   extrema
//! - random-search sizing of rectangular cross-sections per span under an
//!   allowable-bending-stress constraint
//!
//! Input parsing, diagram rendering and report formatting are left to
//! external collaborators; this crate is a pure computation library.
//!
//! ## Example
//! ```rust
//! use clapeyron::prelude::*;
//!
//! let mut beam = BeamModel::new();
//!
//! // Two 5 m spans with the same stiffness
//! beam.add_span(1, 5.0, 2.0e-4).unwrap();
//! beam.add_span(2, 5.0, 2.0e-4).unwrap();
//!
//! // 12 kN/m over the first span, 30 kN at midspan of the second
//! beam.add_uniform_load(1, 12.0).unwrap();
//! beam.add_point_load(2, 30.0, 2.5).unwrap();
//!
//! // Solve moments, shears and diagrams
//! beam.analyze().unwrap();
//! let moments = beam.support_moments().unwrap();
//! assert_eq!(moments.len(), 3);
//!
//! // Size rectangular sections for the peak moments
//! let optimizer = SectionOptimizer::new().with_seed(42).with_runs(500);
//! let best = optimizer
//!     .optimize(
//!         &beam,
//!         DimensionRange::new(0.2, 0.8),
//!         DimensionRange::new(0.5, 1.5),
//!         20_000.0,
//!     )
//!     .unwrap();
//! assert_eq!(best.sections.len(), 2);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod optimize;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::AnalysisOptions;
    pub use crate::elements::{Section, Span};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::{BeamLoad, FixedEndCoefficients, PointLoad, UniformLoad};
    pub use crate::model::{BeamModel, SpanLoad};
    pub use crate::optimize::{DimensionRange, OptimizedBeam, SectionOptimizer};
    pub use crate::results::{AnalysisSummary, Diagram, SpanPeaks};
}
