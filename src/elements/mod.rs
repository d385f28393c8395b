//! Structural elements of the continuous beam

pub mod section;
pub mod span;

pub use section::Section;
pub use span::Span;
