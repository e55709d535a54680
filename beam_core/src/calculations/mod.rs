//! # Beam Calculations
//!
//! Each calculation follows the pattern:
//!
//! - An input type (JSON-serializable, with defaults)
//! - A result type (JSON-serializable)
//! - A pure function from one to the other
//!
//! ## Available Calculations
//!
//! - [`response`] - Deflection, rotation, shear or moment curve along the span
//! - [`section`] - Moment of inertia from cross-section dimensions

pub mod response;
pub mod section;

// Re-export commonly used types
pub use response::{
    evaluate, evaluate_checked, evaluate_sampled, sample_positions, BeamConfiguration,
    CurveExtremes, ResponseCurve, MIN_SAMPLE_COUNT, SAMPLE_COUNT,
};
pub use section::Section;
