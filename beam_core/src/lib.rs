//! # beam_core - Beam Response Engine
//!
//! `beam_core` computes the deflection, rotation, shear and bending moment of
//! a single-span beam under a uniform load over its full length, for every
//! combination of free, pinned and fixed ends. It also computes the moment of
//! inertia of rectangular and I-beam sections.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from a configuration to a sampled curve
//! - **Total**: Every configuration produces a curve; mechanisms give zero
//! - **JSON-First**: Configurations, curves and errors are serializable
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{evaluate, BeamConfiguration, Quantity, Support};
//!
//! let config = BeamConfiguration::default()
//!     .with_supports(Support::Fixed, Support::Free)
//!     .with_quantity(Quantity::Deflection);
//!
//! let curve = evaluate(&config);
//! let (_, tip) = curve.points[curve.len() - 1];
//! assert!(tip < 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`supports`] - Boundary conditions and stability classification
//! - [`equations`] - Closed-form formulas and the formula registry
//! - [`calculations`] - Response curves and cross sections
//! - [`materials`] - Young's modulus presets
//! - [`file_io`] - Session files and curve export with atomic saves
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod supports;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, evaluate_checked, BeamConfiguration, ResponseCurve, Section};
pub use equations::Quantity;
pub use errors::{CalcError, CalcResult};
pub use file_io::{export_curve, load_session, save_session, CurveExport, ExportFormat, SessionFile};
pub use materials::MaterialPreset;
pub use supports::{is_stable, Stability, Support, SupportPair};
