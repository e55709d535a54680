//! # Beam Mechanics Equations
//!
//! All closed-form formulas used by the response engine live here, so they
//! can be checked against a statics reference in one place.
//!
//! ## Modules
//!
//! - [`beam`] - Deflection, rotation, shear and moment for six support pairs
//! - [`section`] - Second moment of area for rectangular and I-beam sections
//! - [`registry`] - Lookup table from (left, right, quantity) to a formula
//!
//! ## Sign Conventions
//!
//! - **Load**: Positive downward (gravity direction)
//! - **Deflection**: Negative downward
//! - **Moment**: Positive sagging
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - AISC Steel Construction Manual, Beam Diagrams and Formulas

pub mod beam;
pub mod registry;
pub mod section;

pub use section::{
    i_beam_moment_of_inertia,
    rectangular_moment_of_inertia,
    web_clear_height,
};

pub use registry::{
    all_formulas,
    generate_formulas_markdown,
    has_closed_form,
    lookup,
    Formula,
    FormulaFn,
    FormulaKey,
    Quantity,
    ZERO_FORMULA,
};
