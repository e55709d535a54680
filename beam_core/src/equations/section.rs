//! # Cross-Section Inertia Formulas
//!
//! Second moment of area about the strong (horizontal centroidal) axis for
//! the two section shapes the beam viewer offers.
//!
//! ## Notation
//!
//! - `b` = Overall width (flange width for the I-beam)
//! - `d` = Overall depth (height)
//! - `tf` = Flange thickness
//! - `tw` = Web thickness
//! - `hw` = Clear web height between flanges, d - 2·tf
//!
//! These functions are plain arithmetic and do not check their inputs. Use
//! [`crate::calculations::Section::validate`] when dimensions come from a user.

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Moment of inertia of a solid rectangle about its centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← neutral axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bd³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(4.0, 4.0);
/// assert!((i - 21.3333).abs() < 0.001);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d * d * d / 12.0
}

// =============================================================================
// I-BEAM SECTION
// =============================================================================

/// Clear height of the web between the two flanges
///
/// # Formula
/// hw = d - 2·tf
#[inline]
pub fn web_clear_height(d: f64, tf: f64) -> f64 {
    d - 2.0 * tf
}

/// Moment of inertia of a doubly-symmetric I-beam
///
/// ```text
///     ┌─────────────┐  ┬ tf
///     └────┐   ┌────┘  ┴
///          │   │
///        d │   │ hw
///          │tw │
///     ┌────┘   └────┐  ┬
///     └─────────────┘  ┴ tf
///            b
/// ```
///
/// # Formula
/// I = tw·hw³/12 + (b/12)(d³ - hw³)
///
/// The web term uses the clear height only and the flange term is the full
/// b × d rectangle less a b × hw rectangle.
///
/// # Example
/// ```rust
/// use beam_core::equations::section::i_beam_moment_of_inertia;
///
/// // hw = 9: I = 0.3·729/12 + (8/12)(1000 - 729)
/// let i = i_beam_moment_of_inertia(8.0, 10.0, 0.5, 0.3);
/// assert!((i - 198.8917).abs() < 0.001);
/// ```
#[inline]
pub fn i_beam_moment_of_inertia(b: f64, d: f64, tf: f64, tw: f64) -> f64 {
    let hw = web_clear_height(d, tf);
    let web = tw * hw.powi(3) / 12.0;
    let flanges = (b / 12.0) * (d.powi(3) - hw.powi(3));
    web + flanges
}

// =============================================================================
// UNIT TESTS
// =============================================================================
