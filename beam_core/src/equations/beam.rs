//! # Uniform Load Beam Formulas
//!
//! Closed-form deflection, rotation, shear and moment for a single span under
//! a uniformly distributed load over the full length, one block per pair of
//! end conditions.
//!
//! ## Notation
//!
//! - `w` = Uniform load intensity (force per unit length)
//! - `l` = Span length
//! - `x` = Position along the beam from the left end, 0 ≤ x ≤ L
//! - `ei` = Flexural rigidity E·I
//! - `y` = Deflection, `θ` = Rotation, `V` = Shear, `M` = Moment
//!
//! ## Sign Conventions
//!
//! - Load: positive downward
//! - Deflection: negative downward (a positive load gives y ≤ 0)
//! - Moment: positive sagging
//!
//! The free-fixed rotation, and the fixed-pinned deflection and moment, are
//! written about the right end using `u = x - L`. The free-fixed rotation
//! and shear come out with the opposite sign to dy/dx and dM/dx
//! respectively.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - AISC Steel Construction Manual, Beam Diagrams and Formulas

// =============================================================================
// FIXED-FREE (cantilever, fixed at x = 0)
// =============================================================================

/// Deflection of a cantilever fixed at the left end
///
/// ```text
///   ┃↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///   ┃═════════════
///   ┃
/// ```
///
/// # Formula
/// y(x) = -wx²(6L² - 4Lx + x²) / (24EI)
///
/// Tip deflection: y(L) = -wL⁴/(8EI)
#[inline]
pub fn fixed_free_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -(w * x * x / (24.0 * ei)) * (6.0 * l * l - 4.0 * l * x + x * x)
}

/// Rotation of a cantilever fixed at the left end
///
/// # Formula
/// θ(x) = -wx(3L² - 3Lx + x²) / (6EI)
#[inline]
pub fn fixed_free_rotation(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -(w * x / (6.0 * ei)) * (3.0 * l * l - 3.0 * l * x + x * x)
}

/// Shear in a cantilever fixed at the left end
///
/// # Formula
/// V(x) = w(L - x)
#[inline]
pub fn fixed_free_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l - x)
}

/// Moment in a cantilever fixed at the left end
///
/// # Formula
/// M(x) = -w(L - x)²/2
///
/// Root moment: M(0) = -wL²/2
#[inline]
pub fn fixed_free_moment(w: f64, l: f64, x: f64) -> f64 {
    -w * (l - x).powi(2) / 2.0
}

// =============================================================================
// FREE-FIXED (cantilever, fixed at x = L)
// =============================================================================

/// Deflection of a cantilever fixed at the right end
///
/// # Formula
/// y(x) = -w(x⁴ - 4L³x + 3L⁴) / (24EI)
///
/// Tip deflection: y(0) = -wL⁴/(8EI)
#[inline]
pub fn free_fixed_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -(w / (24.0 * ei)) * (x.powi(4) - 4.0 * l.powi(3) * x + 3.0 * l.powi(4))
}

/// Rotation of a cantilever fixed at the right end
///
/// # Formula
/// θ(x) = wu(3L² + 3Lu + u²) / (6EI),  u = x - L
#[inline]
pub fn free_fixed_rotation(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    let u = x - l;
    (w * u / (6.0 * ei)) * (3.0 * l * l + 3.0 * l * u + u * u)
}

/// Shear in a cantilever fixed at the right end
///
/// # Formula
/// V(x) = wx
#[inline]
pub fn free_fixed_shear(w: f64, _l: f64, x: f64) -> f64 {
    w * x
}

/// Moment in a cantilever fixed at the right end
///
/// # Formula
/// M(x) = -wx²/2
#[inline]
pub fn free_fixed_moment(w: f64, _l: f64, x: f64) -> f64 {
    -w * x * x / 2.0
}

// =============================================================================
// FIXED-FIXED
// =============================================================================

/// Deflection of a beam fixed at both ends
///
/// ```text
///   ┃↓↓↓↓↓↓↓↓↓↓↓↓↓┃ w
///   ┃═════════════┃
///   ┃             ┃
/// ```
///
/// # Formula
/// y(x) = -wx²(L - x)² / (24EI)
///
/// Midspan: y(L/2) = -wL⁴/(384EI)
#[inline]
pub fn fixed_fixed_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -(w * x * x / (24.0 * ei)) * (l - x).powi(2)
}

/// Rotation of a beam fixed at both ends
///
/// # Formula
/// θ(x) = -wx(L² - 3Lx + 2x²) / (12EI)
#[inline]
pub fn fixed_fixed_rotation(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -w * x * (l * l - 3.0 * l * x + 2.0 * x * x) / (12.0 * ei)
}

/// Shear in a beam fixed at both ends
///
/// # Formula
/// V(x) = w(L/2 - x)
#[inline]
pub fn fixed_fixed_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// Moment in a beam fixed at both ends
///
/// # Formula
/// M(x) = w(6Lx - 6x² - L²) / 12
///
/// - End moments: M(0) = M(L) = -wL²/12
/// - Midspan: M(L/2) = wL²/24
#[inline]
pub fn fixed_fixed_moment(w: f64, l: f64, x: f64) -> f64 {
    (w / 12.0) * (6.0 * l * x - 6.0 * x * x - l * l)
}

// =============================================================================
// PINNED-PINNED (simply supported)
// =============================================================================

/// Deflection of a simply-supported beam
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═══════════════
///    △             △
/// ```
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// y(x) = -wx(L³ - 2Lx² + x³) / (24EI)
///
/// Midspan: y(L/2) = -5wL⁴/(384EI)
#[inline]
pub fn pinned_pinned_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -(w * x / (24.0 * ei)) * (l.powi(3) - 2.0 * l * x * x + x.powi(3))
}

/// Rotation of a simply-supported beam
///
/// # Formula
/// θ(x) = -w(L³ - 6Lx² + 4x³) / (24EI)
#[inline]
pub fn pinned_pinned_rotation(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -w * (l.powi(3) - 6.0 * l * x * x + 4.0 * x.powi(3)) / (24.0 * ei)
}

/// Shear in a simply-supported beam
///
/// # Formula
/// V(x) = w(L/2 - x)
#[inline]
pub fn pinned_pinned_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// Moment in a simply-supported beam
///
/// # Formula
/// M(x) = wx(L - x)/2
///
/// Maximum at midspan: M(L/2) = wL²/8
#[inline]
pub fn pinned_pinned_moment(w: f64, l: f64, x: f64) -> f64 {
    (w * x / 2.0) * (l - x)
}

// =============================================================================
// PINNED-FIXED (propped cantilever, fixed at x = L)
// =============================================================================

/// Deflection of a beam pinned at the left and fixed at the right
///
/// # Formula
/// y(x) = -wx(L³ - 3Lx² + 2x³) / (48EI)
#[inline]
pub fn pinned_fixed_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -(w * x / (48.0 * ei)) * (l.powi(3) - 3.0 * l * x * x + 2.0 * x.powi(3))
}

/// Rotation of a beam pinned at the left and fixed at the right
///
/// # Formula
/// θ(x) = -w(L³ - 9Lx² + 8x³) / (48EI)
#[inline]
pub fn pinned_fixed_rotation(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -w * (l.powi(3) - 9.0 * l * x * x + 8.0 * x.powi(3)) / (48.0 * ei)
}

/// Shear in a beam pinned at the left and fixed at the right
///
/// # Formula
/// V(x) = 3wL/8 - wx
#[inline]
pub fn pinned_fixed_shear(w: f64, l: f64, x: f64) -> f64 {
    3.0 * w * l / 8.0 - w * x
}

/// Moment in a beam pinned at the left and fixed at the right
///
/// # Formula
/// M(x) = (3wL/8)x - wx²/2
///
/// Fixed end: M(L) = -wL²/8
#[inline]
pub fn pinned_fixed_moment(w: f64, l: f64, x: f64) -> f64 {
    (3.0 * w * l / 8.0) * x - w * x * x / 2.0
}

// =============================================================================
// FIXED-PINNED (propped cantilever, fixed at x = 0)
// =============================================================================

/// Deflection of a beam fixed at the left and pinned at the right
///
/// # Formula
/// y(x) = wu(L³ - 3Lu² - 2u³) / (48EI),  u = x - L
#[inline]
pub fn fixed_pinned_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    let u = x - l;
    (w * u / (48.0 * ei)) * (l.powi(3) - 3.0 * l * u * u - 2.0 * u.powi(3))
}

/// Rotation of a beam fixed at the left and pinned at the right
///
/// # Formula
/// θ(x) = -wx(6L² - 15Lx + 8x²) / (48EI)
#[inline]
pub fn fixed_pinned_rotation(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    -w * x * (6.0 * l * l - 15.0 * l * x + 8.0 * x * x) / (48.0 * ei)
}

/// Shear in a beam fixed at the left and pinned at the right
///
/// # Formula
/// V(x) = 5wL/8 - wx
#[inline]
pub fn fixed_pinned_shear(w: f64, l: f64, x: f64) -> f64 {
    5.0 * w * l / 8.0 - w * x
}

/// Moment in a beam fixed at the left and pinned at the right
///
/// # Formula
/// M(x) = -(3wL/8)u - wu²/2,  u = x - L
///
/// Fixed end: M(0) = -wL²/8
#[inline]
pub fn fixed_pinned_moment(w: f64, l: f64, x: f64) -> f64 {
    let u = x - l;
    -(3.0 * w * l / 8.0) * u - w * u * u / 2.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================
