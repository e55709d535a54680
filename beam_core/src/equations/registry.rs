//! # Formula Registry
//!
//! Total lookup table from (left support, right support, quantity) to the
//! closed-form response function for that case.
//!
//! ## Architecture
//!
//! - Six support pairs have closed forms, four quantities each: 24 entries
//! - The table is built once on first use
//! - Any key without an entry resolves to [`ZERO_FORMULA`], the y(x) = 0
//!   response drawn for mechanisms
//!
//! ## Usage
//!
//! ```rust
//! use beam_core::equations::registry::{lookup, Quantity};
//! use beam_core::supports::Support;
//!
//! let formula = lookup(Support::Pinned, Support::Pinned, Quantity::Moment);
//! assert_eq!(formula.evaluate(1.0, 10.0, 5.0, 1.0), 12.5);
//!
//! let fallback = lookup(Support::Free, Support::Free, Quantity::Moment);
//! assert!(fallback.is_zero_fallback());
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::beam;
use crate::errors::CalcError;
use crate::supports::{Support, SupportPair};

// ============================================================================
// Quantity
// ============================================================================

/// Response quantity sampled along the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Transverse displacement y(x)
    Deflection,
    /// Slope θ(x)
    Rotation,
    /// Internal shear force V(x)
    Shear,
    /// Internal bending moment M(x)
    Moment,
}

impl Quantity {
    /// All quantities for iteration
    pub const ALL: [Quantity; 4] = [
        Quantity::Deflection,
        Quantity::Rotation,
        Quantity::Shear,
        Quantity::Moment,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Quantity::Deflection => "Deflection",
            Quantity::Rotation => "Rotation",
            Quantity::Shear => "Shear",
            Quantity::Moment => "Moment",
        }
    }

    /// Conventional symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Quantity::Deflection => "y",
            Quantity::Rotation => "θ",
            Quantity::Shear => "V",
            Quantity::Moment => "M",
        }
    }

    /// Whether the quantity depends on the flexural rigidity EI
    pub fn depends_on_rigidity(&self) -> bool {
        matches!(self, Quantity::Deflection | Quantity::Rotation)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Quantity {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deflection" => Ok(Quantity::Deflection),
            "rotation" | "slope" => Ok(Quantity::Rotation),
            "shear" => Ok(Quantity::Shear),
            "moment" => Ok(Quantity::Moment),
            other => Err(CalcError::invalid_input(
                "quantity",
                other,
                "Expected one of: deflection, rotation, shear, moment",
            )),
        }
    }
}

// ============================================================================
// Formula
// ============================================================================

/// Response function signature: (w, L, x, EI) -> value at x.
///
/// Shear and moment ignore `ei`.
pub type FormulaFn = fn(w: f64, l: f64, x: f64, ei: f64) -> f64;

/// Lookup key for the formula table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormulaKey {
    pub supports: SupportPair,
    pub quantity: Quantity,
}

impl FormulaKey {
    pub fn new(left: Support, right: Support, quantity: Quantity) -> Self {
        FormulaKey {
            supports: SupportPair::new(left, right),
            quantity,
        }
    }
}

/// A closed-form response function with its printable form.
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    /// The formula in plain text (W, L, x, EI notation)
    pub formula_plain: &'static str,
    /// Function in [`crate::equations::beam`] implementing the formula
    pub source_function: &'static str,
    /// Evaluator
    pub eval: FormulaFn,
}

impl Formula {
    /// Evaluate at position `x`.
    #[inline]
    pub fn evaluate(&self, w: f64, l: f64, x: f64, ei: f64) -> f64 {
        (self.eval)(w, l, x, ei)
    }

    /// Whether this is the fallback for pairs without a closed form.
    pub fn is_zero_fallback(&self) -> bool {
        std::ptr::eq(self, &ZERO_FORMULA)
    }
}

fn zero_response(_w: f64, _l: f64, _x: f64, _ei: f64) -> f64 {
    0.0
}

/// Response used for every support pair without a closed form.
pub static ZERO_FORMULA: Formula = Formula {
    formula_plain: "0",
    source_function: "zero_response",
    eval: zero_response,
};

// ============================================================================
// Table
// ============================================================================

fn entry(
    left: Support,
    right: Support,
    quantity: Quantity,
    formula_plain: &'static str,
    source_function: &'static str,
    eval: FormulaFn,
) -> (FormulaKey, Formula) {
    (
        FormulaKey::new(left, right, quantity),
        Formula {
            formula_plain,
            source_function,
            eval,
        },
    )
}

static FORMULAS: Lazy<HashMap<FormulaKey, Formula>> = Lazy::new(|| {
    use Quantity::*;
    use Support::*;

    [
        // Fixed-Free
        entry(Fixed, Free, Deflection,
            "-(W x²/(24EI))(6L² - 4Lx + x²)",
            "fixed_free_deflection", beam::fixed_free_deflection),
        entry(Fixed, Free, Rotation,
            "-(W x/(6EI))(3L² - 3Lx + x²)",
            "fixed_free_rotation", beam::fixed_free_rotation),
        entry(Fixed, Free, Shear,
            "W(L - x)",
            "fixed_free_shear", |w, l, x, _ei| beam::fixed_free_shear(w, l, x)),
        entry(Fixed, Free, Moment,
            "-W(L - x)²/2",
            "fixed_free_moment", |w, l, x, _ei| beam::fixed_free_moment(w, l, x)),
        // Free-Fixed
        entry(Free, Fixed, Deflection,
            "-(W/(24EI))(x⁴ - 4L³x + 3L⁴)",
            "free_fixed_deflection", beam::free_fixed_deflection),
        entry(Free, Fixed, Rotation,
            "(W(x - L)/(6EI))(3L² + 3L(x - L) + (x - L)²)",
            "free_fixed_rotation", beam::free_fixed_rotation),
        entry(Free, Fixed, Shear,
            "Wx",
            "free_fixed_shear", |w, l, x, _ei| beam::free_fixed_shear(w, l, x)),
        entry(Free, Fixed, Moment,
            "-Wx²/2",
            "free_fixed_moment", |w, l, x, _ei| beam::free_fixed_moment(w, l, x)),
        // Fixed-Fixed
        entry(Fixed, Fixed, Deflection,
            "-(W x²/(24EI))(L - x)²",
            "fixed_fixed_deflection", beam::fixed_fixed_deflection),
        entry(Fixed, Fixed, Rotation,
            "-W x(L² - 3Lx + 2x²)/(12EI)",
            "fixed_fixed_rotation", beam::fixed_fixed_rotation),
        entry(Fixed, Fixed, Shear,
            "W(L/2 - x)",
            "fixed_fixed_shear", |w, l, x, _ei| beam::fixed_fixed_shear(w, l, x)),
        entry(Fixed, Fixed, Moment,
            "(W/12)(6Lx - 6x² - L²)",
            "fixed_fixed_moment", |w, l, x, _ei| beam::fixed_fixed_moment(w, l, x)),
        // Pinned-Pinned
        entry(Pinned, Pinned, Deflection,
            "-(W x/(24EI))(L³ - 2Lx² + x³)",
            "pinned_pinned_deflection", beam::pinned_pinned_deflection),
        entry(Pinned, Pinned, Rotation,
            "-W(L³ - 6Lx² + 4x³)/(24EI)",
            "pinned_pinned_rotation", beam::pinned_pinned_rotation),
        entry(Pinned, Pinned, Shear,
            "W(L/2 - x)",
            "pinned_pinned_shear", |w, l, x, _ei| beam::pinned_pinned_shear(w, l, x)),
        entry(Pinned, Pinned, Moment,
            "(W x/2)(L - x)",
            "pinned_pinned_moment", |w, l, x, _ei| beam::pinned_pinned_moment(w, l, x)),
        // Pinned-Fixed
        entry(Pinned, Fixed, Deflection,
            "-(W x/(48EI))(L³ - 3Lx² + 2x³)",
            "pinned_fixed_deflection", beam::pinned_fixed_deflection),
        entry(Pinned, Fixed, Rotation,
            "-W(L³ - 9Lx² + 8x³)/(48EI)",
            "pinned_fixed_rotation", beam::pinned_fixed_rotation),
        entry(Pinned, Fixed, Shear,
            "3WL/8 - Wx",
            "pinned_fixed_shear", |w, l, x, _ei| beam::pinned_fixed_shear(w, l, x)),
        entry(Pinned, Fixed, Moment,
            "(3WL/8)x - Wx²/2",
            "pinned_fixed_moment", |w, l, x, _ei| beam::pinned_fixed_moment(w, l, x)),
        // Fixed-Pinned
        entry(Fixed, Pinned, Deflection,
            "(W(x - L)/(48EI))(L³ - 3L(x - L)² - 2(x - L)³)",
            "fixed_pinned_deflection", beam::fixed_pinned_deflection),
        entry(Fixed, Pinned, Rotation,
            "-W x(6L² - 15Lx + 8x²)/(48EI)",
            "fixed_pinned_rotation", beam::fixed_pinned_rotation),
        entry(Fixed, Pinned, Shear,
            "5WL/8 - Wx",
            "fixed_pinned_shear", |w, l, x, _ei| beam::fixed_pinned_shear(w, l, x)),
        entry(Fixed, Pinned, Moment,
            "-(3WL/8)(x - L) - W(x - L)²/2",
            "fixed_pinned_moment", |w, l, x, _ei| beam::fixed_pinned_moment(w, l, x)),
    ]
    .into_iter()
    .collect()
});

/// Resolve the response function for a support pair and quantity.
///
/// Never fails: keys without a closed form resolve to [`ZERO_FORMULA`].
pub fn lookup(left: Support, right: Support, quantity: Quantity) -> &'static Formula {
    lookup_key(&FormulaKey::new(left, right, quantity))
}

/// Same as [`lookup`] with a prebuilt key.
pub fn lookup_key(key: &FormulaKey) -> &'static Formula {
    let table: &'static HashMap<FormulaKey, Formula> = &FORMULAS;
    table.get(key).unwrap_or(&ZERO_FORMULA)
}

/// Whether a closed form exists for this pair (for any quantity).
pub fn has_closed_form(supports: SupportPair) -> bool {
    FORMULAS.contains_key(&FormulaKey {
        supports,
        quantity: Quantity::Deflection,
    })
}

/// All table entries in a stable order (support pair, then quantity).
pub fn all_formulas() -> Vec<(FormulaKey, &'static Formula)> {
    SupportPair::all()
        .flat_map(|pair| Quantity::ALL.into_iter().map(move |q| FormulaKey { supports: pair, quantity: q }))
        .filter_map(|key| {
            let table: &'static HashMap<FormulaKey, Formula> = &FORMULAS;
            table.get(&key).map(|formula| (key, formula))
        })
        .collect()
}

/// Generate a markdown reference of every closed form in the table.
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(4_096);

    output.push_str(
        r#"# Beam Response Formulas

Uniform load W over the full span L, flexural rigidity EI, 0 ≤ x ≤ L.
Support pairs not listed (Free-Free, Free-Pinned, Pinned-Free) are
mechanisms and respond with y(x) = 0.

| Supports | Quantity | Formula | Function |
|----------|----------|---------|----------|
"#,
    );

    for (key, formula) in all_formulas() {
        output.push_str(&format!(
            "| {} | {} | `{}` | `{}` |\n",
            key.supports, key.quantity, formula.formula_plain, formula.source_function
        ));
    }

    output
}
