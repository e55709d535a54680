//! Beam Response Engine
//!
//! Samples one response quantity (deflection, rotation, shear or moment)
//! along a single span under full-length uniform load. The closed form is
//! picked from [`crate::equations::registry`] by the support pair and
//! quantity; pairs without one give the zero curve.
//!
//! The engine holds no state. The same configuration always gives the same
//! curve, bit for bit.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::response::{evaluate, BeamConfiguration};
//! use beam_core::equations::Quantity;
//! use beam_core::supports::Support;
//!
//! // 10 in span, 1 kip/in, steel, 4x4 rectangle: moment diagram
//! let config = BeamConfiguration {
//!     quantity: Quantity::Moment,
//!     ..BeamConfiguration::default()
//! };
//!
//! let curve = evaluate(&config);
//! assert_eq!(curve.len(), 50);
//!
//! let extremes = curve.extremes().unwrap();
//! println!("Max moment: {:.3} kip-in at x = {:.2} in", extremes.max_value, extremes.max_position);
//!
//! // Mechanisms are not rejected; they respond with zero
//! let unstable = config.with_supports(Support::Free, Support::Pinned);
//! assert!(evaluate(&unstable).is_zero());
//! ```

use serde::{Deserialize, Serialize};

use super::section::{require_positive, Section};
use crate::equations::registry::{lookup, Formula, Quantity};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialPreset;
use crate::supports::{Stability, Support, SupportPair};

/// Default number of sample points, both ends included
pub const SAMPLE_COUNT: usize = 50;

/// Smallest sample count accepted by [`evaluate_sampled`]
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Everything one evaluation depends on.
///
/// Units are up to the caller but must be consistent. The defaults use
/// inches, kips and ksi.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 10.0,
///   "load": 1.0,
///   "youngs_modulus": 29000.0,
///   "moment_of_inertia": 21.33,
///   "left_support": "Pinned",
///   "right_support": "Pinned",
///   "quantity": "Deflection"
/// }
/// ```
///
/// Missing fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfiguration {
    /// Span length L
    pub length: f64,
    /// Uniform load intensity W (force per unit length), positive downward
    pub load: f64,
    /// Modulus of elasticity E
    pub youngs_modulus: f64,
    /// Second moment of area I
    pub moment_of_inertia: f64,
    /// Boundary condition at x = 0
    pub left_support: Support,
    /// Boundary condition at x = L
    pub right_support: Support,
    /// Quantity to sample
    pub quantity: Quantity,
}

impl Default for BeamConfiguration {
    fn default() -> Self {
        BeamConfiguration {
            length: 10.0,
            load: 1.0,
            youngs_modulus: MaterialPreset::Steel.modulus_ksi(),
            moment_of_inertia: 21.33,
            left_support: Support::Pinned,
            right_support: Support::Pinned,
            quantity: Quantity::Deflection,
        }
    }
}

impl BeamConfiguration {
    /// Flexural rigidity E·I
    pub fn flexural_rigidity(&self) -> f64 {
        self.youngs_modulus * self.moment_of_inertia
    }

    pub fn supports(&self) -> SupportPair {
        SupportPair::new(self.left_support, self.right_support)
    }

    pub fn stability(&self) -> Stability {
        self.supports().stability()
    }

    /// Formula this configuration evaluates (possibly the zero fallback)
    pub fn formula(&self) -> &'static Formula {
        lookup(self.left_support, self.right_support, self.quantity)
    }

    pub fn with_supports(mut self, left: Support, right: Support) -> Self {
        self.left_support = left;
        self.right_support = right;
        self
    }

    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    /// Take Young's modulus from a material preset
    pub fn with_material(mut self, material: MaterialPreset) -> Self {
        self.youngs_modulus = material.modulus_ksi();
        self
    }

    /// Take the moment of inertia from a section
    pub fn with_section(mut self, section: &Section) -> Self {
        self.moment_of_inertia = section.moment_of_inertia();
        self
    }

    /// Reject non-finite values and non-positive length, modulus or inertia.
    ///
    /// The load may have either sign. The support pair is not checked: an
    /// unstable pair is a warning, not an error.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length", self.length)?;
        require_positive("youngs_modulus", self.youngs_modulus)?;
        require_positive("moment_of_inertia", self.moment_of_inertia)?;
        if !self.load.is_finite() {
            return Err(CalcError::invalid_input(
                "load",
                self.load.to_string(),
                "Value must be finite",
            ));
        }
        Ok(())
    }
}

/// Extreme values found on a sampled curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveExtremes {
    pub max_value: f64,
    pub max_position: f64,
    pub min_value: f64,
    pub min_position: f64,
}

impl CurveExtremes {
    /// Largest magnitude and its position
    pub fn peak(&self) -> (f64, f64) {
        if self.max_value.abs() >= self.min_value.abs() {
            (self.max_value, self.max_position)
        } else {
            (self.min_value, self.min_position)
        }
    }
}

/// Sampled response y(x) over [0, L].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCurve {
    /// Quantity the samples represent
    pub quantity: Quantity,
    /// (x, y) pairs with x increasing
    pub points: Vec<(f64, f64)>,
}

impl ResponseCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }

    /// True when every sample is finite
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|&(x, y)| x.is_finite() && y.is_finite())
    }

    /// True when every sampled value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.values().all(|y| y == 0.0)
    }

    /// Maximum and minimum sampled values, ignoring NaN.
    ///
    /// `None` when there is no comparable sample.
    pub fn extremes(&self) -> Option<CurveExtremes> {
        let mut finite = self.points.iter().filter(|(_, y)| !y.is_nan());
        let &(x0, y0) = finite.next()?;

        let mut extremes = CurveExtremes {
            max_value: y0,
            max_position: x0,
            min_value: y0,
            min_position: x0,
        };
        for &(x, y) in finite {
            if y > extremes.max_value {
                extremes.max_value = y;
                extremes.max_position = x;
            }
            if y < extremes.min_value {
                extremes.min_value = y;
                extremes.min_position = x;
            }
        }
        Some(extremes)
    }
}

/// Evenly spaced positions over [0, length], both ends included.
///
/// `count` below [`MIN_SAMPLE_COUNT`] is raised to it. The last position is
/// exactly `length`.
pub fn sample_positions(length: f64, count: usize) -> Vec<f64> {
    let count = count.max(MIN_SAMPLE_COUNT);
    let last = count - 1;
    (0..count)
        .map(|i| {
            if i == last {
                length
            } else {
                length * i as f64 / last as f64
            }
        })
        .collect()
}

/// Sample the configured quantity at [`SAMPLE_COUNT`] points.
pub fn evaluate(config: &BeamConfiguration) -> ResponseCurve {
    evaluate_sampled(config, SAMPLE_COUNT)
}

/// Sample the configured quantity at `samples` points.
///
/// Total: inputs are not validated. Zero rigidity yields non-finite
/// deflection and rotation samples, which are returned as they are.
pub fn evaluate_sampled(config: &BeamConfiguration, samples: usize) -> ResponseCurve {
    let formula = config.formula();
    let w = config.load;
    let l = config.length;
    let ei = config.flexural_rigidity();

    log::debug!(
        "evaluating {} for {} (L={}, W={}, EI={}, samples={})",
        config.quantity,
        config.supports(),
        l,
        w,
        ei,
        samples
    );

    if formula.is_zero_fallback() {
        log::warn!(
            "{} supports have no closed form; returning zero {} curve",
            config.supports(),
            config.quantity
        );
    }

    let points: Vec<(f64, f64)> = sample_positions(l, samples)
        .into_iter()
        .map(|x| (x, formula.evaluate(w, l, x, ei)))
        .collect();

    let curve = ResponseCurve {
        quantity: config.quantity,
        points,
    };

    if !curve.is_finite() {
        log::warn!(
            "{} curve for {} contains non-finite samples (L={}, EI={})",
            config.quantity,
            config.supports(),
            l,
            ei
        );
    }

    curve
}

/// Validate the configuration, then [`evaluate`] it.
pub fn evaluate_checked(config: &BeamConfiguration) -> CalcResult<ResponseCurve> {
    config.validate()?;
    Ok(evaluate(config))
}
