//! # Cross Sections
//!
//! Section shapes a user can describe by their dimensions, and the moment of
//! inertia each one feeds into the beam configuration.
//!
//! ## JSON Example
//!
//! ```json
//! { "shape": "IBeam", "width": 8.0, "height": 10.0,
//!   "flange_thickness": 0.5, "web_thickness": 0.3 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::Section;
//!
//! let section = Section::rectangle(4.0, 4.0);
//! assert!((section.moment_of_inertia() - 21.3333).abs() < 0.001);
//! assert!(section.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    i_beam_moment_of_inertia, rectangular_moment_of_inertia, web_clear_height,
};
use crate::errors::{CalcError, CalcResult};

/// Cross-section shape with its dimensions (all in the same length unit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Section {
    /// Solid rectangle
    Rectangle { width: f64, height: f64 },
    /// Doubly-symmetric I-beam; `width` is the flange width
    IBeam {
        width: f64,
        height: f64,
        flange_thickness: f64,
        web_thickness: f64,
    },
}

impl Section {
    /// Create a rectangular section
    pub fn rectangle(width: f64, height: f64) -> Self {
        Section::Rectangle { width, height }
    }

    /// Create an I-beam section
    pub fn i_beam(width: f64, height: f64, flange_thickness: f64, web_thickness: f64) -> Self {
        Section::IBeam {
            width,
            height,
            flange_thickness,
            web_thickness,
        }
    }

    /// Rectangle offered before the user edits any dimension (4 x 4)
    pub fn default_rectangle() -> Self {
        Section::rectangle(4.0, 4.0)
    }

    /// I-beam offered before the user edits any dimension
    pub fn default_i_beam() -> Self {
        Section::i_beam(1.0, 1.0, 0.1, 0.1)
    }

    /// Get display name of the shape
    pub fn shape_name(&self) -> &'static str {
        match self {
            Section::Rectangle { .. } => "Rectangle",
            Section::IBeam { .. } => "I-Beam",
        }
    }

    /// Clear web height between flanges; `None` for a rectangle.
    pub fn web_clear_height(&self) -> Option<f64> {
        match *self {
            Section::Rectangle { .. } => None,
            Section::IBeam {
                height,
                flange_thickness,
                ..
            } => Some(web_clear_height(height, flange_thickness)),
        }
    }

    /// Second moment of area about the strong axis.
    ///
    /// Unchecked: nonsensical dimensions produce a number, not an error.
    pub fn moment_of_inertia(&self) -> f64 {
        match *self {
            Section::Rectangle { width, height } => rectangular_moment_of_inertia(width, height),
            Section::IBeam {
                width,
                height,
                flange_thickness,
                web_thickness,
            } => i_beam_moment_of_inertia(width, height, flange_thickness, web_thickness),
        }
    }

    /// Check the dimensions describe a physical section.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            Section::Rectangle { width, height } => {
                require_positive("width", width)?;
                require_positive("height", height)?;
            }
            Section::IBeam {
                width,
                height,
                flange_thickness,
                web_thickness,
            } => {
                require_positive("width", width)?;
                require_positive("height", height)?;
                require_positive("flange_thickness", flange_thickness)?;
                require_positive("web_thickness", web_thickness)?;

                if flange_thickness >= height / 2.0 {
                    return Err(CalcError::invalid_input(
                        "flange_thickness",
                        flange_thickness.to_string(),
                        format!("Flange thickness must be less than half the height ({})", height / 2.0),
                    ));
                }
                if web_thickness > width {
                    return Err(CalcError::invalid_input(
                        "web_thickness",
                        web_thickness.to_string(),
                        format!("Web thickness cannot exceed the flange width ({})", width),
                    ));
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rectangle_inertia() {
        let i = Section::rectangle(4.0, 4.0).moment_of_inertia();
        assert!(approx_eq(i, 4.0 * 64.0 / 12.0), "I = {}", i);
    }

    #[test]
    fn test_i_beam_inertia() {
        let section = Section::i_beam(8.0, 10.0, 0.5, 0.3);
        let expected = 0.3 * 9.0_f64.powi(3) / 12.0 + (8.0 / 12.0) * (1000.0 - 729.0);
        let i = section.moment_of_inertia();
        assert!(approx_eq(i, expected), "I = {} (expected {})", i, expected);
        assert_eq!(section.web_clear_height(), Some(9.0));
    }

    #[test]
    fn test_default_sections_are_valid() {
        assert!(Section::default_rectangle().validate().is_ok());
        assert!(Section::default_i_beam().validate().is_ok());
        assert!(Section::default_rectangle().web_clear_height().is_none());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let err = Section::rectangle(0.0, 4.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "width"));

        let err = Section::rectangle(4.0, f64::NAN).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "height"));
    }

    #[test]
    fn test_validate_rejects_thick_flange() {
        // 2 * 5.0 leaves no web
        let err = Section::i_beam(8.0, 10.0, 5.0, 0.3).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "flange_thickness"));

        // Unchecked inertia still evaluates
        assert!(Section::i_beam(8.0, 10.0, 6.0, 0.3).moment_of_inertia().is_finite());
    }

    #[test]
    fn test_validate_rejects_wide_web() {
        let err = Section::i_beam(1.0, 10.0, 0.5, 2.0).validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "web_thickness"));
    }

    #[test]
    fn test_serialization_tagged_by_shape() {
        let json = serde_json::to_string(&Section::i_beam(8.0, 10.0, 0.5, 0.3)).unwrap();
        assert!(json.contains("\"shape\":\"IBeam\""), "json = {}", json);

        let parsed: Section =
            serde_json::from_str(r#"{"shape":"Rectangle","width":2.0,"height":6.0}"#).unwrap();
        assert_eq!(parsed, Section::rectangle(2.0, 6.0));
    }
}
