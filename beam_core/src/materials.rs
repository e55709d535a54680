//! # Material Presets
//!
//! Young's modulus presets offered when picking a beam material. Values are
//! in ksi, matching the kip / inch unit set used by the default
//! configuration.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::MaterialPreset;
//!
//! let steel: MaterialPreset = "steel".parse().unwrap();
//! assert_eq!(steel.modulus_ksi(), 29_000.0);
//! println!("{}", steel);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Structural material with a representative modulus of elasticity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialPreset {
    /// Structural steel, E = 29000 ksi
    #[default]
    Steel,
    /// Wood, E = 1900 ksi
    Wood,
}

impl MaterialPreset {
    /// All presets for iteration
    pub const ALL: [MaterialPreset; 2] = [MaterialPreset::Steel, MaterialPreset::Wood];

    /// Modulus of elasticity E (ksi)
    pub fn modulus_ksi(&self) -> f64 {
        match self {
            MaterialPreset::Steel => 29_000.0,
            MaterialPreset::Wood => 1_900.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialPreset::Steel => "Steel (29000 ksi)",
            MaterialPreset::Wood => "Wood (1900 ksi)",
        }
    }
}

impl std::fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MaterialPreset {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "steel" => Ok(MaterialPreset::Steel),
            "wood" | "timber" => Ok(MaterialPreset::Wood),
            other => Err(CalcError::invalid_input(
                "material",
                other,
                "Expected one of: steel, wood",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_values() {
        assert_eq!(MaterialPreset::Steel.modulus_ksi(), 29_000.0);
        assert_eq!(MaterialPreset::Wood.modulus_ksi(), 1_900.0);
    }

    #[test]
    fn test_default_is_steel() {
        assert_eq!(MaterialPreset::default(), MaterialPreset::Steel);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Wood".parse::<MaterialPreset>().unwrap(), MaterialPreset::Wood);
        assert_eq!("STEEL".parse::<MaterialPreset>().unwrap(), MaterialPreset::Steel);
        let err = "concrete".parse::<MaterialPreset>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MaterialPreset::Wood).unwrap();
        assert_eq!(json, "\"Wood\"");
    }
}
