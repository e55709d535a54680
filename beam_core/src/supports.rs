//! # Support Conditions
//!
//! Boundary conditions at each end of the beam and the stability check for
//! a pair of them.
//!
//! ```text
//!   Free          Pinned          Fixed
//!   ────          ──△──           ┃────
//!                                 ┃
//!   no restraint  translation     translation + rotation
//! ```
//!
//! A pair is stable when at least one end is fixed, or when both ends are
//! pinned. The three remaining pairs (free-free, free-pinned, pinned-free)
//! are mechanisms under transverse load. Stability is advisory: the response
//! engine still returns a (zero) curve for them.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::supports::{is_stable, Support, SupportPair, Stability};
//!
//! assert!(is_stable(Support::Fixed, Support::Free));
//! assert!(!is_stable(Support::Pinned, Support::Free));
//!
//! let pair = SupportPair::new(Support::Free, Support::Pinned);
//! assert_eq!(pair.stability(), Stability::Unstable);
//! assert!(pair.stability().warning().is_some());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Boundary condition at one end of the beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Support {
    /// No restraint
    Free,
    /// Restrains translation only
    Pinned,
    /// Restrains translation and rotation
    Fixed,
}

impl Support {
    /// All support types for iteration
    pub const ALL: [Support; 3] = [Support::Free, Support::Pinned, Support::Fixed];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Support::Free => "Free",
            Support::Pinned => "Pinned",
            Support::Fixed => "Fixed",
        }
    }

    /// Whether this end restrains transverse translation (y = 0)
    pub fn restrains_translation(&self) -> bool {
        matches!(self, Support::Pinned | Support::Fixed)
    }

    /// Whether this end restrains rotation (dy/dx = 0)
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, Support::Fixed)
    }
}

impl std::fmt::Display for Support {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Support {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Support::Free),
            "pinned" | "pin" => Ok(Support::Pinned),
            "fixed" | "fix" | "clamped" => Ok(Support::Fixed),
            other => Err(CalcError::invalid_input(
                "support",
                other,
                "Expected one of: free, pinned, fixed",
            )),
        }
    }
}

/// Stability classification of a support pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stability {
    Stable,
    Unstable,
}

impl Stability {
    /// Message to show the user for this classification, if any.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Stability::Stable => None,
            Stability::Unstable => Some("Warning: unstable configuration picked. Review the statics."),
        }
    }
}

impl std::fmt::Display for Stability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stability::Stable => write!(f, "Stable"),
            Stability::Unstable => write!(f, "Unstable"),
        }
    }
}

/// Left and right boundary conditions of a single span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportPair {
    pub left: Support,
    pub right: Support,
}

impl SupportPair {
    pub fn new(left: Support, right: Support) -> Self {
        SupportPair { left, right }
    }

    /// All nine (left, right) combinations
    pub fn all() -> impl Iterator<Item = SupportPair> {
        Support::ALL
            .into_iter()
            .flat_map(|left| Support::ALL.into_iter().map(move |right| SupportPair::new(left, right)))
    }

    /// Classify this pair.
    pub fn stability(&self) -> Stability {
        if is_stable(self.left, self.right) {
            Stability::Stable
        } else {
            Stability::Unstable
        }
    }

    /// Common structural name for the pair.
    pub fn description(&self) -> &'static str {
        use Support::*;
        match (self.left, self.right) {
            (Fixed, Free) => "Cantilever (fixed left)",
            (Free, Fixed) => "Cantilever (fixed right)",
            (Fixed, Fixed) => "Fixed-fixed",
            (Pinned, Pinned) => "Simply supported",
            (Pinned, Fixed) => "Propped cantilever (fixed right)",
            (Fixed, Pinned) => "Propped cantilever (fixed left)",
            (Free, Free) | (Free, Pinned) | (Pinned, Free) => "Mechanism",
        }
    }
}

impl std::fmt::Display for SupportPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.left, self.right)
    }
}

/// Whether a beam with these end conditions can carry transverse load.
///
/// True iff at least one end is fixed, or both ends are pinned.
pub fn is_stable(left: Support, right: Support) -> bool {
    use Support::*;
    match (left, right) {
        (Fixed, _) | (_, Fixed) => true,
        (Pinned, Pinned) => true,
        (Free, Free) | (Free, Pinned) | (Pinned, Free) => false,
    }
}
