// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Liana Units: the SVG length-unit model and conversion capability.
//!
//! Animated lengths carry a unit tag from the closed set of SVG
//! length-unit types. Two tagged lengths can be combined arithmetically
//! only when their units are [compatible](LengthUnit::compatible); any
//! other pair must first be normalized through an [`AnimationTarget`],
//! the conversion capability injected by the embedding document (unit
//! resolution can depend on font size, viewport metrics, and the axis
//! the length applies to, none of which this crate models).
//!
//! # Example
//!
//! ```rust
//! use liana_units::{AnimationTarget, LengthUnit, UserUnitTarget};
//!
//! assert!(LengthUnit::Px.compatible(LengthUnit::Number));
//! assert!(!LengthUnit::Cm.compatible(LengthUnit::Px));
//!
//! let target = UserUnitTarget;
//! let px = target.convert_length(LengthUnit::In, 1.0, LengthUnit::Number);
//! assert_eq!(px, 96.0);
//! ```

#![no_std]

/// An SVG length-unit type.
///
/// The set matches the `SVG_LENGTHTYPE_*` constants of the SVG length
/// model. `Number` is a unitless user-unit value and is numerically
/// equivalent to `Px`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Unit type not one of the predefined types.
    Unknown,
    /// Unitless user units.
    Number,
    /// A percentage of some reference dimension.
    Percentage,
    /// Font em units.
    Ems,
    /// Font ex units.
    Exs,
    /// CSS pixels.
    Px,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Inches.
    In,
    /// Points (1/72 inch).
    Pt,
    /// Picas (12 points).
    Pc,
}

impl LengthUnit {
    /// Returns the canonical CSS suffix for this unit.
    ///
    /// `Number` and `Unknown` have no suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Unknown | Self::Number => "",
            Self::Percentage => "%",
            Self::Ems => "em",
            Self::Exs => "ex",
            Self::Px => "px",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
        }
    }

    /// Returns `true` if values in `self` and `other` can be combined
    /// arithmetically without an external conversion.
    ///
    /// Equal units are compatible, as are `Number` and `Px` in either
    /// order (a unitless user unit is numerically a CSS pixel).
    #[must_use]
    pub const fn compatible(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Number, Self::Px) | (Self::Px, Self::Number)
        ) || self as u8 == other as u8
    }
}

/// The conversion capability an animated document injects into the value
/// algebra.
///
/// Implementations resolve relative units against document metrics (font
/// size, viewport, percentage basis). Conforming implementations must be
/// identity-preserving: `convert_length(u, v, u) == v`.
pub trait AnimationTarget {
    /// Converts `value` expressed in `from` units into `to` units.
    fn convert_length(&self, from: LengthUnit, value: f32, to: LengthUnit) -> f32;
}

/// A context-free [`AnimationTarget`] for tests and headless callers.
///
/// Absolute units resolve at 96 dpi; font-relative units, percentages,
/// and unknown units are treated as user units (scale 1). Real documents
/// should supply their own target instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UserUnitTarget;

impl UserUnitTarget {
    /// User units per one unit of `unit`, at 96 dpi.
    const fn scale(unit: LengthUnit) -> f32 {
        match unit {
            LengthUnit::In => 96.0,
            LengthUnit::Cm => 96.0 / 2.54,
            LengthUnit::Mm => 96.0 / 25.4,
            LengthUnit::Pt => 96.0 / 72.0,
            LengthUnit::Pc => 16.0,
            _ => 1.0,
        }
    }
}

impl AnimationTarget for UserUnitTarget {
    fn convert_length(&self, from: LengthUnit, value: f32, to: LengthUnit) -> f32 {
        if from.compatible(to) {
            return value;
        }
        value * Self::scale(from) / Self::scale(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_is_reflexive() {
        let units = [
            LengthUnit::Unknown,
            LengthUnit::Number,
            LengthUnit::Percentage,
            LengthUnit::Ems,
            LengthUnit::Exs,
            LengthUnit::Px,
            LengthUnit::Cm,
            LengthUnit::Mm,
            LengthUnit::In,
            LengthUnit::Pt,
            LengthUnit::Pc,
        ];
        for unit in units {
            assert!(unit.compatible(unit), "{unit:?} must be self-compatible");
        }
    }

    #[test]
    fn number_and_px_are_interchangeable() {
        assert!(LengthUnit::Number.compatible(LengthUnit::Px));
        assert!(LengthUnit::Px.compatible(LengthUnit::Number));
    }

    #[test]
    fn distinct_physical_units_are_incompatible() {
        assert!(!LengthUnit::Cm.compatible(LengthUnit::Mm));
        assert!(!LengthUnit::Px.compatible(LengthUnit::Pt));
        assert!(!LengthUnit::Percentage.compatible(LengthUnit::Number));
    }

    #[test]
    fn suffixes() {
        assert_eq!(LengthUnit::Number.suffix(), "");
        assert_eq!(LengthUnit::Percentage.suffix(), "%");
        assert_eq!(LengthUnit::Px.suffix(), "px");
        assert_eq!(LengthUnit::Pc.suffix(), "pc");
    }

    #[test]
    fn user_unit_target_identity() {
        let target = UserUnitTarget;
        assert_eq!(
            target.convert_length(LengthUnit::Cm, 2.5, LengthUnit::Cm),
            2.5
        );
        assert_eq!(
            target.convert_length(LengthUnit::Px, 7.0, LengthUnit::Number),
            7.0
        );
    }

    #[test]
    fn user_unit_target_absolute_units() {
        let target = UserUnitTarget;
        assert_eq!(
            target.convert_length(LengthUnit::In, 1.0, LengthUnit::Number),
            96.0
        );
        assert_eq!(
            target.convert_length(LengthUnit::Pt, 72.0, LengthUnit::Px),
            96.0
        );
        let mm = target.convert_length(LengthUnit::Cm, 1.0, LengthUnit::Mm);
        assert!((mm - 10.0).abs() < 1e-4, "1cm should be 10mm, got {mm}");
    }
}
