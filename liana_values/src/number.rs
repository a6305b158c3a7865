// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar numeric kinds: plain numbers, integers, percentages, and the
//! tagged number-or-percentage / number-or-ident / number-optional-number
//! composites.

use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use crate::fmt::{format_number, push_number};
use crate::value::lerp;

/// An animatable floating-point number.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Number {
    /// The current value.
    pub value: f32,
}

impl Number {
    /// Creates a new number value.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self { value }
    }

    /// Merges this value toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(
        &self,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        // Plain lerp toward `to`; the accumulated term is the only
        // additive contribution on top of it.
        let mut value = match to {
            Some(to) => lerp(self.value, to.value, fraction),
            None => self.value,
        };
        if let Some(acc) = accumulation {
            value += multiplier as f32 * acc.value;
        }
        let changed = out.value != value;
        out.value = value;
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(
        &self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> Self {
        let mut out = *self;
        self.interpolate_into(&mut out, to, fraction, accumulation, multiplier);
        out
    }

    /// Absolute distance to `other`, for paced animation.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self.value - other.value).abs()
    }

    /// Canonical CSS text.
    #[must_use]
    pub fn css_text(&self) -> String {
        format_number(self.value)
    }
}

/// An animatable integer.
///
/// Interpolation happens in floating point; the merged sum is truncated
/// toward zero before the integral accumulation term is added.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Integer {
    /// The current value.
    pub value: i32,
}

impl Integer {
    /// Creates a new integer value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Merges this value toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(
        &self,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        let interpolated = match to {
            Some(to) => lerp(self.value as f32, to.value as f32, fraction),
            None => self.value as f32,
        };
        let mut value = interpolated as i32;
        if let Some(acc) = accumulation {
            value += multiplier as i32 * acc.value;
        }
        let changed = out.value != value;
        out.value = value;
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(
        &self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> Self {
        let mut out = *self;
        self.interpolate_into(&mut out, to, fraction, accumulation, multiplier);
        out
    }

    /// Absolute distance to `other`, for paced animation.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        // Subtract in f32; the i32 difference can overflow.
        (self.value as f32 - other.value as f32).abs()
    }

    /// Canonical CSS text.
    #[must_use]
    pub fn css_text(&self) -> String {
        alloc::format!("{}", self.value)
    }
}

/// An animatable percentage. Same arithmetic as [`Number`]; serializes
/// with a trailing `%`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Percentage {
    /// The current value, in percent (50.0 is `50%`).
    pub value: f32,
}

impl Percentage {
    /// Creates a new percentage value.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self { value }
    }

    /// Merges this value toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(
        &self,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        let mut value = match to {
            Some(to) => lerp(self.value, to.value, fraction),
            None => self.value,
        };
        if let Some(acc) = accumulation {
            value += multiplier as f32 * acc.value;
        }
        let changed = out.value != value;
        out.value = value;
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(
        &self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> Self {
        let mut out = *self;
        self.interpolate_into(&mut out, to, fraction, accumulation, multiplier);
        out
    }

    /// Absolute distance to `other`, for paced animation.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self.value - other.value).abs()
    }

    /// Canonical CSS text, e.g. `50%`.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = format_number(self.value);
        out.push('%');
        out
    }
}

/// A number tagged with whether it is a percentage.
///
/// Values with matching tags interpolate numerically; a tag mismatch
/// makes the pair non-interpolable and the merge snaps wholesale to `to`
/// at the midpoint.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NumberOrPercentage {
    /// The current value.
    pub value: f32,
    /// Whether `value` is a percentage.
    pub is_percentage: bool,
}

impl NumberOrPercentage {
    /// Creates a plain number value.
    #[must_use]
    pub const fn number(value: f32) -> Self {
        Self {
            value,
            is_percentage: false,
        }
    }

    /// Creates a percentage value.
    #[must_use]
    pub const fn percentage(value: f32) -> Self {
        Self {
            value,
            is_percentage: true,
        }
    }

    /// Merges this value toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// The accumulated term applies only when its percentage tag matches
    /// the merged result's.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(
        &self,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        let mut value = self.value;
        let mut is_percentage = self.is_percentage;
        match to {
            Some(to) if to.is_percentage == self.is_percentage => {
                value = lerp(self.value, to.value, fraction);
            }
            Some(to) => {
                // Discrete flip across the unit boundary.
                if fraction >= 0.5 {
                    value = to.value;
                    is_percentage = to.is_percentage;
                }
            }
            None => {}
        }
        if let Some(acc) = accumulation {
            if acc.is_percentage == is_percentage {
                value += multiplier as f32 * acc.value;
            }
        }
        let changed = out.value != value || out.is_percentage != is_percentage;
        out.value = value;
        out.is_percentage = is_percentage;
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(
        &self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> Self {
        let mut out = *self;
        self.interpolate_into(&mut out, to, fraction, accumulation, multiplier);
        out
    }

    /// Distance to `other` when the tags match; 0 otherwise.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        if self.is_percentage == other.is_percentage {
            (self.value - other.value).abs()
        } else {
            0.0
        }
    }

    /// Canonical CSS text.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = format_number(self.value);
        if self.is_percentage {
            out.push('%');
        }
        out
    }
}

/// Either a number or a keyword identifier.
///
/// Identifiers never interpolate: an ident current value is copied
/// through unchanged for the whole fraction range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumberOrIdent {
    /// The numeric value. Meaningless while `ident` is set.
    pub value: f32,
    /// The keyword, when this value is an identifier.
    pub ident: Option<String>,
}

impl NumberOrIdent {
    /// Creates a numeric value.
    #[must_use]
    pub const fn number(value: f32) -> Self {
        Self { value, ident: None }
    }

    /// Creates an identifier value.
    #[must_use]
    pub fn ident(ident: impl Into<String>) -> Self {
        Self {
            value: 0.0,
            ident: Some(ident.into()),
        }
    }

    /// Returns `true` if this value is a keyword identifier.
    #[must_use]
    pub const fn is_ident(&self) -> bool {
        self.ident.is_some()
    }

    /// Merges this value toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// Ident operands on a numeric current value are skipped; a numeric
    /// merge always clears the ident.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(
        &self,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        if self.is_ident() {
            let changed = out != self;
            out.value = self.value;
            out.ident.clone_from(&self.ident);
            return changed;
        }
        let mut value = match to {
            Some(to) if !to.is_ident() => lerp(self.value, to.value, fraction),
            _ => self.value,
        };
        if let Some(acc) = accumulation {
            if !acc.is_ident() {
                value += multiplier as f32 * acc.value;
            }
        }
        let changed = out.value != value || out.ident.is_some();
        out.value = value;
        out.ident = None;
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(
        &self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> Self {
        let mut out = self.clone();
        self.interpolate_into(&mut out, to, fraction, accumulation, multiplier);
        out
    }

    /// Canonical CSS text: the keyword, or the formatted number.
    #[must_use]
    pub fn css_text(&self) -> String {
        match &self.ident {
            Some(ident) => ident.clone(),
            None => format_number(self.value),
        }
    }
}

/// A number with an optional trailing number, e.g. the `rx,ry` pair of
/// `feGaussianBlur`'s `stdDeviation`.
///
/// The pair is non-interpolable: the merge holds the current fields
/// below the midpoint and snaps wholesale to `to`'s at `fraction >= 0.5`.
/// Accumulation is unsupported (there is no additive identity).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NumberOptionalNumber {
    /// The first number.
    pub number: f32,
    /// The optional second number.
    pub optional: Option<f32>,
}

impl NumberOptionalNumber {
    /// Creates a value with only the first number.
    #[must_use]
    pub const fn single(number: f32) -> Self {
        Self {
            number,
            optional: None,
        }
    }

    /// Creates a value with both numbers.
    #[must_use]
    pub const fn pair(number: f32, optional: f32) -> Self {
        Self {
            number,
            optional: Some(optional),
        }
    }

    /// Snaps between this value and `to` at the midpoint, writing into
    /// `out`.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(&self, out: &mut Self, to: Option<&Self>, fraction: f32) -> bool {
        let src = match to {
            Some(to) if fraction >= 0.5 => to,
            _ => self,
        };
        let changed = out != src;
        *out = *src;
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(&self, to: Option<&Self>, fraction: f32) -> Self {
        let mut out = *self;
        self.interpolate_into(&mut out, to, fraction);
        out
    }

    /// Canonical CSS text: the number, then the optional number
    /// space-separated when present.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = format_number(self.number);
        if let Some(optional) = self.optional {
            out.push(' ');
            push_number(&mut out, optional);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_midpoint_is_arithmetic_mean_not_double_add() {
        let current = Number::new(10.0);
        let to = Number::new(20.0);
        let merged = current.interpolate(Some(&to), 0.5, None, 1);
        // The chosen semantic is a plain lerp: 15, not the historical
        // double-add reading that would produce 25.
        assert_eq!(merged.value, 15.0);
        assert_ne!(merged.value, 25.0);
    }

    #[test]
    fn number_zero_fraction_keeps_current() {
        let current = Number::new(10.0);
        let to = Number::new(-4.0);
        assert_eq!(current.interpolate(Some(&to), 0.0, None, 1).value, 10.0);
    }

    #[test]
    fn number_endpoint_is_exact() {
        let current = Number::new(10.0);
        let to = Number::new(20.0);
        assert_eq!(current.interpolate(Some(&to), 1.0, None, 1).value, 20.0);
    }

    #[test]
    fn number_accumulation_scales_by_multiplier() {
        let current = Number::new(1.0);
        let acc = Number::new(5.0);
        let merged = current.interpolate(None, 0.0, Some(&acc), 3);
        assert_eq!(merged.value, 16.0);
    }

    #[test]
    fn number_changed_flag_reports_actual_change() {
        let current = Number::new(10.0);
        let mut out = Number::new(10.0);
        assert!(!current.interpolate_into(&mut out, None, 0.0, None, 1));
        assert!(current.interpolate_into(&mut out, Some(&Number::new(20.0)), 1.0, None, 1));
        assert!(!current.interpolate_into(&mut out, Some(&Number::new(20.0)), 1.0, None, 1));
    }

    #[test]
    fn integer_truncates_the_interpolated_sum() {
        let current = Integer::new(0);
        let to = Integer::new(5);
        // 0.5 * 5 = 2.5, truncated toward zero.
        assert_eq!(current.interpolate(Some(&to), 0.5, None, 1).value, 2);
        let acc = Integer::new(2);
        assert_eq!(current.interpolate(Some(&to), 0.5, Some(&acc), 2).value, 6);
    }

    #[test]
    fn integer_distance_spans_the_full_range() {
        let lo = Integer::new(i32::MIN);
        let hi = Integer::new(i32::MAX);
        let d = lo.distance_to(&hi);
        assert!(d.is_finite(), "distance must not overflow, got {d}");
        assert_eq!(d, hi.distance_to(&lo));
        assert_eq!(Integer::new(3).distance_to(&Integer::new(-4)), 7.0);
    }

    #[test]
    fn percentage_css_text() {
        assert_eq!(Percentage::new(50.0).css_text(), "50%");
        assert_eq!(Percentage::new(12.5).css_text(), "12.5%");
    }

    #[test]
    fn number_or_percentage_matching_tags_interpolate() {
        let current = NumberOrPercentage::percentage(0.0);
        let to = NumberOrPercentage::percentage(10.0);
        let merged = current.interpolate(Some(&to), 0.25, None, 1);
        assert_eq!(merged.value, 2.5);
        assert!(merged.is_percentage);
    }

    #[test]
    fn number_or_percentage_flips_at_the_midpoint() {
        let current = NumberOrPercentage::number(4.0);
        let to = NumberOrPercentage::percentage(80.0);

        let before = current.interpolate(Some(&to), 0.4999, None, 1);
        assert_eq!(before, current);

        let after = current.interpolate(Some(&to), 0.5, None, 1);
        assert_eq!(after, to);
    }

    #[test]
    fn number_or_percentage_accumulation_requires_matching_tag() {
        let current = NumberOrPercentage::number(1.0);
        let pct_acc = NumberOrPercentage::percentage(50.0);
        assert_eq!(current.interpolate(None, 0.0, Some(&pct_acc), 1).value, 1.0);

        let num_acc = NumberOrPercentage::number(2.0);
        assert_eq!(current.interpolate(None, 0.0, Some(&num_acc), 2).value, 5.0);
    }

    #[test]
    fn ident_never_interpolates() {
        let current = NumberOrIdent::ident("auto");
        let to = NumberOrIdent::number(9.0);
        let merged = current.interpolate(Some(&to), 0.9, None, 1);
        assert_eq!(merged, current);
    }

    #[test]
    fn numeric_merge_clears_the_ident() {
        let current = NumberOrIdent::number(1.0);
        let mut out = NumberOrIdent::ident("auto");
        let changed = current.interpolate_into(&mut out, None, 0.0, None, 1);
        assert!(changed);
        assert_eq!(out, NumberOrIdent::number(1.0));
    }

    #[test]
    fn number_optional_number_snaps_wholesale() {
        let current = NumberOptionalNumber::pair(1.0, 2.0);
        let to = NumberOptionalNumber::single(8.0);

        assert_eq!(current.interpolate(Some(&to), 0.4999), current);
        assert_eq!(current.interpolate(Some(&to), 0.5), to);
        assert_eq!(current.interpolate(None, 1.0), current);
    }

    #[test]
    fn number_optional_number_css_text() {
        assert_eq!(NumberOptionalNumber::single(3.0).css_text(), "3");
        assert_eq!(NumberOptionalNumber::pair(2.0, 3.5).css_text(), "2 3.5");
    }
}
