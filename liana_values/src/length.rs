// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-tagged length kinds.
//!
//! Scalar lengths interpolate raw when their units are compatible and
//! fall back to user-unit conversion through the [`AnimationTarget`]
//! capability otherwise. Length lists always normalize every entry to
//! user units before combining, so a merged list is uniformly
//! `Number`-tagged.

use alloc::string::String;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use liana_units::{AnimationTarget, LengthUnit};

use crate::fmt::{format_number, push_number};
use crate::value::lerp;

/// Inline capacity for length lists; dash arrays and the like are
/// usually this short.
const INLINE_LENGTHS: usize = 4;

/// An animatable unit-tagged length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Length {
    /// The unit `value` is expressed in.
    pub unit: LengthUnit,
    /// The scalar value.
    pub value: f32,
}

impl Length {
    /// Creates a new length value.
    #[must_use]
    pub const fn new(unit: LengthUnit, value: f32) -> Self {
        Self { unit, value }
    }

    /// A zero length in user units.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(LengthUnit::Number, 0.0)
    }

    /// Merges this length toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// Compatible units interpolate raw in the current unit. Any other
    /// pair is normalized to user units through `target` and the result
    /// is `Number`-tagged. The accumulated term applies the same rule
    /// independently against the merged result's unit.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(
        &self,
        target: &dyn AnimationTarget,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        let mut unit = self.unit;
        let mut value = self.value;
        if let Some(to) = to {
            if unit.compatible(to.unit) {
                value = lerp(value, to.value, fraction);
            } else {
                let from = target.convert_length(self.unit, self.value, LengthUnit::Number);
                let toward = target.convert_length(to.unit, to.value, LengthUnit::Number);
                value = lerp(from, toward, fraction);
                unit = LengthUnit::Number;
            }
        }
        if let Some(acc) = accumulation {
            let term = if unit.compatible(acc.unit) {
                acc.value
            } else {
                value = target.convert_length(unit, value, LengthUnit::Number);
                unit = LengthUnit::Number;
                target.convert_length(acc.unit, acc.value, LengthUnit::Number)
            };
            value += multiplier as f32 * term;
        }
        let changed = out.unit != unit || out.value != value;
        out.unit = unit;
        out.value = value;
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(
        &self,
        target: &dyn AnimationTarget,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> Self {
        let mut out = *self;
        self.interpolate_into(target, &mut out, to, fraction, accumulation, multiplier);
        out
    }

    /// Absolute distance to `other` in user units, for paced animation.
    #[must_use]
    pub fn distance_to(&self, target: &dyn AnimationTarget, other: &Self) -> f32 {
        let a = target.convert_length(self.unit, self.value, LengthUnit::Number);
        let b = target.convert_length(other.unit, other.value, LengthUnit::Number);
        (a - b).abs()
    }

    /// Canonical CSS text: the value with its unit suffix.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = format_number(self.value);
        out.push_str(self.unit.suffix());
        out
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::zero()
    }
}

/// Either a length or a keyword identifier.
///
/// Same ident short-circuit as
/// [`NumberOrIdent`](crate::NumberOrIdent): an ident current value is
/// copied through unchanged and numeric merges clear the ident.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LengthOrIdent {
    /// The length. Meaningless while `ident` is set.
    pub length: Length,
    /// The keyword, when this value is an identifier.
    pub ident: Option<String>,
}

impl LengthOrIdent {
    /// Creates a length value.
    #[must_use]
    pub const fn length(unit: LengthUnit, value: f32) -> Self {
        Self {
            length: Length::new(unit, value),
            ident: None,
        }
    }

    /// Creates an identifier value.
    #[must_use]
    pub fn ident(ident: impl Into<String>) -> Self {
        Self {
            length: Length::zero(),
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
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(
        &self,
        target: &dyn AnimationTarget,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        if self.is_ident() {
            let changed = out != self;
            out.length = self.length;
            out.ident.clone_from(&self.ident);
            return changed;
        }
        let to = to.filter(|to| !to.is_ident()).map(|to| &to.length);
        let acc = accumulation
            .filter(|acc| !acc.is_ident())
            .map(|acc| &acc.length);
        let mut changed =
            self.length
                .interpolate_into(target, &mut out.length, to, fraction, acc, multiplier);
        changed |= out.ident.take().is_some();
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(
        &self,
        target: &dyn AnimationTarget,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> Self {
        let mut out = self.clone();
        self.interpolate_into(target, &mut out, to, fraction, accumulation, multiplier);
        out
    }

    /// Canonical CSS text: the keyword, or the length text.
    #[must_use]
    pub fn css_text(&self) -> String {
        match &self.ident {
            Some(ident) => ident.clone(),
            None => self.length.css_text(),
        }
    }
}

/// An animatable list of unit-tagged lengths.
///
/// Units and values are co-indexed and always the same length; the
/// constructors maintain that invariant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LengthList {
    units: SmallVec<[LengthUnit; INLINE_LENGTHS]>,
    values: SmallVec<[f32; INLINE_LENGTHS]>,
}

impl LengthList {
    /// Creates a list from `(unit, value)` entries.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (LengthUnit, f32)>) -> Self {
        let mut units = SmallVec::new();
        let mut values = SmallVec::new();
        for (unit, value) in entries {
            units.push(unit);
            values.push(value);
        }
        Self { units, values }
    }

    /// A list of `len` zero lengths in user units.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            units: smallvec::smallvec![LengthUnit::Number; len],
            values: smallvec::smallvec![0.0; len],
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the `(unit, value)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (LengthUnit, f32)> + '_ {
        self.units.iter().copied().zip(self.values.iter().copied())
    }

    /// Merges this list toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// Every entry of every operand is normalized to user units first;
    /// the merged entries are always `Number`-tagged. A `to` or
    /// `accumulation` list with a different arity silently skips that
    /// term.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(
        &self,
        target: &dyn AnimationTarget,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        let len = self.len();
        let to = to.filter(|to| to.len() == len);
        let acc = accumulation.filter(|acc| acc.len() == len);

        let mut changed = out.len() != len;
        out.units.resize(len, LengthUnit::Number);
        out.values.resize(len, 0.0);
        for i in 0..len {
            let mut value = target.convert_length(self.units[i], self.values[i], LengthUnit::Number);
            if let Some(to) = to {
                let toward = target.convert_length(to.units[i], to.values[i], LengthUnit::Number);
                value = lerp(value, toward, fraction);
            }
            if let Some(acc) = acc {
                let term = target.convert_length(acc.units[i], acc.values[i], LengthUnit::Number);
                value += multiplier as f32 * term;
            }
            changed |= out.units[i] != LengthUnit::Number || out.values[i] != value;
            out.units[i] = LengthUnit::Number;
            out.values[i] = value;
        }
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(
        &self,
        target: &dyn AnimationTarget,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> Self {
        let mut out = self.clone();
        self.interpolate_into(target, &mut out, to, fraction, accumulation, multiplier);
        out
    }

    /// Euclidean distance to `other` over the common arity, in user
    /// units.
    #[must_use]
    pub fn distance_to(&self, target: &dyn AnimationTarget, other: &Self) -> f32 {
        let len = self.len().min(other.len());
        let mut sum = 0.0_f32;
        for i in 0..len {
            let a = target.convert_length(self.units[i], self.values[i], LengthUnit::Number);
            let b = target.convert_length(other.units[i], other.values[i], LengthUnit::Number);
            sum += (a - b) * (a - b);
        }
        sum.sqrt()
    }

    /// Canonical CSS text: space-separated entries with unit suffixes.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for (i, (unit, value)) in self.entries().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_number(&mut out, value);
            out.push_str(unit.suffix());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liana_units::UserUnitTarget;

    const TARGET: UserUnitTarget = UserUnitTarget;

    #[test]
    fn compatible_units_interpolate_raw() {
        let current = Length::new(LengthUnit::Cm, 1.0);
        let to = Length::new(LengthUnit::Cm, 3.0);
        let merged = current.interpolate(&TARGET, Some(&to), 0.5, None, 1);
        assert_eq!(merged, Length::new(LengthUnit::Cm, 2.0));
    }

    #[test]
    fn number_px_pair_interpolates_raw() {
        let current = Length::new(LengthUnit::Number, 0.0);
        let to = Length::new(LengthUnit::Px, 10.0);
        let merged = current.interpolate(&TARGET, Some(&to), 0.25, None, 1);
        assert_eq!(merged.value, 2.5);
        assert_eq!(merged.unit, LengthUnit::Number);
    }

    #[test]
    fn incompatible_units_convert_to_user_units() {
        let current = Length::new(LengthUnit::In, 1.0);
        let to = Length::new(LengthUnit::Px, 0.0);
        let merged = current.interpolate(&TARGET, Some(&to), 0.5, None, 1);
        assert_eq!(merged.unit, LengthUnit::Number);
        assert_eq!(merged.value, 48.0);
    }

    #[test]
    fn zero_fraction_keeps_current() {
        let current = Length::new(LengthUnit::Pt, 12.0);
        let to = Length::new(LengthUnit::Pt, 24.0);
        let merged = current.interpolate(&TARGET, Some(&to), 0.0, None, 1);
        assert_eq!(merged, current);
    }

    #[test]
    fn accumulation_converts_against_result_unit() {
        let current = Length::new(LengthUnit::Px, 10.0);
        let acc = Length::new(LengthUnit::In, 1.0);
        let merged = current.interpolate(&TARGET, None, 0.0, Some(&acc), 2);
        assert_eq!(merged.unit, LengthUnit::Number);
        assert_eq!(merged.value, 10.0 + 2.0 * 96.0);
    }

    #[test]
    fn length_distance_in_user_units() {
        let a = Length::new(LengthUnit::In, 1.0);
        let b = Length::new(LengthUnit::Px, 0.0);
        assert_eq!(a.distance_to(&TARGET, &b), 96.0);
    }

    #[test]
    fn length_css_text_carries_the_suffix() {
        assert_eq!(Length::new(LengthUnit::Px, 4.0).css_text(), "4px");
        assert_eq!(Length::new(LengthUnit::Number, 4.5).css_text(), "4.5");
        assert_eq!(Length::new(LengthUnit::Percentage, 50.0).css_text(), "50%");
    }

    #[test]
    fn length_or_ident_short_circuits() {
        let current = LengthOrIdent::ident("medium");
        let to = LengthOrIdent::length(LengthUnit::Px, 9.0);
        let merged = current.interpolate(&TARGET, Some(&to), 0.9, None, 1);
        assert_eq!(merged, current);
    }

    #[test]
    fn length_or_ident_numeric_merge_clears_ident() {
        let current = LengthOrIdent::length(LengthUnit::Px, 1.0);
        let mut out = LengthOrIdent::ident("thick");
        let changed = current.interpolate_into(&TARGET, &mut out, None, 0.0, None, 1);
        assert!(changed);
        assert_eq!(out, current);
    }

    #[test]
    fn list_always_normalizes_to_user_units() {
        let current = LengthList::new([(LengthUnit::In, 1.0), (LengthUnit::Px, 10.0)]);
        let merged = current.interpolate(&TARGET, None, 0.0, None, 1);
        let entries: alloc::vec::Vec<_> = merged.entries().collect();
        assert_eq!(
            entries,
            [(LengthUnit::Number, 96.0), (LengthUnit::Number, 10.0)]
        );
    }

    #[test]
    fn list_arity_mismatch_skips_the_term() {
        let current = LengthList::new([(LengthUnit::Px, 10.0), (LengthUnit::Px, 20.0)]);
        let to = LengthList::new([(LengthUnit::Px, 100.0)]);
        let merged = current.interpolate(&TARGET, Some(&to), 0.5, None, 1);
        let values: alloc::vec::Vec<_> = merged.entries().map(|(_, v)| v).collect();
        assert_eq!(values, [10.0, 20.0]);
    }

    #[test]
    fn list_elementwise_merge() {
        let current = LengthList::new([(LengthUnit::Px, 0.0), (LengthUnit::Px, 10.0)]);
        let to = LengthList::new([(LengthUnit::Px, 10.0), (LengthUnit::Px, 30.0)]);
        let acc = LengthList::new([(LengthUnit::Px, 1.0), (LengthUnit::Px, 1.0)]);
        let merged = current.interpolate(&TARGET, Some(&to), 0.5, Some(&acc), 2);
        let values: alloc::vec::Vec<_> = merged.entries().map(|(_, v)| v).collect();
        assert_eq!(values, [7.0, 22.0]);
    }

    #[test]
    fn list_buffer_reuse_reports_change_correctly() {
        let current = LengthList::new([(LengthUnit::Px, 5.0)]);
        let mut out = LengthList::zeros(1);
        assert!(current.interpolate_into(&TARGET, &mut out, None, 0.0, None, 1));
        assert!(!current.interpolate_into(&TARGET, &mut out, None, 0.0, None, 1));
    }

    #[test]
    fn list_css_text() {
        let list = LengthList::new([(LengthUnit::Px, 4.0), (LengthUnit::Number, 2.5)]);
        assert_eq!(list.css_text(), "4px 2.5");
    }
}
