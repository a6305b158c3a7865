// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points and flat number lists.
//!
//! A point list is stored as a flattened number list of x,y pairs and
//! shares its behavior wholesale.

use alloc::string::String;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`

use crate::fmt::push_number;
use crate::value::lerp;

/// Inline capacity for number lists.
const INLINE_NUMBERS: usize = 8;

/// An animatable 2D point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Merges this point toward `to` at `fraction`, folding in
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
        let (mut x, mut y) = match to {
            Some(to) => (lerp(self.x, to.x, fraction), lerp(self.y, to.y, fraction)),
            None => (self.x, self.y),
        };
        if let Some(acc) = accumulation {
            x += multiplier as f32 * acc.x;
            y += multiplier as f32 * acc.y;
        }
        let changed = out.x != x || out.y != y;
        out.x = x;
        out.y = y;
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

    /// Euclidean distance to `other`, for paced animation.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Canonical CSS text: `x,y`.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        push_number(&mut out, self.x);
        out.push(',');
        push_number(&mut out, self.y);
        out
    }
}

/// An animatable list of numbers with a fixed arity per attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumberList {
    /// The numbers.
    pub numbers: SmallVec<[f32; INLINE_NUMBERS]>,
}

impl NumberList {
    /// Creates a list from the given numbers.
    #[must_use]
    pub fn new(numbers: impl IntoIterator<Item = f32>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }

    /// A list of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            numbers: smallvec::smallvec![0.0; len],
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Merges this list toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// Elementwise lerp, matching the scalar kinds. A `to` or
    /// `accumulation` list with a different arity silently skips that
    /// term.
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
        let len = self.len();
        let to = to.filter(|to| to.len() == len);
        let acc = accumulation.filter(|acc| acc.len() == len);

        let mut changed = out.len() != len;
        out.numbers.resize(len, 0.0);
        for i in 0..len {
            let mut value = match to {
                Some(to) => lerp(self.numbers[i], to.numbers[i], fraction),
                None => self.numbers[i],
            };
            if let Some(acc) = acc {
                value += multiplier as f32 * acc.numbers[i];
            }
            changed |= out.numbers[i] != value;
            out.numbers[i] = value;
        }
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

    /// Euclidean distance to `other` over the common arity.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        let len = self.len().min(other.len());
        let mut sum = 0.0_f32;
        for i in 0..len {
            let d = self.numbers[i] - other.numbers[i];
            sum += d * d;
        }
        sum.sqrt()
    }

    /// Canonical CSS text: space-separated numbers.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for (i, &value) in self.numbers.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_number(&mut out, value);
        }
        out
    }
}

/// An animatable point list: flattened x,y pairs with [`NumberList`]
/// behavior and no overrides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointList(pub NumberList);

impl PointList {
    /// Creates a point list from `(x, y)` pairs.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut numbers = SmallVec::new();
        for (x, y) in points {
            numbers.push(x);
            numbers.push(y);
        }
        Self(NumberList { numbers })
    }

    /// Number of points (half the flattened arity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len() / 2
    }

    /// Returns `true` if the list has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// See [`NumberList::interpolate_into`].
    pub fn interpolate_into(
        &self,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        self.0.interpolate_into(
            &mut out.0,
            to.map(|to| &to.0),
            fraction,
            accumulation.map(|acc| &acc.0),
            multiplier,
        )
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

    /// See [`NumberList::distance_to`].
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        self.0.distance_to(&other.0)
    }

    /// Canonical CSS text: space-separated `x,y` pairs.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for (i, pair) in self.0.numbers.chunks_exact(2).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_number(&mut out, pair[0]);
            out.push(',');
            push_number(&mut out, pair[1]);
        }
        out
    }
}
