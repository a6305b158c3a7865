// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed animatable value sum type and its dispatcher.
//!
//! A timeline samples an animated attribute by calling
//! [`AnimatableValue::interpolate_into`] once per frame with the base
//! value as `self`, the interval's target as `to`, and the sum of prior
//! repeat iterations as `accumulation`. Operand pairing is checked, not
//! assumed: a `to` or `accumulation` of a different kind is treated as
//! absent, and an out-buffer of a different kind is rebuilt wholesale.
//! Nothing in this module panics.

use alloc::string::String;

use liana_units::AnimationTarget;

use crate::color::{Color, Paint};
use crate::discrete::{PreserveAspectRatio, Rect, StringValue};
use crate::length::{Length, LengthList, LengthOrIdent};
use crate::number::{
    Integer, Number, NumberOptionalNumber, NumberOrIdent, NumberOrPercentage, Percentage,
};
use crate::point::{NumberList, Point, PointList};
use crate::transform::TransformList;

/// Linear interpolation between `a` and `b` at `t`.
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Discriminant of an [`AnimatableValue`] kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A [`Number`].
    Number,
    /// An [`Integer`].
    Integer,
    /// A [`Percentage`].
    Percentage,
    /// A [`NumberOrPercentage`].
    NumberOrPercentage,
    /// A [`NumberOrIdent`].
    NumberOrIdent,
    /// A [`NumberOptionalNumber`].
    NumberOptionalNumber,
    /// A [`Length`].
    Length,
    /// A [`LengthOrIdent`].
    LengthOrIdent,
    /// A [`LengthList`].
    LengthList,
    /// A [`NumberList`].
    NumberList,
    /// A [`PointList`].
    PointList,
    /// A [`Point`].
    Point,
    /// A [`Color`].
    Color,
    /// A [`Paint`].
    Paint,
    /// A [`Rect`].
    Rect,
    /// A [`PreserveAspectRatio`].
    PreserveAspectRatio,
    /// A [`StringValue`].
    String,
    /// A [`TransformList`].
    TransformList,
}

/// One typed snapshot of an animated attribute's value.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimatableValue {
    /// A plain number.
    Number(Number),
    /// An integer.
    Integer(Integer),
    /// A percentage.
    Percentage(Percentage),
    /// A number-or-percentage.
    NumberOrPercentage(NumberOrPercentage),
    /// A number-or-ident.
    NumberOrIdent(NumberOrIdent),
    /// A number with an optional second number.
    NumberOptionalNumber(NumberOptionalNumber),
    /// A unit-tagged length.
    Length(Length),
    /// A length-or-ident.
    LengthOrIdent(LengthOrIdent),
    /// A length list.
    LengthList(LengthList),
    /// A number list.
    NumberList(NumberList),
    /// A point list.
    PointList(PointList),
    /// A 2D point.
    Point(Point),
    /// An sRGB color.
    Color(Color),
    /// A paint.
    Paint(Paint),
    /// A rectangle.
    Rect(Rect),
    /// A `preserveAspectRatio` pair.
    PreserveAspectRatio(PreserveAspectRatio),
    /// A string.
    String(StringValue),
    /// A transform chain.
    TransformList(TransformList),
}

/// Extracts a same-kind operand; any other kind is treated as absent.
macro_rules! same_kind {
    ($operand:expr, $variant:ident) => {
        match $operand {
            Some(AnimatableValue::$variant(inner)) => Some(inner),
            _ => None,
        }
    };
}

impl AnimatableValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Integer(_) => ValueKind::Integer,
            Self::Percentage(_) => ValueKind::Percentage,
            Self::NumberOrPercentage(_) => ValueKind::NumberOrPercentage,
            Self::NumberOrIdent(_) => ValueKind::NumberOrIdent,
            Self::NumberOptionalNumber(_) => ValueKind::NumberOptionalNumber,
            Self::Length(_) => ValueKind::Length,
            Self::LengthOrIdent(_) => ValueKind::LengthOrIdent,
            Self::LengthList(_) => ValueKind::LengthList,
            Self::NumberList(_) => ValueKind::NumberList,
            Self::PointList(_) => ValueKind::PointList,
            Self::Point(_) => ValueKind::Point,
            Self::Color(_) => ValueKind::Color,
            Self::Paint(_) => ValueKind::Paint,
            Self::Rect(_) => ValueKind::Rect,
            Self::PreserveAspectRatio(_) => ValueKind::PreserveAspectRatio,
            Self::String(_) => ValueKind::String,
            Self::TransformList(_) => ValueKind::TransformList,
        }
    }

    /// Merges this value toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// This is the once-per-frame entry point. `out` is the caller's
    /// result buffer: its identity is preserved and list-backed kinds
    /// reuse its storage when the shape already matches, so a steady
    /// animation loop allocates nothing. Passing `multiplier = 1`
    /// reproduces the plain additive semantics; larger multipliers scale
    /// the accumulated term for repeat iterations.
    ///
    /// Returns `true` if `out`'s contents changed; callers may use this
    /// to skip redundant downstream work.
    pub fn interpolate_into(
        &self,
        target: &dyn AnimationTarget,
        out: &mut Self,
        to: Option<&Self>,
        fraction: f32,
        accumulation: Option<&Self>,
        multiplier: u32,
    ) -> bool {
        if self.kind() != out.kind() {
            *out = self.interpolate(target, to, fraction, accumulation, multiplier);
            return true;
        }
        match (self, out) {
            (Self::Number(cur), Self::Number(out)) => cur.interpolate_into(
                out,
                same_kind!(to, Number),
                fraction,
                same_kind!(accumulation, Number),
                multiplier,
            ),
            (Self::Integer(cur), Self::Integer(out)) => cur.interpolate_into(
                out,
                same_kind!(to, Integer),
                fraction,
                same_kind!(accumulation, Integer),
                multiplier,
            ),
            (Self::Percentage(cur), Self::Percentage(out)) => cur.interpolate_into(
                out,
                same_kind!(to, Percentage),
                fraction,
                same_kind!(accumulation, Percentage),
                multiplier,
            ),
            (Self::NumberOrPercentage(cur), Self::NumberOrPercentage(out)) => cur
                .interpolate_into(
                    out,
                    same_kind!(to, NumberOrPercentage),
                    fraction,
                    same_kind!(accumulation, NumberOrPercentage),
                    multiplier,
                ),
            (Self::NumberOrIdent(cur), Self::NumberOrIdent(out)) => cur.interpolate_into(
                out,
                same_kind!(to, NumberOrIdent),
                fraction,
                same_kind!(accumulation, NumberOrIdent),
                multiplier,
            ),
            (Self::NumberOptionalNumber(cur), Self::NumberOptionalNumber(out)) => {
                cur.interpolate_into(out, same_kind!(to, NumberOptionalNumber), fraction)
            }
            (Self::Length(cur), Self::Length(out)) => cur.interpolate_into(
                target,
                out,
                same_kind!(to, Length),
                fraction,
                same_kind!(accumulation, Length),
                multiplier,
            ),
            (Self::LengthOrIdent(cur), Self::LengthOrIdent(out)) => cur.interpolate_into(
                target,
                out,
                same_kind!(to, LengthOrIdent),
                fraction,
                same_kind!(accumulation, LengthOrIdent),
                multiplier,
            ),
            (Self::LengthList(cur), Self::LengthList(out)) => cur.interpolate_into(
                target,
                out,
                same_kind!(to, LengthList),
                fraction,
                same_kind!(accumulation, LengthList),
                multiplier,
            ),
            (Self::NumberList(cur), Self::NumberList(out)) => cur.interpolate_into(
                out,
                same_kind!(to, NumberList),
                fraction,
                same_kind!(accumulation, NumberList),
                multiplier,
            ),
            (Self::PointList(cur), Self::PointList(out)) => cur.interpolate_into(
                out,
                same_kind!(to, PointList),
                fraction,
                same_kind!(accumulation, PointList),
                multiplier,
            ),
            (Self::Point(cur), Self::Point(out)) => cur.interpolate_into(
                out,
                same_kind!(to, Point),
                fraction,
                same_kind!(accumulation, Point),
                multiplier,
            ),
            (Self::Color(cur), Self::Color(out)) => cur.interpolate_into(
                out,
                same_kind!(to, Color),
                fraction,
                same_kind!(accumulation, Color),
                multiplier,
            ),
            (Self::Paint(cur), Self::Paint(out)) => cur.interpolate_into(
                out,
                same_kind!(to, Paint),
                fraction,
                same_kind!(accumulation, Paint),
                multiplier,
            ),
            (Self::Rect(cur), Self::Rect(out)) => cur.interpolate_into(out),
            (Self::PreserveAspectRatio(cur), Self::PreserveAspectRatio(out)) => {
                cur.interpolate_into(out, same_kind!(to, PreserveAspectRatio), fraction)
            }
            (Self::String(cur), Self::String(out)) => cur.interpolate_into(out),
            (Self::TransformList(cur), Self::TransformList(out)) => cur.interpolate_into(
                out,
                same_kind!(to, TransformList),
                fraction,
                same_kind!(accumulation, TransformList),
                multiplier,
            ),
            _ => {
                // Kinds were checked equal above.
                debug_assert!(false, "mismatched kinds after kind check");
                false
            }
        }
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

    /// The additive identity for this value's kind, or `None` when the
    /// kind has no sensible zero.
    ///
    /// A `None` means accumulate/additive mode is unsupported for the
    /// attribute; callers should disable it rather than fold a term
    /// that would be dropped.
    #[must_use]
    pub fn zero_value(&self) -> Option<Self> {
        Some(match self {
            Self::Number(_) => Self::Number(Number::new(0.0)),
            Self::Integer(_) => Self::Integer(Integer::new(0)),
            Self::Percentage(_) => Self::Percentage(Percentage::new(0.0)),
            // Zero keeps the current tag so the accumulated term stays
            // applicable.
            Self::NumberOrPercentage(v) => Self::NumberOrPercentage(if v.is_percentage {
                NumberOrPercentage::percentage(0.0)
            } else {
                NumberOrPercentage::number(0.0)
            }),
            Self::NumberOrIdent(_) => Self::NumberOrIdent(NumberOrIdent::number(0.0)),
            Self::Length(_) => Self::Length(Length::zero()),
            Self::LengthOrIdent(_) => Self::LengthOrIdent(LengthOrIdent {
                length: Length::zero(),
                ident: None,
            }),
            Self::LengthList(v) => Self::LengthList(LengthList::zeros(v.len())),
            Self::NumberList(v) => Self::NumberList(NumberList::zeros(v.len())),
            Self::PointList(v) => Self::PointList(PointList(NumberList::zeros(v.0.len()))),
            Self::Point(_) => Self::Point(Point::new(0.0, 0.0)),
            Self::Color(_) => Self::Color(Color::BLACK),
            Self::Paint(_) => Self::Paint(Paint::Color(Color::BLACK)),
            Self::TransformList(_) => Self::TransformList(TransformList::new()),
            Self::NumberOptionalNumber(_)
            | Self::Rect(_)
            | Self::PreserveAspectRatio(_)
            | Self::String(_) => return None,
        })
    }

    /// Canonical CSS text, or `None` for kinds with no CSS form (rects
    /// and transform chains).
    ///
    /// A `None` means "write no presentation-attribute string", never
    /// the literal text `null`.
    #[must_use]
    pub fn css_text(&self) -> Option<String> {
        Some(match self {
            Self::Number(v) => v.css_text(),
            Self::Integer(v) => v.css_text(),
            Self::Percentage(v) => v.css_text(),
            Self::NumberOrPercentage(v) => v.css_text(),
            Self::NumberOrIdent(v) => v.css_text(),
            Self::NumberOptionalNumber(v) => v.css_text(),
            Self::Length(v) => v.css_text(),
            Self::LengthOrIdent(v) => v.css_text(),
            Self::LengthList(v) => v.css_text(),
            Self::NumberList(v) => v.css_text(),
            Self::PointList(v) => v.css_text(),
            Self::Point(v) => v.css_text(),
            Self::Color(v) => v.css_text(),
            Self::Paint(v) => v.css_text(),
            Self::PreserveAspectRatio(v) => v.css_text(),
            Self::String(v) => v.css_text(),
            Self::Rect(_) | Self::TransformList(_) => return None,
        })
    }

    /// Returns `true` if distances between values of this kind are
    /// meaningful for paced animation.
    #[must_use]
    pub const fn can_pace(&self) -> bool {
        matches!(
            self,
            Self::Number(_)
                | Self::Integer(_)
                | Self::Percentage(_)
                | Self::NumberOrPercentage(_)
                | Self::Length(_)
                | Self::LengthList(_)
                | Self::NumberList(_)
                | Self::PointList(_)
                | Self::Point(_)
                | Self::Color(_)
                | Self::TransformList(_)
        )
    }

    /// Absolute distance between this value and `other`, for paced
    /// animation; 0 for non-paceable kinds and mismatched pairs.
    #[must_use]
    pub fn distance_to(&self, target: &dyn AnimationTarget, other: &Self) -> f32 {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.distance_to(b),
            (Self::Integer(a), Self::Integer(b)) => a.distance_to(b),
            (Self::Percentage(a), Self::Percentage(b)) => a.distance_to(b),
            (Self::NumberOrPercentage(a), Self::NumberOrPercentage(b)) => a.distance_to(b),
            (Self::Length(a), Self::Length(b)) => a.distance_to(target, b),
            (Self::LengthList(a), Self::LengthList(b)) => a.distance_to(target, b),
            (Self::NumberList(a), Self::NumberList(b)) => a.distance_to(b),
            (Self::PointList(a), Self::PointList(b)) => a.distance_to(b),
            (Self::Point(a), Self::Point(b)) => a.distance_to(b),
            (Self::Color(a), Self::Color(b)) => a.distance_to(b),
            (Self::TransformList(a), Self::TransformList(b)) => a.distance_to(b),
            _ => 0.0,
        }
    }
}

macro_rules! impl_from {
    ($kind:ty, $variant:ident) => {
        impl From<$kind> for AnimatableValue {
            fn from(value: $kind) -> Self {
                Self::$variant(value)
            }
        }
    };
}

impl_from!(Number, Number);
impl_from!(Integer, Integer);
impl_from!(Percentage, Percentage);
impl_from!(NumberOrPercentage, NumberOrPercentage);
impl_from!(NumberOrIdent, NumberOrIdent);
impl_from!(NumberOptionalNumber, NumberOptionalNumber);
impl_from!(Length, Length);
impl_from!(LengthOrIdent, LengthOrIdent);
impl_from!(LengthList, LengthList);
impl_from!(NumberList, NumberList);
impl_from!(PointList, PointList);
impl_from!(Point, Point);
impl_from!(Color, Color);
impl_from!(Paint, Paint);
impl_from!(Rect, Rect);
impl_from!(PreserveAspectRatio, PreserveAspectRatio);
impl_from!(StringValue, String);
impl_from!(TransformList, TransformList);
