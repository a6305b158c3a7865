// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Liana Values: the animatable value algebra for SMIL-style SVG
//! animation.
//!
//! This crate is the numeric heart of an animation engine: the family of
//! typed values a timeline merges once per frame per animated attribute.
//! It defines no parsing, no cascade, and no painting — just the merge
//! algebra over a closed set of kinds (numbers, lengths, colors, paints,
//! points, transforms, and their composites), each with its own
//! interpolation, accumulation, and serialization semantics.
//!
//! ## Core concepts
//!
//! - **[`AnimatableValue`]** — the closed sum type, one variant per
//!   kind, with the per-frame dispatcher. Each kind is also usable
//!   directly as a plain typed struct.
//! - **Interpolation** — [`AnimatableValue::interpolate_into`] merges a
//!   base value toward an optional `to` value at a fraction in `0..=1`,
//!   then folds in `multiplier` repeats of an optional accumulated
//!   value. Kinds that cannot interpolate either copy the base (rects,
//!   strings, cross-type paints) or flip discretely at the midpoint
//!   (preserve-aspect-ratio, cross-unit composites).
//! - **Result buffer** — the `out` parameter is reused in place so a
//!   60fps loop produces no per-frame garbage; the returned `bool`
//!   reports whether the buffer actually changed.
//! - **Zero values** — [`AnimatableValue::zero_value`] is the additive
//!   identity, or `None` for kinds where accumulation is unsupported.
//! - **CSS text** — [`AnimatableValue::css_text`] renders the canonical
//!   presentation-attribute form, or `None` for unrepresentable kinds.
//! - **Pacing** — [`AnimatableValue::can_pace`] /
//!   [`AnimatableValue::distance_to`] support `calcMode="paced"`
//!   timelines.
//!
//! Length-bearing kinds normalize units through the
//! [`AnimationTarget`](liana_units::AnimationTarget) capability from
//! [`liana_units`], injected per call.
//!
//! ## Example
//!
//! ```rust
//! use liana_units::UserUnitTarget;
//! use liana_values::{AnimatableValue, Color, Number};
//!
//! let target = UserUnitTarget;
//!
//! let base = AnimatableValue::Number(Number::new(10.0));
//! let to = AnimatableValue::Number(Number::new(20.0));
//! let mut out = base.clone();
//! let changed = base.interpolate_into(&target, &mut out, Some(&to), 0.5, None, 1);
//! assert!(changed);
//! assert_eq!(out, AnimatableValue::Number(Number::new(15.0)));
//!
//! let red = AnimatableValue::Color(Color::new(1.0, 0.0, 0.0));
//! assert_eq!(red.css_text().as_deref(), Some("rgb(255,0,0)"));
//! ```
//!
//! ## Error handling
//!
//! Nothing here panics or returns errors: unsupported operations
//! surface as `None` sentinels and mismatched operands (wrong kind,
//! wrong arity) silently skip the affected term, so a malformed
//! animation degrades instead of taking the renderer down.

#![no_std]

extern crate alloc;

mod color;
mod discrete;
mod fmt;
mod length;
mod number;
mod point;
mod transform;
mod value;

pub use color::{Color, Paint};
pub use discrete::{Align, MeetOrSlice, PreserveAspectRatio, Rect, StringValue};
pub use length::{Length, LengthList, LengthOrIdent};
pub use number::{
    Integer, Number, NumberOptionalNumber, NumberOrIdent, NumberOrPercentage, Percentage,
};
pub use point::{NumberList, Point, PointList};
pub use transform::{Transform, TransformList};
pub use value::{AnimatableValue, ValueKind};
