// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform lists.
//!
//! SMIL additive transform animation does not blend matrices in place:
//! each repeat iteration contributes one more transform to a chain, and
//! the interpolated entry for the current interval is appended at the
//! end. Components interpolate in their parameter space (translation
//! offsets, scale factors, angles in degrees) rather than through the
//! composed matrix.

use kurbo::Affine;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`, `tan`

use crate::value::lerp;

/// Inline capacity for transform chains; one entry per repeat iteration
/// plus the interpolated tail.
const INLINE_TRANSFORMS: usize = 2;

/// A single SVG transform.
///
/// Angles are in degrees, matching the SVG attribute syntax.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    /// `translate(x, y)`.
    Translate {
        /// Horizontal offset.
        x: f32,
        /// Vertical offset.
        y: f32,
    },
    /// `scale(x, y)`.
    Scale {
        /// Horizontal factor.
        x: f32,
        /// Vertical factor.
        y: f32,
    },
    /// `rotate(angle, cx, cy)`.
    Rotate {
        /// Rotation angle in degrees.
        angle: f32,
        /// Horizontal center.
        cx: f32,
        /// Vertical center.
        cy: f32,
    },
    /// `skewX(angle)`.
    SkewX {
        /// Skew angle in degrees.
        angle: f32,
    },
    /// `skewY(angle)`.
    SkewY {
        /// Skew angle in degrees.
        angle: f32,
    },
}

impl Transform {
    /// The identity transform (a zero translation).
    pub const IDENTITY: Self = Self::Translate { x: 0.0, y: 0.0 };

    /// Returns `true` if `other` is the same transform type.
    #[must_use]
    pub fn same_type(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Interpolates the components of this transform toward `to`.
    ///
    /// Both transforms must be of the same type; a mismatched pair
    /// returns `self` unchanged.
    #[must_use]
    pub fn lerp_toward(&self, to: &Self, fraction: f32) -> Self {
        match (*self, *to) {
            (Self::Translate { x, y }, Self::Translate { x: tx, y: ty }) => Self::Translate {
                x: lerp(x, tx, fraction),
                y: lerp(y, ty, fraction),
            },
            (Self::Scale { x, y }, Self::Scale { x: tx, y: ty }) => Self::Scale {
                x: lerp(x, tx, fraction),
                y: lerp(y, ty, fraction),
            },
            (
                Self::Rotate { angle, cx, cy },
                Self::Rotate {
                    angle: ta,
                    cx: tcx,
                    cy: tcy,
                },
            ) => Self::Rotate {
                angle: lerp(angle, ta, fraction),
                cx: lerp(cx, tcx, fraction),
                cy: lerp(cy, tcy, fraction),
            },
            (Self::SkewX { angle }, Self::SkewX { angle: ta }) => Self::SkewX {
                angle: lerp(angle, ta, fraction),
            },
            (Self::SkewY { angle }, Self::SkewY { angle: ta }) => Self::SkewY {
                angle: lerp(angle, ta, fraction),
            },
            _ => *self,
        }
    }

    /// Component-space distance to `other`, for paced animation.
    ///
    /// Defined for same-type pairs (offsets for translate, factors for
    /// scale, angle for rotate and skews); 0 otherwise.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        match (*self, *other) {
            (Self::Translate { x, y }, Self::Translate { x: ox, y: oy })
            | (Self::Scale { x, y }, Self::Scale { x: ox, y: oy }) => {
                let dx = x - ox;
                let dy = y - oy;
                (dx * dx + dy * dy).sqrt()
            }
            (Self::Rotate { angle, .. }, Self::Rotate { angle: oa, .. })
            | (Self::SkewX { angle }, Self::SkewX { angle: oa })
            | (Self::SkewY { angle }, Self::SkewY { angle: oa }) => (angle - oa).abs(),
            _ => 0.0,
        }
    }

    /// The affine matrix of this transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        match *self {
            Self::Translate { x, y } => Affine::translate((f64::from(x), f64::from(y))),
            Self::Scale { x, y } => Affine::scale_non_uniform(f64::from(x), f64::from(y)),
            Self::Rotate { angle, cx, cy } => Affine::rotate_about(
                f64::from(angle).to_radians(),
                kurbo::Point::new(f64::from(cx), f64::from(cy)),
            ),
            Self::SkewX { angle } => Affine::skew(f64::from(angle).to_radians().tan(), 0.0),
            Self::SkewY { angle } => Affine::skew(0.0, f64::from(angle).to_radians().tan()),
        }
    }
}

/// An animatable transform chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformList {
    /// The transforms, applied left to right.
    pub transforms: SmallVec<[Transform; INLINE_TRANSFORMS]>,
}

impl TransformList {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chain holding a single transform.
    #[must_use]
    pub fn single(transform: Transform) -> Self {
        let mut transforms = SmallVec::new();
        transforms.push(transform);
        Self { transforms }
    }

    /// Creates a chain from a sequence of transforms.
    #[must_use]
    pub fn from_transforms(transforms: impl IntoIterator<Item = Transform>) -> Self {
        Self {
            transforms: transforms.into_iter().collect(),
        }
    }

    /// Number of transforms in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns `true` if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Merges this chain toward `to` at `fraction`, folding in
    /// `multiplier` repeats of `accumulation`, writing into `out`.
    ///
    /// The result holds every accumulated transform repeated
    /// `multiplier` times, in order, followed by one interpolated entry
    /// when `to` is present and its last transform has the same type as
    /// this chain's last. A type mismatch contributes no entry.
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
        let appended = to.and_then(|to| {
            match (self.transforms.last(), to.transforms.last()) {
                (Some(current), Some(toward)) if current.same_type(toward) => {
                    Some(current.lerp_toward(toward, fraction))
                }
                _ => None,
            }
        });

        let repeats = multiplier as usize;
        let acc_len = accumulation.map_or(0, Self::len);
        let new_len = acc_len * repeats + usize::from(appended.is_some());

        let mut changed = out.transforms.len() != new_len;
        out.transforms.resize(new_len, Transform::IDENTITY);
        let mut idx = 0;
        if let Some(acc) = accumulation {
            for transform in &acc.transforms {
                for _ in 0..repeats {
                    changed |= out.transforms[idx] != *transform;
                    out.transforms[idx] = *transform;
                    idx += 1;
                }
            }
        }
        if let Some(transform) = appended {
            changed |= out.transforms[idx] != transform;
            out.transforms[idx] = transform;
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

    /// Distance to `other`, defined for single-entry chains of the same
    /// transform type; 0 otherwise.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        match (self.transforms.as_slice(), other.transforms.as_slice()) {
            ([a], [b]) => a.distance_to(b),
            _ => 0.0,
        }
    }

    /// The composed affine matrix of the chain, applied left to right.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.transforms
            .iter()
            .fold(Affine::IDENTITY, |acc, t| acc * t.to_affine())
    }
}
