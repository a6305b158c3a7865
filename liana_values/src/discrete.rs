// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kinds that never interpolate numerically: rects and strings copy the
//! current value for the whole fraction range; preserve-aspect-ratio
//! flips discretely at the midpoint.

use alloc::string::String;

/// An animatable rectangle.
///
/// Rects are carried through the animation machinery but never
/// interpolated; the merge always copies the current fields. They have
/// no CSS text form.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rect.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Copies this rect into `out`, ignoring `to` and the fraction.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(&self, out: &mut Self) -> bool {
        let changed = out != self;
        *out = *self;
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub const fn interpolate(&self) -> Self {
        *self
    }
}

/// Alignment of a `preserveAspectRatio` value, matching the SVG
/// `SVG_PRESERVEASPECTRATIO_*` constants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Alignment not one of the predefined types.
    Unknown,
    /// Do not force uniform scaling.
    None,
    /// Align min-x with min-y.
    XMinYMin,
    /// Align mid-x with min-y.
    XMidYMin,
    /// Align max-x with min-y.
    XMaxYMin,
    /// Align min-x with mid-y.
    XMinYMid,
    /// Align mid-x with mid-y (the SVG default).
    #[default]
    XMidYMid,
    /// Align max-x with mid-y.
    XMaxYMid,
    /// Align min-x with max-y.
    XMinYMax,
    /// Align mid-x with max-y.
    XMidYMax,
    /// Align max-x with max-y.
    XMaxYMax,
}

impl Align {
    /// The SVG keyword for this alignment; empty for `Unknown`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::None => "none",
            Self::XMinYMin => "xMinYMin",
            Self::XMidYMin => "xMidYMin",
            Self::XMaxYMin => "xMaxYMin",
            Self::XMinYMid => "xMinYMid",
            Self::XMidYMid => "xMidYMid",
            Self::XMaxYMid => "xMaxYMid",
            Self::XMinYMax => "xMinYMax",
            Self::XMidYMax => "xMidYMax",
            Self::XMaxYMax => "xMaxYMax",
        }
    }
}

/// The meet-or-slice part of a `preserveAspectRatio` value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeetOrSlice {
    /// Not specified.
    Unknown,
    /// Scale to fit entirely within the viewport.
    #[default]
    Meet,
    /// Scale to cover the viewport, clipping the overflow.
    Slice,
}

impl MeetOrSlice {
    /// The SVG keyword; empty for `Unknown`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Meet => "meet",
            Self::Slice => "slice",
        }
    }
}

/// An animatable `preserveAspectRatio` value.
///
/// Non-interpolable: the merge holds the current pair below the midpoint
/// and snaps wholesale to `to`'s at `fraction >= 0.5`. Accumulation is
/// unsupported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PreserveAspectRatio {
    /// The alignment.
    pub align: Align,
    /// The meet-or-slice choice.
    pub meet_or_slice: MeetOrSlice,
}

impl PreserveAspectRatio {
    /// Creates a new value.
    #[must_use]
    pub const fn new(align: Align, meet_or_slice: MeetOrSlice) -> Self {
        Self {
            align,
            meet_or_slice,
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

    /// Canonical CSS text, e.g. `xMidYMid meet`.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::from(self.align.keyword());
        if self.align != Align::None {
            let meet_or_slice = self.meet_or_slice.keyword();
            if !out.is_empty() && !meet_or_slice.is_empty() {
                out.push(' ');
                out.push_str(meet_or_slice);
            }
        }
        out
    }
}

/// An animatable string.
///
/// Strings never interpolate; the merge copies the current value
/// verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringValue {
    /// The string.
    pub value: String,
}

impl StringValue {
    /// Creates a new string value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Copies this string into `out`, ignoring `to` and the fraction.
    ///
    /// Returns `true` if `out`'s contents changed.
    pub fn interpolate_into(&self, out: &mut Self) -> bool {
        let changed = out != self;
        out.value.clone_from(&self.value);
        changed
    }

    /// Allocating form of [`interpolate_into`](Self::interpolate_into).
    #[must_use]
    pub fn interpolate(&self) -> Self {
        self.clone()
    }

    /// Canonical CSS text: the string itself.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_always_copies_current() {
        let current = Rect::new(0.0, 0.0, 10.0, 20.0);
        let mut out = Rect::default();
        assert!(current.interpolate_into(&mut out));
        assert_eq!(out, current);
        assert!(!current.interpolate_into(&mut out));
    }

    #[test]
    fn preserve_aspect_ratio_flips_at_the_midpoint() {
        let current = PreserveAspectRatio::new(Align::XMidYMid, MeetOrSlice::Meet);
        let to = PreserveAspectRatio::new(Align::XMaxYMax, MeetOrSlice::Slice);

        assert_eq!(current.interpolate(Some(&to), 0.4999), current);
        assert_eq!(current.interpolate(Some(&to), 0.5), to);
        assert_eq!(current.interpolate(None, 1.0), current);
    }

    #[test]
    fn preserve_aspect_ratio_css_text() {
        assert_eq!(
            PreserveAspectRatio::new(Align::XMidYMid, MeetOrSlice::Meet).css_text(),
            "xMidYMid meet"
        );
        assert_eq!(
            PreserveAspectRatio::new(Align::XMaxYMax, MeetOrSlice::Slice).css_text(),
            "xMaxYMax slice"
        );
        assert_eq!(
            PreserveAspectRatio::new(Align::None, MeetOrSlice::Meet).css_text(),
            "none"
        );
    }

    #[test]
    fn string_copies_verbatim() {
        let current = StringValue::new("butt");
        let mut out = StringValue::new("round");
        assert!(current.interpolate_into(&mut out));
        assert_eq!(out.value, "butt");
        assert!(!current.interpolate_into(&mut out));
    }
}
