// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and paints.
//!
//! Colors interpolate per channel, linearly in sRGB space; gamma-correct
//! blending is a caller concern. Paints interpolate only between two
//! solid-color paints — every other pairing holds the current paint for
//! the whole fraction range.

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`, `sqrt`

use crate::value::lerp;

/// An animatable sRGB color with channels in `0..=1`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    /// Red channel.
    pub red: f32,
    /// Green channel.
    pub green: f32,
    /// Blue channel.
    pub blue: f32,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new color.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Merges this color toward `to` at `fraction`, folding in
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
        let (mut red, mut green, mut blue) = match to {
            Some(to) => (
                lerp(self.red, to.red, fraction),
                lerp(self.green, to.green, fraction),
                lerp(self.blue, to.blue, fraction),
            ),
            None => (self.red, self.green, self.blue),
        };
        if let Some(acc) = accumulation {
            let m = multiplier as f32;
            red += m * acc.red;
            green += m * acc.green;
            blue += m * acc.blue;
        }
        let changed = out.red != red || out.green != green || out.blue != blue;
        out.red = red;
        out.green = green;
        out.blue = blue;
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

    /// Euclidean distance to `other` in channel space.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        let dr = self.red - other.red;
        let dg = self.green - other.green;
        let db = self.blue - other.blue;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Canonical CSS text, e.g. `rgb(255,0,0)`.
    #[must_use]
    pub fn css_text(&self) -> String {
        format!(
            "rgb({},{},{})",
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue)
        )
    }
}

/// Scales a unit channel to its byte form, rounding to nearest.
fn channel_byte(channel: f32) -> i32 {
    (channel * 255.0).round() as i32
}

/// An animatable SVG paint.
///
/// Channel math applies only between two [`Paint::Color`] values; any
/// other pairing is non-interpolable and copies the current paint
/// verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// `none`.
    None,
    /// `currentColor`.
    CurrentColor,
    /// A solid color.
    Color(Color),
    /// A paint-server reference.
    Uri(String),
    /// A paint-server reference with a `none` fallback.
    UriNone(String),
    /// A paint-server reference with a `currentColor` fallback.
    UriCurrentColor(String),
    /// A paint-server reference with a color fallback.
    UriColor {
        /// The paint-server reference.
        uri: String,
        /// The fallback color.
        color: Color,
    },
    /// `inherit`.
    Inherit,
}

impl Paint {
    /// Creates a solid color paint.
    #[must_use]
    pub const fn color(red: f32, green: f32, blue: f32) -> Self {
        Self::Color(Color::new(red, green, blue))
    }

    /// Creates a paint-server reference with a color fallback.
    #[must_use]
    pub fn uri_color(uri: impl Into<String>, red: f32, green: f32, blue: f32) -> Self {
        Self::UriColor {
            uri: uri.into(),
            color: Color::new(red, green, blue),
        }
    }

    /// Merges this paint toward `to` at `fraction`, folding in
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
        if let (Self::Color(current), Some(Self::Color(to))) = (self, to) {
            let acc = match accumulation {
                Some(Self::Color(acc)) => Some(acc),
                _ => None,
            };
            return match out {
                Self::Color(buf) => {
                    current.interpolate_into(buf, Some(to), fraction, acc, multiplier)
                }
                _ => {
                    *out = Self::Color(current.interpolate(
                        Some(to),
                        fraction,
                        acc,
                        multiplier,
                    ));
                    true
                }
            };
        }
        let changed = out != self;
        out.clone_from(self);
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

    /// Canonical CSS text, one of the eight paint forms.
    #[must_use]
    pub fn css_text(&self) -> String {
        match self {
            Self::None => String::from("none"),
            Self::CurrentColor => String::from("currentColor"),
            Self::Color(color) => color.css_text(),
            Self::Uri(uri) => format!("url({uri})"),
            Self::UriNone(uri) => format!("url({uri}) none"),
            Self::UriCurrentColor(uri) => format!("url({uri}) currentColor"),
            Self::UriColor { uri, color } => format!("url({uri}) {}", color.css_text()),
            Self::Inherit => String::from("inherit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lerps_per_channel() {
        let current = Color::new(1.0, 0.0, 0.0);
        let to = Color::new(0.0, 0.0, 1.0);
        let merged = current.interpolate(Some(&to), 0.5, None, 1);
        assert_eq!(merged, Color::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn color_zero_fraction_keeps_current() {
        let current = Color::new(0.25, 0.5, 0.75);
        let to = Color::new(1.0, 1.0, 1.0);
        assert_eq!(current.interpolate(Some(&to), 0.0, None, 1), current);
    }

    #[test]
    fn color_endpoint_is_exact() {
        let current = Color::new(0.25, 0.5, 0.75);
        let to = Color::new(1.0, 0.0, 0.5);
        assert_eq!(current.interpolate(Some(&to), 1.0, None, 1), to);
    }

    #[test]
    fn color_accumulates_unscaled_channels() {
        // Dyadic channel values, so the sums are exact in f32.
        let current = Color::new(0.125, 0.5, 0.25);
        let acc = Color::new(0.25, 0.0, 0.375);
        let merged = current.interpolate(None, 0.0, Some(&acc), 2);
        assert_eq!(merged, Color::new(0.625, 0.5, 1.0));
    }

    #[test]
    fn color_css_text_rounds_channels() {
        assert_eq!(Color::new(1.0, 0.0, 0.0).css_text(), "rgb(255,0,0)");
        assert_eq!(Color::new(0.5, 0.25, 0.0).css_text(), "rgb(128,64,0)");
    }

    #[test]
    fn paint_color_pair_interpolates() {
        let current = Paint::color(1.0, 0.0, 0.0);
        let to = Paint::color(0.0, 0.0, 1.0);
        let merged = current.interpolate(Some(&to), 0.5, None, 1);
        assert_eq!(merged, Paint::color(0.5, 0.0, 0.5));
    }

    #[test]
    fn paint_type_boundary_holds_current() {
        let current = Paint::None;
        let to = Paint::uri_color("#p", 0.0, 0.0, 1.0);
        // `none` -> `url(#p)` never interpolates, even at fraction 1.
        assert_eq!(current.interpolate(Some(&to), 1.0, None, 1), Paint::None);
    }

    #[test]
    fn paint_buffer_rebuilt_across_variants() {
        let current = Paint::color(0.0, 0.0, 0.0);
        let to = Paint::color(1.0, 1.0, 1.0);
        let mut out = Paint::Inherit;
        assert!(current.interpolate_into(&mut out, Some(&to), 1.0, None, 1));
        assert_eq!(out, Paint::color(1.0, 1.0, 1.0));
    }

    #[test]
    fn paint_css_text_forms() {
        assert_eq!(Paint::None.css_text(), "none");
        assert_eq!(Paint::CurrentColor.css_text(), "currentColor");
        assert_eq!(Paint::color(0.0, 0.0, 1.0).css_text(), "rgb(0,0,255)");
        assert_eq!(Paint::Uri(String::from("#g1")).css_text(), "url(#g1)");
        assert_eq!(
            Paint::UriNone(String::from("#g1")).css_text(),
            "url(#g1) none"
        );
        assert_eq!(
            Paint::UriCurrentColor(String::from("#g1")).css_text(),
            "url(#g1) currentColor"
        );
        assert_eq!(
            Paint::uri_color("#g1", 0.0, 0.0, 1.0).css_text(),
            "url(#g1) rgb(0,0,255)"
        );
        assert_eq!(Paint::Inherit.css_text(), "inherit");
    }
}
