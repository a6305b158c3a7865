// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared number formatting for CSS text output.

use alloc::string::String;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `trunc`

/// Formats a float in its shortest decimal form, with whole values
/// printed without a fractional part (`50.0` becomes `"50"`).
pub(crate) fn format_number(value: f32) -> String {
    let mut out = String::new();
    push_number(&mut out, value);
    out
}

/// Appends [`format_number`]'s rendering of `value` to `out`.
pub(crate) fn push_number(out: &mut String, value: f32) {
    // Whole values inside the exact i64 range print without a fractional
    // part; anything larger falls through to the plain Display form.
    if value.is_finite() && value == value.trunc() && value.abs() < 9.2e18 {
        let _ = write!(out, "{}", value as i64);
    } else {
        let _ = write!(out, "{value}");
    }
}
