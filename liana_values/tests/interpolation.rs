// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `liana_values` crate.
//!
//! These drive the `AnimatableValue` dispatcher the way an animation
//! timeline would: a base value merged toward a target at a sampled
//! fraction, with accumulated repeat iterations folded in through the
//! same call.

use liana_units::{LengthUnit, UserUnitTarget};
use liana_values::{
    AnimatableValue, Color, Length, Number, NumberList, Paint, Percentage, Transform,
    TransformList,
};

const TARGET: UserUnitTarget = UserUnitTarget;

#[test]
fn frame_loop_reuses_one_buffer_without_leakage() {
    let base = AnimatableValue::NumberList(NumberList::new([0.0, 100.0]));
    let to = AnimatableValue::NumberList(NumberList::new([10.0, 0.0]));
    let mut out = base.clone();

    base.interpolate_into(&TARGET, &mut out, Some(&to), 0.25, None, 1);
    let AnimatableValue::NumberList(list) = &out else {
        panic!("buffer must stay a number list");
    };
    assert_eq!(list.numbers.as_slice(), [2.5, 75.0]);

    // A second sample through the same buffer reflects only the second
    // call's inputs.
    base.interpolate_into(&TARGET, &mut out, Some(&to), 1.0, None, 1);
    let AnimatableValue::NumberList(list) = &out else {
        panic!("buffer must stay a number list");
    };
    assert_eq!(list.numbers.as_slice(), [10.0, 0.0]);
}

#[test]
fn cumulative_repeat_folds_the_last_value() {
    // A cumulative animation folds the interval's end value once per
    // completed repeat iteration.
    let base = AnimatableValue::Number(Number::new(0.0));
    let to = AnimatableValue::Number(Number::new(10.0));
    let accumulation = to.clone();

    let first = base.interpolate(&TARGET, Some(&to), 0.5, None, 1);
    assert_eq!(first, AnimatableValue::Number(Number::new(5.0)));

    let third = base.interpolate(&TARGET, Some(&to), 0.5, Some(&accumulation), 2);
    assert_eq!(third, AnimatableValue::Number(Number::new(25.0)));
}

#[test]
fn by_animation_builds_its_base_from_the_zero_value() {
    // A `by` animation runs from the kind's additive identity to the
    // delta, exactly how a timeline without a `from` value sets up.
    let by = AnimatableValue::Length(Length::new(LengthUnit::Px, 30.0));
    let zero = by.zero_value().expect("lengths are additive");
    let halfway = zero.interpolate(&TARGET, Some(&by), 0.5, None, 1);
    let AnimatableValue::Length(length) = halfway else {
        panic!("zero value must keep the kind");
    };
    assert_eq!(length.value, 15.0);
}

#[test]
fn accumulation_is_disabled_where_no_zero_exists() {
    let base = AnimatableValue::String(liana_values::StringValue::new("middle"));
    assert!(base.zero_value().is_none());
}

#[test]
fn transform_chain_grows_by_one_entry_per_iteration() {
    let base = AnimatableValue::TransformList(TransformList::single(Transform::Rotate {
        angle: 0.0,
        cx: 0.0,
        cy: 0.0,
    }));
    let to = AnimatableValue::TransformList(TransformList::single(Transform::Rotate {
        angle: 90.0,
        cx: 0.0,
        cy: 0.0,
    }));

    // First iteration: no accumulation yet, one interpolated entry.
    let first = base.interpolate(&TARGET, Some(&to), 1.0, None, 1);
    let AnimatableValue::TransformList(chain) = &first else {
        panic!("must stay a transform list");
    };
    assert_eq!(chain.len(), 1);

    // Second iteration: the prior chain accumulates in front.
    let second = base.interpolate(&TARGET, Some(&to), 0.5, Some(&first), 1);
    let AnimatableValue::TransformList(chain) = &second else {
        panic!("must stay a transform list");
    };
    assert_eq!(chain.len(), 2);
    assert_eq!(
        chain.transforms.as_slice(),
        [
            Transform::Rotate {
                angle: 90.0,
                cx: 0.0,
                cy: 0.0,
            },
            Transform::Rotate {
                angle: 45.0,
                cx: 0.0,
                cy: 0.0,
            },
        ]
    );
}

#[test]
fn discrete_kinds_hold_then_snap() {
    use liana_values::{Align, MeetOrSlice, PreserveAspectRatio};

    let base = AnimatableValue::PreserveAspectRatio(PreserveAspectRatio::new(
        Align::XMinYMin,
        MeetOrSlice::Meet,
    ));
    let to = AnimatableValue::PreserveAspectRatio(PreserveAspectRatio::new(
        Align::None,
        MeetOrSlice::Slice,
    ));

    assert_eq!(base.interpolate(&TARGET, Some(&to), 0.4999, None, 1), base);
    assert_eq!(base.interpolate(&TARGET, Some(&to), 0.5, None, 1), to);
}

#[test]
fn serialization_samples() {
    assert_eq!(
        AnimatableValue::Color(Color::new(1.0, 0.0, 0.0))
            .css_text()
            .as_deref(),
        Some("rgb(255,0,0)")
    );
    assert_eq!(
        AnimatableValue::Percentage(Percentage::new(50.0))
            .css_text()
            .as_deref(),
        Some("50%")
    );
    assert_eq!(
        AnimatableValue::Paint(Paint::uri_color("#g1", 0.0, 0.0, 1.0))
            .css_text()
            .as_deref(),
        Some("url(#g1) rgb(0,0,255)")
    );
}

#[test]
fn cross_unit_lengths_end_in_user_units() {
    let base = AnimatableValue::Length(Length::new(LengthUnit::In, 1.0));
    let to = AnimatableValue::Length(Length::new(LengthUnit::Px, 0.0));
    let merged = base.interpolate(&TARGET, Some(&to), 0.5, None, 1);
    assert_eq!(
        merged,
        AnimatableValue::Length(Length::new(LengthUnit::Number, 48.0))
    );
    assert_eq!(merged.css_text().as_deref(), Some("48"));
}

#[test]
fn paced_distance_drives_even_spacing() {
    // A paced timeline divides key intervals by distance; equal spatial
    // steps must report equal distances.
    let a = AnimatableValue::Color(Color::new(0.0, 0.0, 0.0));
    let b = AnimatableValue::Color(Color::new(0.5, 0.0, 0.0));
    let c = AnimatableValue::Color(Color::new(1.0, 0.0, 0.0));
    assert!(a.can_pace());
    assert_eq!(a.distance_to(&TARGET, &b), b.distance_to(&TARGET, &c));
}
