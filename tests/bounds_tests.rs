use chart_motion::core::{AxisLimit, Bounds, DimensionalBounds, is_unmeasured_limit, validate_limits};
use proptest::prelude::*;

#[test]
fn appending_values_widens_the_range() {
    let mut bounds = Bounds::new();
    assert!(bounds.is_empty());

    bounds.append_value(5.0);
    assert!(!bounds.is_empty());
    assert_eq!(bounds.min(), 5.0);
    assert_eq!(bounds.max(), 5.0);
    assert_eq!(bounds.delta(), 0.0);

    bounds.append_value(2.0);
    bounds.append_value(9.0);
    bounds.append_value(4.0);
    assert_eq!(bounds.min(), 2.0);
    assert_eq!(bounds.max(), 9.0);
    assert_eq!(bounds.delta(), 7.0);
}

#[test]
fn empty_bounds_delta_is_infinite() {
    let bounds = Bounds::new();
    assert!(bounds.delta().is_infinite());
    assert_eq!(bounds.requested_geometry_size(), 0.0);
}

#[test]
fn merging_bounds_takes_union_and_restrictive_extras() {
    let mut left = Bounds::from_range(0.0, 4.0);
    left.set_min_delta(2.0);
    left.set_padding(3.0, 1.0);
    left.request_geometry_size(12.0);

    let mut right = Bounds::from_range(-1.0, 3.0);
    right.set_min_delta(0.5);
    right.set_padding(1.0, 2.0);
    right.request_geometry_size(20.0);

    left.append_bounds(&right);

    assert_eq!(left.min(), -1.0);
    assert_eq!(left.max(), 4.0);
    assert_eq!(left.min_delta(), 0.5);
    assert_eq!(left.padding_min(), 1.0);
    assert_eq!(left.padding_max(), 1.0);
    assert_eq!(left.requested_geometry_size(), 20.0);
}

#[test]
fn merging_into_empty_bounds_copies_the_range() {
    let mut target = Bounds::new();
    target.append_bounds(&Bounds::from_range(3.0, 8.0));
    assert!(!target.is_empty());
    assert!(target.has_same_limits(&Bounds::from_range(8.0, 3.0)));
}

#[test]
fn merging_empty_bounds_keeps_existing_state() {
    let mut target = Bounds::from_range(1.0, 2.0);
    let before = target;
    target.append_bounds(&Bounds::new());
    assert_eq!(target, before);
}

#[test]
fn seeded_dimensional_bounds_use_placeholder_ranges() {
    let bounds = DimensionalBounds::new(true);
    for seeded in [
        bounds.primary(),
        bounds.secondary(),
        bounds.visible_primary(),
        bounds.visible_secondary(),
    ] {
        assert_eq!(seeded.min(), 0.0);
        assert_eq!(seeded.max(), 10.0);
    }
    assert_eq!(bounds.tertiary().min(), 1.0);
    assert_eq!(bounds.tertiary().max(), 1.0);
    assert_eq!(bounds.visible_tertiary().delta(), 0.0);
}

#[test]
fn unseeded_dimensional_bounds_start_empty() {
    let bounds = DimensionalBounds::new(false);
    assert!(bounds.primary().is_empty());
    assert!(bounds.secondary().is_empty());
    assert!(bounds.tertiary().is_empty());
    assert!(bounds.visible_primary().is_empty());
}

#[test]
fn visible_points_widen_data_and_visible_bounds() {
    let mut bounds = DimensionalBounds::new(false);
    bounds.append_point(-5.0, 100.0);
    bounds.append_visible_point(1.0, 10.0);
    bounds.append_visible_point(3.0, 30.0);

    assert_eq!(bounds.secondary().min(), -5.0);
    assert_eq!(bounds.secondary().max(), 3.0);
    assert_eq!(bounds.primary().max(), 100.0);
    assert_eq!(bounds.visible_secondary().min(), 1.0);
    assert_eq!(bounds.visible_primary().max(), 30.0);
}

#[test]
fn dimensional_bounds_merge_per_dimension() {
    let mut chart = DimensionalBounds::new(false);
    let mut series = DimensionalBounds::new(false);
    series.append_visible_point(2.0, 7.0);
    series.tertiary_mut().append_value(4.0);

    chart.append_bounds(&series);
    assert_eq!(chart.secondary().min(), 2.0);
    assert_eq!(chart.primary().max(), 7.0);
    assert_eq!(chart.tertiary().max(), 4.0);
    assert_eq!(chart.visible_primary().min(), 7.0);
}

#[test]
fn validate_limits_swaps_inverted_pair() {
    assert_eq!(validate_limits(10.0, 2.0), (2.0, 10.0));
    assert_eq!(validate_limits(2.0, 10.0), (2.0, 10.0));
}

#[test]
fn validate_limits_resets_unmeasured_sentinels() {
    assert_eq!(validate_limits(f64::MAX, 5.0), (0.0, 10.0));
    assert_eq!(validate_limits(-3.0, f64::MIN), (0.0, 10.0));
    assert_eq!(validate_limits(f64::NAN, 1.0), (0.0, 10.0));
    assert_eq!(validate_limits(1.0, f64::INFINITY), (0.0, 10.0));
    assert!(is_unmeasured_limit(f64::MAX));
    assert!(!is_unmeasured_limit(1e300));
}

#[test]
fn axis_limit_validation_keeps_data_extremes() {
    let limit = AxisLimit::new(9.0, 1.0, 0.5, -2.0, 12.0).validated();
    assert_eq!((limit.min, limit.max), (1.0, 9.0));
    assert_eq!(limit.min_delta, 0.5);
    assert_eq!((limit.data_min, limit.data_max), (-2.0, 12.0));
}

proptest! {
    #[test]
    fn bounds_never_shrink(values in proptest::collection::vec(-1e9f64..1e9, 1..64)) {
        let mut bounds = Bounds::new();
        let mut previous_min = f64::MAX;
        let mut previous_max = f64::MIN;

        for value in &values {
            bounds.append_value(*value);
            prop_assert!(bounds.min() <= previous_min);
            prop_assert!(bounds.max() >= previous_max);
            prop_assert!(bounds.min() <= *value && *value <= bounds.max());
            previous_min = bounds.min();
            previous_max = bounds.max();
        }
    }

    #[test]
    fn merged_bounds_contain_both_inputs(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        c in -1e6f64..1e6,
        d in -1e6f64..1e6
    ) {
        let left = Bounds::from_range(a, b);
        let right = Bounds::from_range(c, d);
        let mut merged = left;
        merged.append_bounds(&right);

        prop_assert!(merged.min() <= left.min() && merged.min() <= right.min());
        prop_assert!(merged.max() >= left.max() && merged.max() >= right.max());
    }
}
