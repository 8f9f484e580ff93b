use approx::assert_abs_diff_eq;
use chart_motion::ChartError;
use chart_motion::core::{
    AxisOrientation, AxisScaleState, Bounds, CartesianAxis, DrawMargin, Point, Scaler, Size,
};
use proptest::prelude::*;

fn margin() -> DrawMargin {
    DrawMargin::new(Point::new(10.0, 20.0), Size::new(200.0, 100.0))
}

fn measured_axis(orientation: AxisOrientation, min: f64, max: f64) -> CartesianAxis {
    let bounds = Bounds::from_range(min, max);
    CartesianAxis::new(orientation).with_state(AxisScaleState::measured(bounds, bounds))
}

#[test]
fn horizontal_axis_maps_min_to_left_edge() {
    let axis = measured_axis(AxisOrientation::X, 0.0, 100.0);
    let scaler = Scaler::new(margin(), &axis, false).expect("x scaler");

    assert_eq!(scaler.to_pixels(0.0), 10.0);
    assert_eq!(scaler.to_pixels(100.0), 210.0);
    assert_eq!(scaler.to_pixels(25.0), 60.0);
    assert_eq!(scaler.min_val(), 0.0);
    assert_eq!(scaler.max_val(), 100.0);
    assert_eq!(scaler.pixel_range(), (10.0, 210.0));
}

#[test]
fn vertical_axis_maps_max_to_top_edge() {
    let axis = measured_axis(AxisOrientation::Y, 0.0, 100.0);
    let scaler = Scaler::new(margin(), &axis, false).expect("y scaler");

    assert_eq!(scaler.to_pixels(100.0), 20.0);
    assert_eq!(scaler.to_pixels(0.0), 120.0);
    assert_eq!(scaler.min_val(), 100.0);
    assert_eq!(scaler.max_val(), 0.0);
}

#[test]
fn inverted_axes_flip_direction() {
    let x_axis = measured_axis(AxisOrientation::X, 0.0, 100.0).with_inverted(true);
    let x = Scaler::new(margin(), &x_axis, false).expect("x scaler");
    assert_eq!(x.to_pixels(100.0), 10.0);
    assert_eq!(x.to_pixels(0.0), 210.0);

    let y_axis = measured_axis(AxisOrientation::Y, 0.0, 100.0).with_inverted(true);
    let y = Scaler::new(margin(), &y_axis, false).expect("y scaler");
    assert_eq!(y.to_pixels(0.0), 20.0);
    assert_eq!(y.to_pixels(100.0), 120.0);
}

#[test]
fn round_trip_recovers_values() {
    let axis = measured_axis(AxisOrientation::Y, -40.0, 260.0);
    let scaler = Scaler::new(margin(), &axis, false).expect("y scaler");

    for value in [-40.0, -3.5, 0.0, 17.25, 260.0] {
        let px = scaler.to_pixels(value);
        assert_abs_diff_eq!(scaler.to_chart_values(px), value, epsilon = 1e-9);
    }
}

#[test]
fn measure_in_pixels_grows_right_and_up() {
    let x_axis = measured_axis(AxisOrientation::X, 0.0, 100.0);
    let x = Scaler::new(margin(), &x_axis, false).expect("x scaler");
    assert_abs_diff_eq!(x.measure_in_pixels(50.0), 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x.measure_in_pixels(-10.0), -20.0, epsilon = 1e-9);

    let y_axis = measured_axis(AxisOrientation::Y, 0.0, 100.0);
    let y = Scaler::new(margin(), &y_axis, false).expect("y scaler");
    assert_abs_diff_eq!(y.measure_in_pixels(50.0), 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y.measure_in_pixels(-20.0), -20.0, epsilon = 1e-9);
}

#[test]
fn unmeasured_bounds_fall_back_to_flat_scale() {
    let axis = CartesianAxis::new(AxisOrientation::X)
        .with_state(AxisScaleState::measured(Bounds::new(), Bounds::new()));
    let scaler = Scaler::new(margin(), &axis, false).expect("flat scaler");

    assert!(scaler.is_flat());
    assert_eq!(scaler.min_val(), 0.0);
    assert_eq!(scaler.max_val(), 0.0);
    assert_eq!(scaler.to_pixels(1e6), 10.0);
    assert_eq!(scaler.to_chart_values(150.0), 0.0);
}

#[test]
fn zero_width_range_does_not_produce_nan() {
    let axis = measured_axis(AxisOrientation::Y, 5.0, 5.0);
    let scaler = Scaler::new(margin(), &axis, false).expect("flat scaler");

    assert!(scaler.is_flat());
    assert!(scaler.to_pixels(5.0).is_finite());
    assert!(scaler.to_chart_values(70.0).is_finite());
    assert_eq!(scaler.measure_in_pixels(3.0), 0.0);
}

#[test]
fn visible_bounds_take_priority_over_data_bounds() {
    let state = AxisScaleState::measured(
        Bounds::from_range(0.0, 100.0),
        Bounds::from_range(20.0, 40.0),
    );
    let axis = CartesianAxis::new(AxisOrientation::X).with_state(state);
    let scaler = Scaler::new(margin(), &axis, false).expect("x scaler");

    assert_eq!(scaler.to_pixels(20.0), 10.0);
    assert_eq!(scaler.to_pixels(40.0), 210.0);
}

#[test]
fn empty_visible_bounds_use_data_bounds() {
    let state = AxisScaleState::measured(Bounds::from_range(0.0, 50.0), Bounds::new());
    let axis = CartesianAxis::new(AxisOrientation::X).with_state(state);
    let scaler = Scaler::new(margin(), &axis, false).expect("x scaler");

    assert_eq!(scaler.to_pixels(50.0), 210.0);
}

#[test]
fn explicit_limits_override_measured_bounds() {
    let state = AxisScaleState::measured(
        Bounds::from_range(0.0, 100.0),
        Bounds::from_range(20.0, 40.0),
    )
    .with_limits(Some(-100.0), None);
    let axis = CartesianAxis::new(AxisOrientation::X).with_state(state);
    let scaler = Scaler::new(margin(), &axis, false).expect("x scaler");

    assert_eq!(scaler.min_val(), -100.0);
    assert_eq!(scaler.max_val(), 100.0);
    assert_eq!(scaler.to_pixels(0.0), 110.0);
}

#[test]
fn previous_scale_is_used_when_requested() {
    let mut axis = measured_axis(AxisOrientation::X, 0.0, 100.0);
    let updated = Bounds::from_range(0.0, 50.0);
    axis.commit_measure(AxisScaleState::measured(updated, updated));

    let current = Scaler::new(margin(), &axis, false).expect("current scaler");
    let previous = Scaler::new(margin(), &axis, true).expect("previous scaler");

    assert_eq!(current.to_pixels(50.0), 210.0);
    assert_eq!(previous.to_pixels(50.0), 110.0);
}

#[test]
fn previous_scale_falls_back_to_current_after_first_measure() {
    let axis = measured_axis(AxisOrientation::X, 0.0, 100.0);
    let previous = Scaler::new(margin(), &axis, true).expect("scaler");
    assert_eq!(previous.to_pixels(100.0), 210.0);
}

#[test]
fn unknown_orientation_is_rejected() {
    let bounds = Bounds::from_range(0.0, 1.0);
    let axis = CartesianAxis::new(AxisOrientation::Unknown)
        .with_state(AxisScaleState::measured(bounds, bounds));
    let result = Scaler::new(margin(), &axis, false);
    assert!(matches!(result, Err(ChartError::UnknownAxisOrientation)));
}

#[test]
fn unmeasured_axis_reports_missing_bounds() {
    let axis = CartesianAxis::new(AxisOrientation::Y);
    let result = Scaler::new(margin(), &axis, false);
    assert!(matches!(result, Err(ChartError::MissingBounds { axis: "y" })));
}

#[test]
fn sentinel_limit_resets_to_placeholder_range() {
    let bounds = Bounds::from_range(0.0, 100.0);
    let state = AxisScaleState::measured(bounds, bounds).with_limits(Some(f64::MAX), Some(5.0));
    let axis = CartesianAxis::new(AxisOrientation::X).with_state(state);
    let scaler = Scaler::new(margin(), &axis, false).expect("x scaler");

    assert!(!scaler.is_flat());
    assert_eq!(scaler.min_val(), 0.0);
    assert_eq!(scaler.max_val(), 10.0);
    assert_eq!(scaler.to_pixels(5.0), 110.0);
}

#[test]
fn inverted_limits_are_swapped_not_flipped() {
    let bounds = Bounds::from_range(0.0, 100.0);
    let state = AxisScaleState::measured(bounds, bounds).with_limits(Some(10.0), Some(2.0));
    let axis = CartesianAxis::new(AxisOrientation::X).with_state(state);
    let scaler = Scaler::new(margin(), &axis, false).expect("x scaler");

    assert_eq!(scaler.to_pixels(2.0), 10.0);
    assert_eq!(scaler.to_pixels(10.0), 210.0);
}

#[test]
fn partial_limit_on_unmeasured_axis_is_flat() {
    let state =
        AxisScaleState::measured(Bounds::new(), Bounds::new()).with_limits(Some(0.0), None);
    let axis = CartesianAxis::new(AxisOrientation::X).with_state(state);
    let scaler = Scaler::new(margin(), &axis, false).expect("flat scaler");

    assert!(scaler.is_flat());
    assert_eq!(scaler.max_val(), 0.0);
    assert_eq!(scaler.to_chart_values(50.0), 0.0);
    assert_eq!(scaler.to_pixels(1e9), 10.0);
}

proptest! {
    #[test]
    fn scaler_round_trip_property(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        factor in 0.0f64..1.0,
        width in 1.0f64..4096.0,
        vertical in any::<bool>(),
        inverted in any::<bool>()
    ) {
        let orientation = if vertical { AxisOrientation::Y } else { AxisOrientation::X };
        let bounds = Bounds::from_range(min, min + span);
        let axis = CartesianAxis::new(orientation)
            .with_inverted(inverted)
            .with_state(AxisScaleState::measured(bounds, bounds));
        let draw_margin = DrawMargin::new(Point::new(0.0, 0.0), Size::new(width, width));
        let scaler = Scaler::new(draw_margin, &axis, false).expect("scaler");

        let value = min + factor * span;
        let recovered = scaler.to_chart_values(scaler.to_pixels(value));
        prop_assert!((recovered - value).abs() <= 1e-6 * span.max(1.0));
    }
}

#[test]
fn negative_draw_margin_is_rejected() {
    let axis = measured_axis(AxisOrientation::X, 0.0, 1.0);
    let draw_margin = DrawMargin::new(Point::new(0.0, 0.0), Size::new(-1.0, 10.0));
    let result = Scaler::new(draw_margin, &axis, false);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}
