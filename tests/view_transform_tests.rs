use approx::assert_relative_eq;
use timeline_rs::core::{ViewState, ViewTransform, Viewport, fit_zoom};

fn transform(center_ms: f64, zoom: f64, width: u32) -> ViewTransform {
    ViewTransform::new(ViewState { center_ms, zoom }, Viewport::new(width)).expect("valid transform")
}

#[test]
fn date_to_pixel_centers_the_view_center() {
    let transform = transform(1_000_000.0, 0.5, 1000);
    assert_relative_eq!(transform.date_to_pixel(1_000_000.0), 500.0);
}

#[test]
fn pixel_round_trip_is_exact_for_screen_coordinates() {
    let transform = transform(1_700_000_000_000.0, 2.5e-6, 1280);
    for pixel in [0.0, 1.0, 137.5, 640.0, 999.25, 1280.0] {
        let round = transform.date_to_pixel(transform.pixel_to_date(pixel));
        assert!(
            (round - pixel).abs() <= 1e-6,
            "pixel {pixel} round-tripped to {round}"
        );
    }
}

#[test]
fn date_round_trip_is_exact_for_instants() {
    let transform = transform(-3_000_000.0, 0.001, 800);
    for instant in [-3_400_000.0, -3_000_000.0, -2_600_123.5] {
        let round = transform.pixel_to_date(transform.date_to_pixel(instant));
        assert_relative_eq!(round, instant, max_relative = 1e-12);
    }
}

#[test]
fn visible_range_covers_exactly_the_viewport() {
    let transform = transform(0.0, 1.0, 1000);
    let (start_ms, end_ms) = transform.visible_range();
    assert_relative_eq!(start_ms, -500.0);
    assert_relative_eq!(end_ms, 500.0);
    assert_relative_eq!(transform.view_duration_ms(), 1000.0);
}

#[test]
fn zero_width_viewport_still_maps_the_center() {
    let transform = transform(42_000.0, 0.01, 0);
    let (start_ms, end_ms) = transform.visible_range();
    assert_relative_eq!(start_ms, end_ms);
    assert_relative_eq!(transform.pixel_to_date(0.0), 42_000.0);
}

#[test]
fn transform_rejects_non_positive_or_non_finite_zoom() {
    for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = ViewTransform::new(
            ViewState {
                center_ms: 0.0,
                zoom,
            },
            Viewport::new(100),
        );
        assert!(result.is_err(), "zoom {zoom} must be rejected");
    }
}

#[test]
fn transform_rejects_non_finite_center() {
    let result = ViewTransform::new(
        ViewState {
            center_ms: f64::NAN,
            zoom: 1.0,
        },
        Viewport::new(100),
    );
    assert!(result.is_err());
}

#[test]
fn fit_zoom_fills_the_padded_viewport() {
    let zoom = fit_zoom(950_000.0, Viewport::new(1000), 0.95).expect("fit");
    assert_relative_eq!(zoom, 0.001, max_relative = 1e-12);
}

#[test]
fn fit_zoom_refuses_degenerate_inputs() {
    assert!(fit_zoom(1_000.0, Viewport::new(0), 0.95).is_none());
    assert!(fit_zoom(0.0, Viewport::new(1000), 0.95).is_none());
    assert!(fit_zoom(-5.0, Viewport::new(1000), 0.95).is_none());
    assert!(fit_zoom(f64::NAN, Viewport::new(1000), 0.95).is_none());
}
