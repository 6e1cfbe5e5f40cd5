use proptest::prelude::*;
use timeline_rs::api::{TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{DataSpan, ViewState, ViewTransform, Viewport};
use timeline_rs::interaction::GestureEvent;

proptest! {
    #[test]
    fn pixel_round_trip_stays_within_float_tolerance(
        center_ms in -1.0e15f64..1.0e15,
        zoom_exp in -8.0f64..1.0,
        width in 1u32..4000,
        pixel_frac in 0.0f64..1.0
    ) {
        let zoom = 10f64.powf(zoom_exp);
        let transform = ViewTransform::new(
            ViewState { center_ms, zoom },
            Viewport::new(width),
        ).expect("valid transform");

        let pixel_x = pixel_frac * f64::from(width);
        let round = transform.date_to_pixel(transform.pixel_to_date(pixel_x));

        // Reconstructing the instant loses up to one ulp of the center,
        // which the zoom factor scales back into pixel space.
        let tolerance = 1e-6 + center_ms.abs() * f64::EPSILON * zoom * 4.0;
        prop_assert!(
            (round - pixel_x).abs() <= tolerance,
            "round-trip of {} gave {} (tolerance {})",
            pixel_x,
            round,
            tolerance
        );
    }

    #[test]
    fn zoom_steps_never_move_the_focal_instant(
        span_ms in 10_000i64..10_000_000_000,
        width in 100u32..3000,
        pointer_frac in 0.0f64..1.0,
        steps in prop::collection::vec(prop_oneof![Just(-1.0f64), Just(1.0f64)], 1..40)
    ) {
        let mut engine = TimelineEngine::new(TimelineEngineConfig::default())
            .expect("engine init");
        engine.set_data_span(DataSpan::new(0, span_ms));
        engine.resize(width);
        prop_assume!(engine.is_initialized());

        let pointer_x = pointer_frac * f64::from(width);
        for delta in steps {
            let anchor_ms = engine.map_pixel_to_instant(pointer_x).expect("anchor");
            engine
                .apply_gesture(GestureEvent::ZoomAt { pixel_x: pointer_x, delta })
                .expect("zoom step");
            let anchor_px = engine.map_instant_to_pixel(anchor_ms).expect("anchor px");
            prop_assert!(
                (anchor_px - pointer_x).abs() <= 1e-3,
                "focal instant drifted from {} to {}",
                pointer_x,
                anchor_px
            );
        }
    }

    #[test]
    fn zoom_always_stays_inside_the_clamp_bounds(
        span_ms in 10_000i64..100_000_000_000,
        width in 100u32..3000,
        gestures in prop::collection::vec(
            prop_oneof![
                (0.0f64..1.0).prop_map(|frac| (0u8, frac, -1.0f64)),
                (0.0f64..1.0).prop_map(|frac| (0u8, frac, 1.0f64)),
                (0.0f64..1.0).prop_map(|frac| (1u8, frac, 0.0f64)),
                (0.0f64..1.0).prop_map(|frac| (2u8, frac, 0.0f64)),
                Just((3u8, 0.0, 0.0)),
            ],
            0..60
        )
    ) {
        let mut engine = TimelineEngine::new(TimelineEngineConfig::default())
            .expect("engine init");
        engine.set_data_span(DataSpan::new(0, span_ms));
        engine.resize(width);

        let max_zoom = engine.config().max_zoom;
        for (kind, frac, delta) in gestures {
            let pixel_x = frac * f64::from(width);
            let event = match kind {
                0 => GestureEvent::ZoomAt { pixel_x, delta },
                1 => GestureEvent::PanStart { pixel_x },
                2 => GestureEvent::PanMove { pixel_x },
                _ => GestureEvent::PanEnd,
            };
            engine.apply_gesture(event).expect("gesture");

            let zoom = engine.view_state().zoom;
            prop_assert!(zoom >= engine.min_zoom().min(max_zoom));
            prop_assert!(zoom <= max_zoom);
            prop_assert!(engine.view_state().center_ms.is_finite());
        }
    }
}
