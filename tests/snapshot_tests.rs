use timeline_rs::api::{EngineSnapshot, TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::DataSpan;
use timeline_rs::interaction::GestureEvent;

#[test]
fn snapshot_reflects_the_current_engine_state() {
    let mut engine = TimelineEngine::new(TimelineEngineConfig::default()).expect("engine init");
    engine.set_data_span(DataSpan::new(0, 1_000_000));
    engine.resize(1000);
    engine
        .apply_gesture(GestureEvent::ZoomAt {
            pixel_x: 250.0,
            delta: -1.0,
        })
        .expect("zoom in");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.viewport_width, 1000);
    assert_eq!(snapshot.view, engine.view_state());
    assert_eq!(snapshot.data_span, engine.data_span());
    assert!(snapshot.initialized);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut engine = TimelineEngine::new(TimelineEngineConfig::default()).expect("engine init");
    engine.set_data_span(DataSpan::new(-42, 42_000));
    engine.resize(640);

    let json = engine.snapshot_json_pretty().expect("serialize");
    let decoded: EngineSnapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, engine.snapshot());
}
