use glassbreak_engine::simulation::{DrawOp, Feedback, PointerInput};
use glassbreak_engine::sound::Cue;
use glassbreak_engine::{GlassType, PaneConfig, PaneCore};

#[test]
fn pane_smoke_break_fall_and_restore() {
    let config = PaneConfig::from_json(r#"{"minShards": 10, "maxShards": 12}"#).unwrap();
    let mut pane = PaneCore::with_seed(config, 640.0, 480.0, 42).unwrap();

    assert!(pane.pointer_down(PointerInput::new(0, 320.0, 240.0, 0.0)));
    assert!((10..=12).contains(&pane.shard_count()));
    pane.pointer_up(0);

    let feedback = pane.drain_feedback();
    assert_eq!(feedback[0], Feedback::Sound { cue: Cue::Break, delay_ms: 0 });

    // Fade runs ~3334 frames at 0.0003 per frame
    let mut t = 0.0;
    let mut frames = 0;
    while pane.is_broken() && frames < 5000 {
        t += 1000.0 / 60.0;
        let list = pane.frame(t);
        assert!(matches!(list.ops()[0], DrawOp::Clear { .. }));
        frames += 1;
    }

    assert!(!pane.is_broken());
    assert_eq!(pane.shard_count(), 0);
    assert!(frames > 3000, "restored after {} frames", frames);
    assert!(pane.fps() > 0);
}

#[test]
fn pane_smoke_settings_round_trip() {
    let mut pane = PaneCore::with_seed(PaneConfig::default(), 300.0, 300.0, 1).unwrap();
    assert!(pane.update_glass_type("thick"));
    assert_eq!(pane.glass_type(), GlassType::Thick);

    let json = pane.config().to_json();
    assert!(json.contains(r#""glassType":"thick""#));
    assert_eq!(PaneConfig::from_json(&json).unwrap(), *pane.config());
}
