use super::*;
use crate::playback::ClockMode;

fn seeded(algorithm: Algorithm, size: SizeOption, seed: u64) -> Visualizer {
    Visualizer::new(VisualizerConfig {
        algorithm,
        size,
        seed: Some(seed),
        ..VisualizerConfig::default()
    })
    .unwrap()
}

fn finish(v: &mut Visualizer) -> u32 {
    let mut frames = 0;
    while !v.is_sorted() {
        v.advance(1.0 / 60.0);
        frames += 1;
        assert!(frames < 1_000_000, "run never finished");
    }
    frames
}

#[test]
fn same_seed_same_permutation() {
    let a = seeded(Algorithm::Quick, SizeOption::Medium, 9);
    let b = seeded(Algorithm::Quick, SizeOption::Medium, 9);
    assert_eq!(a.values(), b.values());
    assert_eq!(a.values().len(), 64);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = VisualizerConfig {
        max_ticks_per_advance: 0,
        ..VisualizerConfig::default()
    };
    assert!(Visualizer::new(cfg).is_err());
    assert!(Visualizer::with_permutation(VisualizerConfig::default(), vec![1, 1]).is_err());
}

#[test]
fn bubble_scenario_through_the_session() {
    let cfg = VisualizerConfig {
        speed: SpeedLevel::MIN,
        seed: Some(0),
        ..VisualizerConfig::default()
    };
    let mut v = Visualizer::with_permutation(cfg, vec![3, 1, 4, 2]).unwrap();
    v.play();
    assert_eq!(v.counters(), Counters::default());
    assert_eq!(v.player().sequence_len(), 7);

    assert_eq!(finish(&mut v), 7);
    assert_eq!(v.values(), &[1, 2, 3, 4]);
    assert_eq!(v.counters().comparisons(), 6);
    assert_eq!(v.counters().swaps(), 3);
    assert_eq!(
        v.drain_events(),
        vec![PlaybackEvent::Started, PlaybackEvent::Finished]
    );
    assert!(v.drain_events().is_empty());
}

#[test]
fn play_on_finished_run_reports_nothing() {
    let mut v = seeded(Algorithm::Bubble, SizeOption::Tiny, 4);
    v.play();
    finish(&mut v);
    assert_eq!(
        v.drain_events(),
        vec![PlaybackEvent::Started, PlaybackEvent::Finished]
    );
    let done = v.snapshot();

    v.play();
    v.play();
    assert!(v.drain_events().is_empty());
    assert_eq!(v.snapshot(), done);
    assert_eq!(v.status(), Status::Sorted);
}

#[test]
fn single_element_run_is_trivially_sorted() {
    let mut v = Visualizer::with_permutation(VisualizerConfig::default(), vec![1]).unwrap();
    v.play();
    let report = v.advance(1.0 / 60.0);
    assert_eq!(report, AdvanceReport { ticks: 1, steps: 1 });
    assert!(v.is_sorted());
    assert_eq!(v.counters(), Counters::default());
    assert_eq!(v.annotation(), &[Annotation::Sorted]);
    assert_eq!(v.status(), Status::Sorted);
}

#[test]
fn advance_is_inert_unless_running() {
    let mut v = seeded(Algorithm::Bubble, SizeOption::Tiny, 1);
    let before = v.snapshot();
    assert_eq!(v.advance(1.0), AdvanceReport::default());
    assert_eq!(v.snapshot(), before);
}

#[test]
fn toggle_cycles_and_restarts_after_finish() {
    let mut v = seeded(Algorithm::Insertion, SizeOption::Tiny, 2);
    v.toggle_play_pause();
    assert_eq!(v.status(), Status::Running);
    v.advance(1.0 / 60.0);
    v.toggle_play_pause();
    assert_eq!(v.status(), Status::Paused);
    assert_eq!(v.player().state(), PlaybackState::Paused);
    v.toggle_play_pause();
    assert!(v.is_running());

    finish(&mut v);
    assert!(v.values().is_sorted());
    v.drain_events();

    v.toggle_play_pause();
    assert_eq!(v.player().state(), PlaybackState::Idle);
    assert_eq!(v.drain_events(), vec![PlaybackEvent::Reset]);
    assert_eq!(v.counters(), Counters::default());
    assert!(v.annotation().iter().all(|&a| a == Annotation::Default));
}

#[test]
fn resize_while_running_pauses_and_resets() {
    let mut v = seeded(Algorithm::Merge, SizeOption::Small, 3);
    v.play();
    v.advance(1.0 / 60.0);
    assert!(v.counters().comparisons() > 0);

    v.set_size(SizeOption::Huge);
    assert_eq!(v.player().state(), PlaybackState::Idle);
    assert_eq!(v.player().sequence_len(), 0);
    assert_eq!(v.values().len(), 200);
    assert_eq!(v.size(), SizeOption::Huge);
    assert_eq!(v.counters(), Counters::default());

    v.play();
    assert_eq!(v.player().sequence().map(|s| s.size()), Some(200));
    finish(&mut v);
    assert!(v.values().is_sorted());
}

#[test]
fn selecting_an_algorithm_always_resets() {
    let mut v = seeded(Algorithm::Heap, SizeOption::Tiny, 4);
    v.play();
    v.advance(1.0 / 60.0);
    let before = v.values().to_vec();

    v.select_algorithm(Algorithm::Heap);
    assert_eq!(v.player().state(), PlaybackState::Idle);
    assert_ne!(v.values(), before.as_slice());

    v.select_algorithm(Algorithm::Selection);
    assert_eq!(v.algorithm(), Algorithm::Selection);
    v.play();
    assert_eq!(v.player().sequence().map(|s| s.algorithm()), Some(Algorithm::Selection));
}

#[test]
fn shuffle_mid_run_discards_progress() {
    let mut v = seeded(Algorithm::Quick, SizeOption::Medium, 5);
    v.play();
    v.advance(1.0 / 60.0);
    v.shuffle();
    assert!(!v.is_running());
    assert_eq!(v.player().cursor(), 0);
    assert_eq!(
        v.drain_events(),
        vec![PlaybackEvent::Started, PlaybackEvent::Reset]
    );
}

#[test]
fn fixed_clock_runs_ticks_by_elapsed_time() {
    let cfg = VisualizerConfig {
        speed: SpeedLevel::MIN,
        clock: ClockMode::Fixed { hz: 60.0 },
        max_ticks_per_advance: 3,
        seed: Some(6),
        ..VisualizerConfig::default()
    };
    let mut v = Visualizer::new(cfg).unwrap();
    v.play();
    assert_eq!(v.advance(2.0 / 60.0 + 1e-9), AdvanceReport { ticks: 2, steps: 2 });
    assert_eq!(v.advance(0.25), AdvanceReport { ticks: 3, steps: 3 });
    assert_eq!(v.player().cursor(), 5);
}

#[test]
fn speed_commands_saturate() {
    let mut v = seeded(Algorithm::Bubble, SizeOption::Tiny, 7);
    for _ in 0..20 {
        v.faster();
    }
    assert_eq!(v.speed(), SpeedLevel::MAX);
    for _ in 0..20 {
        v.slower();
    }
    assert_eq!(v.speed(), SpeedLevel::MIN);
    v.set_speed(SpeedLevel::new(6).unwrap());
    assert_eq!(v.player().steps_per_tick(), 6);
}

#[test]
fn snapshot_reflects_session_state() {
    let mut v = seeded(Algorithm::Selection, SizeOption::Tiny, 8);
    v.play();
    v.advance(1.0 / 60.0);
    let snap = v.snapshot();
    assert_eq!(snap.algorithm, Algorithm::Selection);
    assert_eq!(snap.size, 16);
    assert_eq!(snap.values, v.values());
    assert_eq!(snap.sequence_len, 16);
    assert_eq!(snap.cursor, 4);
    assert!(snap.running);
    assert!(!snap.finished);
    assert_eq!(snap.status, Status::Running);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["status"], "running");
    assert_eq!(json["speed"], 5);
    assert_eq!(json["algorithm"], "selection");
}

#[test]
fn status_labels() {
    assert_eq!(Status::Sorted.label(), "SORTED");
    assert_eq!(Status::Running.label(), "RUNNING");
    assert_eq!(Status::Paused.label(), "PAUSED");
}
