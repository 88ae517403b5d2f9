use super::*;

#[test]
fn empty_document_is_default() {
    let cfg = VisualizerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, VisualizerConfig::default());
    assert_eq!(cfg.size, SizeOption::Large);
    assert_eq!(cfg.speed.get(), 5);
}

#[test]
fn overrides_are_applied() {
    let cfg = VisualizerConfig::from_json_str(
        r#"{
            "algorithm": "heap",
            "size": "tiny",
            "speed": 9,
            "clock": { "mode": "fixed", "hz": 120.0 },
            "seed": 7
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.algorithm, Algorithm::Heap);
    assert_eq!(cfg.size, SizeOption::Tiny);
    assert_eq!(cfg.speed.get(), 9);
    assert_eq!(cfg.clock, ClockMode::Fixed { hz: 120.0 });
    assert_eq!(cfg.seed, Some(7));
}

#[test]
fn out_of_range_speed_is_a_serde_error() {
    let err = VisualizerConfig::from_json_str(r#"{ "speed": 0 }"#).unwrap_err();
    assert!(matches!(err, SortstepError::Serde(_)), "{err}");
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(VisualizerConfig::from_json_str(r#"{ "colour": "blue" }"#).is_err());
}

#[test]
fn invalid_combinations_are_config_errors() {
    let err = VisualizerConfig::from_json_str(r#"{ "max_ticks_per_advance": 0 }"#).unwrap_err();
    assert!(matches!(err, SortstepError::Config(_)), "{err}");

    let err =
        VisualizerConfig::from_json_str(r#"{ "clock": { "mode": "fixed", "hz": -1.0 } }"#)
            .unwrap_err();
    assert!(matches!(err, SortstepError::Config(_)), "{err}");

    let err =
        VisualizerConfig::from_json_str(r#"{ "speed_curve": { "base": 0.5, "divisor": 3.0 } }"#)
            .unwrap_err();
    assert!(matches!(err, SortstepError::Config(_)), "{err}");
}

#[test]
fn round_trips_through_json() {
    let cfg = VisualizerConfig {
        algorithm: Algorithm::Merge,
        seed: Some(1),
        ..VisualizerConfig::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(VisualizerConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn missing_file_is_wrapped_io_error() {
    let path = std::env::temp_dir().join("sortstep-config-does-not-exist.json");
    let _ = std::fs::remove_file(&path);
    let err = VisualizerConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, SortstepError::Other(_)), "{err}");
    assert!(err.to_string().contains("read config"));
}

#[test]
fn file_contents_are_parsed_and_validated() {
    let dir = std::env::temp_dir().join("sortstep-config-tests");
    std::fs::create_dir_all(&dir).unwrap();

    let ok = dir.join("quick.json");
    std::fs::write(&ok, r#"{ "algorithm": "quick", "seed": 3 }"#).unwrap();
    let cfg = VisualizerConfig::from_json_file(&ok).unwrap();
    assert_eq!(cfg.algorithm, Algorithm::Quick);
    assert_eq!(cfg.seed, Some(3));

    let bad = dir.join("bad_ticks.json");
    std::fs::write(&bad, r#"{ "max_ticks_per_advance": 0 }"#).unwrap();
    let err = VisualizerConfig::from_json_file(&bad).unwrap_err();
    assert!(matches!(err, SortstepError::Config(_)), "{err}");
}
