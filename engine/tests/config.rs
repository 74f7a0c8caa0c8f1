use std::path::Path;

use dolphin_engine::{EngineError, TunerConfig, MAX_TUNED, RARE_THRESHOLD};

#[test]
fn defaults_fill_missing_fields() {
    let cfg = TunerConfig::parse(Path::new("tuner.yaml"), "tune_cost: 25\n").unwrap();
    assert_eq!(cfg.tune_cost, 25);
    assert_eq!(cfg.default_simulators, vec!["dolphindive"]);
    assert_eq!(cfg.rare_threshold, RARE_THRESHOLD);
    assert_eq!(cfg.max_tuned, MAX_TUNED);
    assert!(TunerConfig::default().validate().is_ok());
}

#[test]
fn json_picked_by_extension() {
    let cfg = TunerConfig::parse(Path::new("tuner.JSON"), r#"{"max_tuned": 2}"#).unwrap();
    assert_eq!(cfg.max_tuned, 2);
}

#[test]
fn max_tuned_outside_cap_is_rejected() {
    for text in ["max_tuned: 8\n", "max_tuned: 0\n"] {
        let err = TunerConfig::parse(Path::new("tuner.yaml"), text).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)), "{text}");
    }
}

#[test]
fn threshold_outside_unit_range_is_rejected() {
    for text in [
        "rare_threshold: 1.5\n",
        "rare_threshold: -0.1\n",
        "rare_threshold: .nan\n",
        "rare_threshold: .inf\n",
    ] {
        let err = TunerConfig::parse(Path::new("tuner.yaml"), text).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)), "{text}");
    }
}
