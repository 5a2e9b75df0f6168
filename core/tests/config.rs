//! Calculator configuration tests.

use staffing_core::{config::CalculatorConfig, StaffingCalculator};

#[test]
fn defaults() {
    let config = CalculatorConfig::default();

    assert_eq!(config.max_agents, None);
    assert_eq!(config.max_shrinkage_pct, 1.0);
    assert_eq!(config.default_shrinkage_pct, 0.30);
    assert_eq!(config.sla_scenarios.len(), 4);
    assert!(config.validate().is_ok());
}

/// Fields missing from the JSON keep their defaults.
#[test]
fn partial_json_keeps_defaults() {
    let config = CalculatorConfig::from_json(r#"{"max_agents": 50, "max_shrinkage_pct": 0.5}"#).unwrap();

    assert_eq!(config.max_agents, Some(50));
    assert_eq!(config.max_shrinkage_pct, 0.5);
    assert_eq!(config.default_shrinkage_pct, 0.30);
    assert_eq!(config.sla_scenarios, CalculatorConfig::default().sla_scenarios);
}

#[test]
fn invalid_config_rejected() {
    assert!(CalculatorConfig::from_json(r#"{"max_shrinkage_pct": 1.5}"#).is_err());
    assert!(CalculatorConfig::from_json(r#"{"max_shrinkage_pct": 0.2}"#).is_err());
    assert!(CalculatorConfig::from_json(
        r#"{"sla_scenarios": [{"name": "bad", "target_pct": 0, "target_seconds": 20}]}"#
    )
    .is_err());
    assert!(CalculatorConfig::from_json("not json").is_err());

    let config = CalculatorConfig { default_shrinkage_pct: 1.0, ..CalculatorConfig::default() };
    assert!(StaffingCalculator::new(config).is_err());
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("staffing-config-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"default_shrinkage_pct": 0.35,
            "sla_scenarios": [{"name": "85/15", "target_pct": 85, "target_seconds": 15}]}"#,
    )
    .unwrap();

    let config = CalculatorConfig::load(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.default_shrinkage_pct, 0.35);
    assert_eq!(config.sla_scenarios.len(), 1);
    assert_eq!(config.sla_scenarios[0].name, "85/15");
}

#[test]
fn load_missing_file_fails() {
    let err = CalculatorConfig::load("/nonexistent/staffing.json").unwrap_err();
    assert!(err.to_string().contains("Cannot read"));
}
