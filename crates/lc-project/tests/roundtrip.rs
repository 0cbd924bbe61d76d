use lc_project::presets;
use lc_project::schema::*;
use lc_project::{ScenarioError, load, load_json, load_yaml, save, save_json, save_yaml};

fn custom_scenario() -> Scenario {
    let mut scenario = presets::test_conditions();
    scenario.name = "Armored assault".to_string();
    scenario.factions.a.initial = 120.0;
    scenario.factions.b.initial = 300.0;
    scenario.coefficients = CoefficientsDef {
        alpha: 0.002,
        beta: 0.015,
        kt: 2.5,
        ki: 0.4,
    };
    scenario.integration.end_time = 240.0;
    scenario.cutoff = CutoffDef {
        enabled: true,
        fraction: 0.25,
    };
    scenario.display.time_unit = "h".to_string();
    scenario
}

#[test]
fn roundtrip_yaml_preset() {
    let scenario = presets::test_conditions();
    let path = std::env::temp_dir().join("lc_project_roundtrip_preset.yaml");

    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_custom() {
    let scenario = custom_scenario();
    let path = std::env::temp_dir().join("lc_project_roundtrip_custom.json");

    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn extension_selects_format() {
    let scenario = custom_scenario();
    let dir = std::env::temp_dir();

    let json_path = dir.join("lc_project_by_extension.JSON");
    save(&json_path, &scenario).unwrap();
    let text = std::fs::read_to_string(&json_path).unwrap();
    assert!(text.trim_start().starts_with('{'));
    assert_eq!(load(&json_path).unwrap(), scenario);

    let yaml_path = dir.join("lc_project_by_extension.yml");
    save(&yaml_path, &scenario).unwrap();
    let text = std::fs::read_to_string(&yaml_path).unwrap();
    assert!(text.contains("name: Armored assault"));
    assert_eq!(load(&yaml_path).unwrap(), scenario);
}

#[test]
fn save_refuses_invalid_scenario() {
    let mut scenario = presets::test_conditions();
    scenario.integration.steps = 0;
    let path = std::env::temp_dir().join("lc_project_invalid_save.yaml");
    let _ = std::fs::remove_file(&path);

    let err = save_yaml(&path, &scenario).unwrap_err();
    assert!(matches!(err, ScenarioError::Validation(_)));
    assert!(!path.exists());
}

#[test]
fn load_reports_validation_and_parse_errors() {
    let dir = std::env::temp_dir();

    let bad_values = dir.join("lc_project_bad_values.yaml");
    std::fs::write(
        &bad_values,
        r#"
version: 1
name: Bad
factions:
  a: { label: A, initial: 10.0 }
  b: { label: B, initial: 10.0 }
coefficients: { alpha: 0.1, beta: 0.1, kt: 1.0, ki: 1.0 }
integration: { steps: 10, end_time: -5.0 }
"#,
    )
    .unwrap();
    assert!(matches!(
        load_yaml(&bad_values),
        Err(ScenarioError::Validation(_))
    ));

    let malformed = dir.join("lc_project_malformed.yaml");
    std::fs::write(&malformed, "version: [unterminated").unwrap();
    assert!(matches!(load_yaml(&malformed), Err(ScenarioError::Yaml(_))));

    let missing = dir.join("lc_project_does_not_exist.yaml");
    let _ = std::fs::remove_file(&missing);
    assert!(matches!(load_yaml(&missing), Err(ScenarioError::Io(_))));
}

#[test]
fn loaded_scenario_runs() {
    let scenario = custom_scenario();
    let path = std::env::temp_dir().join("lc_project_loaded_runs.yaml");
    save_yaml(&path, &scenario).unwrap();

    let cfg = load_yaml(&path).unwrap().to_config();
    let result = lc_sim::run_simulation(&cfg).unwrap();
    assert!(result.len() >= 2);
    assert!(result.len() <= scenario.integration.steps + 1);
}
