//! Tests for scenario files and presets

use gravsim_core::{
    CoincidentPolicy, Color, PhysicsConfig, PhysicsError, Preset, Scenario, ScenarioError,
    Vector3,
};
use std::path::PathBuf;

fn test_data_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(filename);
    path
}

#[test]
fn test_load_scenario_file() {
    let scenario = Scenario::load(test_data_path("two_suns_and_moon.toml")).expect("should load");

    assert_eq!(scenario.physics.coincident_policy, CoincidentPolicy::Skip);
    assert_eq!(scenario.bodies.len(), 3);
    assert_eq!(scenario.bodies[0].velocity, Vector3::new(0.0, 5.0, 0.0));
    assert_eq!(scenario.bodies[0].color, Color::YELLOW);

    let moon = &scenario.bodies[2];
    assert_eq!(moon.velocity, Vector3::ZERO);
    assert_eq!(moon.color, Color::BLACK);

    let world = scenario.build_world().expect("should build");
    assert_eq!(world.len(), 3);
    assert_eq!(world.config().coincident_policy, CoincidentPolicy::Skip);
}

#[test]
fn test_missing_physics_table_uses_defaults() {
    let scenario = Scenario::from_toml_str(
        r#"
[[bodies]]
mass = 1.0
position = [1.0, 2.0, 3.0]
"#,
    )
    .unwrap();

    assert_eq!(scenario.physics, PhysicsConfig::default());
    assert_eq!(scenario.bodies[0].position, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_partial_physics_table() {
    let scenario = Scenario::from_toml_str(
        r#"
[physics]
timestep = 0.25
"#,
    )
    .unwrap();

    assert_eq!(scenario.physics.timestep, 0.25);
    assert_eq!(scenario.physics.sentinel_mass, 0.1);
    assert!(scenario.bodies.is_empty());
}

#[test]
fn test_invalid_mass_rejected_when_building() {
    let scenario = Scenario::load(test_data_path("negative_mass.toml")).unwrap();

    match scenario.build_world() {
        Err(ScenarioError::Physics(PhysicsError::InvalidMass { mass })) => assert_eq!(mass, -5.0),
        other => panic!("expected invalid mass, got {:?}", other),
    }
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let result = Scenario::from_toml_str("[[bodies]]\nmass = 1.0\nposition = [1.0, 2.0]\n");
    assert!(matches!(result, Err(ScenarioError::Parse(_))));

    let result = Scenario::from_toml_str("[physics\n");
    assert!(matches!(result, Err(ScenarioError::Parse(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Scenario::load(test_data_path("does_not_exist.toml"));
    assert!(matches!(result, Err(ScenarioError::Io(_))));
}

#[test]
fn test_preset_names() {
    for preset in Preset::ALL {
        assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
    }
    assert!(matches!(
        "four-body".parse::<Preset>(),
        Err(ScenarioError::UnknownPreset(name)) if name == "four-body"
    ));
}

#[test]
fn test_three_body_preset_layout() {
    let scenario = Scenario::preset(Preset::ThreeBody);
    let masses: Vec<f64> = scenario.bodies.iter().map(|b| b.mass).collect();
    assert_eq!(masses, vec![500.0, 300.0, 10_000.0]);
    assert_eq!(scenario.bodies[0].position, Vector3::new(500.0, 0.0, 0.0));
    assert_eq!(scenario.bodies[1].color, Color::BLUE);
}

#[test]
fn test_preset_survives_toml_export() {
    let scenario = Scenario::preset(Preset::BinarySuns);
    let text = scenario.to_toml_string().unwrap();

    assert!(text.contains("[[bodies]]"));
    assert_eq!(Scenario::from_toml_str(&text).unwrap(), scenario);
}

#[test]
fn test_unusable_physics_settings_rejected() {
    let cases = [
        ("timestep = nan", "timestep"),
        ("timestep = 0.0", "timestep"),
        ("timestep = -1.0", "timestep"),
        ("gravitational_constant = inf", "gravitational_constant"),
        ("gravitational_constant = -1.0", "gravitational_constant"),
        ("sentinel_mass = 0.0", "sentinel_mass"),
        ("sentinel_mass = -0.1", "sentinel_mass"),
        ("min_display_size = -10.0", "min_display_size"),
        ("min_display_size = nan", "min_display_size"),
        ("display_log_base = 1.0", "display_log_base"),
        ("display_log_base = 0.0", "display_log_base"),
        ("display_log_base = -2.0", "display_log_base"),
    ];

    for (setting, expected_field) in cases {
        let source = format!(
            "[physics]\n{setting}\n\n[[bodies]]\nmass = 100.0\nposition = [0.0, 0.0, 0.0]\n"
        );
        let scenario = Scenario::from_toml_str(&source).unwrap();

        match scenario.build_world() {
            Err(ScenarioError::Physics(PhysicsError::InvalidConfig { field, .. })) => {
                assert_eq!(field, expected_field, "wrong field reported for '{setting}'")
            }
            other => panic!("'{setting}' should be rejected, got {:?}", other),
        }
    }
}

#[test]
fn test_log_base_one_cannot_merge_distant_bodies() {
    let scenario = Scenario::from_toml_str(
        r#"
[physics]
display_log_base = 1.0

[[bodies]]
mass = 100.0
position = [0.0, 0.0, 0.0]

[[bodies]]
mass = 50.0
position = [1000000.0, 0.0, 0.0]
"#,
    )
    .unwrap();

    assert!(scenario.build_world().is_err());
}

#[test]
fn test_edge_physics_settings_accepted() {
    let config = PhysicsConfig {
        gravitational_constant: 0.0,
        min_display_size: 0.0,
        display_log_base: 0.5,
        ..PhysicsConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(PhysicsConfig::default().validate(), Ok(()));
}
