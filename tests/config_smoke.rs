use grainfall_engine::{Material, PaintError, SimConfig, WorldCore};

#[test]
fn shipped_config_parses_and_builds_a_world() {
    let json = include_str!("../config/default.json");
    let config = SimConfig::from_json(json).expect("default.json should parse");

    assert_eq!(config, SimConfig::default());

    let world = WorldCore::with_config(config).expect("default config is valid");
    assert_eq!(world.size(), 256);
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let world = WorldCore::from_config_json(r#"{ "gridSize": 12 }"#).expect("partial config");
    assert_eq!(world.size(), 12);
    assert_eq!(world.clock().tick_ms(), SimConfig::default().tick_ms);
}

#[test]
fn restricted_material_list_is_enforced_by_paint() {
    let mut world = WorldCore::from_config_json(r#"{ "gridSize": 4, "enabledMaterials": ["sand"] }"#)
        .expect("sand-only config");

    assert!(world.paint(0, 0, Material::Sand).is_ok());
    assert_eq!(
        world.paint(0, 1, Material::Water),
        Err(PaintError::InvalidMaterial(Material::Water))
    );
}

#[test]
fn bad_configs_are_rejected() {
    assert!(SimConfig::from_json("not json").is_err());
    assert!(WorldCore::from_config_json(r#"{ "gridSize": 0 }"#).is_err());
    assert!(WorldCore::from_config_json(r#"{ "tickMs": -1 }"#).is_err());
    assert!(WorldCore::from_config_json(r#"{ "enabledMaterials": ["empty"] }"#).is_err());
    assert!(WorldCore::from_config_json(r#"{ "enabledMaterials": ["lava"] }"#).is_err());
}
