//! 설정 해석과 재료 테이블 회귀 테스트.
use habitat_engineering_toolbox::config::Config;
use habitat_engineering_toolbox::materials;
use habitat_engineering_toolbox::quantity::Dimension;
use habitat_engineering_toolbox::units::DensityUnit;

#[test]
fn default_config_resolves_to_base_units() {
    let params = Config::default().resolve().expect("resolve");
    assert_eq!(params.cylinder_radius.dimension(), Dimension::LENGTH);
    assert!((params.cylinder_radius.value_base() - 3000.0).abs() < 1e-9);
    assert!((params.cylinder_length.value_base() - 16000.0).abs() < 1e-9);
    assert!((params.rotation_rate.value_base() - 30.0 / 3600.0).abs() < 1e-15);
    assert!((params.engine_thrust.value_base() - 3.0e10).abs() < 1.0);
    assert!((params.earth_acceleration.value_base() - 9.81).abs() < 1e-12);
}

#[test]
fn config_survives_toml_round_trip() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).expect("serialize");
    let parsed: Config = toml::from_str(&text).expect("parse");
    let params = parsed.resolve().expect("resolve");
    assert!((params.shell_thickness.value_base() - 50.0).abs() < 1e-9);
    assert!((params.ratios.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn bad_unit_string_fails_resolution() {
    let mut config = Config::default();
    config.structure.cylinder_radius.unit = "kg".to_string();
    assert!(config.resolve().is_err());
}

#[test]
fn shell_material_overrides_density() {
    let mut config = Config::default();
    config.structure.shell_material = Some("S355".to_string());
    let params = config.resolve().expect("resolve");
    assert!(
        (params
            .shell_density
            .to_density(DensityUnit::KilogramPerCubicMeter)
            .unwrap()
            - 7850.0)
            .abs()
            < 1e-9
    );

    config.structure.shell_material = Some("unobtainium".to_string());
    assert!(config.resolve().is_err());
}

#[test]
fn material_lookup_by_code_or_name() {
    assert!(materials::find_material("al-6061").is_some());
    assert!(materials::find_material("ALUMINIUM").is_some());
    assert!(materials::find_material("wood").is_none());
    assert!(!materials::materials().is_empty());

    let aluminium = materials::density_of("AL-6061").unwrap();
    assert!((aluminium.value_base() - 2700.0).abs() < 1e-9);
}
