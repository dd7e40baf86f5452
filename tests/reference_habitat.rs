//! 기준 거주구(길이 16 km, 반경 3 km, 30회전/시간) 시나리오 회귀 테스트.
//!
//! 기본 설정을 픽스처로 사용해 단계별 수치와 보고서 줄 출력을 함께 검증한다.
use habitat_engineering_toolbox::app::AppError;
use habitat_engineering_toolbox::config::Config;
use habitat_engineering_toolbox::habitat::land_use::{self, LandUseError};
use habitat_engineering_toolbox::habitat::{geometry, mass_budget, propulsion, rotation};
use habitat_engineering_toolbox::i18n::Translator;
use habitat_engineering_toolbox::report;
use habitat_engineering_toolbox::units::{
    AccelerationUnit, AreaUnit, LengthUnit, MassUnit, VelocityUnit, VolumeUnit,
};

#[test]
fn reference_values() {
    let params = Config::default().resolve().expect("resolve default config");

    let circumference = geometry::circumference(params.cylinder_radius).unwrap();
    assert!((circumference.to_length(LengthUnit::Kilometer).unwrap() - 18.84955592).abs() < 1e-6);

    let lateral =
        geometry::lateral_surface_area(params.cylinder_radius, params.cylinder_length).unwrap();
    assert!((lateral.to_area(AreaUnit::SquareKilometer).unwrap() - 301.59289474).abs() < 1e-6);

    let volume =
        geometry::solid_cylinder_volume(params.cylinder_radius, params.cylinder_length).unwrap();
    assert!((volume.to_volume(VolumeUnit::CubicKilometer).unwrap() - 452.38934212).abs() < 1e-6);

    let speed = rotation::surface_speed(circumference, params.rotation_rate).unwrap();
    assert!((speed.to_velocity(VelocityUnit::MeterPerSecond).unwrap() - 157.07963268).abs() < 1e-6);

    let centripetal = rotation::centripetal_acceleration(speed, params.cylinder_radius).unwrap();
    assert!(
        (centripetal
            .to_acceleration(AccelerationUnit::MeterPerSecondSquared)
            .unwrap()
            - 8.22467033)
            .abs()
            < 1e-6
    );
    let centripetal_g = rotation::gravity_ratio(centripetal, params.earth_acceleration).unwrap();
    assert!((centripetal_g - 0.83839657).abs() < 1e-6);

    let air_mass = mass_budget::atmospheric_mass(volume, params.air_density).unwrap();
    assert!((air_mass.to_mass(MassUnit::Megaton).unwrap() - 600.45322945).abs() < 1e-6);

    let outer = params.cylinder_radius.try_add(params.shell_thickness).unwrap();
    let shell_volume =
        geometry::hollow_cylinder_volume(params.cylinder_radius, outer, params.cylinder_length)
            .unwrap();
    assert!(
        (shell_volume.to_volume(VolumeUnit::CubicKilometer).unwrap() - 15.20530844).abs() < 1e-6
    );

    let shell_mass = mass_budget::shell_mass(shell_volume, params.shell_density).unwrap();
    assert!((shell_mass.to_mass(MassUnit::Megaton).unwrap() - 45254.65540471).abs() < 1e-4);

    let dry_mass = mass_budget::dry_mass(shell_mass, air_mass).unwrap();
    assert!((dry_mass.to_mass(MassUnit::Megaton).unwrap() - 45855.10863416).abs() < 1e-4);

    let engine_acc = propulsion::engine_acceleration(params.engine_thrust, dry_mass).unwrap();
    assert!(
        (engine_acc
            .to_acceleration(AccelerationUnit::MeterPerSecondSquared)
            .unwrap()
            - 7.211702319e-4)
            .abs()
            < 1e-12
    );
    let engine_g = rotation::gravity_ratio(engine_acc, params.earth_acceleration).unwrap();
    assert!((engine_g - 7.351378511e-5).abs() < 1e-12);

    let grid = land_use::subdivide(
        params.cylinder_length,
        circumference,
        params.subdivision_side,
    )
    .unwrap();
    assert_eq!((grid.along_length, grid.around_circumference, grid.total()), (8, 9, 72));
    assert!((grid.tile_area.to_area(AreaUnit::SquareKilometer).unwrap() - 4.0).abs() < 1e-9);
    assert!(
        (grid.livable_area().to_area(AreaUnit::SquareKilometer).unwrap() - 288.0).abs() < 1e-9
    );
}

#[test]
fn rendered_report_lines() {
    let params = Config::default().resolve().unwrap();
    let tr = Translator::new("en");
    let mut buf = Vec::new();
    report::render(&params, &tr, &mut buf).expect("render reference report");
    let text = String::from_utf8(buf).unwrap();

    let expected = [
        "Circumference: 18.85 km",
        "Inner lateral area: 301.59 km²",
        "Cylinder volume: 452.39 km³",
        "Surface speed: 157.08 m/s",
        "Centripetal acceleration: 8.22467 m/s² (0.83840 G)",
        "Atmospheric mass: 600.45 megaton",
        "Shell volume: 15.21 km³",
        "Shell mass: 45254.66 megaton",
        "Dry mass: 45855.11 megaton",
        "Engine acceleration: 0.0007211702 m/s² (0.0000735138 G)",
        "Subdivision grid: 8 × 9 = 72",
        "Tile area: 4.00 km²",
        "Livable area: 288.00 km²",
        "Residential: 57.60 km² (15 tiles)",
        "Recreation: 28.80 km² (8 tiles)",
        "Reservation: 115.20 km² (29 tiles)",
        "Agriculture: 86.40 km² (22 tiles)",
    ];
    for line in expected {
        assert!(text.contains(line), "missing line {line:?} in:\n{text}");
    }

    // 줄 순서는 자료 의존 순서를 따라야 한다.
    let mut last = 0;
    for line in expected {
        let pos = text.find(line).unwrap();
        assert!(pos >= last, "line out of order: {line:?}");
        last = pos;
    }
}

/// 비율 합이 1을 넘는 설정은 토지 배분 줄을 하나도 출력하기 전에 실패한다.
/// 앞 단계 출력은 그대로 남는다.
#[test]
fn invalid_ratio_table_stops_before_land_use_output() {
    let mut config = Config::default();
    config.land_use.ratios.residential = 0.3;
    config.land_use.ratios.recreation = 0.3;
    config.land_use.ratios.reservation = 0.3;
    config.land_use.ratios.agriculture = 0.3;
    let params = config.resolve().unwrap();

    let tr = Translator::new("en");
    let mut buf = Vec::new();
    let err = report::render(&params, &tr, &mut buf).unwrap_err();
    assert!(matches!(
        err,
        AppError::LandUse(LandUseError::RatioSumExceedsOne { .. })
    ));

    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Dry mass:"));
    assert!(!text.contains("Land Use"));
    assert!(!text.contains("Residential:"));
}
