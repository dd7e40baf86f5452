//! 단위 환산 왕복 법칙과 단위 문자열 해석 회귀 테스트.
use habitat_engineering_toolbox::conversion::{self, ConversionError};
use habitat_engineering_toolbox::quantity::QuantityKind;
use habitat_engineering_toolbox::units::*;

/// 임의 단위로 변환했다가 되돌리면 원래 크기로 돌아와야 한다.
#[test]
fn round_trip_preserves_magnitude() {
    let value = 1234.5678;

    let km = convert_length(value, LengthUnit::Meter, LengthUnit::Kilometer);
    assert!((convert_length(km, LengthUnit::Kilometer, LengthUnit::Meter) - value).abs() < 1e-9);

    let ft2 = convert_area(value, AreaUnit::SquareMeter, AreaUnit::SquareFoot);
    assert!((convert_area(ft2, AreaUnit::SquareFoot, AreaUnit::SquareMeter) - value).abs() < 1e-9);

    let l = convert_volume(value, VolumeUnit::CubicMeter, VolumeUnit::Liter);
    assert!((convert_volume(l, VolumeUnit::Liter, VolumeUnit::CubicMeter) - value).abs() < 1e-9);

    let mt = convert_mass(value, MassUnit::Kilogram, MassUnit::Megaton);
    assert!((convert_mass(mt, MassUnit::Megaton, MassUnit::Kilogram) - value).abs() < 1e-9);

    let kph = convert_velocity(value, VelocityUnit::MeterPerSecond, VelocityUnit::KilometerPerHour);
    assert!(
        (convert_velocity(kph, VelocityUnit::KilometerPerHour, VelocityUnit::MeterPerSecond)
            - value)
            .abs()
            < 1e-9
    );

    let g0 = convert_acceleration(
        value,
        AccelerationUnit::MeterPerSecondSquared,
        AccelerationUnit::StandardGravity,
    );
    assert!(
        (convert_acceleration(
            g0,
            AccelerationUnit::StandardGravity,
            AccelerationUnit::MeterPerSecondSquared
        ) - value)
            .abs()
            < 1e-9
    );

    let lbft3 = convert_density(
        value,
        DensityUnit::KilogramPerCubicMeter,
        DensityUnit::PoundPerCubicFoot,
    );
    assert!(
        (convert_density(
            lbft3,
            DensityUnit::PoundPerCubicFoot,
            DensityUnit::KilogramPerCubicMeter
        ) - value)
            .abs()
            < 1e-9
    );

    let lbf = convert_force(value, ForceUnit::Newton, ForceUnit::PoundForce);
    assert!((convert_force(lbf, ForceUnit::PoundForce, ForceUnit::Newton) - value).abs() < 1e-9);

    let rph = convert_rotation_rate(
        value,
        RotationRateUnit::PerSecond,
        RotationRateUnit::PerHour,
    );
    assert!(
        (convert_rotation_rate(rph, RotationRateUnit::PerHour, RotationRateUnit::PerSecond)
            - value)
            .abs()
            < 1e-9
    );
}

#[test]
fn known_scale_factors() {
    // 30회전/시간 = 1/120 회전/초
    assert!(
        (convert_rotation_rate(30.0, RotationRateUnit::PerHour, RotationRateUnit::PerSecond)
            - 30.0 / 3600.0)
            .abs()
            < 1e-15
    );
    // 1 megaton = 10⁶ US ton = 9.0718474e8 kg
    assert!((convert_mass(1.0, MassUnit::Megaton, MassUnit::Kilogram) - 9.0718474e8).abs() < 1e-3);
}

#[test]
fn parse_quantity_resolves_unit_strings() {
    let radius = conversion::parse_quantity(QuantityKind::Length, 3.0, "km").unwrap();
    assert!((radius.value_base() - 3000.0).abs() < 1e-9);

    let rate = conversion::parse_quantity(QuantityKind::RotationRate, 30.0, "1/h").unwrap();
    assert!((rate.value_base() - 30.0 / 3600.0).abs() < 1e-15);

    let density = conversion::parse_quantity(QuantityKind::Density, 1.2041, "kg/m3").unwrap();
    assert!((density.value_base() - 1.2041).abs() < 1e-12);

    let area = conversion::parse_quantity(QuantityKind::Area, 2.0, "km2").unwrap();
    assert!((area.value_base() - 2.0e6).abs() < 1e-6);

    let volume = conversion::parse_quantity(QuantityKind::Volume, 1.5, "km3").unwrap();
    assert!((volume.value_base() - 1.5e9).abs() < 1.0);

    let mass = conversion::parse_quantity(QuantityKind::Mass, 2.0, "megaton").unwrap();
    assert!((mass.value_base() - 2.0 * 9.0718474e8).abs() < 1e-3);

    let speed = conversion::parse_quantity(QuantityKind::Velocity, 3.6, "km/h").unwrap();
    assert!((speed.value_base() - 1.0).abs() < 1e-12);

    let acc = conversion::parse_quantity(QuantityKind::Acceleration, 1.0, "g0").unwrap();
    assert!((acc.value_base() - 9.80665).abs() < 1e-12);

    let thrust = conversion::parse_quantity(QuantityKind::Force, 3.0, "kN").unwrap();
    assert!((thrust.value_base() - 3000.0).abs() < 1e-9);
}

#[test]
fn unknown_or_wrong_kind_unit_is_rejected() {
    let err = conversion::parse_quantity(QuantityKind::Length, 1.0, "parsec").unwrap_err();
    assert_eq!(err, ConversionError::UnknownUnit("parsec".to_string()));

    // 질량 자리에 길이 단위를 적으면 해석 단계에서 걸러진다.
    assert!(conversion::parse_quantity(QuantityKind::Mass, 1.0, "km").is_err());
}
