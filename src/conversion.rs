use crate::quantity::{Quantity, QuantityKind};
use crate::units::*;

/// 단위 문자열 해석 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 해석해 해당 물리량의 `Quantity`를 생성한다.
///
/// 단위 문자열 예시는 `km`, `m/s2`, `kg/m3`, `1/h`, `megaton` 등을 사용할 수
/// 있다. 물리량 종류와 맞지 않는 단위는 알 수 없는 단위로 처리된다.
pub fn parse_quantity(
    kind: QuantityKind,
    value: f64,
    unit_str: &str,
) -> Result<Quantity, ConversionError> {
    match kind {
        QuantityKind::Length => Ok(Quantity::length(value, parse_length_unit(unit_str)?)),
        QuantityKind::Area => Ok(Quantity::area(value, parse_area_unit(unit_str)?)),
        QuantityKind::Volume => Ok(Quantity::volume(value, parse_volume_unit(unit_str)?)),
        QuantityKind::Mass => Ok(Quantity::mass(value, parse_mass_unit(unit_str)?)),
        QuantityKind::Velocity => Ok(Quantity::velocity(value, parse_velocity_unit(unit_str)?)),
        QuantityKind::Acceleration => Ok(Quantity::acceleration(
            value,
            parse_acceleration_unit(unit_str)?,
        )),
        QuantityKind::Density => Ok(Quantity::density(value, parse_density_unit(unit_str)?)),
        QuantityKind::Force => Ok(Quantity::force(value, parse_force_unit(unit_str)?)),
        QuantityKind::RotationRate => Ok(Quantity::rotation_rate(
            value,
            parse_rotation_rate_unit(unit_str)?,
        )),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "km" | "kilometer" => Ok(LengthUnit::Kilometer),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        "mi" | "mile" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "m²" | "sqm" => Ok(AreaUnit::SquareMeter),
        "km2" | "km^2" | "km²" => Ok(AreaUnit::SquareKilometer),
        "ha" | "hectare" => Ok(AreaUnit::Hectare),
        "ft2" | "ft^2" | "ft²" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" | "m³" => Ok(VolumeUnit::CubicMeter),
        "km3" | "km^3" | "km³" => Ok(VolumeUnit::CubicKilometer),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ft3" | "ft^3" | "ft³" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" | "kilogram" => Ok(MassUnit::Kilogram),
        "g" | "gram" => Ok(MassUnit::Gram),
        "t" | "tonne" => Ok(MassUnit::Tonne),
        "ton" => Ok(MassUnit::Ton),
        "megaton" | "mt" => Ok(MassUnit::Megaton),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_acceleration_unit(s: &str) -> Result<AccelerationUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s2" | "m/s^2" | "m/s²" => Ok(AccelerationUnit::MeterPerSecondSquared),
        "ft/s2" | "ft/s^2" | "ft/s²" => Ok(AccelerationUnit::FootPerSecondSquared),
        "g0" | "g₀" => Ok(AccelerationUnit::StandardGravity),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" | "kg/m³" => Ok(DensityUnit::KilogramPerCubicMeter),
        "g/cm3" | "g/cm^3" | "g/cm³" => Ok(DensityUnit::GramPerCubicCentimeter),
        "lb/ft3" | "lb/ft^3" | "lb/ft³" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_force_unit(s: &str) -> Result<ForceUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "n" | "newton" => Ok(ForceUnit::Newton),
        "kn" => Ok(ForceUnit::KiloNewton),
        "mn" => Ok(ForceUnit::MegaNewton),
        "lbf" => Ok(ForceUnit::PoundForce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_rotation_rate_unit(s: &str) -> Result<RotationRateUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "1/s" | "/s" => Ok(RotationRateUnit::PerSecond),
        "1/min" | "/min" | "rpm" => Ok(RotationRateUnit::PerMinute),
        "1/h" | "/h" | "rph" => Ok(RotationRateUnit::PerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
