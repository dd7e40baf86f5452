use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    CubicKilometer,
    Liter,
    CubicFoot,
}

impl VolumeUnit {
    /// 기준 단위(m³) 대비 배율.
    pub fn factor(self) -> f64 {
        match self {
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::CubicKilometer => 1.0e9,
            VolumeUnit::Liter => 1.0e-3,
            VolumeUnit::CubicFoot => 0.028316846592,
        }
    }

    /// 보고서 표기용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::CubicKilometer => "km³",
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicFoot => "ft³",
        }
    }
}

/// 체적을 다른 단위로 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    value * from.factor() / to.factor()
}
