use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
    PoundPerCubicFoot,
}

impl DensityUnit {
    /// 기준 단위(kg/m³) 대비 배율.
    pub fn factor(self) -> f64 {
        match self {
            DensityUnit::KilogramPerCubicMeter => 1.0,
            DensityUnit::GramPerCubicCentimeter => 1000.0,
            DensityUnit::PoundPerCubicFoot => 16.018463,
        }
    }

    /// 보고서 표기용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KilogramPerCubicMeter => "kg/m³",
            DensityUnit::GramPerCubicCentimeter => "g/cm³",
            DensityUnit::PoundPerCubicFoot => "lb/ft³",
        }
    }
}

/// 밀도를 다른 단위로 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    value * from.factor() / to.factor()
}
