use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 m²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareKilometer,
    Hectare,
    SquareFoot,
}

impl AreaUnit {
    /// 기준 단위(m²) 대비 배율.
    pub fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareKilometer => 1.0e6,
            AreaUnit::Hectare => 1.0e4,
            AreaUnit::SquareFoot => 0.09290304,
        }
    }

    /// 보고서 표기용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareKilometer => "km²",
            AreaUnit::Hectare => "ha",
            AreaUnit::SquareFoot => "ft²",
        }
    }
}

/// 면적을 다른 단위로 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    value * from.factor() / to.factor()
}
