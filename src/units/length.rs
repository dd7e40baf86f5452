use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 m이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Foot,
    Mile,
}

impl LengthUnit {
    /// 기준 단위(m) 대비 배율.
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Mile => 1609.344,
        }
    }

    /// 보고서 표기용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Foot => "ft",
            LengthUnit::Mile => "mi",
        }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.factor() / to.factor()
}
