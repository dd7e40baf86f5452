use serde::{Deserialize, Serialize};

/// 회전수 단위. 내부 기준은 1/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationRateUnit {
    PerSecond,
    PerMinute,
    PerHour,
}

impl RotationRateUnit {
    /// 기준 단위(1/s) 대비 배율.
    pub fn factor(self) -> f64 {
        match self {
            RotationRateUnit::PerSecond => 1.0,
            RotationRateUnit::PerMinute => 1.0 / 60.0,
            RotationRateUnit::PerHour => 1.0 / 3600.0,
        }
    }

    /// 보고서 표기용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            RotationRateUnit::PerSecond => "1/s",
            RotationRateUnit::PerMinute => "1/min",
            RotationRateUnit::PerHour => "1/h",
        }
    }
}

/// 회전수를 다른 단위로 변환한다.
pub fn convert_rotation_rate(value: f64, from: RotationRateUnit, to: RotationRateUnit) -> f64 {
    value * from.factor() / to.factor()
}
