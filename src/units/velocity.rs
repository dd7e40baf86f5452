use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    FootPerSecond,
}

impl VelocityUnit {
    /// 기준 단위(m/s) 대비 배율.
    pub fn factor(self) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => 1.0,
            VelocityUnit::KilometerPerHour => 1.0 / 3.6,
            VelocityUnit::FootPerSecond => 0.3048,
        }
    }

    /// 보고서 표기용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::KilometerPerHour => "km/h",
            VelocityUnit::FootPerSecond => "ft/s",
        }
    }
}

/// 속도를 다른 단위로 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    value * from.factor() / to.factor()
}
