use serde::{Deserialize, Serialize};

/// 힘 단위. 내부 기준은 N이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    KiloNewton,
    MegaNewton,
    PoundForce,
}

impl ForceUnit {
    /// 기준 단위(N) 대비 배율.
    pub fn factor(self) -> f64 {
        match self {
            ForceUnit::Newton => 1.0,
            ForceUnit::KiloNewton => 1.0e3,
            ForceUnit::MegaNewton => 1.0e6,
            ForceUnit::PoundForce => 4.4482216152605,
        }
    }

    /// 보고서 표기용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::KiloNewton => "kN",
            ForceUnit::MegaNewton => "MN",
            ForceUnit::PoundForce => "lbf",
        }
    }
}

/// 힘을 다른 단위로 변환한다.
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    value * from.factor() / to.factor()
}
