use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
///
/// Ton은 야드파운드법 US ton(2000 lb)이고 Megaton은 그 10⁶배이다. 질량 예산
/// 보고는 관례상 megaton 단위를 사용한다. 미터법 톤은 Tonne으로 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Tonne,
    Ton,
    Megaton,
}

impl MassUnit {
    /// 기준 단위(kg) 대비 배율.
    pub fn factor(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 1.0e-3,
            MassUnit::Tonne => 1000.0,
            MassUnit::Ton => 907.18474,
            MassUnit::Megaton => 907.18474e6,
        }
    }

    /// 보고서 표기용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Tonne => "t",
            MassUnit::Ton => "ton",
            MassUnit::Megaton => "megaton",
        }
    }
}

/// 질량을 다른 단위로 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    value * from.factor() / to.factor()
}
