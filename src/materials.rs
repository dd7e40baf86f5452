use crate::quantity::Quantity;
use crate::units::DensityUnit;

/// 외피 구조 재료의 밀도 테이블을 제공한다.
/// 값은 참고용 상온 밀도이며 설계 시 실제 합금 규격으로 검증해야 한다.

#[derive(Debug)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    pub density_kg_per_m3: f64,
}

static MATERIALS: &[MaterialData] = &[
    MaterialData {
        code: "AL-6061",
        name: "aluminium",
        density_kg_per_m3: 2700.0,
    },
    MaterialData {
        code: "TI-6AL-4V",
        name: "titanium",
        density_kg_per_m3: 4430.0,
    },
    MaterialData {
        code: "S355",
        name: "structural steel",
        density_kg_per_m3: 7850.0,
    },
    MaterialData {
        code: "SS-304",
        name: "stainless steel",
        density_kg_per_m3: 8000.0,
    },
    // 달/소행성 현지 재료 가공을 가정한 근사치.
    MaterialData {
        code: "REGOLITH-SINTER",
        name: "sintered regolith",
        density_kg_per_m3: 1900.0,
    },
];

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// 코드 또는 이름으로 재료를 찾는다. 대소문자는 구분하지 않는다.
pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

/// 재료의 밀도를 `Quantity`로 반환한다.
pub fn density_of(code: &str) -> Option<Quantity> {
    find_material(code)
        .map(|m| Quantity::density(m.density_kg_per_m3, DensityUnit::KilogramPerCubicMeter))
}
