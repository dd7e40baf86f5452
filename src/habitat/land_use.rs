use serde::{Deserialize, Serialize};

use crate::quantity::{Dimension, Quantity, QuantityError};

/// 비율 합 검사에 허용하는 부동소수 오차. 0.2+0.1+0.4+0.3 처럼 정확히 1이
/// 되어야 하는 테이블이 이진 표현 때문에 1을 살짝 넘는 경우를 허용한다.
const RATIO_SUM_TOLERANCE: f64 = 1.0e-9;

/// 토지 용도 구분. 닫힌 집합이므로 항목 추가/삭제는 타입 검사 대상이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandUseCategory {
    Residential,
    Recreation,
    Reservation,
    Agriculture,
}

impl LandUseCategory {
    pub const ALL: [LandUseCategory; 4] = [
        LandUseCategory::Residential,
        LandUseCategory::Recreation,
        LandUseCategory::Reservation,
        LandUseCategory::Agriculture,
    ];
}

/// 용도별 면적 비율 테이블. 합이 1을 넘으면 설정 오류이다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandUseRatios {
    pub residential: f64,
    pub recreation: f64,
    pub reservation: f64,
    pub agriculture: f64,
}

impl LandUseRatios {
    pub fn ratio(&self, category: LandUseCategory) -> f64 {
        match category {
            LandUseCategory::Residential => self.residential,
            LandUseCategory::Recreation => self.recreation,
            LandUseCategory::Reservation => self.reservation,
            LandUseCategory::Agriculture => self.agriculture,
        }
    }

    pub fn sum(&self) -> f64 {
        self.residential + self.recreation + self.reservation + self.agriculture
    }

    /// 비율 합 불변식을 검사한다. 토지 배분 단계를 시작하기 전에 호출한다.
    pub fn validate(&self) -> Result<(), LandUseError> {
        let sum = self.sum();
        if sum > 1.0 + RATIO_SUM_TOLERANCE {
            return Err(LandUseError::RatioSumExceedsOne { sum });
        }
        Ok(())
    }
}

/// 토지 배분 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum LandUseError {
    /// 용도 비율의 합이 1을 초과
    RatioSumExceedsOne { sum: f64 },
    /// 입력 물리량의 차원 오류
    Quantity(QuantityError),
}

impl std::fmt::Display for LandUseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LandUseError::RatioSumExceedsOne { sum } => {
                write!(f, "용도 비율의 합({sum})이 1을 초과합니다")
            }
            LandUseError::Quantity(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LandUseError {}

impl From<QuantityError> for LandUseError {
    fn from(value: QuantityError) -> Self {
        LandUseError::Quantity(value)
    }
}

/// 내벽을 정사각 구획으로 나눈 격자.
#[derive(Debug, Clone, Copy)]
pub struct SubdivisionGrid {
    /// 길이 방향 구획 수
    pub along_length: u64,
    /// 둘레 방향 구획 수
    pub around_circumference: u64,
    /// 구획 한 칸의 면적
    pub tile_area: Quantity,
}

impl SubdivisionGrid {
    pub fn total(&self) -> u64 {
        self.along_length * self.around_circumference
    }

    /// 격자에 포함된 거주 가능 총면적 = 칸 면적 × 칸 수.
    pub fn livable_area(&self) -> Quantity {
        self.tile_area.scale(self.total() as f64)
    }
}

/// 용도 하나에 배정된 면적과 구획 수.
#[derive(Debug, Clone, Copy)]
pub struct CategoryAllotment {
    pub category: LandUseCategory,
    pub area: Quantity,
    /// 올림 처리한 구획 수 (배정 면적을 전부 덮는 최소 칸 수)
    pub tile_count: u64,
}

/// 내벽을 한 변 `side` 인 정사각 구획으로 나눈다. 구획 수는 내림 처리한다.
pub fn subdivide(
    length: Quantity,
    circumference: Quantity,
    side: Quantity,
) -> Result<SubdivisionGrid, LandUseError> {
    length.expect_dimension(Dimension::LENGTH)?;
    circumference.expect_dimension(Dimension::LENGTH)?;
    side.expect_dimension(Dimension::LENGTH)?;
    let along_length = length.ratio_to(side)?.floor() as u64;
    let around_circumference = circumference.ratio_to(side)?.floor() as u64;
    Ok(SubdivisionGrid {
        along_length,
        around_circumference,
        tile_area: side * side,
    })
}

/// 비율 테이블에 따라 거주 가능 면적을 용도별로 배분한다.
///
/// 비율 합 검사를 먼저 수행하므로, 테이블이 잘못되어 있으면 어떤 배분 값도
/// 만들어지지 않는다.
pub fn allocate(
    grid: &SubdivisionGrid,
    ratios: &LandUseRatios,
) -> Result<Vec<CategoryAllotment>, LandUseError> {
    ratios.validate()?;
    let livable = grid.livable_area();
    let mut allotments = Vec::with_capacity(LandUseCategory::ALL.len());
    for category in LandUseCategory::ALL {
        let area = livable.scale(ratios.ratio(category));
        let tile_count = area.ratio_to(grid.tile_area)?.ceil() as u64;
        allotments.push(CategoryAllotment {
            category,
            area,
            tile_count,
        });
    }
    Ok(allotments)
}
