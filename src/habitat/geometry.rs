use std::f64::consts::{PI, TAU};

use crate::quantity::{Dimension, Quantity, QuantityError};

/// 기하 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// 외피 외경이 내경보다 작아 체적이 음수가 되는 경우
    ShellInverted { inner_m: f64, outer_m: f64 },
    /// 입력 물리량의 차원 오류
    Quantity(QuantityError),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::ShellInverted { inner_m, outer_m } => write!(
                f,
                "외반경({outer_m} m)이 내반경({inner_m} m)보다 작습니다"
            ),
            GeometryError::Quantity(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GeometryError {}

impl From<QuantityError> for GeometryError {
    fn from(value: QuantityError) -> Self {
        GeometryError::Quantity(value)
    }
}

/// 원통 둘레 2π·r 를 계산한다.
pub fn circumference(radius: Quantity) -> Result<Quantity, QuantityError> {
    radius.expect_dimension(Dimension::LENGTH)?;
    Ok(radius.scale(TAU))
}

/// 원통 곡면(측면)의 면적 2π·r·h 를 계산한다. 양끝 뚜껑은 제외한다.
pub fn lateral_surface_area(radius: Quantity, height: Quantity) -> Result<Quantity, QuantityError> {
    radius.expect_dimension(Dimension::LENGTH)?;
    height.expect_dimension(Dimension::LENGTH)?;
    Ok(radius.scale(TAU) * height)
}

/// 꽉 찬 원통의 체적 π·r²·h 를 계산한다.
pub fn solid_cylinder_volume(radius: Quantity, height: Quantity) -> Result<Quantity, QuantityError> {
    radius.expect_dimension(Dimension::LENGTH)?;
    height.expect_dimension(Dimension::LENGTH)?;
    Ok((radius * radius).scale(PI) * height)
}

/// 속이 빈 원통(외피)의 체적 π·(ro²−ri²)·h 를 계산한다.
///
/// 외반경이 내반경보다 작으면 물리적으로 무의미하므로 음수 체적을 만들지 않고
/// 실패한다.
pub fn hollow_cylinder_volume(
    inner_radius: Quantity,
    outer_radius: Quantity,
    height: Quantity,
) -> Result<Quantity, GeometryError> {
    inner_radius.expect_dimension(Dimension::LENGTH)?;
    outer_radius.expect_dimension(Dimension::LENGTH)?;
    height.expect_dimension(Dimension::LENGTH)?;
    if outer_radius.value_base() < inner_radius.value_base() {
        return Err(GeometryError::ShellInverted {
            inner_m: inner_radius.value_base(),
            outer_m: outer_radius.value_base(),
        });
    }
    let ring = (outer_radius * outer_radius).try_sub(inner_radius * inner_radius)?;
    Ok(ring.scale(PI) * height)
}
