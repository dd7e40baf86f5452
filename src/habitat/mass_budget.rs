use crate::quantity::{Dimension, Quantity, QuantityError};

/// 내부 공기의 총질량 = 내부 체적 × 공기 밀도.
pub fn atmospheric_mass(
    cylinder_volume: Quantity,
    air_density: Quantity,
) -> Result<Quantity, QuantityError> {
    cylinder_volume.expect_dimension(Dimension::VOLUME)?;
    air_density.expect_dimension(Dimension::DENSITY)?;
    Ok(cylinder_volume * air_density)
}

/// 외피 질량 = 외피 체적 × 외피 재료 밀도.
pub fn shell_mass(
    shell_volume: Quantity,
    shell_density: Quantity,
) -> Result<Quantity, QuantityError> {
    shell_volume.expect_dimension(Dimension::VOLUME)?;
    shell_density.expect_dimension(Dimension::DENSITY)?;
    Ok(shell_volume * shell_density)
}

/// 건조 질량 = 외피 질량 + 공기 질량. 두 항의 차원이 다르면 실패한다.
pub fn dry_mass(shell_mass: Quantity, atmospheric_mass: Quantity) -> Result<Quantity, QuantityError> {
    shell_mass.expect_dimension(Dimension::MASS)?;
    shell_mass.try_add(atmospheric_mass)
}
