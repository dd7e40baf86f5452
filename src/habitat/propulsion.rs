use crate::quantity::{Dimension, Quantity, QuantityError};

/// 엔진 가속도 = 추력 / 건조 질량. 질량이 0이면 실패한다.
pub fn engine_acceleration(
    engine_thrust: Quantity,
    dry_mass: Quantity,
) -> Result<Quantity, QuantityError> {
    engine_thrust.expect_dimension(Dimension::FORCE)?;
    dry_mass.expect_dimension(Dimension::MASS)?;
    engine_thrust.try_div(dry_mass)
}
