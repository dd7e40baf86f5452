use crate::quantity::{Dimension, Quantity, QuantityError};

/// 외벽 선속도 = 둘레 × 회전수.
pub fn surface_speed(
    circumference: Quantity,
    rotation_rate: Quantity,
) -> Result<Quantity, QuantityError> {
    circumference.expect_dimension(Dimension::LENGTH)?;
    rotation_rate.expect_dimension(Dimension::PER_TIME)?;
    Ok(circumference * rotation_rate)
}

/// 내벽에서의 구심 가속도 v²/r.
pub fn centripetal_acceleration(
    surface_speed: Quantity,
    radius: Quantity,
) -> Result<Quantity, QuantityError> {
    surface_speed.expect_dimension(Dimension::VELOCITY)?;
    radius.expect_dimension(Dimension::LENGTH)?;
    (surface_speed * surface_speed).try_div(radius)
}

/// 기준 중력가속도 대비 배수(G)를 무차원 실수로 반환한다.
pub fn gravity_ratio(
    acceleration: Quantity,
    reference: Quantity,
) -> Result<f64, QuantityError> {
    acceleration.expect_dimension(Dimension::ACCELERATION)?;
    acceleration.ratio_to(reference)
}
