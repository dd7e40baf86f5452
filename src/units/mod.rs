//! 단위 정의 및 변환 모듈 모음. 각 모듈은 기준 단위 대비 배율 테이블을 가진다.

pub mod acceleration;
pub mod area;
pub mod density;
pub mod force;
pub mod length;
pub mod mass;
pub mod rotation_rate;
pub mod velocity;
pub mod volume;

pub use acceleration::{convert_acceleration, AccelerationUnit};
pub use area::{convert_area, AreaUnit};
pub use density::{convert_density, DensityUnit};
pub use force::{convert_force, ForceUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use rotation_rate::{convert_rotation_rate, RotationRateUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};
