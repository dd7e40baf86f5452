use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::conversion::{self, ConversionError};
use crate::habitat::land_use::LandUseRatios;
use crate::materials;
use crate::quantity::{Quantity, QuantityKind};
use crate::units::*;

/// TOML에 기록되는 값+단위 쌍. 단위 문자열은 conversion 모듈이 해석한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityEntry {
    pub value: f64,
    pub unit: String,
}

impl QuantityEntry {
    fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }

    fn resolve(&self, kind: QuantityKind) -> Result<Quantity, ConversionError> {
        conversion::parse_quantity(kind, self.value, &self.unit)
    }
}

/// 환경 상수 (중력 기준, 내부 대기).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentSection {
    pub earth_acceleration: QuantityEntry,
    pub air_density: QuantityEntry,
}

/// 원통 구조 치수와 외피 재료.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureSection {
    pub cylinder_length: QuantityEntry,
    pub cylinder_radius: QuantityEntry,
    pub shell_thickness: QuantityEntry,
    pub shell_density: QuantityEntry,
    /// 재료 코드를 지정하면 내장 재료 테이블의 밀도가 shell_density를 대체한다.
    pub shell_material: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationSection {
    pub rotation_rate: QuantityEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropulsionSection {
    pub engine_thrust: QuantityEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandUseSection {
    pub subdivision_side: QuantityEntry,
    pub ratios: LandUseRatios,
}

/// 보고서에 사용할 물리량별 표시 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub length: LengthUnit,
    pub area: AreaUnit,
    pub volume: VolumeUnit,
    pub velocity: VelocityUnit,
    pub acceleration: AccelerationUnit,
    pub mass: MassUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            length: LengthUnit::Kilometer,
            area: AreaUnit::SquareKilometer,
            volume: VolumeUnit::CubicKilometer,
            velocity: VelocityUnit::MeterPerSecond,
            acceleration: AccelerationUnit::MeterPerSecondSquared,
            mass: MassUnit::Megaton,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 출력 언어 코드 (ko/en). 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    pub environment: EnvironmentSection,
    pub structure: StructureSection,
    pub rotation: RotationSection,
    pub propulsion: PropulsionSection,
    pub land_use: LandUseSection,
    #[serde(default)]
    pub display: DisplayUnits,
}

impl Default for Config {
    /// 기준 거주구: 길이 16 km, 반경 3 km, 시간당 30회전, 알루미늄 외피 50 m.
    fn default() -> Self {
        Self {
            language: None,
            environment: EnvironmentSection {
                earth_acceleration: QuantityEntry::new(9.81, "m/s2"),
                air_density: QuantityEntry::new(1.2041, "kg/m3"),
            },
            structure: StructureSection {
                cylinder_length: QuantityEntry::new(16.0, "km"),
                cylinder_radius: QuantityEntry::new(3.0, "km"),
                shell_thickness: QuantityEntry::new(50.0, "m"),
                shell_density: QuantityEntry::new(2700.0, "kg/m3"),
                shell_material: None,
            },
            rotation: RotationSection {
                rotation_rate: QuantityEntry::new(30.0, "1/h"),
            },
            propulsion: PropulsionSection {
                engine_thrust: QuantityEntry::new(3.0e10, "N"),
            },
            land_use: LandUseSection {
                subdivision_side: QuantityEntry::new(2.0, "km"),
                ratios: LandUseRatios {
                    residential: 0.2,
                    recreation: 0.1,
                    reservation: 0.4,
                    agriculture: 0.3,
                },
            },
            display: DisplayUnits::default(),
        }
    }
}

/// 설정 로드/저장/해석 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 단위 문자열 해석 오류
    Unit(ConversionError),
    /// 재료 테이블에 없는 재료 코드
    UnknownMaterial(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Unit(e) => write!(f, "설정 단위 오류: {e}"),
            ConfigError::UnknownMaterial(code) => write!(f, "알 수 없는 재료: {code}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl From<ConversionError> for ConfigError {
    fn from(value: ConversionError) -> Self {
        ConfigError::Unit(value)
    }
}

const DEFAULT_CONFIG_FILE: &str = "habitat.toml";

/// 설정 파일을 로드한다.
///
/// 경로를 명시하면 해당 파일이 반드시 있어야 한다. 명시하지 않으면
/// habitat.toml을 찾고, 없으면 기준 거주구 설정을 생성해 기록한 뒤 사용한다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            let cfg: Config = toml::from_str(&content)?;
            Ok(cfg)
        }
        None => {
            let p = Path::new(DEFAULT_CONFIG_FILE);
            if p.exists() {
                let content = fs::read_to_string(p)?;
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            } else {
                let cfg = Config::default();
                cfg.save(p)?;
                Ok(cfg)
            }
        }
    }
}

impl Config {
    /// 설정을 지정된 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 모든 값+단위 항목을 `Quantity`로 해석해 계산 입력을 만든다.
    ///
    /// 잘못된 단위 문자열이나 알 수 없는 재료 코드는 여기서 즉시 실패한다.
    pub fn resolve(&self) -> Result<HabitatParameters, ConfigError> {
        let shell_density = match &self.structure.shell_material {
            Some(code) => materials::density_of(code)
                .ok_or_else(|| ConfigError::UnknownMaterial(code.clone()))?,
            None => self
                .structure
                .shell_density
                .resolve(QuantityKind::Density)?,
        };
        Ok(HabitatParameters {
            earth_acceleration: self
                .environment
                .earth_acceleration
                .resolve(QuantityKind::Acceleration)?,
            air_density: self.environment.air_density.resolve(QuantityKind::Density)?,
            shell_density,
            cylinder_length: self
                .structure
                .cylinder_length
                .resolve(QuantityKind::Length)?,
            cylinder_radius: self
                .structure
                .cylinder_radius
                .resolve(QuantityKind::Length)?,
            shell_thickness: self
                .structure
                .shell_thickness
                .resolve(QuantityKind::Length)?,
            rotation_rate: self
                .rotation
                .rotation_rate
                .resolve(QuantityKind::RotationRate)?,
            engine_thrust: self
                .propulsion
                .engine_thrust
                .resolve(QuantityKind::Force)?,
            subdivision_side: self
                .land_use
                .subdivision_side
                .resolve(QuantityKind::Length)?,
            ratios: self.land_use.ratios.clone(),
            display: self.display.clone(),
        })
    }
}

/// 단위 해석이 끝난 계산 입력. 계산 전체는 이 값의 순수 함수이다.
#[derive(Debug, Clone)]
pub struct HabitatParameters {
    pub earth_acceleration: Quantity,
    pub air_density: Quantity,
    pub shell_density: Quantity,
    pub cylinder_length: Quantity,
    pub cylinder_radius: Quantity,
    pub shell_thickness: Quantity,
    pub rotation_rate: Quantity,
    pub engine_thrust: Quantity,
    pub subdivision_side: Quantity,
    pub ratios: LandUseRatios,
    pub display: DisplayUnits,
}
