use std::io;

use crate::config::Config;
use crate::habitat::geometry::GeometryError;
use crate::habitat::land_use::LandUseError;
use crate::i18n::Translator;
use crate::quantity::QuantityError;
use crate::report;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/출력 입출력 오류
    Io(std::io::Error),
    /// 설정 로드/해석 오류
    Config(crate::config::ConfigError),
    /// 물리량 차원/나눗셈 오류
    Quantity(QuantityError),
    /// 기하 계산 오류
    Geometry(GeometryError),
    /// 토지 배분 오류
    LandUse(LandUseError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Quantity(e) => write!(f, "물리량 오류: {e}"),
            AppError::Geometry(e) => write!(f, "기하 계산 오류: {e}"),
            AppError::LandUse(e) => write!(f, "토지 배분 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<QuantityError> for AppError {
    fn from(value: QuantityError) -> Self {
        AppError::Quantity(value)
    }
}

impl From<GeometryError> for AppError {
    fn from(value: GeometryError) -> Self {
        AppError::Geometry(value)
    }
}

impl From<LandUseError> for AppError {
    fn from(value: LandUseError) -> Self {
        AppError::LandUse(value)
    }
}

/// 설정을 계산 입력으로 해석한 뒤 보고서를 표준 출력에 기록한다.
pub fn run(config: &Config, tr: &Translator) -> Result<(), AppError> {
    let params = config.resolve()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::render(&params, tr, &mut out)
}
