use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_CIRCUMFERENCE: &str = "report.circumference";
    pub const REPORT_LATERAL_AREA: &str = "report.lateral_area";
    pub const REPORT_CYLINDER_VOLUME: &str = "report.cylinder_volume";
    pub const REPORT_SURFACE_SPEED: &str = "report.surface_speed";
    pub const REPORT_CENTRIPETAL: &str = "report.centripetal_acceleration";
    pub const REPORT_ATMOSPHERE_MASS: &str = "report.atmosphere_mass";
    pub const REPORT_SHELL_VOLUME: &str = "report.shell_volume";
    pub const REPORT_SHELL_MASS: &str = "report.shell_mass";
    pub const REPORT_DRY_MASS: &str = "report.dry_mass";
    pub const REPORT_ENGINE_ACCELERATION: &str = "report.engine_acceleration";

    pub const LAND_USE_HEADING: &str = "land_use.heading";
    pub const LAND_USE_GRID: &str = "land_use.grid";
    pub const LAND_USE_TILE_AREA: &str = "land_use.tile_area";
    pub const LAND_USE_LIVABLE_AREA: &str = "land_use.livable_area";
    pub const LAND_USE_TILE_SUFFIX: &str = "land_use.tile_suffix";

    pub const CATEGORY_RESIDENTIAL: &str = "category.residential";
    pub const CATEGORY_RECREATION: &str = "category.recreation";
    pub const CATEGORY_RESERVATION: &str = "category.reservation";
    pub const CATEGORY_AGRICULTURE: &str = "category.agriculture";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        REPORT_TITLE => "=== Cylinder Habitat Toolbox ===",
        REPORT_CIRCUMFERENCE => "원통 둘레:",
        REPORT_LATERAL_AREA => "내벽 측면적:",
        REPORT_CYLINDER_VOLUME => "내부 체적:",
        REPORT_SURFACE_SPEED => "외벽 선속도:",
        REPORT_CENTRIPETAL => "구심 가속도:",
        REPORT_ATMOSPHERE_MASS => "대기 질량:",
        REPORT_SHELL_VOLUME => "외피 체적:",
        REPORT_SHELL_MASS => "외피 질량:",
        REPORT_DRY_MASS => "건조 질량:",
        REPORT_ENGINE_ACCELERATION => "엔진 가속도:",
        LAND_USE_HEADING => "-- 토지 배분 --",
        LAND_USE_GRID => "구획 격자:",
        LAND_USE_TILE_AREA => "구획 면적:",
        LAND_USE_LIVABLE_AREA => "거주 가능 면적:",
        LAND_USE_TILE_SUFFIX => "구획",
        CATEGORY_RESIDENTIAL => "주거:",
        CATEGORY_RECREATION => "여가:",
        CATEGORY_RESERVATION => "보전:",
        CATEGORY_AGRICULTURE => "농업:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        REPORT_TITLE => "=== Cylinder Habitat Toolbox ===",
        REPORT_CIRCUMFERENCE => "Circumference:",
        REPORT_LATERAL_AREA => "Inner lateral area:",
        REPORT_CYLINDER_VOLUME => "Cylinder volume:",
        REPORT_SURFACE_SPEED => "Surface speed:",
        REPORT_CENTRIPETAL => "Centripetal acceleration:",
        REPORT_ATMOSPHERE_MASS => "Atmospheric mass:",
        REPORT_SHELL_VOLUME => "Shell volume:",
        REPORT_SHELL_MASS => "Shell mass:",
        REPORT_DRY_MASS => "Dry mass:",
        REPORT_ENGINE_ACCELERATION => "Engine acceleration:",
        LAND_USE_HEADING => "-- Land Use --",
        LAND_USE_GRID => "Subdivision grid:",
        LAND_USE_TILE_AREA => "Tile area:",
        LAND_USE_LIVABLE_AREA => "Livable area:",
        LAND_USE_TILE_SUFFIX => "tiles",
        CATEGORY_RESIDENTIAL => "Residential:",
        CATEGORY_RECREATION => "Recreation:",
        CATEGORY_RESERVATION => "Reservation:",
        CATEGORY_AGRICULTURE => "Agriculture:",
        _ => return None,
    })
}
