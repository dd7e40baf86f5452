use std::io::Write;

use crate::app::AppError;
use crate::config::HabitatParameters;
use crate::habitat::land_use::{self, LandUseCategory};
use crate::habitat::{geometry, mass_budget, propulsion, rotation};
use crate::i18n::{keys, Translator};

/// 파생 물리량 보고서를 단계 순서대로 계산하고 기록한다.
///
/// 각 줄은 계산 직후 바로 기록되므로, 뒤 단계에서 오류가 나더라도 이미 출력된
/// 앞 단계 줄은 그대로 남는다. 토지 배분은 비율 합 검사를 통과하기 전에는
/// 아무 줄도 만들지 않는다.
pub fn render<W: Write>(
    params: &HabitatParameters,
    tr: &Translator,
    out: &mut W,
) -> Result<(), AppError> {
    let display = &params.display;

    writeln!(out, "{}", tr.t(keys::REPORT_TITLE))?;

    // 기하 단계
    let circumference = geometry::circumference(params.cylinder_radius)?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::REPORT_CIRCUMFERENCE),
        circumference.to_length(display.length)?,
        display.length.symbol()
    )?;

    let lateral_area =
        geometry::lateral_surface_area(params.cylinder_radius, params.cylinder_length)?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::REPORT_LATERAL_AREA),
        lateral_area.to_area(display.area)?,
        display.area.symbol()
    )?;

    let cylinder_volume =
        geometry::solid_cylinder_volume(params.cylinder_radius, params.cylinder_length)?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::REPORT_CYLINDER_VOLUME),
        cylinder_volume.to_volume(display.volume)?,
        display.volume.symbol()
    )?;

    // 회전 단계
    let surface_speed = rotation::surface_speed(circumference, params.rotation_rate)?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::REPORT_SURFACE_SPEED),
        surface_speed.to_velocity(display.velocity)?,
        display.velocity.symbol()
    )?;

    let centripetal = rotation::centripetal_acceleration(surface_speed, params.cylinder_radius)?;
    let centripetal_g = rotation::gravity_ratio(centripetal, params.earth_acceleration)?;
    writeln!(
        out,
        "{} {:.5} {} ({:.5} G)",
        tr.t(keys::REPORT_CENTRIPETAL),
        centripetal.to_acceleration(display.acceleration)?,
        display.acceleration.symbol(),
        centripetal_g
    )?;

    // 질량 단계
    let atmosphere_mass = mass_budget::atmospheric_mass(cylinder_volume, params.air_density)?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::REPORT_ATMOSPHERE_MASS),
        atmosphere_mass.to_mass(display.mass)?,
        display.mass.symbol()
    )?;

    let outer_radius = params.cylinder_radius.try_add(params.shell_thickness)?;
    let shell_volume = geometry::hollow_cylinder_volume(
        params.cylinder_radius,
        outer_radius,
        params.cylinder_length,
    )?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::REPORT_SHELL_VOLUME),
        shell_volume.to_volume(display.volume)?,
        display.volume.symbol()
    )?;

    let shell_mass = mass_budget::shell_mass(shell_volume, params.shell_density)?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::REPORT_SHELL_MASS),
        shell_mass.to_mass(display.mass)?,
        display.mass.symbol()
    )?;

    let dry_mass = mass_budget::dry_mass(shell_mass, atmosphere_mass)?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::REPORT_DRY_MASS),
        dry_mass.to_mass(display.mass)?,
        display.mass.symbol()
    )?;

    // 추진 단계
    let engine_acceleration = propulsion::engine_acceleration(params.engine_thrust, dry_mass)?;
    let engine_g = rotation::gravity_ratio(engine_acceleration, params.earth_acceleration)?;
    writeln!(
        out,
        "{} {:.10} {} ({:.10} G)",
        tr.t(keys::REPORT_ENGINE_ACCELERATION),
        engine_acceleration.to_acceleration(display.acceleration)?,
        display.acceleration.symbol(),
        engine_g
    )?;

    // 토지 배분 단계. 비율 합 검사가 먼저다.
    params.ratios.validate()?;
    writeln!(out, "{}", tr.t(keys::LAND_USE_HEADING))?;

    let grid = land_use::subdivide(
        params.cylinder_length,
        circumference,
        params.subdivision_side,
    )?;
    writeln!(
        out,
        "{} {} × {} = {}",
        tr.t(keys::LAND_USE_GRID),
        grid.along_length,
        grid.around_circumference,
        grid.total()
    )?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::LAND_USE_TILE_AREA),
        grid.tile_area.to_area(display.area)?,
        display.area.symbol()
    )?;
    writeln!(
        out,
        "{} {:.2} {}",
        tr.t(keys::LAND_USE_LIVABLE_AREA),
        grid.livable_area().to_area(display.area)?,
        display.area.symbol()
    )?;

    for allotment in land_use::allocate(&grid, &params.ratios)? {
        writeln!(
            out,
            "{} {:.2} {} ({} {})",
            tr.t(category_key(allotment.category)),
            allotment.area.to_area(display.area)?,
            display.area.symbol(),
            allotment.tile_count,
            tr.t(keys::LAND_USE_TILE_SUFFIX)
        )?;
    }

    Ok(())
}

fn category_key(category: LandUseCategory) -> &'static str {
    match category {
        LandUseCategory::Residential => keys::CATEGORY_RESIDENTIAL,
        LandUseCategory::Recreation => keys::CATEGORY_RECREATION,
        LandUseCategory::Reservation => keys::CATEGORY_RESERVATION,
        LandUseCategory::Agriculture => keys::CATEGORY_AGRICULTURE,
    }
}
