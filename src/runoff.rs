/// Runoff process functions.
///
/// Two methods cover the runoff branch: the NRCS curve-number equation
/// from TR-55 for general covers and larger storms, and the Pitt
/// small-storm regression for built covers under light rain. Both
/// return a runoff depth in inches that never exceeds the driving
/// precipitation.
use crate::error::{Tr55Error, Tr55Result};
use crate::tile::LandUse;

/// Largest precipitation depth (inches) the small-storm regression is
/// fitted for. Built covers above this depth fall back to the NRCS
/// equation.
pub const SMALL_STORM_CEILING: f64 = 2.0;

/// Fitted small-storm runoff depth (inches) from a fully impervious
/// surface, cubic in precipitation.
fn impervious_depth(precip: f64) -> f64 {
    let p2 = precip * precip;
    let p3 = p2 * precip;
    3.638858398e-2 * p3 - 1.243464039e-1 * p2 + 1.295682223e-1 * precip + 9.375868043e-1
}

/// Fitted small-storm runoff depth (inches) from urban grass, quartic
/// in precipitation. Dips below zero for very light rain.
fn urban_grass_depth(precip: f64) -> f64 {
    let p2 = precip * precip;
    let p3 = p2 * precip;
    let p4 = p2 * p2;
    -2.235170859e-2 * p4 + 1.70228067e-1 * p3 - 3.971810782e-1 * p2 + 3.887275538e-1 * precip
        - 2.289321859e-2
}

/// NRCS curve-number runoff (the TR-55 equation).
///
/// S = 1000/CN - 10, Ia = 0.2 S, Q = (P - Ia)^2 / (P - Ia + S).
///
/// Returns the runoff depth in inches, capped at the precipitation.
/// Curve numbers outside (0, 100] are degenerate and rejected.
pub fn runoff_nrcs(precip: f64, curve_number: f64) -> Tr55Result<f64> {
    if !(curve_number > 0.0 && curve_number <= 100.0) {
        return Err(Tr55Error::domain("curve number", curve_number));
    }
    if precip <= 0.0 {
        return Ok(0.0);
    }

    let potential_retention = 1000.0 / curve_number - 10.0;
    let initial_abstraction = 0.2 * potential_retention;
    let effective_precip = precip - initial_abstraction;
    let runoff = effective_precip * effective_precip / (effective_precip + potential_retention);

    Ok(runoff.min(precip))
}

/// Pitt small-storm runoff for a built cover.
///
/// Each built land use blends the impervious and urban-grass regression
/// curves in fixed proportions. The blended depth is clamped to
/// [0, precipitation].
///
/// Only applies up to [`SMALL_STORM_CEILING`]; deeper storms are a
/// domain error, and land uses without regression coefficients are
/// unsupported.
pub fn runoff_pitt(precip: f64, land_use: LandUse) -> Tr55Result<f64> {
    if precip > SMALL_STORM_CEILING {
        return Err(Tr55Error::domain("small-storm precipitation", precip));
    }
    if precip <= 0.0 {
        return Ok(0.0);
    }

    let impervious = impervious_depth(precip);
    let urban_grass = urban_grass_depth(precip);

    let depth = match land_use {
        LandUse::Water
        | LandUse::Commercial
        | LandUse::Industrial
        | LandUse::Transportation => impervious,
        LandUse::LiResidential => 0.20 * impervious + 0.80 * urban_grass,
        LandUse::HiResidential => 0.65 * impervious + 0.35 * urban_grass,
        LandUse::UrbanGrass => urban_grass,
        other => return Err(Tr55Error::UnsupportedLandUse(other)),
    };

    Ok(depth.clamp(0.0, precip))
}
