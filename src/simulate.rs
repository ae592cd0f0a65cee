/// Daily tile simulation.
///
/// - `simulate_tile()`: one tile class on one day → `WaterBalance`
///
/// Routing follows the runoff decision tree: BMP treatments infiltrate
/// at their design capacity, built covers under light rain use the
/// small-storm regression, everything else uses the NRCS equation.
use crate::balance::WaterBalance;
use crate::error::Tr55Result;
use crate::forcing::DayForcing;
use crate::runoff::{runoff_nrcs, runoff_pitt, SMALL_STORM_CEILING};
use crate::tables::Tables;
use crate::tile::{LandUse, Tile};

/// Resolve the day's forcing to a (precipitation, evapotranspiration)
/// pair for this cover, both in inches.
fn resolve_forcing(
    tables: &Tables,
    forcing: DayForcing,
    land_use: LandUse,
) -> Tr55Result<(f64, f64)> {
    match forcing {
        DayForcing::Date(date) => Ok((
            tables.precipitation(date)?,
            tables.evapotranspiration(date, land_use)?,
        )),
        DayForcing::Direct { precip, et } => Ok((precip, et)),
    }
}

/// Simulate one tile class for one day.
///
/// With `pre_columbian` set, the land use is projected to its
/// pre-settlement baseline before anything else. A BMP tile therefore
/// simulates as mixed forest, not as its treatment.
///
/// Returns the day's water balance.
pub fn simulate_tile(
    tables: &Tables,
    forcing: DayForcing,
    tile: Tile,
    pre_columbian: bool,
) -> Tr55Result<WaterBalance> {
    // Step 1: project the cover when simulating pre-settlement conditions.
    let tile = if pre_columbian {
        tile.make_precolumbian()
    } else {
        tile
    };

    // Step 2: resolve the day's forcing for this cover.
    let (precip, et) = resolve_forcing(tables, forcing, tile.land_use)?;

    // Step 3: nothing moves on a dry day.
    if precip == 0.0 {
        return Ok(WaterBalance::zero());
    }

    // Step 4: BMP treatments infiltrate at their design capacity and
    // shed only the excess.
    if tile.land_use.is_bmp() {
        let infiltration = tables.bmp_infiltration(tile.soil, tile.land_use)?;
        let runoff = (precip - (et + infiltration)).max(0.0);
        return Ok(WaterBalance::new(runoff, et, infiltration));
    }

    // Step 5: pick the runoff method for the cover and storm depth.
    let runoff = if tile.land_use.is_built_type() && precip <= SMALL_STORM_CEILING {
        runoff_pitt(precip, tile.land_use)?
    } else {
        let curve_number = tables.curve_number(tile.soil, tile.land_use)?;
        runoff_nrcs(precip, curve_number)?
    };

    // Step 6: the soil takes whatever the day leaves over.
    let infiltration = (precip - (et + runoff)).max(0.0);
    Ok(WaterBalance::new(runoff, et, infiltration))
}
