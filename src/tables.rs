/// Built-in reference tables.
///
/// All hydrologic data the model consumes lives here: curve numbers and
/// evapotranspiration coefficients per land use, BMP infiltration
/// capacities per soil group, event-mean pollutant concentrations per
/// NLCD class, and the sample-year precipitation distribution. The raw
/// rows are compiled in; [`Tables::builtin`] assembles them into keyed
/// maps once and hands out a shared reference.
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Tr55Error, Tr55Result};
use crate::tile::LandUse;

/// Pollutants with tabulated event-mean concentrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    /// Total nitrogen.
    Tn,
    /// Total phosphorus.
    Tp,
    /// Biochemical oxygen demand.
    Bod,
    /// Total suspended solids.
    Tss,
}

impl Pollutant {
    pub const ALL: [Pollutant; 4] = [Pollutant::Tn, Pollutant::Tp, Pollutant::Bod, Pollutant::Tss];

    /// Column index into a pollutant-load row.
    pub(crate) fn index(self) -> usize {
        match self {
            Pollutant::Tn => 0,
            Pollutant::Tp => 1,
            Pollutant::Bod => 2,
            Pollutant::Tss => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pollutant::Tn => "tn",
            Pollutant::Tp => "tp",
            Pollutant::Bod => "bod",
            Pollutant::Tss => "tss",
        }
    }
}

impl FromStr for Pollutant {
    type Err = Tr55Error;

    fn from_str(s: &str) -> Tr55Result<Self> {
        match s {
            "tn" => Ok(Pollutant::Tn),
            "tp" => Ok(Pollutant::Tp),
            "bod" => Ok(Pollutant::Bod),
            "tss" => Ok(Pollutant::Tss),
            other => Err(Tr55Error::lookup("pollutant", other)),
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Year the sample precipitation and growing-season tables describe.
/// Not a leap year, so a simulated Feb 29 has no tabulated forcing.
pub const REFERENCE_YEAR: i32 = 2001;

/// Days in the reference water year.
pub const DAYS_PER_YEAR: i64 = 365;

/// Month and day the water year begins.
pub const WATER_YEAR_START: (u32, u32) = (10, 15);

/// First day of the growing season (inclusive).
pub const GROWING_SEASON_START: (u32, u32) = (4, 15);

/// Last day of the growing season (inclusive).
pub const GROWING_SEASON_END: (u32, u32) = (10, 14);

/// Reference evapotranspiration on a growing-season day (in/day).
/// Outside the growing season the reference rate is zero.
pub const GROWING_SEASON_ET_MAX: f64 = 0.207;

/// Sample-year precipitation as run-length-encoded daily depths, ordered
/// from driest to wettest: `(number of days, inches on each such day)`.
/// The runs cover the whole water year; day offsets from the water-year
/// start index into this sequence.
const SAMPLE_YEAR_PRECIP_RUNS: [(u32, f64); 14] = [
    (261, 0.00),
    (20, 0.05),
    (20, 0.10),
    (15, 0.20),
    (12, 0.30),
    (10, 0.40),
    (8, 0.50),
    (6, 0.75),
    (5, 1.00),
    (3, 1.50),
    (2, 2.00),
    (1, 2.50),
    (1, 3.50),
    (1, 5.00),
];

/// Crop/cover coefficient scaling reference ET down to actual ET.
const ET_COEFFICIENTS: [(LandUse, f64); 21] = [
    (LandUse::Water, 0.7),
    (LandUse::LiResidential, 0.42),
    (LandUse::HiResidential, 0.18),
    (LandUse::Commercial, 0.06),
    (LandUse::Industrial, 0.06),
    (LandUse::Transportation, 0.06),
    (LandUse::UrbanGrass, 0.6),
    (LandUse::Rock, 0.0),
    (LandUse::SandyAreas, 0.36),
    (LandUse::DeciduousForest, 0.7),
    (LandUse::EvergreenForest, 0.7),
    (LandUse::MixedForest, 0.7),
    (LandUse::GrasslandHerbaceous, 0.6),
    (LandUse::Pasture, 0.6),
    (LandUse::Cultivated, 0.9),
    (LandUse::WoodyWetland, 1.0),
    (LandUse::HerbaceousWetland, 1.0),
    (LandUse::GreenRoof, 0.7),
    (LandUse::PorousPaving, 0.06),
    (LandUse::RainGarden, 0.7),
    (LandUse::InfiltrationTrench, 0.1),
];

/// NRCS curve numbers per land use, one column per soil group A-D.
/// BMP treatments have no curve number; their runoff response comes from
/// the infiltration table instead.
const CURVE_NUMBERS: [(LandUse, [f64; 4]); 17] = [
    (LandUse::Water, [100.0, 100.0, 100.0, 100.0]),
    (LandUse::LiResidential, [51.0, 68.0, 79.0, 84.0]),
    (LandUse::HiResidential, [77.0, 85.0, 90.0, 92.0]),
    (LandUse::Commercial, [89.0, 92.0, 94.0, 95.0]),
    (LandUse::Industrial, [81.0, 88.0, 91.0, 93.0]),
    (LandUse::Transportation, [98.0, 98.0, 98.0, 98.0]),
    (LandUse::UrbanGrass, [39.0, 61.0, 74.0, 80.0]),
    (LandUse::Rock, [77.0, 86.0, 91.0, 94.0]),
    (LandUse::SandyAreas, [63.0, 77.0, 85.0, 88.0]),
    (LandUse::DeciduousForest, [30.0, 55.0, 70.0, 77.0]),
    (LandUse::EvergreenForest, [30.0, 55.0, 70.0, 77.0]),
    (LandUse::MixedForest, [30.0, 55.0, 70.0, 77.0]),
    (LandUse::GrasslandHerbaceous, [30.0, 58.0, 71.0, 78.0]),
    (LandUse::Pasture, [49.0, 69.0, 79.0, 84.0]),
    (LandUse::Cultivated, [67.0, 78.0, 85.0, 89.0]),
    (LandUse::WoodyWetland, [30.0, 55.0, 70.0, 77.0]),
    (LandUse::HerbaceousWetland, [30.0, 58.0, 71.0, 78.0]),
];

/// Design infiltration capacity of each BMP (in/day), one column per
/// soil group A-D.
const BMP_INFILTRATION: [(LandUse, [f64; 4]); 4] = [
    (LandUse::GreenRoof, [1.6, 1.6, 1.6, 1.6]),
    (LandUse::PorousPaving, [7.73, 4.13, 1.73, 0.27]),
    (LandUse::RainGarden, [1.2, 0.6, 0.2, 0.1]),
    (LandUse::InfiltrationTrench, [2.4, 1.8, 1.4, 1.0]),
];

/// Event-mean pollutant concentrations (mg/l) keyed by NLCD class code.
/// Columns follow [`Pollutant::ALL`]: tn, tp, bod, tss.
const POLLUTANT_LOADS: [(u32, [f64; 4]); 16] = [
    (11, [0.0, 0.0, 0.0, 0.0]),
    (12, [0.0, 0.0, 0.0, 0.0]),
    (21, [2.26, 0.32, 5.7, 48.3]),
    (22, [2.58, 0.38, 8.8, 67.2]),
    (23, [2.90, 0.44, 11.3, 81.0]),
    (24, [3.26, 0.49, 13.1, 92.4]),
    (31, [0.96, 0.13, 0.0, 70.0]),
    (41, [1.05, 0.11, 0.5, 39.0]),
    (42, [1.05, 0.11, 0.5, 39.0]),
    (43, [1.05, 0.11, 0.5, 39.0]),
    (52, [0.51, 0.08, 0.5, 39.0]),
    (71, [2.30, 0.22, 0.5, 48.8]),
    (81, [2.74, 0.76, 13.0, 145.0]),
    (82, [2.68, 0.50, 7.0, 216.0]),
    (90, [0.19, 0.006, 0.5, 10.2]),
    (95, [0.19, 0.006, 0.5, 10.2]),
];

/// Assembled reference tables.
///
/// Everything is keyed for direct lookup; the maps are ordered so
/// iteration (reports, the demo binary) is deterministic. Normal use
/// goes through [`Tables::builtin`]; tests clone and patch entries to
/// exercise edge cases.
#[derive(Debug, Clone)]
pub struct Tables {
    // Sample-year calendar: the non-leap year the tables describe, the
    // water-year start, and the growing-season window (bounds inclusive,
    // as month/day pairs).
    pub reference_year: i32,
    pub water_year_start: (u32, u32),
    pub growing_season_start: (u32, u32),
    pub growing_season_end: (u32, u32),
    pub growing_season_et_max: f64,
    pub et_coefficients: BTreeMap<LandUse, f64>,
    pub curve_numbers: BTreeMap<LandUse, [f64; 4]>,
    pub bmp_infiltration: BTreeMap<LandUse, [f64; 4]>,
    pub pollutant_loads: BTreeMap<u32, [f64; 4]>,
    pub precip_runs: Vec<(u32, f64)>,
}

static BUILTIN: LazyLock<Tables> = LazyLock::new(build_builtin);

fn build_builtin() -> Tables {
    Tables {
        reference_year: REFERENCE_YEAR,
        water_year_start: WATER_YEAR_START,
        growing_season_start: GROWING_SEASON_START,
        growing_season_end: GROWING_SEASON_END,
        growing_season_et_max: GROWING_SEASON_ET_MAX,
        et_coefficients: ET_COEFFICIENTS.into_iter().collect(),
        curve_numbers: CURVE_NUMBERS.into_iter().collect(),
        bmp_infiltration: BMP_INFILTRATION.into_iter().collect(),
        pollutant_loads: POLLUTANT_LOADS.into_iter().collect(),
        precip_runs: SAMPLE_YEAR_PRECIP_RUNS.to_vec(),
    }
}

impl Tables {
    /// Shared instance of the compiled-in tables.
    pub fn builtin() -> &'static Tables {
        &BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{BMPS, BUILT_TYPES};

    #[test]
    fn precip_runs_cover_the_water_year() {
        let days: u32 = SAMPLE_YEAR_PRECIP_RUNS.iter().map(|(n, _)| n).sum();
        assert_eq!(days as i64, DAYS_PER_YEAR);
    }

    #[test]
    fn precip_runs_are_ordered_dry_to_wet() {
        let depths: Vec<f64> = SAMPLE_YEAR_PRECIP_RUNS.iter().map(|&(_, p)| p).collect();
        for pair in depths.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn every_land_use_has_an_et_coefficient() {
        let tables = Tables::builtin();
        for lu in LandUse::ALL {
            let kc = tables.et_coefficients.get(&lu);
            assert!(kc.is_some(), "missing ET coefficient for {lu}");
            let kc = kc.unwrap();
            assert!((0.0..=1.0).contains(kc), "{lu} coefficient {kc} out of range");
        }
    }

    #[test]
    fn curve_numbers_cover_exactly_the_non_bmp_land_uses() {
        let tables = Tables::builtin();
        for lu in LandUse::ALL {
            let row = tables.curve_numbers.get(&lu);
            if lu.is_bmp() {
                assert!(row.is_none(), "unexpected curve numbers for BMP {lu}");
            } else {
                let row = row.unwrap_or_else(|| panic!("missing curve numbers for {lu}"));
                for cn in row {
                    assert!(*cn > 0.0 && *cn <= 100.0, "{lu} curve number {cn}");
                }
            }
        }
    }

    #[test]
    fn curve_numbers_do_not_decrease_toward_clay() {
        let tables = Tables::builtin();
        for (lu, row) in &tables.curve_numbers {
            for pair in row.windows(2) {
                assert!(pair[0] <= pair[1], "{lu} row not monotone: {row:?}");
            }
        }
    }

    #[test]
    fn every_bmp_has_infiltration_capacities() {
        let tables = Tables::builtin();
        for bmp in BMPS {
            let row = tables
                .bmp_infiltration
                .get(&bmp)
                .unwrap_or_else(|| panic!("missing infiltration for {bmp}"));
            for rate in row {
                assert!(*rate > 0.0);
            }
        }
        for lu in BUILT_TYPES {
            assert!(tables.bmp_infiltration.get(&lu).is_none());
        }
    }

    #[test]
    fn pollutant_round_trips_through_strings() {
        for p in Pollutant::ALL {
            assert_eq!(p.as_str().parse::<Pollutant>().unwrap(), p);
        }
        assert_eq!(
            "ph".parse::<Pollutant>().unwrap_err(),
            Tr55Error::lookup("pollutant", "ph")
        );
    }

    #[test]
    fn pollutant_loads_cover_the_nlcd_classes() {
        let tables = Tables::builtin();
        assert_eq!(tables.pollutant_loads.len(), 16);
        // Water and ice carry no load at all.
        assert_eq!(tables.pollutant_loads[&11], [0.0; 4]);
        assert_eq!(tables.pollutant_loads[&12], [0.0; 4]);
        // Row crops shed the most sediment.
        let tss = Pollutant::Tss.index();
        let max = tables
            .pollutant_loads
            .values()
            .map(|row| row[tss])
            .fold(0.0, f64::max);
        assert_eq!(max, tables.pollutant_loads[&82][tss]);
    }
}
