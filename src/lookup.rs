/// Query layer over the reference tables.
///
/// Dates are folded onto the non-leap reference year by month and day,
/// then measured as an offset from the water-year start to index the
/// precipitation runs. Every miss reports which table was consulted and
/// with which key.
use chrono::{Datelike, NaiveDate};

use crate::error::{Tr55Error, Tr55Result};
use crate::tables::{Pollutant, Tables, DAYS_PER_YEAR};
use crate::tile::{LandUse, Soil};

impl Tables {
    /// Fold a calendar date onto the reference year. Fails for Feb 29,
    /// which has no counterpart there.
    fn reference_date(&self, date: NaiveDate) -> Tr55Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.reference_year, date.month(), date.day())
            .ok_or_else(|| Tr55Error::lookup("sample year", date.to_string()))
    }

    /// Day offset of `date` from the water-year start, in `0..365`.
    fn water_year_day(&self, date: NaiveDate) -> Tr55Result<i64> {
        let folded = self.reference_date(date)?;
        let (month, day) = self.water_year_start;
        let start = NaiveDate::from_ymd_opt(self.reference_year, month, day)
            .expect("water-year start is a valid date");
        Ok((folded - start).num_days().rem_euclid(DAYS_PER_YEAR))
    }

    fn is_growing_season(&self, date: NaiveDate) -> bool {
        let md = (date.month(), date.day());
        self.growing_season_start <= md && md <= self.growing_season_end
    }

    /// Sample-year precipitation depth for this date (inches).
    pub fn precipitation(&self, date: NaiveDate) -> Tr55Result<f64> {
        let mut day = self.water_year_day(date)?;
        for &(len, depth) in &self.precip_runs {
            if day < i64::from(len) {
                return Ok(depth);
            }
            day -= i64::from(len);
        }
        Err(Tr55Error::lookup("sample year", date.to_string()))
    }

    /// Reference evapotranspiration for this date (in/day): the
    /// growing-season maximum inside the season, zero outside it.
    pub fn reference_et(&self, date: NaiveDate) -> Tr55Result<f64> {
        let folded = self.reference_date(date)?;
        Ok(if self.is_growing_season(folded) {
            self.growing_season_et_max
        } else {
            0.0
        })
    }

    /// Cover coefficient scaling reference ET for this land use.
    pub fn et_coefficient(&self, land_use: LandUse) -> Tr55Result<f64> {
        self.et_coefficients
            .get(&land_use)
            .copied()
            .ok_or_else(|| Tr55Error::lookup("evapotranspiration coefficient", land_use))
    }

    /// Actual evapotranspiration for this date and cover (inches).
    pub fn evapotranspiration(&self, date: NaiveDate, land_use: LandUse) -> Tr55Result<f64> {
        Ok(self.et_coefficient(land_use)? * self.reference_et(date)?)
    }

    /// NRCS curve number for this soil group and land use.
    pub fn curve_number(&self, soil: Soil, land_use: LandUse) -> Tr55Result<f64> {
        self.curve_numbers
            .get(&land_use)
            .map(|row| row[soil.index()])
            .ok_or_else(|| Tr55Error::lookup("curve number", land_use))
    }

    /// Design infiltration capacity of a BMP on this soil group
    /// (in/day).
    pub fn bmp_infiltration(&self, soil: Soil, bmp: LandUse) -> Tr55Result<f64> {
        self.bmp_infiltration
            .get(&bmp)
            .map(|row| row[soil.index()])
            .ok_or_else(|| Tr55Error::lookup("BMP infiltration", bmp))
    }

    /// Event-mean concentration of a pollutant for an NLCD class
    /// (mg/l).
    pub fn pollutant_load(&self, nlcd: u32, pollutant: Pollutant) -> Tr55Result<f64> {
        self.pollutant_loads
            .get(&nlcd)
            .map(|row| row[pollutant.index()])
            .ok_or_else(|| Tr55Error::lookup("pollutant load", nlcd))
    }
}
