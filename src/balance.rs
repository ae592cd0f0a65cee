/// Daily water balance of a tile or an aggregated cell population.
///
/// The three components partition the day's precipitation. When the
/// rain covers the day's demands they sum to the precipitation depth;
/// on light-rain days the clamping at zero can leave the total above
/// it (a BMP still reports its full design infiltration, for example).
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterBalance {
    pub runoff: f64,       // surface runoff [in]
    pub et: f64,           // evapotranspiration [in]
    pub infiltration: f64, // infiltration into the soil [in]
}

impl WaterBalance {
    pub fn new(runoff: f64, et: f64, infiltration: f64) -> Self {
        Self {
            runoff,
            et,
            infiltration,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Total depth accounted for by the three components.
    pub fn total(&self) -> f64 {
        self.runoff + self.et + self.infiltration
    }

    /// Accumulate `other` weighted by `weight`, componentwise.
    pub fn add_scaled(&mut self, other: &WaterBalance, weight: f64) {
        self.runoff += weight * other.runoff;
        self.et += weight * other.et;
        self.infiltration += weight * other.infiltration;
    }
}
