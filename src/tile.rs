/// Tile vocabulary: hydrologic soil groups, land uses, and the
/// soil/land-use pairs the census distributes cells over.
///
/// Identifiers follow the reference tables exactly ("a".."d" soil groups,
/// CamelCase/underscore land-use names). A tile is exchanged with external
/// services as the colon-delimited string `"<soil>:<land_use>"`.
use std::fmt;
use std::str::FromStr;

use crate::error::{Tr55Error, Tr55Result};

/// Hydrologic soil group, per the NRCS A-D classification.
///
/// A drains fastest (sand), D slowest (clay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Soil {
    A,
    B,
    C,
    D,
}

impl Soil {
    pub const ALL: [Soil; 4] = [Soil::A, Soil::B, Soil::C, Soil::D];

    /// Column index into the per-soil reference table rows.
    pub(crate) fn index(self) -> usize {
        match self {
            Soil::A => 0,
            Soil::B => 1,
            Soil::C => 2,
            Soil::D => 3,
        }
    }

    /// External identifier, lower-case as the census uses it.
    pub fn as_str(self) -> &'static str {
        match self {
            Soil::A => "a",
            Soil::B => "b",
            Soil::C => "c",
            Soil::D => "d",
        }
    }
}

impl FromStr for Soil {
    type Err = Tr55Error;

    fn from_str(s: &str) -> Tr55Result<Self> {
        match s {
            "a" => Ok(Soil::A),
            "b" => Ok(Soil::B),
            "c" => Ok(Soil::C),
            "d" => Ok(Soil::D),
            other => Err(Tr55Error::lookup("soil type", other)),
        }
    }
}

impl fmt::Display for Soil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Land cover / land use classes of the reference tables.
///
/// Three families share the enum: natural covers, built covers, and the
/// engineered BMP treatments. `Water` counts as a built type for runoff
/// dispatch because open water responds like an impervious surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LandUse {
    Water,
    LiResidential,
    HiResidential,
    Commercial,
    Industrial,
    Transportation,
    UrbanGrass,
    Rock,
    SandyAreas,
    DeciduousForest,
    EvergreenForest,
    MixedForest,
    GrasslandHerbaceous,
    Pasture,
    Cultivated,
    WoodyWetland,
    HerbaceousWetland,
    GreenRoof,
    PorousPaving,
    RainGarden,
    InfiltrationTrench,
}

/// Land uses that respond as built surfaces (small-storm regression
/// candidates when precipitation is at or below the method ceiling).
pub const BUILT_TYPES: [LandUse; 7] = [
    LandUse::Water,
    LandUse::LiResidential,
    LandUse::HiResidential,
    LandUse::Commercial,
    LandUse::Industrial,
    LandUse::Transportation,
    LandUse::UrbanGrass,
];

/// Engineered best-management-practice treatments.
pub const BMPS: [LandUse; 4] = [
    LandUse::GreenRoof,
    LandUse::PorousPaving,
    LandUse::RainGarden,
    LandUse::InfiltrationTrench,
];

/// BMPs that replace the ground surface over their whole footprint, as
/// opposed to treatments that receive run-on from elsewhere.
pub const AREA_BMPS: [LandUse; 2] = [LandUse::GreenRoof, LandUse::PorousPaving];

/// Covers that already existed before European settlement. Everything
/// else projects to `MixedForest` under the pre-Columbian flag.
pub const PRE_COLUMBIAN_LAND_USES: [LandUse; 3] = [
    LandUse::Water,
    LandUse::WoodyWetland,
    LandUse::HerbaceousWetland,
];

impl LandUse {
    pub const ALL: [LandUse; 21] = [
        LandUse::Water,
        LandUse::LiResidential,
        LandUse::HiResidential,
        LandUse::Commercial,
        LandUse::Industrial,
        LandUse::Transportation,
        LandUse::UrbanGrass,
        LandUse::Rock,
        LandUse::SandyAreas,
        LandUse::DeciduousForest,
        LandUse::EvergreenForest,
        LandUse::MixedForest,
        LandUse::GrasslandHerbaceous,
        LandUse::Pasture,
        LandUse::Cultivated,
        LandUse::WoodyWetland,
        LandUse::HerbaceousWetland,
        LandUse::GreenRoof,
        LandUse::PorousPaving,
        LandUse::RainGarden,
        LandUse::InfiltrationTrench,
    ];

    /// External identifier as used in tile strings and the tables.
    pub fn as_str(self) -> &'static str {
        match self {
            LandUse::Water => "Water",
            LandUse::LiResidential => "LI_Residential",
            LandUse::HiResidential => "HI_Residential",
            LandUse::Commercial => "Commercial",
            LandUse::Industrial => "Industrial",
            LandUse::Transportation => "Transportation",
            LandUse::UrbanGrass => "UrbanGrass",
            LandUse::Rock => "Rock",
            LandUse::SandyAreas => "SandyAreas",
            LandUse::DeciduousForest => "DeciduousForest",
            LandUse::EvergreenForest => "EvergreenForest",
            LandUse::MixedForest => "MixedForest",
            LandUse::GrasslandHerbaceous => "GrasslandHerbaceous",
            LandUse::Pasture => "Pasture",
            LandUse::Cultivated => "Cultivated",
            LandUse::WoodyWetland => "WoodyWetland",
            LandUse::HerbaceousWetland => "HerbaceousWetland",
            LandUse::GreenRoof => "GreenRoof",
            LandUse::PorousPaving => "PorousPaving",
            LandUse::RainGarden => "RainGarden",
            LandUse::InfiltrationTrench => "InfiltrationTrench",
        }
    }

    /// Whether this land use is an engineered BMP treatment.
    pub fn is_bmp(self) -> bool {
        BMPS.contains(&self)
    }

    /// Whether this BMP replaces the surface over its footprint.
    /// False for every non-BMP land use.
    pub fn is_area_bmp(self) -> bool {
        AREA_BMPS.contains(&self)
    }

    /// Whether this land use responds as a built surface.
    pub fn is_built_type(self) -> bool {
        BUILT_TYPES.contains(&self)
    }

    /// Project to the pre-Columbian baseline: covers that predate
    /// settlement are kept, everything else becomes mixed forest.
    /// Idempotent.
    pub fn make_precolumbian(self) -> LandUse {
        if PRE_COLUMBIAN_LAND_USES.contains(&self) {
            self
        } else {
            LandUse::MixedForest
        }
    }
}

impl FromStr for LandUse {
    type Err = Tr55Error;

    fn from_str(s: &str) -> Tr55Result<Self> {
        LandUse::ALL
            .iter()
            .copied()
            .find(|lu| lu.as_str() == s)
            .ok_or_else(|| Tr55Error::lookup("land use", s))
    }
}

impl fmt::Display for LandUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tile class: a soil group paired with a land use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    pub soil: Soil,
    pub land_use: LandUse,
}

impl Tile {
    pub fn new(soil: Soil, land_use: LandUse) -> Self {
        Self { soil, land_use }
    }

    /// The same soil with the land use projected to the pre-Columbian
    /// baseline.
    pub fn make_precolumbian(self) -> Tile {
        Tile {
            soil: self.soil,
            land_use: self.land_use.make_precolumbian(),
        }
    }
}

impl FromStr for Tile {
    type Err = Tr55Error;

    /// Parse the external `"<soil>:<land_use>"` form.
    fn from_str(s: &str) -> Tr55Result<Self> {
        let (soil, land_use) = s
            .split_once(':')
            .ok_or_else(|| Tr55Error::lookup("tile identifier", s))?;
        Ok(Tile {
            soil: soil.parse()?,
            land_use: land_use.parse()?,
        })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.soil, self.land_use)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_round_trips_through_strings() {
        for soil in Soil::ALL {
            assert_eq!(soil.as_str().parse::<Soil>().unwrap(), soil);
        }
    }

    #[test]
    fn unknown_soil_names_the_key() {
        let err = "x".parse::<Soil>().unwrap_err();
        assert_eq!(err, Tr55Error::lookup("soil type", "x"));
    }

    #[test]
    fn land_use_round_trips_through_strings() {
        for lu in LandUse::ALL {
            assert_eq!(lu.as_str().parse::<LandUse>().unwrap(), lu);
        }
    }

    #[test]
    fn unknown_land_use_names_the_key() {
        let err = "Parking".parse::<LandUse>().unwrap_err();
        assert_eq!(err, Tr55Error::lookup("land use", "Parking"));
    }

    #[test]
    fn tile_round_trips_through_strings() {
        let tile: Tile = "c:LI_Residential".parse().unwrap();
        assert_eq!(tile.soil, Soil::C);
        assert_eq!(tile.land_use, LandUse::LiResidential);
        assert_eq!(tile.to_string(), "c:LI_Residential");
    }

    #[test]
    fn tile_without_colon_is_rejected() {
        let err = "cWater".parse::<Tile>().unwrap_err();
        assert_eq!(err, Tr55Error::lookup("tile identifier", "cWater"));
    }

    #[test]
    fn tile_with_bad_parts_propagates_part_errors() {
        assert_eq!(
            "q:Water".parse::<Tile>().unwrap_err(),
            Tr55Error::lookup("soil type", "q")
        );
        assert_eq!(
            "a:Lake".parse::<Tile>().unwrap_err(),
            Tr55Error::lookup("land use", "Lake")
        );
    }

    #[test]
    fn classification_families_are_disjoint() {
        for lu in BUILT_TYPES {
            assert!(!lu.is_bmp(), "{lu} is both built and BMP");
        }
        for lu in BMPS {
            assert!(!lu.is_built_type(), "{lu} is both BMP and built");
        }
    }

    #[test]
    fn area_bmps_are_bmps() {
        for lu in AREA_BMPS {
            assert!(lu.is_bmp());
        }
        assert!(LandUse::GreenRoof.is_area_bmp());
        assert!(!LandUse::RainGarden.is_area_bmp());
        assert!(!LandUse::Commercial.is_area_bmp());
    }

    #[test]
    fn make_precolumbian_projects_developed_land() {
        assert_eq!(
            LandUse::Commercial.make_precolumbian(),
            LandUse::MixedForest
        );
        assert_eq!(
            LandUse::DeciduousForest.make_precolumbian(),
            LandUse::MixedForest
        );
        assert_eq!(LandUse::Water.make_precolumbian(), LandUse::Water);
        assert_eq!(
            LandUse::WoodyWetland.make_precolumbian(),
            LandUse::WoodyWetland
        );
    }

    #[test]
    fn make_precolumbian_is_idempotent() {
        for lu in LandUse::ALL {
            let once = lu.make_precolumbian();
            assert_eq!(once.make_precolumbian(), once);
        }
    }
}
