/// Tile census parsing and watershed aggregation.
///
/// - `TileCensus::from_json()`: decode a census document
/// - `aggregate_tiles()`: simulate every tile class and blend the
///   balances by cell count → `WaterBalance`
///
/// A census arrives as JSON from the tiling service: a `result` object
/// with the polygon's total `cell_count` and a `distribution` mapping
/// tile strings to the number of cells they occupy. Documents carrying
/// an `error` key are refused before any simulation runs, whatever the
/// key's value.
use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::balance::WaterBalance;
use crate::error::{Tr55Error, Tr55Result};
use crate::forcing::DayForcing;
use crate::simulate::simulate_tile;
use crate::tables::Tables;
use crate::tile::Tile;

/// `Option` deserialisation reads JSON `null` as `None`, erasing the
/// difference between `"error": null` and no `error` key at all. This
/// deserialiser keeps a present null as `Some(Value::Null)`, so key
/// presence alone refuses a document.
mod present_error {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(d: D) -> Result<Option<Value>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(d).map(Some)
    }
}

/// A tile census document, structurally as loose as the wire format.
/// Validation happens at aggregation time, not at decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileCensus {
    #[serde(
        default,
        deserialize_with = "present_error::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<serde_json::Value>,
    pub result: Option<CensusResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusResult {
    pub cell_count: Option<u64>,
    pub distribution: Option<BTreeMap<String, u64>>,
}

impl TileCensus {
    pub fn from_json(json: &str) -> Tr55Result<Self> {
        serde_json::from_str(json).map_err(|e| Tr55Error::census(format!("unparseable JSON: {e}")))
    }

    /// Check the document structure and expose the validated pieces.
    fn validated(&self) -> Tr55Result<(u64, &BTreeMap<String, u64>)> {
        if let Some(error) = &self.error {
            return Err(Tr55Error::census(format!("census reports an error: {error}")));
        }
        let result = self
            .result
            .as_ref()
            .ok_or_else(|| Tr55Error::census("missing `result` key"))?;
        let cell_count = result
            .cell_count
            .ok_or_else(|| Tr55Error::census("missing `result.cell_count` key"))?;
        let distribution = result
            .distribution
            .as_ref()
            .ok_or_else(|| Tr55Error::census("missing `result.distribution` key"))?;
        if cell_count == 0 {
            return Err(Tr55Error::census("`result.cell_count` is zero"));
        }
        Ok((cell_count, distribution))
    }
}

/// Simulate every tile class in the census for one day and blend the
/// balances, each weighted by its share of the polygon's cells.
///
/// Every tile string is parsed, including classes with zero cells, so
/// vocabulary mistakes surface regardless of the counts. Classes with
/// zero cells contribute nothing and are not simulated.
pub fn aggregate_tiles(
    tables: &Tables,
    forcing: DayForcing,
    census: &TileCensus,
    pre_columbian: bool,
) -> Tr55Result<WaterBalance> {
    let (cell_count, distribution) = census.validated()?;
    debug!(
        "aggregating {} tile classes over {} cells",
        distribution.len(),
        cell_count
    );

    let mut aggregate = WaterBalance::zero();
    for (key, &local_count) in distribution {
        let tile: Tile = key.parse()?;
        if local_count == 0 {
            continue;
        }
        let weight = local_count as f64 / cell_count as f64;
        let balance = simulate_tile(tables, forcing, tile, pre_columbian)?;
        aggregate.add_scaled(&balance, weight);
    }
    Ok(aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn census(json: &str) -> TileCensus {
        TileCensus::from_json(json).unwrap()
    }

    #[test]
    fn aggregation_blends_by_cell_share() {
        let tables = Tables::builtin();
        let forcing = DayForcing::direct(1.0, 0.0);
        let census = census(
            r#"{"result": {"cell_count": 100,
                           "distribution": {"a:Commercial": 60, "a:UrbanGrass": 40}}}"#,
        );

        let blended = aggregate_tiles(tables, forcing, &census, false).unwrap();
        let commercial =
            simulate_tile(tables, forcing, "a:Commercial".parse().unwrap(), false).unwrap();
        let grass = simulate_tile(tables, forcing, "a:UrbanGrass".parse().unwrap(), false).unwrap();

        assert_relative_eq!(
            blended.runoff,
            0.6 * commercial.runoff + 0.4 * grass.runoff,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            blended.infiltration,
            0.6 * commercial.infiltration + 0.4 * grass.infiltration,
            epsilon = 1e-12
        );
    }

    #[test]
    fn single_class_census_matches_the_tile() {
        let tables = Tables::builtin();
        let forcing = DayForcing::direct(2.5, 0.05);
        let census = census(
            r#"{"result": {"cell_count": 42, "distribution": {"c:Pasture": 42}}}"#,
        );

        let aggregated = aggregate_tiles(tables, forcing, &census, false).unwrap();
        let single = simulate_tile(tables, forcing, "c:Pasture".parse().unwrap(), false).unwrap();
        assert_relative_eq!(aggregated.runoff, single.runoff, epsilon = 1e-12);
        assert_relative_eq!(aggregated.et, single.et, epsilon = 1e-12);
        assert_relative_eq!(aggregated.infiltration, single.infiltration, epsilon = 1e-12);
    }

    #[test]
    fn partial_coverage_scales_down() {
        let tables = Tables::builtin();
        let forcing = DayForcing::direct(1.0, 0.0);
        let census = census(
            r#"{"result": {"cell_count": 100, "distribution": {"d:Cultivated": 50}}}"#,
        );

        let aggregated = aggregate_tiles(tables, forcing, &census, false).unwrap();
        let single = simulate_tile(tables, forcing, "d:Cultivated".parse().unwrap(), false).unwrap();
        assert_relative_eq!(aggregated.runoff, 0.5 * single.runoff, epsilon = 1e-12);
    }

    #[test]
    fn zero_count_classes_are_skipped_but_parsed() {
        let tables = Tables::builtin();
        let forcing = DayForcing::direct(1.0, 0.0);

        let with_empty = census(
            r#"{"result": {"cell_count": 10,
                           "distribution": {"a:Water": 0, "a:Rock": 10}}}"#,
        );
        let rock_only =
            census(r#"{"result": {"cell_count": 10, "distribution": {"a:Rock": 10}}}"#);
        assert_eq!(
            aggregate_tiles(tables, forcing, &with_empty, false).unwrap(),
            aggregate_tiles(tables, forcing, &rock_only, false).unwrap()
        );

        let bad_key = census(
            r#"{"result": {"cell_count": 10,
                           "distribution": {"a:Lake": 0, "a:Rock": 10}}}"#,
        );
        assert_eq!(
            aggregate_tiles(tables, forcing, &bad_key, false).unwrap_err(),
            Tr55Error::lookup("land use", "Lake")
        );
    }

    #[test]
    fn error_documents_are_refused() {
        let census = census(r#"{"error": "tiling failed"}"#);
        let err =
            aggregate_tiles(Tables::builtin(), DayForcing::direct(1.0, 0.0), &census, false)
                .unwrap_err();
        assert_eq!(
            err,
            Tr55Error::census("census reports an error: \"tiling failed\"")
        );
    }

    #[test]
    fn error_key_counts_even_when_null() {
        let census = census(
            r#"{"error": null,
                "result": {"cell_count": 10, "distribution": {"a:Rock": 10}}}"#,
        );
        let err =
            aggregate_tiles(Tables::builtin(), DayForcing::direct(1.0, 0.0), &census, false)
                .unwrap_err();
        assert_eq!(err, Tr55Error::census("census reports an error: null"));
    }

    #[test]
    fn structural_holes_are_named() {
        let forcing = DayForcing::direct(1.0, 0.0);
        let tables = Tables::builtin();

        let cases = [
            (r#"{}"#, "missing `result` key"),
            (r#"{"result": {}}"#, "missing `result.cell_count` key"),
            (
                r#"{"result": {"cell_count": 10}}"#,
                "missing `result.distribution` key",
            ),
            (
                r#"{"result": {"cell_count": 0, "distribution": {}}}"#,
                "`result.cell_count` is zero",
            ),
        ];
        for (json, reason) in cases {
            let err = aggregate_tiles(tables, forcing, &census(json), false).unwrap_err();
            assert_eq!(err, Tr55Error::census(reason), "for {json}");
        }
    }

    #[test]
    fn unparseable_json_is_a_census_error() {
        let err = TileCensus::from_json("not json").unwrap_err();
        match err {
            Tr55Error::Census { reason } => assert!(reason.contains("unparseable JSON")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn pre_columbian_flag_reaches_every_tile() {
        let tables = Tables::builtin();
        let forcing = DayForcing::direct(1.0, 0.0);
        let developed = census(
            r#"{"result": {"cell_count": 10,
                           "distribution": {"b:Commercial": 5, "b:HI_Residential": 5}}}"#,
        );
        let forest =
            census(r#"{"result": {"cell_count": 10, "distribution": {"b:MixedForest": 10}}}"#);
        assert_eq!(
            aggregate_tiles(tables, forcing, &developed, true).unwrap(),
            aggregate_tiles(tables, forcing, &forest, false).unwrap()
        );
    }
}
