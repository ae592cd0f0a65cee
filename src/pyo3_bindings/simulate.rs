use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::{parse_forcing, to_py_err};
use crate::balance::WaterBalance;
use crate::census::{self, TileCensus};
use crate::simulate;
use crate::tables::Tables;
use crate::tile::Tile;

fn balance_dict<'py>(py: Python<'py>, balance: &WaterBalance) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("runoff", balance.runoff)?;
    dict.set_item("et", balance.et)?;
    dict.set_item("infiltration", balance.infiltration)?;
    Ok(dict)
}

#[pyfunction]
#[pyo3(signature = (tile, date=None, precip=None, et=None, pre_columbian=false))]
fn simulate_tile<'py>(
    py: Python<'py>,
    tile: &str,
    date: Option<&str>,
    precip: Option<f64>,
    et: Option<f64>,
    pre_columbian: bool,
) -> PyResult<Bound<'py, PyDict>> {
    let forcing = parse_forcing(date, precip, et)?;
    let tile: Tile = tile.parse().map_err(to_py_err)?;
    let balance = simulate::simulate_tile(Tables::builtin(), forcing, tile, pre_columbian)
        .map_err(to_py_err)?;
    balance_dict(py, &balance)
}

#[pyfunction]
#[pyo3(signature = (census_json, date=None, precip=None, et=None, pre_columbian=false))]
fn simulate_census<'py>(
    py: Python<'py>,
    census_json: &str,
    date: Option<&str>,
    precip: Option<f64>,
    et: Option<f64>,
    pre_columbian: bool,
) -> PyResult<Bound<'py, PyDict>> {
    let forcing = parse_forcing(date, precip, et)?;
    let census = TileCensus::from_json(census_json).map_err(to_py_err)?;
    let balance = census::aggregate_tiles(Tables::builtin(), forcing, &census, pre_columbian)
        .map_err(to_py_err)?;
    balance_dict(py, &balance)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let m = PyModule::new(py, "simulate")?;
    m.add_function(wrap_pyfunction!(simulate_tile, &m)?)?;
    m.add_function(wrap_pyfunction!(simulate_census, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
