use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::to_py_err;
use crate::tables::{Pollutant, Tables};
use crate::tile::{LandUse, Soil};

fn parse_date(date: &str) -> PyResult<NaiveDate> {
    date.parse().map_err(|_| {
        PyValueError::new_err(format!("invalid date `{}`, expected YYYY-MM-DD", date))
    })
}

#[pyfunction]
fn precipitation(date: &str) -> PyResult<f64> {
    Tables::builtin()
        .precipitation(parse_date(date)?)
        .map_err(to_py_err)
}

#[pyfunction]
fn evapotranspiration(date: &str, land_use: &str) -> PyResult<f64> {
    let land_use: LandUse = land_use.parse().map_err(to_py_err)?;
    Tables::builtin()
        .evapotranspiration(parse_date(date)?, land_use)
        .map_err(to_py_err)
}

#[pyfunction]
fn curve_number(soil: &str, land_use: &str) -> PyResult<f64> {
    let soil: Soil = soil.parse().map_err(to_py_err)?;
    let land_use: LandUse = land_use.parse().map_err(to_py_err)?;
    Tables::builtin()
        .curve_number(soil, land_use)
        .map_err(to_py_err)
}

#[pyfunction]
fn bmp_infiltration(soil: &str, bmp: &str) -> PyResult<f64> {
    let soil: Soil = soil.parse().map_err(to_py_err)?;
    let bmp: LandUse = bmp.parse().map_err(to_py_err)?;
    Tables::builtin()
        .bmp_infiltration(soil, bmp)
        .map_err(to_py_err)
}

#[pyfunction]
fn pollutant_load(nlcd: u32, pollutant: &str) -> PyResult<f64> {
    let pollutant: Pollutant = pollutant.parse().map_err(to_py_err)?;
    Tables::builtin()
        .pollutant_load(nlcd, pollutant)
        .map_err(to_py_err)
}

#[pyfunction]
fn is_bmp(land_use: &str) -> PyResult<bool> {
    let land_use: LandUse = land_use.parse().map_err(to_py_err)?;
    Ok(land_use.is_bmp())
}

#[pyfunction]
fn is_area_bmp(land_use: &str) -> PyResult<bool> {
    let land_use: LandUse = land_use.parse().map_err(to_py_err)?;
    Ok(land_use.is_area_bmp())
}

#[pyfunction]
fn is_built_type(land_use: &str) -> PyResult<bool> {
    let land_use: LandUse = land_use.parse().map_err(to_py_err)?;
    Ok(land_use.is_built_type())
}

#[pyfunction]
fn make_precolumbian(land_use: &str) -> PyResult<String> {
    let land_use: LandUse = land_use.parse().map_err(to_py_err)?;
    Ok(land_use.make_precolumbian().to_string())
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let m = PyModule::new(py, "lookup")?;
    m.add_function(wrap_pyfunction!(precipitation, &m)?)?;
    m.add_function(wrap_pyfunction!(evapotranspiration, &m)?)?;
    m.add_function(wrap_pyfunction!(curve_number, &m)?)?;
    m.add_function(wrap_pyfunction!(bmp_infiltration, &m)?)?;
    m.add_function(wrap_pyfunction!(pollutant_load, &m)?)?;
    m.add_function(wrap_pyfunction!(is_bmp, &m)?)?;
    m.add_function(wrap_pyfunction!(is_area_bmp, &m)?)?;
    m.add_function(wrap_pyfunction!(is_built_type, &m)?)?;
    m.add_function(wrap_pyfunction!(make_precolumbian, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
