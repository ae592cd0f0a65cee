#[cfg(feature = "python")]
mod lookup;
#[cfg(feature = "python")]
mod simulate;

#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
use crate::error::Tr55Error;
#[cfg(feature = "python")]
use crate::forcing::DayForcing;

/// Register a submodule in sys.modules so `from parent.child import ...` works.
#[cfg(feature = "python")]
fn register_submodule(py: Python<'_>, parent_name: &str, child: &Bound<'_, PyModule>) -> PyResult<()> {
    let child_name = child.name()?;
    let full_name = format!("{}.{}", parent_name, child_name);
    let sys = py.import("sys")?;
    let modules = sys.getattr("modules")?;
    modules.set_item(full_name, child)?;
    Ok(())
}

#[cfg(feature = "python")]
fn to_py_err(err: Tr55Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Forcing comes in either as an ISO date string or as explicit
/// precipitation and evapotranspiration depths.
#[cfg(feature = "python")]
fn parse_forcing(date: Option<&str>, precip: Option<f64>, et: Option<f64>) -> PyResult<DayForcing> {
    match (date, precip, et) {
        (Some(d), None, None) => {
            let parsed = d.parse().map_err(|_| {
                PyValueError::new_err(format!("invalid date `{}`, expected YYYY-MM-DD", d))
            })?;
            Ok(DayForcing::date(parsed))
        }
        (None, Some(p), Some(e)) => Ok(DayForcing::direct(p, e)),
        _ => Err(PyValueError::new_err(
            "supply either `date` or both `precip` and `et`",
        )),
    }
}

/// Register the _core Python module.
#[cfg(feature = "python")]
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    let parent_name = m.name()?.to_string();

    m.add_function(wrap_pyfunction!(rust_version, m)?)?;

    lookup::register(m)?;
    simulate::register(m)?;

    // Register submodules in sys.modules for `from tr55._core.X import ...`
    for name in &["lookup", "simulate"] {
        let sub = m.getattr(*name)?;
        register_submodule(py, &parent_name, sub.downcast::<PyModule>()?)?;
    }

    Ok(())
}

#[cfg(feature = "python")]
#[pyfunction]
fn rust_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
