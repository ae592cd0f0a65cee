/// tr55 — TR-55 watershed hydrology model in Rust.
///
/// Day-scale water balance for land tiles: NRCS curve-number runoff
/// with the Pitt small-storm refinement for built covers, design-rate
/// infiltration for BMP treatments, and area-weighted aggregation over
/// tile censuses.
pub mod balance;
pub mod census;
pub mod error;
pub mod forcing;
pub mod runoff;
pub mod simulate;
pub mod tables;
pub mod tile;

mod lookup;

#[cfg(feature = "python")]
mod pyo3_bindings;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_bindings::register(m)?;
    Ok(())
}
