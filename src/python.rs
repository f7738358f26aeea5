//! Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Generate a program printing the given character codes.
#[pyfunction]
fn synthesize(codes: Vec<i32>) -> String {
    crate::synth::synthesize(&codes)
}

/// Generate a program printing `text`.
#[pyfunction]
fn synthesize_text(text: &str) -> String {
    crate::synth::synthesize_text(text)
}

/// Run a program and return the values it prints.
#[pyfunction]
#[pyo3(signature = (code, step_limit=None))]
fn execute(code: &str, step_limit: Option<u64>) -> PyResult<Vec<i64>> {
    crate::brainfuck::execute(code, step_limit).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn bfsynth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(synthesize, m)?)?;
    m.add_function(wrap_pyfunction!(synthesize_text, m)?)?;
    m.add_function(wrap_pyfunction!(execute, m)?)?;
    Ok(())
}
