//! Python bindings that expose the sort to Python lists via PyO3.
//!
//! Elements are compared with Python's own `>` (or `<` when `reverse`),
//! so any type with rich comparisons works. An exception raised by a
//! comparison aborts the sort and propagates to the caller; the list is
//! still written back, holding some permutation of its original items.
//!
//! The list's items are copied into a `Vec` of owned references before
//! sorting and written back afterwards, so this entry point uses O(n)
//! auxiliary space. The sort itself stays O(1) on that buffer.

use pyo3::{prelude::*, types::PyList};

use crate::try_sort_by;

/// Sort `seq` in place and return it.
///
/// Args:
///     seq: List of mutually comparable objects.
///     reverse: Sort from largest to smallest when true.
///
/// Returns:
///     The same list object, sorted.
#[pyfunction]
#[pyo3(signature = (seq, reverse = false))]
pub fn smoothsort<'py>(seq: Bound<'py, PyList>, reverse: bool) -> PyResult<Bound<'py, PyList>> {
    let mut items: Vec<Bound<'py, PyAny>> = seq.iter().collect();

    let outcome = if reverse {
        try_sort_by(&mut items, |a, b| a.lt(b))
    } else {
        try_sort_by(&mut items, |a, b| a.gt(b))
    };

    for (idx, item) in items.into_iter().enumerate() {
        seq.set_item(idx, item)?;
    }
    outcome?;

    Ok(seq)
}

/// Create Python module.
#[pymodule]
pub fn smoothsort_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(smoothsort, m)?)?;
    Ok(())
}
