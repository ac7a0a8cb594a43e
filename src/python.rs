//! Python bindings, exact rational matrices only.

use crate::errors::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::rings::fraction::Fraction;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

fn value_error(error: MatrixError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

fn parse(value: &str) -> PyResult<Fraction> {
    value
        .parse::<Fraction>()
        .map_err(|error| PyValueError::new_err(error.to_string()))
}

fn parse_row(row: Vec<String>) -> PyResult<Vec<Fraction>> {
    row.iter().map(|x| parse(x)).collect()
}

fn format_row(row: Vec<Fraction>) -> Vec<String> {
    row.into_iter().map(|x| x.to_string()).collect()
}

/// Matrix over the rationals. Entries cross the boundary as strings such as
/// `"3"` or `"-4/7"`.
#[derive(Debug, Clone)]
#[pyclass]
pub struct RationalMatrix {
    pub inner: Matrix<Fraction>,
}

#[pymethods]
impl RationalMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<String>>) -> PyResult<Self> {
        let lines = lines
            .into_iter()
            .map(parse_row)
            .collect::<PyResult<Vec<_>>>()?;
        Ok(RationalMatrix {
            inner: Matrix::from_list(lines),
        })
    }

    pub fn to_list(&self) -> Vec<Vec<String>> {
        self.inner.to_list().into_iter().map(format_row).collect()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn row_swap(&mut self, i: usize, j: usize) -> PyResult<(Vec<String>, Vec<String>)> {
        match self.inner.row_swap(i, j) {
            Ok((a, b)) => Ok((format_row(a), format_row(b))),
            Err(error) => Err(value_error(error)),
        }
    }

    pub fn row_scale(&mut self, i: usize, factor: &str) -> PyResult<Vec<String>> {
        let factor = parse(factor)?;
        match self.inner.row_scale(i, factor) {
            Ok(row) => Ok(format_row(row)),
            Err(error) => Err(value_error(error)),
        }
    }

    pub fn row_add(&mut self, i: usize, factor: &str, target: usize) -> PyResult<Vec<String>> {
        let factor = parse(factor)?;
        match self.inner.row_add(i, factor, target) {
            Ok(row) => Ok(format_row(row)),
            Err(error) => Err(value_error(error)),
        }
    }

    #[pyo3(signature = (show_steps = false))]
    pub fn echelon_form(&self, show_steps: bool) -> (RationalMatrix, Vec<(usize, usize)>) {
        let (inner, pivots) = self.inner.echelon_form(show_steps);
        (
            RationalMatrix { inner },
            pivots.into_iter().map(Into::into).collect(),
        )
    }

    #[pyo3(signature = (show_steps = false))]
    pub fn reduced_echelon_form(&self, show_steps: bool) -> (RationalMatrix, Vec<(usize, usize)>) {
        let (inner, pivots) = self.inner.reduced_echelon_form(show_steps);
        (
            RationalMatrix { inner },
            pivots.into_iter().map(Into::into).collect(),
        )
    }

    pub fn is_reduced_echelon(&self) -> bool {
        self.inner.is_reduced_echelon()
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}
