//! Row echelon and reduced row echelon forms by Gaussian elimination.
//!
//! Works over any [`FieldElement`]: exact rationals ([`Fraction`]), prime
//! fields ([`Zmod`]) or floats. Every elimination comes in an in-place form
//! returning the pivots and a copying form returning the new matrix as well.
//!
//! ```
//! use row_echelon::{Fraction, Matrix, Pivot};
//!
//! let q = |s: &str| s.parse::<Fraction>().unwrap();
//! let a = Matrix::from_list(vec![
//!     vec![q("2"), q("3/2"), q("4/3"), q("5/4")],
//!     vec![q("3"), q("2"), q("5/3"), q("3/2")],
//!     vec![q("4"), q("5/2"), q("2"), q("7/4")],
//! ]);
//! let (rref, pivots) = a.reduced_echelon_form(false);
//! assert_eq!(pivots, vec![Pivot::new(0, 0), Pivot::new(1, 1)]);
//! assert_eq!(rref.row(0).unwrap(), &[q("1"), q("0"), q("-1/3"), q("-1/2")]);
//! ```
//!
//! Integer matrices can be built and have rows swapped, scaled or added, but
//! elimination needs exact division and does not accept them:
//!
//! ```compile_fail
//! use row_echelon::Matrix;
//!
//! let mut a = Matrix::<i64>::from_list(vec![vec![2, 3], vec![3, 4]]);
//! a.echelon_form_in_place(false);
//! ```

pub mod matrix {
    pub mod matrix;
    pub mod row_ops;
}
pub mod echelon {
    pub mod backward;
    pub mod forward;
    pub mod pivot;
    pub mod steps;
}
pub mod rings {
    pub mod fraction;
    pub mod zmod;
}

pub mod errors;

#[cfg(feature = "python")]
pub mod python;

pub use echelon::pivot::Pivot;
pub use echelon::steps::{LogSteps, NoSteps, PrintSteps, StepReporter, Trace};
pub use errors::{FractionError, MatrixError, Result};
pub use matrix::matrix::{FieldElement, Matrix, RingElement};
pub use rings::fraction::Fraction;
pub use rings::zmod::Zmod;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn row_echelon(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::RationalMatrix>()?;
    Ok(())
}
