//! Elementary row operations.
//!
//! The mutating forms return copies of the rows they touched, the `*ed` forms
//! leave `self` alone and return a new matrix. Indices are validated before
//! anything is written.

use crate::errors::Result;
use crate::matrix::matrix::{Matrix, RingElement};

impl<T: RingElement> Matrix<T> {
    /// Exchange rows `i` and `j`, returns the new rows `(i, j)`.
    pub fn row_swap(&mut self, i: usize, j: usize) -> Result<(Vec<T>, Vec<T>)> {
        self.check_row(i)?;
        self.check_row(j)?;

        log::trace!("swap rows {} and {}", i, j);
        self.swap_rows_from(i, j, 0);
        Ok((self.row_slice(i).to_vec(), self.row_slice(j).to_vec()))
    }

    /// Multiply row `i` by `factor`, returns the new row `i`.
    pub fn row_scale(&mut self, i: usize, factor: T) -> Result<Vec<T>> {
        self.check_row(i)?;

        log::trace!("scale row {} by {}", i, factor);
        self.scale_row_from(i, &factor, 0);
        Ok(self.row_slice(i).to_vec())
    }

    /// Add `factor` times row `i` to row `target`, returns the new row `target`.
    pub fn row_add(&mut self, i: usize, factor: T, target: usize) -> Result<Vec<T>> {
        self.check_row(i)?;
        self.check_row(target)?;

        log::trace!("add {} times row {} to row {}", factor, i, target);
        self.add_row_from(i, &factor, target, 0);
        Ok(self.row_slice(target).to_vec())
    }

    pub fn row_swapped(&self, i: usize, j: usize) -> Result<Matrix<T>> {
        let mut ret = self.clone();
        ret.row_swap(i, j)?;
        Ok(ret)
    }

    pub fn row_scaled(&self, i: usize, factor: T) -> Result<Matrix<T>> {
        let mut ret = self.clone();
        ret.row_scale(i, factor)?;
        Ok(ret)
    }

    pub fn row_added(&self, i: usize, factor: T, target: usize) -> Result<Matrix<T>> {
        let mut ret = self.clone();
        ret.row_add(i, factor, target)?;
        Ok(ret)
    }

    // Unchecked kernels. Only columns `from_col..cols` are touched, which lets
    // a `Window` restrict them to the columns it covers.

    pub(crate) fn swap_rows_from(&mut self, i: usize, j: usize, from_col: usize) {
        debug_assert!(i < self.rows && j < self.rows);
        if i == j {
            return;
        }
        for k in from_col..self.cols {
            self.cells.swap(i * self.cols + k, j * self.cols + k);
        }
    }

    pub(crate) fn scale_row_from(&mut self, i: usize, factor: &T, from_col: usize) {
        debug_assert!(i < self.rows);
        for k in from_col..self.cols {
            let idx = i * self.cols + k;
            let value = std::mem::replace(&mut self.cells[idx], T::zero());
            self.cells[idx] = value * factor.clone();
        }
    }

    pub(crate) fn add_row_from(&mut self, i: usize, factor: &T, target: usize, from_col: usize) {
        debug_assert!(i < self.rows && target < self.rows);
        for k in from_col..self.cols {
            let delta = self.cells[i * self.cols + k].clone() * factor.clone();
            let idx = target * self.cols + k;
            let value = std::mem::replace(&mut self.cells[idx], T::zero());
            self.cells[idx] = value + delta;
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
