use crate::matrix::matrix::{FieldElement, Matrix};
use std::fmt;

/// Position of a leading entry placed during elimination, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pivot {
    pub row: usize,
    pub col: usize,
}

impl Pivot {
    pub fn new(row: usize, col: usize) -> Self {
        Pivot { row, col }
    }
}

impl From<(usize, usize)> for Pivot {
    fn from((row, col): (usize, usize)) -> Self {
        Pivot { row, col }
    }
}

impl From<Pivot> for (usize, usize) {
    fn from(pivot: Pivot) -> Self {
        (pivot.row, pivot.col)
    }
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rows `row_offset..` and columns `col_offset..` of a matrix, addressed with
/// indices relative to the window. Every write lands in the borrowed matrix,
/// and nothing outside the window is touched.
pub(crate) struct Window<'a, T> {
    matrix: &'a mut Matrix<T>,
    row_offset: usize,
    col_offset: usize,
}

impl<'a, T: FieldElement> Window<'a, T> {
    /// Offsets may equal the matrix dimensions, giving an empty window.
    /// Panics when either offset is past them.
    pub(crate) fn new(matrix: &'a mut Matrix<T>, row_offset: usize, col_offset: usize) -> Self {
        assert!(
            row_offset <= matrix.rows && col_offset <= matrix.cols,
            "window offset ({row_offset}, {col_offset}) past a {}x{} matrix",
            matrix.rows,
            matrix.cols
        );
        Window {
            matrix,
            row_offset,
            col_offset,
        }
    }

    pub fn rows(&self) -> usize {
        self.matrix.rows - self.row_offset
    }

    pub fn cols(&self) -> usize {
        self.matrix.cols - self.col_offset
    }

    fn entry(&self, row: usize, col: usize) -> &T {
        let cols = self.matrix.cols;
        &self.matrix.cells[(row + self.row_offset) * cols + col + self.col_offset]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.matrix
            .swap_rows_from(i + self.row_offset, j + self.row_offset, self.col_offset);
    }

    fn add_multiple(&mut self, i: usize, factor: &T, target: usize) {
        self.matrix.add_row_from(
            i + self.row_offset,
            factor,
            target + self.row_offset,
            self.col_offset,
        );
    }

    /// Runs one elimination step on the window.
    ///
    /// The pivot column is the leftmost column holding a nonzero entry. If the
    /// window's first row is zero there, the first row that is not gets swapped
    /// up. Every lower row is then cleared in that column by adding
    /// `-(entry / pivot)` times the first row.
    ///
    /// Returns the pivot column relative to the window, `None` if the window is
    /// all zeros (in which case nothing is written).
    pub fn pivot_pass(&mut self) -> Option<usize> {
        let rows = self.rows();
        let pivot_col =
            (0..self.cols()).find(|&c| (0..rows).any(|r| !self.entry(r, c).is_zero()))?;

        if self.entry(0, pivot_col).is_zero() {
            if let Some(first) = (1..rows).find(|&r| !self.entry(r, pivot_col).is_zero()) {
                self.swap(0, first);
            }
        }

        let pivot = self.entry(0, pivot_col).clone();
        for r in 1..rows {
            let entry = self.entry(r, pivot_col);
            if entry.is_zero() {
                continue;
            }
            let factor = T::zero() - entry.clone() / pivot.clone();
            self.add_multiple(0, &factor, r);
        }

        Some(pivot_col)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
