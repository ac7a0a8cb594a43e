use itertools::Itertools;
use num_traits::{One, Zero};

use crate::errors::{MatrixError, Result};
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Sub};

/// Entries a matrix can hold and combine with row operations: ring
/// arithmetic, a zero test and something printable for step reports.
pub trait RingElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + fmt::Display
    + fmt::Debug
{
}

impl<T> RingElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + fmt::Display
        + fmt::Debug
{
}

/// Entries elimination can run on. `/` must be exact division, so this is
/// implemented per type rather than for everything with a `Div`: integer
/// division truncates and would leave nonzero entries under a pivot.
pub trait FieldElement: RingElement + Div<Output = Self> {}

impl FieldElement for f32 {}
impl FieldElement for f64 {}

/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

impl<T: RingElement> Matrix<T> {
    /// All-zero `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Matrix<T> {
        Matrix {
            rows,
            cols,
            cells: (0..(rows * cols)).map(|_| T::zero()).collect(),
        }
    }

    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Result<Matrix<T>> {
        if cells.len() != rows * cols {
            return Err(MatrixError::Build(cells.len(), rows * cols));
        }
        Ok(Matrix { rows, cols, cells })
    }

    /// Build from a list of rows. Rows shorter than the longest one are padded
    /// with zeros.
    pub fn from_list(lines: Vec<Vec<T>>) -> Matrix<T> {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        Matrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let padding = cols - l.len();
                    l.into_iter()
                        .chain(std::iter::repeat_n(T::zero(), padding))
                })
                .collect(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    pub fn identity(n: usize) -> Matrix<T> {
        Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    /// Clone of the entry at `(row, col)`. Panics out of bounds, like indexing.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self[(row, col)].clone()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    pub fn row(&self, row: usize) -> Result<&[T]> {
        self.check_row(row)?;
        Ok(self.row_slice(row))
    }

    /// Copy of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<T>> {
        self.check_col(col)?;
        Ok((0..self.rows).map(|r| self.at(r, col)).collect())
    }

    /// Index of the first nonzero entry of `row`, `None` for a zero row.
    pub fn leading_column(&self, row: usize) -> Result<Option<usize>> {
        Ok(self.row(row)?.iter().position(|x| !x.is_zero()))
    }

    pub fn is_echelon(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            match self.row_slice(i).iter().position(|x| !x.is_zero()) {
                None => {
                    // every row below a zero row must be zero too
                    return (i + 1..self.rows)
                        .all(|r| self.row_slice(r).iter().all(|x| x.is_zero()));
                }
                Some(col) => {
                    if lead.is_some_and(|prev| col <= prev) {
                        return false;
                    }
                    lead = Some(col);
                }
            }
        }
        true
    }

    pub fn is_reduced_echelon(&self) -> bool {
        if !self.is_echelon() {
            return false;
        }

        for i in 0..self.rows {
            let Some(pivot_col) = self.row_slice(i).iter().position(|x| !x.is_zero()) else {
                break;
            };
            if !self.at(i, pivot_col).is_one() {
                return false;
            }
            if (0..i).any(|r| !self.at(r, pivot_col).is_zero()) {
                return false;
            }
        }
        true
    }
}

impl<T: FieldElement> Matrix<T> {
    /// Number of pivots found by forward elimination on a copy.
    pub fn rank(&self) -> usize {
        self.echelon_form(false).1.len()
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn check_row(&self, index: usize) -> Result<()> {
        if index >= self.rows {
            return Err(MatrixError::RowOutOfBounds {
                index,
                rows: self.rows,
            });
        }
        Ok(())
    }

    pub(crate) fn check_col(&self, index: usize) -> Result<()> {
        if index >= self.cols {
            return Err(MatrixError::ColumnOutOfBounds {
                index,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return write!(f, "[]");
        }
        let cells: Vec<String> = self.cells.iter().map(|c| c.to_string()).collect();
        let width = cells.iter().map(|c| c.len()).max().unwrap_or(0);

        let lines = (0..self.rows)
            .map(|r| {
                let line = cells[r * self.cols..(r + 1) * self.cols]
                    .iter()
                    .map(|c| format!("{:>width$}", c))
                    .join(" ");
                format!("[{}]", line)
            })
            .join("\n");
        write!(f, "{}", lines)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
