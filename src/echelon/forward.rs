use crate::echelon::pivot::{Pivot, Window};
use crate::echelon::steps::{NoSteps, PrintSteps, StepReporter};
use crate::matrix::matrix::{FieldElement, Matrix};

/// Brings `matrix` to row echelon form in place and returns the pivots, in
/// order. Stops at the first window that is all zeros.
pub fn eliminate_forward<T, R>(matrix: &mut Matrix<T>, reporter: &mut R) -> Vec<Pivot>
where
    T: FieldElement,
    R: StepReporter<T> + ?Sized,
{
    let mut pivots = vec![];

    for start_row in 0..matrix.rows() {
        let Some(col) = Window::new(matrix, start_row, 0).pivot_pass() else {
            break;
        };

        let pivot = Pivot::new(start_row, col);
        log::debug!("pivot {} placed", pivot);
        pivots.push(pivot);

        reporter.report(&format!("pivot {}: eliminated below", pivot), matrix);
    }

    pivots
}

impl<T: FieldElement> Matrix<T> {
    pub fn echelon_form_in_place(&mut self, show_steps: bool) -> Vec<Pivot> {
        if show_steps {
            self.echelon_form_reported(&mut PrintSteps)
        } else {
            self.echelon_form_reported(&mut NoSteps)
        }
    }

    pub fn echelon_form_reported<R>(&mut self, reporter: &mut R) -> Vec<Pivot>
    where
        R: StepReporter<T> + ?Sized,
    {
        eliminate_forward(self, reporter)
    }

    /// Row echelon form of a copy, `self` is left as is.
    pub fn echelon_form(&self, show_steps: bool) -> (Matrix<T>, Vec<Pivot>) {
        let mut ret = self.clone();
        let pivots = ret.echelon_form_in_place(show_steps);
        (ret, pivots)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
