use crate::echelon::forward::eliminate_forward;
use crate::echelon::pivot::Pivot;
use crate::echelon::steps::{NoSteps, PrintSteps, StepReporter};
use crate::matrix::matrix::{FieldElement, Matrix};

/// Brings `matrix` to reduced row echelon form in place and returns the same
/// pivots as [`eliminate_forward`].
///
/// Pivots are handled last to first: the pivot row is scaled so the pivot is 1,
/// then the pivot column is cleared in every row above. The pivot row is
/// already zero in every pivot column handled before it, so cleared columns
/// stay cleared.
pub fn eliminate_backward<T, R>(matrix: &mut Matrix<T>, reporter: &mut R) -> Vec<Pivot>
where
    T: FieldElement,
    R: StepReporter<T> + ?Sized,
{
    let pivots = eliminate_forward(matrix, reporter);

    for pivot in pivots.iter().rev() {
        let Pivot { row, col } = *pivot;

        // nonzero by construction of the pivot pass
        let value = matrix.at(row, col);
        if !value.is_one() {
            log::debug!("pivot {}: scaling by 1 / {}", pivot, value);
            matrix.scale_row_from(row, &(T::one() / value), 0);
            reporter.report(&format!("pivot {}: scaled to 1", pivot), matrix);
        }

        for above in 0..row {
            let entry = matrix.at(above, col);
            if entry.is_zero() {
                continue;
            }
            matrix.add_row_from(row, &(T::zero() - entry), above, 0);
        }
        log::debug!("pivot {}: cleared above", pivot);
        reporter.report(&format!("pivot {}: cleared above", pivot), matrix);
    }

    pivots
}

impl<T: FieldElement> Matrix<T> {
    pub fn reduced_echelon_form_in_place(&mut self, show_steps: bool) -> Vec<Pivot> {
        if show_steps {
            self.reduced_echelon_form_reported(&mut PrintSteps)
        } else {
            self.reduced_echelon_form_reported(&mut NoSteps)
        }
    }

    pub fn reduced_echelon_form_reported<R>(&mut self, reporter: &mut R) -> Vec<Pivot>
    where
        R: StepReporter<T> + ?Sized,
    {
        eliminate_backward(self, reporter)
    }

    /// Reduced row echelon form of a copy, `self` is left as is.
    pub fn reduced_echelon_form(&self, show_steps: bool) -> (Matrix<T>, Vec<Pivot>) {
        let mut ret = self.clone();
        let pivots = ret.reduced_echelon_form_in_place(show_steps);
        (ret, pivots)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echelon::steps::Trace;
    use crate::rings::fraction::Fraction;
    use crate::rings::zmod::Zmod;
    use rstest::rstest;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn q(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    fn m(rows: &[&[&str]]) -> Matrix<Fraction> {
        Matrix::from_list(rows.iter().map(|r| r.iter().map(|x| q(x)).collect()).collect())
    }

    fn pivots(list: &[(usize, usize)]) -> Vec<Pivot> {
        list.iter().map(|p| Pivot::from(*p)).collect()
    }

    fn sample() -> Matrix<Fraction> {
        m(&[
            &["2", "3/2", "4/3", "5/4"],
            &["3", "2", "5/3", "3/2"],
            &["4", "5/2", "2", "7/4"],
        ])
    }

    #[test]
    fn test_reduced_echelon_form_rational() {
        init_logger();
        let a = sample();
        let (rref, p) = a.reduced_echelon_form(false);

        assert_eq!(p, pivots(&[(0, 0), (1, 1)]));
        assert_eq!(
            rref,
            m(&[
                &["1", "0", "-1/3", "-1/2"],
                &["0", "1", "4/3", "3/2"],
                &["0", "0", "0", "0"],
            ])
        );
        assert!(rref.is_reduced_echelon());
        assert_eq!(a, sample());
    }

    #[test]
    fn test_reduced_echelon_form_idempotent() {
        let mut a = sample();
        let p = a.reduced_echelon_form_in_place(false);
        let once = a.clone();

        let mut trace = Trace::new();
        assert_eq!(a.reduced_echelon_form_reported(&mut trace), p);
        assert_eq!(a, once);
        // nothing to scale the second time
        assert!(trace.labels().all(|l| !l.ends_with("scaled to 1")));
    }

    #[test]
    fn test_reduced_echelon_form_trace_cadence() {
        let mut a = m(&[&["0", "0", "2", "4"], &["0", "3", "1", "1"], &["0", "6", "2", "6"]]);
        let mut trace = Trace::new();
        let p = a.reduced_echelon_form_reported(&mut trace);

        assert_eq!(p, pivots(&[(0, 1), (1, 2), (2, 3)]));
        assert_eq!(
            a,
            m(&[&["0", "1", "0", "0"], &["0", "0", "1", "0"], &["0", "0", "0", "1"]])
        );
        assert_eq!(
            trace.labels().collect::<Vec<_>>(),
            vec![
                "pivot (0, 1): eliminated below",
                "pivot (1, 2): eliminated below",
                "pivot (2, 3): eliminated below",
                "pivot (2, 3): scaled to 1",
                "pivot (2, 3): cleared above",
                "pivot (1, 2): scaled to 1",
                "pivot (1, 2): cleared above",
                "pivot (0, 1): scaled to 1",
                "pivot (0, 1): cleared above",
            ]
        );
        assert_eq!(
            trace.steps[3].0,
            m(&[&["0", "3", "1", "1"], &["0", "0", "2", "4"], &["0", "0", "0", "1"]])
        );
        assert_eq!(
            trace.steps[4].0,
            m(&[&["0", "3", "1", "0"], &["0", "0", "2", "0"], &["0", "0", "0", "1"]])
        );
    }

    #[test]
    fn test_reduced_echelon_form_tall() {
        let (rref, p) = m(&[&["1", "2"], &["3", "4"], &["5", "6"]]).reduced_echelon_form(false);
        assert_eq!(p, pivots(&[(0, 0), (1, 1)]));
        assert_eq!(rref, m(&[&["1", "0"], &["0", "1"], &["0", "0"]]));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(0, 4)]
    #[case(4, 0)]
    #[case(3, 3)]
    fn test_reduced_echelon_form_zero_matrix(#[case] rows: usize, #[case] cols: usize) {
        let a = Matrix::<Fraction>::new(rows, cols);
        let (rref, p) = a.reduced_echelon_form(true);
        assert!(p.is_empty());
        assert_eq!(rref, a);
    }

    #[test]
    fn test_reduced_echelon_form_non_dividing_pivot() {
        // 3 / 2 is not an integer, so the row below needs a fractional multiple
        let a = m(&[&["2", "3"], &["3", "4"]]);

        let (ref_a, p) = a.echelon_form(false);
        assert_eq!(p, pivots(&[(0, 0), (1, 1)]));
        assert_eq!(ref_a, m(&[&["2", "3"], &["0", "-1/2"]]));
        assert!(ref_a.is_echelon());

        let (rref, p) = a.reduced_echelon_form(false);
        assert_eq!(p, pivots(&[(0, 0), (1, 1)]));
        assert_eq!(rref, Matrix::identity(2));
        assert_eq!(a.rank(), 2);
    }

    #[test]
    fn test_reduced_echelon_form_identity_untouched() {
        let mut a = Matrix::<Fraction>::identity(3);
        let p = a.reduced_echelon_form_in_place(false);
        assert_eq!(p, pivots(&[(0, 0), (1, 1), (2, 2)]));
        assert_eq!(a, Matrix::identity(3));
    }

    #[test]
    fn test_reduced_echelon_form_prime_field() {
        type F7 = Zmod<7>;
        let f = |x: u64| F7::from(x);

        let (rref, p) = Matrix::from_list(vec![vec![f(1), f(2)], vec![f(3), f(4)]])
            .reduced_echelon_form(false);
        assert_eq!(p, pivots(&[(0, 0), (1, 1)]));
        assert_eq!(rref, Matrix::identity(2));

        let (rref, p) = Matrix::from_list(vec![vec![f(2), f(4)], vec![f(1), f(2)]])
            .reduced_echelon_form(false);
        assert_eq!(p, pivots(&[(0, 0)]));
        assert_eq!(rref.to_list(), vec![vec![f(1), f(2)], vec![f(0), f(0)]]);
    }

    #[test]
    fn test_reduced_echelon_form_floats() {
        let (rref, p) =
            Matrix::from_list(vec![vec![2.0, 4.0], vec![1.0, 3.0]]).reduced_echelon_form(false);
        assert_eq!(p, pivots(&[(0, 0), (1, 1)]));
        assert_eq!(rref.to_list(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_reduced_echelon_form_log_steps() {
        init_logger();
        let mut a = sample();
        let p = a.reduced_echelon_form_reported(&mut crate::echelon::steps::LogSteps);
        assert_eq!(p.len(), 2);
    }
}
