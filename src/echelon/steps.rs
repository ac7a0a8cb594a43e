//! Step reporting for elimination.
//!
//! Elimination calls [`StepReporter::report`] after each pivot step with a
//! label and the whole matrix. Reporters only observe, the algorithm never
//! reads anything back from them.

use crate::matrix::matrix::Matrix;
use std::fmt;

pub trait StepReporter<T> {
    fn report(&mut self, label: &str, matrix: &Matrix<T>);
}

/// Discards every step. Used when `show_steps` is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSteps;

impl<T> StepReporter<T> for NoSteps {
    #[inline(always)]
    fn report(&mut self, _label: &str, _matrix: &Matrix<T>) {}
}

/// Prints each step to stdout. Used when `show_steps` is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintSteps;

impl<T: fmt::Display> StepReporter<T> for PrintSteps {
    fn report(&mut self, label: &str, matrix: &Matrix<T>) {
        println!("[ ] {}\n{}\n", label, matrix);
    }
}

/// Sends each step to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSteps;

impl<T: fmt::Display> StepReporter<T> for LogSteps {
    fn report(&mut self, label: &str, matrix: &Matrix<T>) {
        log::info!("{}\n{}", label, matrix);
    }
}

/// Keeps a snapshot of the matrix for each step.
#[derive(Debug, Clone)]
pub struct Trace<T> {
    pub steps: Vec<(Matrix<T>, String)>,
}

impl<T> Trace<T> {
    pub fn new() -> Self {
        Trace { steps: vec![] }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|(_, label)| label.as_str())
    }
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Trace::new()
    }
}

impl<T: Clone> StepReporter<T> for Trace<T> {
    fn report(&mut self, label: &str, matrix: &Matrix<T>) {
        self.steps.push((matrix.clone(), label.to_string()));
    }
}

impl<T, R: StepReporter<T> + ?Sized> StepReporter<T> for &mut R {
    fn report(&mut self, label: &str, matrix: &Matrix<T>) {
        (**self).report(label, matrix)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
