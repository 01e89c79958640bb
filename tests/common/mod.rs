//! Shared fixtures for integration tests.
//!
//! Provides `TableModel`, an in-memory `ModelView` implementation backing
//! every subset with explicit matrices, plus small construction helpers.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::cell::Cell;

use polyterm::prelude::*;

/// Build a matrix from a literal slice, panicking on bad shapes (tests
/// construct well-formed fixtures).
pub fn mat(rows: usize, cols: usize, values: &[f64]) -> Matrix<f64> {
    Matrix::new(rows, cols, values.to_vec()).unwrap()
}

/// An in-memory model. By default every subset is backed by the same
/// matrices; individual subsets can be overridden. Raw-data fetches are
/// counted so tests can observe caching behavior.
pub struct TableModel {
    data: [Matrix<f64>; Subset::COUNT],
    design: [Matrix<f64>; Subset::COUNT],
    response: [Matrix<f64>; Subset::COUNT],
    highest_lag: usize,
    data_fetches: Cell<usize>,
}

impl TableModel {
    /// A model with the same data, design, and response behind every
    /// subset.
    pub fn uniform(data: Matrix<f64>, design: Matrix<f64>, response: Matrix<f64>) -> Self {
        Self {
            data: [data.clone(), data.clone(), data],
            design: [design.clone(), design.clone(), design],
            response: [response.clone(), response.clone(), response],
            highest_lag: 0,
            data_fetches: Cell::new(0),
        }
    }

    /// Override the highest selected lag reported by the model.
    pub fn with_highest_lag(mut self, lag: usize) -> Self {
        self.highest_lag = lag;
        self
    }

    /// Override one subset's raw data table.
    pub fn with_subset_data(mut self, subset: Subset, data: Matrix<f64>) -> Self {
        self.data[subset.index()] = data;
        self
    }

    /// Number of raw-data fetches served so far.
    pub fn data_fetches(&self) -> usize {
        self.data_fetches.get()
    }
}

impl ModelView<f64> for TableModel {
    fn data(&self, subset: Subset) -> &Matrix<f64> {
        self.data_fetches.set(self.data_fetches.get() + 1);
        &self.data[subset.index()]
    }

    fn design(&self, subset: Subset) -> &Matrix<f64> {
        &self.design[subset.index()]
    }

    fn response(&self, subset: Subset) -> &Matrix<f64> {
        &self.response[subset.index()]
    }

    fn highest_lag(&self) -> usize {
        self.highest_lag
    }
}

/// The five-row fixture used across term tests: column 0 is scratch,
/// column 1 is `[1..5]`, column 2 is `[10..50]`; the current design matrix
/// is an intercept column and the response is column 1 doubled.
pub fn five_row_model() -> TableModel {
    let data = mat(
        5,
        3,
        &[
            7.0, 1.0, 10.0, //
            7.0, 2.0, 20.0, //
            7.0, 3.0, 30.0, //
            7.0, 4.0, 40.0, //
            7.0, 5.0, 50.0, //
        ],
    );
    let design = Matrix::filled(5, 1, 1.0);
    let response = mat(5, 1, &[2.0, 4.0, 6.0, 8.0, 10.0]);
    TableModel::uniform(data, design, response)
}
