//! Dense row-major storage for per-cell sweep values.

use serde::{Deserialize, Serialize};

/// 2D grid storage with a flat backing array.
///
/// Stores values in row-major order: rows are luminosity perturbations,
/// columns are radius perturbations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Minimal error per (luminosity, radius) cell
pub type ErrorMatrix = CellMatrix<f64>;

impl<T: Clone> CellMatrix<T> {
    /// Create a new matrix filled with `default`.
    pub fn new(rows: usize, cols: usize, default: T) -> Self {
        Self {
            data: vec![default; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> CellMatrix<T> {
    /// Create a matrix from row-major data. Returns `None` on a length mismatch.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { data, rows, cols })
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert `(row, col)` to a flat index
    pub fn flat_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Convert a flat index back to `(row, col)`
    pub fn position(&self, flat: usize) -> Option<(usize, usize)> {
        (flat < self.data.len()).then(|| (flat / self.cols, flat % self.cols))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.flat_index(row, col).map(|i| &self.data[i])
    }

    /// Set the value at `(row, col)`. Returns `false` when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if let Some(i) = self.flat_index(row, col) {
            self.data[i] = value;
            true
        } else {
            false
        }
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Iterate over `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (i / cols, i % cols, value))
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> CellMatrix<U> {
        CellMatrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl CellMatrix<f64> {
    /// Smallest value, ignoring NaN. `None` for an empty matrix.
    pub fn min_value(&self) -> Option<f64> {
        self.data.iter().copied().filter(|v| !v.is_nan()).reduce(f64::min)
    }

    /// Largest value, ignoring NaN. `None` for an empty matrix.
    pub fn max_value(&self) -> Option<f64> {
        self.data.iter().copied().filter(|v| !v.is_nan()).reduce(f64::max)
    }
}
