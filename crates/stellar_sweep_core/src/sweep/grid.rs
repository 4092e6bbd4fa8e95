//! Cartesian product of the luminosity and radius axes.

use serde::{Deserialize, Serialize};

use super::SweepAxis;

/// One (luminosity, radius) coordinate of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub luminosity: f64,
    pub radius: f64,
}

/// Luminosity varies across rows, radius across columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    pub luminosity: SweepAxis,
    pub radius: SweepAxis,
}

impl SweepGrid {
    pub fn new(luminosity: SweepAxis, radius: SweepAxis) -> Self {
        Self { luminosity, radius }
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.luminosity.len(), self.radius.len())
    }

    pub fn total_cells(&self) -> usize {
        self.luminosity.len() * self.radius.len()
    }

    /// The cell at `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        Some(GridCell {
            row,
            col,
            luminosity: self.luminosity.value(row)?,
            radius: self.radius.value(col)?,
        })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + use<> {
        let luminosities = self.luminosity.values();
        let radii = self.radius.values();
        luminosities
            .into_iter()
            .enumerate()
            .flat_map(move |(row, luminosity)| {
                radii
                    .clone()
                    .into_iter()
                    .enumerate()
                    .map(move |(col, radius)| GridCell {
                        row,
                        col,
                        luminosity,
                        radius,
                    })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_enumeration() {
        let grid = SweepGrid::new(SweepAxis::new(70.0, 5.0, 1), SweepAxis::new(11.5, 0.5, 1));
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(grid.shape(), (3, 3));
        assert_eq!(cells.len(), 9);
        assert_eq!((cells[0].luminosity, cells[0].radius), (65.0, 11.0));
        assert_eq!((cells[1].luminosity, cells[1].radius), (65.0, 11.5));
        assert_eq!((cells[3].luminosity, cells[3].radius), (70.0, 11.0));
        assert_eq!((cells[8].row, cells[8].col), (2, 2));
        assert_eq!(grid.cell(1, 2), Some(cells[5]));
        assert_eq!(grid.cell(3, 0), None);
    }
}
