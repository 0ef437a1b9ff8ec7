use crate::entities::Part;
use ndarray::{Array2, s};
use serde::{Deserialize, Serialize};

/// Dimensions and spacing shared by every sheet of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetSpec {
    /// Number of rows
    pub length: usize,
    /// Number of columns
    pub width: usize,
    /// Minimum empty margin required between placed parts
    pub spacing: usize,
}

impl SheetSpec {
    pub fn new(length: usize, width: usize, spacing: usize) -> Self {
        Self {
            length,
            width,
            spacing,
        }
    }

    pub fn area(&self) -> usize {
        self.length * self.width
    }

    /// Whether `part`, together with its trailing spacing, fits on an empty sheet.
    pub fn can_hold(&self, part: &Part) -> bool {
        part.height + self.spacing <= self.length && part.width + self.spacing <= self.width
    }
}

/// A single panel of material, modeled as a `length x width` occupancy grid.
///
/// Cells are only ever set, never cleared: a sheet is append-only for the lifetime of a pass.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub spec: SheetSpec,
    occupancy: Array2<bool>,
}

impl Sheet {
    pub fn new(spec: SheetSpec) -> Self {
        Self {
            spec,
            occupancy: Array2::from_elem((spec.length, spec.width), false),
        }
    }

    pub fn length(&self) -> usize {
        self.spec.length
    }

    pub fn width(&self) -> usize {
        self.spec.width
    }

    pub fn spacing(&self) -> usize {
        self.spec.spacing
    }

    /// Marks the footprint and its trailing spacing margin as occupied, starting at `(x, y)`.
    /// Cells outside the grid are skipped.
    pub fn reserve(&mut self, x: usize, y: usize, part: &Part) {
        let row_end = usize::min(x + part.height + self.spacing(), self.length());
        let col_end = usize::min(y + part.width + self.spacing(), self.width());
        let row_start = usize::min(x, row_end);
        let col_start = usize::min(y, col_end);

        self.occupancy
            .slice_mut(s![row_start..row_end, col_start..col_end])
            .fill(true);
    }

    /// Whether the part's bare footprint (no spacing) lies inside the grid on free cells only.
    pub fn fits(&self, x: usize, y: usize, part: &Part) -> bool {
        if x + part.height > self.length() || y + part.width > self.width() {
            return false;
        }
        !self
            .occupancy
            .slice(s![x..x + part.height, y..y + part.width])
            .iter()
            .any(|&occupied| occupied)
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.occupancy[[x, y]]
    }

    pub fn n_occupied(&self) -> usize {
        self.occupancy.iter().filter(|&&occupied| occupied).count()
    }

    pub fn occupancy(&self) -> &Array2<bool> {
        &self.occupancy
    }
}
