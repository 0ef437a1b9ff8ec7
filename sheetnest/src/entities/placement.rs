use crate::entities::{GroupKey, Part, PartId, SheetSpec};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Top-left origin of a part's footprint on a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, bounded by the sheet length
    pub x: usize,
    /// Column, bounded by the sheet width
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A part together with the position it was placed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedPart<'a> {
    pub part: &'a Part,
    pub position: Position,
}

/// Parts grouped by footprint, in first-seen key order and arrival order within a key.
pub type Groups<'a> = IndexMap<GroupKey, Vec<&'a Part>>;

/// Outcome of one placement pass over one sheet.
#[derive(Clone, Debug)]
pub struct PlacementResult<'a> {
    /// Index of the sheet within the solution, starting at 0
    pub sheet_index: usize,
    pub sheet: SheetSpec,
    /// Placed parts keyed by identity, in processing order
    pub placed: IndexMap<PartId, PlacedPart<'a>>,
    /// Parts that found no position on this sheet, to be retried on the next one
    pub leftover: Groups<'a>,
}

impl<'a> PlacementResult<'a> {
    pub fn n_placed(&self) -> usize {
        self.placed.len()
    }

    pub fn n_leftover(&self) -> usize {
        self.leftover.values().map(Vec::len).sum()
    }

    pub fn leftover_ids(&self) -> Vec<PartId> {
        self.leftover.values().flatten().map(|p| p.id).collect()
    }

    pub fn position(&self, id: PartId) -> Option<Position> {
        self.placed.get(&id).map(|pp| pp.position)
    }

    pub fn placed_area(&self) -> usize {
        self.placed.values().map(|pp| pp.part.area()).sum()
    }

    /// Sum of the placed footprint areas divided by the sheet area
    pub fn density(&self) -> f32 {
        self.placed_area() as f32 / self.sheet.area() as f32
    }
}

/// All sheets consumed by a request, in creation order.
#[derive(Clone, Debug)]
pub struct NestSolution<'a> {
    pub layouts: Vec<PlacementResult<'a>>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl<'a> NestSolution<'a> {
    pub fn n_sheets(&self) -> usize {
        self.layouts.len()
    }

    pub fn n_placed(&self) -> usize {
        self.layouts.iter().map(|l| l.n_placed()).sum()
    }

    /// The sheet index and position a part ended up on
    pub fn position_of(&self, id: PartId) -> Option<(usize, Position)> {
        self.layouts
            .iter()
            .find_map(|l| l.position(id).map(|pos| (l.sheet_index, pos)))
    }

    pub fn density(&self) -> f32 {
        let total_sheet_area: usize = self.layouts.iter().map(|l| l.sheet.area()).sum();
        let total_part_area: usize = self.layouts.iter().map(|l| l.placed_area()).sum();
        match total_sheet_area {
            0 => 0.0,
            _ => total_part_area as f32 / total_sheet_area as f32,
        }
    }
}
