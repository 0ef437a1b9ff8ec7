use crate::entities::{PartMeta, ShapeKind};
use serde::{Deserialize, Serialize};

/// A nesting request
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNestInstance {
    /// The name of the request
    #[serde(default)]
    pub name: String,
    /// Number of rows of every sheet
    pub sheet_length: i64,
    /// Number of columns of every sheet
    pub sheet_width: i64,
    /// Minimum empty margin between placed parts
    #[serde(default)]
    pub spacing: i64,
    /// Parts to cut, in arrival order
    pub parts: Vec<ExtPart>,
}

/// A part as it appears in a request
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    pub shape_type: ShapeKind,
    pub width: i64,
    /// Defaults to `width`. Must equal `width` for squares and circles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(flatten)]
    pub meta: PartMeta,
}

/// A nesting solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNestSolution {
    /// Sheets in creation order
    pub sheets: Vec<ExtSheetLayout>,
    pub n_sheets: usize,
    pub n_parts: usize,
    /// Sum of the placed footprint areas divided by the sum of the sheet areas
    pub density: f32,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// Everything placed on one sheet
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheetLayout {
    pub index: usize,
    pub sheet_length: usize,
    pub sheet_width: usize,
    pub spacing: usize,
    pub density: f32,
    /// Placed parts in processing order
    pub placed_parts: Vec<ExtPlacedPart>,
}

/// One row of a sheet's cut list
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPart {
    /// 1-based sequence number of the part on its sheet
    pub seq: usize,
    /// Index of the part in the request
    pub part_id: usize,
    pub shape_type: ShapeKind,
    /// Row of the footprint's top-left corner
    pub x: usize,
    /// Column of the footprint's top-left corner
    pub y: usize,
    pub width: usize,
    pub height: usize,
    #[serde(flatten)]
    pub meta: PartMeta,
}
