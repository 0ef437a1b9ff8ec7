use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of a [`Part`] within a single request.
/// Placements are keyed by it, so parts with equal footprints never collapse into one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub usize);

impl Display for PartId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Square,
    /// Packed as its bounding square
    Circle,
}

impl ShapeKind {
    /// Whether the footprint of this kind is square by construction
    pub fn is_square_footprint(&self) -> bool {
        matches!(self, ShapeKind::Square | ShapeKind::Circle)
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
        };
        f.write_str(name)
    }
}

/// Descriptive fields carried from the request to the output. Never inspected by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_spec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_of_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Parts sharing a key are interchangeable for placement purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub width: usize,
    pub height: usize,
    pub kind: ShapeKind,
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}x{}", self.kind, self.width, self.height)
    }
}

/// A single physical part to be cut from a sheet.
///
/// `width` spans the columns of a sheet, `height` spans its rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub id: PartId,
    pub kind: ShapeKind,
    pub width: usize,
    pub height: usize,
    pub meta: PartMeta,
}

impl Part {
    /// Creates a new part. An unset `height` is derived from `width`.
    /// Squares and circles always get `height == width`.
    pub fn new(
        id: PartId,
        kind: ShapeKind,
        width: usize,
        height: Option<usize>,
        meta: PartMeta,
    ) -> Self {
        let height = match kind.is_square_footprint() {
            true => width,
            false => height.unwrap_or(width),
        };
        Self {
            id,
            kind,
            width,
            height,
            meta,
        }
    }

    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            width: self.width,
            height: self.height,
            kind: self.kind,
        }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn max_dimension(&self) -> usize {
        usize::max(self.width, self.height)
    }
}
