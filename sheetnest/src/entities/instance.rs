use crate::entities::{Part, PartId, SheetSpec};
use crate::util::assertions::instance_part_ids_correct;

/// A nesting request: the parts to cut and the sheet they are cut from.
#[derive(Debug, Clone)]
pub struct NestInstance {
    pub name: String,
    /// Parts in arrival order, `parts[i].id == PartId(i)`
    pub parts: Vec<Part>,
    pub sheet: SheetSpec,
}

impl NestInstance {
    pub fn new(name: String, parts: Vec<Part>, sheet: SheetSpec) -> Self {
        assert!(instance_part_ids_correct(&parts));

        Self { name, parts, sheet }
    }

    pub fn part(&self, id: PartId) -> &Part {
        &self.parts[id.0]
    }

    pub fn n_parts(&self) -> usize {
        self.parts.len()
    }

    pub fn total_part_area(&self) -> usize {
        self.parts.iter().map(Part::area).sum()
    }
}
