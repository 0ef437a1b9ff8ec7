use crate::entities::{NestSolution, PlacementResult};
use crate::io::ext_repr::{ExtNestSolution, ExtPlacedPart, ExtSheetLayout};
use std::time::Instant;

/// Exports a solution out of the library
pub fn export(solution: &NestSolution, epoch: Instant) -> ExtNestSolution {
    ExtNestSolution {
        sheets: solution.layouts.iter().map(export_layout).collect(),
        n_sheets: solution.n_sheets(),
        n_parts: solution.n_placed(),
        density: solution.density(),
        run_time_ms: solution
            .time_stamp
            .saturating_duration_since(epoch)
            .as_millis() as u64,
    }
}

/// Exports a single sheet as its cut list
pub fn export_layout(layout: &PlacementResult) -> ExtSheetLayout {
    let placed_parts = layout
        .placed
        .values()
        .enumerate()
        .map(|(i, pp)| ExtPlacedPart {
            seq: i + 1,
            part_id: pp.part.id.0,
            shape_type: pp.part.kind,
            x: pp.position.x,
            y: pp.position.y,
            width: pp.part.width,
            height: pp.part.height,
            meta: pp.part.meta.clone(),
        })
        .collect();

    ExtSheetLayout {
        index: layout.sheet_index,
        sheet_length: layout.sheet.length,
        sheet_width: layout.sheet.width,
        spacing: layout.sheet.spacing,
        density: layout.density(),
        placed_parts,
    }
}
