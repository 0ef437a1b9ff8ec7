use crate::entities::{NestSolution, Part, PlacementResult, Sheet};
use itertools::Itertools;
use log::error;
use std::collections::HashSet;
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn instance_part_ids_correct(parts: &[Part]) -> bool {
    parts.iter().enumerate().all(|(i, part)| part.id.0 == i)
}

/// Every placed part has a footprint inside the sheet
pub fn placements_within_bounds(result: &PlacementResult) -> bool {
    result.placed.values().all(|pp| {
        let Some(x_end) = pp.position.x.checked_add(pp.part.height) else {
            return false;
        };
        let Some(y_end) = pp.position.y.checked_add(pp.part.width) else {
            return false;
        };
        x_end <= result.sheet.length && y_end <= result.sheet.width
    })
}

/// Every cell reserved on behalf of a placed part is marked occupied on the sheet
pub fn sheet_covers_reservations(sheet: &Sheet, result: &PlacementResult) -> bool {
    let spacing = sheet.spacing();
    for pp in result.placed.values() {
        let row_start = pp.position.x + spacing;
        let col_start = pp.position.y + spacing;
        let row_end = usize::min(row_start + pp.part.height + spacing, sheet.length());
        let col_end = usize::min(col_start + pp.part.width + spacing, sheet.width());
        for (x, y) in (row_start..row_end).cartesian_product(col_start..col_end) {
            if !sheet.is_occupied(x, y) {
                error!(
                    "cell ({x}, {y}) reserved by part {} is not occupied",
                    pp.part.id
                );
                return false;
            }
        }
    }
    true
}

/// Every part of the request is placed exactly once over all sheets, and nothing is left over
pub fn solution_covers_parts(solution: &NestSolution, parts: &[Part]) -> bool {
    let mut seen = HashSet::new();
    for layout in &solution.layouts {
        for id in layout.placed.keys() {
            if !seen.insert(*id) {
                error!("part {id} is placed more than once");
                return false;
            }
        }
    }
    let all_placed = parts.iter().all(|p| seen.contains(&p.id));
    let nothing_left = solution
        .layouts
        .last()
        .is_none_or(|l| l.leftover.is_empty());

    all_placed && nothing_left && seen.len() == parts.len()
}
