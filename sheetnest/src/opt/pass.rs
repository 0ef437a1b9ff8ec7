use crate::entities::{Groups, PlacedPart, PlacementResult, Sheet};
use crate::error::{NestError, Result};
use crate::opt::search::first_fit;
use crate::util::assertions;
use indexmap::IndexMap;
use log::{debug, warn};

/// Runs one placement pass: every part of `groups` is either placed on `sheet` or deferred.
///
/// Parts are handled group by group, in member order. For each part the first free position
/// is searched with [`first_fit`]. The part's footprint is reported at that position, but the
/// occupancy is written one `spacing` step further down and to the right, with an extent of
/// footprint plus spacing:
///
/// ```text
/// fit test:  [x, x + height)                 x [y, y + width)
/// reserve:   [x + s, x + s + height + s)     x [y + s, y + s + width + s)
/// ```
///
/// Downstream drawings rely on exactly these coordinates.
/// Parts without a position go to the leftover, keyed by their group, and leave the sheet
/// untouched.
///
/// `is_cancelled` is consulted before every part; a cancelled pass yields no result.
pub fn place_on_sheet<'a>(
    sheet: &mut Sheet,
    sheet_index: usize,
    groups: &Groups<'a>,
    probe_counter: &mut usize,
    is_cancelled: &dyn Fn() -> bool,
) -> Result<PlacementResult<'a>> {
    let spacing = sheet.spacing();
    let mut placed = IndexMap::new();
    let mut leftover = Groups::new();

    for (key, parts) in groups {
        for &part in parts {
            if is_cancelled() {
                return Err(NestError::Cancelled);
            }
            match first_fit(sheet, part, probe_counter) {
                Some(position) => {
                    sheet.reserve(position.x + spacing, position.y + spacing, part);
                    debug!(
                        "[PASS] placed {} {} at ({}, {}) on sheet {}",
                        key, part.id, position.x, position.y, sheet_index
                    );
                    placed.insert(part.id, PlacedPart { part, position });
                }
                None => {
                    warn!(
                        "[PASS] no space for {} {} on sheet {}, deferring",
                        key, part.id, sheet_index
                    );
                    leftover.entry(*key).or_insert_with(Vec::new).push(part);
                }
            }
        }
    }

    let result = PlacementResult {
        sheet_index,
        sheet: sheet.spec,
        placed,
        leftover,
    };

    debug_assert!(assertions::placements_within_bounds(&result));
    debug_assert!(assertions::sheet_covers_reservations(sheet, &result));

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Part, PartId, PartMeta, Position, SheetSpec, ShapeKind};
    use crate::opt::grouping::group;

    fn squares(n: usize, side: usize) -> Vec<Part> {
        (0..n)
            .map(|i| Part::new(PartId(i), ShapeKind::Square, side, None, PartMeta::default()))
            .collect()
    }

    #[test]
    fn reservation_is_offset_by_spacing() {
        let parts = squares(1, 3);
        let mut sheet = Sheet::new(SheetSpec::new(10, 10, 2));
        let result = place_on_sheet(&mut sheet, 0, &group(&parts), &mut 0, &|| false).unwrap();

        assert_eq!(result.position(PartId(0)), Some(Position::new(0, 0)));
        // the drawn origin stays free, the block [2, 7) x [2, 7) is reserved
        assert!(!sheet.is_occupied(0, 0));
        assert!(!sheet.is_occupied(1, 1));
        assert!(sheet.is_occupied(2, 2));
        assert!(sheet.is_occupied(6, 6));
        assert!(!sheet.is_occupied(7, 7));
        assert_eq!(sheet.n_occupied(), 25);
    }

    #[test]
    fn unplaced_parts_leave_the_sheet_untouched() {
        let parts = squares(3, 6);
        let mut sheet = Sheet::new(SheetSpec::new(10, 10, 0));
        let result = place_on_sheet(&mut sheet, 0, &group(&parts), &mut 0, &|| false).unwrap();

        assert_eq!(result.n_placed(), 1);
        assert_eq!(result.leftover_ids(), vec![PartId(1), PartId(2)]);
        assert_eq!(result.leftover.len(), 1);
        assert_eq!(sheet.n_occupied(), 36);
    }

    #[test]
    fn cancellation_is_checked_before_each_part() {
        let parts = squares(4, 1);
        let mut sheet = Sheet::new(SheetSpec::new(10, 10, 0));
        let calls = std::cell::Cell::new(0);
        let is_cancelled = || {
            calls.set(calls.get() + 1);
            calls.get() > 2
        };
        let result = place_on_sheet(&mut sheet, 0, &group(&parts), &mut 0, &is_cancelled);

        assert_eq!(result.unwrap_err(), NestError::Cancelled);
        assert_eq!(calls.get(), 3);
        // the two parts placed before cancelling are fully reserved
        assert_eq!(sheet.n_occupied(), 2);
    }
}
