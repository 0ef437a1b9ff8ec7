use std::collections::HashSet;
use std::time::Instant;

use crate::entities::{NestSolution, Part, PartId, PlacementResult, Sheet, SheetSpec};
use crate::error::{NestError, Result};
use crate::opt::config::PackConfig;
use crate::opt::grouping::{group, part_order};
use crate::opt::pass::place_on_sheet;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info};
use thousands::Separable;

/// Optional function to check if packing should be cancelled
pub type CancellationChecker<'c> = Box<dyn Fn() -> bool + Send + Sync + 'c>;

/// Multi-sheet first-fit packer.
///
/// Repeats grouping and a placement pass over fresh sheets until every part is placed.
/// All parts are validated up front, so a part that can never fit is reported instead of
/// being deferred forever.
pub struct Packer<'a, 'c> {
    pub parts: &'a [Part],
    pub sheet: SheetSpec,
    pub config: PackConfig,
    pub probe_counter: usize,
    cancellation_checker: Option<CancellationChecker<'c>>,
}

impl<'a, 'c> Packer<'a, 'c> {
    pub fn new(parts: &'a [Part], sheet: SheetSpec, config: PackConfig) -> Self {
        Self {
            parts,
            sheet,
            config,
            probe_counter: 0,
            cancellation_checker: None,
        }
    }

    pub fn with_cancellation_checker(mut self, checker: CancellationChecker<'c>) -> Self {
        self.cancellation_checker = Some(checker);
        self
    }

    pub fn solve(&mut self) -> Result<NestSolution<'a>> {
        let start = Instant::now();
        validate(self.parts, self.sheet)?;

        let mut groups = group(part_order(self.parts, self.config.placement_order));
        let mut layouts: Vec<PlacementResult<'a>> = vec![];

        loop {
            let sheet_index = layouts.len();
            let mut sheet = Sheet::new(self.sheet);
            let n_probes_before = self.probe_counter;
            let fed_ids = groups.values().flatten().map(|p| p.id).collect_vec();

            let checker = &self.cancellation_checker;
            let is_cancelled = || checker.as_ref().is_some_and(|checker| checker());

            let result = place_on_sheet(
                &mut sheet,
                sheet_index,
                &groups,
                &mut self.probe_counter,
                &is_cancelled,
            )?;

            info!(
                "[NEST] sheet {} holds {} parts, {} remaining ({} probes, density {:.3}%)",
                sheet_index,
                result.n_placed(),
                result.n_leftover(),
                (self.probe_counter - n_probes_before).separate_with_commas(),
                result.density() * 100.0
            );

            check_progress(&fed_ids, &result)?;

            groups = result.leftover.clone();
            layouts.push(result);

            if groups.is_empty() {
                break;
            }
            debug!("[NEST] opening sheet {}", sheet_index + 1);
        }

        let solution = NestSolution {
            layouts,
            time_stamp: Instant::now(),
        };

        debug_assert!(assertions::solution_covers_parts(&solution, self.parts));

        info!(
            "[NEST] packed {} parts on {} sheets in {:.3}ms ({} probes)",
            solution.n_placed(),
            solution.n_sheets(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.probe_counter.separate_with_commas()
        );

        Ok(solution)
    }
}

/// Packs `parts` onto as many `sheet_length x sheet_width` sheets as needed.
///
/// Returns one [`PlacementResult`] per sheet consumed, in creation order.
/// Only the last result has an empty leftover.
pub fn pack(
    parts: &[Part],
    sheet_length: usize,
    sheet_width: usize,
    spacing: usize,
) -> Result<Vec<PlacementResult<'_>>> {
    let sheet = SheetSpec::new(sheet_length, sheet_width, spacing);
    Packer::new(parts, sheet, PackConfig::default())
        .solve()
        .map(|solution| solution.layouts)
}

/// Checks every part against the sheet before any packing starts.
///
/// A part that does not fit the bare sheet has invalid dimensions; a part that only fails
/// once its spacing margin is added is unplaceable.
pub fn validate(parts: &[Part], sheet: SheetSpec) -> Result<()> {
    if sheet.length == 0 || sheet.width == 0 {
        return Err(NestError::InvalidSheetDimensions {
            length: sheet.length,
            width: sheet.width,
        });
    }

    let mut seen = HashSet::with_capacity(parts.len());
    for part in parts {
        if !seen.insert(part.id) {
            return Err(NestError::DuplicatePartId(part.id));
        }
        let invalid = |reason| NestError::InvalidPartDimensions {
            part: part.id,
            width: part.width,
            height: part.height,
            reason,
        };
        if part.width == 0 || part.height == 0 {
            return Err(invalid("dimensions must be positive"));
        }
        if part.height > sheet.length || part.width > sheet.width {
            return Err(invalid("larger than the sheet"));
        }
        if !sheet.can_hold(part) {
            return Err(NestError::UnplaceablePart {
                part: part.id,
                width: part.width,
                height: part.height,
                sheet,
            });
        }
    }
    Ok(())
}

/// Fails when a pass over a fresh sheet deferred every part it was fed:
/// the next sheet would be identical, so packing would never end.
pub fn check_progress(fed_ids: &[PartId], result: &PlacementResult) -> Result<()> {
    let remaining = result.leftover_ids();
    match !remaining.is_empty() && remaining == fed_ids {
        true => Err(NestError::NonTerminatingPacking {
            sheet: result.sheet_index,
            remaining,
        }),
        false => Ok(()),
    }
}
