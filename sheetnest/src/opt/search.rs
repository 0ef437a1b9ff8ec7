use crate::entities::{Part, Position, Sheet};
use itertools::Itertools;

/// Scans the sheet row-major from the top-left and returns the first position where the part fits.
///
/// The scan stops `spacing` short of the far edges in both axes, leaving room for the trailing
/// margin that [`Sheet::reserve`] will add. Every tested coordinate increments `probe_counter`.
pub fn first_fit(sheet: &Sheet, part: &Part, probe_counter: &mut usize) -> Option<Position> {
    let x_max = sheet.length().checked_sub(part.height + sheet.spacing())?;
    let y_max = sheet.width().checked_sub(part.width + sheet.spacing())?;

    (0..=x_max)
        .cartesian_product(0..=y_max)
        .find(|&(x, y)| {
            *probe_counter += 1;
            sheet.fits(x, y, part)
        })
        .map(Position::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PartId, PartMeta, SheetSpec, ShapeKind};

    fn rect(width: usize, height: usize) -> Part {
        Part::new(
            PartId(0),
            ShapeKind::Rectangle,
            width,
            Some(height),
            PartMeta::default(),
        )
    }

    #[test]
    fn empty_sheet_yields_origin() {
        let sheet = Sheet::new(SheetSpec::new(10, 10, 0));
        let mut probes = 0;
        assert_eq!(first_fit(&sheet, &rect(5, 5), &mut probes), Some(Position::new(0, 0)));
        assert_eq!(probes, 1);
    }

    #[test]
    fn scan_advances_columns_before_rows() {
        let mut sheet = Sheet::new(SheetSpec::new(10, 10, 0));
        sheet.reserve(0, 0, &rect(3, 3));
        let mut probes = 0;
        assert_eq!(first_fit(&sheet, &rect(3, 3), &mut probes), Some(Position::new(0, 3)));
        assert_eq!(probes, 4);
    }

    #[test]
    fn oversized_part_has_no_candidates() {
        let sheet = Sheet::new(SheetSpec::new(6, 6, 2));
        let mut probes = 0;
        // 5 + 2 > 6
        assert_eq!(first_fit(&sheet, &rect(5, 1), &mut probes), None);
        assert_eq!(first_fit(&sheet, &rect(1, 5), &mut probes), None);
        assert_eq!(probes, 0);
    }

    #[test]
    fn scan_range_excludes_the_trailing_margin() {
        let mut sheet = Sheet::new(SheetSpec::new(3, 6, 1));
        sheet.reserve(0, 0, &rect(3, 3));
        // cols 4..6 are free and wide enough for the part, but not for its trailing margin
        let mut probes = 0;
        assert_eq!(first_fit(&sheet, &rect(2, 2), &mut probes), None);
        assert_eq!(probes, 4);
    }
}
