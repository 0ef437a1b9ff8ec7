use crate::entities::{Groups, Part};
use crate::opt::config::PlacementOrder;
use itertools::Itertools;
use std::cmp::Reverse;

/// Partitions parts by `(width, height, shape kind)`.
/// Keys keep their first-seen order, parts keep their input order within a key.
pub fn group<'a>(parts: impl IntoIterator<Item = &'a Part>) -> Groups<'a> {
    let mut groups = Groups::new();
    for part in parts {
        groups.entry(part.group_key()).or_default().push(part);
    }
    groups
}

/// The sequence in which parts are grouped and placed.
pub fn part_order(parts: &[Part], order: PlacementOrder) -> Vec<&Part> {
    match order {
        PlacementOrder::Arrival => parts.iter().collect_vec(),
        //stable: ties keep their arrival order
        PlacementOrder::DecreasingMaxDimension => parts
            .iter()
            .sorted_by_key(|p| Reverse(p.max_dimension()))
            .collect_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GroupKey, PartId, PartMeta, ShapeKind};

    fn parts() -> Vec<Part> {
        let specs = [
            (ShapeKind::Rectangle, 4, Some(2)),
            (ShapeKind::Circle, 3, None),
            (ShapeKind::Rectangle, 4, Some(2)),
            (ShapeKind::Square, 3, None),
            (ShapeKind::Circle, 3, None),
            (ShapeKind::Rectangle, 2, Some(4)),
            (ShapeKind::Square, 5, None),
        ];
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, w, h))| Part::new(PartId(i), kind, w, h, PartMeta::default()))
            .collect()
    }

    #[test]
    fn groups_in_first_seen_order() {
        let parts = parts();
        let groups = group(&parts);

        let keys = groups.keys().copied().collect_vec();
        assert_eq!(
            keys,
            vec![
                GroupKey {
                    width: 4,
                    height: 2,
                    kind: ShapeKind::Rectangle,
                },
                GroupKey {
                    width: 3,
                    height: 3,
                    kind: ShapeKind::Circle,
                },
                GroupKey {
                    width: 3,
                    height: 3,
                    kind: ShapeKind::Square,
                },
                GroupKey {
                    width: 2,
                    height: 4,
                    kind: ShapeKind::Rectangle,
                },
                GroupKey {
                    width: 5,
                    height: 5,
                    kind: ShapeKind::Square,
                },
            ]
        );

        let members = |i: usize| groups[i].iter().map(|p| p.id.0).collect_vec();
        assert_eq!(members(0), vec![0, 2]);
        assert_eq!(members(1), vec![1, 4]);
        assert_eq!(members(2), vec![3]);
    }

    #[test]
    fn arrival_order_is_untouched() {
        let parts = parts();
        let ids = part_order(&parts, PlacementOrder::Arrival)
            .iter()
            .map(|p| p.id.0)
            .collect_vec();
        assert_eq!(ids, (0..parts.len()).collect_vec());
    }

    #[test]
    fn decreasing_order_is_stable() {
        let parts = parts();
        let ids = part_order(&parts, PlacementOrder::DecreasingMaxDimension)
            .iter()
            .map(|p| p.id.0)
            .collect_vec();
        // max dims: 4, 3, 4, 3, 3, 4, 5
        assert_eq!(ids, vec![6, 0, 2, 5, 1, 3, 4]);
    }
}
