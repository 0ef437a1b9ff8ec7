use crate::entities::{PlacementResult, ShapeKind};
use dxf::Drawing;
use dxf::{LwPolylineVertex, Point};
use dxf::entities::{Circle, Entity, EntityType, LwPolyline};

/// Converts one sheet into a DXF drawing.
///
/// Rectangles and squares become closed light-weight polylines, circles become circles
/// inscribed in their footprint. As in the SVG output, the drawing's x-axis is the sheet
/// column and its y-axis the sheet row.
pub fn layout_to_dxf(layout: &PlacementResult) -> Drawing {
    let mut drawing = Drawing::new();

    for pp in layout.placed.values() {
        let (x0, y0) = (pp.position.y as f64, pp.position.x as f64);
        let (w, h) = (pp.part.width as f64, pp.part.height as f64);

        let entity_type = match pp.part.kind {
            ShapeKind::Rectangle | ShapeKind::Square => {
                let mut polyline = LwPolyline::default();
                //the first corner is repeated to close the outline
                for (x, y) in [(x0, y0), (x0 + w, y0), (x0 + w, y0 + h), (x0, y0 + h), (x0, y0)] {
                    polyline.vertices.push(LwPolylineVertex {
                        x,
                        y,
                        ..Default::default()
                    });
                }
                EntityType::LwPolyline(polyline)
            }
            ShapeKind::Circle => EntityType::Circle(Circle::new(
                Point::new(x0 + w / 2.0, y0 + w / 2.0, 0.0),
                w / 2.0,
            )),
        };
        drawing.add_entity(Entity::new(entity_type));
    }

    drawing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Part, PartId, PartMeta};
    use crate::opt::pack;

    #[test]
    fn one_entity_per_placed_part() {
        let parts = vec![
            Part::new(PartId(0), ShapeKind::Rectangle, 4, Some(2), PartMeta::default()),
            Part::new(PartId(1), ShapeKind::Circle, 3, None, PartMeta::default()),
            Part::new(PartId(2), ShapeKind::Square, 2, None, PartMeta::default()),
        ];
        let layouts = pack(&parts, 10, 10, 0).unwrap();
        let drawing = layout_to_dxf(&layouts[0]);

        let entities = drawing.entities().collect::<Vec<_>>();
        assert_eq!(entities.len(), 3);

        match &entities[1].specific {
            EntityType::Circle(circle) => {
                // placed at row 0, col 4
                assert_eq!((circle.center.x, circle.center.y), (5.5, 1.5));
                assert_eq!(circle.radius, 1.5);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }
}
