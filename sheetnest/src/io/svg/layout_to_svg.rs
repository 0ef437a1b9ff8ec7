use crate::entities::{PlacedPart, PlacementResult, ShapeKind};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws one sheet and its placed parts.
///
/// The horizontal axis is the sheet column (`y`), the vertical axis the sheet row (`x`).
/// Circles are drawn inscribed in their square footprint.
pub fn layout_to_svg(layout: &PlacementResult, options: SvgDrawOptions, title: &str) -> Document {
    let sheet = &layout.sheet;
    let (sheet_w, sheet_h) = (sheet.width as f32, sheet.length as f32);
    let theme = &options.theme;

    let stroke_width = f32::min(sheet_w, sheet_h) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f32::min(sheet_w, sheet_h) * 0.025;

    let label = {
        //print some information above the top left of the sheet
        let label_content = format!(
            "sheet: {} | length: {} | width: {} | spacing: {} | density: {:.3}% | {}",
            layout.sheet_index,
            sheet.length,
            sheet.width,
            sheet.spacing,
            layout.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let sheet_group = Group::new()
        .set("id", format!("sheet_{}", layout.sheet_index))
        .add(svg_util::rect(
            0.0,
            0.0,
            sheet_w,
            sheet_h,
            &[
                ("fill", &*format!("{}", theme.sheet_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "sheet, index: {}, length: {}, width: {}",
            layout.sheet_index, sheet.length, sheet.width
        )));

    let part_fill = format!("{}", theme.part_fill);
    let part_stroke_width = format!("{}", stroke_width);
    let part_style = [
        ("fill", part_fill.as_str()),
        ("stroke", "black"),
        ("stroke-width", part_stroke_width.as_str()),
        ("fill-opacity", "0.8"),
    ];

    let mut parts_group = Group::new().set("id", "parts");
    let mut reserved_group = Group::new().set("id", "reserved");
    let mut labels_group = Group::new().set("id", "labels");

    for (i, pp) in layout.placed.values().enumerate() {
        let seq = i + 1;
        let PlacedPart { part, position } = *pp;
        let (px, py) = (position.y as f32, position.x as f32);
        let (pw, ph) = (part.width as f32, part.height as f32);

        let title = Title::new(format!(
            "part {}, {} {}x{} at ({}, {}){}",
            seq,
            part.kind,
            part.width,
            part.height,
            position.x,
            position.y,
            part.meta
                .part_description
                .as_deref()
                .map(|d| format!(", {d}"))
                .unwrap_or_default()
        ));

        let shape_group = Group::new().set("id", format!("part_{}", part.id.0));
        let shape_group = match part.kind {
            ShapeKind::Rectangle | ShapeKind::Square => {
                shape_group.add(svg_util::rect(px, py, pw, ph, &part_style))
            }
            ShapeKind::Circle => shape_group.add(svg_util::circle(
                px + pw / 2.0,
                py + ph / 2.0,
                pw / 2.0,
                &part_style,
            )),
        };
        parts_group = parts_group.add(shape_group.add(title));

        if options.draw_labels {
            labels_group = labels_group.add(
                Text::new(format!("{seq}"))
                    .set("x", px + pw / 2.0)
                    .set("y", py + ph / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-size", f32::min(font_size, 0.5 * f32::min(pw, ph)))
                    .set("font-family", "monospace")
                    .set("fill", format!("{}", theme.label_color)),
            );
        }

        if options.highlight_reserved {
            //reservations start one spacing step past the drawn origin, clipped to the sheet
            let spacing = sheet.spacing as f32;
            let (rx, ry) = (px + spacing, py + spacing);
            let rw = f32::min(pw + spacing, sheet_w - rx);
            let rh = f32::min(ph + spacing, sheet_h - ry);
            if rw > 0.0 && rh > 0.0 {
                reserved_group = reserved_group.add(svg_util::rect(
                    rx,
                    ry,
                    rw,
                    rh,
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.reserved_color)),
                        ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                        (
                            "stroke-dasharray",
                            &*format!("{} {}", 1.0 * stroke_width, 2.0 * stroke_width),
                        ),
                    ],
                ));
            }
        }
    }

    let margin = 0.05 * f32::max(sheet_w, sheet_h);
    let vbox_svg = (
        -margin,
        -margin - font_size,
        sheet_w + 2.0 * margin,
        sheet_h + 2.0 * margin + font_size,
    );

    Document::new()
        .set("viewBox", vbox_svg)
        .add(sheet_group)
        .add(parts_group)
        .add(reserved_group)
        .add(labels_group)
        .add(label)
}
