use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::{info, warn};
use sheetnest::entities::NestSolution;
use sheetnest::io::svg::layout_to_svg;
use sheetnest::io::{dxf_export, export, import};
use sheetnest::opt::Packer;

use crate::EPOCH;
use crate::config::NestConfig;
use crate::io;
use crate::io::output::NestOutput;

/// Derives one output stem per request file.
///
/// The stem is the file stem. Files sharing a stem (e.g. `a/req.json` and `b/req.json`) get their
/// position in `input_files` appended. Stems that still collide are rejected.
pub fn output_stems(input_files: &[PathBuf]) -> Result<Vec<String>> {
    let file_stems: Vec<&str> = input_files
        .iter()
        .map(|f| {
            f.file_stem()
                .and_then(|s| s.to_str())
                .with_context(|| format!("request file has no usable name: {}", f.display()))
        })
        .collect::<Result<_>>()?;

    let counts = file_stems.iter().counts();
    let stems = file_stems
        .iter()
        .enumerate()
        .map(|(i, stem)| match counts[stem] {
            1 => stem.to_string(),
            _ => {
                warn!("[MAIN] several requests are named {stem}, suffixing outputs with _{i}");
                format!("{stem}_{i}")
            }
        })
        .collect_vec();

    ensure!(
        stems.iter().all_unique(),
        "request outputs would overwrite each other: {}",
        stems.iter().duplicates().join(", ")
    );
    Ok(stems)
}

/// Packs a single request file and writes its outputs into `output_folder`,
/// all named after `input_stem`.
pub fn run_request(
    input_file: &Path,
    input_stem: &str,
    config: NestConfig,
    output_folder: &Path,
) -> Result<NestOutput> {
    let ext_instance = io::read_instance(input_file)?;
    let instance = import(&ext_instance).with_context(|| format!("invalid request: {input_stem}"))?;
    info!(
        "[MAIN] request {input_stem}: {} parts ({} cells) on {}x{} sheets (spacing {})",
        instance.n_parts(),
        instance.total_part_area(),
        instance.sheet.length,
        instance.sheet.width,
        instance.sheet.spacing
    );

    let solution = Packer::new(&instance.parts, instance.sheet, config.pack_config())
        .solve()
        .with_context(|| format!("could not pack request: {input_stem}"))?;

    let output = NestOutput {
        instance: ext_instance,
        solution: export(&solution, *EPOCH),
        config,
    };
    io::write_json(&output, &output_folder.join(format!("sol_{input_stem}.json")))?;

    write_drawings(&solution, config, input_stem, output_folder)?;

    Ok(output)
}

fn write_drawings(
    solution: &NestSolution,
    config: NestConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    for layout in &solution.layouts {
        let i = layout.sheet_index;
        if config.export_svg {
            let svg = layout_to_svg(layout, config.svg_draw_options, input_stem);
            io::write_svg(&svg, &output_folder.join(format!("sol_{input_stem}_{i}.svg")))?;
        }
        if config.export_dxf {
            let drawing = dxf_export::layout_to_dxf(layout);
            io::write_dxf(&drawing, &output_folder.join(format!("sol_{input_stem}_{i}.dxf")))?;
        }
    }
    Ok(())
}
