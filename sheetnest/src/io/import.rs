use crate::entities::{NestInstance, Part, PartId, SheetSpec};
use crate::io::ext_repr::{ExtNestInstance, ExtPart};
use anyhow::{Context, Result, bail, ensure};

/// Imports a request into the library, assigning every part its index as [`PartId`].
pub fn import(ext_instance: &ExtNestInstance) -> Result<NestInstance> {
    let sheet = import_sheet(ext_instance)?;
    let parts: Vec<Part> = ext_instance
        .parts
        .iter()
        .enumerate()
        .map(|(i, ext_part)| {
            import_part(PartId(i), ext_part).with_context(|| format!("invalid part {i}"))
        })
        .collect::<Result<_>>()?;

    Ok(NestInstance::new(ext_instance.name.clone(), parts, sheet))
}

pub fn import_sheet(ext_instance: &ExtNestInstance) -> Result<SheetSpec> {
    let length = positive(ext_instance.sheet_length, "sheet_length")?;
    let width = positive(ext_instance.sheet_width, "sheet_width")?;
    ensure!(
        ext_instance.spacing >= 0,
        "spacing must not be negative, got {}",
        ext_instance.spacing
    );
    Ok(SheetSpec::new(length, width, ext_instance.spacing as usize))
}

pub fn import_part(id: PartId, ext_part: &ExtPart) -> Result<Part> {
    let width = positive(ext_part.width, "width")?;
    let height = ext_part
        .height
        .map(|h| positive(h, "height"))
        .transpose()?;

    if let Some(height) = height {
        if ext_part.shape_type.is_square_footprint() && height != width {
            bail!(
                "a {} must have equal width and height, got {}x{}",
                ext_part.shape_type,
                width,
                height
            );
        }
    }

    Ok(Part::new(
        id,
        ext_part.shape_type,
        width,
        height,
        ext_part.meta.clone(),
    ))
}

fn positive(value: i64, name: &str) -> Result<usize> {
    ensure!(value > 0, "{name} must be positive, got {value}");
    usize::try_from(value).with_context(|| format!("{name} is out of range: {value}"))
}
