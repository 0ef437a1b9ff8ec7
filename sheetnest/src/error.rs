use crate::entities::{PartId, SheetSpec};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NestError>;

/// Errors that stop a packing request. None of them are retried by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestError {
    #[error("sheet dimensions must be positive, got {length}x{width}")]
    InvalidSheetDimensions { length: usize, width: usize },

    #[error("part {part} has invalid dimensions {width}x{height}: {reason}")]
    InvalidPartDimensions {
        part: PartId,
        width: usize,
        height: usize,
        reason: &'static str,
    },

    #[error(
        "part {part} ({width}x{height}) can never fit a {}x{} sheet with spacing {}",
        .sheet.length, .sheet.width, .sheet.spacing
    )]
    UnplaceablePart {
        part: PartId,
        width: usize,
        height: usize,
        sheet: SheetSpec,
    },

    #[error("part {0} appears more than once in the request")]
    DuplicatePartId(PartId),

    #[error("sheet {sheet} made no progress, {} parts remain: {remaining:?}", .remaining.len())]
    NonTerminatingPacking { sheet: usize, remaining: Vec<PartId> },

    #[error("packing was cancelled")]
    Cancelled,
}
