#![doc = document_features::document_features!()]
//! First-fit nesting of rectangles, squares and circles onto a sequence of fixed-size sheets.
//!
//! Parts are grouped by footprint, placed row-major from the top-left of an occupancy grid,
//! and whatever does not fit on one sheet overflows onto a fresh one until nothing remains.

/// Entities to model parts, sheets and the placements made on them
pub mod entities;

/// Errors surfaced by the nesting engine
pub mod error;

/// Importing requests into and exporting solutions out of this library
pub mod io;

/// Grouping, the single-sheet placement engine and the multi-sheet orchestrator
pub mod opt;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::NestError;
#[doc(inline)]
pub use opt::pack;
