/// External (serializable) representations of requests and solutions.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Rendering of sheet layouts as SVG documents
pub mod svg;

/// Rendering of sheet layouts as DXF drawings
#[cfg(feature = "dxf")]
pub mod dxf_export;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
