mod instance;
mod part;
mod placement;
mod sheet;

#[doc(inline)]
pub use instance::NestInstance;
#[doc(inline)]
pub use part::GroupKey;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use part::PartId;
#[doc(inline)]
pub use part::PartMeta;
#[doc(inline)]
pub use part::ShapeKind;
#[doc(inline)]
pub use placement::Groups;
#[doc(inline)]
pub use placement::NestSolution;
#[doc(inline)]
pub use placement::PlacedPart;
#[doc(inline)]
pub use placement::PlacementResult;
#[doc(inline)]
pub use placement::Position;
#[doc(inline)]
pub use sheet::Sheet;
#[doc(inline)]
pub use sheet::SheetSpec;
