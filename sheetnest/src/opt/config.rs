use serde::{Deserialize, Serialize};

/// Order in which parts are handed to the placement engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOrder {
    /// Groups in first-seen order, parts in arrival order within a group
    #[default]
    Arrival,
    /// Parts are stably sorted by their largest dimension, descending, before grouping
    DecreasingMaxDimension,
}

/// Configuration of the packing engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackConfig {
    #[serde(default)]
    pub placement_order: PlacementOrder,
}
