use serde::{Deserialize, Serialize};
use sheetnest::io::svg::SvgDrawOptions;
use sheetnest::opt::{PackConfig, PlacementOrder};

/// Configuration for a nesting run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct NestConfig {
    /// Order in which parts are fed to the packer
    #[serde(default)]
    pub placement_order: PlacementOrder,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
    /// Write one SVG drawing per sheet
    #[serde(default = "default_true")]
    pub export_svg: bool,
    /// Write one DXF drawing per sheet
    #[serde(default)]
    pub export_dxf: bool,
}

fn default_true() -> bool {
    true
}

impl NestConfig {
    pub fn pack_config(&self) -> PackConfig {
        PackConfig {
            placement_order: self.placement_order,
        }
    }
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            placement_order: PlacementOrder::Arrival,
            svg_draw_options: SvgDrawOptions::default(),
            export_svg: true,
            export_dxf: false,
        }
    }
}
