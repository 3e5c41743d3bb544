//! # LightBoxKit CAM Tools
//!
//! This crate draws laser-cut parts and writes them out for a laser cutter.
//!
//! ## Contents
//!
//! - **Toolkit**: Pen based part drawing, finger joints, stackable feet,
//!   hinges, rectangular walls and part layout
//! - **Night Light Box**: Parametric generator for a lamp made of stacked
//!   engraved plates in front of a diffuser
//! - **Kerf**: Compensation of the material burnt away by the laser
//! - **Exporters**: SVG, G-code and DXF writers

pub mod dxf_export;
pub mod error;
pub mod export;
pub mod gcode_export;
pub mod kerf;
pub mod night_light_box;
pub mod svg_export;
pub mod toolkit;

// Re-export commonly used items
pub use error::{
    CamToolError, CamToolResult, ExportError, ExportResult, ParameterError, ParameterResult,
};
pub use export::{export_sheet, write_file, ExportOptions, OutputFormat};
pub use gcode_export::LaserSettings;
pub use kerf::{compensate_part, compensate_sheet};
pub use night_light_box::{
    BoxStyle, ExtraHole, NightLightBox, NightLightBoxParameters, ASSEMBLY_STEPS,
    DEFAULT_BACK_EXTRA_HOLES, WOOD_PLATE_LABEL,
};
pub use svg_export::SvgOptions;
pub use toolkit::{
    rectangular_wall, EdgeKind, FingerJointSettings, HingeSettings, LayoutCursor, PartBuilder,
    Placement, StackableSettings, ToolkitSettings,
};
