//! Output format selection and file writing

use crate::dxf_export::to_dxf;
use crate::error::{ExportError, ExportResult};
use crate::gcode_export::{to_gcode, LaserSettings};
use crate::kerf::compensate_sheet;
use crate::svg_export::{to_svg, SvgOptions};
use lightboxkit_core::Sheet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Gcode,
    Dxf,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Gcode => "gcode",
            OutputFormat::Dxf => "dxf",
        }
    }

    /// Format implied by a file name, if its extension is known.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "gcode" | "nc" | "ngc" => Ok(OutputFormat::Gcode),
            "dxf" => Ok(OutputFormat::Dxf),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Everything an exporter may need besides the sheet.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub format: OutputFormat,
    /// Kerf to compensate (mm), 0 to cut the nominal paths
    pub burn: f64,
    pub svg: SvgOptions,
    pub laser: LaserSettings,
    /// Header comment lines for formats that carry them
    pub description: Vec<String>,
}

pub fn export_sheet(sheet: &Sheet, options: &ExportOptions) -> ExportResult<String> {
    let sheet = compensate_sheet(sheet, options.burn);
    match options.format {
        OutputFormat::Svg => to_svg(&sheet, &options.svg),
        OutputFormat::Gcode => to_gcode(&sheet, &options.description, &options.laser),
        OutputFormat::Dxf => to_dxf(&sheet),
    }
}

pub fn write_file(sheet: &Sheet, options: &ExportOptions, path: &Path) -> ExportResult<()> {
    let content = export_sheet(sheet, options)?;
    std::fs::write(path, content)?;
    info!("Wrote {} parts as {} to {}", sheet.len(), options.format, path.display());
    Ok(())
}
