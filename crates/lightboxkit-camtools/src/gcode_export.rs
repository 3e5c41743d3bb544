//! G-code export for GRBL style laser cutters
//!
//! Every part is cut from the inside out: engravings first at low power,
//! then the holes, then the outline that holds them.

use crate::error::{ExportError, ExportResult, ParameterError, ParameterResult};
use lightboxkit_core::{Path, PathKind, Sheet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserSettings {
    /// Passes per cut path
    pub passes: u32,
    /// Spindle value while cutting (S)
    pub power: u32,
    /// Cutting feed rate (mm/min)
    pub feed_rate: f64,
    /// Spindle value while engraving annotations (S)
    pub etch_power: u32,
    /// Engraving feed rate (mm/min)
    pub etch_feed_rate: f64,
    /// Work origin offset (mm)
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for LaserSettings {
    fn default() -> Self {
        Self {
            passes: 1,
            power: 1000,
            feed_rate: 500.0,
            etch_power: 300,
            etch_feed_rate: 1500.0,
            offset_x: 10.0,
            offset_y: 10.0,
        }
    }
}

impl LaserSettings {
    pub fn validate(&self) -> ParameterResult<()> {
        if self.passes == 0 {
            return Err(ParameterError::invalid("passes", "at least one pass is needed"));
        }
        if self.power == 0 {
            return Err(ParameterError::invalid("power", "must be positive"));
        }
        for (name, value) in [
            ("feed_rate", self.feed_rate),
            ("etch_feed_rate", self.etch_feed_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::OutOfRange {
                    name: name.to_string(),
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                });
            }
        }
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(ParameterError::invalid("offset", "must be a finite number"));
        }
        Ok(())
    }
}

/// Write the sheet as a laser job. `description` lines go into the header
/// as comments.
pub fn to_gcode(sheet: &Sheet, description: &[String], laser: &LaserSettings) -> ExportResult<String> {
    if sheet.is_empty() {
        return Err(ExportError::EmptySheet("the sheet has no parts".to_string()));
    }

    let mut gcode = String::new();

    gcode.push_str("; LightBoxKit Night Light Box G-code\n");
    gcode.push_str("; Based on https://github.com/florianfesti/boxes\n");
    gcode.push_str(&format!(
        "; Generated: {}\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    gcode.push_str(";\n");

    if !description.is_empty() {
        gcode.push_str("; --- Box ---\n");
        for line in description {
            gcode.push_str(&format!("; {}\n", line));
        }
        gcode.push_str(";\n");
    }

    gcode.push_str("; --- Laser Settings ---\n");
    gcode.push_str(&format!("; Laser passes: {}\n", laser.passes));
    gcode.push_str(&format!("; Laser power: S{}\n", laser.power));
    gcode.push_str(&format!("; Feed rate: {:.0} mm/min\n", laser.feed_rate));
    gcode.push_str(&format!("; Engrave power: S{}\n", laser.etch_power));
    gcode.push_str(&format!(
        "; Engrave feed rate: {:.0} mm/min\n",
        laser.etch_feed_rate
    ));
    gcode.push_str(";\n");

    gcode.push_str("; --- Work Origin Offsets ---\n");
    gcode.push_str(&format!("; Offset X: {} mm\n", laser.offset_x));
    gcode.push_str(&format!("; Offset Y: {} mm\n", laser.offset_y));
    gcode.push_str(&format!("; Parts: {}\n", sheet.len()));
    gcode.push_str(";\n");

    gcode.push_str("; Initialization\n");
    gcode.push_str("G21 ; Set units to millimeters\n");
    gcode.push_str("G90 ; Absolute positioning\n");
    gcode.push_str("G17 ; XY plane selection\n");
    gcode.push_str("M5 ; Laser off\n");
    gcode.push('\n');

    // Emitted coordinates start at the work origin offsets whatever the
    // layout did
    let bbox = sheet.bounding_box();
    let shift_x = laser.offset_x - bbox.min_x;
    let shift_y = laser.offset_y - bbox.min_y;

    for (i, part) in sheet.iter().enumerate() {
        gcode.push_str(&format!(
            "; Part {}: {}\n",
            i + 1,
            part.label.replace('\n', " ")
        ));

        for kind in [PathKind::Annotation, PathKind::Hole, PathKind::Outline] {
            for path in part.paths_of(kind) {
                emit_path(&mut gcode, path, laser, shift_x, shift_y);
            }
        }

        gcode.push('\n');
    }

    gcode.push_str("M5 ; Ensure laser off\n");
    gcode.push_str("G0 X0 Y0 ; Return to origin\n");
    gcode.push_str("M2 ; Program end\n");

    Ok(gcode)
}

fn emit_path(gcode: &mut String, path: &Path, laser: &LaserSettings, shift_x: f64, shift_y: f64) {
    let Some(first) = path.points.first() else {
        return;
    };

    let (passes, power, feed_rate) = match path.kind {
        PathKind::Annotation => (1, laser.etch_power, laser.etch_feed_rate),
        _ => (laser.passes, laser.power, laser.feed_rate),
    };

    gcode.push_str(&format!("; {}\n", path.kind));
    gcode.push_str(&format!(
        "G0 X{:.2} Y{:.2} ; Rapid to start\n",
        first.x + shift_x,
        first.y + shift_y
    ));

    for pass_num in 1..=passes {
        if passes > 1 {
            gcode.push_str(&format!("; Pass {}/{}\n", pass_num, passes));
        }
        gcode.push_str(&format!("M3 S{} ; Laser on\n", power));

        // back to the first point to close the path
        let closing = std::iter::once(first);
        for (idx, point) in path.points.iter().skip(1).chain(closing).enumerate() {
            if idx == 0 {
                gcode.push_str(&format!(
                    "G1 X{:.2} Y{:.2} F{:.0}\n",
                    point.x + shift_x,
                    point.y + shift_y,
                    feed_rate
                ));
            } else {
                gcode.push_str(&format!(
                    "G1 X{:.2} Y{:.2}\n",
                    point.x + shift_x,
                    point.y + shift_y
                ));
            }
        }

        gcode.push_str("M5 ; Laser off\n");
    }
}
