//! Type definitions for the night light box generator

use super::extra_holes::ExtraHole;
use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the front of the box is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxStyle {
    /// Narrow frame around the window
    #[serde(rename = "minimalist")]
    Minimalist,
    #[default]
    #[serde(rename = "large face")]
    LargeFace,
    /// Large face plus a separate face plate held by pegs
    #[serde(rename = "extra customizable face")]
    ExtraCustomizableFace,
}

impl BoxStyle {
    pub const ALL: [BoxStyle; 3] = [
        BoxStyle::Minimalist,
        BoxStyle::LargeFace,
        BoxStyle::ExtraCustomizableFace,
    ];

    pub fn is_minimalist(self) -> bool {
        self == BoxStyle::Minimalist
    }

    /// Frame around the window on each side of the front, in thicknesses.
    pub fn frame_factor(self) -> f64 {
        if self.is_minimalist() {
            4.0
        } else {
            8.0
        }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxStyle::Minimalist => write!(f, "minimalist"),
            BoxStyle::LargeFace => write!(f, "large face"),
            BoxStyle::ExtraCustomizableFace => write!(f, "extra customizable face"),
        }
    }
}

impl FromStr for BoxStyle {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "minimalist" => Ok(BoxStyle::Minimalist),
            "large face" => Ok(BoxStyle::LargeFace),
            "extra customizable face" => Ok(BoxStyle::ExtraCustomizableFace),
            other => Err(ParameterError::invalid(
                "box_style",
                format!(
                    "'{}' is not one of minimalist, large face, extra customizable face",
                    other
                ),
            )),
        }
    }
}

pub const DEFAULT_BACK_EXTRA_HOLES: &str = "R 20 10 11.5 8\nC 11.58 10 3\nC 28.42 10 3";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightLightBoxParameters {
    pub box_style: BoxStyle,
    /// Width of the window in the front panel (mm)
    pub plate_visible_width: f64,
    /// Height of the window in the front panel (mm)
    pub plate_visible_height: f64,
    /// Corner radius of the window (mm)
    pub window_corner: f64,
    pub wood_plates_count: u32,
    pub wood_plate_thickness: f64,
    /// Thickness of the acrylic diffuser behind the plates (mm)
    pub diffuser_plate_thickness: f64,
    /// Depth of the zone for electronics and LEDs (mm)
    pub background_depth: f64,
    pub inter_plate_spacing: f64,
    /// Hooked ears on the decorative plates
    pub hooks: bool,
    /// Clearance for moving parts (mm)
    pub margin: f64,
    /// Connector holes in the back panel, one per line: `R x y w h` or
    /// `C x y d`
    pub back_extra_holes: String,
    /// 0 disables the screws
    pub lock_screw_diameter: f64,
    pub lock_screw_length: f64,
    pub lock_nut_thickness: f64,
    pub lock_nut_width: f64,
}

impl Default for NightLightBoxParameters {
    fn default() -> Self {
        Self {
            box_style: BoxStyle::LargeFace,
            plate_visible_width: 150.0,
            plate_visible_height: 75.0,
            window_corner: 5.0,
            wood_plates_count: 3,
            wood_plate_thickness: 5.0,
            diffuser_plate_thickness: 5.0,
            background_depth: 40.0,
            inter_plate_spacing: 10.0,
            hooks: false,
            margin: 0.5,
            back_extra_holes: DEFAULT_BACK_EXTRA_HOLES.to_string(),
            lock_screw_diameter: 0.0,
            lock_screw_length: 16.0,
            lock_nut_thickness: 2.4,
            lock_nut_width: 5.5,
        }
    }
}

fn positive(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::invalid(name, format!("must be positive, got {}", value)))
    }
}

fn not_negative(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::invalid(name, format!("must not be negative, got {}", value)))
    }
}

impl NightLightBoxParameters {
    pub fn uses_screws(&self) -> bool {
        self.lock_screw_diameter > 0.0
    }

    /// Inner depth of the box.
    pub fn inner_depth(&self) -> f64 {
        self.background_depth
            + self.diffuser_plate_thickness
            + (self.wood_plate_thickness + self.inter_plate_spacing) * self.wood_plates_count as f64
            + self.inter_plate_spacing
    }

    /// Inner width of the box for material `thickness`.
    pub fn inner_width(&self, thickness: f64) -> f64 {
        self.box_style.frame_factor() * thickness + self.plate_visible_width + self.margin
    }

    /// Inner height of the box for material `thickness`.
    pub fn inner_height(&self, thickness: f64) -> f64 {
        self.plate_visible_height + self.box_style.frame_factor() * thickness + self.margin
    }

    /// Parsed back panel holes.
    pub fn extra_holes(&self) -> ParameterResult<Vec<ExtraHole>> {
        ExtraHole::parse_list(&self.back_extra_holes)
    }

    /// Check the parameters against material `thickness`.
    pub fn validate(&self, thickness: f64) -> ParameterResult<()> {
        positive("thickness", thickness)?;
        positive("plate_visible_width", self.plate_visible_width)?;
        positive("plate_visible_height", self.plate_visible_height)?;
        positive("wood_plate_thickness", self.wood_plate_thickness)?;
        positive("diffuser_plate_thickness", self.diffuser_plate_thickness)?;
        positive("background_depth", self.background_depth)?;
        positive("inter_plate_spacing", self.inter_plate_spacing)?;
        not_negative("margin", self.margin)?;
        not_negative("window_corner", self.window_corner)?;
        not_negative("lock_screw_diameter", self.lock_screw_diameter)?;

        if self.margin >= thickness {
            return Err(ParameterError::OutOfRange {
                name: "margin".to_string(),
                value: self.margin,
                min: 0.0,
                max: thickness,
            });
        }

        if self.inter_plate_spacing <= self.margin {
            return Err(ParameterError::Incompatible(format!(
                "inter_plate_spacing ({}) must be larger than margin ({})",
                self.inter_plate_spacing, self.margin
            )));
        }

        if self.background_depth <= 5.0 * thickness {
            return Err(ParameterError::Incompatible(format!(
                "background_depth ({}) must be larger than 5 x thickness ({}) to leave room for the hinge",
                self.background_depth,
                5.0 * thickness
            )));
        }

        let max_corner = self.plate_visible_width.min(self.plate_visible_height) / 2.0;
        if self.window_corner > max_corner {
            return Err(ParameterError::OutOfRange {
                name: "window_corner".to_string(),
                value: self.window_corner,
                min: 0.0,
                max: max_corner,
            });
        }

        if self.uses_screws() {
            positive("lock_nut_thickness", self.lock_nut_thickness)?;
            if self.lock_nut_width <= self.lock_screw_diameter {
                return Err(ParameterError::Incompatible(format!(
                    "lock_nut_width ({}) must be larger than lock_screw_diameter ({})",
                    self.lock_nut_width, self.lock_screw_diameter
                )));
            }
            if self.lock_screw_length <= self.lock_nut_thickness + thickness {
                return Err(ParameterError::Incompatible(format!(
                    "lock_screw_length ({}) must exceed nut thickness plus material thickness ({})",
                    self.lock_screw_length,
                    self.lock_nut_thickness + thickness
                )));
            }
        }

        self.extra_holes()?;
        Ok(())
    }
}
