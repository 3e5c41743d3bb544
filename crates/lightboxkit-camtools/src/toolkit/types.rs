//! Settings shared by every drawing primitive

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerJointSettings {
    /// Width of fingers in multiples of thickness
    pub finger: f64,
    /// Space between fingers in multiples of thickness
    pub space: f64,
    /// Space at start and end in multiples of normal spaces
    pub surrounding_spaces: f64,
    /// Extra space to allow fingers to move in/out (multiples of thickness)
    pub play: f64,
    /// Extra material for burn marks (multiples of thickness)
    pub extra_length: f64,
    /// Width of finger holes in multiples of thickness
    pub hole_width: f64,
}

impl Default for FingerJointSettings {
    fn default() -> Self {
        Self {
            finger: 2.0,
            space: 2.0,
            surrounding_spaces: 1.0,
            play: 0.0,
            extra_length: 0.0,
            hole_width: 1.0,
        }
    }
}

/// Feet drawn by the stackable edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackableSettings {
    /// Height of the feet in multiples of thickness
    pub height: f64,
    /// Inside angle of the feet in degrees
    pub angle: f64,
    /// Width of the flat foot at each end in multiples of thickness
    pub width: f64,
    /// Distance between the feet and the finger holes above them in
    /// multiples of thickness
    pub hole_distance: f64,
}

impl Default for StackableSettings {
    fn default() -> Self {
        Self {
            height: 2.0,
            angle: 60.0,
            width: 4.0,
            hole_distance: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HingeSettings {
    /// Diameter of the axle hole in multiples of thickness
    pub axle: f64,
    /// Material around the axle hole in multiples of thickness
    pub hinge_strength: f64,
    /// Pin width as a fraction of the widest pin that fits the axle hole
    pub pin_width: f64,
}

impl Default for HingeSettings {
    fn default() -> Self {
        Self {
            axle: 2.5,
            hinge_strength: 0.3,
            pin_width: 0.4,
        }
    }
}

/// Material and joinery settings for one generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitSettings {
    /// Material thickness (mm)
    pub thickness: f64,
    /// Kerf width of the laser (mm), half of it is compensated on each side
    pub burn: f64,
    /// Gap between parts on the sheet (mm)
    pub spacing: f64,
    pub finger_joint: FingerJointSettings,
    pub stackable: StackableSettings,
    pub hinge: HingeSettings,
}

impl Default for ToolkitSettings {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            burn: 0.1,
            spacing: 5.0,
            finger_joint: FingerJointSettings::default(),
            stackable: StackableSettings::default(),
            hinge: HingeSettings::default(),
        }
    }
}

impl ToolkitSettings {
    pub fn with_thickness(thickness: f64) -> Self {
        Self {
            thickness,
            ..Self::default()
        }
    }

    pub fn finger_width(&self) -> f64 {
        self.finger_joint.finger * self.thickness
    }

    pub fn space_width(&self) -> f64 {
        self.finger_joint.space * self.thickness
    }

    pub fn play(&self) -> f64 {
        self.finger_joint.play * self.thickness
    }

    pub fn foot_height(&self) -> f64 {
        self.stackable.height * self.thickness
    }

    pub fn foot_width(&self) -> f64 {
        self.stackable.width * self.thickness
    }

    /// Height of the floor above the bottom of a stackable edge: feet, the
    /// hole distance and the floor thickness.
    pub fn stackable_floor(&self) -> f64 {
        (self.stackable.height + self.stackable.hole_distance) * self.thickness + self.thickness
    }

    /// Radius of the two arcs forming each foot slope.
    pub fn foot_radius(&self) -> f64 {
        self.foot_height() / 2.0 / (1.0 - self.stackable.angle.to_radians().cos())
    }

    /// Length along the edge taken by one foot arc.
    pub fn foot_arc_length(&self) -> f64 {
        self.foot_radius() * self.stackable.angle.to_radians().sin()
    }

    pub fn axle_diameter(&self) -> f64 {
        self.hinge.axle * self.thickness
    }

    /// Radius of the hinge knuckle around the axle.
    pub fn knuckle_radius(&self) -> f64 {
        0.5 * self.axle_diameter() + self.hinge.hinge_strength * self.thickness
    }

    /// Width of a hinge pin that still turns inside the axle hole.
    pub fn pin_length(&self) -> f64 {
        let axle = self.axle_diameter();
        (axle * axle - self.thickness * self.thickness).max(0.0).sqrt() * self.hinge.pin_width
    }

    pub fn validate(&self) -> ParameterResult<()> {
        if !(self.thickness > 0.0 && self.thickness <= 20.0) {
            return Err(ParameterError::OutOfRange {
                name: "thickness".to_string(),
                value: self.thickness,
                min: 0.0,
                max: 20.0,
            });
        }

        if self.burn < 0.0 || self.burn >= self.thickness {
            return Err(ParameterError::OutOfRange {
                name: "burn".to_string(),
                value: self.burn,
                min: 0.0,
                max: self.thickness,
            });
        }

        if self.spacing < 0.0 {
            return Err(ParameterError::invalid("spacing", "must not be negative"));
        }

        let fj = &self.finger_joint;
        if fj.finger < 0.0 || fj.space < 0.0 || fj.surrounding_spaces < 0.0 {
            return Err(ParameterError::invalid(
                "finger_joint",
                "finger, space and surrounding spaces must not be negative",
            ));
        }
        if (fj.space + fj.finger).abs() < 0.1 {
            return Err(ParameterError::invalid(
                "finger_joint",
                "finger + space must not be close to zero",
            ));
        }
        if fj.play < 0.0 || fj.play >= fj.space {
            return Err(ParameterError::invalid(
                "finger_joint.play",
                "play must be smaller than the space between fingers",
            ));
        }
        if fj.hole_width <= 0.0 {
            return Err(ParameterError::invalid(
                "finger_joint.hole_width",
                "must be positive",
            ));
        }

        let st = &self.stackable;
        if st.height <= 0.0 || st.width < 0.0 || st.hole_distance < 0.0 {
            return Err(ParameterError::invalid(
                "stackable",
                "height must be positive, width and hole distance not negative",
            ));
        }
        if !(st.angle > 0.0 && st.angle <= 90.0) {
            return Err(ParameterError::OutOfRange {
                name: "stackable.angle".to_string(),
                value: st.angle,
                min: 0.0,
                max: 90.0,
            });
        }

        let hinge = &self.hinge;
        if hinge.axle <= 1.0 {
            return Err(ParameterError::invalid(
                "hinge.axle",
                "axle must be wider than the material thickness",
            ));
        }
        if hinge.hinge_strength <= 0.0 {
            return Err(ParameterError::invalid(
                "hinge.hinge_strength",
                "must be positive",
            ));
        }
        if !(hinge.pin_width > 0.0 && hinge.pin_width <= 1.0) {
            return Err(ParameterError::OutOfRange {
                name: "hinge.pin_width".to_string(),
                value: hinge.pin_width,
                min: 0.0,
                max: 1.0,
            });
        }

        Ok(())
    }
}
