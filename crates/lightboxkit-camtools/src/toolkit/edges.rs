//! Edge styles
//!
//! Every edge is drawn along the pen direction with the part material on
//! the left. The start width is how far the edge's base line sits outside
//! the inner rectangle of a wall; walls use it to size their corners.

use super::pen::{PartBuilder, Step};
use crate::error::{ParameterError, ParameterResult};
use lightboxkit_core::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// `e`
    Straight,
    /// `E`, straight edge outset by one thickness
    Outset,
    /// `f`
    FingerJoint,
    /// `F`
    FingerJointCounterpart,
    /// `s`, feet plus the finger holes for the floor above them
    Stackable,
    /// `š`, feet only
    StackableFeet,
    /// `i`, flush hinge knuckle at the start of the edge
    HingeKnuckle,
    /// `I`
    HingePinStart,
    /// `J`
    HingePinEnd,
}

impl TryFrom<char> for EdgeKind {
    type Error = ParameterError;

    fn try_from(c: char) -> ParameterResult<Self> {
        match c {
            'e' => Ok(Self::Straight),
            'E' => Ok(Self::Outset),
            'f' => Ok(Self::FingerJoint),
            'F' => Ok(Self::FingerJointCounterpart),
            's' => Ok(Self::Stackable),
            'š' => Ok(Self::StackableFeet),
            'i' => Ok(Self::HingeKnuckle),
            'I' => Ok(Self::HingePinStart),
            'J' => Ok(Self::HingePinEnd),
            other => Err(ParameterError::invalid(
                "edges",
                format!("unknown edge type '{}'", other),
            )),
        }
    }
}

impl EdgeKind {
    pub fn as_char(self) -> char {
        match self {
            Self::Straight => 'e',
            Self::Outset => 'E',
            Self::FingerJoint => 'f',
            Self::FingerJointCounterpart => 'F',
            Self::Stackable => 's',
            Self::StackableFeet => 'š',
            Self::HingeKnuckle => 'i',
            Self::HingePinStart => 'I',
            Self::HingePinEnd => 'J',
        }
    }

    /// Parse an edge string such as `"ffFF"`.
    pub fn parse_all(edges: &str) -> ParameterResult<Vec<Self>> {
        edges.chars().map(Self::try_from).collect()
    }

    pub fn start_width(self, builder: &PartBuilder<'_>) -> f64 {
        let settings = builder.settings();
        let t = settings.thickness;
        match self {
            Self::Straight
            | Self::FingerJoint
            | Self::HingeKnuckle
            | Self::HingePinStart
            | Self::HingePinEnd => 0.0,
            Self::Outset | Self::FingerJointCounterpart => t,
            Self::Stackable => settings.stackable_floor(),
            Self::StackableFeet => settings.foot_height(),
        }
    }

    pub fn end_width(self, builder: &PartBuilder<'_>) -> f64 {
        self.start_width(builder)
    }

    pub fn draw(self, builder: &mut PartBuilder<'_>, length: f64) -> Result<()> {
        match self {
            Self::Straight | Self::Outset => {
                builder.edge(length);
            }
            Self::FingerJoint => {
                builder.finger_edge(length, true);
            }
            Self::FingerJointCounterpart => {
                builder.finger_edge(length, false);
            }
            Self::Stackable => {
                let y = self.start_width(builder) - 0.5 * builder.t();
                builder.finger_holes_at(0.0, y, length, 0.0)?;
                builder.stackable_edge(length);
            }
            Self::StackableFeet => {
                builder.stackable_edge(length);
            }
            Self::HingeKnuckle => builder.hinge_knuckle_edge(length)?,
            Self::HingePinStart => {
                builder.hinge_pin_edge(length, true);
            }
            Self::HingePinEnd => {
                builder.hinge_pin_edge(length, false);
            }
        }
        Ok(())
    }
}

impl PartBuilder<'_> {
    /// Draw an edge given by its character.
    pub fn edge_of(&mut self, kind: char, length: f64) -> crate::error::CamToolResult<()> {
        let kind = EdgeKind::try_from(kind)?;
        kind.draw(self, length)?;
        Ok(())
    }

    /// Bottom edge with a flat foot at each end and the middle raised by
    /// the foot height.
    pub fn stackable_edge(&mut self, length: f64) -> &mut Self {
        let settings = self.settings();
        let angle = settings.stackable.angle;
        let width = settings.foot_width();
        let r = settings.foot_radius();
        let l = settings.foot_arc_length();

        self.edge(width)
            .corner_arc(angle, r)
            .corner_arc(-angle, r)
            .edge(length - 2.0 * width - 4.0 * l)
            .corner_arc(-angle, r)
            .corner_arc(angle, r)
            .edge(width)
    }

    /// Edge starting with a flush knuckle carrying the axle hole. The
    /// knuckle sticks out to the right of the pen.
    pub fn hinge_knuckle_edge(&mut self, length: f64) -> Result<()> {
        let settings = self.settings();
        let t = settings.thickness;
        let r = settings.knuckle_radius();
        let axle = settings.axle_diameter();
        let knuckle_length = 2.0 * r + 0.5 * t;

        self.hole(r, -0.5 * t, axle / 2.0)?;
        self.polyline(&[
            Step::Turn(-90.0),
            Step::Line(0.5 * t),
            Step::Bend(180.0, r),
            Step::Bend(-90.0, 0.5 * t),
        ]);
        self.edge(length - knuckle_length);
        Ok(())
    }

    /// Straight edge with a pin fitting the axle hole, centered one knuckle
    /// radius from the start (or the end).
    pub fn hinge_pin_edge(&mut self, length: f64, at_start: bool) -> &mut Self {
        let settings = self.settings();
        let t = settings.thickness;
        let pin = settings.pin_length();
        let offset = settings.knuckle_radius() - pin / 2.0;

        let (before, after) = if at_start {
            (offset, length - offset - pin)
        } else {
            (length - offset - pin, offset)
        };

        self.edge(before).polyline(&[
            Step::Turn(-90.0),
            Step::Line(t),
            Step::Turn(90.0),
            Step::Line(pin),
            Step::Turn(90.0),
            Step::Line(t),
            Step::Turn(-90.0),
        ]);
        self.edge(after)
    }

    /// Length along the edge taken by the hinge knuckle.
    pub fn hinge_knuckle_length(&self) -> f64 {
        2.0 * self.settings().knuckle_radius() + 0.5 * self.t()
    }
}
