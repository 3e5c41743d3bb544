//! Finger joints
//!
//! Finger and space widths are multiples of the material thickness. The
//! number of fingers follows the length of the edge, whatever is left is
//! split evenly between both ends.

use super::pen::{PartBuilder, Step};
use super::types::ToolkitSettings;
use lightboxkit_core::Result;

/// How a finger joint of a given length is laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerLayout {
    pub fingers: usize,
    pub finger: f64,
    pub space: f64,
    /// Length not covered by fingers and inner spaces, split on both ends
    pub leftover: f64,
}

impl FingerLayout {
    /// Layout of the counterpart: wider notches, narrower spaces.
    pub fn with_play(self, play: f64) -> Self {
        if self.fingers == 0 {
            return self;
        }
        Self {
            finger: self.finger + play,
            space: self.space - play,
            leftover: self.leftover - play,
            ..self
        }
    }

    /// Start of finger `i` measured from the beginning of the edge.
    pub fn finger_start(&self, i: usize) -> f64 {
        self.leftover / 2.0 + i as f64 * (self.space + self.finger)
    }
}

/// Number of fingers and leftover length for an edge of `length`.
pub fn calc_fingers(settings: &ToolkitSettings, length: f64) -> (usize, f64) {
    let fj = &settings.finger_joint;
    let t = settings.thickness;

    let space = settings.space_width();
    let finger = settings.finger_width();

    let mut fingers =
        ((length - (fj.surrounding_spaces - 1.0) * space) / (space + finger)).floor();
    if !fingers.is_finite() || fingers < 0.0 {
        fingers = 0.0;
    }
    let mut fingers = fingers as usize;

    // Shrink the surrounding spaces rather than leave a long edge bare
    if fingers == 0 && length > finger + t {
        fingers = 1;
    }

    if finger == 0.0 {
        fingers = 0;
    }

    let leftover = if fingers > 0 {
        length - fingers as f64 * (space + finger) + space
    } else {
        length
    };

    (fingers, leftover)
}

/// Full layout including the single small finger used on short edges.
pub fn finger_layout(settings: &ToolkitSettings, length: f64) -> FingerLayout {
    let (fingers, leftover) = calc_fingers(settings, length);
    let finger = settings.finger_width();
    let space = settings.space_width();

    if fingers == 0
        && finger > 0.0
        && leftover > 0.75 * settings.thickness
        && leftover > 4.0 * settings.play()
    {
        return FingerLayout {
            fingers: 1,
            finger: leftover / 2.0,
            space,
            leftover: leftover / 2.0,
        };
    }

    FingerLayout {
        fingers,
        finger,
        space,
        leftover,
    }
}

impl PartBuilder<'_> {
    /// Finger joint edge. Positive fingers stick out to the right of the
    /// pen, the counterpart cuts notches of one thickness to the left.
    pub fn finger_edge(&mut self, length: f64, positive: bool) -> &mut Self {
        let settings = self.settings();
        let t = settings.thickness;
        let mut layout = finger_layout(settings, length);
        if !positive {
            layout = layout.with_play(settings.play());
        }

        let height = if positive {
            t + settings.finger_joint.extra_length * t
        } else {
            t
        };
        let turn = if positive { -90.0 } else { 90.0 };

        self.edge(layout.leftover / 2.0);
        for i in 0..layout.fingers {
            if i != 0 {
                self.edge(layout.space);
            }
            self.polyline(&[
                Step::Turn(turn),
                Step::Line(height),
                Step::Turn(-turn),
                Step::Line(layout.finger),
                Step::Turn(-turn),
                Step::Line(height),
                Step::Turn(turn),
            ]);
        }
        self.edge(layout.leftover / 2.0);
        self
    }

    /// Slots receiving a finger joint of `length`, placed along the line
    /// from `(x, y)` at `angle` degrees. The pen does not move.
    pub fn finger_holes_at(&mut self, x: f64, y: f64, length: f64, angle: f64) -> Result<()> {
        let settings = self.settings();
        let layout = finger_layout(settings, length);
        let play = settings.play();
        let width = settings.finger_joint.hole_width * settings.thickness + play;

        self.with_frame(|b| -> Result<()> {
            b.move_to(x, y, angle);
            for i in 0..layout.fingers {
                let center = layout.finger_start(i) + layout.finger / 2.0;
                b.rectangular_hole(center, 0.0, layout.finger + play, width, 0.0, true, true)?;
            }
            Ok(())
        })
    }
}
