//! Placement of finished parts on the sheet

use crate::error::ParameterError;
use lightboxkit_core::{Part, Sheet};
use std::str::FromStr;

/// Where to put a part relative to the previous one, parsed from
/// space-separated terms such as `"left up"` or `"up mirror"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Flip the part left to right
    pub mirror: bool,
    /// Move the cursor but leave the part out
    pub only: bool,
}

impl Placement {
    pub const UP: Placement = Placement {
        up: true,
        down: false,
        left: false,
        right: false,
        mirror: false,
        only: false,
    };
}

impl FromStr for Placement {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut placement = Placement::default();
        for term in s.split_whitespace() {
            match term {
                "up" => placement.up = true,
                "down" => placement.down = true,
                "left" => placement.left = true,
                "right" => placement.right = true,
                "mirror" => placement.mirror = true,
                "only" => placement.only = true,
                other => {
                    return Err(ParameterError::invalid(
                        "placement",
                        format!("unknown direction '{}'", other),
                    ))
                }
            }
        }
        Ok(placement)
    }
}

/// Running position on the sheet. Moves to the left and down happen
/// before a part is placed, moves to the right and up after it.
#[derive(Clone, Copy, Debug)]
pub struct LayoutCursor {
    x: f64,
    y: f64,
    spacing: f64,
}

impl LayoutCursor {
    pub fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            spacing,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Place `part` on `sheet`. Returns false when the placement only
    /// moved the cursor.
    pub fn place(&mut self, sheet: &mut Sheet, mut part: Part, placement: Placement) -> bool {
        let bbox = part.bounding_box();
        let width = bbox.width() + self.spacing;
        let height = bbox.height() + self.spacing;

        if placement.left {
            self.x -= width;
        }
        if placement.down {
            self.y -= height;
        }

        if placement.only {
            if placement.right {
                self.x += width;
            }
            if placement.up {
                self.y += height;
            }
            return false;
        }

        if placement.mirror {
            part.mirror_horizontal();
        }
        let half = self.spacing / 2.0;
        part.move_to(self.x + half, self.y + half);
        sheet.push(part);

        if placement.right {
            self.x += width;
        }
        if placement.up {
            self.y += height;
        }
        true
    }
}
