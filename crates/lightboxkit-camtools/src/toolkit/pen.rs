//! Turtle-style part builder
//!
//! Outlines are drawn relative to a moving pen: `edge` goes forward,
//! `corner` turns (optionally along an arc). Holes and annotations are
//! placed relative to the pen but never move it.

use super::types::ToolkitSettings;
use lightboxkit_core::{push_unique_point, Part, Path, PathKind, Point, Result};

/// Maximum angle covered by one chord when flattening arcs.
const ARC_STEP_DEGREES: f64 = 5.0;

/// Position and heading of the pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub position: Point,
    /// Degrees, counter-clockwise from +x
    pub heading: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            heading: 0.0,
        }
    }
}

impl Pen {
    /// Map a point given in pen coordinates (x forward, y left) to part
    /// coordinates.
    pub fn to_part(&self, x: f64, y: f64) -> Point {
        let p = Point::new(x, y).rotate(self.heading);
        self.position.translate(p.x, p.y)
    }
}

/// One step of a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Straight segment of the given length
    Line(f64),
    /// Turn in place, positive is left
    Turn(f64),
    /// Turn along an arc of the given radius
    Bend(f64, f64),
}

pub struct PartBuilder<'a> {
    settings: &'a ToolkitSettings,
    pen: Pen,
    saved: Vec<Pen>,
    outline: Vec<Point>,
    paths: Vec<Path>,
}

impl<'a> PartBuilder<'a> {
    pub fn new(settings: &'a ToolkitSettings) -> Self {
        Self {
            settings,
            pen: Pen::default(),
            saved: Vec::new(),
            outline: Vec::new(),
            paths: Vec::new(),
        }
    }

    pub fn settings(&self) -> &'a ToolkitSettings {
        self.settings
    }

    /// Material thickness.
    pub fn t(&self) -> f64 {
        self.settings.thickness
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    fn start_outline(&mut self) {
        if self.outline.is_empty() {
            self.outline.push(self.pen.position);
        }
    }

    /// Draw a straight line forward.
    pub fn edge(&mut self, length: f64) -> &mut Self {
        if length.abs() < f64::EPSILON {
            return self;
        }
        self.start_outline();
        self.pen.position = self.pen.to_part(length, 0.0);
        push_unique_point(&mut self.outline, self.pen.position);
        self
    }

    /// Turn in place.
    pub fn corner(&mut self, degrees: f64) -> &mut Self {
        self.pen.heading = (self.pen.heading + degrees) % 360.0;
        self
    }

    /// Turn along an arc. A zero radius is a plain corner.
    pub fn corner_arc(&mut self, degrees: f64, radius: f64) -> &mut Self {
        if radius <= 0.0 || degrees == 0.0 {
            return self.corner(degrees);
        }
        self.start_outline();

        let side = degrees.signum();
        let start = self.pen;
        let heading = start.heading.to_radians();
        let center = start
            .position
            .translate(-side * radius * heading.sin(), side * radius * heading.cos());

        let steps = (degrees.abs() / ARC_STEP_DEGREES).ceil().max(1.0) as usize;
        for i in 1..=steps {
            let angle = (start.heading + degrees * i as f64 / steps as f64).to_radians();
            let point = center.translate(side * radius * angle.sin(), -side * radius * angle.cos());
            push_unique_point(&mut self.outline, point);
            self.pen.position = point;
        }
        self.pen.heading = (start.heading + degrees) % 360.0;
        self
    }

    pub fn polyline(&mut self, steps: &[Step]) -> &mut Self {
        for step in steps {
            match *step {
                Step::Line(length) => {
                    self.edge(length);
                }
                Step::Turn(degrees) => {
                    self.corner(degrees);
                }
                Step::Bend(degrees, radius) => {
                    self.corner_arc(degrees, radius);
                }
            }
        }
        self
    }

    /// Move the pen frame without drawing.
    pub fn move_to(&mut self, x: f64, y: f64, angle: f64) -> &mut Self {
        self.pen.position = self.pen.to_part(x, y);
        self.pen.heading = (self.pen.heading + angle) % 360.0;
        self
    }

    pub fn save(&mut self) {
        self.saved.push(self.pen);
    }

    pub fn restore(&mut self) {
        if let Some(pen) = self.saved.pop() {
            self.pen = pen;
        }
    }

    /// Run `f` and put the pen back where it was.
    pub fn with_frame<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let result = f(self);
        self.restore();
        result
    }

    fn push_shape(&mut self, kind: PathKind, local: &[Point]) -> Result<()> {
        let points = local.iter().map(|p| self.pen.to_part(p.x, p.y)).collect();
        self.paths.push(Path::closed(kind, points)?);
        Ok(())
    }

    /// Circular hole of radius `r` centered at `(x, y)`.
    pub fn hole(&mut self, x: f64, y: f64, r: f64) -> Result<()> {
        let steps = (360.0 / ARC_STEP_DEGREES) as usize;
        let points: Vec<Point> = (0..steps)
            .map(|i| {
                let a = (i as f64 * ARC_STEP_DEGREES).to_radians();
                Point::new(x + r * a.cos(), y + r * a.sin())
            })
            .collect();
        self.push_shape(PathKind::Hole, &points)
    }

    /// Rectangular hole `dx` × `dy` with corner radius `r`. `(x, y)` is the
    /// center unless `center_x`/`center_y` is false, in which case it is
    /// the left/bottom side.
    #[allow(clippy::too_many_arguments)]
    pub fn rectangular_hole(
        &mut self,
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        r: f64,
        center_x: bool,
        center_y: bool,
    ) -> Result<()> {
        let points = rounded_rectangle(x, y, dx, dy, r, center_x, center_y);
        self.push_shape(PathKind::Hole, &points)
    }

    /// Engraved rectangle with the same placement rules as
    /// [`rectangular_hole`](Self::rectangular_hole).
    #[allow(clippy::too_many_arguments)]
    pub fn annotation_rectangle(
        &mut self,
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        r: f64,
        center_x: bool,
        center_y: bool,
    ) -> Result<()> {
        let points = rounded_rectangle(x, y, dx, dy, r, center_x, center_y);
        self.push_shape(PathKind::Annotation, &points)
    }

    /// Close the outline and hand over the finished part.
    pub fn finish(mut self, label: impl Into<String>) -> Result<Part> {
        let label = label.into();
        let outline = std::mem::take(&mut self.outline);
        let mut part = Part::new(label);
        part.paths.push(Path::closed(PathKind::Outline, outline)?);
        part.paths.append(&mut self.paths);
        Ok(part)
    }
}

fn rounded_rectangle(
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    r: f64,
    center_x: bool,
    center_y: bool,
) -> Vec<Point> {
    let x0 = if center_x { x - dx / 2.0 } else { x };
    let y0 = if center_y { y - dy / 2.0 } else { y };
    let r = r.max(0.0).min(dx.min(dy) / 2.0);

    if r <= 0.0 {
        return vec![
            Point::new(x0, y0),
            Point::new(x0 + dx, y0),
            Point::new(x0 + dx, y0 + dy),
            Point::new(x0, y0 + dy),
        ];
    }

    let corners = [
        (x0 + dx - r, y0 + r, -90.0),
        (x0 + dx - r, y0 + dy - r, 0.0),
        (x0 + r, y0 + dy - r, 90.0),
        (x0 + r, y0 + r, 180.0),
    ];
    let steps = (90.0 / ARC_STEP_DEGREES) as usize;
    let mut points = Vec::with_capacity(4 * (steps + 1));
    for (cx, cy, start) in corners {
        for i in 0..=steps {
            let a = (start + i as f64 * ARC_STEP_DEGREES).to_radians();
            push_unique_point(&mut points, Point::new(cx + r * a.cos(), cy + r * a.sin()));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-6 && (a.y - y).abs() < 1e-6
    }

    #[test]
    fn test_square_outline() {
        let settings = ToolkitSettings::default();
        let mut b = PartBuilder::new(&settings);
        for _ in 0..4 {
            b.edge(10.0).corner(90.0);
        }
        assert!(close(b.pen().position, 0.0, 0.0));
        let part = b.finish("square").unwrap();
        let outline = part.outline().unwrap();
        assert_eq!(outline.points.len(), 4);
        assert!((outline.signed_area() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_left_arc_ends_where_expected() {
        let settings = ToolkitSettings::default();
        let mut b = PartBuilder::new(&settings);
        b.corner_arc(90.0, 5.0);
        assert!(close(b.pen().position, 5.0, 5.0));
        assert!((b.pen().heading - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_arc_ends_where_expected() {
        let settings = ToolkitSettings::default();
        let mut b = PartBuilder::new(&settings);
        b.corner_arc(-90.0, 5.0);
        assert!(close(b.pen().position, 5.0, -5.0));
        assert!((b.pen().heading + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_polyline_matches_manual_steps() {
        let settings = ToolkitSettings::default();
        let mut b = PartBuilder::new(&settings);
        b.polyline(&[
            Step::Line(10.0),
            Step::Turn(90.0),
            Step::Line(5.0),
            Step::Bend(90.0, 2.0),
            Step::Line(6.0),
        ]);
        // After the bend the pen moved 2 left and 2 up, heading -x
        assert!(close(b.pen().position, 2.0, 7.0));
    }

    #[test]
    fn test_holes_do_not_move_pen() {
        let settings = ToolkitSettings::default();
        let mut b = PartBuilder::new(&settings);
        b.edge(20.0).corner(90.0);
        let pen = b.pen();
        b.hole(5.0, 5.0, 1.5).unwrap();
        b.rectangular_hole(0.0, 0.0, 4.0, 2.0, 0.0, true, true).unwrap();
        assert_eq!(b.pen(), pen);
    }

    #[test]
    fn test_holes_follow_pen_frame() {
        let settings = ToolkitSettings::default();
        let mut b = PartBuilder::new(&settings);
        b.move_to(10.0, 0.0, 90.0);
        b.rectangular_hole(2.0, 0.0, 4.0, 2.0, 0.0, true, true).unwrap();
        b.edge(1.0).corner(90.0).edge(1.0).corner(90.0).edge(1.0);
        let part = b.finish("p").unwrap();
        let hole = part.holes().next().unwrap();
        let bbox = hole.bounding_box();
        // Along +y after a 90 degree turn: 4 long in y, 2 wide in x
        assert!((bbox.width() - 2.0).abs() < 1e-9);
        assert!((bbox.height() - 4.0).abs() < 1e-9);
        assert!((bbox.min_y - 0.0).abs() < 1e-9);
        assert!((bbox.min_x - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_rectangle_stays_inside() {
        let points = rounded_rectangle(0.0, 0.0, 20.0, 10.0, 3.0, true, true);
        let bbox = lightboxkit_core::BoundingBox::from_points(points.iter());
        assert!((bbox.width() - 20.0).abs() < 1e-9);
        assert!((bbox.height() - 10.0).abs() < 1e-9);
        assert!(points.len() > 8);
    }

    #[test]
    fn test_with_frame_restores_pen() {
        let settings = ToolkitSettings::default();
        let mut b = PartBuilder::new(&settings);
        b.with_frame(|b| {
            b.move_to(3.0, 4.0, 45.0);
        });
        assert_eq!(b.pen(), Pen::default());
    }

    #[test]
    fn test_finish_rejects_empty_outline() {
        let settings = ToolkitSettings::default();
        let b = PartBuilder::new(&settings);
        assert!(b.finish("nothing").is_err());
    }
}
