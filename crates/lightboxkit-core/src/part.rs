//! Flat-pattern parts
//!
//! A [`Part`] is everything cut from the sheet for one physical piece: a
//! closed outline, the inner cuts it carries and any engraved annotations.
//! A [`Sheet`] holds all placed parts of one generator run.

use crate::error::{Error, Result};
use crate::geometry::{segments_intersect, signed_area, BoundingBox, Point};
use serde::{Deserialize, Serialize};

/// What the laser does with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Outer cut that frees the part
    Outline,
    /// Inner cut (finger holes, windows, screw holes)
    Hole,
    /// Engraved mark, never cut through
    Annotation,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline => write!(f, "outline"),
            Self::Hole => write!(f, "hole"),
            Self::Annotation => write!(f, "annotation"),
        }
    }
}

/// Append `point` unless it repeats the last point.
pub fn push_unique_point(points: &mut Vec<Point>, point: Point) {
    if let Some(last) = points.last() {
        if last.approx_eq(&point) {
            return;
        }
    }
    points.push(point);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub kind: PathKind,
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Path {
    /// Build a closed path. The closing segment is implicit, a repeated
    /// start point at the end is dropped.
    pub fn closed(kind: PathKind, points: Vec<Point>) -> Result<Self> {
        let mut cleaned = Vec::with_capacity(points.len());
        for p in points {
            if !p.is_finite() {
                return Err(Error::InvalidDimensions(format!(
                    "non-finite point ({}, {}) in {} path",
                    p.x, p.y, kind
                )));
            }
            push_unique_point(&mut cleaned, p);
        }
        while cleaned.len() > 1 && cleaned[0].approx_eq(&cleaned[cleaned.len() - 1]) {
            cleaned.pop();
        }
        if cleaned.len() < 3 {
            return Err(Error::DegeneratePath(format!(
                "{} path with {} distinct points",
                kind,
                cleaned.len()
            )));
        }
        Ok(Self {
            kind,
            points: cleaned,
            closed: true,
        })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.points.iter())
    }

    /// Enclosed area, positive when counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Total length including the closing segment.
    pub fn length(&self) -> f64 {
        let mut total: f64 = self
            .points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum();
        if self.closed {
            if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
                total += last.distance_to(first);
            }
        }
        total
    }

    /// Segments as point pairs, including the closing one for closed paths.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        let mut segments: Vec<(Point, Point)> =
            self.points.windows(2).map(|w| (w[0], w[1])).collect();
        if self.closed && self.points.len() > 2 {
            segments.push((self.points[self.points.len() - 1], self.points[0]));
        }
        segments
    }

    /// Whether any two non-adjacent segments touch or cross.
    pub fn has_self_intersection(&self) -> bool {
        let segments = self.segments();
        let n = segments.len();
        for i in 0..n {
            for j in (i + 2)..n {
                if self.closed && i == 0 && j == n - 1 {
                    continue;
                }
                let (a1, a2) = &segments[i];
                let (b1, b2) = &segments[j];
                if segments_intersect(a1, a2, b1, b2) {
                    return true;
                }
            }
        }
        false
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translate(dx, dy);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub label: String,
    pub paths: Vec<Path>,
}

impl Part {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            paths: Vec::new(),
        }
    }

    pub fn outline(&self) -> Option<&Path> {
        self.paths.iter().find(|p| p.kind == PathKind::Outline)
    }

    pub fn paths_of(&self, kind: PathKind) -> impl Iterator<Item = &Path> {
        self.paths.iter().filter(move |p| p.kind == kind)
    }

    pub fn holes(&self) -> impl Iterator<Item = &Path> {
        self.paths_of(PathKind::Hole)
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Path> {
        self.paths_of(PathKind::Annotation)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.paths
            .iter()
            .fold(BoundingBox::empty(), |acc, p| acc.union(&p.bounding_box()))
    }

    /// Check the invariants of a finished part: exactly one closed outline
    /// that does not cross itself.
    pub fn validate(&self) -> Result<()> {
        let outlines = self.paths_of(PathKind::Outline).count();
        if outlines == 0 {
            return Err(Error::MissingOutline(self.label.clone()));
        }
        if outlines > 1 {
            return Err(Error::other(format!(
                "Part '{}' has {} outlines",
                self.label, outlines
            )));
        }
        if let Some(outline) = self.outline() {
            if outline.has_self_intersection() {
                return Err(Error::other(format!(
                    "Outline of part '{}' intersects itself",
                    self.label
                )));
            }
        }
        Ok(())
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for path in &mut self.paths {
            path.translate(dx, dy);
        }
    }

    /// Move the part so that its bounding box starts at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let bbox = self.bounding_box();
        if bbox.is_empty() {
            return;
        }
        self.translate(x - bbox.min_x, y - bbox.min_y);
    }

    /// Flip the part left to right inside its own bounding box. Point order
    /// is reversed so every path keeps its winding.
    pub fn mirror_horizontal(&mut self) {
        let bbox = self.bounding_box();
        if bbox.is_empty() {
            return;
        }
        let axis = bbox.min_x + bbox.max_x;
        for path in &mut self.paths {
            for p in &mut path.points {
                p.x = axis - p.x;
            }
            path.points.reverse();
        }
    }
}

/// All parts of one generated design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub parts: Vec<Part>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn find(&self, label: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.label == label)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.parts
            .iter()
            .fold(BoundingBox::empty(), |acc, p| acc.union(&p.bounding_box()))
    }

    /// Shift every part so the sheet minimum lands on `(offset_x, offset_y)`.
    pub fn normalize(&mut self, offset_x: f64, offset_y: f64) {
        let bbox = self.bounding_box();
        if bbox.is_empty() {
            return;
        }
        let dx = offset_x - bbox.min_x;
        let dy = offset_y - bbox.min_y;
        for part in &mut self.parts {
            part.translate(dx, dy);
        }
    }
}
