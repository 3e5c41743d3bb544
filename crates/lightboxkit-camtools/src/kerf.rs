//! Kerf compensation
//!
//! The laser removes `burn` mm of material, half on each side of the cut.
//! Outlines are pushed out and holes pulled in by half of it so the parts
//! come out at their nominal size. Annotations are engraved, not cut, and
//! stay as they are.

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use lightboxkit_core::{signed_area, Part, Path, PathKind, Point, Sheet};
use std::panic;
use tracing::{debug, warn};

const ARC_STEP_DEGREES: f64 = 5.0;

/// Compensated copy of every part on the sheet.
pub fn compensate_sheet(sheet: &Sheet, burn: f64) -> Sheet {
    if burn <= 0.0 {
        return sheet.clone();
    }
    debug!("Applying kerf compensation of {} mm to {} parts", burn, sheet.len());
    Sheet {
        parts: sheet.iter().map(|p| compensate_part(p, burn)).collect(),
    }
}

pub fn compensate_part(part: &Part, burn: f64) -> Part {
    let half = burn / 2.0;
    let paths = part
        .paths
        .iter()
        .map(|path| {
            let distance = match path.kind {
                PathKind::Outline => -half,
                PathKind::Hole => half,
                PathKind::Annotation => return path.clone(),
            };
            match offset_path(path, distance) {
                Some(offset) => offset,
                None => {
                    warn!(
                        "Kerf offset failed for a {} of part '{}', keeping nominal path",
                        path.kind, part.label
                    );
                    path.clone()
                }
            }
        })
        .collect();

    Part {
        label: part.label.clone(),
        paths,
    }
}

/// Offset a closed path. Positive distances move into a counter-clockwise
/// path, negative ones away from it.
fn offset_path(path: &Path, distance: f64) -> Option<Path> {
    let mut points = path.points.clone();
    if signed_area(&points) < 0.0 {
        points.reverse();
    }

    let mut pline = Polyline::new();
    for p in &points {
        pline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    pline.set_is_closed(true);

    let offsets = panic::catch_unwind(panic::AssertUnwindSafe(|| pline.parallel_offset(distance)))
        .ok()?;
    if offsets.len() != 1 {
        return None;
    }

    let flattened = flatten(&offsets[0]);
    Path::closed(path.kind, flattened).ok()
}

/// Turn a polyline with arc segments into straight segments.
fn flatten(pline: &Polyline<f64>) -> Vec<Point> {
    let count = pline.vertex_count();
    let mut points = Vec::with_capacity(count);

    for i in 0..count {
        let v1 = pline.at(i);
        let v2 = pline.at((i + 1) % count);
        points.push(Point::new(v1.x, v1.y));

        if v1.bulge.abs() < 1e-9 {
            continue;
        }

        let dx = v2.x - v1.x;
        let dy = v2.y - v1.y;
        let chord = (dx * dx + dy * dy).sqrt();
        if chord < 1e-9 {
            continue;
        }

        let sweep = 4.0 * v1.bulge.atan();
        let along = chord / 2.0 * (1.0 - v1.bulge * v1.bulge) / (2.0 * v1.bulge);
        let cx = (v1.x + v2.x) / 2.0 - dy / chord * along;
        let cy = (v1.y + v2.y) / 2.0 + dx / chord * along;
        let radius = ((v1.x - cx).powi(2) + (v1.y - cy).powi(2)).sqrt();
        let start = (v1.y - cy).atan2(v1.x - cx);

        let steps = (sweep.abs().to_degrees() / ARC_STEP_DEGREES).ceil().max(1.0) as usize;
        for k in 1..steps {
            let a = start + sweep * k as f64 / steps as f64;
            points.push(Point::new(cx + radius * a.cos(), cy + radius * a.sin()));
        }
    }

    points
}
