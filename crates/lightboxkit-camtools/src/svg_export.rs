//! SVG export
//!
//! One `<g>` group per part. Outlines are black, holes blue and engravings
//! red, the colour convention most laser software maps to cut and engrave
//! layers. SVG grows downwards, so the y axis is flipped.

use crate::error::{ExportError, ExportResult};
use lightboxkit_core::{Path, PathKind, Sheet};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    /// Print the part labels on the parts
    pub labels: bool,
    /// Stroke width (mm)
    pub stroke_width: f64,
    /// Empty border around the drawing (mm)
    pub border: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            labels: false,
            stroke_width: 0.1,
            border: 5.0,
        }
    }
}

fn stroke_colour(kind: PathKind) -> &'static str {
    match kind {
        PathKind::Outline => "#000000",
        PathKind::Hole => "#0000ff",
        PathKind::Annotation => "#ff0000",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Part labels can hold line breaks and spaces, ids cannot.
fn group_id(index: usize, label: &str) -> String {
    let slug: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("part-{}-{}", index + 1, slug.trim_matches('-'))
}

pub fn to_svg(sheet: &Sheet, options: &SvgOptions) -> ExportResult<String> {
    if sheet.is_empty() {
        return Err(ExportError::EmptySheet("the sheet has no parts".to_string()));
    }

    let bbox = sheet.bounding_box();
    let width = bbox.width() + 2.0 * options.border;
    let height = bbox.height() + 2.0 * options.border;
    let left = bbox.min_x - options.border;
    let top = bbox.max_y + options.border;
    let flip = |x: f64, y: f64| (x - left, top - y);

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.3}mm" height="{:.3}mm" viewBox="0 0 {:.3} {:.3}">"#,
        width, height, width, height
    );
    let _ = writeln!(svg, "<title>LightBoxKit night light box</title>");

    for (i, part) in sheet.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"<g id="{}" fill="none" stroke-width="{}">"#,
            group_id(i, &part.label),
            options.stroke_width
        );

        for path in &part.paths {
            let _ = writeln!(
                svg,
                r#"<path stroke="{}" d="{}"/>"#,
                stroke_colour(path.kind),
                path_data(path, &flip)
            );
        }

        if options.labels {
            let b = part.bounding_box();
            let (cx, cy) = flip((b.min_x + b.max_x) / 2.0, (b.min_y + b.max_y) / 2.0);
            let lines: Vec<&str> = part.label.lines().collect();
            let size = 4.0;
            let first = cy - size * (lines.len() as f64 - 1.0) / 2.0;
            let _ = write!(
                svg,
                r##"<text fill="#ff0000" stroke="none" font-family="sans-serif" font-size="{}" text-anchor="middle">"##,
                size
            );
            for (n, line) in lines.iter().enumerate() {
                let _ = write!(
                    svg,
                    r#"<tspan x="{:.3}" y="{:.3}">{}</tspan>"#,
                    cx,
                    first + size * n as f64,
                    escape(line)
                );
            }
            let _ = writeln!(svg, "</text>");
        }

        let _ = writeln!(svg, "</g>");
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

fn path_data(path: &Path, flip: &impl Fn(f64, f64) -> (f64, f64)) -> String {
    let mut d = String::new();
    for (i, p) in path.points.iter().enumerate() {
        let (x, y) = flip(p.x, p.y);
        let _ = write!(d, "{}{:.3} {:.3} ", if i == 0 { "M" } else { "L" }, x, y);
    }
    d.push('Z');
    d
}
