//! DXF export
//!
//! Every path segment becomes a `LINE` entity. Cuts (outlines and holes)
//! go on the `CUT` layer, engravings on `ANNOTATIONS`.

use crate::error::{ExportError, ExportResult};
use dxf::entities::{Entity, EntityType, Line};
use dxf::tables::Layer;
use dxf::{Color, Drawing};
use lightboxkit_core::{PathKind, Sheet};

pub const CUT_LAYER: &str = "CUT";
pub const ANNOTATION_LAYER: &str = "ANNOTATIONS";

fn layer_for(kind: PathKind) -> &'static str {
    match kind {
        PathKind::Outline | PathKind::Hole => CUT_LAYER,
        PathKind::Annotation => ANNOTATION_LAYER,
    }
}

pub fn to_drawing(sheet: &Sheet) -> ExportResult<Drawing> {
    if sheet.is_empty() {
        return Err(ExportError::EmptySheet("the sheet has no parts".to_string()));
    }

    let mut drawing = Drawing::new();
    for (name, colour) in [(CUT_LAYER, 7), (ANNOTATION_LAYER, 1)] {
        drawing.add_layer(Layer {
            name: name.to_string(),
            color: Color::from_index(colour),
            ..Default::default()
        });
    }

    for part in sheet.iter() {
        for path in &part.paths {
            for (a, b) in path.segments() {
                let line = Line::new(
                    dxf::Point::new(a.x, a.y, 0.0),
                    dxf::Point::new(b.x, b.y, 0.0),
                );
                let mut entity = Entity::new(EntityType::Line(line));
                entity.common.layer = layer_for(path.kind).to_string();
                drawing.add_entity(entity);
            }
        }
    }

    Ok(drawing)
}

pub fn to_dxf(sheet: &Sheet) -> ExportResult<String> {
    let drawing = to_drawing(sheet)?;
    let mut buffer: Vec<u8> = Vec::new();
    drawing
        .save(&mut buffer)
        .map_err(|e| ExportError::Dxf(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| ExportError::Dxf(e.to_string()))
}
