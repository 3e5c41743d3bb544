//! Rectangular walls built from four edges

use super::edges::EdgeKind;
use super::pen::PartBuilder;
use crate::error::{CamToolResult, ParameterError};

/// Draw an `x` × `y` wall with the four edges given as characters in the
/// order bottom, right, top, left. `callback(builder, i)` runs before edge
/// `i` in a frame at the start of that edge, x along the edge and y
/// pointing inward from the inner surface.
pub fn rectangular_wall<F>(
    builder: &mut PartBuilder<'_>,
    x: f64,
    y: f64,
    edges: &str,
    mut callback: F,
) -> CamToolResult<()>
where
    F: FnMut(&mut PartBuilder<'_>, usize) -> CamToolResult<()>,
{
    let kinds = EdgeKind::parse_all(edges)?;
    if kinds.len() != 4 {
        return Err(ParameterError::invalid(
            "edges",
            format!("a wall needs 4 edges, got {}", kinds.len()),
        )
        .into());
    }
    if x <= 0.0 || y <= 0.0 {
        return Err(ParameterError::InvalidDimensions(format!("wall {} x {}", x, y)).into());
    }

    for (i, length) in [x, y, x, y].into_iter().enumerate() {
        let edge = kinds[i];
        let next = kinds[(i + 1) % 4];

        let inset = edge.start_width(builder);
        builder.save();
        builder.move_to(0.0, inset, 0.0);
        let result = callback(builder, i);
        builder.restore();
        result?;

        edge.draw(builder, length)?;
        let next_start = next.start_width(builder);
        let end = edge.end_width(builder);
        builder.edge(next_start).corner(90.0).edge(end);
    }

    Ok(())
}
