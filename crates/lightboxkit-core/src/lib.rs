//! # LightBoxKit Core
//!
//! Geometry value types shared by the generator, the exporters and the
//! settings layer: points, bounding boxes, paths, parts and sheets.

pub mod error;
pub mod geometry;
pub mod part;

pub use error::{Error, Result};
pub use geometry::{signed_area, BoundingBox, Point, POINT_EPSILON};
pub use part::{push_unique_point, Part, Path, PathKind, Sheet};
