//! Drawing toolkit for flat-pattern parts
//!
//! Parts are drawn with a pen that walks the outline counter-clockwise,
//! material on its left. Joinery (finger joints, stackable feet, hinges)
//! is expressed as edge types; holes and engravings are placed relative
//! to the pen without moving it.

pub mod edges;
pub mod finger_joint;
pub mod layout;
pub mod pen;
pub mod types;
pub mod wall;

pub use edges::EdgeKind;
pub use finger_joint::{calc_fingers, finger_layout, FingerLayout};
pub use layout::{LayoutCursor, Placement};
pub use pen::{PartBuilder, Pen, Step};
pub use types::{FingerJointSettings, HingeSettings, StackableSettings, ToolkitSettings};
pub use wall::rectangular_wall;
