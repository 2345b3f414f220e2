//! Bounding volume hierarchy built top-down out of axis-aligned boxes.
//!
//! Given one bounding box per primitive, [`BoxTree::build()`] groups the
//! primitives into a binary tree of nested boxes, so that spatial queries can
//! skip large parts of the scene by checking a handful of ancestors instead of
//! every primitive.
//!
//! ```
//! use bbox_tree::{BoundingBox, BoxTree};
//! use glam::vec3;
//!
//! let boxes = [
//!     BoundingBox::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0)),
//!     BoundingBox::new(vec3(5.0, 0.0, 0.0), vec3(6.0, 1.0, 1.0)),
//! ];
//!
//! let tree = BoxTree::new(&boxes);
//!
//! assert_eq!(Some(&[0][..]), tree.left().map(|node| node.indices()));
//! assert_eq!(Some(&[1][..]), tree.right().map(|node| node.indices()));
//! ```

mod axis;
mod bounding_box;
mod builder;
mod node;
mod options;
mod partition;
mod printer;
mod stats;

pub use self::axis::*;
pub use self::bounding_box::*;
pub use self::node::*;
pub use self::options::*;
pub use self::partition::*;
pub use self::printer::*;
pub use self::stats::*;
