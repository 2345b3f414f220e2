use std::hash::{Hash, Hasher};

use fxhash::FxHasher;

use crate::BoundingBox;

/// Node of a bounding box tree - the root, a leaf, or anything in between.
///
/// Every node has bounds which enclose all of the input boxes below it, a list
/// of indices into the input boxes (non-empty only at leaves, in practice) and
/// either zero or two children.
///
/// Nodes own their children, so a tree can be moved around or borrowed, but
/// not duplicated:
///
/// ```compile_fail
/// let tree = bbox_tree::BoxTree::default();
/// let copy = tree.clone();
/// ```
#[derive(Debug, Default)]
pub struct BoxTree {
    pub(crate) bounds: BoundingBox,
    pub(crate) indices: Vec<usize>,
    pub(crate) children: Option<[Box<Self>; 2]>,
}

impl BoxTree {
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Returns indices of the input boxes assigned directly to this node.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn children(&self) -> Option<&[Box<Self>; 2]> {
        self.children.as_ref()
    }

    pub fn left(&self) -> Option<&Self> {
        self.children.as_ref().map(|[left, _]| &**left)
    }

    pub fn right(&self) -> Option<&Self> {
        self.children.as_ref().map(|[_, right]| &**right)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns whether this node is in the state left by [`Self::clear()`].
    pub fn is_empty(&self) -> bool {
        self.is_leaf() && self.indices.is_empty()
    }

    /// Drops the entire subtree, turning this node back into an empty leaf.
    pub fn clear(&mut self) {
        self.children = None;
        self.indices.clear();
        self.bounds = Default::default();
    }

    /// Visits every node in depth-first pre-order, along with its depth
    /// (relative to `self`, which is at depth zero).
    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a Self, usize)) {
        let mut stack = vec![(self, 0)];

        while let Some((node, depth)) = stack.pop() {
            f(node, depth);

            if let Some([left, right]) = &node.children {
                stack.push((&**right, depth + 1));
                stack.push((&**left, depth + 1));
            }
        }
    }

    /// Returns leaves of this subtree, from left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Self> + '_ {
        let mut leaves = Vec::new();

        self.walk(|node, _| {
            if node.is_leaf() {
                leaves.push(node);
            }
        });

        leaves.into_iter()
    }

    /// Hash of the tree's shape, bounds and indices; trees built from the same
    /// input with the same options have equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();

        self.walk(|node, depth| {
            depth.hash(&mut hasher);
            node.is_leaf().hash(&mut hasher);
            node.indices.hash(&mut hasher);

            for v in [node.bounds.min(), node.bounds.max()] {
                v.to_array().map(f32::to_bits).hash(&mut hasher);
            }
        });

        hasher.finish()
    }

    /// Panics if this tree doesn't describe `boxes` correctly, i.e. when:
    ///
    /// - an index is missing, duplicated or out of range,
    /// - a node's bounds don't match the union of its boxes,
    /// - an internal node's bounds don't match the union of its children.
    pub fn validate(&self, boxes: &[BoundingBox]) {
        let mut seen = vec![false; boxes.len()];

        self.validate_node(boxes, &mut seen);

        if let Some(id) = seen.iter().position(|seen| !seen) {
            panic!("Box #{id} is not assigned to any node");
        }
    }

    fn validate_node(
        &self,
        boxes: &[BoundingBox],
        seen: &mut [bool],
    ) -> BoundingBox {
        let mut bounds = BoundingBox::default();

        for &id in &self.indices {
            assert!(id < boxes.len(), "Box #{id} is out of range");
            assert!(!seen[id], "Box #{id} is assigned more than once");

            seen[id] = true;
            bounds += boxes[id];
        }

        if let Some([left, right]) = &self.children {
            bounds += left.validate_node(boxes, seen);
            bounds += right.validate_node(boxes, seen);
        }

        assert_eq!(bounds, self.bounds, "Node's bounds are out of sync");

        bounds
    }
}
