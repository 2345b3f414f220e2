/// Knobs for [`crate::BoxTree::build()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Hard cap on the tree's depth (root being at depth zero); nodes at this
    /// depth become leaves no matter how many boxes they hold.
    pub max_depth: usize,

    /// Nodes holding this many boxes (or fewer) become leaves.
    ///
    /// Must be at least one.
    pub boxes_per_leaf: usize,
}

impl BuildOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_boxes_per_leaf(mut self, boxes_per_leaf: usize) -> Self {
        self.boxes_per_leaf = boxes_per_leaf;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: 30,
            boxes_per_leaf: 1,
        }
    }
}
