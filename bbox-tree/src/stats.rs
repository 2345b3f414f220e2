use std::fmt;

use crate::BoxTree;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxTreeStats {
    /// Number of nodes, including the root
    pub nodes: usize,

    /// Number of leaves
    pub leaves: usize,

    /// Depth of the deepest node (root being at depth zero)
    pub depth: usize,

    /// Number of indices held by the largest leaf
    pub max_leaf_size: usize,

    /// Number of indices across all nodes
    pub indices: usize,
}

impl BoxTree {
    pub fn stats(&self) -> BoxTreeStats {
        let mut stats = BoxTreeStats::default();

        self.walk(|node, depth| {
            stats.nodes += 1;
            stats.depth = stats.depth.max(depth);
            stats.indices += node.indices().len();

            if node.is_leaf() {
                stats.leaves += 1;
                stats.max_leaf_size =
                    stats.max_leaf_size.max(node.indices().len());
            }
        });

        stats
    }
}

impl fmt::Display for BoxTreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={}, leaves={}, depth={}, max-leaf-size={}, indices={}",
            self.nodes,
            self.leaves,
            self.depth,
            self.max_leaf_size,
            self.indices
        )
    }
}
