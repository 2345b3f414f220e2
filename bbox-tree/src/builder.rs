//! Top-down tree builder.
//!
//! Each node picks the axis along which its boxes' centroids are spread the
//! most, splits them at their mean and recurses into both halves - until it
//! runs out of boxes, depth, or centroids that can be told apart.

#[cfg(feature = "metrics")]
use std::time::Instant;

use glam::DVec3;

use crate::{partition, Axis, BoundingBox, BoxTree, BuildOptions};

/// Nodes with fewer boxes than this are built on the current thread.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 1024;

impl BoxTree {
    /// Builds a tree over `boxes` using the default options.
    ///
    /// See: [`Self::build()`].
    pub fn new(boxes: &[BoundingBox]) -> Self {
        Self::with_options(boxes, Default::default())
    }

    /// Builds a tree over `boxes`.
    ///
    /// See: [`Self::build()`].
    pub fn with_options(boxes: &[BoundingBox], options: BuildOptions) -> Self {
        let mut this = Self::default();

        this.build(boxes, options);
        this
    }

    /// (Re)builds this node into a tree over `boxes`, dropping whatever
    /// subtree it had before.
    ///
    /// Afterwards, each index from `0..boxes.len()` is present in exactly one
    /// leaf and each node's bounds are the union of the boxes below it.
    ///
    /// # Panics
    ///
    /// Panics if `boxes` is empty or if `options.boxes_per_leaf` is zero.
    pub fn build(&mut self, boxes: &[BoundingBox], options: BuildOptions) {
        assert!(!boxes.is_empty(), "Cannot build a tree out of zero boxes");

        assert!(
            options.boxes_per_leaf > 0,
            "`boxes_per_leaf` must be at least one"
        );

        log::debug!(
            "Building tree; boxes={}, max-depth={}, boxes-per-leaf={}",
            boxes.len(),
            options.max_depth,
            options.boxes_per_leaf,
        );

        #[cfg(feature = "metrics")]
        let tt = Instant::now();

        self.clear();

        let ctxt = BuildCtxt {
            boxes,
            centroids: boxes.iter().map(centroid).collect(),
            options,
        };

        let mut ids: Vec<_> = (0..boxes.len()).collect();

        self.build_node(&ctxt, &mut ids, 0);

        #[cfg(feature = "metrics")]
        log::info!(
            "Tree built; tt = {}",
            humantime::format_duration(tt.elapsed()),
        );

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Tree built; {}", self.stats());
        }
    }

    fn build_node(
        &mut self,
        ctxt: &BuildCtxt,
        ids: &mut [usize],
        depth: usize,
    ) {
        assert!(!ids.is_empty());

        self.bounds = ids.iter().map(|&id| ctxt.boxes[id]).collect();

        if depth == ctxt.options.max_depth
            || ids.len() <= ctxt.options.boxes_per_leaf
        {
            self.indices = ids.to_vec();
            return;
        }

        let Some(plane) = ctxt.find_splitting_plane(ids) else {
            log::trace!(
                "Centroids coincide, stopping early; depth={}, boxes={}",
                depth,
                ids.len(),
            );

            self.indices = ids.to_vec();
            return;
        };

        let pivot = partition(ids, plane.split_at, |&id| {
            ctxt.centroids[id][plane.split_by]
        });

        assert!(
            pivot > 0 && pivot < ids.len(),
            "Split produced an empty side; pivot={}, boxes={}",
            pivot,
            ids.len(),
        );

        let len = ids.len();
        let (left_ids, right_ids) = ids.split_at_mut(pivot);

        let (left, right) = join(
            len,
            || Self::build_child(ctxt, left_ids, depth + 1),
            || Self::build_child(ctxt, right_ids, depth + 1),
        );

        self.children = Some([left, right]);
    }

    fn build_child(
        ctxt: &BuildCtxt,
        ids: &mut [usize],
        depth: usize,
    ) -> Box<Self> {
        let mut node = Box::<Self>::default();

        node.build_node(ctxt, ids, depth);
        node
    }
}

/// Build-scoped state, shared by all of the nodes.
struct BuildCtxt<'a> {
    boxes: &'a [BoundingBox],
    centroids: Vec<DVec3>,
    options: BuildOptions,
}

impl BuildCtxt<'_> {
    /// Returns the plane separating given boxes into two non-empty groups, or
    /// `None` if all of their centroids are the same.
    fn find_splitting_plane(&self, ids: &[usize]) -> Option<SplittingPlane> {
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        let mut mean = DVec3::ZERO;

        for &id in ids {
            let centroid = self.centroids[id];

            min = min.min(centroid);
            max = max.max(centroid);
            mean += centroid;
        }

        if min == max {
            return None;
        }

        mean /= ids.len() as f64;

        let split_by = Axis::longest(max - min);
        let split_at =
            split_value(min[split_by], max[split_by], mean[split_by]);

        Some(SplittingPlane { split_by, split_at })
    }
}

#[derive(Clone, Copy, Debug)]
struct SplittingPlane {
    split_by: Axis,
    split_at: f64,
}

/// Returns the box's centroid in double precision, so that it's finite for
/// every finite box.
fn centroid(bb: &BoundingBox) -> DVec3 {
    0.5 * (bb.min().as_dvec3() + bb.max().as_dvec3())
}

/// Picks the value to split `min ..= max` at, preferring `mean`.
///
/// The result always satisfies `min <= value < max`, so - provided that both
/// `min` and `max` come from actual centroids - partitioning by `<= value`
/// leaves at least one centroid on each side.
fn split_value(min: f64, max: f64, mean: f64) -> f64 {
    assert!(min < max);

    if mean > min && mean < max {
        return mean;
    }

    log::trace!(
        "Mean is out of range, using midpoint; min={}, max={}, mean={}",
        min,
        max,
        mean,
    );

    let mid = 0.5 * min + 0.5 * max;

    // Happens for adjacent floats, where the midpoint rounds onto one of them
    if mid >= min && mid < max {
        mid
    } else {
        min
    }
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(len: usize, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if len >= PARALLEL_THRESHOLD {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(_len: usize, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}
