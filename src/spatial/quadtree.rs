//! Region-subdividing tree used to find neighbors without an all-pairs sweep.
//!
//! The tree is rebuilt from scratch every tick. Nodes live in a flat arena and
//! refer to their children by index; stored entries are handles (indices into
//! the caller's particle slice), so the tree never owns or copies particles.
//!
//! Insertion follows a fill-then-split policy: a node keeps its first
//! `capacity` handles and only routes later arrivals into its quadrants. Nodes
//! at the maximum depth stop splitting and keep everything they receive.
use log::trace;

use crate::spatial::{Located, RangeQuery};
use crate::utils::SimulationConfig;

const ROOT: usize = 0;

/// An axis-aligned rectangle given by its center and full extents.
///
/// # Examples
///
/// ```
/// use rs_particle_swarm::spatial::Region;
///
/// let region = Region::new(0.0, 0.0, 2.0, 2.0);
/// assert!(region.contains(0.5, -0.5));
/// assert!(!region.contains(1.0, 0.0)); // edges are excluded
///
/// let [q1, q2, q3, q4] = region.subdivide();
/// assert_eq!((q1.cx, q1.cy), (0.5, 0.5));
/// assert_eq!((q2.cx, q2.cy), (-0.5, 0.5));
/// assert_eq!((q3.cx, q3.cy), (-0.5, -0.5));
/// assert_eq!((q4.cx, q4.cy), (0.5, -0.5));
/// assert_eq!(q1.width, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self { cx, cy, width, height }
    }

    /// Strict containment on both axes; points on an edge belong to no region.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.cx).abs() < self.width / 2.0 && (y - self.cy).abs() < self.height / 2.0
    }

    /// The four quadrants, in the order (+x, +y), (-x, +y), (-x, -y), (+x, -y).
    pub fn subdivide(&self) -> [Region; 4] {
        let (dx, dy) = (self.width / 4.0, self.height / 4.0);
        let (w, h) = (self.width / 2.0, self.height / 2.0);
        [
            Region::new(self.cx + dx, self.cy + dy, w, h),
            Region::new(self.cx - dx, self.cy + dy, w, h),
            Region::new(self.cx - dx, self.cy - dy, w, h),
            Region::new(self.cx + dx, self.cy - dy, w, h),
        ]
    }

    /// Whether a query circle could reach this region.
    ///
    /// The per-axis gap is measured against the full width and height rather
    /// than the half extents, so this over-reports intersections. It is only a
    /// pruning test; [`RangeQuery::contains`] decides membership.
    pub fn intersects(&self, range: &RangeQuery) -> bool {
        let gap_x = ((range.x - self.cx).abs() - self.width).max(0.0);
        let gap_y = ((range.y - self.cy).abs() - self.height).max(0.0);
        gap_x * gap_x + gap_y * gap_y < range.radius * range.radius
    }
}

/// A single arena node.
#[derive(Clone, Debug)]
pub struct QuadNode {
    pub region: Region,
    /// Handles stored directly at this node.
    pub handles: Vec<usize>,
    /// Arena indices of the four quadrants, once subdivided.
    pub children: Option<[usize; 4]>,
    pub depth: usize,
}

impl QuadNode {
    fn new(region: Region, depth: usize) -> Self {
        Self {
            region,
            handles: Vec::new(),
            children: None,
            depth,
        }
    }

    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }
}

/// Arena-backed quadtree over particle handles.
///
/// # Examples
///
/// ```
/// use rs_particle_swarm::spatial::{QuadTree, RangeQuery};
///
/// let points = vec![(10.0, 10.0), (12.0, 11.0), (90.0, 90.0)];
/// let mut tree = QuadTree::new(50.0, 50.0, 100.0, 100.0, 4, 32);
/// for (handle, point) in points.iter().enumerate() {
///     tree.insert(handle, *point);
/// }
///
/// let mut found = tree.query(&RangeQuery::new(10.0, 10.0, 20.0), &points);
/// found.sort();
/// assert_eq!(found, vec![0, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree {
    nodes: Vec<QuadNode>,
    capacity: usize,
    max_depth: usize,
    overflow_inserts: usize,
}

impl QuadTree {
    /// Creates an empty tree owning the given region.
    pub fn new(cx: f64, cy: f64, width: f64, height: f64, capacity: usize, max_depth: usize) -> Self {
        Self {
            nodes: vec![QuadNode::new(Region::new(cx, cy, width, height), 0)],
            capacity,
            max_depth,
            overflow_inserts: 0,
        }
    }

    /// An empty tree covering the simulation bounds.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let (cx, cy) = config.center();
        Self::new(cx, cy, config.width, config.height, config.node_capacity, config.max_tree_depth)
    }

    /// Builds a tree covering the simulation bounds with every item inserted,
    /// using each item's slice index as its handle.
    pub fn build<P: Located>(config: &SimulationConfig, items: &[P]) -> Self {
        let mut tree = Self::from_config(config);
        for (handle, item) in items.iter().enumerate() {
            tree.insert(handle, item.location());
        }
        tree
    }

    /// Inserts `handle` at `position`. Returns whether any node stored it.
    ///
    /// Positions outside the root, or exactly on an internal split line, are
    /// accepted by no node and are left out of the tree.
    pub fn insert(&mut self, handle: usize, position: (f64, f64)) -> bool {
        let (x, y) = position;
        let mut current = ROOT;
        loop {
            let node = &self.nodes[current];
            if !node.region.contains(x, y) {
                return false;
            }
            let (stored, depth, children) = (node.handles.len(), node.depth, node.children);

            if stored < self.capacity || depth >= self.max_depth {
                if stored >= self.capacity {
                    self.overflow_inserts += 1;
                    trace!("node {} at depth {} overflowing with {} handles", current, depth, stored + 1);
                }
                self.nodes[current].handles.push(handle);
                return true;
            }

            let children = match children {
                Some(children) => children,
                None => self.subdivide(current),
            };

            // Offer the point to every quadrant; strict containment lets at most one take it.
            match children.into_iter().find(|&child| self.nodes[child].region.contains(x, y)) {
                Some(child) => current = child,
                None => return false,
            }
        }
    }

    fn subdivide(&mut self, index: usize) -> [usize; 4] {
        let depth = self.nodes[index].depth + 1;
        let quadrants = self.nodes[index].region.subdivide();
        let first = self.nodes.len();
        self.nodes.extend(quadrants.into_iter().map(|region| QuadNode::new(region, depth)));
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes[index].children = Some(children);
        children
    }

    /// Handles whose items lie inside `range`.
    ///
    /// Items are looked up in `items` by handle, so positions are read at query
    /// time rather than at insertion time.
    pub fn query<P: Located>(&self, range: &RangeQuery, items: &[P]) -> Vec<usize> {
        let mut found = Vec::new();
        self.query_into(range, items, &mut found);
        found
    }

    /// Like [`QuadTree::query`], appending into a caller-owned buffer.
    pub fn query_into<P: Located>(&self, range: &RangeQuery, items: &[P], found: &mut Vec<usize>) {
        let mut stack = vec![ROOT];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if !node.region.intersects(range) {
                continue;
            }
            for &handle in &node.handles {
                if items.get(handle).is_some_and(|item| range.contains(item)) {
                    found.push(handle);
                }
            }
            if let Some(children) = node.children {
                stack.extend(children.iter().rev());
            }
        }
    }

    /// Whether the root region could intersect `range`.
    pub fn intersects(&self, range: &RangeQuery) -> bool {
        self.nodes[ROOT].region.intersects(range)
    }

    pub fn bounds(&self) -> Region {
        self.nodes[ROOT].region
    }

    pub fn root(&self) -> &QuadNode {
        &self.nodes[ROOT]
    }

    pub fn nodes(&self) -> &[QuadNode] {
        &self.nodes
    }

    /// Every node's rectangle, root first.
    pub fn regions(&self) -> Vec<Region> {
        self.nodes.iter().map(|node| node.region).collect()
    }

    /// Number of handles stored across all nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(|node| node.handles.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest node; a lone root has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Insertions that landed in a full node because it sat at the maximum depth.
    pub fn overflow_inserts(&self) -> usize {
        self.overflow_inserts
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
