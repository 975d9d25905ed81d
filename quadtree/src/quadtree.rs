mod config;
mod node;

pub use config::{Config, DEFAULT_MIN_NODE_SIZE, DEFAULT_NODE_CAPACITY};

use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Rectangle, Spatial};
use fxhash::FxHashSet;
use node::{Item, Node};

#[derive(Debug)]
pub struct QuadTree {
    root: Node,
    config: Config,
}

impl QuadTree {
    pub fn new(region: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(region, Config::default())
    }

    pub fn new_with_config(region: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_region(&region)?;
        Ok(Self {
            root: Node::new(region),
            config,
        })
    }

    // Throw away the whole tree and start over as a single leaf covering
    // `region`. Called once per tick before reinserting every body.
    pub fn reset(&mut self, region: Rectangle) -> QuadtreeResult<()> {
        validate_region(&region)?;
        self.root = Node::new(region);
        Ok(())
    }

    pub fn insert<S: Spatial>(&mut self, value: u32, item: &S) {
        self.root.insert(
            Item {
                value,
                bounds: item.bounding_box(),
            },
            &self.config,
        );
    }

    // Candidate pairs, straddle duplicates and all. The callback must apply
    // the true geometric predicate itself.
    pub fn for_each_candidate_pair<F>(&self, mut f: F)
    where
        F: FnMut(u32, u32),
    {
        self.root.possible_collisions(&mut f);
    }

    // Same traversal, but each unordered id pair is reported once even when
    // straddle duplication surfaces it from several quadrants. Use this when
    // the callback mutates state.
    pub fn for_each_candidate_pair_dedupe<F>(&self, mut f: F)
    where
        F: FnMut(u32, u32),
    {
        let mut seen: FxHashSet<u64> = FxHashSet::default();
        self.root.possible_collisions(&mut |a, b| {
            let (min, max) = if a < b { (a, b) } else { (b, a) };
            let key = (u64::from(min) << 32) | u64::from(max);
            if seen.insert(key) {
                f(a, b);
            }
        });
    }

    pub fn visit_items_near<F>(&self, x: f32, y: f32, mut f: F)
    where
        F: FnMut(u32),
    {
        self.root.visit_items_near(x, y, &mut f);
    }

    // Duplicated placements count individually.
    pub fn count_all_items(&self) -> usize {
        self.root.count_all_items()
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.root.node_bounding_boxes(bounding_boxes);
    }

    // Per-node view of the tree: each node's bounds with the ids it holds
    // directly, in NW/NE/SW/SE preorder.
    pub fn node_items(&self, out: &mut Vec<(Rectangle, Vec<u32>)>) {
        self.root.node_items(out);
    }
}

fn validate_region(region: &Rectangle) -> QuadtreeResult<()> {
    if !(region.width.is_finite() && region.height.is_finite())
        || region.width < 0.0
        || region.height < 0.0
    {
        return Err(QuadtreeError::InvalidRegionDims {
            width: region.width,
            height: region.height,
        });
    }
    Ok(())
}
