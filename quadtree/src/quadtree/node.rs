use common::shapes::Rectangle;
use smallvec::SmallVec;

use super::config::Config;

// Fixed child layout of a split node, y-down screen coordinates: NW is the
// min-x/min-y quadrant.
pub(crate) const NW: usize = 0;
pub(crate) const NE: usize = 1;
pub(crate) const SW: usize = 2;
pub(crate) const SE: usize = 3;

// One inserted item: the caller's id plus the box it occupied at insert time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Item {
    pub(crate) value: u32,
    pub(crate) bounds: Rectangle,
}

// A node is either a leaf (children is None, items held directly) or fully
// split into exactly four children. It never reverts to a leaf; the whole
// tree is rebuilt from scratch every tick.
#[derive(Debug)]
pub(crate) struct Node {
    bounds: Rectangle,
    items: Vec<Item>,
    children: Option<Box<[Node; 4]>>,
}

impl Node {
    pub(crate) fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            items: Vec::new(),
            children: None,
        }
    }

    fn has_room(&self, config: &Config) -> bool {
        if self.bounds.width < config.min_size || self.bounds.height < config.min_size {
            return true;
        }
        self.items.len() < config.node_capacity
    }

    pub(crate) fn insert(&mut self, item: Item, config: &Config) {
        let cx = self.bounds.x;
        let cy = self.bounds.y;

        let children = match self.children {
            None => {
                if self.has_room(config) {
                    self.items.push(item);
                } else {
                    // Append first so the split redistributes it along with
                    // everything already held.
                    self.items.push(item);
                    self.split(config);
                }
                return;
            }
            Some(ref mut children) => children,
        };

        for quadrant in child_targets(cx, cy, &item.bounds) {
            children[quadrant].insert(item, config);
        }
    }

    // Precondition: leaf. Splitting a node twice is a programming error and
    // aborts rather than corrupting the child layout.
    fn split(&mut self, config: &Config) {
        assert!(
            self.children.is_none(),
            "split called on an already split node"
        );

        let quarter_w = self.bounds.width / 4.0;
        let quarter_h = self.bounds.height / 4.0;
        let half_w = self.bounds.width / 2.0;
        let half_h = self.bounds.height / 2.0;
        let cx = self.bounds.x;
        let cy = self.bounds.y;

        self.children = Some(Box::new([
            Node::new(Rectangle::new(
                cx - quarter_w,
                cy - quarter_h,
                half_w,
                half_h,
            )),
            Node::new(Rectangle::new(
                cx + quarter_w,
                cy - quarter_h,
                half_w,
                half_h,
            )),
            Node::new(Rectangle::new(
                cx - quarter_w,
                cy + quarter_h,
                half_w,
                half_h,
            )),
            Node::new(Rectangle::new(
                cx + quarter_w,
                cy + quarter_h,
                half_w,
                half_h,
            )),
        ]));

        // Redistribute everything held so far through the normal insert
        // path; a crowded child splits again on its own.
        let previous = std::mem::take(&mut self.items);
        for item in previous {
            self.insert(item, config);
        }
    }

    // Every unordered pair of direct items, each direct item against the
    // whole subtree of every child (a straddling item kept at this level
    // still has to meet items living deeper down), then the children
    // themselves. Yields a superset of the true collisions; callers apply
    // the geometric predicate.
    pub(crate) fn possible_collisions<F>(&self, f: &mut F)
    where
        F: FnMut(u32, u32),
    {
        for (i, outer) in self.items.iter().enumerate() {
            for inner in &self.items[i + 1..] {
                f(outer.value, inner.value);
            }
            if let Some(children) = &self.children {
                for child in children.iter() {
                    child.combine_with(outer.value, f);
                }
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.possible_collisions(f);
            }
        }
    }

    pub(crate) fn combine_with<F>(&self, other: u32, f: &mut F)
    where
        F: FnMut(u32, u32),
    {
        for item in &self.items {
            f(other, item.value);
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.combine_with(other, f);
            }
        }
    }

    // Point-localized walk: direct items, then only the one quadrant that
    // contains the point.
    pub(crate) fn visit_items_near<F>(&self, x: f32, y: f32, f: &mut F)
    where
        F: FnMut(u32),
    {
        for item in &self.items {
            f(item.value);
        }
        let children = match &self.children {
            None => return,
            Some(children) => children,
        };
        let quadrant = if x < self.bounds.x {
            if y < self.bounds.y {
                NW
            } else {
                SW
            }
        } else if y < self.bounds.y {
            NE
        } else {
            SE
        };
        children[quadrant].visit_items_near(x, y, f);
    }

    // Counts duplicated placements individually.
    pub(crate) fn count_all_items(&self) -> usize {
        let mut count = self.items.len();
        if let Some(children) = &self.children {
            for child in children.iter() {
                count += child.count_all_items();
            }
        }
        count
    }

    pub(crate) fn node_bounding_boxes(&self, out: &mut Vec<Rectangle>) {
        out.push(self.bounds);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.node_bounding_boxes(out);
            }
        }
    }

    pub(crate) fn node_items(&self, out: &mut Vec<(Rectangle, Vec<u32>)>) {
        out.push((
            self.bounds,
            self.items.iter().map(|item| item.value).collect(),
        ));
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.node_items(out);
            }
        }
    }
}

// Quadrants an item box lands in. A box strictly inside one half-plane on
// both axes gets exactly one child; a box crossing a split axis gets every
// child it overlaps, so no true collision is lost at a partition boundary.
// Ties count as straddling.
fn child_targets(cx: f32, cy: f32, bounds: &Rectangle) -> SmallVec<[usize; 4]> {
    let mut targets = SmallVec::new();
    if bounds.right() < cx {
        if bounds.bottom() < cy {
            targets.push(NW);
        } else if bounds.top() > cy {
            targets.push(SW);
        } else {
            targets.push(NW);
            targets.push(SW);
        }
    } else if bounds.left() > cx {
        if bounds.bottom() < cy {
            targets.push(NE);
        } else if bounds.top() > cy {
            targets.push(SE);
        } else {
            targets.push(NE);
            targets.push(SE);
        }
    } else if bounds.bottom() < cy {
        targets.push(NW);
        targets.push(NE);
    } else if bounds.top() > cy {
        targets.push(SW);
        targets.push(SE);
    } else {
        targets.push(NW);
        targets.push(NE);
        targets.push(SW);
        targets.push(SE);
    }
    targets
}
