use collisions::Body;
use common::shapes::Rectangle;
use nalgebra::{Point2, Vector2};
use quadtree::{QuadTree, QuadtreeResult};
use rand::Rng;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct StepStats {
    pub candidate_pairs: usize,
    pub resolved: usize,
}

// One simulation tick: rebuild the tree over the world, integrate and
// reinsert every body, then resolve each truly overlapping candidate pair.
// Body ids are slice indices. Pairs are deduplicated before resolution
// because the collision response is not idempotent; body state read by later
// pairs is whatever earlier resolutions left behind, which the rebuilt-next-
// tick tree tolerates.
pub fn step(
    tree: &mut QuadTree,
    bodies: &mut [Body],
    world_width: f32,
    world_height: f32,
) -> QuadtreeResult<StepStats> {
    tree.reset(Rectangle::new(
        world_width / 2.0,
        world_height / 2.0,
        world_width,
        world_height,
    ))?;

    for (i, body) in bodies.iter_mut().enumerate() {
        body.update(world_width, world_height);
        tree.insert(i as u32, &*body);
    }

    let mut stats = StepStats::default();
    tree.for_each_candidate_pair_dedupe(|a, b| {
        stats.candidate_pairs += 1;
        let (first, second) = pair_mut(bodies, a as usize, b as usize);
        if first.collides_with(second) {
            first.collide(second);
            stats.resolved += 1;
        }
    });

    debug!(
        bodies = bodies.len(),
        candidate_pairs = stats.candidate_pairs,
        resolved = stats.resolved,
        "tick"
    );
    Ok(stats)
}

// Seed `count` random bodies inside the world. Requires min_radius <
// max_radius.
pub fn spawn_bodies<R: Rng>(
    count: usize,
    min_radius: f32,
    max_radius: f32,
    max_speed: f32,
    world_width: f32,
    world_height: f32,
    rng: &mut R,
) -> Vec<Body> {
    let region = Rectangle::new(
        world_width / 2.0,
        world_height / 2.0,
        world_width,
        world_height,
    );
    (0..count)
        .map(|_| {
            let radius = rng.gen_range(min_radius..max_radius);
            let (x, y) = region.get_random_circle_coords_inside(radius, rng);
            let velocity = Vector2::new(
                rng.gen_range(-max_speed..=max_speed),
                rng.gen_range(-max_speed..=max_speed),
            );
            Body::new(Point2::new(x, y), velocity, radius)
        })
        .collect()
}

// Two distinct mutable elements out of one slice.
fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
