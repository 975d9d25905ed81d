use anyhow::Result;
use collisions::Body;
use common::shapes::Rectangle;
use nalgebra::{Point2, Vector2};
use quadtree::QuadTree;
use simulation::{spawn_bodies, step};
use tracing::info;

const WORLD_WIDTH: f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;

// Headless run of the bouncing-circles field: `bounce [ticks] [bodies]`.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let ticks: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 1000,
    };
    let count: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 360,
    };

    let mut rng = rand::thread_rng();
    let mut bodies = spawn_bodies(count, 5.0, 15.0, 2.0, WORLD_WIDTH, WORLD_HEIGHT, &mut rng);
    // One heavy resting body in the middle for the rest to pile against.
    bodies.push(Body::new(
        Point2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        Vector2::zeros(),
        35.0,
    ));

    let mut tree = QuadTree::new(Rectangle::new(
        WORLD_WIDTH / 2.0,
        WORLD_HEIGHT / 2.0,
        WORLD_WIDTH,
        WORLD_HEIGHT,
    ))?;

    let mut resolved_total = 0usize;
    for tick in 0..ticks {
        let stats = step(&mut tree, &mut bodies, WORLD_WIDTH, WORLD_HEIGHT)?;
        resolved_total += stats.resolved;
        if tick % 100 == 0 {
            info!(
                tick,
                candidate_pairs = stats.candidate_pairs,
                resolved = stats.resolved,
                "progress"
            );
        }
    }

    info!(ticks, bodies = bodies.len(), resolved_total, "done");
    Ok(())
}
