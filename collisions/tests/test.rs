use approx::assert_relative_eq;
use collisions::Body;
use common::shapes::Spatial;
use nalgebra::{Point2, Vector2};

fn resting(x: f32, y: f32, radius: f32) -> Body {
    Body::new(Point2::new(x, y), Vector2::zeros(), radius)
}

#[test]
fn test_mass_is_fixed_fraction_of_radius() {
    let body = resting(0.0, 0.0, 15.0);
    assert_relative_eq!(body.mass(), 1.5);
    assert_eq!(body.radius(), 15.0);
}

#[test]
fn test_bounding_box_is_square_around_position() {
    let body = resting(30.0, 40.0, 5.0);
    let bb = body.bounding_box();
    assert_eq!(bb.left(), 25.0);
    assert_eq!(bb.right(), 35.0);
    assert_eq!(bb.top(), 35.0);
    assert_eq!(bb.bottom(), 45.0);
    assert_eq!(body.position(), (30.0, 40.0));
}

#[test]
fn test_bounding_box_tracks_position() {
    let mut body = Body::new(Point2::new(10.0, 10.0), Vector2::new(5.0, -3.0), 2.0);
    body.update(100.0, 100.0);
    let bb = body.bounding_box();
    assert_eq!(bb.x, 15.0);
    assert_eq!(bb.y, 7.0);
}

#[test]
fn test_collides_with_is_strict_on_touching() {
    let a = resting(50.0, 50.0, 5.0);
    let b = resting(60.0, 50.0, 5.0); // exactly touching
    assert!(!a.collides_with(&b));

    let c = resting(59.0, 50.0, 5.0);
    assert!(a.collides_with(&c));
    assert!(c.collides_with(&a));
}

#[test]
fn test_update_advances_by_velocity() {
    let mut body = Body::new(Point2::new(10.0, 20.0), Vector2::new(3.0, -4.0), 2.0);
    let hit = body.update(100.0, 100.0);
    assert!(!hit);
    assert_eq!(body.position, Point2::new(13.0, 16.0));
    // No wall hit, no damping.
    assert_eq!(body.velocity, Vector2::new(3.0, -4.0));
}

#[test]
fn test_update_reflects_and_damps_on_right_wall() {
    // Starts past the wall moving outward: clamp to the wall, flip x, damp
    // both components.
    let mut body = Body::new(Point2::new(101.0, 50.0), Vector2::new(2.0, 1.0), 5.0);
    let hit = body.update(100.0, 100.0);
    assert!(hit);
    assert_eq!(body.position.x, 100.0);
    assert_eq!(body.position.y, 51.0);
    assert_relative_eq!(body.velocity.x, -1.6);
    assert_relative_eq!(body.velocity.y, 0.8);
}

#[test]
fn test_update_reflects_on_low_edges() {
    let mut body = Body::new(Point2::new(1.0, 1.0), Vector2::new(-3.0, -4.0), 5.0);
    let hit = body.update(100.0, 100.0);
    assert!(hit);
    assert_eq!(body.position, Point2::new(0.0, 0.0));
    assert_relative_eq!(body.velocity.x, 2.4);
    assert_relative_eq!(body.velocity.y, 3.2);
}

#[test]
fn test_collide_equal_mass_head_on_swaps_normal_velocities() {
    let mut a = Body::new(Point2::new(0.0, 0.0), Vector2::new(2.0, 0.0), 5.0);
    let mut b = Body::new(Point2::new(10.0, 0.0), Vector2::new(-2.0, 0.0), 5.0);
    a.collide(&mut b);
    assert_relative_eq!(a.velocity.x, -2.0, epsilon = 1e-5);
    assert_relative_eq!(b.velocity.x, 2.0, epsilon = 1e-5);
    assert_relative_eq!(a.velocity.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(b.velocity.y, 0.0, epsilon = 1e-5);
}

#[test]
fn test_collide_conserves_momentum_along_normal() {
    // Unequal masses, normal along x.
    let mut a = Body::new(Point2::new(0.0, 0.0), Vector2::new(3.0, 1.0), 5.0);
    let mut b = Body::new(Point2::new(10.0, 0.0), Vector2::new(-2.0, 2.0), 10.0);
    let before = a.mass() * a.velocity.x + b.mass() * b.velocity.x;

    a.collide(&mut b);

    let after = a.mass() * a.velocity.x + b.mass() * b.velocity.x;
    assert_relative_eq!(before, after, epsilon = 1e-4);
}

#[test]
fn test_collide_leaves_tangential_velocity_unchanged() {
    // Normal along x; a's velocity is purely tangential, so nothing gets
    // exchanged and nothing moves.
    let mut a = Body::new(Point2::new(0.0, 0.0), Vector2::new(0.0, 3.0), 5.0);
    let mut b = Body::new(Point2::new(10.0, 0.0), Vector2::zeros(), 5.0);
    a.collide(&mut b);
    assert_relative_eq!(a.velocity.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(a.velocity.y, 3.0, epsilon = 1e-5);
    assert_relative_eq!(b.velocity.norm(), 0.0, epsilon = 1e-5);
    assert_relative_eq!(a.position.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(b.position.x, 10.0, epsilon = 1e-5);
}

#[test]
fn test_collide_along_diagonal_normal() {
    // Centers at distance 5 along the (0.6, 0.8) direction; a moves straight
    // down the normal into a resting equal-mass b. The normal velocity
    // transfers wholesale.
    let mut a = Body::new(
        Point2::new(0.0, 0.0),
        Vector2::new(0.6 * 2.0, 0.8 * 2.0),
        5.0,
    );
    let mut b = Body::new(Point2::new(3.0, 4.0), Vector2::zeros(), 5.0);
    let momentum_before = a.velocity * a.mass() + b.velocity * b.mass();

    a.collide(&mut b);

    assert_relative_eq!(a.velocity.norm(), 0.0, epsilon = 1e-5);
    assert_relative_eq!(b.velocity.x, 1.2, epsilon = 1e-5);
    assert_relative_eq!(b.velocity.y, 1.6, epsilon = 1e-5);

    let momentum_after = a.velocity * a.mass() + b.velocity * b.mass();
    assert_relative_eq!(momentum_before.x, momentum_after.x, epsilon = 1e-4);
    assert_relative_eq!(momentum_before.y, momentum_after.y, epsilon = 1e-4);
}

#[test]
fn test_collide_separates_approaching_bodies() {
    let mut a = Body::new(Point2::new(50.0, 50.0), Vector2::new(1.0, 0.0), 5.0);
    let mut b = Body::new(Point2::new(52.0, 50.0), Vector2::new(-1.0, 0.0), 5.0);
    assert!(a.collides_with(&b));
    let gap_before = nalgebra::distance(&a.position, &b.position);

    a.collide(&mut b);

    let gap_after = nalgebra::distance(&a.position, &b.position);
    assert!(
        gap_after > gap_before,
        "separation should grow: {} -> {}",
        gap_before,
        gap_after
    );
}
