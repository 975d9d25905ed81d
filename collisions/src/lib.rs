use common::shapes::{Rectangle, Spatial};
use nalgebra::{Point2, Rotation2, Vector2};

// Mass is a fixed fraction of radius.
const MASS_PER_RADIUS: f32 = 0.1;
// Wall bounces bleed a little energy.
const BOUNCE_DAMPING: f32 = 0.8;

// A moving circular body. Radius and mass are fixed at construction;
// position and velocity are rewritten every tick by integration, boundary
// reflection and collision response.
#[derive(Debug, Clone)]
pub struct Body {
    pub position: Point2<f32>,
    pub velocity: Vector2<f32>,
    radius: f32,
    mass: f32,
}

impl Body {
    pub fn new(position: Point2<f32>, velocity: Vector2<f32>, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass: MASS_PER_RADIUS * radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    // Advance by one tick of velocity, reflecting off the world edges.
    // Each axis clamps and flips independently; any hit damps the whole
    // velocity. Returns whether a wall was hit this tick.
    pub fn update(&mut self, world_width: f32, world_height: f32) -> bool {
        let mut x = self.position.x + self.velocity.x;
        let mut y = self.position.y + self.velocity.y;
        let mut hit = false;

        if x < 0.0 {
            x = 0.0;
            self.velocity.x *= -1.0;
            hit = true;
        } else if x > world_width {
            x = world_width;
            self.velocity.x *= -1.0;
            hit = true;
        }

        if y < 0.0 {
            y = 0.0;
            self.velocity.y *= -1.0;
            hit = true;
        } else if y > world_height {
            y = world_height;
            self.velocity.y *= -1.0;
            hit = true;
        }

        if hit {
            self.velocity *= BOUNCE_DAMPING;
        }

        self.position = Point2::new(x, y);
        hit
    }

    pub fn collides_with(&self, other: &Body) -> bool {
        nalgebra::distance(&self.position, &other.position) < self.radius + other.radius
    }

    // Elastic collision between two circles of possibly unequal mass,
    // resolved in a frame whose x-axis runs along the line between centers.
    // Not idempotent: resolving the same contact twice double-applies the
    // exchange, so callers must hand each touching pair in once per tick.
    pub fn collide(&mut self, other: &mut Body) {
        let span = other.position - self.position;
        let theta = span.y.atan2(span.x);
        let to_frame = Rotation2::new(-theta);
        let to_world = Rotation2::new(theta);

        let span_aligned = to_frame * span;
        let v1 = to_frame * self.velocity;
        let v2 = to_frame * other.velocity;

        // 1D elastic exchange along the normal; the tangential components
        // ride through untouched.
        let total_mass = self.mass + other.mass;
        let v1_final = Vector2::new(
            ((self.mass - other.mass) * v1.x + 2.0 * other.mass * v2.x) / total_mass,
            v1.y,
        );
        let v2_final = Vector2::new(
            ((other.mass - self.mass) * v2.x + 2.0 * self.mass * v1.x) / total_mass,
            v2.y,
        );

        // Push the separation along the normal by the post-collision
        // velocities so repeat contacts don't clump.
        let self_shift = to_world * Vector2::new(v1_final.x, 0.0);
        let span_corrected = to_world * Vector2::new(span_aligned.x + v2_final.x, span_aligned.y);

        other.position = self.position + span_corrected;
        self.position += self_shift;
        self.velocity = to_world * v1_final;
        other.velocity = to_world * v2_final;
    }
}

impl Spatial for Body {
    fn position(&self) -> (f32, f32) {
        (self.position.x, self.position.y)
    }

    // An axis-aligned square of side 2 * radius, derived on every call.
    fn bounding_box(&self) -> Rectangle {
        let d = self.radius * 2.0;
        Rectangle::new(self.position.x, self.position.y, d, d)
    }
}
