use rand::Rng;
use std::fmt::Debug;

// Anything with a position and an axis-aligned bounding box can go into the
// quadtree. The box must be derived from current state on every call, never
// cached.
pub trait Spatial: Debug {
    fn position(&self) -> (f32, f32);
    fn bounding_box(&self) -> Rectangle;
}

// Axis-aligned rectangle; x/y is the center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    pub fn get_random_circle_coords_inside<R: Rng>(&self, radius: f32, rng: &mut R) -> (f32, f32) {
        // Increase radius by 1 in calculations to add a minimal margin.
        let radius = radius + 1.0;
        (
            self._safe_randf32(rng, self.left() + radius, self.right() - radius),
            self._safe_randf32(rng, self.top() + radius, self.bottom() - radius),
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Spatial for Rectangle {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn bounding_box(&self) -> Rectangle {
        *self
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn update(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

impl Spatial for Circle {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn bounding_box(&self) -> Rectangle {
        let d = self.radius * 2.0;
        Rectangle::new(self.x, self.y, d, d)
    }
}
