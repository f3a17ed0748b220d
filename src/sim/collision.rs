//! Circle geometry shared by every interaction test
//!
//! All entities are circles. Two circles collide when the distance between
//! their centers is strictly less than the sum of their radii.

use glam::Vec2;

/// Anything with a circular footprint
pub trait Circle {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
}

macro_rules! impl_circle {
    ($($ty:ty),*) => {
        $(
            impl Circle for $ty {
                #[inline]
                fn center(&self) -> Vec2 {
                    self.pos
                }
                #[inline]
                fn radius(&self) -> f32 {
                    self.radius
                }
            }
        )*
    };
}

impl_circle!(
    super::state::Player,
    super::state::Enemy,
    super::state::Projectile,
    super::state::Powerup,
    super::state::Particle
);

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Raw circle-overlap test
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    distance(a_pos, b_pos) < a_radius + b_radius
}

/// Overlap test between two circular entities (symmetric)
#[inline]
pub fn circle_collision(a: &impl Circle, b: &impl Circle) -> bool {
    circles_overlap(a.center(), a.radius(), b.center(), b.radius())
}
