/*
 * Boid Module
 *
 * This module defines the Boid struct, a single agent in the flock.
 * A boid carries its position, velocity and the acceleration accumulated
 * for the current tick; the steering rules that fill the acceleration
 * live in the flock module.
 */

use rand::Rng;

use crate::vector::Vector2D;

#[derive(Debug, Clone, Copy)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2D::ZERO,
        }
    }

    /// Spawns a boid at a uniformly random position on the canvas.
    ///
    /// Velocity components are drawn from [-5, 5) and the initial
    /// acceleration from [-0.25, 0.25), so a fresh boid already steers
    /// slightly on its first tick.
    pub fn spawn_random(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            position: Vector2D::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            velocity: Vector2D::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)),
            acceleration: Vector2D::new(rng.gen_range(-0.25..0.25), rng.gen_range(-0.25..0.25)),
        }
    }

    // Accumulate a steering force for the current tick
    pub fn apply_force(&mut self, force: Vector2D) {
        self.acceleration += force;
    }

    /// Advances the boid by one tick.
    ///
    /// The position moves with the velocity of the previous tick before the
    /// accumulated acceleration is folded in; new forces therefore take
    /// effect one tick after they are applied.
    pub fn update(&mut self, max_speed: f32) {
        // Update position with the old velocity
        self.position += self.velocity;

        // Fold in the accumulated acceleration and limit speed
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(max_speed);

        // Reset acceleration for the next tick
        self.acceleration = Vector2D::ZERO;
    }

    /// Wraps the boid to the opposite edge once it moves beyond the canvas.
    ///
    /// Only positions strictly outside [0, width] x [0, height] wrap; a boid
    /// sitting exactly on an edge stays where it is.
    pub fn wrap_edges(&mut self, width: f32, height: f32) {
        if self.position.x > width {
            self.position.x = 0.0;
        } else if self.position.x < 0.0 {
            self.position.x = width;
        }

        if self.position.y > height {
            self.position.y = 0.0;
        } else if self.position.y < 0.0 {
            self.position.y = height;
        }
    }

    // Direction of travel in radians
    pub fn heading(&self) -> f32 {
        self.velocity.heading()
    }
}
