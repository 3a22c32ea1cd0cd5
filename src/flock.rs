/*
 * Flock Module
 *
 * This module drives the simulation. Each tick computes a steering force for
 * every boid from three rules:
 * 1. Alignment: Steer towards the average heading of neighbors
 * 2. Cohesion: Steer towards the average position of neighbors
 * 3. Separation: Avoid crowding the closest neighbors
 *
 * Forces for the whole flock are computed from a consistent snapshot before
 * any boid moves, so the outcome never depends on iteration order.
 */

use std::f32::consts::PI;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::vector::Vector2D;

// Runs the steering rules and integration over a flock of boids
pub struct FlockSimulator {
    pub params: SimulationParams,
}

impl FlockSimulator {
    pub fn new(params: SimulationParams) -> Self {
        Self { params }
    }

    /// Advances the flock by one tick.
    pub fn step(&self, boids: &mut [Boid]) {
        // First pass: compute all steering forces against the current state
        let forces: Vec<Vector2D> = (0..boids.len())
            .map(|i| {
                self.alignment(boids, i) + self.cohesion(boids, i) + self.separation(boids, i)
            })
            .collect();

        // Second pass: apply forces, integrate and wrap
        for (boid, force) in boids.iter_mut().zip(forces) {
            boid.apply_force(force);
            boid.update(self.params.max_speed);
            boid.wrap_edges(self.params.canvas_width, self.params.canvas_height);
        }
    }

    // Steer towards the average heading of visible neighbors.
    // Unlike cohesion and separation, the result is not capped by max_force.
    pub fn alignment(&self, boids: &[Boid], index: usize) -> Vector2D {
        let boid = &boids[index];
        let mut sum = Vector2D::ZERO;
        let mut count = 0;

        for (i, other) in boids.iter().enumerate() {
            if i == index {
                continue;
            }

            let distance = boid.position.distance(other.position);
            if distance < self.params.perception_radius && self.perceives(boid, other) {
                sum += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            let average = sum / count as f32;
            // A cancelled average carries no heading to align with
            if average.magnitude() > 0.0 {
                return average.with_magnitude(self.params.max_speed) - boid.velocity;
            }
        }

        Vector2D::ZERO
    }

    // Steer towards the centre of mass of visible neighbors
    pub fn cohesion(&self, boids: &[Boid], index: usize) -> Vector2D {
        let boid = &boids[index];
        let mut sum = Vector2D::ZERO;
        let mut count = 0;

        for (i, other) in boids.iter().enumerate() {
            if i == index {
                continue;
            }

            let distance = boid.position.distance(other.position);
            if distance < self.params.perception_radius && self.perceives(boid, other) {
                sum += other.position;
                count += 1;
            }
        }

        if count > 0 {
            let centre = sum / count as f32;
            let desired = (centre - boid.position).with_magnitude(self.params.max_speed);
            let steering = desired - boid.velocity;
            return steering.limit(self.params.max_force);
        }

        Vector2D::ZERO
    }

    // Steer away from neighbors closer than half the perception radius
    pub fn separation(&self, boids: &[Boid], index: usize) -> Vector2D {
        let boid = &boids[index];
        let mut sum = Vector2D::ZERO;
        let mut count = 0;

        for (i, other) in boids.iter().enumerate() {
            if i == index {
                continue;
            }

            let distance = boid.position.distance(other.position);
            // A co-located neighbor has no direction to flee along
            if distance > 0.0
                && distance < self.params.separation_radius()
                && self.perceives(boid, other)
            {
                sum += (boid.position - other.position) / distance;
                count += 1;
            }
        }

        if count > 0 {
            let average = sum / count as f32;
            let desired = average.with_magnitude(self.params.max_speed);
            let steering = desired - boid.velocity;
            return steering.limit(self.params.max_force);
        }

        Vector2D::ZERO
    }

    // Field-of-view test: is `other` within the half-angle around the
    // direction of travel?
    fn perceives(&self, boid: &Boid, other: &Boid) -> bool {
        // PI or wider covers the full circle
        if self.params.field_of_view >= PI {
            return true;
        }

        let offset = other.position - boid.position;
        let norms = boid.velocity.magnitude() * offset.magnitude();
        // A stationary boid or a co-located neighbor has no defined angle
        if norms <= 0.0 {
            return true;
        }

        // cos(angle) >= cos(half-angle), with the division folded away
        boid.velocity.dot(offset) >= self.params.field_of_view.cos() * norms
    }
}
