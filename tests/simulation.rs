/*
 * Integration tests driving whole-flock simulations through the public API.
 */

use rand::rngs::StdRng;
use rand::SeedableRng;

use flocking::{Boid, FlockSimulator, SimulationParams, Vector2D};

fn seeded_flock(count: usize, seed: u64) -> (FlockSimulator, Vec<Boid>) {
    let params = SimulationParams::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let boids = (0..count)
        .map(|_| Boid::spawn_random(&mut rng, params.canvas_width, params.canvas_height))
        .collect();
    (FlockSimulator::new(params), boids)
}

#[test]
fn speed_never_exceeds_the_limit_over_a_long_run() {
    let (sim, mut boids) = seeded_flock(50, 7);
    let max_speed = sim.params.max_speed;

    for _ in 0..200 {
        sim.step(&mut boids);
        for boid in &boids {
            assert!(
                boid.velocity.magnitude() <= max_speed + 1e-3,
                "speed {} exceeds the limit",
                boid.velocity.magnitude()
            );
        }
    }
}

#[test]
fn positions_stay_on_the_canvas() {
    let (sim, mut boids) = seeded_flock(50, 21);
    let width = sim.params.canvas_width;
    let height = sim.params.canvas_height;

    for _ in 0..200 {
        sim.step(&mut boids);
        for boid in &boids {
            assert!(boid.position.x >= 0.0 && boid.position.x <= width);
            assert!(boid.position.y >= 0.0 && boid.position.y <= height);
        }
    }
}

#[test]
fn identical_seeds_produce_identical_runs() {
    let (sim_a, mut flock_a) = seeded_flock(30, 99);
    let (sim_b, mut flock_b) = seeded_flock(30, 99);

    for _ in 0..100 {
        sim_a.step(&mut flock_a);
        sim_b.step(&mut flock_b);
    }

    for (a, b) in flock_a.iter().zip(flock_b.iter()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
    }
}

#[test]
fn spawn_acceleration_steers_the_first_tick() {
    let sim = FlockSimulator::new(SimulationParams::default());
    let mut boids = vec![Boid::new(
        Vector2D::new(100.0, 100.0),
        Vector2D::new(1.0, 0.0),
    )];
    boids[0].apply_force(Vector2D::new(0.2, -0.1));

    sim.step(&mut boids);

    // The pending acceleration folds into the velocity on the very first
    // tick, after the position has already moved
    assert_eq!(boids[0].position, Vector2D::new(101.0, 100.0));
    assert!((boids[0].velocity.x - 1.2).abs() < 1e-6);
    assert!((boids[0].velocity.y + 0.1).abs() < 1e-6);
}

#[test]
fn position_moves_before_the_new_forces_take_effect() {
    let sim = FlockSimulator::new(SimulationParams::default());
    let mut boids = vec![
        Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(1.0, 0.0)),
        Boid::new(Vector2D::new(110.0, 100.0), Vector2D::new(1.0, 0.0)),
    ];

    sim.step(&mut boids);

    // Both boids travel with their old (1, 0) velocity this tick even though
    // alignment accelerates them hard towards max speed
    assert_eq!(boids[0].position, Vector2D::new(101.0, 100.0));
    assert_eq!(boids[1].position, Vector2D::new(111.0, 100.0));
    assert!((boids[0].velocity.x - 5.0).abs() < 1e-4);
    assert!((boids[1].velocity.x - 5.0).abs() < 1e-4);
    assert_eq!(boids[0].velocity.y, 0.0);
    assert_eq!(boids[1].velocity.y, 0.0);
}

#[test]
fn parameters_can_change_between_ticks() {
    let (mut sim, mut boids) = seeded_flock(40, 3);

    for _ in 0..20 {
        sim.step(&mut boids);
    }

    // Tighten the speed limit mid-run; the next tick clamps everyone
    sim.params.max_speed = 2.0;
    for _ in 0..20 {
        sim.step(&mut boids);
    }

    for boid in &boids {
        assert!(boid.velocity.magnitude() <= 2.0 + 1e-3);
    }
}
