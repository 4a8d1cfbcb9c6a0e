use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::particles::Particle;
use crate::utils::{SimulationConfig, SimulationError};

fn still(x: f64, y: f64, radius: f64) -> Particle {
    Particle::new((x, y), (0.0, 0.0), radius).expect("Failed to create particle")
}

#[test]
fn test_new_valid() {
    let particle = Particle::new((1.0, 2.0), (3.0, 4.0), 5.0).expect("Failed to create particle with valid parameters");
    assert_eq!(particle.position, (1.0, 2.0));
    assert_eq!(particle.velocity, (3.0, 4.0));
    assert_eq!(particle.radius, 5.0);
    assert_eq!(particle.previous_position, (1.0, 2.0));
    assert_eq!(particle.acceleration, (0.0, 0.0));
    assert_eq!(particle.serial(), 0);
}

#[test]
fn test_new_invalid_inputs() {
    assert_eq!(Particle::new((0.0, 0.0), (0.0, 0.0), -1.0), Err(SimulationError::InvalidRadius));
    assert_eq!(Particle::new((0.0, 0.0), (0.0, 0.0), f64::NAN), Err(SimulationError::InvalidRadius));
    assert_eq!(Particle::new((f64::INFINITY, 0.0), (0.0, 0.0), 1.0), Err(SimulationError::InvalidPosition));
    assert_eq!(Particle::new((0.0, 0.0), (0.0, f64::NAN), 1.0), Err(SimulationError::InvalidVelocity));
}

#[test]
fn test_spawn_draws_missing_values_from_default_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let particle = Particle::spawn((1.0, 1.0), None, None, &mut rng).expect("Failed to spawn particle");
        assert!(particle.radius >= 0.2 && particle.radius < 10.0, "radius {} out of range", particle.radius);
        assert!(particle.velocity.0 >= -5.0 && particle.velocity.0 < 5.0);
        assert!(particle.velocity.1 >= -5.0 && particle.velocity.1 < 5.0);
    }

    let fixed = Particle::spawn((1.0, 1.0), Some((0.5, -0.5)), Some(3.0), &mut rng).expect("Failed to spawn particle");
    assert_eq!(fixed.velocity, (0.5, -0.5));
    assert_eq!(fixed.radius, 3.0);
}

#[test]
fn test_reset_acceleration() {
    let mut particle = still(10.0, 10.0, 1.0);
    particle.apply_acceleration((1.5, -2.5));
    particle.apply_acceleration((0.5, 0.5));
    assert_eq!(particle.acceleration, (2.0, -2.0));
    particle.reset_acceleration();
    assert_eq!(particle.acceleration, (0.0, 0.0));
}

#[test]
fn test_attract_to_points_at_other() {
    let g = 0.001;
    let mut a = still(400.0, 300.0, 5.0);
    let mut b = still(450.0, 300.0, 5.0);
    let a_snapshot = a;
    a.attract_to(&b, g);
    b.attract_to(&a_snapshot, g);

    // g * 5 * 5 * 50 / 50
    assert_relative_eq!(a.acceleration.0, 0.025, epsilon = 1e-12);
    assert_relative_eq!(b.acceleration.0, -0.025, epsilon = 1e-12);
    assert_eq!(a.acceleration.1, 0.0);
    assert_eq!(b.acceleration.1, 0.0);
}

#[test]
fn test_attract_to_accumulates() {
    let g = 0.01;
    let mut center = still(0.0, 0.0, 1.0);
    center.attract_to(&still(10.0, 0.0, 1.0), g);
    center.attract_to(&still(0.0, -10.0, 1.0), g);
    assert_relative_eq!(center.acceleration.0, 0.01, epsilon = 1e-12);
    assert_relative_eq!(center.acceleration.1, -0.01, epsilon = 1e-12);
}

#[test]
fn test_softening_floor_near_zero_separation() {
    let g = 1.0;
    let a = still(0.0, 0.0, 1.0);

    // Below the floor the offset is divided by 2 instead of the true distance.
    let (ax, ay) = a.acceleration_from(&still(0.5, 0.0, 1.0), g);
    assert_relative_eq!(ax, 0.25, epsilon = 1e-12);
    assert_eq!(ay, 0.0);

    // Coincident particles produce no pull and no NaN.
    let (ax, ay) = a.acceleration_from(&still(0.0, 0.0, 1.0), g);
    assert_eq!((ax, ay), (0.0, 0.0));
}

#[test]
fn test_update_integrates_position_before_velocity() {
    let config = SimulationConfig::default();
    let mut particle = Particle::new((100.0, 200.0), (1.0, -2.0), 1.0).unwrap();
    particle.apply_acceleration((0.5, 0.25));
    particle.update(&config);

    assert_eq!(particle.previous_position, (100.0, 200.0));
    // Position moved by the old velocity...
    assert_eq!(particle.position, (101.0, 198.0));
    // ...and the velocity picked up this tick's acceleration afterwards.
    assert_eq!(particle.velocity, (1.5, -1.75));
}

#[test]
fn test_update_bounces_off_left_wall() {
    let config = SimulationConfig::default();
    let radius = 5.0;
    let mut particle = Particle::new((radius - 1.0, 300.0), (-3.0, 0.0), radius).unwrap();
    particle.update(&config);

    assert_relative_eq!(particle.velocity.0, 0.3, epsilon = 1e-12);
    // Clamped to exactly the radius, then advanced by the damped velocity.
    assert_relative_eq!(particle.position.0, radius + 0.3, epsilon = 1e-12);
    assert_eq!(particle.position.1, 300.0);
    assert_eq!(particle.velocity.1, 0.0);
    assert_eq!(particle.previous_position, (radius - 1.0, 300.0));
}

#[test]
fn test_reflect_clamps_to_exactly_radius() {
    let radius = 5.0;
    let mut particle = Particle::new((radius - 1.0, 300.0), (-3.0, 0.0), radius).unwrap();
    particle.reflect(800.0, 600.0);
    assert_eq!(particle.position.0, radius);
    assert_relative_eq!(particle.velocity.0, 0.3, epsilon = 1e-12);
}

#[test]
fn test_update_bounces_off_bottom_and_right_walls() {
    let config = SimulationConfig::default();
    let mut particle = Particle::new((805.0, 610.0), (10.0, 20.0), 2.0).unwrap();
    particle.update(&config);

    assert_relative_eq!(particle.velocity.0, -1.0, epsilon = 1e-12);
    assert_relative_eq!(particle.velocity.1, -2.0, epsilon = 1e-12);
    assert_relative_eq!(particle.position.0, 798.0 - 1.0, epsilon = 1e-12);
    assert_relative_eq!(particle.position.1, 598.0 - 2.0, epsilon = 1e-12);
}

#[test]
fn test_no_bounce_away_from_walls() {
    let mut particle = Particle::new((400.0, 300.0), (-3.0, 4.0), 5.0).unwrap();
    particle.reflect(800.0, 600.0);
    assert_eq!(particle.position, (400.0, 300.0));
    assert_eq!(particle.velocity, (-3.0, 4.0));
}

#[test]
fn test_oversized_particle_does_not_panic() {
    let config = SimulationConfig::new(None, None, None, None, None, Some(10.0), Some(10.0));
    let mut particle = Particle::new((5.0, 5.0), (1.0, 1.0), 8.0).unwrap();
    particle.update(&config);
    assert!(particle.is_finite());
}

#[test]
fn test_update_properties_hold_for_random_states() {
    let config = SimulationConfig::default();
    let limit = config.max_velocity;
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..2_000 {
        let radius = Particle::random_radius(&mut rng);
        let position = (
            rng.random_range(-20.0..config.width + 20.0),
            rng.random_range(-20.0..config.height + 20.0),
        );
        let velocity = (rng.random_range(-limit..=limit), rng.random_range(-limit..=limit));
        let mut particle = Particle::new(position, velocity, radius).unwrap();
        particle.apply_acceleration((rng.random_range(-80.0..80.0), rng.random_range(-80.0..80.0)));

        let mut reflected = particle;
        reflected.reflect(config.width, config.height);
        let slack = (1.0 - 0.5 * 1.99) * radius + 1e-9;
        assert!(reflected.position.0 >= radius - slack && reflected.position.0 <= config.width - radius + slack);
        assert!(reflected.position.1 >= radius - slack && reflected.position.1 <= config.height - radius + slack);

        particle.update(&config);
        assert!(particle.is_finite());
        assert!(particle.velocity.0.abs() <= limit && particle.velocity.1.abs() <= limit);
        assert_abs_diff_eq!(particle.position.0, reflected.position.0 + reflected.velocity.0, epsilon = 1e-9);
        assert_abs_diff_eq!(particle.position.1, reflected.position.1 + reflected.velocity.1, epsilon = 1e-9);
        assert!(particle.position.0 >= radius - slack - limit && particle.position.0 <= config.width - radius + slack + limit);
        assert!(particle.position.1 >= radius - slack - limit && particle.position.1 <= config.height - radius + slack + limit);
    }
}

#[test]
fn test_intensity_saturates() {
    let resting = still(0.0, 0.0, 1.0);
    assert_eq!(resting.intensity(), 0.0);

    let walking = Particle::new((0.0, 0.0), (3.0, 4.0), 1.0).unwrap();
    assert_relative_eq!(walking.speed(), 5.0);
    assert_relative_eq!(walking.intensity(), 1.0);

    let racing = Particle::new((0.0, 0.0), (30.0, 40.0), 1.0).unwrap();
    assert_relative_eq!(racing.intensity(), 4.0);
}
