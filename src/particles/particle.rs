use rand::Rng;

use crate::spatial::Located;
use crate::utils::{
    SimulationConfig, SimulationError, BOUNCE_DAMPING, BOUNDARY_RADIUS_FACTOR, INTENSITY_DIVISOR,
    INTENSITY_SPEED_CEILING, MAX_SPAWN_RADIUS, MIN_SPAWN_RADIUS, SOFTENING_DISTANCE, SPAWN_VELOCITY_RANGE,
};

/// Clamps without panicking when `min > max`, which happens for a particle wider
/// than the bounds. In that case `max` wins.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position represented as (x, y).
    pub position: (f64, f64),
    /// Velocity per tick, each component kept within the configured limit by [`Particle::update`].
    pub velocity: (f64, f64),
    /// Acceleration gathered during the current tick.
    pub acceleration: (f64, f64),
    /// Size of the particle. Also acts as its gravitational mass.
    pub radius: f64,
    /// Position at the start of the last update, used to draw a motion segment.
    pub previous_position: (f64, f64),
    serial: u64,
}

impl Particle {
    /// Creates a new Particle at rest acceleration-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not a positive finite number, or if the
    /// position or velocity has a non-finite component.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_swarm::particles::Particle;
    /// use rs_particle_swarm::utils::SimulationError;
    ///
    /// let particle = Particle::new((10.0, 20.0), (1.0, -1.0), 3.0)
    ///     .expect("Failed to create particle");
    /// assert_eq!(particle.previous_position, (10.0, 20.0));
    /// assert_eq!(particle.acceleration, (0.0, 0.0));
    ///
    /// assert_eq!(Particle::new((0.0, 0.0), (0.0, 0.0), 0.0), Err(SimulationError::InvalidRadius));
    /// ```
    pub fn new(position: (f64, f64), velocity: (f64, f64), radius: f64) -> Result<Self, SimulationError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimulationError::InvalidRadius);
        }
        if !(position.0.is_finite() && position.1.is_finite()) {
            return Err(SimulationError::InvalidPosition);
        }
        if !(velocity.0.is_finite() && velocity.1.is_finite()) {
            return Err(SimulationError::InvalidVelocity);
        }
        Ok(Particle {
            position,
            velocity,
            acceleration: (0.0, 0.0),
            radius,
            previous_position: position,
            serial: 0,
        })
    }

    /// Creates a particle, drawing any missing velocity or radius from the default spawn ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use rs_particle_swarm::particles::Particle;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let particle = Particle::spawn((5.0, 5.0), None, Some(2.0), &mut rng)
    ///     .expect("Failed to spawn particle");
    /// assert_eq!(particle.radius, 2.0);
    /// assert!(particle.velocity.0.abs() <= 5.0 && particle.velocity.1.abs() <= 5.0);
    /// ```
    pub fn spawn<R: Rng + ?Sized>(
        position: (f64, f64),
        velocity: Option<(f64, f64)>,
        radius: Option<f64>,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let velocity = velocity.unwrap_or_else(|| Self::random_velocity(rng));
        let radius = radius.unwrap_or_else(|| Self::random_radius(rng));
        Self::new(position, velocity, radius)
    }

    /// A velocity with each component uniform in `[-5, 5)`.
    pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
        (
            rng.random_range(-SPAWN_VELOCITY_RANGE..SPAWN_VELOCITY_RANGE),
            rng.random_range(-SPAWN_VELOCITY_RANGE..SPAWN_VELOCITY_RANGE),
        )
    }

    /// A radius uniform in `[0.2, 10)`.
    pub fn random_radius<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        rng.random_range(MIN_SPAWN_RADIUS..MAX_SPAWN_RADIUS)
    }

    /// Creation order assigned by the population. Zero until the particle is admitted.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub(crate) fn set_serial(&mut self, serial: u64) {
        self.serial = serial;
    }

    pub fn reset_acceleration(&mut self) {
        self.acceleration = (0.0, 0.0);
    }

    /// Acceleration `other` induces on this particle.
    ///
    /// The offset is divided by the separation floored at 2, so the magnitude is
    /// `g * r * r_other` once the particles are more than 2 apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_swarm::particles::Particle;
    ///
    /// let a = Particle::new((0.0, 0.0), (0.0, 0.0), 2.0).unwrap();
    /// let b = Particle::new((10.0, 0.0), (0.0, 0.0), 5.0).unwrap();
    /// let (ax, ay) = a.acceleration_from(&b, 0.1);
    /// assert!((ax - 1.0).abs() < 1e-12);
    /// assert_eq!(ay, 0.0);
    /// ```
    pub fn acceleration_from(&self, other: &Particle, g: f64) -> (f64, f64) {
        let dx = other.position.0 - self.position.0;
        let dy = other.position.1 - self.position.1;
        let distance = (dx * dx + dy * dy).sqrt().max(SOFTENING_DISTANCE);
        let strength = g * self.radius * other.radius / distance;
        (strength * dx, strength * dy)
    }

    /// Adds the pull of `other` to this tick's acceleration.
    pub fn attract_to(&mut self, other: &Particle, g: f64) {
        let (ax, ay) = self.acceleration_from(other, g);
        self.apply_acceleration((ax, ay));
    }

    pub fn apply_acceleration(&mut self, acceleration: (f64, f64)) {
        self.acceleration.0 += acceleration.0;
        self.acceleration.1 += acceleration.1;
    }

    /// Pushes the particle back inside `[radius, dim - radius]` on any axis where
    /// it has reached the edge, reversing and damping that velocity component.
    pub fn reflect(&mut self, width: f64, height: f64) {
        let r = self.radius;
        if (2.0 * self.position.0 - width).abs() > width - BOUNDARY_RADIUS_FACTOR * r {
            self.position.0 = clamp(self.position.0, r, width - r);
            self.velocity.0 *= BOUNCE_DAMPING;
        }
        if (2.0 * self.position.1 - height).abs() > height - BOUNDARY_RADIUS_FACTOR * r {
            self.position.1 = clamp(self.position.1, r, height - r);
            self.velocity.1 *= BOUNCE_DAMPING;
        }
    }

    /// Advances the particle by one tick.
    ///
    /// Records the previous position, reflects off the bounds, moves by the
    /// (possibly reflected) velocity, then adds this tick's acceleration to the
    /// velocity and clamps each component to `max_velocity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_swarm::particles::Particle;
    /// use rs_particle_swarm::utils::SimulationConfig;
    ///
    /// let config = SimulationConfig::default();
    /// let mut particle = Particle::new((100.0, 100.0), (2.0, 0.0), 1.0).unwrap();
    /// particle.apply_acceleration((0.0, 100.0));
    /// particle.update(&config);
    ///
    /// assert_eq!(particle.previous_position, (100.0, 100.0));
    /// assert_eq!(particle.position, (102.0, 100.0));
    /// assert_eq!(particle.velocity, (2.0, config.max_velocity));
    /// ```
    pub fn update(&mut self, config: &SimulationConfig) {
        self.previous_position = self.position;
        self.reflect(config.width, config.height);

        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;

        let limit = config.max_velocity;
        self.velocity.0 = clamp(self.velocity.0 + self.acceleration.0, -limit, limit);
        self.velocity.1 = clamp(self.velocity.1 + self.acceleration.1, -limit, limit);
    }

    pub fn speed(&self) -> f64 {
        (self.velocity.0 * self.velocity.0 + self.velocity.1 * self.velocity.1).sqrt()
    }

    /// Display weight derived from speed: `min(speed, 20) / 5`, in `[0, 4]`.
    pub fn intensity(&self) -> f64 {
        self.speed().min(INTENSITY_SPEED_CEILING) / INTENSITY_DIVISOR
    }

    /// Whether every component of the particle's state is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.position.0,
            self.position.1,
            self.velocity.0,
            self.velocity.1,
            self.acceleration.0,
            self.acceleration.1,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Located for Particle {
    fn location(&self) -> (f64, f64) {
        self.position
    }
}
