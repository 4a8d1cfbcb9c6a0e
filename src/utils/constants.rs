use crate::utils::{IntegrationMode, SimulationConfig};

/// Scales every pairwise attraction.
pub const GRAVITATIONAL_CONSTANT: f64 = 0.001;
/// Per-axis velocity limit applied after every integration step.
pub const MAX_VELOCITY: f64 = 50.0;
/// Handles a quadtree node stores before it subdivides.
pub const NODE_CAPACITY: usize = 4;
/// Nominal radius of the neighbor query. Only half of it is used for containment.
pub const DETECTION_RANGE: f64 = 200.0;
/// Population size the ambient spawner fills up to.
pub const POPULATION_CAP: usize = 200;
/// Depth at which a quadtree node stops subdividing and becomes an overflow leaf.
pub const MAX_TREE_DEPTH: usize = 32;
/// Particles created for each external spawn event.
pub const PARTICLES_PER_SPAWN_EVENT: usize = 2;
pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Minimum separation used in the attraction law.
pub const SOFTENING_DISTANCE: f64 = 2.0;
/// Velocity factor applied to an axis on a boundary bounce.
pub const BOUNCE_DAMPING: f64 = -0.1;
/// Radius multiplier in the boundary test `|2x - w| > w - 1.99r`.
pub const BOUNDARY_RADIUS_FACTOR: f64 = 1.99;

/// Random spawn velocities are drawn from `[-SPAWN_VELOCITY_RANGE, SPAWN_VELOCITY_RANGE)` per axis.
pub const SPAWN_VELOCITY_RANGE: f64 = 5.0;
pub const MIN_SPAWN_RADIUS: f64 = 0.2;
pub const MAX_SPAWN_RADIUS: f64 = 10.0;

/// Speed above which render intensity saturates.
pub const INTENSITY_SPEED_CEILING: f64 = 20.0;
pub const INTENSITY_DIVISOR: f64 = 5.0;

pub const DEFAULT_SIMULATION_CONFIG: SimulationConfig = SimulationConfig {
    gravitational_constant: GRAVITATIONAL_CONSTANT,
    max_velocity: MAX_VELOCITY,
    node_capacity: NODE_CAPACITY,
    detection_range: DETECTION_RANGE,
    population_cap: POPULATION_CAP,
    width: DEFAULT_WIDTH,
    height: DEFAULT_HEIGHT,
    max_tree_depth: MAX_TREE_DEPTH,
    particles_per_spawn_event: PARTICLES_PER_SPAWN_EVENT,
    seed: None,
    integration_mode: IntegrationMode::Sequential,
};
