// src/utils/simulation_config.rs
use crate::utils::{
    DEFAULT_SIMULATION_CONFIG,
    errors::SimulationError
};

/// How forces are gathered during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationMode {
    /// Particles are visited in population order and integrated immediately,
    /// so later particles see the updated positions of earlier ones.
    #[default]
    Sequential,
    /// Every acceleration is computed in parallel from the state at the start of
    /// the force pass, then all particles are integrated.
    Snapshot,
}

/// Tunable parameters of a simulation. Fixed once the simulation is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub gravitational_constant: f64,
    pub max_velocity: f64,
    pub node_capacity: usize,
    pub detection_range: f64,
    pub population_cap: usize,
    pub width: f64,
    pub height: f64,
    pub max_tree_depth: usize,
    pub particles_per_spawn_event: usize,
    /// Seed for the spawn generator. `None` seeds from the operating system.
    pub seed: Option<u64>,
    pub integration_mode: IntegrationMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    /// Builds a configuration, taking the default for every `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_swarm::utils::SimulationConfig;
    ///
    /// let config = SimulationConfig::new(None, None, None, None, Some(50), Some(320.0), Some(240.0));
    /// assert_eq!(config.population_cap, 50);
    /// assert_eq!(config.node_capacity, 4);
    /// assert_eq!(config.width, 320.0);
    /// ```
    pub fn new(
        gravitational_constant: Option<f64>,
        max_velocity: Option<f64>,
        node_capacity: Option<usize>,
        detection_range: Option<f64>,
        population_cap: Option<usize>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONFIG;
        Self {
            gravitational_constant: gravitational_constant.unwrap_or(default.gravitational_constant),
            max_velocity: max_velocity.unwrap_or(default.max_velocity),
            node_capacity: node_capacity.unwrap_or(default.node_capacity),
            detection_range: detection_range.unwrap_or(default.detection_range),
            population_cap: population_cap.unwrap_or(default.population_cap),
            width: width.unwrap_or(default.width),
            height: height.unwrap_or(default.height),
            ..default
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_integration_mode(mut self, mode: IntegrationMode) -> Self {
        self.integration_mode = mode;
        self
    }

    pub fn with_max_tree_depth(mut self, depth: usize) -> Self {
        self.max_tree_depth = depth;
        self
    }

    pub fn with_particles_per_spawn_event(mut self, count: usize) -> Self {
        self.particles_per_spawn_event = count;
        self
    }

    /// Checks every field, returning the first problem found.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_particle_swarm::utils::{SimulationConfig, SimulationError};
    ///
    /// assert!(SimulationConfig::default().validate().is_ok());
    ///
    /// let flat = SimulationConfig::new(None, None, None, None, None, Some(0.0), None);
    /// assert_eq!(flat.validate(), Err(SimulationError::InvalidBounds));
    /// ```
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0 {
            return Err(SimulationError::InvalidBounds);
        }
        if !self.max_velocity.is_finite() || self.max_velocity <= 0.0 {
            return Err(SimulationError::InvalidVelocity);
        }
        if self.node_capacity == 0 || self.population_cap == 0 {
            return Err(SimulationError::InvalidCapacity);
        }
        if !self.gravitational_constant.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "gravitational constant must be finite, got {}",
                self.gravitational_constant
            )));
        }
        if !self.detection_range.is_finite() || self.detection_range < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "detection range must be a non-negative finite number, got {}",
                self.detection_range
            )));
        }
        Ok(())
    }

    /// Center of the simulation bounds.
    pub fn center(&self) -> (f64, f64) {
        (0.5 * self.width, 0.5 * self.height)
    }
}
