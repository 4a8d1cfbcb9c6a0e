//! Per-tick orchestration of the swarm.
//!
//! A tick applies spawn events, enforces the population cap, rebuilds the
//! quadtree over the survivors, gathers each particle's neighbors through it,
//! accumulates their attraction and integrates. The simulation owns all state;
//! the tree only lives inside a tick and refers to particles by index.
//!
//! # Example
//!
//! ```
//! use rs_particle_swarm::simulation::{Simulation, SpawnEvent};
//! use rs_particle_swarm::utils::SimulationConfig;
//!
//! let config = SimulationConfig::default().with_seed(3);
//! let mut sim = Simulation::new(config).expect("Failed to build simulation");
//!
//! let frame = sim.step(&[SpawnEvent::new(120.0, 80.0)]);
//! // Two particles from the event plus one ambient particle.
//! assert_eq!(frame.len(), 3);
//!
//! sim.run(10);
//! assert_eq!(sim.population().len(), 13);
//! ```
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::particles::{Particle, Population};
use crate::simulation::{RenderSegment, SpawnEvent, TickStats};
use crate::spatial::{QuadTree, RangeQuery};
use crate::utils::{IntegrationMode, SimulationConfig, SimulationError};

pub struct Simulation {
    config: SimulationConfig,
    population: Population,
    rng: StdRng,
    tick: u64,
    last_stats: TickStats,
}

impl Simulation {
    /// Creates an empty simulation.
    ///
    /// # Errors
    ///
    /// Returns the first problem reported by [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            population: Population::new(config.population_cap),
            config,
            rng,
            tick: 0,
            last_stats: TickStats::default(),
        })
    }

    /// Creates a simulation seeded with the given particles, oldest first.
    pub fn with_particles<I>(config: SimulationConfig, particles: I) -> Result<Self, SimulationError>
    where
        I: IntoIterator<Item = Particle>,
    {
        let mut sim = Self::new(config)?;
        for particle in particles {
            sim.population.push(particle);
        }
        Ok(sim)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn last_stats(&self) -> &TickStats {
        &self.last_stats
    }

    /// Adds the particles for one spawn event and returns how many were created.
    ///
    /// Each gets a random velocity and radius from the default spawn ranges.
    pub fn spawn(&mut self, event: SpawnEvent) -> Result<usize, SimulationError> {
        for _ in 0..self.config.particles_per_spawn_event {
            let velocity = Particle::random_velocity(&mut self.rng);
            let particle = Particle::spawn((event.x, event.y), Some(velocity), None, &mut self.rng)?;
            self.population.push(particle);
        }
        Ok(self.config.particles_per_spawn_event)
    }

    /// A particle at a uniformly random position inside the bounds.
    fn ambient_particle(rng: &mut StdRng, config: &SimulationConfig) -> Option<Particle> {
        let position = (rng.random_range(0.0..config.width), rng.random_range(0.0..config.height));
        Particle::spawn(position, None, None, rng).ok()
    }

    /// Runs one full tick: spawn events, population churn, then [`Simulation::advance`].
    ///
    /// Invalid events (non-finite coordinates) are logged and skipped.
    pub fn step(&mut self, events: &[SpawnEvent]) -> Vec<RenderSegment> {
        let mut spawned = 0;
        for event in events {
            match self.spawn(*event) {
                Ok(count) => spawned += count,
                Err(e) => warn!("Ignoring spawn event at ({}, {}): {}", event.x, event.y, e),
            }
        }

        let config = self.config;
        let rng = &mut self.rng;
        let churn = self.population.churn(|| Self::ambient_particle(rng, &config));
        if churn.admitted.is_some() {
            spawned += 1;
        }

        let frame = self.advance();
        self.last_stats.spawned = spawned;
        self.last_stats.evicted = usize::from(churn.evicted.is_some());
        frame
    }

    /// Runs `ticks` ticks with no spawn events.
    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.step(&[]);
        }
    }

    /// Moves every particle one tick without touching the population.
    ///
    /// Builds the tree, then for each particle queries its neighbors within the
    /// detection range, sums their attraction (skipping itself) and integrates.
    /// Returns one render segment per particle in population order.
    pub fn advance(&mut self) -> Vec<RenderSegment> {
        let config = self.config;
        let particles = self.population.as_mut_slice();
        let tree = QuadTree::build(&config, &*particles);
        let unindexed = particles.len() - tree.len();
        if unindexed > 0 {
            trace!("{} particles left out of the tree this tick", unindexed);
        }

        let interactions = match config.integration_mode {
            IntegrationMode::Sequential => Self::integrate_sequential(&config, &tree, particles),
            IntegrationMode::Snapshot => Self::integrate_snapshot(&config, &tree, particles),
        };

        self.tick += 1;
        self.last_stats = TickStats {
            tick: self.tick,
            population: particles.len(),
            spawned: 0,
            evicted: 0,
            tree_nodes: tree.node_count(),
            tree_depth: tree.depth(),
            unindexed,
            interactions,
        };
        debug!(
            "tick {}: {} particles, {} tree nodes (depth {}, {} overflow inserts), {} interactions",
            self.tick,
            particles.len(),
            tree.node_count(),
            tree.depth(),
            tree.overflow_inserts(),
            interactions
        );

        particles.iter().map(RenderSegment::from).collect()
    }

    /// Visits particles in order, integrating each one right after its forces
    /// are summed. Later particles see earlier particles' new positions.
    fn integrate_sequential(config: &SimulationConfig, tree: &QuadTree, particles: &mut [Particle]) -> usize {
        let g = config.gravitational_constant;
        let mut neighbors = Vec::new();
        let mut interactions = 0;

        for i in 0..particles.len() {
            particles[i].reset_acceleration();
            let range = RangeQuery::around(&particles[i], config.detection_range);
            neighbors.clear();
            tree.query_into(&range, &*particles, &mut neighbors);

            for &j in &neighbors {
                if j != i {
                    let other = particles[j];
                    particles[i].attract_to(&other, g);
                    interactions += 1;
                }
            }
            particles[i].update(config);
        }
        interactions
    }

    /// Sums every particle's acceleration in parallel from the same state, then
    /// integrates them all.
    fn integrate_snapshot(config: &SimulationConfig, tree: &QuadTree, particles: &mut [Particle]) -> usize {
        let g = config.gravitational_constant;
        let snapshot: &[Particle] = particles;

        let pulls: Vec<((f64, f64), usize)> = snapshot
            .par_iter()
            .enumerate()
            .map(|(i, particle)| {
                let range = RangeQuery::around(particle, config.detection_range);
                let mut total = (0.0, 0.0);
                let mut count = 0;
                for j in tree.query(&range, snapshot) {
                    if j != i {
                        let (ax, ay) = particle.acceleration_from(&snapshot[j], g);
                        total.0 += ax;
                        total.1 += ay;
                        count += 1;
                    }
                }
                (total, count)
            })
            .collect();

        let mut interactions = 0;
        for (particle, (acceleration, count)) in particles.iter_mut().zip(pulls) {
            particle.reset_acceleration();
            particle.apply_acceleration(acceleration);
            particle.update(config);
            interactions += count;
        }
        interactions
    }

    /// Segments for the current state without stepping.
    pub fn render_frame(&self) -> Vec<RenderSegment> {
        self.population.iter().map(RenderSegment::from).collect()
    }
}
