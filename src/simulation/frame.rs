use crate::particles::Particle;

/// A spawn request from the host, in simulation coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnEvent {
    pub x: f64,
    pub y: f64,
}

impl SpawnEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for SpawnEvent {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// What a host needs to draw one particle for one tick: a stroke from
/// `previous` to `current` whose weight is `radius` and whose colour follows
/// `intensity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSegment {
    pub previous: (f64, f64),
    pub current: (f64, f64),
    pub radius: f64,
    /// `min(speed, 20) / 5`.
    pub intensity: f64,
}

impl From<&Particle> for RenderSegment {
    fn from(particle: &Particle) -> Self {
        Self {
            previous: particle.previous_position,
            current: particle.position,
            radius: particle.radius,
            intensity: particle.intensity(),
        }
    }
}

/// Bookkeeping for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickStats {
    pub tick: u64,
    pub population: usize,
    /// Particles created from spawn events and ambient spawning.
    pub spawned: usize,
    pub evicted: usize,
    pub tree_nodes: usize,
    pub tree_depth: usize,
    /// Particles the index could not place (on an edge or outside the bounds).
    pub unindexed: usize,
    /// Attracting pairs evaluated across the tick.
    pub interactions: usize,
}
