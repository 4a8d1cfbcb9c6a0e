use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::particles::Particle;

/// What a call to [`Population::churn`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Churn {
    pub evicted: Option<Particle>,
    /// Serial of the ambient particle admitted, if any.
    pub admitted: Option<u64>,
}

/// Particles in creation order, oldest at the front.
///
/// The cap is soft: [`Population::push`] always admits, and [`Population::churn`]
/// brings the size back down by one eviction per call.
///
/// # Examples
///
/// ```
/// use rs_particle_swarm::particles::{Particle, Population};
///
/// let mut population = Population::new(2);
/// for x in [10.0, 20.0, 30.0] {
///     population.push(Particle::new((x, 0.0), (0.0, 0.0), 1.0).unwrap());
/// }
/// assert_eq!(population.len(), 3);
///
/// let oldest = population.evict_oldest().unwrap();
/// assert_eq!(oldest.position.0, 10.0);
/// assert_eq!(oldest.serial(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    particles: VecDeque<Particle>,
    cap: usize,
    next_serial: u64,
}

impl Population {
    pub fn new(cap: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(cap),
            cap,
            next_serial: 0,
        }
    }

    /// Appends `particle` as the newest member and returns its serial.
    pub fn push(&mut self, mut particle: Particle) -> u64 {
        let serial = self.next_serial;
        self.next_serial += 1;
        particle.set_serial(serial);
        self.particles.push_back(particle);
        serial
    }

    pub fn evict_oldest(&mut self) -> Option<Particle> {
        self.particles.pop_front()
    }

    /// One round of cap enforcement: evict the oldest particle if the population
    /// is at or above the cap, then admit one particle from `ambient` if there is
    /// room. Below the cap this only grows; at the cap it swaps one out for one in.
    pub fn churn<F: FnOnce() -> Option<Particle>>(&mut self, ambient: F) -> Churn {
        let evicted = if self.is_full() { self.evict_oldest() } else { None };
        let admitted = if self.is_full() {
            None
        } else {
            ambient().map(|particle| self.push(particle))
        };
        Churn { evicted, admitted }
    }

    pub fn is_full(&self) -> bool {
        self.particles.len() >= self.cap
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of particles ever admitted.
    pub fn total_admitted(&self) -> u64 {
        self.next_serial
    }

    pub fn oldest(&self) -> Option<&Particle> {
        self.particles.front()
    }

    pub fn newest(&self) -> Option<&Particle> {
        self.particles.back()
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Contiguous view in creation order, for building an index over the population.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        self.particles.make_contiguous()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Particle;
    type IntoIter = vec_deque::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
