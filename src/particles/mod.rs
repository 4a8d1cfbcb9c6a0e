mod particle;
mod population;

pub use particle::*;
pub use population::*;

#[cfg(test)]
mod particle_tests;
