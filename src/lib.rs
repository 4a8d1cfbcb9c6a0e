//! A 2D swarm of mutually attracting particles whose interactions are limited
//! to a neighborhood found through a quadtree rebuilt every tick.
//!
//! - [`spatial`]: the quadtree and the circular range query used against it.
//! - [`particles`]: particle state, the attraction law, integration with
//!   damped wall bounces, and the FIFO population.
//! - [`simulation`]: the per-tick driver and the data handed to a renderer.
//! - [`utils`]: configuration, constants and errors.
pub mod utils;
pub mod spatial;
pub mod particles;
pub mod simulation;
