mod constants;
mod simulation_config;
pub mod errors;

pub use constants::*;
pub use simulation_config::*;
pub use errors::SimulationError;
