mod frame;
mod simulation;

pub use frame::*;
pub use simulation::*;
