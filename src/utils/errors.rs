use std::fmt;
use std::error::Error;

/// Represents errors that can occur while building particles or a simulation.
///
/// Stepping a simulation never fails; these only come out of constructors and
/// configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Indicates a particle radius that is not a positive finite number.
    InvalidRadius,
    /// Indicates simulation bounds whose width or height is not a positive finite number.
    InvalidBounds,
    /// Indicates a zero node capacity or population cap.
    InvalidCapacity,
    /// Indicates a non-finite velocity or a non-positive velocity limit.
    InvalidVelocity,
    /// Indicates a position with a non-finite component.
    InvalidPosition,
    /// A general error for any other out-of-range configuration value.
    InvalidParameter(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidRadius => write!(f, "Invalid radius value"),
            SimulationError::InvalidBounds => write!(f, "Invalid simulation bounds"),
            SimulationError::InvalidCapacity => write!(f, "Invalid capacity value"),
            SimulationError::InvalidVelocity => write!(f, "Invalid velocity value"),
            SimulationError::InvalidPosition => write!(f, "Invalid position value"),
            SimulationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl Error for SimulationError {}
