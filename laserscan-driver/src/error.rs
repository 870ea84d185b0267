use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LaserScanError {
    InvalidResolution(f64),
    EmptyBuffer,
    ResolutionMismatch(f64, f64),
}

impl fmt::Display for LaserScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LaserScanError::InvalidResolution(resolution) => write!(
                f,
                "Angular resolution must lie in [0.1, 1.0] degrees. Requested = {}.",
                resolution
            ),
            LaserScanError::EmptyBuffer => write!(f, "The scan history holds no reading."),
            LaserScanError::ResolutionMismatch(destination, source) => write!(
                f,
                "Cannot assign between scan histories of resolution {} and {} degrees.",
                destination, source
            ),
        }
    }
}

impl Error for LaserScanError {}
