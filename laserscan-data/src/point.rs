#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of the polar projection of a reading.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanPoint {
    /// Measured distance at this angular step.
    pub distance: f64,
    /// Angle of the sample, in degrees from the start of the sweep.
    pub angle_degrees: f64,
}
