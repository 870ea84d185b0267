#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold one full sweep of laser range data.
///
/// The driver keeps every reading of one history at the same fixed
/// length, derived from the configured angular resolution.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Distance to an object, one entry per angular step.
    pub ranges: Vec<f64>,
}
