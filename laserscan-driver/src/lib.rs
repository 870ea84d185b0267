mod buffer;
mod constants;
mod error;
mod reading;

use crate::buffer::ReadingBuffer;
use crate::constants::{
    DEFAULT_RESOLUTION_DEGREES, FIELD_OF_VIEW_DEGREES, MAX_RESOLUTION_DEGREES,
    MIN_RESOLUTION_DEGREES,
};
use crate::reading::SweepReading;

pub use crate::error::LaserScanError;
pub use laserscan_data::{Reading, ScanPoint};

/// Bounded history of laser scanner readings.
///
/// Raw sweeps handed in by the sensor are stored as fixed-length
/// readings in a ten-deep FIFO buffer. Once the buffer is full, every
/// new sweep silently drops the oldest one. The most recent reading
/// answers distance queries for arbitrary angles.
///
/// The history is a single-threaded bookkeeping structure. Each reading
/// has exactly one owner at all times, either its buffer slot or, after
/// extraction, the caller.
#[derive(Clone, Debug)]
pub struct ScanHistory {
    resolution: f64,
    buffer: ReadingBuffer,
}

impl ScanHistory {
    /// Creates a history for a scanner that steps `resolution` degrees
    /// between consecutive samples over a 180 degree sweep.
    ///
    /// The resolution must lie in the closed interval [0.1, 1.0].
    pub fn new(resolution: f64) -> Result<ScanHistory, LaserScanError> {
        if !(MIN_RESOLUTION_DEGREES..=MAX_RESOLUTION_DEGREES).contains(&resolution) {
            return Err(LaserScanError::InvalidResolution(resolution));
        }
        Ok(ScanHistory {
            resolution,
            buffer: ReadingBuffer::new(),
        })
    }

    /// Angular step between consecutive samples, in degrees.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Number of samples in every reading held by this history.
    pub fn n_samples(&self) -> usize {
        (FIELD_OF_VIEW_DEGREES / self.resolution) as usize
    }

    /// Number of readings currently buffered.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stores one sweep of raw sensor samples as the newest reading.
    ///
    /// The input may have any length: missing samples are zero-filled
    /// and surplus samples are ignored. When the history is already
    /// full the oldest reading is dropped to make room.
    pub fn new_scan(&mut self, raw: &[f64]) {
        let reading = Reading::from_raw(raw, self.n_samples());
        self.buffer.admit(reading);
    }

    /// Removes and returns the oldest buffered reading. Successive
    /// calls drain the history in admission order.
    pub fn get_scan(&mut self) -> Result<Reading, LaserScanError> {
        self.buffer.pop_oldest().ok_or(LaserScanError::EmptyBuffer)
    }

    /// Borrows the most recently stored reading.
    pub fn last_reading(&self) -> Result<&Reading, LaserScanError> {
        self.buffer.newest().ok_or(LaserScanError::EmptyBuffer)
    }

    /// Readings in admission order, oldest first.
    pub fn readings(&self) -> impl Iterator<Item = &Reading> + '_ {
        self.buffer.iter()
    }

    /// Range measured at `angle` degrees in the newest reading.
    ///
    /// Angles outside the sweep clamp to the first or last sample;
    /// otherwise the angularly closest sample wins. Returns `-1.0`
    /// instead of failing when no reading has been stored yet.
    pub fn distance_at(&self, angle: f64) -> f64 {
        match self.buffer.newest() {
            Some(reading) => reading.nearest_distance(angle, self.resolution),
            None => {
                log::warn!("distance query on an empty scan history");
                -1.
            }
        }
    }

    /// Polar projection of the newest reading as `(distance, angle)`
    /// pairs, the angle advancing by the resolution per sample.
    pub fn last_points(&self) -> Result<Vec<ScanPoint>, LaserScanError> {
        Ok(self.last_reading()?.to_points(self.resolution))
    }

    /// Drops every buffered reading. A no-op on an empty history.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Replaces this history's contents with deep copies of `source`'s
    /// readings, preserving admission order. `source` is untouched.
    ///
    /// Fails with `ResolutionMismatch`, leaving both sides unchanged,
    /// when the two histories disagree on resolution: their readings
    /// would not share a length.
    pub fn copy_from(&mut self, source: &ScanHistory) -> Result<(), LaserScanError> {
        if self.resolution != source.resolution {
            return Err(LaserScanError::ResolutionMismatch(
                self.resolution,
                source.resolution,
            ));
        }
        self.buffer = source.buffer.clone();
        Ok(())
    }

    /// Moves `source`'s readings into this history wholesale, leaving
    /// `source` empty and immediately reusable.
    ///
    /// Fails with `ResolutionMismatch`, leaving both sides unchanged,
    /// when the two histories disagree on resolution.
    pub fn take_from(&mut self, source: &mut ScanHistory) -> Result<(), LaserScanError> {
        if self.resolution != source.resolution {
            return Err(LaserScanError::ResolutionMismatch(
                self.resolution,
                source.resolution,
            ));
        }
        self.buffer = source.buffer.take();
        Ok(())
    }
}

impl Default for ScanHistory {
    /// An empty history at the coarsest supported resolution, one
    /// degree per sample.
    fn default() -> ScanHistory {
        ScanHistory {
            resolution: DEFAULT_RESOLUTION_DEGREES,
            buffer: ReadingBuffer::new(),
        }
    }
}
