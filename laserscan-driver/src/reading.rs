use laserscan_data::{Reading, ScanPoint};

pub(crate) trait SweepReading {
    fn from_raw(raw: &[f64], n_samples: usize) -> Reading;
    fn to_points(&self, resolution: f64) -> Vec<ScanPoint>;
    fn nearest_distance(&self, angle: f64, resolution: f64) -> f64;
}

impl SweepReading for Reading {
    /// Builds a reading of exactly `n_samples` entries from raw sensor
    /// output of any length. Missing trailing samples are zero-filled
    /// and surplus samples are ignored; construction never fails.
    fn from_raw(raw: &[f64], n_samples: usize) -> Reading {
        let ranges = (0..n_samples)
            .map(|i| raw.get(i).copied().unwrap_or(0.))
            .collect();
        Reading { ranges }
    }

    /// Projects the reading onto `(distance, angle)` pairs, the angle
    /// advancing by `resolution` degrees per sample starting at zero.
    fn to_points(&self, resolution: f64) -> Vec<ScanPoint> {
        self.ranges
            .iter()
            .enumerate()
            .map(|(i, range)| ScanPoint {
                distance: *range,
                angle_degrees: (i as f64) * resolution,
            })
            .collect()
    }

    /// Returns the sample whose nominal angle `i * resolution` lies the
    /// closest to `angle`. Angles outside the sweep clamp to the first
    /// or last sample. A query halfway between two bins resolves to the
    /// higher one.
    fn nearest_distance(&self, angle: f64, resolution: f64) -> f64 {
        let n = self.ranges.len();
        if angle < 0. {
            return self.ranges[0];
        }
        if angle >= ((n - 1) as f64) * resolution {
            return self.ranges[n - 1];
        }

        let mut i = 0;
        while ((i as f64) * resolution) < angle {
            i += 1;
        }
        let found = (i as f64) * resolution;
        if found == angle {
            return self.ranges[i];
        }

        // The query falls strictly between bins i - 1 and i.
        if (found - angle) <= (angle - (found - resolution)) {
            self.ranges[i]
        } else {
            self.ranges[i - 1]
        }
    }
}
