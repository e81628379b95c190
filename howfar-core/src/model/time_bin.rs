use serde::{Deserialize, Serialize};

use crate::pipeline::IsochroneError;

/// a half-open travel time interval `[min_time, max_time)` in seconds.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TimeBin {
    pub min_time: f64,
    pub max_time: f64,
}

impl TimeBin {
    /// label matching the "lower-upper" convention of isobands tools
    pub fn key(&self) -> String {
        format!("{}-{}", self.min_time, self.max_time)
    }

    pub fn contains(&self, time: f64) -> bool {
        self.min_time <= time && time < self.max_time
    }

    /// builds `bands` consecutive bins over `[0, budget]` using the
    /// breakpoints `floor(k * budget / bands)` for `k` in `0..=bands`.
    ///
    /// # Arguments
    ///
    /// * `budget_seconds` - travel time budget, the upper bound of the last bin
    /// * `bands` - number of bins to create
    ///
    /// # Returns
    ///
    /// * the bins ordered from shortest to longest travel time, or an error if
    ///   the breakpoints are not strictly increasing
    pub fn create_bins(budget_seconds: f64, bands: u32) -> Result<Vec<TimeBin>, IsochroneError> {
        if bands == 0 {
            return Err(IsochroneError::InvalidConfiguration(String::from(
                "band count must be at least 1",
            )));
        }
        let breaks = (0..=bands)
            .map(|k| (k as f64 * budget_seconds / bands as f64).floor())
            .collect::<Vec<_>>();
        let bins = breaks
            .windows(2)
            .map(|w| TimeBin {
                min_time: w[0],
                max_time: w[1],
            })
            .collect::<Vec<_>>();
        match bins.iter().find(|b| !(b.min_time < b.max_time)) {
            Some(b) => Err(IsochroneError::InvalidConfiguration(format!(
                "cannot split {budget_seconds} seconds into {bands} bands, found empty bin {}",
                b.key()
            ))),
            None => Ok(bins),
        }
    }
}
