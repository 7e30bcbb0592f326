use serde::{Deserialize, Serialize};

/// Wall-clock time one worker spent on its band.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandTiming {
    pub start_row: usize,
    pub end_row: usize,
    pub elapsed_ms: f64,
}

/// Timing trace for a single dispatch: spawn, compute and join.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReport {
    pub width: usize,
    pub height: usize,
    pub workers: usize,
    pub elapsed_ms: f64,
    pub bands: Vec<BandTiming>,
}

impl DispatchReport {
    /// Slowest band; bounds how much more parallelism can help.
    pub fn slowest_band_ms(&self) -> f64 {
        self.bands
            .iter()
            .map(|b| b.elapsed_ms)
            .fold(0.0, f64::max)
    }
}
