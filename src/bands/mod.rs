//! Row-band partitioning and the parallel dispatcher built on it.
//!
//! The image height is cut into `N` contiguous bands, one per worker. All but
//! the last band hold `height / N` rows; the last band absorbs the remainder.
//! Bands never overlap and their union is exactly `[0, height)`, so every
//! output row has a single writer.

pub mod dispatch;

use crate::error::FilterError;
use std::ops::Range;

pub use dispatch::{filter, filter_with_report, WorkItem};

/// Upper bound on the number of workers a single pass may use.
pub const MAX_WORKERS: usize = 8;

/// Worker count validated against `1..=MAX_WORKERS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerCount(usize);

impl WorkerCount {
    pub fn new(requested: usize) -> Result<Self, FilterError> {
        if (1..=MAX_WORKERS).contains(&requested) {
            Ok(Self(requested))
        } else {
            Err(FilterError::InvalidWorkerCount {
                requested,
                max: MAX_WORKERS,
            })
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for WorkerCount {
    type Error = FilterError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Half-open row range `[start_row, end_row)` owned by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub start_row: usize,
    pub end_row: usize,
}

impl Band {
    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end_row - self.start_row
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }
}

/// Split `[0, height)` into `workers` bands.
///
/// When `height < workers` the leading bands are empty and the last band
/// holds every row; each band still gets its own worker.
pub fn partition_rows(height: usize, workers: WorkerCount) -> Vec<Band> {
    let n = workers.get();
    let band_size = height / n;
    (0..n)
        .map(|i| {
            let start_row = i * band_size;
            let end_row = if i == n - 1 {
                height
            } else {
                start_row + band_size
            };
            Band { start_row, end_row }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands(height: usize, workers: usize) -> Vec<(usize, usize)> {
        partition_rows(height, WorkerCount::new(workers).unwrap())
            .into_iter()
            .map(|b| (b.start_row, b.end_row))
            .collect()
    }

    #[test]
    fn last_band_absorbs_remainder() {
        assert_eq!(bands(10, 3), vec![(0, 3), (3, 6), (6, 10)]);
        assert_eq!(bands(7, 4), vec![(0, 1), (1, 2), (2, 3), (3, 7)]);
    }

    #[test]
    fn even_split_gives_equal_bands() {
        assert_eq!(bands(8, 4), vec![(0, 2), (2, 4), (4, 6), (6, 8)]);
        assert_eq!(bands(5, 1), vec![(0, 5)]);
    }

    #[test]
    fn short_image_leaves_leading_bands_empty() {
        let parts = partition_rows(2, WorkerCount::new(5).unwrap());
        assert_eq!(parts.len(), 5);
        assert!(parts[..4].iter().all(Band::is_empty));
        assert_eq!(parts[4], Band { start_row: 0, end_row: 2 });
        assert_eq!(parts[4].len(), 2);
    }

    #[test]
    fn zero_height_yields_empty_bands() {
        assert_eq!(bands(0, 3), vec![(0, 0), (0, 0), (0, 0)]);
    }

    #[test]
    fn worker_count_bounds() {
        assert!(WorkerCount::new(1).is_ok());
        assert!(WorkerCount::new(MAX_WORKERS).is_ok());
        assert_eq!(
            WorkerCount::new(0),
            Err(FilterError::InvalidWorkerCount {
                requested: 0,
                max: MAX_WORKERS
            })
        );
        assert_eq!(
            WorkerCount::try_from(MAX_WORKERS + 1),
            Err(FilterError::InvalidWorkerCount {
                requested: MAX_WORKERS + 1,
                max: MAX_WORKERS
            })
        );
    }
}
