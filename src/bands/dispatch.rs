//! One scoped thread per band, joined before the output is returned.
//!
//! The output buffer is allocated once and carved into per-band row slices
//! with `split_at_mut`, so each worker holds the only mutable reference to its
//! rows. The input view is shared read-only. Workers never communicate; the
//! caller sees the buffer only after every worker has been joined.
//!
//! A pass cannot be cancelled and has no timeout: it always runs to
//! completion.
use std::time::Instant;

use log::debug;

use super::{partition_rows, Band, WorkerCount};
use crate::diagnostics::{BandTiming, DispatchReport};
use crate::edges::evaluate;
use crate::error::FilterError;
use crate::image::u8::pixel_count;
use crate::image::{GrayImageU8, ImageU8};

/// What a single worker is handed: the shared input, its band and the output
/// rows of that band (`band.len() * width` bytes, row-major).
#[derive(Debug)]
pub struct WorkItem<'img, 'out> {
    pub input: &'img ImageU8<'img>,
    pub band: Band,
    pub output: &'out mut [u8],
}

impl WorkItem<'_, '_> {
    /// Evaluate every pixel of the band into its output rows.
    pub fn run(self) -> BandTiming {
        let WorkItem {
            input,
            band,
            output,
        } = self;
        let t0 = Instant::now();
        if input.w > 0 {
            for (y, out_row) in band.rows().zip(output.chunks_exact_mut(input.w)) {
                for (x, px) in out_row.iter_mut().enumerate() {
                    *px = evaluate(input, x, y);
                }
            }
        }
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "band rows={}..{} elapsed_ms={:.3}",
            band.start_row, band.end_row, elapsed_ms
        );
        BandTiming {
            start_row: band.start_row,
            end_row: band.end_row,
            elapsed_ms,
        }
    }
}

/// Sobel magnitude of `input` computed by `num_workers` parallel workers.
///
/// The result is byte-identical for every valid worker count.
pub fn filter(input: &ImageU8<'_>, num_workers: usize) -> Result<GrayImageU8, FilterError> {
    filter_with_report(input, num_workers).map(|(output, _)| output)
}

/// Same as [`filter`], also returning dispatch and per-band timings.
pub fn filter_with_report(
    input: &ImageU8<'_>,
    num_workers: usize,
) -> Result<(GrayImageU8, DispatchReport), FilterError> {
    let workers = WorkerCount::new(num_workers)?;
    input.check_shape()?;

    let (w, h) = (input.w, input.h);
    let len = pixel_count(w, h, input.data.len())?;
    let mut output = Vec::new();
    output
        .try_reserve_exact(len)
        .map_err(|_| FilterError::OutputAllocation { bytes: len })?;
    output.resize(len, 0u8);

    let bands = partition_rows(h, workers);
    let t0 = Instant::now();
    let band_timings = run_bands(input, &bands, &mut output)?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "sobel dispatch: {}x{} workers={} elapsed_ms={:.3}",
        w,
        h,
        workers.get(),
        elapsed_ms
    );

    let report = DispatchReport {
        width: w,
        height: h,
        workers: workers.get(),
        elapsed_ms,
        bands: band_timings,
    };
    let output = GrayImageU8::from_raw(w, h, output)?;
    Ok((output, report))
}

fn run_bands(
    input: &ImageU8<'_>,
    bands: &[Band],
    output: &mut [u8],
) -> Result<Vec<BandTiming>, FilterError> {
    let w = input.w;
    std::thread::scope(|s| {
        let mut handles = Vec::with_capacity(bands.len());
        let mut remaining = output;
        for &band in bands {
            let (rows, rest) = std::mem::take(&mut remaining).split_at_mut(band.len() * w);
            remaining = rest;
            let item = WorkItem {
                input,
                band,
                output: rows,
            };
            handles.push((band, s.spawn(move || item.run())));
        }
        debug_assert!(remaining.is_empty(), "bands must cover every row");

        handles
            .into_iter()
            .map(|(band, handle)| {
                handle.join().map_err(|_| FilterError::WorkerPanicked {
                    start_row: band.start_row,
                    end_row: band.end_row,
                })
            })
            .collect()
    })
}
