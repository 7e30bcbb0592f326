use log::info;
use serde::Serialize;
use sobel_bands::config::benchmark::load_config;
use sobel_bands::diagnostics::DispatchReport;
use sobel_bands::filter_with_report;
use sobel_bands::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use sobel_bands::image::GrayImageU8;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let view = gray.as_view();

    let mut reference: Option<GrayImageU8> = None;
    let mut runs = Vec::with_capacity(config.workers.len());
    for &workers in &config.workers {
        let mut reports = Vec::with_capacity(config.repetitions);
        for _ in 0..config.repetitions {
            let (edges, report) = filter_with_report(&view, workers).map_err(|e| e.to_string())?;
            if let Some(expected) = &reference {
                if *expected != edges {
                    return Err(format!(
                        "Output with {workers} workers differs from the reference run"
                    ));
                }
            } else {
                reference = Some(edges);
            }
            reports.push(report);
        }
        let summary = WorkerRun::from_reports(workers, reports);
        info!(
            "workers={} min_ms={:.3} mean_ms={:.3}",
            summary.workers, summary.min_ms, summary.mean_ms
        );
        runs.push(summary);
    }

    if let (Some(path), Some(edges)) = (&config.output.edges_image, &reference) {
        save_grayscale_u8(edges, path)?;
        println!("Saved edge image to {}", path.display());
    }

    let report = BenchmarkReport {
        width: gray.width(),
        height: gray.height(),
        repetitions: config.repetitions,
        runs,
    };
    write_json_file(&config.output.report_json, &report)?;
    println!(
        "Saved timings for {} worker counts to {}",
        report.runs.len(),
        config.output.report_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: band_benchmark <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BenchmarkReport {
    width: usize,
    height: usize,
    repetitions: usize,
    runs: Vec<WorkerRun>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkerRun {
    workers: usize,
    min_ms: f64,
    mean_ms: f64,
    slowest_band_ms: f64,
    passes: Vec<DispatchReport>,
}

impl WorkerRun {
    fn from_reports(workers: usize, passes: Vec<DispatchReport>) -> Self {
        let times: Vec<f64> = passes.iter().map(|r| r.elapsed_ms).collect();
        let min_ms = times.iter().copied().fold(f64::INFINITY, f64::min);
        let mean_ms = times.iter().sum::<f64>() / times.len().max(1) as f64;
        let slowest_band_ms = passes
            .iter()
            .map(DispatchReport::slowest_band_ms)
            .fold(0.0, f64::max);
        Self {
            workers,
            min_ms,
            mean_ms,
            slowest_band_ms,
            passes,
        }
    }
}
