//! Projected point spacing measurement.
//!
//! Projects evenly spaced world points `(0, y)` through a 2D camera at a given
//! zoom and measures the spacing of the projected points. With exact
//! arithmetic every gap would equal `step * zoom`; the report shows how far
//! single-precision projection drifts from that, next to the spacing of the
//! unprojected samples as a baseline.
//!
//! ```sh
//! cameratoy measure --zoom 1 --start 0 --end 100 --step 1 --output report.json
//! ```

use std::fs;
use std::path::Path;

use log::info;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::resources::camerastate::{CameraState, ProjectionPlanes};
use crate::resources::screensize::ScreenSize;
use crate::systems::camerasync::camera_from_state;

/// Screen used when none is given; large enough that points stay on screen.
pub const DEFAULT_MEASURE_SCREEN: ScreenSize = ScreenSize { w: 10000, h: 10000 };

/// Upper bound on the number of samples one run may take.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Inputs of one measurement.
///
/// Sampling happens in double precision; only the projection itself runs at
/// the camera's single precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasureParams {
    pub zoom: f32,
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            start: 0.0,
            end: 100.0,
            step: 1.0,
        }
    }
}

/// Summary of a list of gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceStats {
    pub count: usize,
    /// Most frequent gap; ties resolve to the smallest value.
    pub mode: f64,
    pub mode_count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionReport {
    pub params: MeasureParams,
    pub projected: DistanceStats,
    pub baseline: DistanceStats,
}

/// Sample `start, start + step, ...` strictly below `end`.
pub fn sample_points(start: f64, end: f64, step: f64) -> Result<Vec<f64>, String> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) {
        return Err(format!(
            "start, end and step must be finite, got {}..{} step {}",
            start, end, step
        ));
    }
    if step <= 0.0 {
        return Err(format!("step must be positive, got {}", step));
    }
    if end <= start {
        return Err(format!("end ({}) must be greater than start ({})", end, start));
    }
    let count = ((end - start) / step).ceil();
    if !(count <= MAX_SAMPLES as f64) {
        return Err(format!(
            "{}..{} step {} needs {} samples, more than the limit of {}",
            start, end, step, count, MAX_SAMPLES
        ));
    }
    let samples: Vec<f64> = (0..count as usize)
        .map(|i| start + i as f64 * step)
        .take_while(|y| *y < end)
        .collect();
    if samples.len() < 2 {
        return Err(format!(
            "need at least two samples, got {} for {}..{} step {}",
            samples.len(),
            start,
            end,
            step
        ));
    }
    Ok(samples)
}

/// Camera state whose projection is scaled to `zoom`.
fn measuring_camera(zoom: f32, screen: ScreenSize) -> Result<CameraState, String> {
    if !(zoom.is_finite() && zoom > 0.0) {
        return Err(format!("zoom must be positive and finite, got {}", zoom));
    }
    let w = screen.w as f32;
    let h = screen.h as f32;
    let base = ProjectionPlanes::centered(w, h);
    Ok(CameraState::for_screen(w, h).with_projection(ProjectionPlanes {
        left: base.left / zoom,
        right: base.right / zoom,
        top: base.top / zoom,
        bottom: base.bottom / zoom,
        ..base
    }))
}

/// Project `(0, y)` for every sample and return the screen y (bottom-up).
pub fn project_samples(
    samples: &[f64],
    zoom: f32,
    screen: ScreenSize,
) -> Result<Vec<f32>, String> {
    let synced = camera_from_state(&measuring_camera(zoom, screen)?, screen);
    Ok(samples
        .iter()
        .map(|&y| {
            synced
                .world_to_screen(Vector2 { x: 0.0, y: y as f32 }, screen)
                .y
        })
        .collect())
}

/// `values[i] - values[i - 1]` for every consecutive pair.
pub fn consecutive_distances(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Like [`consecutive_distances`], subtracting at single precision.
fn projected_distances(values: &[f32]) -> Vec<f64> {
    values.windows(2).map(|w| (w[1] - w[0]) as f64).collect()
}

pub fn distance_stats(distances: &[f64]) -> Result<DistanceStats, String> {
    if distances.is_empty() {
        return Err("no distances to summarise".to_string());
    }

    let mut counts: FxHashMap<u64, usize> = FxHashMap::default();
    for d in distances {
        *counts.entry(d.to_bits()).or_insert(0) += 1;
    }
    let (mode, mode_count) = counts
        .iter()
        .map(|(bits, count)| (f64::from_bits(*bits), *count))
        .fold((f64::INFINITY, 0), |best, (value, count)| {
            if count > best.1 || (count == best.1 && value < best.0) {
                (value, count)
            } else {
                best
            }
        });

    let sum: f64 = distances.iter().sum();
    let min = distances.iter().copied().fold(f64::INFINITY, f64::min);
    let max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(DistanceStats {
        count: distances.len(),
        mode,
        mode_count,
        mean: sum / distances.len() as f64,
        min,
        max,
    })
}

/// Measure projected spacing on `screen`.
pub fn run_measurement(params: MeasureParams, screen: ScreenSize) -> Result<ProjectionReport, String> {
    let samples = sample_points(params.start, params.end, params.step)?;
    let projected = project_samples(&samples, params.zoom, screen)?;

    let report = ProjectionReport {
        params,
        projected: distance_stats(&projected_distances(&projected))?,
        baseline: distance_stats(&consecutive_distances(&samples))?,
    };
    info!(
        "Projected {} distances at zoom {}: mode {} ({}x), avg {}, min {}",
        report.projected.count,
        params.zoom,
        report.projected.mode,
        report.projected.mode_count,
        report.projected.mean,
        report.projected.min
    );
    Ok(report)
}

/// Write `report` as pretty JSON to `path`.
pub fn write_report(path: &Path, report: &ProjectionReport) -> Result<(), String> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
