//! Per-path latency statistics with iterative sigma clipping
//!
//! Samples are grouped by (probe, destination). For each group the mean and
//! population standard deviation are computed, samples further than
//! `k * stddev` from the mean are dropped, and the process repeats until no
//! sample is dropped or the iteration limit is reached.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use super::reader::read_record_dir;
use crate::models::PingRecord;

pub const DEFAULT_SIGMA: f64 = 3.0;
pub const DEFAULT_ITERATIONS: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("no samples")]
    Empty,

    #[error("overflow computing {0}")]
    Overflow(&'static str),
}

/// Result of sigma clipping one group of samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatencyInfo {
    pub mean: f64,
    pub std_dev: f64,
    /// Samples before clipping
    pub samples: usize,
    /// Samples that survived clipping
    pub kept: usize,
}

/// Latency summary of one (probe, destination) path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStats {
    pub prb_id: u32,
    pub dst_addr: Ipv4Addr,
    #[serde(flatten)]
    pub latency: LatencyInfo,
}

/// Sigma-clipped mean and population standard deviation
///
/// The returned mean and deviation are those of the last iteration evaluated.
/// A `max_iter` of zero is treated as one.
///
/// # Errors
///
/// - [`StatsError::Empty`] if there are no samples left to evaluate
/// - [`StatsError::Overflow`] if a sum is not finite
pub fn sigma_clip(data: &[f32], k: f64, max_iter: usize) -> Result<LatencyInfo, StatsError> {
    let mut current: Vec<f32> = data.to_vec();
    let mut mean = 0.0;
    let mut std_dev = 0.0;

    for _ in 0..max_iter.max(1) {
        if current.is_empty() {
            return Err(StatsError::Empty);
        }
        let n = current.len() as f64;

        let sum: f64 = current.iter().map(|&v| f64::from(v)).sum();
        if !sum.is_finite() {
            return Err(StatsError::Overflow("sum"));
        }
        mean = sum / n;

        let squares: f64 = current.iter().map(|&v| (f64::from(v) - mean).powi(2)).sum();
        if !squares.is_finite() {
            return Err(StatsError::Overflow("stddev"));
        }
        std_dev = (squares / n).sqrt();

        let threshold = k * std_dev;
        let filtered: Vec<f32> =
            current.iter().copied().filter(|&v| (f64::from(v) - mean).abs() <= threshold).collect();

        if filtered.len() == current.len() {
            break;
        }
        current = filtered;
    }

    Ok(LatencyInfo { mean, std_dev, samples: data.len(), kept: current.len() })
}

/// Gather all RTT samples per (probe id, destination)
pub fn group_samples<'a, I>(records: I) -> BTreeMap<(u32, Ipv4Addr), Vec<f32>>
where
    I: IntoIterator<Item = &'a PingRecord>,
{
    let mut groups: BTreeMap<(u32, Ipv4Addr), Vec<f32>> = BTreeMap::new();
    for record in records {
        groups.entry((record.prb_id, record.dst_ip())).or_default().extend_from_slice(&record.rtt);
    }
    groups
}

/// Clip every group in parallel; groups that cannot be summarised are logged and left out
pub fn path_stats(
    groups: &BTreeMap<(u32, Ipv4Addr), Vec<f32>>,
    k: f64,
    max_iter: usize,
) -> Vec<PathStats> {
    let entries: Vec<_> = groups.iter().collect();

    entries
        .par_iter()
        .filter_map(|((prb_id, dst_addr), samples)| match sigma_clip(samples, k, max_iter) {
            Ok(latency) => Some(PathStats { prb_id: *prb_id, dst_addr: *dst_addr, latency }),
            Err(e) => {
                warn!("Skipping probe {} -> {}: {}", prb_id, dst_addr, e);
                None
            }
        })
        .collect()
}

/// Load every record file in `dir` and summarise each path
pub fn collect_path_stats(dir: &Path, k: f64, max_iter: usize) -> Result<Vec<PathStats>> {
    let files = read_record_dir(dir)?;
    let groups = group_samples(files.iter().flatten());
    Ok(path_stats(&groups, k, max_iter))
}
