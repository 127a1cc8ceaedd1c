//! Batch runs over a directory of benchmark instances, summarized by density.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::{read_graph, DatasetInstance, SUPPORTED_NODE_COUNTS};
use crate::error::Result;
use crate::heuristic::{solve, HeuristicConfig};

/// Densities taken into account, in tenths (0.1 through 0.9).
const DENSITY_TENTHS: std::ops::RangeInclusive<u32> = 1..=9;

/// Aggregated results for all instances sharing one edge density.
#[derive(Debug, Clone, PartialEq)]
pub struct DensitySummary {
    pub density: f64,
    pub files: usize,
    pub mean_size: f64,
    pub std_size: f64,
    pub min_size: usize,
    pub max_size: usize,
    pub mean_seconds: f64,
    pub std_seconds: f64,
}

impl DensitySummary {
    /// Summarizes `(solution_size, elapsed_seconds)` samples. Returns `None`
    /// for an empty slice.
    pub fn from_samples(density: f64, samples: &[(usize, f64)]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let sizes: Vec<f64> = samples.iter().map(|&(s, _)| s as f64).collect();
        let seconds: Vec<f64> = samples.iter().map(|&(_, t)| t).collect();
        let (mean_size, std_size) = mean_and_stdev(&sizes);
        let (mean_seconds, std_seconds) = mean_and_stdev(&seconds);

        Some(Self {
            density,
            files: samples.len(),
            mean_size,
            std_size,
            min_size: samples.iter().map(|&(s, _)| s).min()?,
            max_size: samples.iter().map(|&(s, _)| s).max()?,
            mean_seconds,
            std_seconds,
        })
    }
}

// Sample standard deviation; zero when there is a single value.
fn mean_and_stdev(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}

fn density_tenths(density: f64) -> Option<u32> {
    let scaled = density * 10.0;
    let rounded = scaled.round();
    if (scaled - rounded).abs() > 1e-9 || rounded < 0.0 {
        return None;
    }
    let tenths = rounded as u32;
    DENSITY_TENTHS.contains(&tenths).then_some(tenths)
}

/// Lists benchmark instances in `dir` whose density is one of 0.1..=0.9,
/// sorted by file name.
pub fn collect_instances(dir: &Path) -> Result<Vec<(PathBuf, DatasetInstance)>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match DatasetInstance::from_file_name(name) {
            Some(instance) if density_tenths(instance.density).is_some() => {
                found.push((path, instance));
            }
            _ => {}
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

/// Runs the heuristic on every instance in `dir` and groups the results by
/// density. Instances that fail to load or run are skipped with a warning.
///
/// With a seed configured, the i-th instance (in file-name order) runs with
/// `seed + i`.
pub fn run_directory(dir: &Path, config: &HeuristicConfig) -> Result<Vec<DensitySummary>> {
    let jobs = collect_instances(dir)?;
    log::info!("running {} instances from {}", jobs.len(), dir.display());

    let run_one = |(i, (path, instance)): (usize, &(PathBuf, DatasetInstance))| {
        let mut config = config.clone();
        config.seed = config.seed.map(|s| s.wrapping_add(i as u64));
        let outcome = read_graph(path).and_then(|graph| solve(&graph, &config));
        match outcome {
            Ok(report) => Some((
                density_tenths(instance.density)?,
                report.solution_size,
                report.elapsed_seconds(),
            )),
            Err(e) => {
                log::warn!("skipping {}: {e}", path.display());
                None
            }
        }
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<_> = {
        use rayon::prelude::*;
        jobs.par_iter().enumerate().map(run_one).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<_> = jobs.iter().enumerate().map(run_one).collect();

    let mut groups: BTreeMap<u32, Vec<(usize, f64)>> = BTreeMap::new();
    for (tenths, size, seconds) in outcomes.into_iter().flatten() {
        groups.entry(tenths).or_default().push((size, seconds));
    }

    Ok(groups
        .into_iter()
        .filter_map(|(tenths, samples)| {
            DensitySummary::from_samples(f64::from(tenths) / 10.0, &samples)
        })
        .collect())
}

/// Summaries for one dataset directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetReport {
    /// Upper-cased directory name, e.g. `NEW_1000_DATASET`.
    pub title: String,
    pub summaries: Vec<DensitySummary>,
}

/// The `new_<n>_dataset` directories present below `root`, by node count.
pub fn dataset_directories(root: &Path) -> Vec<PathBuf> {
    SUPPORTED_NODE_COUNTS
        .iter()
        .map(|n| root.join(format!("new_{n}_dataset")))
        .filter(|dir| dir.is_dir())
        .collect()
}

fn directory_title(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

/// Runs every dataset directory below `root`. A root without
/// `new_<n>_dataset` subdirectories is treated as a single dataset directory.
/// Directories that yield no results are left out.
pub fn run_root(root: &Path, config: &HeuristicConfig) -> Result<Vec<DatasetReport>> {
    let mut dirs = dataset_directories(root);
    if dirs.is_empty() {
        dirs.push(root.to_path_buf());
    }

    let mut reports = Vec::new();
    for dir in dirs {
        let summaries = run_directory(&dir, config)?;
        if summaries.is_empty() {
            log::warn!("no usable instances in {}", dir.display());
            continue;
        }
        reports.push(DatasetReport {
            title: directory_title(&dir),
            summaries,
        });
    }
    Ok(reports)
}

/// Renders summaries as a table with one line per density.
pub fn render(title: &str, summaries: &[DensitySummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "RESULTS {title}");
    let _ = writeln!(out, "Density Mean_Size Mean_Time_s");
    for s in summaries {
        let _ = writeln!(
            out,
            "{:.1} {:.2} {:.6}",
            s.density, s.mean_size, s.mean_seconds
        );
    }
    out
}

/// Renders summaries with spread and range columns, followed by the change
/// in mean size and time from density 0.1 to 0.9 when both are present.
pub fn render_detailed(title: &str, summaries: &[DensitySummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "RESULTS {title}");
    let _ = writeln!(
        out,
        "{:<8} {:<6} {:<10} {:<9} {:<11} {:<12} {}",
        "Density", "Files", "Mean_Size", "Std_Size", "Range", "Mean_Time_s", "Std_Time_s"
    );
    for s in summaries {
        let range = format!("{}-{}", s.min_size, s.max_size);
        let _ = writeln!(
            out,
            "{:<8.1} {:<6} {:<10.2} {:<9.2} {:<11} {:<12.6} {:.6}",
            s.density, s.files, s.mean_size, s.std_size, range, s.mean_seconds, s.std_seconds
        );
    }

    let at = |tenths| summaries.iter().find(|s| density_tenths(s.density) == Some(tenths));
    if let (Some(low), Some(high)) = (at(1), at(9)) {
        if low.mean_size > 0.0 {
            let reduction = (low.mean_size - high.mean_size) / low.mean_size * 100.0;
            let _ = writeln!(
                out,
                "Mean size 0.1 -> 0.9: {:.1} -> {:.1} ({:.1}% reduction)",
                low.mean_size, high.mean_size, reduction
            );
        }
        let _ = writeln!(
            out,
            "Mean time 0.1 -> 0.9: {:.6}s -> {:.6}s",
            low.mean_seconds, high.mean_seconds
        );
    }
    out
}
