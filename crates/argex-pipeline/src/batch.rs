//! BatchRunner: units in parallel on a rayon pool.
//!
//! A unit that fails (unreadable file, structural error, unknown target)
//! becomes a failure row; the other units are unaffected.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use argex_core::config::ArgexConfig;
use argex_core::errors::{ArgexError, ArgexErrorCode, LoadError};
use argex_core::models::Debate;

use crate::loader::{list_debate_files, load_unit, save_debate};
use crate::rows::{BranchRankingRow, ExplanationRow, FailureRow, SizeRow};
use crate::subdebate::extract_subdebates;
use crate::unit::{process_unit, DebateUnit, UnitReport};

pub const RANKINGS_FILE: &str = "rankings.jsonl";
pub const EXPLANATIONS_FILE: &str = "explanations.jsonl";
pub const SIZES_FILE: &str = "sizes.jsonl";
pub const FAILURES_FILE: &str = "failures.jsonl";

/// Everything a batch produced, sorted by unit name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub units: Vec<UnitReport>,
    pub failures: Vec<FailureRow>,
}

impl BatchReport {
    fn from_results(results: Vec<Result<UnitReport, FailureRow>>) -> Self {
        let mut report = Self::default();
        for result in results {
            match result {
                Ok(unit) => report.units.push(unit),
                Err(failure) => report.failures.push(failure),
            }
        }
        report.units.sort_by(|a, b| a.unit.cmp(&b.unit));
        report.failures.sort_by(|a, b| a.unit.cmp(&b.unit));
        report
    }

    pub fn ranking_rows(&self) -> impl Iterator<Item = &BranchRankingRow> + '_ {
        self.units.iter().flat_map(|u| u.rankings.iter())
    }

    pub fn explanation_rows(&self) -> impl Iterator<Item = &ExplanationRow> + '_ {
        self.units.iter().flat_map(|u| u.explanations.iter())
    }

    pub fn size_rows(&self) -> impl Iterator<Item = &SizeRow> + '_ {
        self.units.iter().flat_map(|u| u.sizes.iter())
    }

    pub fn unit(&self, name: &str) -> Option<&UnitReport> {
        self.units.iter().find(|u| u.unit == name)
    }

    /// Write the four JSON-lines reports into `dir`, creating it if needed.
    pub fn write_jsonl(&self, dir: &Path) -> Result<(), LoadError> {
        fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
        write_lines(&dir.join(RANKINGS_FILE), self.ranking_rows())?;
        write_lines(&dir.join(EXPLANATIONS_FILE), self.explanation_rows())?;
        write_lines(&dir.join(SIZES_FILE), self.size_rows())?;
        write_lines(&dir.join(FAILURES_FILE), self.failures.iter())?;
        Ok(())
    }

    /// Write every enriched unit debate to `<dir>/<unit>.json`.
    pub fn write_enriched(&self, dir: &Path) -> Result<(), LoadError> {
        fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
        for unit in &self.units {
            save_debate(&dir.join(format!("{}.json", unit.unit)), &unit.enriched)?;
        }
        Ok(())
    }
}

pub struct BatchRunner {
    config: ArgexConfig,
    pool: Option<rayon::ThreadPool>,
}

impl BatchRunner {
    /// With `pipeline.threads > 0` units run on a dedicated pool of that
    /// size, otherwise on the global rayon pool.
    pub fn new(config: ArgexConfig) -> Self {
        let threads = config.pipeline.effective_threads();
        let pool = if threads > 0 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("argex-worker-{i}"))
                .build()
            {
                Ok(pool) => Some(pool),
                Err(e) => {
                    warn!(threads, error = %e, "thread pool unavailable, using the global pool");
                    None
                }
            }
        } else {
            None
        };
        Self { config, pool }
    }

    pub fn config(&self) -> &ArgexConfig {
        &self.config
    }

    pub fn run(&self, units: Vec<DebateUnit>) -> BatchReport {
        let results: Vec<Result<UnitReport, FailureRow>> = self.install(|| {
            units
                .par_iter()
                .map(|unit| {
                    process_unit(unit, &self.config).map_err(|e| {
                        failure(&unit.name, Some(&unit.debate_id), Some(&unit.target_id), &e)
                    })
                })
                .collect()
        });
        self.finish(results)
    }

    /// Load and process sub-debate files.
    pub fn run_files(&self, paths: &[PathBuf]) -> BatchReport {
        let infer = self.config.pipeline.effective_infer_missing_targets();
        let results: Vec<Result<UnitReport, FailureRow>> = self.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let unit = load_unit(path, infer).map_err(|e| {
                        let name = path
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        failure(&name, None, None, &e)
                    })?;
                    process_unit(&unit, &self.config).map_err(|e| {
                        failure(&unit.name, Some(&unit.debate_id), Some(&unit.target_id), &e)
                    })
                })
                .collect()
        });
        self.finish(results)
    }

    /// Every `.json` sub-debate file in `dir`. Only an unreadable directory
    /// fails the whole batch.
    pub fn run_dir(&self, dir: &Path) -> Result<BatchReport, LoadError> {
        let files = list_debate_files(dir)?;
        info!(dir = %dir.display(), files = files.len(), "batch started");
        Ok(self.run_files(&files))
    }

    /// `run_dir` over the configured input folder.
    pub fn run_input_dir(&self) -> Result<BatchReport, LoadError> {
        self.run_dir(&self.config.pipeline.effective_input_dir())
    }

    /// Split full debates, keyed by debate id, into sub-debates and run them.
    pub fn run_debates(&self, debates: &[(String, Debate)]) -> BatchReport {
        let units = debates
            .iter()
            .flat_map(|(debate_id, debate)| extract_subdebates(debate_id, debate))
            .collect();
        self.run(units)
    }

    fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    fn finish(&self, results: Vec<Result<UnitReport, FailureRow>>) -> BatchReport {
        let report = BatchReport::from_results(results);
        info!(
            units = report.units.len(),
            failures = report.failures.len(),
            "batch finished"
        );
        report
    }
}

fn failure(unit: &str, debate_id: Option<&str>, target_id: Option<&str>, error: &ArgexError) -> FailureRow {
    warn!(unit, code = error.error_code(), error = %error, "unit failed");
    FailureRow {
        unit: unit.to_string(),
        debate_id: debate_id.map(str::to_string),
        target_id: target_id.map(str::to_string),
        error_code: error.error_code().to_string(),
        message: error.to_string(),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn write_lines<'a, T, I>(path: &Path, rows: I) -> Result<(), LoadError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut out = BufWriter::new(file);
    for row in rows {
        serde_json::to_writer(&mut out, row).map_err(|e| LoadError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        out.write_all(b"\n").map_err(|source| io_error(path, source))?;
    }
    out.flush().map_err(|source| io_error(path, source))
}
