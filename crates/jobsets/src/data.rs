//! Job set data sources.
//!
//! Job sets come either from a JSON file (an array of job sets with
//! camelCase keys) or from a seeded generator. Two generators built with the
//! same seed produce identical lists.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use jobset_table::{JobSet, JobState};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand_pcg::Pcg64;
use tracing::info;

/// Errors from loading job set data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The input file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a JSON array of job sets.
    #[error("invalid job set JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two entries share an identifier.
    #[error("duplicate job set id: {0}")]
    DuplicateId(String),
}

/// Parses a JSON array of job sets.
///
/// `origin` is only used in error messages.
///
/// # Errors
///
/// Returns [`DataError::Parse`] for malformed JSON and
/// [`DataError::DuplicateId`] when an identifier repeats.
pub fn parse_job_sets(json: &str, origin: &Path) -> Result<Vec<JobSet>, DataError> {
    let job_sets: Vec<JobSet> = serde_json::from_str(json).map_err(|source| DataError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::with_capacity(job_sets.len());
    for job_set in &job_sets {
        if !seen.insert(job_set.job_set_id.as_str()) {
            return Err(DataError::DuplicateId(job_set.job_set_id.clone()));
        }
    }
    Ok(job_sets)
}

/// Loads job sets from a JSON file.
///
/// # Errors
///
/// Returns [`DataError::Read`] when the file cannot be read, otherwise as
/// [`parse_job_sets`].
pub fn load_job_sets(path: &Path) -> Result<Vec<JobSet>, DataError> {
    let json = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let job_sets = parse_job_sets(&json, path)?;
    info!(path = %path.display(), rows = job_sets.len(), "loaded job sets");
    Ok(job_sets)
}

// ============================================================================
// Generator
// ============================================================================

const QUEUES: &[&str] = &["batch", "gpu", "interactive", "ingest", "research"];

const PREFIXES: &[&str] = &[
    "nightly-etl",
    "model-train",
    "backfill",
    "feature-store",
    "render",
    "sim",
    "report",
    "index-rebuild",
];

/// Deterministic job set generator.
pub struct Generator {
    rng: Pcg64,
    base_time: DateTime<Utc>,
}

impl Generator {
    /// Creates a generator for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64::new(seed.into(), 0x0a02_bdbf_7bb3_c0a7),
            base_time: DateTime::from_timestamp(1_790_000_000, 0).unwrap_or_else(Utc::now),
        }
    }

    /// A count that is absent, zero, or a positive number of jobs.
    fn count(&mut self) -> Option<i64> {
        match self.rng.random_range(0_u8..10) {
            0 => None,
            1..=3 => Some(0),
            _ => Some(self.rng.random_range(1_i64..5_000)),
        }
    }

    fn job_set(&mut self, n: usize) -> JobSet {
        let prefix = PREFIXES.choose(&mut self.rng).unwrap_or(&"job-set");
        let queue = QUEUES.choose(&mut self.rng).unwrap_or(&"default");
        let secs = self.rng.random_range(0..30 * 24 * 3600);
        let submitted = self.base_time - TimeDelta::seconds(secs);

        let mut job_set = JobSet::new(
            format!("{prefix}-{n:04}"),
            submitted.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
        .with_queue(*queue);
        for state in JobState::ALL {
            job_set = match self.count() {
                Some(count) => job_set.with_count(state, count),
                None => job_set,
            };
        }
        job_set
    }

    /// Generates `count` job sets with unique identifiers.
    pub fn job_sets(&mut self, count: usize) -> Vec<JobSet> {
        (0..count).map(|n| self.job_set(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn generator_is_deterministic() {
        let a = Generator::new(42).job_sets(50);
        let b = Generator::new(42).job_sets(50);
        assert_eq!(a, b);
        assert_ne!(a, Generator::new(43).job_sets(50));
    }

    #[test]
    fn generated_ids_are_unique_and_times_parse() {
        let sets = Generator::new(7).job_sets(300);
        let ids: HashSet<&str> = sets.iter().map(|js| js.job_set_id.as_str()).collect();
        assert_eq!(ids.len(), 300);
        for js in &sets {
            assert!(DateTime::parse_from_rfc3339(&js.latest_submission_time).is_ok());
            assert!(js.queue.is_some());
        }
    }

    #[test]
    fn generated_counts_include_absent_and_zero() {
        let sets = Generator::new(1).job_sets(200);
        let counts: Vec<Option<i64>> = sets
            .iter()
            .flat_map(|js| JobState::ALL.map(|state| js.count(state)))
            .collect();
        assert!(counts.contains(&None));
        assert!(counts.contains(&Some(0)));
        assert!(counts.iter().any(|c| matches!(c, Some(n) if *n > 0)));
    }

    #[test]
    fn parses_camel_case_with_missing_counts() {
        let json = r#"[
            {"jobSetId": "a", "queue": "q", "latestSubmissionTime": "2026-10-16T07:56:00Z",
             "jobsQueued": 0, "jobsFailed": 2},
            {"jobSetId": "b", "latestSubmissionTime": "2026-10-15T07:56:00Z"}
        ]"#;
        let sets = parse_job_sets(json, Path::new("inline")).expect("valid json");
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].jobs_failed, Some(2));
        assert_eq!(sets[0].jobs_queued, Some(0));
        assert_eq!(sets[0].jobs_running, None);
        assert_eq!(sets[1].queue, None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[{"jobSetId": "a"}, {"jobSetId": "a"}]"#;
        let err = parse_job_sets(json, Path::new("inline")).unwrap_err();
        assert!(matches!(err, DataError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_job_sets("{not json", Path::new("in.json")).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
        assert!(err.to_string().contains("in.json"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_job_sets(Path::new("/nonexistent/jobsets.json")).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"jobSetId": "x", "latestSubmissionTime": "t"}}]"#).expect("write");
        let sets = load_job_sets(file.path()).expect("load");
        assert_eq!(sets[0].job_set_id, "x");
    }
}
