// Sorting sessions
// Validates requests, runs the selected engine, and hands the trace to replay

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::algorithms::{run_algorithm, Algorithm};
use crate::config::VisualizerConfig;
use crate::replay::{replay, HighlightSink, ReplayConfig};

/// Errors that can occur when starting a sort
#[derive(Debug, Error)]
pub enum SortError {
    #[error("Invalid input at index {index}: {reason}")]
    InvalidInput { index: usize, reason: String },

    #[error("Array of {len} elements exceeds the limit of {max}")]
    TooLarge { len: usize, max: usize },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("A sort is already running")]
    AlreadyRunning,

    #[error("No async runtime available to drive the replay")]
    NoRuntime,

    #[error("Replay task failed: {0}")]
    ReplayFailed(String),
}

pub type SortResult<T> = Result<T, SortError>;

/// Summary of one started sort
#[derive(Debug, Clone, Serialize)]
pub struct SortRun {
    pub id: Uuid,
    pub algorithm: Algorithm,
    pub len: usize,
    pub speed_ms: u64,
    pub trace_len: usize,
    pub started_at: DateTime<Utc>,
}

/// A sort whose replay is in flight
pub struct SortHandle<S> {
    pub run: SortRun,

    /// Authoritative sorted array, available before replay finishes
    pub array: Vec<u32>,

    task: JoinHandle<S>,
}

impl<S> SortHandle<S> {
    /// Wait for replay to finish and take the sink back
    pub async fn finished(self) -> SortResult<S> {
        self.task
            .await
            .map_err(|e| SortError::ReplayFailed(e.to_string()))
    }

    /// Check if the replay has already completed
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Clears the running flag when the replay task ends, however it ends
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Entry point for sorting requests
///
/// Allows one sort/replay in flight at a time; a request made while a replay
/// is still draining is rejected rather than interleaved.
pub struct Visualizer {
    config: VisualizerConfig,
    running: Arc<AtomicBool>,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

impl Visualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        Visualizer {
            config,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Check if a replay is still draining
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Random array of `len` values from the configured range
    pub fn generate_array(&self, len: usize) -> Vec<u32> {
        generate_array_with(&mut rand::rng(), len, self.config.value_range())
    }

    /// Sort `input` and replay the trace into `sink` on the current runtime
    ///
    /// The sort itself runs synchronously before this returns; only the
    /// replay is deferred. The sink first sees the sorted set cleared and
    /// `set_running(true)`.
    pub fn sort<S>(
        &self,
        algorithm: Algorithm,
        input: Vec<u32>,
        speed_ms: u64,
        mut sink: S,
    ) -> SortResult<SortHandle<S>>
    where
        S: HighlightSink + Send + 'static,
    {
        if input.len() > self.config.max_array_len {
            return Err(SortError::TooLarge {
                len: input.len(),
                max: self.config.max_array_len,
            });
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| SortError::NoRuntime)?;

        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::warn!("Rejected {} request: a replay is still running", algorithm);
            return Err(SortError::AlreadyRunning);
        }
        let guard = RunningGuard(Arc::clone(&self.running));

        sink.set_current_sorted(&[]);
        sink.set_running(true);

        let outcome = run_algorithm(algorithm, &input);
        let run = SortRun {
            id: Uuid::new_v4(),
            algorithm,
            len: input.len(),
            speed_ms,
            trace_len: outcome.trace.len(),
            started_at: Utc::now(),
        };

        log::info!(
            "Sort {} started: {} on {} elements, {} events at {} ms",
            run.id,
            algorithm,
            run.len,
            run.trace_len,
            speed_ms
        );

        let config = ReplayConfig {
            speed: std::time::Duration::from_millis(speed_ms),
            completion_pause: std::time::Duration::from_millis(self.config.completion_pause_ms),
        };
        let len = outcome.array.len();
        let trace = outcome.trace;

        let task = runtime.spawn(async move {
            let _guard = guard;
            replay(trace, sink, algorithm, len, config).await
        });

        Ok(SortHandle {
            run,
            array: outcome.array,
            task,
        })
    }

    /// Sort a request as it arrives from the control surface
    pub fn sort_request<S>(
        &self,
        algorithm: &str,
        input: &[serde_json::Value],
        speed_ms: u64,
        sink: S,
    ) -> SortResult<SortHandle<S>>
    where
        S: HighlightSink + Send + 'static,
    {
        let algorithm = Algorithm::from_string(algorithm)
            .ok_or_else(|| SortError::UnknownAlgorithm(algorithm.to_string()))?;
        let input = parse_input_array(input)?;
        self.sort(algorithm, input, speed_ms, sink)
    }
}

/// Validate an untyped array: every entry must be a finite, non-negative
/// integer that fits in `u32`
pub fn parse_input_array(values: &[serde_json::Value]) -> SortResult<Vec<u32>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            parse_input_value(value).map_err(|reason| SortError::InvalidInput { index, reason })
        })
        .collect()
}

fn parse_input_value(value: &serde_json::Value) -> Result<u32, String> {
    let number = match value {
        serde_json::Value::Number(number) => number,
        other => return Err(format!("expected a number, found {}", other)),
    };

    if let Some(n) = number.as_u64() {
        return u32::try_from(n).map_err(|_| format!("{} is too large", n));
    }
    if number.as_i64().is_some() {
        return Err(format!("{} is negative", number));
    }

    match number.as_f64() {
        Some(f) if !f.is_finite() => Err(format!("{} is not finite", f)),
        Some(f) if f < 0.0 => Err(format!("{} is negative", f)),
        Some(f) if f.fract() != 0.0 => Err(format!("{} is not an integer", f)),
        Some(f) if f > f64::from(u32::MAX) => Err(format!("{} is too large", f)),
        Some(f) => Ok(f as u32),
        None => Err(format!("{} is not representable", number)),
    }
}

/// Random array of `len` values drawn uniformly from `range`
pub fn generate_array_with<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<u32>,
) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}
