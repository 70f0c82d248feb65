// Replay scheduler
// One event per tick, strictly in trace order, then the completion flourish

use std::time::Duration;

use crate::algorithms::Algorithm;
use crate::config::COMPLETION_PAUSE_MS;
use crate::events::{Event, Trace};
use crate::replay::sink::{Channel, HighlightSink};

/// Pacing for one replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Delay after each dispatched event
    pub speed: Duration,

    /// Pause between highlighting everything and the final sorted state
    pub completion_pause: Duration,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            speed: Duration::ZERO,
            completion_pause: Duration::from_millis(COMPLETION_PAUSE_MS),
        }
    }
}

impl ReplayConfig {
    pub fn with_speed_ms(speed_ms: u64) -> Self {
        ReplayConfig {
            speed: Duration::from_millis(speed_ms),
            ..Default::default()
        }
    }
}

/// Translates decoded events into sink calls
///
/// Holds the accumulated sorted set so each `SortedMark` can publish the
/// whole set through `set_current_sorted`.
pub struct Replayer<S> {
    sink: S,
    algorithm: Algorithm,
    channel: Channel,
    sorted: Vec<usize>,
}

impl<S: HighlightSink> Replayer<S> {
    pub fn new(sink: S, algorithm: Algorithm) -> Self {
        Replayer {
            sink,
            algorithm,
            channel: Channel::for_algorithm(algorithm),
            sorted: Vec::new(),
        }
    }

    /// Apply one event to the sink
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Compare { indices } => self.sink.set_current(self.channel, &indices),
            Event::Swap { a, b } => self.sink.set_current_swappers(&[a, b]),
            Event::Snapshot { values, focus } => {
                self.sink.set_array(&values);
                if let Some((a, b)) = focus {
                    self.sink.set_current_swappers(&[]);
                    self.sink.set_current(self.channel, &[]);
                    self.sink.set_current_swappers(&[a, b]);
                    self.sink.set_current(self.channel, &[a, b]);
                }
            }
            Event::Clear => self.sink.set_current_swappers(&[]),
            Event::SortedMark { index } => {
                if !self.sorted.contains(&index) {
                    self.sorted.push(index);
                }
                self.sink.set_current_sorted(&self.sorted);
            }
            Event::PivotSet { index } => self.sink.set_pivot(index),
        }
    }

    /// Highlight every index on the algorithm's channel
    fn begin_completion(&mut self, len: usize) {
        if self.algorithm == Algorithm::QuickSort {
            self.sink.set_pivot(None);
        }
        let all: Vec<usize> = (0..len).collect();
        self.sink.set_current(self.channel, &all);
    }

    /// Clear the channel, mark everything sorted, and stop running
    fn end_completion(&mut self, len: usize) {
        let all: Vec<usize> = (0..len).collect();
        self.sink.set_current(self.channel, &[]);
        self.sink.set_current_sorted(&all);
        self.sink.set_running(false);
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Drain `trace` into `sink`, waiting `config.speed` after every event
///
/// `len` is the length of the sorted array; it sizes the completion
/// flourish. The trace is consumed front to back and there is never more
/// than one pending wait. Returns the sink once `set_running(false)` has
/// been issued.
pub async fn replay<S: HighlightSink>(
    mut trace: Trace,
    sink: S,
    algorithm: Algorithm,
    len: usize,
    config: ReplayConfig,
) -> S {
    let total = trace.len();
    log::debug!("Replaying {} events for {} (n = {})", total, algorithm, len);

    let mut replayer = Replayer::new(sink, algorithm);

    while let Some(event) = trace.pop_front() {
        replayer.dispatch(event);
        tokio::time::sleep(config.speed).await;
    }

    replayer.begin_completion(len);
    tokio::time::sleep(config.completion_pause).await;
    replayer.end_completion(len);

    log::info!("Replay of {} finished after {} events", algorithm, total);
    replayer.into_sink()
}
