// Tauri IPC Commands
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, State};

use crate::algorithms::{run_algorithm, Algorithm};
use crate::config::{size_for_slider, speed_for_len, INITIAL_ARRAY_LEN};
use crate::events::{encode_trace, RawEvent};
use crate::replay::{Channel, HighlightSink};
use crate::session::{parse_input_array, SortError, SortRun, Visualizer};
use crate::state::SinkCall;

/// Event name the webview listens on for highlight updates
pub const SORT_STATE_EVENT: &str = "sort-state";

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

type CommandResult<T> = Result<T, CommandError>;

/// Visualizer managed by Tauri
pub struct VisualizerState(pub Visualizer);

impl Default for VisualizerState {
    fn default() -> Self {
        Self(Visualizer::default())
    }
}

/// Forwards every sink call to the webview
pub struct TauriSink {
    app: AppHandle,
}

impl TauriSink {
    pub fn new(app: AppHandle) -> Self {
        TauriSink { app }
    }

    fn emit(&self, call: SinkCall) {
        if let Err(e) = self.app.emit(SORT_STATE_EVENT, call) {
            log::warn!("Failed to emit {}: {}", SORT_STATE_EVENT, e);
        }
    }
}

impl HighlightSink for TauriSink {
    fn set_array(&mut self, values: &[u32]) {
        self.emit(SinkCall::SetArray {
            values: values.to_vec(),
        });
    }

    fn set_current(&mut self, channel: Channel, indices: &[usize]) {
        self.emit(SinkCall::SetCurrent {
            channel,
            indices: indices.to_vec(),
        });
    }

    fn set_current_swappers(&mut self, indices: &[usize]) {
        self.emit(SinkCall::SetCurrentSwappers {
            indices: indices.to_vec(),
        });
    }

    fn set_current_sorted(&mut self, indices: &[usize]) {
        self.emit(SinkCall::SetCurrentSorted {
            indices: indices.to_vec(),
        });
    }

    fn set_pivot(&mut self, index: Option<usize>) {
        self.emit(SinkCall::SetPivot { index });
    }

    fn set_running(&mut self, running: bool) {
        self.emit(SinkCall::SetRunning { running });
    }
}

// ==================== SORT COMMANDS ====================

#[derive(Debug, Deserialize)]
pub struct SortInput {
    pub algorithm: String,
    pub array: Vec<serde_json::Value>,
    /// Per-event delay; derived from the array length when omitted
    pub speed_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub run: SortRun,
    pub array: Vec<u32>,
}

/// Sort an array and stream the replay to the webview
#[tauri::command]
pub async fn sort(
    app: AppHandle,
    visualizer: State<'_, VisualizerState>,
    input: SortInput,
) -> CommandResult<SortResponse> {
    let speed_ms = input
        .speed_ms
        .unwrap_or_else(|| speed_for_len(input.array.len()));

    let handle = visualizer
        .0
        .sort_request(&input.algorithm, &input.array, speed_ms, TauriSink::new(app))
        .map_err(|e| {
            log::warn!("Sort request rejected: {}", e);
            CommandError::from(e)
        })?;

    // The replay task keeps running after the handle is dropped
    Ok(SortResponse {
        run: handle.run,
        array: handle.array,
    })
}

/// Generate a random array for the control surface
#[tauri::command]
pub fn generate_array(
    visualizer: State<'_, VisualizerState>,
    length: usize,
) -> CommandResult<Vec<u32>> {
    let max = visualizer.0.config().max_array_len;
    if length > max {
        return Err(CommandError::from(SortError::TooLarge { len: length, max }));
    }
    Ok(visualizer.0.generate_array(length))
}

/// Check if a replay is still in progress
#[tauri::command]
pub fn is_running(visualizer: State<'_, VisualizerState>) -> CommandResult<bool> {
    Ok(visualizer.0.is_running())
}

// ==================== TOOLBAR COMMANDS ====================

#[derive(Debug, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub display_name: &'static str,
}

/// List the algorithms in toolbar order
#[tauri::command]
pub fn list_algorithms() -> Vec<AlgorithmInfo> {
    Algorithm::ALL
        .iter()
        .map(|a| AlgorithmInfo {
            name: a.as_str(),
            display_name: a.display_name(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ArraySettings {
    pub length: usize,
    pub speed_ms: u64,
}

/// Map the size slider position to an array length and replay speed
#[tauri::command]
pub fn array_settings_for_slider(position: u32) -> ArraySettings {
    let length = size_for_slider(position);
    ArraySettings {
        length,
        speed_ms: speed_for_len(length),
    }
}

/// Array length and speed the control surface starts with
#[tauri::command]
pub fn initial_array_settings() -> ArraySettings {
    ArraySettings {
        length: INITIAL_ARRAY_LEN,
        speed_ms: speed_for_len(INITIAL_ARRAY_LEN),
    }
}

// ==================== LEGACY CLIENT COMMANDS ====================

#[derive(Debug, Deserialize)]
pub struct EncodeTraceInput {
    pub algorithm: String,
    pub array: Vec<serde_json::Value>,
}

/// Run a sort and return its trace as packed tuples for the legacy client
#[tauri::command]
pub fn encode_trace_command(input: EncodeTraceInput) -> CommandResult<Vec<RawEvent>> {
    let algorithm = Algorithm::from_string(&input.algorithm)
        .ok_or_else(|| CommandError::from(SortError::UnknownAlgorithm(input.algorithm.clone())))?;
    let array = parse_input_array(&input.array)?;

    let outcome = run_algorithm(algorithm, &array);
    Ok(encode_trace(algorithm, &outcome.trace))
}
