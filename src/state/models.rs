// Sink call records
// Serializable form of each highlight setter, used for IPC and in tests

use serde::{Deserialize, Serialize};

use crate::replay::{Channel, HighlightSink};

/// One setter invocation on the highlight sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "camelCase")]
pub enum SinkCall {
    SetArray { values: Vec<u32> },
    SetCurrent { channel: Channel, indices: Vec<usize> },
    SetCurrentSwappers { indices: Vec<usize> },
    SetCurrentSorted { indices: Vec<usize> },
    SetPivot { index: Option<usize> },
    SetRunning { running: bool },
}

impl SinkCall {
    /// Apply this call to another sink
    pub fn apply_to<S: HighlightSink + ?Sized>(&self, sink: &mut S) {
        match self {
            SinkCall::SetArray { values } => sink.set_array(values),
            SinkCall::SetCurrent { channel, indices } => sink.set_current(*channel, indices),
            SinkCall::SetCurrentSwappers { indices } => sink.set_current_swappers(indices),
            SinkCall::SetCurrentSorted { indices } => sink.set_current_sorted(indices),
            SinkCall::SetPivot { index } => sink.set_pivot(*index),
            SinkCall::SetRunning { running } => sink.set_running(*running),
        }
    }
}

/// Sink that records every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl HighlightSink for RecordingSink {
    fn set_array(&mut self, values: &[u32]) {
        self.calls.push(SinkCall::SetArray {
            values: values.to_vec(),
        });
    }

    fn set_current(&mut self, channel: Channel, indices: &[usize]) {
        self.calls.push(SinkCall::SetCurrent {
            channel,
            indices: indices.to_vec(),
        });
    }

    fn set_current_swappers(&mut self, indices: &[usize]) {
        self.calls.push(SinkCall::SetCurrentSwappers {
            indices: indices.to_vec(),
        });
    }

    fn set_current_sorted(&mut self, indices: &[usize]) {
        self.calls.push(SinkCall::SetCurrentSorted {
            indices: indices.to_vec(),
        });
    }

    fn set_pivot(&mut self, index: Option<usize>) {
        self.calls.push(SinkCall::SetPivot { index });
    }

    fn set_running(&mut self, running: bool) {
        self.calls.push(SinkCall::SetRunning { running });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HighlightState;

    #[test]
    fn test_recorded_calls_replay_onto_state() {
        let mut recorder = RecordingSink::default();
        recorder.set_array(&[2, 1]);
        recorder.set_current(Channel::MergeX, &[0, 1]);
        recorder.set_running(true);

        let mut state = HighlightState::new();
        for call in &recorder.calls {
            call.apply_to(&mut state);
        }

        assert_eq!(state.array(), &[2, 1]);
        assert_eq!(state.current(Channel::MergeX), &[0, 1]);
        assert!(state.is_running());
    }

    #[test]
    fn test_sink_call_json_shape() {
        let call = SinkCall::SetPivot { index: Some(4) };
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["call"], "setPivot");
        assert_eq!(json["index"], 4);
    }
}
