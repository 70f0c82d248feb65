// Highlight state store
// Explicit display state owned by whoever hosts the replay

use serde::Serialize;
use std::collections::BTreeMap;

use crate::replay::{Channel, HighlightSink};

/// Everything the rendering surface needs to paint one frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightState {
    array: Vec<u32>,
    current: BTreeMap<Channel, Vec<usize>>,
    swappers: Vec<usize>,
    sorted: Vec<usize>,
    pivot: Option<usize>,
    running: bool,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State showing `array` with no highlights
    pub fn with_array(array: Vec<u32>) -> Self {
        HighlightState {
            array,
            ..Default::default()
        }
    }

    pub fn array(&self) -> &[u32] {
        &self.array
    }

    /// Indices highlighted on `channel`
    pub fn current(&self, channel: Channel) -> &[usize] {
        self.current.get(&channel).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn swappers(&self) -> &[usize] {
        &self.swappers
    }

    pub fn sorted(&self) -> &[usize] {
        &self.sorted
    }

    pub fn pivot(&self) -> Option<usize> {
        self.pivot
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl HighlightSink for HighlightState {
    fn set_array(&mut self, values: &[u32]) {
        self.array = values.to_vec();
    }

    fn set_current(&mut self, channel: Channel, indices: &[usize]) {
        if indices.is_empty() {
            self.current.remove(&channel);
        } else {
            self.current.insert(channel, indices.to_vec());
        }
    }

    fn set_current_swappers(&mut self, indices: &[usize]) {
        self.swappers = indices.to_vec();
    }

    fn set_current_sorted(&mut self, indices: &[usize]) {
        self.sorted = indices.to_vec();
    }

    fn set_pivot(&mut self, index: Option<usize>) {
        self.pivot = index;
    }

    fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}
