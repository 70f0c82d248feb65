// Highlight sink interface
// The setter calls replay makes on the external display state

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;

/// Per-algorithm highlight channel for "currently examined" indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    /// Bubble sort's adjacent pair
    BubbleTwo,
    /// Quick sort's left/right cursors
    QuickTwo,
    /// Heap sort's parent and children
    HeapThree,
    /// Merge sort's run heads
    MergeX,
}

impl Channel {
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BubbleSort => Channel::BubbleTwo,
            Algorithm::QuickSort => Channel::QuickTwo,
            Algorithm::HeapSort => Channel::HeapThree,
            Algorithm::MergeSort => Channel::MergeX,
        }
    }
}

/// Single-writer setters on the display state
///
/// Replay is the only caller; every visible change goes through one of these.
pub trait HighlightSink {
    /// Replace the displayed array
    fn set_array(&mut self, values: &[u32]);

    /// Highlight indices under examination on `channel`
    fn set_current(&mut self, channel: Channel, indices: &[usize]);

    /// Highlight the pair being exchanged (empty clears)
    fn set_current_swappers(&mut self, indices: &[usize]);

    /// Replace the set of finalized indices
    fn set_current_sorted(&mut self, indices: &[usize]);

    /// Mark or clear the quicksort pivot
    fn set_pivot(&mut self, index: Option<usize>);

    /// Toggle whether a sort/replay is in progress
    fn set_running(&mut self, running: bool);
}

impl<S: HighlightSink + ?Sized> HighlightSink for &mut S {
    fn set_array(&mut self, values: &[u32]) {
        (**self).set_array(values)
    }

    fn set_current(&mut self, channel: Channel, indices: &[usize]) {
        (**self).set_current(channel, indices)
    }

    fn set_current_swappers(&mut self, indices: &[usize]) {
        (**self).set_current_swappers(indices)
    }

    fn set_current_sorted(&mut self, indices: &[usize]) {
        (**self).set_current_sorted(indices)
    }

    fn set_pivot(&mut self, index: Option<usize>) {
        (**self).set_pivot(index)
    }

    fn set_running(&mut self, running: bool) {
        (**self).set_running(running)
    }
}
