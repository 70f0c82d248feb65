// Visualization event types
// Defines the step kinds a sort engine records and the FIFO trace that holds them

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single semantic step of a sort run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// Indices currently under examination
    /// Two for pairwise compares, three for heap's parent + both children
    Compare { indices: Vec<usize> },

    /// Two indices whose values were just exchanged
    /// For merge sort this is the relocation of the second run's head
    Swap { a: usize, b: usize },

    /// Full contents of the displayed array after a swap
    /// Merge sort emits a reconstructed view and the pair of slots to focus
    Snapshot {
        values: Vec<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        focus: Option<(usize, usize)>,
    },

    /// Clears the "currently swapping" highlight
    Clear,

    /// Index has reached its final sorted position
    SortedMark { index: usize },

    /// Current quicksort pivot (None clears it)
    PivotSet { index: Option<usize> },
}

impl Event {
    /// Short name used in logs and debugging output
    pub fn kind_name(&self) -> &'static str {
        match self {
            Event::Compare { .. } => "compare",
            Event::Swap { .. } => "swap",
            Event::Snapshot { .. } => "snapshot",
            Event::Clear => "clear",
            Event::SortedMark { .. } => "sorted_mark",
            Event::PivotSet { .. } => "pivot_set",
        }
    }
}

/// Ordered record of every event produced by one sort run
///
/// A trace is filled completely by a sort engine before replay starts and is
/// then drained front to back exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    events: VecDeque<Event>,
}

impl Trace {
    pub fn new() -> Self {
        Trace {
            events: VecDeque::new(),
        }
    }

    /// Append a raw event
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Record a 2- or 3-way comparison
    pub fn compare(&mut self, indices: &[usize]) {
        debug_assert!(indices.len() == 2 || indices.len() == 3);
        self.push(Event::Compare {
            indices: indices.to_vec(),
        });
    }

    /// Record an exchange that has already been applied to `array`
    /// Always followed by the post-swap snapshot and a clear
    pub fn swap(&mut self, a: usize, b: usize, array: &[u32]) {
        self.push(Event::Swap { a, b });
        self.push(Event::Snapshot {
            values: array.to_vec(),
            focus: None,
        });
        self.push(Event::Clear);
    }

    /// Record a merge relocation with its reconstructed view
    pub fn relocate(&mut self, a: usize, b: usize, view: Vec<u32>, focus: (usize, usize)) {
        self.push(Event::Swap { a, b });
        self.push(Event::Snapshot {
            values: view,
            focus: Some(focus),
        });
        self.push(Event::Clear);
    }

    pub fn sorted(&mut self, index: usize) {
        self.push(Event::SortedMark { index });
    }

    pub fn pivot(&mut self, index: Option<usize>) {
        self.push(Event::PivotSet { index });
    }

    /// Remove and return the oldest event
    pub fn pop_front(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Number of events whose `Event::kind_name` equals `kind`
    pub fn count_kind(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind_name() == kind).count()
    }
}

impl FromIterator<Event> for Trace {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Trace {
            events: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Trace {
    type Item = Event;
    type IntoIter = std::collections::vec_deque::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
