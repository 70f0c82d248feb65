// Sort engines module
// Instrumented sorts that return the sorted array together with a visualization trace

pub mod bubble;
pub mod heap;
pub mod merge;
pub mod quick;

use serde::{Deserialize, Serialize};

use crate::events::Trace;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

/// Sorting algorithms the visualizer can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    BubbleSort,
    QuickSort,
    HeapSort,
    MergeSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::HeapSort,
        Algorithm::BubbleSort,
    ];

    /// Parse the control surface's algorithm name
    /// Accepts both camelCase and snake_case
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "bubbleSort" | "bubble_sort" => Some(Algorithm::BubbleSort),
            "quickSort" | "quick_sort" => Some(Algorithm::QuickSort),
            "heapSort" | "heap_sort" => Some(Algorithm::HeapSort),
            "mergeSort" | "merge_sort" => Some(Algorithm::MergeSort),
            _ => None,
        }
    }

    /// camelCase name used across the IPC boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubbleSort",
            Algorithm::QuickSort => "quickSort",
            Algorithm::HeapSort => "heapSort",
            Algorithm::MergeSort => "mergeSort",
        }
    }

    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::HeapSort => "Heap Sort",
            Algorithm::MergeSort => "Merge Sort",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one instrumented sort
#[derive(Debug, Clone)]
pub struct SortOutcome {
    /// Authoritative sorted array
    pub array: Vec<u32>,

    /// Every visualization step, in the order it happened
    pub trace: Trace,
}

/// Run the selected engine on a private copy of `input`
pub fn run_algorithm(algorithm: Algorithm, input: &[u32]) -> SortOutcome {
    match algorithm {
        Algorithm::BubbleSort => bubble_sort(input),
        Algorithm::QuickSort => quick_sort(input),
        Algorithm::HeapSort => heap_sort(input),
        Algorithm::MergeSort => merge_sort(input),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_algorithm_name_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_string(algorithm.as_str()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_string("heap_sort"), Some(Algorithm::HeapSort));
        assert_eq!(Algorithm::from_string("bogoSort"), None);
    }

    #[test]
    fn test_algorithm_serde_uses_camel_case() {
        let json = serde_json::to_string(&Algorithm::MergeSort).unwrap();
        assert_eq!(json, "\"mergeSort\"");
    }

    #[test]
    fn test_every_engine_sorts_and_marks() {
        for algorithm in Algorithm::ALL {
            for input in sample_inputs() {
                let outcome = run_algorithm(algorithm, &input);
                assert_eq!(
                    outcome.array,
                    reference_sort(&input),
                    "{} on {:?}",
                    algorithm,
                    input
                );
                assert_marked_once(&outcome.trace, input.len());
                assert_swap_framing(&outcome.trace);
            }
        }
    }

    #[test]
    fn test_empty_input_has_no_marks() {
        for algorithm in Algorithm::ALL {
            let outcome = run_algorithm(algorithm, &[]);
            assert!(outcome.array.is_empty());
            assert!(sorted_marks(&outcome.trace).is_empty());
        }
    }

    #[test]
    fn test_all_equal_input_never_swaps() {
        for algorithm in Algorithm::ALL {
            let outcome = run_algorithm(algorithm, &[2, 2, 2]);
            assert_eq!(outcome.array, vec![2, 2, 2]);
            assert_eq!(outcome.trace.count_kind("swap"), 0, "{}", algorithm);
            assert!(outcome.trace.count_kind("compare") > 0);
        }
    }

    #[test]
    fn test_sorted_input_never_swaps_except_heap() {
        let input = vec![1, 2, 3, 4, 5, 6, 7];
        for algorithm in [
            Algorithm::BubbleSort,
            Algorithm::QuickSort,
            Algorithm::MergeSort,
        ] {
            let outcome = run_algorithm(algorithm, &input);
            assert_eq!(outcome.trace.count_kind("swap"), 0, "{}", algorithm);
            assert!(outcome.trace.count_kind("compare") > 0);
        }
    }
}
