// Bubble sort engine
// Adjacent-pair passes with a shrinking upper bound

use super::SortOutcome;
use crate::events::Trace;

/// Bubble sort with early exit
///
/// Round `r` scans pairs `(i, i + 1)` for `i` in `0..len - 1 - r`; the
/// element left at `len - 1 - r` is final and gets marked after the round.
/// When a round makes no swap the untouched prefix is already in order and
/// is marked right to left.
pub fn bubble_sort(input: &[u32]) -> SortOutcome {
    let mut array = input.to_vec();
    let mut trace = Trace::new();
    let len = array.len();

    if len == 0 {
        return SortOutcome { array, trace };
    }

    let mut round = 0;
    loop {
        let mut swapped = false;

        for i in 0..len - 1 - round {
            trace.compare(&[i, i + 1]);
            if array[i] > array[i + 1] {
                array.swap(i, i + 1);
                trace.swap(i, i + 1, &array);
                swapped = true;
            }
        }

        let bound = len - 1 - round;
        trace.sorted(bound);
        round += 1;

        if !swapped {
            for index in (0..bound).rev() {
                trace.sorted(index);
            }
            break;
        }
    }

    SortOutcome { array, trace }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::*;
    use crate::events::Event;

    #[test]
    fn test_scenario_four_elements() {
        let outcome = bubble_sort(&[5, 3, 8, 1]);
        assert_eq!(outcome.array, vec![1, 3, 5, 8]);

        let marks = sorted_marks(&outcome.trace);
        assert_eq!(marks, vec![3, 2, 1, 0]);
        assert_eq!(outcome.trace.iter().last(), Some(&Event::SortedMark { index: 0 }));
    }

    #[test]
    fn test_first_round_compares_every_pair() {
        let outcome = bubble_sort(&[3, 2, 1]);
        let compares: Vec<Vec<usize>> = outcome
            .trace
            .iter()
            .filter_map(|e| match e {
                Event::Compare { indices } => Some(indices.clone()),
                _ => None,
            })
            .collect();

        // Round 0: (0,1), (1,2); round 1: (0,1); round 2 has no pairs
        assert_eq!(compares, vec![vec![0, 1], vec![1, 2], vec![0, 1]]);
    }

    #[test]
    fn test_sorted_input_exits_after_one_round() {
        let outcome = bubble_sort(&[1, 2, 3, 4]);
        assert_eq!(outcome.trace.count_kind("compare"), 3);
        assert_eq!(outcome.trace.count_kind("swap"), 0);
        assert_eq!(sorted_marks(&outcome.trace), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_last_snapshot_matches_result() {
        let input = vec![9, 1, 8, 2, 7, 3];
        let outcome = bubble_sort(&input);
        assert_eq!(last_snapshot(&outcome.trace), Some(outcome.array.clone()));
        assert_eq!(outcome.array, reference_sort(&input));
    }

    #[test]
    fn test_single_element() {
        let outcome = bubble_sort(&[42]);
        assert_eq!(outcome.array, vec![42]);
        assert_eq!(sorted_marks(&outcome.trace), vec![0]);
        assert_eq!(outcome.trace.count_kind("compare"), 0);
    }
}
