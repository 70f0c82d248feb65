// Quick sort engine
// Leftmost-pivot partitioning with two converging cursors

use super::SortOutcome;
use crate::events::Trace;

/// Quick sort, left subrange first
pub fn quick_sort(input: &[u32]) -> SortOutcome {
    let mut array = input.to_vec();
    let mut trace = Trace::new();

    if !array.is_empty() {
        let end = array.len() - 1;
        sort_range(&mut array, 0, end, &mut trace);
    }

    SortOutcome { array, trace }
}

/// Sort the inclusive range `[start, end]`
///
/// Each call marks exactly one index: the pivot's final slot, or the lone
/// element of a singleton range.
fn sort_range(array: &mut [u32], start: usize, end: usize, trace: &mut Trace) {
    if start >= end {
        trace.sorted(start);
        return;
    }

    let pivot = start;
    let mut left = start + 1;
    let mut right = end;

    trace.pivot(Some(pivot));
    trace.compare(&[left, right]);

    while right >= left {
        if array[right] < array[pivot] && array[left] > array[pivot] {
            array.swap(left, right);
            trace.swap(left, right, array);
        }
        if array[right] >= array[pivot] {
            right -= 1;
        }
        if array[left] <= array[pivot] {
            left += 1;
        }
        if right >= left {
            trace.compare(&[left, right]);
        }
    }

    trace.compare(&[pivot, right]);
    if pivot != right && array[pivot] != array[right] {
        array.swap(pivot, right);
        trace.swap(pivot, right, array);
    }
    trace.sorted(right);

    if right > start {
        sort_range(array, start, right - 1, trace);
    }
    if right < end {
        sort_range(array, right + 1, end, trace);
    }
}
