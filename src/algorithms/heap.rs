// Heap sort engine
// Max-heap build followed by root extraction

use super::SortOutcome;
use crate::events::Trace;

/// Heap sort over a max-heap stored in the array itself
pub fn heap_sort(input: &[u32]) -> SortOutcome {
    let mut array = input.to_vec();
    let mut trace = Trace::new();

    if array.is_empty() {
        return SortOutcome { array, trace };
    }

    build_max_heap(&mut array, &mut trace);

    let mut end = array.len() - 1;
    while end > 0 {
        trace.compare(&[0, end]);
        // The root is the heap maximum; equal values need no exchange
        if array[0] > array[end] {
            array.swap(0, end);
            trace.swap(0, end, &array);
        }
        trace.sorted(end);
        sift_down(&mut array, 0, end, &mut trace);
        end -= 1;
    }
    trace.sorted(0);

    SortOutcome { array, trace }
}

fn build_max_heap(array: &mut [u32], trace: &mut Trace) {
    let len = array.len();
    for start in (0..=len / 2).rev() {
        sift_down(array, start, len, trace);
    }
}

/// Restore the heap property below `start` within `[0, end)`
///
/// The larger child wins; on a tie the right child is chosen.
fn sift_down(array: &mut [u32], start: usize, end: usize, trace: &mut Trace) {
    if start >= end / 2 {
        return;
    }

    let left = start * 2 + 1;
    let right = start * 2 + 2;

    let chosen = if right < end {
        trace.compare(&[start, left, right]);
        if array[left] > array[right] {
            left
        } else {
            right
        }
    } else {
        trace.compare(&[start, left]);
        left
    };

    if array[start] < array[chosen] {
        array.swap(start, chosen);
        trace.swap(start, chosen, array);
        sift_down(array, chosen, end, trace);
    }
}
