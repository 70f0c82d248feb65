// Merge sort engine
// Top-down merge sort that reports comparisons in display coordinates
//
// Each element carries the slot it currently occupies on screen. When the
// second run's head is taken first it is relocated to the next output slot and
// every remaining element of the first run shifts right by one, so later
// comparisons still point at the bars the viewer sees.

use std::collections::VecDeque;

use super::SortOutcome;
use crate::events::Trace;

/// An element tagged with its input index and its current display slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tagged {
    value: u32,
    origin: usize,
    slot: usize,
}

/// Shared bookkeeping for one merge sort run
struct MergeContext {
    trace: Trace,
    /// Reconstructed view of the displayed array
    view: Vec<u32>,
    total: usize,
}

/// Stable merge sort
pub fn merge_sort(input: &[u32]) -> SortOutcome {
    let (sorted, trace) = sort_tagged(input);
    SortOutcome {
        array: sorted.iter().map(|t| t.value).collect(),
        trace,
    }
}

fn sort_tagged(input: &[u32]) -> (Vec<Tagged>, Trace) {
    let mut ctx = MergeContext {
        trace: Trace::new(),
        view: input.to_vec(),
        total: input.len(),
    };

    match input.len() {
        0 => return (Vec::new(), ctx.trace),
        1 => {
            ctx.trace.sorted(0);
            let only = Tagged {
                value: input[0],
                origin: 0,
                slot: 0,
            };
            return (vec![only], ctx.trace);
        }
        _ => {}
    }

    let tagged: Vec<Tagged> = input
        .iter()
        .enumerate()
        .map(|(i, &value)| Tagged {
            value,
            origin: i,
            slot: i,
        })
        .collect();

    let sorted = sort_range(tagged, 0, input.len() - 1, &mut ctx);
    (sorted, ctx.trace)
}

/// Sort `segment`, which occupies display slots `[start, end]`
fn sort_range(
    segment: Vec<Tagged>,
    start: usize,
    end: usize,
    ctx: &mut MergeContext,
) -> Vec<Tagged> {
    if segment.len() == 1 {
        return segment;
    }

    let half = segment.len() / 2;
    let mid = start + half;

    let mut first = segment;
    let second = first.split_off(half);

    let first = sort_range(first, start, mid - 1, ctx);
    let second = sort_range(second, mid, end, ctx);

    let is_final_merge = first.len() + second.len() == ctx.total;
    merge_runs(first, second, start, end, is_final_merge, ctx)
}

fn merge_runs(
    first: Vec<Tagged>,
    second: Vec<Tagged>,
    start: usize,
    end: usize,
    is_final_merge: bool,
    ctx: &mut MergeContext,
) -> Vec<Tagged> {
    let mut first = VecDeque::from(first);
    let mut second = VecDeque::from(second);
    let mut merged: Vec<Tagged> = Vec::with_capacity(first.len() + second.len());
    let mut next_slot = start;

    while !first.is_empty() && !second.is_empty() {
        let head_first = first[0];
        let head_second = second[0];
        ctx.trace.compare(&[head_first.slot, head_second.slot]);

        if head_first.value <= head_second.value {
            merged.extend(first.pop_front());
            next_slot += 1;
        } else {
            merged.extend(second.pop_front().map(|moved| Tagged {
                slot: next_slot,
                ..moved
            }));
            next_slot += 1;

            for waiting in first.iter_mut() {
                waiting.slot += 1;
            }

            rebuild_view(ctx, &merged, &first, &second, start, end);
            ctx.trace.relocate(
                head_first.slot,
                head_second.slot,
                ctx.view.clone(),
                (next_slot - 1, next_slot),
            );
        }

        if is_final_merge {
            ctx.trace.sorted(next_slot - 1);
        }
    }

    merged.extend(first);
    merged.extend(second);

    if is_final_merge {
        for slot in next_slot..=end {
            ctx.trace.sorted(slot);
        }
    }

    merged
}

/// Rebuild the displayed array: untouched prefix, merged output, both run
/// remainders, then the untouched tail beyond this merge's range
fn rebuild_view(
    ctx: &mut MergeContext,
    merged: &[Tagged],
    first: &VecDeque<Tagged>,
    second: &VecDeque<Tagged>,
    start: usize,
    end: usize,
) {
    let mut view = Vec::with_capacity(ctx.view.len());
    view.extend_from_slice(&ctx.view[..start]);
    view.extend(merged.iter().map(|t| t.value));
    view.extend(first.iter().map(|t| t.value));
    view.extend(second.iter().map(|t| t.value));
    view.extend_from_slice(&ctx.view[end + 1..]);
    ctx.view = view;
}
