// Compact tuple codec
// Packs events into the bare JSON tuples the legacy web client understands and
// recovers them again from tuple shape
//
// The shape rules differ per algorithm. In particular a snapshot of an array
// with three or fewer elements is indistinguishable from a compare or swap,
// which is why traces are kept as `Event`s internally and only encoded at the
// boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithms::Algorithm;
use crate::events::types::{Event, Trace};

/// One element of a tuple: an index/value or a marker flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Flag(bool),
    Int(u64),
}

/// A packed event as it travels over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEvent {
    /// Bare scalar (or null): quicksort pivot
    Scalar(Option<u64>),
    Tuple(Vec<RawValue>),
}

/// Errors that can occur while decoding packed events
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("{algorithm} does not emit bare scalar events")]
    UnexpectedScalar { algorithm: Algorithm },

    #[error("unrecognized {len}-element tuple for {algorithm}")]
    UnrecognizedShape { algorithm: Algorithm, len: usize },

    #[error("expected an integer at position {position}, found a flag")]
    UnexpectedFlag { position: usize },

    #[error("value {0} does not fit the target type")]
    OutOfRange(u64),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Pack an event the way `algorithm`'s client decoder expects it
pub fn encode(algorithm: Algorithm, event: &Event) -> RawEvent {
    match event {
        Event::Compare { indices } => RawEvent::Tuple(ints(indices.iter().map(|&i| i as u64))),
        Event::Swap { a, b } => RawEvent::Tuple(vec![
            RawValue::Int(*a as u64),
            RawValue::Int(*b as u64),
            RawValue::Flag(true),
        ]),
        Event::Snapshot { values, focus } => {
            let mut tuple = ints(values.iter().map(|&v| u64::from(v)));
            if algorithm == Algorithm::MergeSort {
                if let Some((a, b)) = focus {
                    tuple.push(RawValue::Int(*a as u64));
                    tuple.push(RawValue::Int(*b as u64));
                }
            }
            RawEvent::Tuple(tuple)
        }
        Event::Clear => RawEvent::Tuple(Vec::new()),
        Event::SortedMark { index } => {
            RawEvent::Tuple(vec![RawValue::Flag(true), RawValue::Int(*index as u64)])
        }
        Event::PivotSet { index } => RawEvent::Scalar(index.map(|i| i as u64)),
    }
}

/// Recover an event from its packed shape
///
/// Precedence per algorithm:
/// - quick: bare scalar is a pivot; then the sequence rules below, except any
///   length other than 2 is a swap/clear
/// - all: longer than 3 is a snapshot (merge appends the focus pair)
/// - bubble: length 3 or 0 is a swap/clear
/// - heap, merge: length 3 ending in a flag, or 0, is a swap/clear
/// - all: length 2 starting with a flag is a sorted mark, otherwise a compare
pub fn decode(algorithm: Algorithm, raw: &RawEvent) -> CodecResult<Event> {
    let tuple = match raw {
        RawEvent::Scalar(index) => {
            if algorithm != Algorithm::QuickSort {
                return Err(CodecError::UnexpectedScalar { algorithm });
            }
            let index = index.map(to_usize).transpose()?;
            return Ok(Event::PivotSet { index });
        }
        RawEvent::Tuple(tuple) => tuple,
    };

    let len = tuple.len();
    let ends_with_flag = matches!(tuple.last(), Some(RawValue::Flag(_)));
    let starts_with_flag = matches!(tuple.first(), Some(RawValue::Flag(_)));

    if len > 3 {
        return decode_snapshot(algorithm, tuple);
    }

    let is_swap_shape = match algorithm {
        Algorithm::BubbleSort => len == 3 || len == 0,
        Algorithm::HeapSort | Algorithm::MergeSort => (len == 3 && ends_with_flag) || len == 0,
        Algorithm::QuickSort => len != 2,
    };

    if is_swap_shape {
        return match len {
            0 => Ok(Event::Clear),
            3 => Ok(Event::Swap {
                a: index_at(tuple, 0)?,
                b: index_at(tuple, 1)?,
            }),
            _ => Err(CodecError::UnrecognizedShape { algorithm, len }),
        };
    }

    if len == 2 && starts_with_flag {
        return Ok(Event::SortedMark {
            index: index_at(tuple, 1)?,
        });
    }

    match len {
        2 | 3 => Ok(Event::Compare {
            indices: (0..len).map(|i| index_at(tuple, i)).collect::<CodecResult<_>>()?,
        }),
        _ => Err(CodecError::UnrecognizedShape { algorithm, len }),
    }
}

fn decode_snapshot(algorithm: Algorithm, tuple: &[RawValue]) -> CodecResult<Event> {
    if algorithm == Algorithm::MergeSort {
        let split = tuple.len() - 2;
        let values = (0..split)
            .map(|i| value_at(tuple, i))
            .collect::<CodecResult<_>>()?;
        let focus = (index_at(tuple, split)?, index_at(tuple, split + 1)?);
        return Ok(Event::Snapshot {
            values,
            focus: Some(focus),
        });
    }

    let values = (0..tuple.len())
        .map(|i| value_at(tuple, i))
        .collect::<CodecResult<_>>()?;
    Ok(Event::Snapshot {
        values,
        focus: None,
    })
}

fn ints(xs: impl Iterator<Item = u64>) -> Vec<RawValue> {
    xs.map(RawValue::Int).collect()
}

fn int_at(tuple: &[RawValue], position: usize) -> CodecResult<u64> {
    match tuple[position] {
        RawValue::Int(n) => Ok(n),
        RawValue::Flag(_) => Err(CodecError::UnexpectedFlag { position }),
    }
}

fn index_at(tuple: &[RawValue], position: usize) -> CodecResult<usize> {
    to_usize(int_at(tuple, position)?)
}

fn value_at(tuple: &[RawValue], position: usize) -> CodecResult<u32> {
    let n = int_at(tuple, position)?;
    u32::try_from(n).map_err(|_| CodecError::OutOfRange(n))
}

fn to_usize(n: u64) -> CodecResult<usize> {
    usize::try_from(n).map_err(|_| CodecError::OutOfRange(n))
}

/// Pack a whole trace, preserving order
pub fn encode_trace(algorithm: Algorithm, trace: &Trace) -> Vec<RawEvent> {
    trace.iter().map(|event| encode(algorithm, event)).collect()
}

/// Unpack a whole trace, stopping at the first malformed tuple
pub fn decode_trace(algorithm: Algorithm, raw: &[RawEvent]) -> CodecResult<Trace> {
    raw.iter().map(|r| decode(algorithm, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::run_algorithm;

    fn parse(json: &str) -> RawEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_wire_format_matches_legacy_tuples() {
        let swap = encode(Algorithm::BubbleSort, &Event::Swap { a: 2, b: 3 });
        assert_eq!(serde_json::to_string(&swap).unwrap(), "[2,3,true]");

        let mark = encode(Algorithm::HeapSort, &Event::SortedMark { index: 4 });
        assert_eq!(serde_json::to_string(&mark).unwrap(), "[true,4]");

        let clear = encode(Algorithm::MergeSort, &Event::Clear);
        assert_eq!(serde_json::to_string(&clear).unwrap(), "[]");

        let pivot = encode(Algorithm::QuickSort, &Event::PivotSet { index: Some(5) });
        assert_eq!(serde_json::to_string(&pivot).unwrap(), "5");
    }

    #[test]
    fn test_scalar_and_null_parse_as_pivot() {
        assert_eq!(
            decode(Algorithm::QuickSort, &parse("7")),
            Ok(Event::PivotSet { index: Some(7) })
        );
        assert_eq!(
            decode(Algorithm::QuickSort, &parse("null")),
            Ok(Event::PivotSet { index: None })
        );
        assert_eq!(
            decode(Algorithm::HeapSort, &parse("7")),
            Err(CodecError::UnexpectedScalar {
                algorithm: Algorithm::HeapSort
            })
        );
    }

    #[test]
    fn test_heap_distinguishes_three_way_compare_from_swap() {
        assert_eq!(
            decode(Algorithm::HeapSort, &parse("[0,1,2]")),
            Ok(Event::Compare {
                indices: vec![0, 1, 2]
            })
        );
        assert_eq!(
            decode(Algorithm::HeapSort, &parse("[0,2,true]")),
            Ok(Event::Swap { a: 0, b: 2 })
        );
    }

    #[test]
    fn test_bubble_treats_any_triple_as_swap() {
        assert_eq!(
            decode(Algorithm::BubbleSort, &parse("[0,1,2]")),
            Ok(Event::Swap { a: 0, b: 1 })
        );
    }

    #[test]
    fn test_quick_rejects_single_element_tuple() {
        assert_eq!(
            decode(Algorithm::QuickSort, &parse("[3]")),
            Err(CodecError::UnrecognizedShape {
                algorithm: Algorithm::QuickSort,
                len: 1
            })
        );
    }

    #[test]
    fn test_merge_snapshot_carries_focus_pair() {
        let event = decode(Algorithm::MergeSort, &parse("[1,2,3,0,1]")).unwrap();
        assert_eq!(
            event,
            Event::Snapshot {
                values: vec![1, 2, 3],
                focus: Some((0, 1)),
            }
        );
    }

    #[test]
    fn test_flag_in_index_slot_is_rejected() {
        assert_eq!(
            decode(Algorithm::BubbleSort, &parse("[0,true]")),
            Err(CodecError::UnexpectedFlag { position: 1 })
        );
    }

    #[test]
    fn test_short_snapshot_collides_with_compare() {
        // A two-element array snapshot has the same shape as a compare
        let raw = encode(
            Algorithm::BubbleSort,
            &Event::Snapshot {
                values: vec![1, 2],
                focus: None,
            },
        );
        assert_eq!(
            decode(Algorithm::BubbleSort, &raw),
            Ok(Event::Compare {
                indices: vec![1, 2]
            })
        );
    }

    #[test]
    fn test_real_traces_survive_packing() {
        let input = vec![12, 7, 99, 3, 45, 45, 18, 60];
        for algorithm in Algorithm::ALL {
            let outcome = run_algorithm(algorithm, &input);
            let raw = encode_trace(algorithm, &outcome.trace);

            let json = serde_json::to_string(&raw).unwrap();
            let parsed: Vec<RawEvent> = serde_json::from_str(&json).unwrap();

            let decoded = decode_trace(algorithm, &parsed).unwrap();
            assert_eq!(decoded, outcome.trace, "{}", algorithm);
        }
    }
}
