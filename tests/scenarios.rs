// End-to-end sort scenarios through the public API

use sortviz_lib::events::{decode_trace, encode_trace};
use sortviz_lib::{
    run_algorithm, Algorithm, Channel, Event, HighlightState, RecordingSink, SinkCall, Visualizer,
    VisualizerConfig,
};

fn marks(outcome_trace: &sortviz_lib::Trace) -> Vec<usize> {
    outcome_trace
        .iter()
        .filter_map(|e| match e {
            Event::SortedMark { index } => Some(*index),
            _ => None,
        })
        .collect()
}

#[test]
fn test_bubble_scenario_marks_every_index() {
    let outcome = run_algorithm(Algorithm::BubbleSort, &[5, 3, 8, 1]);
    assert_eq!(outcome.array, vec![1, 3, 5, 8]);

    let mut marked = marks(&outcome.trace);
    assert_eq!(marked.len(), 4);
    marked.sort_unstable();
    assert_eq!(marked, vec![0, 1, 2, 3]);
}

#[test]
fn test_merge_scenario_keeps_equal_values_stable() {
    let outcome = run_algorithm(Algorithm::MergeSort, &[4, 3, 4, 1]);
    assert_eq!(outcome.array, vec![1, 3, 4, 4]);

    // Follow input positions through each relocation (slot `b` moves to `a`)
    let mut origins: Vec<usize> = (0..4).collect();
    for event in outcome.trace.iter() {
        if let Event::Swap { a, b } = event {
            origins[*a..=*b].rotate_right(1);
        }
    }
    assert_eq!(origins, vec![3, 1, 0, 2]);
}

#[test]
fn test_large_random_inputs_sort_correctly() {
    let visualizer = Visualizer::default();
    for algorithm in Algorithm::ALL {
        let input = visualizer.generate_array(VisualizerConfig::default().max_array_len);
        let outcome = run_algorithm(algorithm, &input);

        let mut expected = input.clone();
        expected.sort_unstable();
        assert_eq!(outcome.array, expected, "{}", algorithm);

        let mut marked = marks(&outcome.trace);
        marked.sort_unstable();
        assert_eq!(marked, (0..input.len()).collect::<Vec<_>>());

        // Large arrays never hit the short-snapshot ambiguity
        let packed = encode_trace(algorithm, &outcome.trace);
        assert_eq!(decode_trace(algorithm, &packed).unwrap(), outcome.trace);
    }
}

#[tokio::test(start_paused = true)]
async fn test_empty_array_runs_only_completion() {
    let visualizer = Visualizer::default();
    let handle = visualizer
        .sort(Algorithm::MergeSort, Vec::new(), 25, RecordingSink::default())
        .unwrap();
    assert!(handle.array.is_empty());

    let sink = handle.finished().await.unwrap();
    assert_eq!(
        sink.calls,
        vec![
            SinkCall::SetCurrentSorted { indices: vec![] },
            SinkCall::SetRunning { running: true },
            SinkCall::SetCurrent {
                channel: Channel::MergeX,
                indices: vec![]
            },
            SinkCall::SetCurrent {
                channel: Channel::MergeX,
                indices: vec![]
            },
            SinkCall::SetCurrentSorted { indices: vec![] },
            SinkCall::SetRunning { running: false },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_replayed_state_matches_direct_result() {
    let input = vec![88, 14, 203, 14, 57, 10, 131, 99, 42];

    for algorithm in Algorithm::ALL {
        let visualizer = Visualizer::default();
        let handle = visualizer
            .sort(algorithm, input.clone(), 5, RecordingSink::default())
            .unwrap();
        let direct = handle.array.clone();
        let sink = handle.finished().await.unwrap();

        let mut state = HighlightState::with_array(input.clone());
        for call in &sink.calls {
            call.apply_to(&mut state);
        }

        assert_eq!(state.array(), direct.as_slice(), "{}", algorithm);
        assert_eq!(state.sorted(), (0..input.len()).collect::<Vec<_>>().as_slice());
        assert!(!state.is_running());
        assert!(!visualizer.is_running());
    }
}
