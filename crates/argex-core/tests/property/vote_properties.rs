//! Property tests for vote aggregation.

use proptest::prelude::*;

use argex_core::models::VoteTally;
use argex_core::votes::aggregate_votes;

fn tally_strategy() -> impl Strategy<Value = VoteTally> {
    prop::collection::vec(0u64..50, 5).prop_map(|counts| {
        counts
            .into_iter()
            .enumerate()
            .map(|(bucket, count)| (bucket.to_string(), count))
            .collect()
    })
}

proptest! {
    #[test]
    fn aggregate_stays_in_unit_interval(votes in tally_strategy()) {
        let w = aggregate_votes(&votes, 0.5);
        prop_assert!((0.0..=1.0).contains(&w), "weight {} out of range", w);
    }

    #[test]
    fn single_bucket_yields_bucket_value(bucket in 0usize..5, count in 1u64..100) {
        let mut votes = VoteTally::new();
        votes.insert(bucket.to_string(), count);
        let expected = bucket as f64 * 0.25;
        prop_assert!((aggregate_votes(&votes, 0.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn scaling_all_counts_is_invariant(votes in tally_strategy(), k in 1u64..10) {
        let scaled: VoteTally = votes.iter().map(|(b, c)| (b.clone(), c * k)).collect();
        prop_assert!((aggregate_votes(&votes, 0.5) - aggregate_votes(&scaled, 0.5)).abs() < 1e-9);
    }
}
