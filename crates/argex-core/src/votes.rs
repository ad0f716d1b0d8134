//! Initial weights from anonymized vote tallies.

use crate::constants::VOTE_BUCKET_VALUES;
use crate::models::VoteTally;

/// Mean bucket value of a tally: `Σ count_i · v_i / Σ count_i` with
/// `v = [0, 0.25, 0.5, 0.75, 1]` for keys `"0"`..`"4"`. Other keys are
/// ignored. An empty tally yields `neutral`.
pub fn aggregate_votes(votes: &VoteTally, neutral: f64) -> f64 {
    let mut total = 0u64;
    let mut weighted = 0.0;
    for (bucket, value) in VOTE_BUCKET_VALUES.iter().enumerate() {
        let count = votes.get(&bucket.to_string()).copied().unwrap_or(0);
        total += count;
        weighted += count as f64 * value;
    }
    if total == 0 {
        return neutral;
    }
    weighted / total as f64
}
