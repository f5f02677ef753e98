//! Nearest-timestamp association between two sorted record sequences.
//!
//! The matcher walks sequence A once while a forward-only cursor tracks
//! the corresponding position in sequence B, so a full run costs
//! O(|A| + |B|) instead of the O(|A| * |B|) of a nested nearest-neighbor
//! search. Both sequences are expected to be sorted ascending by
//! timestamp; unsorted input still yields a deterministic result, but
//! the cursor may skip past the true nearest neighbor.

use crate::types::{Association, MatchConfig, TimestampedRecord};

/// Default maximum time gap between matched records, in seconds.
///
/// 0.02s is two thirds of a frame interval at 30 Hz, the capture rate of
/// the RGB-D recordings this tool was written for.
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// Match each record of `seq_a` to its nearest-in-time record of `seq_b`.
///
/// Returns one [`Association`] per A-record that found a B-record within
/// `tolerance`, in A order. A-records with no acceptable candidate are
/// dropped silently; a missing match is an expected outcome of
/// best-effort alignment, not an error.
///
/// Once the cursor runs off the end of `seq_b`, the scan stops entirely
/// and all remaining A-records are dropped: with both sequences sorted,
/// no later A-record can be within tolerance of an exhausted B-sequence.
pub fn associate(
    seq_a: &[TimestampedRecord],
    seq_b: &[TimestampedRecord],
    tolerance: f64,
) -> Vec<Association> {
    let mut out = Vec::new();
    let mut j = 0;

    for a in seq_a {
        // Skip B-records too old to be useful for this or any later
        // A-record. The cursor never moves backwards.
        while j < seq_b.len() && seq_b[j].timestamp < a.timestamp - tolerance {
            j += 1;
        }
        if j == seq_b.len() {
            break;
        }

        // The nearest neighbor is either the first B-record at or past
        // the window start, or the one just before it. Ties go to the
        // record at the cursor.
        let mut best = &seq_b[j];
        let mut best_diff = (a.timestamp - best.timestamp).abs();
        if j > 0 {
            let prev = &seq_b[j - 1];
            let prev_diff = (a.timestamp - prev.timestamp).abs();
            if prev_diff < best_diff {
                best = prev;
                best_diff = prev_diff;
            }
        }

        if best_diff <= tolerance {
            out.push(Association {
                ts_a: a.timestamp,
                id_a: a.identifier.clone(),
                ts_b: best.timestamp,
                id_b: best.identifier.clone(),
            });
        }
    }

    out
}

/// [`associate`] with the tolerance taken from a validated [`MatchConfig`].
pub fn associate_with_config(
    seq_a: &[TimestampedRecord],
    seq_b: &[TimestampedRecord],
    config: &MatchConfig,
) -> Vec<Association> {
    associate(seq_a, seq_b, config.tolerance)
}
