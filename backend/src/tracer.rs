//! Constrained depth-first cycle search
//!
//! Given a seed transaction, the tracer walks the graph looking for a path
//! back to the seed's sender. The search is greedy and order-dependent: the
//! first closing candidate (in stored time order) wins, and the first
//! successful branch propagates immediately. It deliberately does NOT
//! enumerate all cycles or pick a "best" one.
//!
//! # Critical Invariants
//!
//! 1. Strict temporal ordering: every hop happens strictly after the
//!    previous one; equal timestamps never extend a path
//! 2. Intermediate accounts are never revisited; only the start account may
//!    reappear, so the closing hop stays reachable
//! 3. A closing hop is accepted only when the path is longer than 2 hops and
//!    its amount lies within ±20% of the seed amount (inclusive)
//! 4. `max_depth` bounds both the path length and the recursion depth; it is
//!    the only abort mechanism and is always enforced
//!
//! Negative outcomes (dead end, depth exceeded, no qualifying closure) all
//! collapse into `None`; none of them is an error.

use crate::graph::TransactionGraph;
use crate::models::transaction::TransactionRecord;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;

/// Default bound on path length (hops) and recursion depth
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Depth-first searcher for round-trip transaction paths
#[derive(Debug, Clone)]
pub struct CycleTracer {
    /// Maximum path length explored before a branch is abandoned
    max_depth: usize,
}

impl CycleTracer {
    /// Create a tracer with an explicit depth bound
    ///
    /// # Panics
    /// Panics if `max_depth` is zero.
    pub fn new(max_depth: usize) -> Self {
        assert!(max_depth > 0, "max_depth must be positive");
        Self { max_depth }
    }

    /// Configured depth bound
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Attempt to extend `path` into a cycle closing on `start_account`
    ///
    /// Preconditions: `path` is non-empty, ends with the transaction that
    /// set `last_date`/`last_time`, and `start_amount` is the amount of the
    /// very first transaction in `path`. `visited` holds the accounts
    /// already used as intermediate nodes on the path.
    ///
    /// Returns the extended path on the first qualifying closure, or `None`
    /// when no branch from here closes a cycle.
    #[allow(clippy::too_many_arguments)]
    pub fn trace(
        &self,
        graph: &TransactionGraph,
        current_account: &str,
        start_account: &str,
        start_amount: i64,
        visited: &HashSet<String>,
        path: &[TransactionRecord],
        last_date: NaiveDate,
        last_time: NaiveTime,
    ) -> Option<Vec<TransactionRecord>> {
        debug_assert!(!path.is_empty(), "path must contain the seed transaction");

        // Dead end: the account never sends anything onward.
        let outgoing = graph.outgoing(current_account)?;

        // Safety valve against runaway recursion on pathological graphs.
        if path.len() > self.max_depth {
            return None;
        }

        for candidate in outgoing {
            // Funds can only move forward in time.
            if !candidate.is_strictly_after(last_date, last_time) {
                continue;
            }

            let receiver = candidate.receiver_account();

            // No sub-loops: skip receivers already used as intermediates.
            // The start account is exempt so the closing hop stays legal.
            if receiver != start_account && visited.contains(receiver) {
                continue;
            }

            let mut extended = path.to_vec();
            extended.push(candidate.clone());

            if receiver == start_account && extended.len() > 2 {
                if within_tolerance(start_amount, candidate.amount()) {
                    // First qualifying closure wins.
                    return Some(extended);
                }
                // Structurally closing but outside the band: discard the
                // candidate outright, do not recurse through the start.
                continue;
            }

            let mut branch_visited = visited.clone();
            branch_visited.insert(current_account.to_string());

            if let Some(found) = self.trace(
                graph,
                receiver,
                start_account,
                start_amount,
                &branch_visited,
                &extended,
                candidate.date(),
                candidate.time(),
            ) {
                return Some(found);
            }
        }

        None
    }
}

impl Default for CycleTracer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Inclusive ±20% band around the seed amount
///
/// Evaluated exactly in integer arithmetic: `amount` is in band iff
/// `5 * amount` lies within `[4 * start, 6 * start]`.
fn within_tolerance(start_amount: i64, amount: i64) -> bool {
    let scaled = amount as i128 * 5;
    scaled >= start_amount as i128 * 4 && scaled <= start_amount as i128 * 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_band_inclusive() {
        assert!(within_tolerance(100_000, 80_000));
        assert!(within_tolerance(100_000, 100_000));
        assert!(within_tolerance(100_000, 120_000));
        assert!(!within_tolerance(100_000, 79_999));
        assert!(!within_tolerance(100_000, 120_001));
    }

    #[test]
    fn test_tolerance_band_odd_amounts() {
        // 0.8 * 101 = 80.8 cents: 80 is below the band, 81 is inside.
        assert!(!within_tolerance(101, 80));
        assert!(within_tolerance(101, 81));
        // 1.2 * 101 = 121.2 cents: 121 is inside, 122 is above.
        assert!(within_tolerance(101, 121));
        assert!(!within_tolerance(101, 122));
    }

    #[test]
    #[should_panic(expected = "max_depth must be positive")]
    fn test_zero_max_depth_panics() {
        CycleTracer::new(0);
    }
}
