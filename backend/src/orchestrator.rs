//! Detection run orchestration
//!
//! Drives the tracer over every candidate starting account exactly once, in
//! the graph's insertion order, and collects the cycles it finds.
//!
//! # Critical Invariants
//!
//! 1. Every sender is seeded at most once; an account is marked discovered
//!    the moment it is considered, even when its search fails
//! 2. Every sender appearing in a found cycle is marked discovered, so
//!    overlapping cycles are not re-detected from a different start
//! 3. The pass is strictly sequential: the DiscoveredSet makes later seeds
//!    depend on earlier finds, so iteration order is part of the result
//!
//! # Example
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use roundtrip_detector_core::{CycleTracer, Orchestrator, TransactionGraph, TransactionRecord};
//!
//! fn tx(day: u32, from: &str, to: &str, amount: i64) -> TransactionRecord {
//!     TransactionRecord::new(
//!         NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
//!         NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!         from.to_string(),
//!         to.to_string(),
//!         amount,
//!     )
//! }
//!
//! let graph = TransactionGraph::from_records(vec![
//!     tx(1, "A", "B", 100_000),
//!     tx(2, "B", "C", 95_000),
//!     tx(3, "C", "A", 110_000), // closes within ±20% of 100_000
//! ]);
//!
//! let cycles = Orchestrator::new(CycleTracer::default()).detect(&graph);
//! assert_eq!(cycles.len(), 1);
//! assert_eq!(cycles[0].hop_count(), 3);
//! assert_eq!(cycles[0].start_account(), "A");
//! ```

use crate::graph::TransactionGraph;
use crate::models::cycle::Cycle;
use crate::tracer::CycleTracer;
use std::collections::HashSet;
use tracing::info;

/// Multi-start detection run over a read-only graph
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    tracer: CycleTracer,
}

impl Orchestrator {
    /// Create an orchestrator around a configured tracer
    pub fn new(tracer: CycleTracer) -> Self {
        Self { tracer }
    }

    /// The tracer driving this run
    pub fn tracer(&self) -> &CycleTracer {
        &self.tracer
    }

    /// Run detection with a fresh DiscoveredSet
    ///
    /// Returns the detected cycles in discovery order.
    pub fn detect(&self, graph: &TransactionGraph) -> Vec<Cycle> {
        let mut discovered = HashSet::new();
        self.detect_with(graph, &mut discovered)
    }

    /// Run detection threading an explicit DiscoveredSet
    ///
    /// Accounts already in `discovered` are never seeded. The set grows
    /// monotonically: every seeded account and every sender appearing in a
    /// found cycle is added.
    pub fn detect_with(
        &self,
        graph: &TransactionGraph,
        discovered: &mut HashSet<String>,
    ) -> Vec<Cycle> {
        let mut cycles = Vec::new();

        for account in graph.senders() {
            if discovered.contains(account) {
                continue;
            }
            // Marked immediately: a failed search is not retried.
            discovered.insert(account.to_string());

            let outgoing = match graph.outgoing(account) {
                Some(sequence) if !sequence.is_empty() => sequence,
                _ => continue,
            };

            // Seed with the account's earliest outgoing transaction.
            let seed = &outgoing[0];
            let mut visited = HashSet::new();
            visited.insert(account.to_string());

            let found = self.tracer.trace(
                graph,
                seed.receiver_account(),
                account,
                seed.amount(),
                &visited,
                &[seed.clone()],
                seed.date(),
                seed.time(),
            );

            if let Some(path) = found {
                info!(
                    start_account = %account,
                    hops = path.len(),
                    "cycle found"
                );
                for tx in &path {
                    discovered.insert(tx.sender_account().to_string());
                }
                cycles.push(Cycle::new(path));
            }
        }

        cycles
    }
}
