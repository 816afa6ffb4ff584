//! Round-Trip Laundering Detector - Core Engine
//!
//! Detects cyclical money-flow patterns ("round-tripping") in a ledger of
//! timestamped account-to-account transactions, plus the fan-in ("smurfing")
//! aggregation that flags accounts rapidly collecting funds from many
//! distinct senders.
//!
//! # Architecture
//!
//! - **models**: Domain types (TransactionRecord, Cycle)
//! - **graph**: Insertion-ordered sender adjacency (TransactionGraph)
//! - **tracer**: Constrained depth-first cycle search (CycleTracer)
//! - **orchestrator**: Multi-start detection run over every candidate seed
//! - **ingest**: CSV ledger ingestion (fail-fast validation)
//! - **smurfing**: Fan-in aggregation query (no traversal)
//! - **export**: Flattened tabular output for cycles and suspects
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. The transaction graph is read-only once built
//! 3. Detection is deterministic: insertion-order seeding, first-match DFS,
//!    and a single sequential pass over the DiscoveredSet

// Module declarations
pub mod export;
pub mod graph;
pub mod ingest;
pub mod models;
pub mod orchestrator;
pub mod smurfing;
pub mod tracer;

// Re-exports for convenience
pub use export::{
    flatten_cycles, flatten_suspects, format_cents, write_cycles, write_cycles_to_path,
    write_smurfing, write_smurfing_to_path, CycleRow, ExportError, SmurfingRow,
};
pub use graph::TransactionGraph;
pub use ingest::{load_graph, load_records, read_records, IngestError};
pub use models::{cycle::Cycle, transaction::TransactionRecord};
pub use orchestrator::Orchestrator;
pub use smurfing::{detect_smurfing, SmurfingConfig, SmurfingSuspect};
pub use tracer::{CycleTracer, DEFAULT_MAX_DEPTH};
