//! Command execution for runsweep.
//!
//! The cancel command runs in three stages: resolve the target from the
//! positional specifier, query candidate workflow runs, and drive the
//! cancellation batch.

/// Cancellation driver: sorting, the keep-last guard, and the cancel loop.
pub mod cancel;

/// Event/status cross-product querying and run filtering.
pub mod query;

/// Branch and pull-request target resolution.
pub mod target;
