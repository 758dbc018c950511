// src/lib.rs
//! Domain core for a moderated, versioned news item: the edit approval
//! workflow, the per-voter vote ledger, flag records, comment visibility
//! filtering, and the removal state machine, together with the application
//! services that orchestrate them through injected ports.
//!
//! The crate owns no runtime, no transport, and no storage mapping — the
//! persistence port saves the whole aggregate as one unit and the
//! surrounding transaction decides atomicity.

pub mod application;
pub mod domain;
pub mod infrastructure;
