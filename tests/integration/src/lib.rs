//! Integration test utilities for the club site API
//!
//! Spawns the full API on a local port over a real database, with a fake
//! auth provider and in-memory object storage, and mints access tokens the
//! way the hosted auth service would.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
