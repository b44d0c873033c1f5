//! # leo-platform
//!
//! Clients for the hosted backend platform: object storage and password
//! authentication, spoken over its REST API with `reqwest`. Also provides an
//! in-memory [`MemoryStorage`] for dry runs and tests.

pub mod auth;
pub mod client;
pub mod error;
pub mod memory;
pub mod storage;

pub use auth::SupabaseAuth;
pub use client::PlatformClient;
pub use error::{PlatformError, PlatformResult};
pub use memory::MemoryStorage;
pub use storage::SupabaseStorage;
