//! Parcel record storage on top of SQLite.
//!
//! # Intention
//!
//! - Provide a small data-access layer for tracked parcels.
//! - Encapsulate SQLite-specific logic, types, and error handling.
//!
//! # Architectural Boundaries
//!
//! - Only parcel persistence belongs here.
//! - Opening and closing the connection is the caller's business;
//!   [`TrackerConfig`] is a convenience, not a requirement.
//! - No status workflow is enforced. Callers own valid transitions.

pub mod config;
pub mod error;
pub mod parcel;
pub mod schema;
pub mod store;

pub use config::TrackerConfig;
pub use error::{Result, StoreError};
pub use parcel::{Parcel, ParcelStatus};
pub use store::ParcelStore;
