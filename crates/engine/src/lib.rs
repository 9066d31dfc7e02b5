//! Record store and query engine for ChirpDB
//!
//! Two facades over a shared slot backend:
//! - [`RecordStore`]: validated, append-only record creation
//! - [`QueryEngine`]: predicate-filtered scans
//!
//! Both are stateless handles; all state lives in the slot storage they
//! share.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod query;
mod store;

pub use config::StoreOptions;
pub use query::{MemcmpFilter, Predicate, QueryEngine};
pub use store::RecordStore;
