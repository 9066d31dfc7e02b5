//! Slot storage and binary record layout for ChirpDB
//!
//! This crate owns the two storage-layer concerns:
//! - `layout`: the stable binary encoding of a record (a contract
//!   surface, since query filters may address into it by byte offset)
//! - `SlotStore`: identifier-keyed slots with first-writer-wins
//!   allocation and snapshot reads

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod layout;
mod slots;
mod snapshot;

pub use slots::SlotStore;
pub use snapshot::SlotSnapshot;
