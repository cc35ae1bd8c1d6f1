//! `barkeep-sync`
//!
//! **Responsibility:** hand saved records to the external collaborator that
//! owns persistence.
//!
//! The managers call a [`SyncSink`] synchronously after a local save. The sink
//! is fire-and-forget: ID collisions, storage failures and propagation to other
//! clients are its concern and are never reported back into a form.

pub mod action;
pub mod sink;

pub use action::{SAVE_PRODUCT_SHEET, SAVE_RECIPE, SyncAction};
pub use sink::{RecordingSyncSink, SyncSink};
