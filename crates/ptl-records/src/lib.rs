//! Record collections for the Product Trace Ledger.
//!
//! Each product key holds one ordered history of [`Entry`] values, stored as
//! a single JSON array in the state substrate. This crate provides:
//! - The [`Entry`] / [`RecordCollection`] model
//! - [`RecordCodec`] for the persisted JSON form
//! - [`AppendEngine`], the read-decode-append-encode-write path

pub mod codec;
pub mod engine;
pub mod entry;
pub mod error;

pub use codec::RecordCodec;
pub use engine::AppendEngine;
pub use entry::{Entry, RecordCollection};
pub use error::{RecordError, RecordResult};
