//! Single-key state substrate for the Product Trace Ledger.
//!
//! Everything above this crate sees the world as atomic `get`/`put` on
//! opaque byte values addressed by string keys. Backends implement the
//! [`StateStore`] trait and are injected into the layers that need them.
//!
//! # Backends
//!
//! - [`InMemoryStateStore`] -- `HashMap`-based store for tests and embedding
//! - [`FileStateStore`] -- JSON snapshot file for hosts that restart
//!
//! # Design Rules
//!
//! 1. The store never interprets values.
//! 2. No caching and no retries; failures surface to the caller.
//! 3. A never-written key reads as `None`.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StateError, StateResult};
pub use file::FileStateStore;
pub use memory::InMemoryStateStore;
pub use traits::StateStore;
