//! Operation dispatcher for the Product Trace Ledger.
//!
//! A host hands the [`Dispatcher`] an operation name and a list of string
//! arguments through one of three entry points ([`Contract`]):
//!
//! - `init` -- store a raw bootstrap value
//! - `invoke` -- mutating operations (`init`, `write`)
//! - `query` -- read-only operations (`read`)
//!
//! Names resolve to [`InvokeOp`] / [`QueryOp`] variants and arity is checked
//! before the state store is touched. Every failure comes back as a
//! [`DispatchError`].

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod operation;

pub use config::{DispatchConfig, DEFAULT_BOOTSTRAP_KEY};
pub use dispatcher::{Contract, Dispatcher};
pub use error::{DispatchError, DispatchResult, ErrorKind};
pub use operation::{InvokeOp, Invocation, Namespace, Query, QueryOp};
