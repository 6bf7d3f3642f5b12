use ptl_records::AppendEngine;
use ptl_state::StateStore;
use tracing::{debug, warn};

use crate::config::DispatchConfig;
use crate::error::{DispatchError, DispatchResult};
use crate::operation::{Invocation, Query};

/// The three entry points a host calls.
///
/// Mutating calls go through `init`/`invoke`; `query` never writes. The host
/// is responsible for splitting arguments, authenticating callers, and
/// ordering mutating calls.
pub trait Contract: Send + Sync {
    /// Bootstrap call made once by the host when the contract is deployed.
    fn init(&self, args: &[String]) -> DispatchResult<Vec<u8>>;

    /// Run a mutating operation.
    fn invoke(&self, operation: &str, args: &[String]) -> DispatchResult<Vec<u8>>;

    /// Run a read-only operation.
    fn query(&self, operation: &str, args: &[String]) -> DispatchResult<Vec<u8>>;
}

/// Routes named operations to the append engine or the raw state store.
pub struct Dispatcher<S> {
    engine: AppendEngine<S>,
    config: DispatchConfig,
}

impl<S: StateStore> Dispatcher<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, DispatchConfig::default())
    }

    pub fn with_config(store: S, config: DispatchConfig) -> Self {
        Self {
            engine: AppendEngine::new(store),
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// The injected state store.
    pub fn store(&self) -> &S {
        self.engine.store()
    }

    /// The append engine, for hosts that want decoded collections.
    pub fn engine(&self) -> &AppendEngine<S> {
        &self.engine
    }

    /// Execute an already-parsed mutating call.
    pub fn execute(&self, call: Invocation) -> DispatchResult<Vec<u8>> {
        match call {
            Invocation::Init { value } => {
                self.store().put(&self.config.bootstrap_key, value.as_bytes())?;
                debug!(key = %self.config.bootstrap_key, "bootstrap value written");
            }
            Invocation::Write { product_id, entry } => {
                self.engine.append(&product_id, entry)?;
            }
        }
        Ok(Vec::new())
    }

    /// Execute an already-parsed read-only call.
    pub fn evaluate(&self, query: Query) -> DispatchResult<Vec<u8>> {
        match query {
            Query::Read { product_id } => {
                let value = self.store().get(&product_id)?;
                debug!(key = %product_id, found = value.is_some(), "read");
                Ok(value.unwrap_or_default())
            }
        }
    }
}

impl<S: StateStore> Contract for Dispatcher<S> {
    fn init(&self, args: &[String]) -> DispatchResult<Vec<u8>> {
        self.invoke("init", args)
    }

    fn invoke(&self, operation: &str, args: &[String]) -> DispatchResult<Vec<u8>> {
        debug!(operation, args = args.len(), "invoke");
        let call = Invocation::parse(operation, args).inspect_err(log_rejection)?;
        self.execute(call)
    }

    fn query(&self, operation: &str, args: &[String]) -> DispatchResult<Vec<u8>> {
        debug!(operation, args = args.len(), "query");
        let query = Query::parse(operation, args).inspect_err(log_rejection)?;
        self.evaluate(query)
    }
}

fn log_rejection(e: &DispatchError) {
    if let DispatchError::UnknownOperation { namespace, name } = e {
        warn!(%namespace, operation = %name, "no such operation");
    }
}

impl<S> std::fmt::Debug for Dispatcher<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
