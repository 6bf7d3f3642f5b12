//! Operation names, arities, and argument binding.
//!
//! Mutating and read-only operations live in separate enums so the two entry
//! points cannot reach each other's handlers. Each variant owns its wire name
//! and the number of arguments it takes.

use std::fmt;

use ptl_records::Entry;

use crate::error::{DispatchError, DispatchResult};

/// Which entry point an operation name was looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Invoke,
    Query,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoke => f.write_str("invoke"),
            Self::Query => f.write_str("query"),
        }
    }
}

/// Operations accepted by `invoke`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvokeOp {
    /// Write the single argument verbatim under the bootstrap key.
    Init,
    /// Append an entry: product id, place id, temperature, timestamp.
    Write,
}

impl InvokeOp {
    pub const ALL: [InvokeOp; 2] = [InvokeOp::Init, InvokeOp::Write];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "init" => Some(Self::Init),
            "write" => Some(Self::Write),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Write => "write",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::Init => 1,
            Self::Write => 4,
        }
    }
}

/// Operations accepted by `query`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryOp {
    /// Return the raw stored value for a product id.
    Read,
}

impl QueryOp {
    pub const ALL: [QueryOp; 1] = [QueryOp::Read];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "read" => Some(Self::Read),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Read => "read",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::Read => 1,
        }
    }
}

/// A mutating call with its arguments bound to named fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Init { value: String },
    Write { product_id: String, entry: Entry },
}

impl Invocation {
    /// Resolve `operation` and bind `args`, checking arity first.
    pub fn parse(operation: &str, args: &[String]) -> DispatchResult<Self> {
        let op = InvokeOp::from_name(operation).ok_or_else(|| DispatchError::UnknownOperation {
            namespace: Namespace::Invoke,
            name: operation.to_owned(),
        })?;
        check_arity(op.name(), op.arity(), args)?;
        Ok(match op {
            InvokeOp::Init => Self::Init {
                value: args[0].clone(),
            },
            InvokeOp::Write => Self::Write {
                product_id: args[0].clone(),
                entry: Entry::new(args[1].clone(), args[2].clone(), args[3].clone()),
            },
        })
    }

    pub fn op(&self) -> InvokeOp {
        match self {
            Self::Init { .. } => InvokeOp::Init,
            Self::Write { .. } => InvokeOp::Write,
        }
    }
}

/// A read-only call with its arguments bound to named fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    Read { product_id: String },
}

impl Query {
    /// Resolve `operation` and bind `args`, checking arity first.
    pub fn parse(operation: &str, args: &[String]) -> DispatchResult<Self> {
        let op = QueryOp::from_name(operation).ok_or_else(|| DispatchError::UnknownOperation {
            namespace: Namespace::Query,
            name: operation.to_owned(),
        })?;
        check_arity(op.name(), op.arity(), args)?;
        Ok(match op {
            QueryOp::Read => Self::Read {
                product_id: args[0].clone(),
            },
        })
    }

    pub fn op(&self) -> QueryOp {
        match self {
            Self::Read { .. } => QueryOp::Read,
        }
    }
}

fn check_arity(operation: &'static str, expected: usize, args: &[String]) -> DispatchResult<()> {
    if args.len() != expected {
        return Err(DispatchError::InvalidArguments {
            operation,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}
