// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Document-shaped intermediate representation for aggregation expressions.
//!
//! An expression compiled by `aggex-expr` lowers into a single [`Node`]: a
//! scalar, an ordered [`Sequence`](Node::Sequence) or an ordered, unique-key
//! [`Mapping`](Node::Mapping). A mapping whose sole key starts with the
//! reserved [`OPERATOR_SIGIL`] is an operator invocation; everything else is
//! data. Host literals are turned into scalar nodes by an [`Environment`],
//! a registry of [`ScalarCodec`]s owned by the caller.
//!
//! Every type in this crate is an immutable value after construction and is
//! safe to share across threads.

pub mod environment;
pub mod error;
pub mod value;

pub use environment::{Environment, ScalarCodec};
pub use error::{Diagnostic, Error, IntoDiagnostic, IrError, Result};
pub use value::{
	Decimal, Literal, LiteralKind, Mapping, Node, OrderedF64, OrderedFloatError, Timestamp, OPERATOR_SIGIL,
};
