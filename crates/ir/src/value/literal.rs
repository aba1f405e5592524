// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use super::{Decimal, OrderedF64, Timestamp};

/// A host-language literal awaiting encoding into an IR scalar.
///
/// Literals are carried unencoded inside expression trees; the
/// [`Environment`](crate::Environment) turns them into [`Node`](crate::Node)
/// scalars at lowering time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Literal {
	Null,
	Boolean(bool),
	Int32(i32),
	Int64(i64),
	Float64(OrderedF64),
	Decimal(Decimal),
	Utf8(String),
	Timestamp(Timestamp),
}

/// The capability kind of a [`Literal`], used as the registry key of the
/// serialization environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralKind {
	Null,
	Boolean,
	Int32,
	Int64,
	Float64,
	Decimal,
	Utf8,
	Timestamp,
}

impl Literal {
	pub fn kind(&self) -> LiteralKind {
		match self {
			Literal::Null => LiteralKind::Null,
			Literal::Boolean(_) => LiteralKind::Boolean,
			Literal::Int32(_) => LiteralKind::Int32,
			Literal::Int64(_) => LiteralKind::Int64,
			Literal::Float64(_) => LiteralKind::Float64,
			Literal::Decimal(_) => LiteralKind::Decimal,
			Literal::Utf8(_) => LiteralKind::Utf8,
			Literal::Timestamp(_) => LiteralKind::Timestamp,
		}
	}
}

impl Display for LiteralKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			LiteralKind::Null => f.write_str("null"),
			LiteralKind::Boolean => f.write_str("boolean"),
			LiteralKind::Int32 => f.write_str("int32"),
			LiteralKind::Int64 => f.write_str("int64"),
			LiteralKind::Float64 => f.write_str("float64"),
			LiteralKind::Decimal => f.write_str("decimal"),
			LiteralKind::Utf8 => f.write_str("utf8"),
			LiteralKind::Timestamp => f.write_str("timestamp"),
		}
	}
}
