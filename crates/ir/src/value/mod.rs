// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};

mod decimal;
mod display;
mod literal;
mod mapping;
mod ordered_f64;
mod timestamp;

pub use decimal::Decimal;
pub use literal::{Literal, LiteralKind};
pub use mapping::Mapping;
pub use ordered_f64::{OrderedF64, OrderedFloatError};
pub use timestamp::Timestamp;

/// The sigil that marks a mapping key as an operator invocation.
pub const OPERATOR_SIGIL: char = '$';

/// A node of the intermediate representation consumed by the remote
/// aggregation engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
	/// The null scalar.
	Null,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte signed integer
	Int32(i32),
	/// An 8-byte signed integer
	Int64(i64),
	/// An 8-byte floating point with a total order
	Float64(OrderedF64),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A UTC instant with millisecond precision
	Timestamp(Timestamp),
	/// An ordered list of nodes
	Sequence(Vec<Node>),
	/// An ordered mapping with unique keys
	Mapping(Mapping),
}

impl Node {
	pub fn null() -> Self {
		Node::Null
	}

	pub fn boolean(v: impl Into<bool>) -> Self {
		Node::Boolean(v.into())
	}

	pub fn int32(v: impl Into<i32>) -> Self {
		Node::Int32(v.into())
	}

	pub fn int64(v: impl Into<i64>) -> Self {
		Node::Int64(v.into())
	}

	/// # Panics
	///
	/// Panics if `v` is NaN, which has no total-ordered representation.
	pub fn float64(v: f64) -> Self {
		match OrderedF64::try_from(v) {
			Ok(v) => Node::Float64(v),
			Err(err) => panic!("{err}"),
		}
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Node::Decimal(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Node::Utf8(v.into())
	}

	pub fn timestamp(v: impl Into<Timestamp>) -> Self {
		Node::Timestamp(v.into())
	}

	pub fn sequence(items: impl IntoIterator<Item = Node>) -> Self {
		Node::Sequence(items.into_iter().collect())
	}

	pub fn mapping(v: impl Into<Mapping>) -> Self {
		Node::Mapping(v.into())
	}

	/// Builds the operator form `{name: arg}`.
	///
	/// The name must carry the operator sigil; anything else would be
	/// indistinguishable from a data mapping.
	pub fn operator(name: impl Into<String>, arg: Node) -> Self {
		let name = name.into();
		debug_assert!(name.starts_with(OPERATOR_SIGIL), "operator key without sigil: {name}");
		let mut mapping = Mapping::new();
		mapping.set(name, arg);
		Node::Mapping(mapping)
	}

	/// Escapes a node that must be taken verbatim by the engine, even if
	/// it looks like an operator invocation.
	pub fn literal(node: Node) -> Self {
		Node::operator("$literal", node)
	}

	/// Returns the operator name and argument if this node is an
	/// operator form.
	pub fn as_operator(&self) -> Option<(&str, &Node)> {
		match self {
			Node::Mapping(mapping) if mapping.len() == 1 => {
				let (key, arg) = mapping.iter().next()?;
				if key.starts_with(OPERATOR_SIGIL) {
					Some((key, arg))
				} else {
					None
				}
			}
			_ => None,
		}
	}

	pub fn is_operator_form(&self) -> bool {
		self.as_operator().is_some()
	}
}
