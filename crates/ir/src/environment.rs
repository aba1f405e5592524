// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	collections::HashMap,
	fmt,
	fmt::{Debug, Formatter},
	sync::Arc,
};

use crate::value::{Literal, LiteralKind, Node};

/// Encodes host literals of one kind into IR scalars.
///
/// Implementations must be pure: encoding the same literal twice yields
/// structurally equal nodes.
pub trait ScalarCodec: Send + Sync {
	fn encode(&self, literal: &Literal) -> Node;
}

/// The serialization environment: a registry mapping literal kinds to
/// their scalar encoders.
///
/// [`Environment::standard`] covers every kind, so encoding is total; a
/// caller that owns a different wire representation for one kind swaps in
/// its own codec with [`Environment::with_codec`]. The environment is only
/// read during lowering and is safe to share across threads.
#[derive(Clone, Default)]
pub struct Environment {
	overrides: HashMap<LiteralKind, Arc<dyn ScalarCodec>>,
}

struct StandardCodec;

impl ScalarCodec for StandardCodec {
	fn encode(&self, literal: &Literal) -> Node {
		match literal {
			Literal::Null => Node::Null,
			Literal::Boolean(v) => Node::Boolean(*v),
			Literal::Int32(v) => Node::Int32(*v),
			Literal::Int64(v) => Node::Int64(*v),
			Literal::Float64(v) => Node::Float64(*v),
			Literal::Decimal(v) => Node::Decimal(v.clone()),
			Literal::Utf8(v) => Node::Utf8(v.clone()),
			Literal::Timestamp(v) => Node::Timestamp(*v),
		}
	}
}

impl Environment {
	/// An environment holding the standard encoding for every literal
	/// kind.
	pub fn standard() -> Self {
		Self {
			overrides: HashMap::new(),
		}
	}

	/// Replaces the encoder for one literal kind.
	pub fn with_codec(mut self, kind: LiteralKind, codec: Arc<dyn ScalarCodec>) -> Self {
		self.overrides.insert(kind, codec);
		self
	}

	/// Encodes a host literal into an IR scalar.
	pub fn encode(&self, literal: &Literal) -> Node {
		match self.overrides.get(&literal.kind()) {
			Some(codec) => codec.encode(literal),
			None => StandardCodec.encode(literal),
		}
	}
}

impl Debug for Environment {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut overridden: Vec<String> = self.overrides.keys().map(|kind| kind.to_string()).collect();
		overridden.sort();
		f.debug_struct("Environment").field("overrides", &overridden).finish()
	}
}
