// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! The deferred expression tree.
//!
//! Combinators assemble [`Ast`] values without lowering anything; the tree
//! holds only structural data (no closures, no captured environment), so
//! lowering is pure and repeatable. User-supplied functions are applied
//! eagerly against engine variable references when the combinator runs.

use aggex_ir::{Environment, Literal, Node};

/// The document currently being processed by the pipeline stage.
pub(crate) const CURRENT: &str = "$$CURRENT";

/// The element under iteration inside `$map`, `$filter` and `$reduce`.
pub(crate) const THIS: &str = "$$this";

/// The running accumulator inside `$reduce`.
pub(crate) const ACCUMULATOR: &str = "$$value";

/// The distinguished missing marker: the result of traversing an absent
/// field. Distinct from null and never exposed to callers directly.
pub(crate) const MISSING: &str = "$$REMOVE";

#[derive(Clone, Debug)]
pub(crate) enum Ast {
	/// A host literal, encoded through the environment at lowering time.
	Constant(Literal),
	/// A pre-shaped IR fragment, embedded verbatim.
	Node(Node),
	/// An engine variable reference.
	Variable(&'static str),
	/// Lowers to an ordered sequence.
	Seq(Vec<Ast>),
	/// Lowers to an ordered mapping (operator argument documents).
	Doc(Vec<(&'static str, Ast)>),
	/// Lowers to the operator form `{name: arg}`.
	Op {
		name: &'static str,
		arg: Box<Ast>,
	},
}

impl Ast {
	pub(crate) fn lower(&self, env: &Environment) -> Node {
		match self {
			Ast::Constant(literal) => env.encode(literal),
			Ast::Node(node) => node.clone(),
			Ast::Variable(name) => Node::utf8(*name),
			Ast::Seq(items) => Node::Sequence(items.iter().map(|item| item.lower(env)).collect()),
			Ast::Doc(fields) => {
				Node::Mapping(fields.iter().map(|(key, value)| (*key, value.lower(env))).collect())
			}
			Ast::Op {
				name,
				arg,
			} => Node::operator(*name, arg.lower(env)),
		}
	}

	/// `{name: operand}`
	pub(crate) fn unary(name: &'static str, arg: Ast) -> Ast {
		Ast::Op {
			name,
			arg: Box::new(arg),
		}
	}

	/// `{name: [operand]}`, for the operators where the engine expects
	/// the one-element list form even with a single operand.
	pub(crate) fn unary_wrapped(name: &'static str, arg: Ast) -> Ast {
		Ast::unary(name, Ast::Seq(vec![arg]))
	}

	/// `{name: [operands...]}` in declared operand order.
	pub(crate) fn call(name: &'static str, args: impl IntoIterator<Item = Ast>) -> Ast {
		Ast::unary(name, Ast::Seq(args.into_iter().collect()))
	}

	/// `{name: {field: value, ...}}`
	pub(crate) fn form(name: &'static str, fields: impl IntoIterator<Item = (&'static str, Ast)>) -> Ast {
		Ast::unary(name, Ast::Doc(fields.into_iter().collect()))
	}
}
