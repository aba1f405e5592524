// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt,
	fmt::{Debug, Formatter},
	marker::PhantomData,
};

use aggex_ir::{Environment, Node};
use tracing::instrument;

use crate::{
	ast::Ast,
	branch::{Branches, IntoSwitch},
	into::IntoExpression,
	kind::{Array, Boolean, Date, Document, Integer, Kind, Map, Number, Utf8, Value},
	values,
};

/// A deferred, immutable expression value of kind `K`.
///
/// Combinators never lower their operands; they return a new expression
/// whose lowering, when invoked, lowers the operands recursively and
/// assembles the parent operator form. Lowering the same tree twice against
/// the same environment yields structurally equal nodes.
pub struct Expression<K: Kind> {
	pub(crate) ast: Ast,
	kind: PhantomData<K>,
}

impl<K: Kind> Clone for Expression<K> {
	fn clone(&self) -> Self {
		Self::new(self.ast.clone())
	}
}

impl<K: Kind> Debug for Expression<K> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Expression").field("ast", &self.ast).finish()
	}
}

impl<K: Kind> Expression<K> {
	pub(crate) fn new(ast: Ast) -> Self {
		Self {
			ast,
			kind: PhantomData,
		}
	}

	pub(crate) fn variable(name: &'static str) -> Self {
		Self::new(Ast::Variable(name))
	}

	/// Reinterprets the declared kind without touching the tree. The new
	/// kind is a caller-side assertion checked only at execution time.
	pub(crate) fn retype<R: Kind>(self) -> Expression<R> {
		Expression::new(self.ast)
	}

	/// Lowers this expression tree into one IR node.
	#[instrument(name = "expr::lower", level = "trace", skip(self, env))]
	pub fn lower(&self, env: &Environment) -> Node {
		self.ast.lower(env)
	}

	/// Treats this value as the untyped top kind.
	pub fn as_value(self) -> Expression<Value> {
		self.retype()
	}

	/// Applies `f` to this value: `v.pass_to(f)` is `f(v)`. Exists purely
	/// to keep externally supplied transformations in a left-to-right
	/// chain; it has no effect on the lowered tree.
	pub fn pass_to<R>(self, f: impl FnOnce(Self) -> R) -> R {
		f(self)
	}

	/// Multi-way dispatch on this value. Branches are evaluated by the
	/// engine in append order; the first matching predicate wins.
	///
	/// Compiling without a default omits the default key: the caller
	/// asserts the branches are exhaustive, and the engine raises an
	/// execution error if none matches.
	pub fn switch_on<R: Kind, B: IntoSwitch<R>>(self, build: impl FnOnce(Branches<K>) -> B) -> Expression<R> {
		crate::branch::compile(self, build)
	}

	fn compare(self, name: &'static str, other: impl IntoExpression<Value>) -> Expression<Boolean> {
		Expression::new(Ast::call(name, [self.ast, other.into_expression().ast]))
	}

	pub fn eq(self, other: impl IntoExpression<Value>) -> Expression<Boolean> {
		self.compare("$eq", other)
	}

	pub fn ne(self, other: impl IntoExpression<Value>) -> Expression<Boolean> {
		self.compare("$ne", other)
	}

	pub fn gt(self, other: impl IntoExpression<Value>) -> Expression<Boolean> {
		self.compare("$gt", other)
	}

	pub fn gte(self, other: impl IntoExpression<Value>) -> Expression<Boolean> {
		self.compare("$gte", other)
	}

	pub fn lt(self, other: impl IntoExpression<Value>) -> Expression<Boolean> {
		self.compare("$lt", other)
	}

	pub fn lte(self, other: impl IntoExpression<Value>) -> Expression<Boolean> {
		self.compare("$lte", other)
	}

	/// Renders this value as a string.
	pub fn as_string(self) -> Expression<Utf8> {
		Expression::new(Ast::unary_wrapped("$toString", self.ast))
	}

	// Type tests. Missing values match none of these.

	pub(crate) fn type_tag(self) -> Expression<Utf8> {
		Expression::new(Ast::unary_wrapped("$type", self.ast))
	}

	pub(crate) fn is_boolean(self) -> Expression<Boolean> {
		self.type_tag().eq(values::utf8("bool"))
	}

	pub(crate) fn is_number(self) -> Expression<Boolean> {
		Expression::new(Ast::unary_wrapped("$isNumber", self.ast))
	}

	// The engine has no single whole-number test: a number is an integer
	// when rounding leaves it unchanged.
	pub(crate) fn is_integer(self) -> Expression<Boolean> {
		self.switch_on(|on| {
			on.is_number(|v| v.clone().round().eq(v)).defaults(|_| values::boolean(false))
		})
	}

	pub(crate) fn is_utf8(self) -> Expression<Boolean> {
		self.type_tag().eq(values::utf8("string"))
	}

	// Membership in the set of date-like type tags.
	pub(crate) fn is_date(self) -> Expression<Boolean> {
		values::utf8_array(["date"]).contains(self.type_tag())
	}

	pub(crate) fn is_array(self) -> Expression<Boolean> {
		Expression::new(Ast::unary_wrapped("$isArray", self.ast))
	}

	// Documents and maps share one runtime shape.
	pub(crate) fn is_document_or_map(self) -> Expression<Boolean> {
		self.type_tag().eq(values::utf8("object"))
	}

	pub(crate) fn is_null(self) -> Expression<Boolean> {
		self.eq(values::null())
	}

	// Defaulting accessors: keep the value when it has the asserted kind,
	// fall back to `other` otherwise.

	pub fn is_boolean_or(self, other: impl IntoExpression<Boolean>) -> Expression<Boolean> {
		self.clone().is_boolean().cond(self.retype::<Boolean>(), other)
	}

	pub fn is_number_or(self, other: impl IntoExpression<Number>) -> Expression<Number> {
		self.clone().is_number().cond(self.retype::<Number>(), other)
	}

	/// Falls back to `other` unless this value is a whole-valued number.
	pub fn is_integer_or(self, other: impl IntoExpression<Integer>) -> Expression<Integer> {
		let other = other.into_expression();
		let fallback = other.clone();
		// $cond over typed literals trips the engine's pipeline
		// optimizer; $switch does not.
		self.switch_on(|on| {
			on.is_number(move |v| {
				v.clone().round().eq(v.clone()).cond(v.retype::<Integer>(), other)
			})
			.defaults(move |_| fallback)
		})
	}

	pub fn is_utf8_or(self, other: impl IntoExpression<Utf8>) -> Expression<Utf8> {
		self.clone().is_utf8().cond(self.retype::<Utf8>(), other)
	}

	pub fn is_date_or(self, other: impl IntoExpression<Date>) -> Expression<Date> {
		self.clone().is_date().cond(self.retype::<Date>(), other)
	}

	/// The array check cannot see element kinds; `E` is an unchecked
	/// assertion by the caller.
	pub fn is_array_or<E: Kind>(self, other: impl IntoExpression<Array<E>>) -> Expression<Array<E>> {
		self.clone().is_array().cond(self.retype::<Array<E>>(), other)
	}

	pub fn is_document_or(self, other: impl IntoExpression<Document>) -> Expression<Document> {
		self.clone().is_document_or_map().cond(self.retype::<Document>(), other)
	}

	/// The object check cannot see value kinds; `V` is an unchecked
	/// assertion by the caller.
	pub fn is_map_or<V: Kind>(self, other: impl IntoExpression<Map<V>>) -> Expression<Map<V>> {
		self.clone().is_document_or_map().cond(self.retype::<Map<V>>(), other)
	}
}
