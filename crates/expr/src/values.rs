// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Literal constructors.
//!
//! Scalar literals are carried as host values and encoded through the
//! serialization environment at lowering time. There is no constructor
//! accepting an absent value: the only way to produce the engine's null is
//! the explicit [`null`] constructor.

use aggex_ir::{Decimal, Literal, Mapping, Node, OrderedF64, Timestamp, OPERATOR_SIGIL};

use crate::{
	ast::{self, Ast},
	expr::Expression,
	into::IntoExpression,
	kind::{Array, Boolean, Date, Document, Entry, Integer, Kind, Map, Number, Utf8, Value},
};

fn constant<K: Kind>(literal: Literal) -> Expression<K> {
	Expression::new(Ast::Constant(literal))
}

pub fn boolean(value: bool) -> Expression<Boolean> {
	constant(Literal::Boolean(value))
}

pub fn int32(value: i32) -> Expression<Integer> {
	constant(Literal::Int32(value))
}

pub fn int64(value: i64) -> Expression<Integer> {
	constant(Literal::Int64(value))
}

/// # Panics
///
/// Panics if `value` is NaN: an accidental non-value must surface where the
/// literal is built, not as a silently wrong IR node.
pub fn float64(value: f64) -> Expression<Number> {
	match OrderedF64::try_from(value) {
		Ok(value) => constant(Literal::Float64(value)),
		Err(err) => panic!("float literal: {err}"),
	}
}

pub fn decimal(value: Decimal) -> Expression<Number> {
	constant(Literal::Decimal(value))
}

pub fn utf8(value: impl Into<String>) -> Expression<Utf8> {
	let value = value.into();
	if value.contains(OPERATOR_SIGIL) {
		// a `$` would be read as a variable or operator reference
		Expression::new(Ast::Node(Node::literal(Node::Utf8(value))))
	} else {
		constant(Literal::Utf8(value))
	}
}

pub fn date(value: Timestamp) -> Expression<Date> {
	constant(Literal::Timestamp(value))
}

/// The engine's null. Null belongs to no concrete kind; prefer the
/// defaulting accessors over comparing against it.
pub fn null() -> Expression<Value> {
	constant(Literal::Null)
}

/// The missing marker: what field access yields for an absent field.
/// Matches no type test and is not equal to null.
pub(crate) fn missing<K: Kind>() -> Expression<K> {
	Expression::variable(ast::MISSING)
}

pub fn array<T: Kind>(items: impl IntoIterator<Item = Expression<T>>) -> Expression<Array<T>> {
	Expression::new(Ast::Seq(items.into_iter().map(|item| item.ast).collect()))
}

pub fn boolean_array(values: impl IntoIterator<Item = bool>) -> Expression<Array<Boolean>> {
	array(values.into_iter().map(boolean))
}

pub fn int32_array(values: impl IntoIterator<Item = i32>) -> Expression<Array<Integer>> {
	array(values.into_iter().map(int32))
}

pub fn int64_array(values: impl IntoIterator<Item = i64>) -> Expression<Array<Integer>> {
	array(values.into_iter().map(int64))
}

/// # Panics
///
/// Panics if any element is NaN, as [`float64`] does.
pub fn float64_array(values: impl IntoIterator<Item = f64>) -> Expression<Array<Number>> {
	array(values.into_iter().map(float64))
}

pub fn utf8_array<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Expression<Array<Utf8>> {
	array(values.into_iter().map(utf8))
}

pub fn date_array(values: impl IntoIterator<Item = Timestamp>) -> Expression<Array<Date>> {
	array(values.into_iter().map(date))
}

/// A document literal. The mapping is always embedded verbatim under the
/// literal escape, so keys colliding with the operator sigil can never be
/// misread as a computation.
pub fn document(mapping: Mapping) -> Expression<Document> {
	Expression::new(Ast::Node(Node::literal(Node::Mapping(mapping))))
}

/// A map literal. The value kind `V` is an unchecked assertion by the
/// caller, exactly as with the typed field accessors.
pub fn map<V: Kind>(mapping: Mapping) -> Expression<Map<V>> {
	Expression::new(Ast::Node(Node::literal(Node::Mapping(mapping))))
}

pub fn empty_map<V: Kind>() -> Expression<Map<V>> {
	map(Mapping::new())
}

/// A `{k, v}` map entry.
pub fn entry<V: Kind>(key: impl IntoExpression<Utf8>, value: impl IntoExpression<V>) -> Expression<Entry<V>> {
	Expression::new(Ast::Doc(vec![
		("k", key.into_expression().ast),
		("v", value.into_expression().ast),
	]))
}

/// The top-level document currently being processed by the pipeline stage.
pub fn current() -> Expression<Document> {
	Expression::variable(ast::CURRENT)
}

/// The current document viewed as a map. The value kind `V` is an
/// unchecked assertion by the caller.
pub fn current_as_map<V: Kind>() -> Expression<Map<V>> {
	Expression::variable(ast::CURRENT)
}

#[cfg(test)]
mod tests {
	use aggex_ir::Environment;

	use super::*;

	#[test]
	fn test_utf8_plain() {
		let env = Environment::standard();
		assert_eq!(utf8("abc").lower(&env), Node::utf8("abc"));
	}

	#[test]
	fn test_utf8_with_sigil_is_escaped() {
		let env = Environment::standard();
		assert_eq!(utf8("$price").lower(&env), Node::literal(Node::utf8("$price")));
		// anywhere in the string, not only leading
		assert_eq!(utf8("us$price").lower(&env), Node::literal(Node::utf8("us$price")));
	}

	#[test]
	fn test_float64_rejects_nan() {
		let result = std::panic::catch_unwind(|| float64(f64::NAN));
		assert!(result.is_err());
	}

	#[test]
	fn test_document_is_literal_escaped() {
		let env = Environment::standard();
		let mapping = Mapping::from_iter([("a", Node::int32(1))]);
		assert_eq!(document(mapping.clone()).lower(&env), Node::literal(Node::Mapping(mapping)));
	}

	#[test]
	fn test_entry_shape() {
		let env = Environment::standard();
		let expected = Node::Mapping(Mapping::from_iter([("k", Node::utf8("a")), ("v", Node::int32(1))]));
		let pair: Expression<Entry<Integer>> = entry(utf8("a"), int32(1));
		assert_eq!(pair.lower(&env), expected);
	}

	#[test]
	fn test_current_reference() {
		let env = Environment::standard();
		assert_eq!(current().lower(&env), Node::utf8("$$CURRENT"));
	}
}
