// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Map and entry operators.
//!
//! A map is the homogeneous view over the document shape; its keys are
//! expressions rather than names. Lookup of an absent key yields the
//! missing value, which [`has`](Expression::has) and
//! [`get_or`](Expression::get_or) test for explicitly.

use aggex_ir::Node;

use crate::{
	ast::Ast,
	expr::Expression,
	into::IntoExpression,
	kind::{Array, Boolean, Document, Entry, Kind, Map, Utf8, Value},
	values,
};

impl<V: Kind> Expression<Map<V>> {
	/// Asserts the key holds a value of kind `V`; absent keys yield the
	/// missing value.
	pub fn get(self, key: impl IntoExpression<Utf8>) -> Expression<V> {
		Expression::new(Ast::form("$getField", [
			("input", self.ast),
			("field", key.into_expression().ast),
		]))
	}

	/// Falls back to `other` when the key is absent.
	pub fn get_or(self, key: impl IntoExpression<Utf8>, other: impl IntoExpression<V>) -> Expression<V> {
		let value = self.get(key);
		value.clone().eq(values::missing::<Value>()).cond(other, value)
	}

	pub fn set(self, key: impl IntoExpression<Utf8>, value: impl IntoExpression<V>) -> Expression<Map<V>> {
		Expression::new(Ast::form("$setField", [
			("field", key.into_expression().ast),
			("input", self.ast),
			("value", value.into_expression().ast),
		]))
	}

	pub fn unset(self, key: impl IntoExpression<Utf8>) -> Expression<Map<V>> {
		Expression::new(Ast::form("$unsetField", [
			("field", key.into_expression().ast),
			("input", self.ast),
		]))
	}

	/// Right-biased merge: entries of `other` win on collision.
	pub fn merge(self, other: impl IntoExpression<Map<V>>) -> Expression<Map<V>> {
		Expression::new(Ast::call("$mergeObjects", [self.ast, other.into_expression().ast]))
	}

	/// True when the key is present, even if it holds null.
	pub fn has(self, key: impl IntoExpression<Utf8>) -> Expression<Boolean> {
		self.get(key).ne(values::missing::<Value>())
	}

	/// The `{k, v}` entries of this map, in unspecified order.
	pub fn entries(self) -> Expression<Array<Entry<V>>> {
		Expression::new(Ast::unary("$objectToArray", self.ast))
	}

	/// Views this map as a heterogeneous document.
	pub fn as_document(self) -> Expression<Document> {
		self.retype()
	}
}

impl<V: Kind> Expression<Entry<V>> {
	pub fn key(self) -> Expression<Utf8> {
		self.retype::<Document>().get_utf8("k")
	}

	pub fn value(self) -> Expression<V> {
		self.retype::<Document>().get_field("v").retype()
	}

	pub fn set_key(self, key: impl IntoExpression<Utf8>) -> Expression<Entry<V>> {
		Expression::new(Ast::form("$setField", [
			("field", Ast::Node(Node::utf8("k"))),
			("input", self.ast),
			("value", key.into_expression().ast),
		]))
	}

	pub fn set_value(self, value: impl IntoExpression<V>) -> Expression<Entry<V>> {
		Expression::new(Ast::form("$setField", [
			("field", Ast::Node(Node::utf8("v"))),
			("input", self.ast),
			("value", value.into_expression().ast),
		]))
	}
}

#[cfg(test)]
mod tests {
	use aggex_ir::{Environment, Mapping, Node};

	use crate::{
		kind::{Integer, Map},
		values::{current_as_map, int32, utf8},
		Expression,
	};

	#[test]
	fn test_get_or_guards_against_missing() {
		let env = Environment::standard();
		let lookup = Node::operator(
			"$getField",
			Node::Mapping(Mapping::from_iter([
				("input", Node::utf8("$$CURRENT")),
				("field", Node::utf8("a")),
			])),
		);
		let map: Expression<Map<Integer>> = current_as_map();
		let node = map.get_or(utf8("a"), int32(0)).lower(&env);
		let expected = Node::operator(
			"$cond",
			Node::sequence([
				Node::operator("$eq", Node::sequence([lookup.clone(), Node::utf8("$$REMOVE")])),
				Node::int32(0),
				lookup,
			]),
		);
		assert_eq!(node, expected);
	}

	#[test]
	fn test_has_compares_against_missing() {
		let env = Environment::standard();
		let map: Expression<Map<Integer>> = current_as_map();
		let node = map.has(utf8("a")).lower(&env);
		let lookup = Node::operator(
			"$getField",
			Node::Mapping(Mapping::from_iter([
				("input", Node::utf8("$$CURRENT")),
				("field", Node::utf8("a")),
			])),
		);
		assert_eq!(node, Node::operator("$ne", Node::sequence([lookup, Node::utf8("$$REMOVE")])));
	}

	#[test]
	fn test_entries_is_plain_unary() {
		let env = Environment::standard();
		let map: Expression<Map<Integer>> = current_as_map();
		let node = map.entries().lower(&env);
		assert_eq!(node, Node::operator("$objectToArray", Node::utf8("$$CURRENT")));
	}
}
