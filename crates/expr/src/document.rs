// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Document operators.
//!
//! Access to an absent field yields the missing value, which propagates
//! through further field access and matches no type test. The typed
//! accessors assert a kind the engine only checks at execution time; the
//! `_or` variants fall back instead of asserting.

use aggex_ir::{Node, OPERATOR_SIGIL};

use crate::{
	ast::Ast,
	expr::Expression,
	into::IntoExpression,
	kind::{Array, Boolean, Date, Document, Integer, Kind, Map, Number, Utf8, Value},
	values,
};

impl Expression<Document> {
	pub(crate) fn field_access(self, name: &str) -> Ast {
		// a leading sigil would be read as an operator or path
		// reference, never as a field that happens to carry one
		let field = if name.starts_with(OPERATOR_SIGIL) {
			Node::literal(Node::utf8(name))
		} else {
			Node::utf8(name)
		};
		Ast::form("$getField", [("input", self.ast), ("field", Ast::Node(field))])
	}

	pub fn get_field(self, name: &str) -> Expression<Value> {
		Expression::new(self.field_access(name))
	}

	/// Asserts the field holds a boolean; the engine checks at execution
	/// time.
	pub fn get_boolean(self, name: &str) -> Expression<Boolean> {
		Expression::new(self.field_access(name))
	}

	pub fn get_boolean_or(self, name: &str, other: impl IntoExpression<Boolean>) -> Expression<Boolean> {
		self.get_boolean(name).is_boolean_or(other)
	}

	/// Asserts the field holds a number.
	pub fn get_number(self, name: &str) -> Expression<Number> {
		Expression::new(self.field_access(name))
	}

	pub fn get_number_or(self, name: &str, other: impl IntoExpression<Number>) -> Expression<Number> {
		self.get_number(name).is_number_or(other)
	}

	/// Asserts the field holds a whole-valued number.
	pub fn get_integer(self, name: &str) -> Expression<Integer> {
		Expression::new(self.field_access(name))
	}

	pub fn get_integer_or(self, name: &str, other: impl IntoExpression<Integer>) -> Expression<Integer> {
		self.get_integer(name).is_integer_or(other)
	}

	/// Asserts the field holds a string.
	pub fn get_utf8(self, name: &str) -> Expression<Utf8> {
		Expression::new(self.field_access(name))
	}

	pub fn get_utf8_or(self, name: &str, other: impl IntoExpression<Utf8>) -> Expression<Utf8> {
		self.get_utf8(name).is_utf8_or(other)
	}

	/// Asserts the field holds a date.
	pub fn get_date(self, name: &str) -> Expression<Date> {
		Expression::new(self.field_access(name))
	}

	pub fn get_date_or(self, name: &str, other: impl IntoExpression<Date>) -> Expression<Date> {
		self.get_date(name).is_date_or(other)
	}

	/// Asserts the field holds a document.
	pub fn get_document(self, name: &str) -> Expression<Document> {
		Expression::new(self.field_access(name))
	}

	pub fn get_document_or(self, name: &str, other: impl IntoExpression<Document>) -> Expression<Document> {
		self.get_document(name).is_document_or(other)
	}

	/// Asserts the field holds an array of kind `E`; both halves of the
	/// claim are unchecked locally.
	pub fn get_array<E: Kind>(self, name: &str) -> Expression<Array<E>> {
		Expression::new(self.field_access(name))
	}

	pub fn get_array_or<E: Kind>(
		self,
		name: &str,
		other: impl IntoExpression<Array<E>>,
	) -> Expression<Array<E>> {
		self.get_array::<E>(name).is_array_or(other)
	}

	/// Asserts the field holds a map with values of kind `V`.
	pub fn get_map<V: Kind>(self, name: &str) -> Expression<Map<V>> {
		Expression::new(self.field_access(name))
	}

	pub fn get_map_or<V: Kind>(self, name: &str, other: impl IntoExpression<Map<V>>) -> Expression<Map<V>> {
		self.get_map::<V>(name).is_map_or(other)
	}

	/// Returns a document with `name` set to `value`; existing fields are
	/// untouched.
	pub fn set_field(self, name: &str, value: impl IntoExpression<Value>) -> Expression<Document> {
		Expression::new(Ast::form("$setField", [
			("field", Ast::Node(Node::utf8(name))),
			("input", self.ast),
			("value", value.into_expression().ast),
		]))
	}

	pub fn unset_field(self, name: &str) -> Expression<Document> {
		Expression::new(Ast::form("$unsetField", [
			("field", Ast::Node(Node::utf8(name))),
			("input", self.ast),
		]))
	}

	/// Right-biased merge: fields of `other` win on collision.
	pub fn merge(self, other: impl IntoExpression<Document>) -> Expression<Document> {
		Expression::new(Ast::call("$mergeObjects", [self.ast, other.into_expression().ast]))
	}

	/// True when the field is present, even if it holds null.
	pub fn has_field(self, name: &str) -> Expression<Boolean> {
		self.as_map::<Value>().has(values::utf8(name))
	}

	/// Views this document as a map. The value kind `V` is an unchecked
	/// assertion by the caller.
	pub fn as_map<V: Kind>(self) -> Expression<Map<V>> {
		self.retype()
	}
}

#[cfg(test)]
mod tests {
	use aggex_ir::{Environment, Mapping, Node};

	use crate::values::current;

	#[test]
	fn test_field_name_with_sigil_is_escaped() {
		let env = Environment::standard();
		let node = current().get_field("$price").lower(&env);
		let expected = Node::operator(
			"$getField",
			Node::Mapping(Mapping::from_iter([
				("input", Node::utf8("$$CURRENT")),
				("field", Node::literal(Node::utf8("$price"))),
			])),
		);
		assert_eq!(node, expected);
	}

	#[test]
	fn test_dotted_name_is_a_single_field() {
		let env = Environment::standard();
		let node = current().get_field("a.b").lower(&env);
		let expected = Node::operator(
			"$getField",
			Node::Mapping(Mapping::from_iter([
				("input", Node::utf8("$$CURRENT")),
				("field", Node::utf8("a.b")),
			])),
		);
		// the punctuation never turns into path traversal
		assert_eq!(node, expected);
	}

	#[test]
	fn test_set_field_shape() {
		let env = Environment::standard();
		let node = current().set_field("r", crate::values::int32(10)).lower(&env);
		let expected = Node::operator(
			"$setField",
			Node::Mapping(Mapping::from_iter([
				("field", Node::utf8("r")),
				("input", Node::utf8("$$CURRENT")),
				("value", Node::int32(10)),
			])),
		);
		assert_eq!(node, expected);
	}
}
