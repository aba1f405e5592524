// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use aggex_ir::Node;

use crate::{
	ast::Ast,
	expr::Expression,
	into::IntoExpression,
	kind::{Date, Integer, Utf8},
};

impl Expression<Utf8> {
	pub fn to_lower(self) -> Expression<Utf8> {
		Expression::new(Ast::unary("$toLower", self.ast))
	}

	pub fn to_upper(self) -> Expression<Utf8> {
		Expression::new(Ast::unary("$toUpper", self.ast))
	}

	pub fn append(self, other: impl IntoExpression<Utf8>) -> Expression<Utf8> {
		Expression::new(Ast::call("$concat", [self.ast, other.into_expression().ast]))
	}

	/// Length in code points. [`length_bytes`](Self::length_bytes) counts
	/// UTF-8 bytes instead; the two differ for non-ASCII text, which is
	/// why they are separate operators rather than a flag.
	pub fn length(self) -> Expression<Integer> {
		Expression::new(Ast::unary("$strLenCP", self.ast))
	}

	/// Length in UTF-8 bytes.
	pub fn length_bytes(self) -> Expression<Integer> {
		Expression::new(Ast::unary("$strLenBytes", self.ast))
	}

	/// Substring by code-point offsets.
	pub fn substr(
		self,
		start: impl IntoExpression<Integer>,
		length: impl IntoExpression<Integer>,
	) -> Expression<Utf8> {
		Expression::new(Ast::call("$substrCP", [
			self.ast,
			start.into_expression().ast,
			length.into_expression().ast,
		]))
	}

	/// Substring by byte offsets.
	pub fn substr_bytes(
		self,
		start: impl IntoExpression<Integer>,
		length: impl IntoExpression<Integer>,
	) -> Expression<Utf8> {
		Expression::new(Ast::call("$substrBytes", [
			self.ast,
			start.into_expression().ast,
			length.into_expression().ast,
		]))
	}

	/// Parses this string as an integer. The conversion narrows to the
	/// 4-byte representation where the value fits and keeps the 8-byte
	/// one otherwise.
	pub fn parse_integer(self) -> Expression<Integer> {
		let as_long = Ast::unary("$toLong", self.ast.clone());
		Expression::new(Ast::form("$convert", [
			("input", self.ast),
			("onError", as_long),
			("to", Ast::Node(Node::utf8("int"))),
		]))
	}

	pub fn parse_date(self) -> Expression<Date> {
		Expression::new(Ast::form("$dateFromString", [("dateString", self.ast)]))
	}

	pub fn parse_date_with_format(self, format: impl IntoExpression<Utf8>) -> Expression<Date> {
		Expression::new(Ast::form("$dateFromString", [
			("dateString", self.ast),
			("format", format.into_expression().ast),
		]))
	}

	pub fn parse_date_with_timezone(
		self,
		timezone: impl IntoExpression<Utf8>,
		format: impl IntoExpression<Utf8>,
	) -> Expression<Date> {
		Expression::new(Ast::form("$dateFromString", [
			("dateString", self.ast),
			("format", format.into_expression().ast),
			("timezone", timezone.into_expression().ast),
		]))
	}
}

#[cfg(test)]
mod tests {
	use aggex_ir::{Environment, Mapping, Node};

	use crate::values::utf8;

	#[test]
	fn test_code_point_and_byte_length_are_distinct_operators() {
		let env = Environment::standard();
		let by_points = utf8("寿司").length().lower(&env);
		let by_bytes = utf8("寿司").length_bytes().lower(&env);
		assert_eq!(by_points, Node::operator("$strLenCP", Node::utf8("寿司")));
		assert_eq!(by_bytes, Node::operator("$strLenBytes", Node::utf8("寿司")));
		assert_ne!(by_points, by_bytes);
	}

	#[test]
	fn test_parse_integer_falls_back_to_long() {
		let env = Environment::standard();
		let expected = Node::operator(
			"$convert",
			Node::Mapping(Mapping::from_iter([
				("input", Node::utf8("5")),
				("onError", Node::operator("$toLong", Node::utf8("5"))),
				("to", Node::utf8("int")),
			])),
		);
		assert_eq!(utf8("5").parse_integer().lower(&env), expected);
	}
}
