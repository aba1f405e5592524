// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use crate::{
	ast::Ast,
	expr::Expression,
	into::IntoExpression,
	kind::{Date, Integer, Number, NumberKind},
};

impl<K: NumberKind> Expression<K> {
	fn arithmetic(self, name: &'static str, other: Expression<K>) -> Expression<K> {
		Expression::new(Ast::call(name, [self.ast, other.ast]))
	}

	pub fn add(self, other: impl IntoExpression<K>) -> Expression<K> {
		self.arithmetic("$add", other.into_expression())
	}

	pub fn subtract(self, other: impl IntoExpression<K>) -> Expression<K> {
		self.arithmetic("$subtract", other.into_expression())
	}

	pub fn multiply(self, other: impl IntoExpression<K>) -> Expression<K> {
		self.arithmetic("$multiply", other.into_expression())
	}

	pub fn min(self, other: impl IntoExpression<K>) -> Expression<K> {
		self.arithmetic("$min", other.into_expression())
	}

	pub fn max(self, other: impl IntoExpression<K>) -> Expression<K> {
		self.arithmetic("$max", other.into_expression())
	}

	pub fn abs(self) -> Expression<K> {
		Expression::new(Ast::unary("$abs", self.ast))
	}

	/// Rounds to the nearest whole value.
	pub fn round(self) -> Expression<Integer> {
		Expression::new(Ast::unary("$round", self.ast))
	}

	/// Rounds to `place` decimal places.
	pub fn round_to(self, place: impl IntoExpression<Integer>) -> Expression<Number> {
		Expression::new(Ast::call("$round", [self.ast, place.into_expression().ast]))
	}

	/// Division always yields a [`Number`], even for two integer
	/// operands: the result is not truncated.
	pub fn divide(self, other: impl IntoExpression<Number>) -> Expression<Number> {
		Expression::new(Ast::call("$divide", [self.ast, other.into_expression().ast]))
	}
}

impl Expression<Integer> {
	/// Interprets this integer as milliseconds since the Unix epoch.
	pub fn milliseconds_as_date(self) -> Expression<Date> {
		Expression::new(Ast::unary("$toDate", self.ast))
	}
}

#[cfg(test)]
mod tests {
	use aggex_ir::{Environment, Node};

	use crate::values::{float64, int32};

	#[test]
	fn test_add_keeps_operand_order() {
		let env = Environment::standard();
		let node = int32(2).add(1).lower(&env);
		assert_eq!(node, Node::operator("$add", Node::sequence([Node::int32(2), Node::int32(1)])));
	}

	#[test]
	fn test_integer_widens_into_number_argument() {
		let env = Environment::standard();
		let node = float64(1.5).add(int32(1)).lower(&env);
		assert_eq!(node, Node::operator("$add", Node::sequence([Node::float64(1.5), Node::int32(1)])));
	}

	#[test]
	fn test_divide_takes_integer_operands() {
		let env = Environment::standard();
		// declared Number: no truncating integer division exists
		let node = int32(1).divide(2).lower(&env);
		assert_eq!(node, Node::operator("$divide", Node::sequence([Node::int32(1), Node::int32(2)])));
	}

	#[test]
	fn test_round_is_plain_unary() {
		let env = Environment::standard();
		assert_eq!(int32(1).round().lower(&env), Node::operator("$round", Node::int32(1)));
	}
}
