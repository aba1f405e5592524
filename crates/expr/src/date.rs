// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use crate::{
	ast::Ast,
	expr::Expression,
	into::IntoExpression,
	kind::{Date, Integer, Utf8},
};

// Calendar fields depend on the timezone, so every accessor takes one
// explicitly; the engine resolves names like "America/New_York" or fixed
// offsets like "+04:45".
impl Expression<Date> {
	fn part(self, name: &'static str, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		Expression::new(Ast::form(name, [
			("date", self.ast),
			("timezone", timezone.into_expression().ast),
		]))
	}

	pub fn year(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$year", timezone)
	}

	pub fn month(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$month", timezone)
	}

	pub fn day_of_month(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$dayOfMonth", timezone)
	}

	/// 1 (Sunday) to 7 (Saturday).
	pub fn day_of_week(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$dayOfWeek", timezone)
	}

	pub fn day_of_year(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$dayOfYear", timezone)
	}

	pub fn hour(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$hour", timezone)
	}

	pub fn minute(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$minute", timezone)
	}

	pub fn second(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$second", timezone)
	}

	pub fn week(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$week", timezone)
	}

	pub fn millisecond(self, timezone: impl IntoExpression<Utf8>) -> Expression<Integer> {
		self.part("$millisecond", timezone)
	}

	/// Formats this date per the engine's format specifiers.
	pub fn format(
		self,
		timezone: impl IntoExpression<Utf8>,
		format: impl IntoExpression<Utf8>,
	) -> Expression<Utf8> {
		Expression::new(Ast::form("$dateToString", [
			("date", self.ast),
			("format", format.into_expression().ast),
			("timezone", timezone.into_expression().ast),
		]))
	}
}

#[cfg(test)]
mod tests {
	use aggex_ir::{Environment, Mapping, Node, Timestamp};

	use crate::values::{date, utf8};

	#[test]
	fn test_part_carries_timezone() {
		let env = Environment::standard();
		let node = date(Timestamp::from_millis(123)).year(utf8("UTC")).lower(&env);
		let expected = Node::operator(
			"$year",
			Node::Mapping(Mapping::from_iter([
				("date", Node::timestamp(Timestamp::from_millis(123))),
				("timezone", Node::utf8("UTC")),
			])),
		);
		assert_eq!(node, expected);
	}
}
