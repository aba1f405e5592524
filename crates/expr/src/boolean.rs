// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use crate::{
	ast::Ast,
	expr::Expression,
	into::IntoExpression,
	kind::{Boolean, Kind},
};

impl Expression<Boolean> {
	pub fn not(self) -> Expression<Boolean> {
		Expression::new(Ast::unary("$not", self.ast))
	}

	pub fn or(self, other: impl IntoExpression<Boolean>) -> Expression<Boolean> {
		Expression::new(Ast::call("$or", [self.ast, other.into_expression().ast]))
	}

	pub fn and(self, other: impl IntoExpression<Boolean>) -> Expression<Boolean> {
		Expression::new(Ast::call("$and", [self.ast, other.into_expression().ast]))
	}

	/// Ternary dispatch: `if_true` when this condition holds, `if_false`
	/// otherwise.
	pub fn cond<R: Kind>(
		self,
		if_true: impl IntoExpression<R>,
		if_false: impl IntoExpression<R>,
	) -> Expression<R> {
		Expression::new(Ast::call("$cond", [
			self.ast,
			if_true.into_expression().ast,
			if_false.into_expression().ast,
		]))
	}
}
