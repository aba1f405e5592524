// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use aggex_ir::Timestamp;

use crate::{
	expr::Expression,
	kind::{Array, Boolean, Date, Document, Entry, Integer, Kind, Map, Number, Utf8, Value},
	values,
};

/// Widening conversions into an expression of kind `K`.
///
/// Covers the subkind relation of the lattice (`Integer <: Number`, every
/// concrete kind below [`Value`]) plus host literals, so operator arguments
/// accept plain Rust values: `a.add(1)`, `name.eq("alice")`.
pub trait IntoExpression<K: Kind> {
	fn into_expression(self) -> Expression<K>;
}

impl<K: Kind> IntoExpression<K> for Expression<K> {
	fn into_expression(self) -> Expression<K> {
		self
	}
}

impl IntoExpression<Number> for Expression<Integer> {
	fn into_expression(self) -> Expression<Number> {
		self.retype()
	}
}

// widening of each concrete kind to the top kind

impl IntoExpression<Value> for Expression<Boolean> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

impl IntoExpression<Value> for Expression<Integer> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

impl IntoExpression<Value> for Expression<Number> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

impl IntoExpression<Value> for Expression<Utf8> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

impl IntoExpression<Value> for Expression<Date> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

impl IntoExpression<Value> for Expression<Document> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

impl<T: Kind> IntoExpression<Value> for Expression<Array<T>> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

impl<V: Kind> IntoExpression<Value> for Expression<Map<V>> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

impl<V: Kind> IntoExpression<Value> for Expression<Entry<V>> {
	fn into_expression(self) -> Expression<Value> {
		self.retype()
	}
}

// host literals

impl IntoExpression<Boolean> for bool {
	fn into_expression(self) -> Expression<Boolean> {
		values::boolean(self)
	}
}

impl IntoExpression<Integer> for i32 {
	fn into_expression(self) -> Expression<Integer> {
		values::int32(self)
	}
}

impl IntoExpression<Integer> for i64 {
	fn into_expression(self) -> Expression<Integer> {
		values::int64(self)
	}
}

impl IntoExpression<Number> for i32 {
	fn into_expression(self) -> Expression<Number> {
		values::int32(self).retype()
	}
}

impl IntoExpression<Number> for i64 {
	fn into_expression(self) -> Expression<Number> {
		values::int64(self).retype()
	}
}

impl IntoExpression<Number> for f64 {
	fn into_expression(self) -> Expression<Number> {
		values::float64(self)
	}
}

impl IntoExpression<Utf8> for &str {
	fn into_expression(self) -> Expression<Utf8> {
		values::utf8(self)
	}
}

impl IntoExpression<Utf8> for String {
	fn into_expression(self) -> Expression<Utf8> {
		values::utf8(self)
	}
}

impl IntoExpression<Date> for Timestamp {
	fn into_expression(self) -> Expression<Date> {
		values::date(self)
	}
}

impl IntoExpression<Value> for bool {
	fn into_expression(self) -> Expression<Value> {
		values::boolean(self).retype()
	}
}

impl IntoExpression<Value> for i32 {
	fn into_expression(self) -> Expression<Value> {
		values::int32(self).retype()
	}
}

impl IntoExpression<Value> for i64 {
	fn into_expression(self) -> Expression<Value> {
		values::int64(self).retype()
	}
}

impl IntoExpression<Value> for f64 {
	fn into_expression(self) -> Expression<Value> {
		values::float64(self).retype()
	}
}

impl IntoExpression<Value> for &str {
	fn into_expression(self) -> Expression<Value> {
		values::utf8(self).retype()
	}
}

impl IntoExpression<Value> for String {
	fn into_expression(self) -> Expression<Value> {
		values::utf8(self).retype()
	}
}

impl IntoExpression<Value> for Timestamp {
	fn into_expression(self) -> Expression<Value> {
		values::date(self).retype()
	}
}
