// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Array operators.
//!
//! Every aggregation over an array is a monoid fold: a `$reduce` with an
//! explicit identity and combining operator, built over a `$map`. The
//! identity fixes the empty-array result per fold, so no operator needs a
//! special empty case.

use aggex_ir::Node;

use crate::{
	ast::{self, Ast},
	expr::Expression,
	into::IntoExpression,
	kind::{Array, Boolean, Entry, Integer, Kind, Map, Number, Utf8},
	values,
};

impl<T: Kind> Expression<Array<T>> {
	/// Applies `f` to every element.
	pub fn map<R: Kind>(self, f: impl FnOnce(Expression<T>) -> Expression<R>) -> Expression<Array<R>> {
		let body = f(Expression::variable(ast::THIS));
		Expression::new(Ast::form("$map", [("input", self.ast), ("in", body.ast)]))
	}

	/// Keeps the elements for which `predicate` holds.
	pub fn filter(self, predicate: impl FnOnce(Expression<T>) -> Expression<Boolean>) -> Expression<Array<T>> {
		let cond = predicate(Expression::variable(ast::THIS));
		Expression::new(Ast::form("$filter", [("input", self.ast), ("cond", cond.ast)]))
	}

	/// Ascending sort.
	pub fn sort(self) -> Expression<Array<T>> {
		Expression::new(Ast::form("$sortArray", [
			("input", self.ast),
			("sortBy", Ast::Node(Node::int32(1))),
		]))
	}

	// The fold primitive. `combine` receives (accumulator, element).
	fn reduce(
		self,
		initial: impl IntoExpression<T>,
		combine: impl FnOnce(Expression<T>, Expression<T>) -> Expression<T>,
	) -> Expression<T> {
		let body = combine(Expression::variable(ast::ACCUMULATOR), Expression::variable(ast::THIS));
		Expression::new(Ast::form("$reduce", [
			("input", self.ast),
			("initialValue", initial.into_expression().ast),
			("in", body.ast),
		]))
	}

	/// True when `predicate` holds for at least one element; false over
	/// the empty array.
	pub fn any(self, predicate: impl FnOnce(Expression<T>) -> Expression<Boolean>) -> Expression<Boolean> {
		self.map(predicate).reduce(values::boolean(false), |a, b| a.or(b))
	}

	/// True when `predicate` holds for every element; true over the
	/// empty array.
	pub fn all(self, predicate: impl FnOnce(Expression<T>) -> Expression<Boolean>) -> Expression<Boolean> {
		self.map(predicate).reduce(values::boolean(true), |a, b| a.and(b))
	}

	/// Sum of the mapped elements; 0 over the empty array.
	pub fn sum(self, mapper: impl FnOnce(Expression<T>) -> Expression<Number>) -> Expression<Number> {
		self.map(mapper).reduce(values::int32(0), |a, b| a.add(b))
	}

	/// Product of the mapped elements; 1 over the empty array.
	pub fn multiply(self, mapper: impl FnOnce(Expression<T>) -> Expression<Number>) -> Expression<Number> {
		self.map(mapper).reduce(values::int32(1), |a, b| a.multiply(b))
	}

	/// Concatenation of the mapped strings; "" over the empty array.
	pub fn join_strings(self, mapper: impl FnOnce(Expression<T>) -> Expression<Utf8>) -> Expression<Utf8> {
		self.map(mapper).reduce(values::utf8(""), |a, b| a.append(b))
	}

	/// Concatenation of the mapped arrays; empty over the empty array.
	pub fn concat_arrays<R: Kind>(
		self,
		mapper: impl FnOnce(Expression<T>) -> Expression<Array<R>>,
	) -> Expression<Array<R>> {
		self.map(mapper).reduce(values::array(Vec::<Expression<R>>::new()), |a, b| a.concat(b))
	}

	/// Set union of the mapped arrays; empty over the empty array.
	pub fn union_arrays<R: Kind>(
		self,
		mapper: impl FnOnce(Expression<T>) -> Expression<Array<R>>,
	) -> Expression<Array<R>> {
		self.map(mapper).reduce(values::array(Vec::<Expression<R>>::new()), |a, b| a.union(b))
	}

	/// Largest element, or `other` when the array is empty.
	pub fn max(self, other: impl IntoExpression<T>) -> Expression<T> {
		self.clone()
			.size()
			.eq(values::int32(0))
			.cond(other.into_expression(), self.max_n(values::int32(1)).first())
	}

	/// Smallest element, or `other` when the array is empty.
	pub fn min(self, other: impl IntoExpression<T>) -> Expression<T> {
		self.clone()
			.size()
			.eq(values::int32(0))
			.cond(other.into_expression(), self.min_n(values::int32(1)).first())
	}

	/// The `n` largest elements, in descending order. The engine rejects
	/// `n` < 1 at execution time; no local check is performed.
	pub fn max_n(self, n: impl IntoExpression<Integer>) -> Expression<Array<T>> {
		Expression::new(Ast::form("$maxN", [("input", self.ast), ("n", n.into_expression().ast)]))
	}

	/// The `n` smallest elements, in ascending order. The engine rejects
	/// `n` < 1 at execution time; no local check is performed.
	pub fn min_n(self, n: impl IntoExpression<Integer>) -> Expression<Array<T>> {
		Expression::new(Ast::form("$minN", [("input", self.ast), ("n", n.into_expression().ast)]))
	}

	pub fn size(self) -> Expression<Integer> {
		Expression::new(Ast::unary_wrapped("$size", self.ast))
	}

	/// Element at `index`. Negative indexes count from the end; an index
	/// out of range in either direction yields the missing value, not an
	/// error. An index outside the engine's 4-byte index domain is an
	/// execution error.
	pub fn element_at(self, index: impl IntoExpression<Integer>) -> Expression<T> {
		Expression::new(Ast::call("$arrayElemAt", [self.ast, index.into_expression().ast]))
	}

	pub fn first(self) -> Expression<T> {
		Expression::new(Ast::unary_wrapped("$first", self.ast))
	}

	pub fn last(self) -> Expression<T> {
		Expression::new(Ast::unary_wrapped("$last", self.ast))
	}

	// operand order is (needle, haystack)
	pub fn contains(self, value: impl IntoExpression<T>) -> Expression<Boolean> {
		Expression::new(Ast::call("$in", [value.into_expression().ast, self.ast]))
	}

	pub fn concat(self, other: impl IntoExpression<Array<T>>) -> Expression<Array<T>> {
		Expression::new(Ast::call("$concatArrays", [self.ast, other.into_expression().ast]))
	}

	pub fn slice(
		self,
		start: impl IntoExpression<Integer>,
		length: impl IntoExpression<Integer>,
	) -> Expression<Array<T>> {
		Expression::new(Ast::call("$slice", [
			self.ast,
			start.into_expression().ast,
			length.into_expression().ast,
		]))
	}

	pub fn union(self, other: impl IntoExpression<Array<T>>) -> Expression<Array<T>> {
		Expression::new(Ast::call("$setUnion", [self.ast, other.into_expression().ast]))
	}

	pub fn distinct(self) -> Expression<Array<T>> {
		Expression::new(Ast::unary_wrapped("$setUnion", self.ast))
	}

	/// Builds a map from the `{k, v}` entries `mapper` produces. Later
	/// keys win over earlier ones.
	pub fn as_map<R: Kind>(
		self,
		mapper: impl FnOnce(Expression<T>) -> Expression<Entry<R>>,
	) -> Expression<Map<R>> {
		Expression::new(Ast::unary_wrapped("$arrayToObject", self.map(mapper).ast))
	}
}

#[cfg(test)]
mod tests {
	use aggex_ir::{Environment, Mapping, Node};

	use crate::{
		into::IntoExpression,
		values::{boolean_array, int32, int32_array},
	};

	fn identity_of(node: Node) -> Node {
		match node.as_operator() {
			Some(("$reduce", Node::Mapping(arguments))) => arguments.get("initialValue").unwrap().clone(),
			other => panic!("not a reduce form: {other:?}"),
		}
	}

	#[test]
	fn test_fold_identities() {
		let env = Environment::standard();
		assert_eq!(identity_of(boolean_array([]).any(|a| a).lower(&env)), Node::boolean(false));
		assert_eq!(identity_of(boolean_array([]).all(|a| a).lower(&env)), Node::boolean(true));
		assert_eq!(identity_of(int32_array([]).sum(|a| a.into_expression()).lower(&env)), Node::int32(0));
		assert_eq!(identity_of(int32_array([]).multiply(|a| a.into_expression()).lower(&env)), Node::int32(1));
	}

	#[test]
	fn test_max_guards_empty_input() {
		let env = Environment::standard();
		let node = int32_array([1, 2, 3]).max(int32(9)).lower(&env);
		let input = Node::sequence([Node::int32(1), Node::int32(2), Node::int32(3)]);
		let expected = Node::operator(
			"$cond",
			Node::sequence([
				Node::operator("$eq", Node::sequence([
					Node::operator("$size", Node::sequence([input.clone()])),
					Node::int32(0),
				])),
				Node::int32(9),
				Node::operator("$first", Node::sequence([Node::operator(
					"$maxN",
					Node::Mapping(Mapping::from_iter([("input", input), ("n", Node::int32(1))])),
				)])),
			]),
		);
		assert_eq!(node, expected);
	}

	#[test]
	fn test_contains_operand_order() {
		let env = Environment::standard();
		let node = int32_array([1, 2]).contains(int32(2)).lower(&env);
		assert_eq!(
			node,
			Node::operator("$in", Node::sequence([
				Node::int32(2),
				Node::sequence([Node::int32(1), Node::int32(2)]),
			]))
		);
	}
}
