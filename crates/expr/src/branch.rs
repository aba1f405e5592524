// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! The branch accumulator behind [`Expression::switch_on`].
//!
//! Branches are appended in call order and evaluated by the engine in that
//! order: the first matching predicate wins. Attaching a default moves the
//! accumulator into [`BranchesTerminal`], which has no append methods, so
//! "closed after default" holds at compile time rather than by a runtime
//! check. Compiling without a default is allowed and omits the default key;
//! an unmatched dispatch is then an execution error raised by the engine.

use std::marker::PhantomData;

use crate::{
	ast::Ast,
	expr::Expression,
	into::IntoExpression,
	kind::{Array, Boolean, Date, Document, Integer, Kind, Map, Number, Utf8, Value},
};

mod seal {
	use super::*;

	pub struct Switch {
		pub branches: Vec<(Ast, Ast)>,
		pub default: Option<Ast>,
	}

	pub trait SwitchSource<R: Kind> {
		fn into_switch(self) -> Switch;
	}
}

/// Accumulators [`Expression::switch_on`] accepts: an open
/// [`BranchesIntermediary`] or a closed [`BranchesTerminal`]. Sealed.
pub trait IntoSwitch<R: Kind>: seal::SwitchSource<R> {}

impl<R: Kind, B: seal::SwitchSource<R>> IntoSwitch<R> for B {}

/// An empty accumulator holding the dispatched value. Appending the first
/// branch opens it.
pub struct Branches<K: Kind> {
	value: Expression<K>,
}

/// An open accumulator: append-only, until a default closes it.
pub struct BranchesIntermediary<K: Kind, R: Kind> {
	value: Expression<K>,
	branches: Vec<(Ast, Ast)>,
	result: PhantomData<R>,
}

/// A closed accumulator: the default is attached and no branch can be
/// appended anymore.
pub struct BranchesTerminal<R: Kind> {
	branches: Vec<(Ast, Ast)>,
	default: Ast,
	result: PhantomData<R>,
}

impl<K: Kind> Branches<K> {
	pub(crate) fn new(value: Expression<K>) -> Self {
		Self {
			value,
		}
	}

	fn open<R: Kind>(self) -> BranchesIntermediary<K, R> {
		BranchesIntermediary {
			value: self.value,
			branches: Vec::new(),
			result: PhantomData,
		}
	}

	/// Branch on an arbitrary predicate over the dispatched value.
	pub fn is<R: Kind>(
		self,
		predicate: impl FnOnce(Expression<K>) -> Expression<Boolean>,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is(predicate, then)
	}

	pub fn eq<R: Kind>(
		self,
		value: impl IntoExpression<Value>,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().eq(value, then)
	}

	pub fn lt<R: Kind>(
		self,
		value: impl IntoExpression<Value>,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().lt(value, then)
	}

	pub fn lte<R: Kind>(
		self,
		value: impl IntoExpression<Value>,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().lte(value, then)
	}

	pub fn is_boolean<R: Kind>(
		self,
		then: impl FnOnce(Expression<Boolean>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_boolean(then)
	}

	pub fn is_number<R: Kind>(
		self,
		then: impl FnOnce(Expression<Number>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_number(then)
	}

	pub fn is_integer<R: Kind>(
		self,
		then: impl FnOnce(Expression<Integer>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_integer(then)
	}

	pub fn is_utf8<R: Kind>(
		self,
		then: impl FnOnce(Expression<Utf8>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_utf8(then)
	}

	pub fn is_date<R: Kind>(
		self,
		then: impl FnOnce(Expression<Date>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_date(then)
	}

	pub fn is_array<E: Kind, R: Kind>(
		self,
		then: impl FnOnce(Expression<Array<E>>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_array(then)
	}

	pub fn is_document<R: Kind>(
		self,
		then: impl FnOnce(Expression<Document>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_document(then)
	}

	pub fn is_map<V: Kind, R: Kind>(
		self,
		then: impl FnOnce(Expression<Map<V>>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_map(then)
	}

	pub fn is_null<R: Kind>(
		self,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> BranchesIntermediary<K, R> {
		self.open().is_null(then)
	}
}

impl<K: Kind, R: Kind> BranchesIntermediary<K, R> {
	// the single append every entry constructor funnels into
	fn append(mut self, case: Expression<Boolean>, then: Expression<R>) -> Self {
		self.branches.push((case.ast, then.ast));
		self
	}

	/// Branch on an arbitrary predicate over the dispatched value.
	pub fn is(
		self,
		predicate: impl FnOnce(Expression<K>) -> Expression<Boolean>,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> Self {
		let case = predicate(self.value.clone());
		let then = then(self.value.clone());
		self.append(case, then)
	}

	pub fn eq(
		self,
		value: impl IntoExpression<Value>,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> Self {
		let case = self.value.clone().eq(value);
		let then = then(self.value.clone());
		self.append(case, then)
	}

	pub fn lt(
		self,
		value: impl IntoExpression<Value>,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> Self {
		let case = self.value.clone().lt(value);
		let then = then(self.value.clone());
		self.append(case, then)
	}

	pub fn lte(
		self,
		value: impl IntoExpression<Value>,
		then: impl FnOnce(Expression<K>) -> Expression<R>,
	) -> Self {
		let case = self.value.clone().lte(value);
		let then = then(self.value.clone());
		self.append(case, then)
	}

	// The typed entries pre-build the matching type test and hand the
	// result producer the dispatched value narrowed to that kind.

	pub fn is_boolean(self, then: impl FnOnce(Expression<Boolean>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_boolean();
		let then = then(self.value.clone().retype());
		self.append(case, then)
	}

	pub fn is_number(self, then: impl FnOnce(Expression<Number>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_number();
		let then = then(self.value.clone().retype());
		self.append(case, then)
	}

	pub fn is_integer(self, then: impl FnOnce(Expression<Integer>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_integer();
		let then = then(self.value.clone().retype());
		self.append(case, then)
	}

	pub fn is_utf8(self, then: impl FnOnce(Expression<Utf8>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_utf8();
		let then = then(self.value.clone().retype());
		self.append(case, then)
	}

	pub fn is_date(self, then: impl FnOnce(Expression<Date>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_date();
		let then = then(self.value.clone().retype());
		self.append(case, then)
	}

	/// The element kind `E` is an unchecked assertion by the caller.
	pub fn is_array<E: Kind>(self, then: impl FnOnce(Expression<Array<E>>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_array();
		let then = then(self.value.clone().retype());
		self.append(case, then)
	}

	pub fn is_document(self, then: impl FnOnce(Expression<Document>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_document_or_map();
		let then = then(self.value.clone().retype());
		self.append(case, then)
	}

	/// The value kind `V` is an unchecked assertion by the caller.
	pub fn is_map<V: Kind>(self, then: impl FnOnce(Expression<Map<V>>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_document_or_map();
		let then = then(self.value.clone().retype());
		self.append(case, then)
	}

	pub fn is_null(self, then: impl FnOnce(Expression<K>) -> Expression<R>) -> Self {
		let case = self.value.clone().is_null();
		let then = then(self.value.clone());
		self.append(case, then)
	}

	/// Attaches the default and closes the accumulator.
	pub fn defaults(self, then: impl FnOnce(Expression<K>) -> Expression<R>) -> BranchesTerminal<R> {
		BranchesTerminal {
			branches: self.branches,
			default: then(self.value).ast,
			result: PhantomData,
		}
	}
}

impl<K: Kind, R: Kind> seal::SwitchSource<R> for BranchesIntermediary<K, R> {
	fn into_switch(self) -> seal::Switch {
		seal::Switch {
			branches: self.branches,
			default: None,
		}
	}
}

impl<R: Kind> seal::SwitchSource<R> for BranchesTerminal<R> {
	fn into_switch(self) -> seal::Switch {
		seal::Switch {
			branches: self.branches,
			default: Some(self.default),
		}
	}
}

pub(crate) fn compile<K: Kind, R: Kind, B: IntoSwitch<R>>(
	value: Expression<K>,
	build: impl FnOnce(Branches<K>) -> B,
) -> Expression<R> {
	let switch = <B as seal::SwitchSource<R>>::into_switch(build(Branches::new(value)));
	let branches = switch
		.branches
		.into_iter()
		.map(|(case, then)| Ast::Doc(vec![("case", case), ("then", then)]))
		.collect();
	let mut fields = vec![("branches", Ast::Seq(branches))];
	if let Some(default) = switch.default {
		fields.push(("default", default));
	}
	Expression::new(Ast::form("$switch", fields))
}

#[cfg(test)]
mod tests {
	use aggex_ir::{Environment, Mapping, Node};

	use crate::values::{int32, utf8};

	#[test]
	fn test_branches_compile_in_append_order() {
		let env = Environment::standard();
		let node = int32(0)
			.switch_on(|on| on.is_null(|_| utf8("X")).is(|v| v.gt(int32(-1)), |_| utf8("A")))
			.lower(&env);

		let null_case = Node::operator("$eq", Node::sequence([Node::int32(0), Node::Null]));
		let gt_case = Node::operator("$gt", Node::sequence([Node::int32(0), Node::int32(-1)]));
		let expected = Node::operator(
			"$switch",
			Node::Mapping(Mapping::from_iter([(
				"branches",
				Node::sequence([
					Node::Mapping(Mapping::from_iter([
						("case", null_case),
						("then", Node::utf8("X")),
					])),
					Node::Mapping(Mapping::from_iter([
						("case", gt_case),
						("then", Node::utf8("A")),
					])),
				]),
			)])),
		);
		assert_eq!(node, expected);
	}

	#[test]
	fn test_default_emits_default_key() {
		let env = Environment::standard();
		let node = int32(0)
			.switch_on(|on| on.eq(int32(0), |_| utf8("zero")).defaults(|_| utf8("other")))
			.lower(&env);
		match node.as_operator() {
			Some(("$switch", Node::Mapping(arguments))) => {
				assert!(arguments.contains_key("branches"));
				assert_eq!(arguments.get("default"), Some(&Node::utf8("other")));
			}
			other => panic!("not a switch form: {other:?}"),
		}
	}

	#[test]
	fn test_no_default_omits_default_key() {
		let env = Environment::standard();
		let node = int32(0).switch_on(|on| on.eq(int32(0), |_| utf8("zero"))).lower(&env);
		match node.as_operator() {
			Some(("$switch", Node::Mapping(arguments))) => {
				assert!(!arguments.contains_key("default"));
			}
			other => panic!("not a switch form: {other:?}"),
		}
	}
}
