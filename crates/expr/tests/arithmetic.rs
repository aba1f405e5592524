// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Numeric operator lowering.

mod common;

use aggex_ir::Node;
use aggex_expr::values::{float64, int32, int64};

use crate::common::{env, op, seq};

#[test]
fn test_add_subtract_multiply_keep_operand_order() {
	let env = env();
	assert_eq!(int32(2).add(1).lower(&env), op("$add", seq([Node::int32(2), Node::int32(1)])));
	assert_eq!(int32(2).subtract(1).lower(&env), op("$subtract", seq([Node::int32(2), Node::int32(1)])));
	assert_eq!(int32(2).multiply(3).lower(&env), op("$multiply", seq([Node::int32(2), Node::int32(3)])));
}

#[test]
fn test_min_max() {
	let env = env();
	assert_eq!(int32(2).min(1).lower(&env), op("$min", seq([Node::int32(2), Node::int32(1)])));
	assert_eq!(int32(2).max(1).lower(&env), op("$max", seq([Node::int32(2), Node::int32(1)])));
}

#[test]
fn test_divide_integers_stays_untruncated() {
	let env = env();
	// 1 / 2 is the number 0.5 remotely; the operands stay integers in
	// the IR and the result kind widens
	let half = int32(1).divide(int32(2));
	assert_eq!(half.lower(&env), op("$divide", seq([Node::int32(1), Node::int32(2)])));
	// the widened result composes with number-only operators
	let scaled = half.multiply(float64(2.0));
	assert_eq!(
		scaled.lower(&env),
		op("$multiply", seq([op("$divide", seq([Node::int32(1), Node::int32(2)])), Node::float64(2.0)]))
	);
}

#[test]
fn test_abs_and_round_are_plain_unary() {
	let env = env();
	assert_eq!(int32(-5).abs().lower(&env), op("$abs", Node::int32(-5)));
	assert_eq!(float64(1.5).round().lower(&env), op("$round", Node::float64(1.5)));
}

#[test]
fn test_round_to_place() {
	let env = env();
	assert_eq!(
		float64(1.2345).round_to(int32(2)).lower(&env),
		op("$round", seq([Node::float64(1.2345), Node::int32(2)]))
	);
}

#[test]
fn test_int64_literal() {
	let env = env();
	assert_eq!(int64(1_406_861_106_000).add(10).lower(&env), op("$add", seq([Node::int64(1_406_861_106_000i64), Node::int32(10)])));
}

#[test]
fn test_milliseconds_as_date() {
	let env = env();
	assert_eq!(int64(1_234_567_890_000).milliseconds_as_date().lower(&env), op("$toDate", Node::int64(1_234_567_890_000i64)));
}

#[test]
fn test_comparisons_are_top_kind() {
	let env = env();
	assert_eq!(int32(1).lt(2).lower(&env), op("$lt", seq([Node::int32(1), Node::int32(2)])));
	assert_eq!(int32(1).gte(1).lower(&env), op("$gte", seq([Node::int32(1), Node::int32(1)])));
	assert_eq!(float64(1.0).ne(int32(1)).lower(&env), op("$ne", seq([Node::float64(1.0), Node::int32(1)])));
}

#[test]
fn test_lowering_is_deterministic() {
	let env = env();
	let expr = int32(1).add(2).multiply(int32(3).subtract(4)).divide(5);
	assert_eq!(expr.lower(&env), expr.lower(&env));
}
