// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

#![allow(dead_code)]

use aggex_ir::{Environment, Mapping, Node};

pub fn env() -> Environment {
	Environment::standard()
}

pub fn op(name: &str, arg: Node) -> Node {
	Node::operator(name, arg)
}

pub fn seq(items: impl IntoIterator<Item = Node>) -> Node {
	Node::sequence(items)
}

pub fn doc<'a>(fields: impl IntoIterator<Item = (&'a str, Node)>) -> Node {
	Node::Mapping(fields.into_iter().collect::<Mapping>())
}

pub fn variable(name: &str) -> Node {
	Node::utf8(name)
}
