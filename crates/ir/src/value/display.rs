// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt,
	fmt::{Display, Formatter, Write},
};

use super::{Mapping, Node};

// Single-line canonical rendering, primarily for logs and test failures.
// Scalar kinds without a plain JSON form use their extended spelling.
impl Display for Node {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Node::Null => f.write_str("null"),
			Node::Boolean(true) => f.write_str("true"),
			Node::Boolean(false) => f.write_str("false"),
			Node::Int32(value) => Display::fmt(value, f),
			Node::Int64(value) => Display::fmt(value, f),
			Node::Float64(value) => Display::fmt(value, f),
			Node::Decimal(value) => {
				write!(f, "{{\"$numberDecimal\": \"{}\"}}", value)
			}
			Node::Utf8(value) => write_escaped(f, value),
			Node::Timestamp(value) => {
				write!(f, "{{\"$date\": {}}}", value.as_millis())
			}
			Node::Sequence(items) => {
				f.write_char('[')?;
				for (index, item) in items.iter().enumerate() {
					if index > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(item, f)?;
				}
				f.write_char(']')
			}
			Node::Mapping(mapping) => Display::fmt(mapping, f),
		}
	}
}

impl Display for Mapping {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_char('{')?;
		for (index, (key, node)) in self.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write_escaped(f, key)?;
			f.write_str(": ")?;
			Display::fmt(node, f)?;
		}
		f.write_char('}')
	}
}

fn write_escaped(f: &mut Formatter<'_>, text: &str) -> fmt::Result {
	f.write_char('"')?;
	for c in text.chars() {
		match c {
			'"' => f.write_str("\\\"")?,
			'\\' => f.write_str("\\\\")?,
			'\n' => f.write_str("\\n")?,
			'\r' => f.write_str("\\r")?,
			'\t' => f.write_str("\\t")?,
			c if (c as u32) < 0x20 => {
				write!(f, "\\u{:04x}", c as u32)?
			}
			c => f.write_char(c)?,
		}
	}
	f.write_char('"')
}

#[cfg(test)]
mod tests {
	use super::super::Timestamp;
	use super::*;

	#[test]
	fn test_scalars() {
		assert_eq!(Node::Null.to_string(), "null");
		assert_eq!(Node::boolean(true).to_string(), "true");
		assert_eq!(Node::int32(-7).to_string(), "-7");
		assert_eq!(Node::float64(0.5).to_string(), "0.5");
		assert_eq!(Node::utf8("a\"b").to_string(), "\"a\\\"b\"");
		assert_eq!(Node::timestamp(Timestamp::from_millis(123)).to_string(), "{\"$date\": 123}");
	}

	#[test]
	fn test_operator_form() {
		let node = Node::operator("$add", Node::sequence([Node::int32(1), Node::int32(2)]));
		assert_eq!(node.to_string(), "{\"$add\": [1, 2]}");
	}

	#[test]
	fn test_mapping_preserves_order() {
		let mapping: Mapping = [("z", Node::int32(1)), ("a", Node::int32(2))].into_iter().collect();
		assert_eq!(Node::Mapping(mapping).to_string(), "{\"z\": 1, \"a\": 2}");
	}
}
