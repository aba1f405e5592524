// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Node;

/// An ordered mapping of unique keys to nodes.
///
/// Insertion order is preserved because the remote engine treats argument
/// documents positionally in some operator forms; setting an existing key
/// replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping(IndexMap<String, Node>);

impl Mapping {
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self(IndexMap::with_capacity(capacity))
	}

	/// Sets `key` to `node`, returning the replaced value if the key was
	/// already present.
	pub fn set(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
		self.0.insert(key.into(), node)
	}

	pub fn get(&self, key: &str) -> Option<&Node> {
		self.0.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
		self.0.iter().map(|(key, node)| (key.as_str(), node))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}
}

impl<K: Into<String>> FromIterator<(K, Node)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(key, node)| (key.into(), node)).collect())
	}
}

impl IntoIterator for Mapping {
	type Item = (String, Node);
	type IntoIter = indexmap::map::IntoIter<String, Node>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
