// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// A UTC instant, stored as signed milliseconds since the Unix epoch.
///
/// This is the binary date representation the remote engine evaluates;
/// calendar arithmetic happens remotely, never in this library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
	pub fn from_millis(millis: i64) -> Self {
		Self(millis)
	}

	pub fn as_millis(&self) -> i64 {
		self.0
	}
}

impl From<i64> for Timestamp {
	fn from(millis: i64) -> Self {
		Self(millis)
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_round_trip_millis() {
		let ts = Timestamp::from_millis(1_700_000_000_123);
		assert_eq!(ts.as_millis(), 1_700_000_000_123);
	}

	#[test]
	fn test_pre_epoch() {
		let ts = Timestamp::from_millis(-1);
		assert_eq!(ts.as_millis(), -1);
		assert!(ts < Timestamp::from_millis(0));
	}
}
