// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	borrow::Cow,
	fmt,
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, IrError};

/// An arbitrary-precision decimal scalar.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(inner: BigDecimal) -> Self {
		Self(inner)
	}

	/// Parses a decimal literal. Surrounding whitespace is ignored and
	/// underscores may be used as digit separators.
	pub fn parse(text: &str) -> Result<Decimal, Error> {
		let needs_trimming = text.trim() != text;
		let has_underscores = text.as_bytes().contains(&b'_');

		let value: Cow<'_, str> = match (needs_trimming, has_underscores) {
			(false, false) => Cow::Borrowed(text),
			(true, false) => Cow::Borrowed(text.trim()),
			(false, true) => Cow::Owned(text.replace('_', "")),
			(true, true) => Cow::Owned(text.trim().replace('_', "")),
		};

		if value.is_empty() {
			return Err(IrError::InvalidDecimalFormat {
				value: text.to_string(),
			}
			.into());
		}

		let inner = BigDecimal::from_str(&value).map_err(|_| {
			Error::from(IrError::InvalidDecimalFormat {
				value: text.to_string(),
			})
		})?;
		Ok(Decimal(inner))
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}
}

impl From<BigDecimal> for Decimal {
	fn from(inner: BigDecimal) -> Self {
		Self(inner)
	}
}

impl FromStr for Decimal {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Decimal::parse(text)
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_integer() {
		let decimal = Decimal::parse("123").unwrap();
		assert_eq!(decimal.to_string(), "123");
	}

	#[test]
	fn test_parse_fractional() {
		let decimal = Decimal::parse("123.45").unwrap();
		assert_eq!(decimal.to_string(), "123.45");
	}

	#[test]
	fn test_parse_with_underscores() {
		let decimal = Decimal::parse("1_234.56").unwrap();
		assert_eq!(decimal.to_string(), "1234.56");
	}

	#[test]
	fn test_parse_negative() {
		let decimal = Decimal::parse("-123.45").unwrap();
		assert_eq!(decimal.to_string(), "-123.45");
	}

	#[test]
	fn test_parse_trims_whitespace() {
		let decimal = Decimal::parse("  42.5 ").unwrap();
		assert_eq!(decimal.to_string(), "42.5");
	}

	#[test]
	fn test_parse_empty() {
		assert!(Decimal::parse("").is_err());
	}

	#[test]
	fn test_parse_invalid() {
		let err = Decimal::parse("not_a_number").unwrap_err();
		assert_eq!(err.0.code, "DECIMAL_001");
	}
}
