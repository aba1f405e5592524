// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

pub mod diagnostic;

/// A structured description of a violated invariant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

#[derive(Debug, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.0.code, self.0.message)
	}
}

impl std::error::Error for Error {}

/// Conversion of domain errors into their diagnostic form.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum IrError {
	#[error("invalid decimal literal '{value}'")]
	InvalidDecimalFormat {
		value: String,
	},
}

impl IntoDiagnostic for IrError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			IrError::InvalidDecimalFormat {
				value,
			} => diagnostic::invalid_decimal_format(&value),
		}
	}
}

impl From<IrError> for Error {
	fn from(err: IrError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::{diagnostic::invalid_decimal_format, *};

	#[test]
	fn test_error_display() {
		let err = Error(invalid_decimal_format("abc"));
		assert_eq!(err.to_string(), "DECIMAL_001: invalid decimal literal 'abc'");
	}
}
