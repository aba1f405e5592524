// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;

pub fn invalid_decimal_format(value: &str) -> Diagnostic {
	Diagnostic {
		code: "DECIMAL_001".to_string(),
		message: format!("invalid decimal literal '{}'", value),
		label: Some("not a decimal number".to_string()),
		help: Some("use digits with an optional sign, fraction and exponent, e.g. -12_500.25".to_string()),
		notes: vec!["underscores may be used as digit separators".to_string()],
	}
}
