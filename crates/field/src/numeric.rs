// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Numeric category of a single field value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
	NonNumeric = 0,
	Integral = 1,
	Real = 2,
}

impl NumericField {
	pub fn code(self) -> u8 {
		self as u8
	}

	pub fn is_numeric(self) -> bool {
		!matches!(self, NumericField::NonNumeric)
	}
}

impl Display for NumericField {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			NumericField::NonNumeric => f.write_str("non_numeric"),
			NumericField::Integral => f.write_str("integral"),
			NumericField::Real => f.write_str("real"),
		}
	}
}

impl TryFrom<u8> for NumericField {
	type Error = Error;

	fn try_from(code: u8) -> Result<Self, Self::Error> {
		match code {
			0 => Ok(NumericField::NonNumeric),
			1 => Ok(NumericField::Integral),
			2 => Ok(NumericField::Real),
			_ => Err(Error::InvalidNumericCode(code)),
		}
	}
}

/// Classifies `field` against `sign? (digit+ ('.' digit*)? | '.' digit+) (('e'|'E') sign? digit+)?`.
///
/// The whole buffer has to match; there is no trimming and no partial prefix
/// match.
pub fn field_numeric(field: &[u8]) -> NumericField {
	let mut bytes = field.iter().copied().peekable();

	if matches!(bytes.peek(), Some(b'+' | b'-')) {
		bytes.next();
	}

	let mut digits = 0usize;
	let mut seen_point = false;
	let mut seen_exponent = false;

	for byte in bytes.by_ref() {
		match byte {
			b'0'..=b'9' => digits += 1,
			b'.' if !seen_point => seen_point = true,
			b'e' | b'E' => {
				seen_exponent = true;
				break;
			}
			_ => return NumericField::NonNumeric,
		}
	}

	// mantissa needs a digit on at least one side of the point
	if digits == 0 {
		return NumericField::NonNumeric;
	}

	if seen_exponent {
		if matches!(bytes.peek(), Some(b'+' | b'-')) {
			bytes.next();
		}

		let mut exponent_digits = 0usize;
		for byte in bytes {
			if !byte.is_ascii_digit() {
				return NumericField::NonNumeric;
			}
			exponent_digits += 1;
		}

		if exponent_digits == 0 {
			return NumericField::NonNumeric;
		}
	}

	if seen_point || seen_exponent {
		NumericField::Real
	} else {
		NumericField::Integral
	}
}
