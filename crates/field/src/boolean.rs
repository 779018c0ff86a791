// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

type Literals = &'static [(&'static [u8], bool)];

const WORDS: Literals = &[(b"true".as_slice(), true), (b"false".as_slice(), false)];
const LETTERS: Literals = &[(b"t".as_slice(), true), (b"f".as_slice(), false)];
const DIGITS: Literals = &[(b"1".as_slice(), true), (b"0".as_slice(), false)];
const YES_NO: Literals = &[
	(b"yes".as_slice(), true),
	(b"no".as_slice(), false),
	(b"y".as_slice(), true),
	(b"n".as_slice(), false),
];
const ON_OFF: Literals = &[(b"on".as_slice(), true), (b"off".as_slice(), false)];

const LONGEST_LITERAL: usize = 5;

/// Spelling families accepted as boolean literals.
///
/// Every family contributes one literal for `true` and one for `false`
/// (`yes_no` also accepts `y`/`n`). Matching is ASCII case-insensitive and
/// only `words` is enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanSpellings {
	/// `true` / `false`
	pub words: bool,
	/// `t` / `f`
	pub letters: bool,
	/// `1` / `0`
	pub digits: bool,
	/// `yes` / `no` / `y` / `n`
	pub yes_no: bool,
	/// `on` / `off`
	pub on_off: bool,
}

impl BooleanSpellings {
	pub const fn words() -> Self {
		Self {
			words: true,
			letters: false,
			digits: false,
			yes_no: false,
			on_off: false,
		}
	}

	pub const fn all() -> Self {
		Self {
			words: true,
			letters: true,
			digits: true,
			yes_no: true,
			on_off: true,
		}
	}

	pub const fn none() -> Self {
		Self {
			words: false,
			letters: false,
			digits: false,
			yes_no: false,
			on_off: false,
		}
	}

	pub fn is_empty(&self) -> bool {
		!(self.words || self.letters || self.digits || self.yes_no || self.on_off)
	}

	fn families(&self) -> [(bool, Literals); 5] {
		[
			(self.words, WORDS),
			(self.letters, LETTERS),
			(self.digits, DIGITS),
			(self.yes_no, YES_NO),
			(self.on_off, ON_OFF),
		]
	}
}

impl Default for BooleanSpellings {
	fn default() -> Self {
		Self::words()
	}
}

/// Returns the literal value of `field` if it is one of the enabled spellings.
///
/// `None` means the field is not a boolean at all, so a recognized `false`
/// stays distinguishable from an unrecognized field.
pub fn bool_value(field: &[u8], spellings: BooleanSpellings) -> Option<bool> {
	if field.is_empty() || field.len() > LONGEST_LITERAL {
		return None;
	}

	spellings
		.families()
		.into_iter()
		.filter(|(enabled, _)| *enabled)
		.flat_map(|(_, literals)| literals.iter())
		.find(|(literal, _)| field.eq_ignore_ascii_case(literal))
		.map(|(_, value)| *value)
}

/// Whether `field` is exactly `true` or `false`, ignoring ASCII case.
pub fn field_bool(field: &[u8]) -> bool {
	bool_value(field, BooleanSpellings::default()).is_some()
}
