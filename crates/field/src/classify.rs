// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
	boolean::bool_value,
	config::ClassifierConfig,
	error::Result,
	numeric::{NumericField, field_numeric},
};

/// Single-value summary combining the boolean and numeric decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	Empty,
	Boolean,
	Integral,
	Real,
	Text,
}

impl Display for FieldKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			FieldKind::Empty => f.write_str("empty"),
			FieldKind::Boolean => f.write_str("boolean"),
			FieldKind::Integral => f.write_str("integral"),
			FieldKind::Real => f.write_str("real"),
			FieldKind::Text => f.write_str("text"),
		}
	}
}

/// Applies a [`ClassifierConfig`] to field buffers.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
	config: ClassifierConfig,
}

impl Classifier {
	pub fn new(config: ClassifierConfig) -> Self {
		debug!(trim = config.trim, boolean = ?config.boolean, "creating field classifier");
		Self {
			config,
		}
	}

	pub fn try_new(config: ClassifierConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self::new(config))
	}

	pub fn config(&self) -> &ClassifierConfig {
		&self.config
	}

	pub fn boolean(&self, field: &[u8]) -> bool {
		self.bool_value(field).is_some()
	}

	pub fn bool_value(&self, field: &[u8]) -> Option<bool> {
		bool_value(self.prepare(field), self.config.boolean)
	}

	pub fn numeric(&self, field: &[u8]) -> NumericField {
		field_numeric(self.prepare(field))
	}

	/// Empty, then boolean, then numeric; anything else is text.
	pub fn classify(&self, field: &[u8]) -> FieldKind {
		let field = self.prepare(field);

		let kind = if field.is_empty() {
			FieldKind::Empty
		} else if bool_value(field, self.config.boolean).is_some() {
			FieldKind::Boolean
		} else {
			match field_numeric(field) {
				NumericField::Integral => FieldKind::Integral,
				NumericField::Real => FieldKind::Real,
				NumericField::NonNumeric => FieldKind::Text,
			}
		};

		trace!(len = field.len(), %kind, "classified field");
		kind
	}

	fn prepare<'a>(&self, field: &'a [u8]) -> &'a [u8] {
		if self.config.trim {
			field.trim_ascii()
		} else {
			field
		}
	}
}
