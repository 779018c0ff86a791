// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Classification of raw tabular field values.
//!
//! A field is a borrowed byte buffer holding one untyped value. The
//! classifiers decide whether it is a boolean literal and whether it is an
//! integral or real numeric literal. They never convert the value, never
//! allocate and never fail: every byte sequence maps to a result.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod boolean;
mod classify;
pub mod config;
mod error;
pub mod numeric;

pub use boolean::{BooleanSpellings, bool_value, field_bool};
pub use classify::{Classifier, FieldKind};
pub use config::ClassifierConfig;
pub use error::{Error, Result};
pub use numeric::{NumericField, field_numeric};
