// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sc-core: data model shared by the scriptcheck runner, engine and CLI

pub mod macros;

pub mod diff;
pub mod normalize;
pub mod phase;
pub mod record;
pub mod sink;
pub mod warning;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use diff::{render_side_by_side, DiffArtifacts, DiffRendering, NumberedLine, RowKind, SideBySideRow};
pub use normalize::normalize_lines;
pub use phase::{Phase, EXPECTATION_EXTENSION, EXPECTATION_PATTERN, INPUT_EXTENSION};
pub use record::{Check, TestRecord};
pub use sink::{ResultSink, Summary};
pub use warning::Warning;
