// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for haulsite diagnostics.
//!
//! This crate provides [`TraceSink`](haulsite_core::trace::TraceSink)
//! implementations for development and test runs:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: keeps owned copies of every event, with
//!   [`recorder::export`] for writing them as a JSON array.

pub mod pretty;
pub mod recorder;
