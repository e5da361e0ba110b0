// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decision logic for the Amex Transports home page.
//!
//! `haulsite_core` holds everything on the page that branches on state or on
//! external signals, with no dependency on a browser. It is `no_std`
//! compatible (with `alloc`); the web backend crate supplies the browser glue.
//!
//! # Architecture
//!
//! Two independent pipelines feed the page composition layer:
//!
//! ```text
//!   HostSignals (network info + viewport)
//!       │   initial / network-change / resize
//!       ▼
//!   ConnectionEstimator::recompute() ──► ConnectionSample
//!                                             │
//!                                             ▼
//!   MediaSelector::choose() ──► Background::{Video, Image}
//!       ▲
//!       └── MediaSelector::observe(LoadStart | CanPlay | Error)
//!
//!   keydown ──► SectionNavigator::handle_key() ──► ScrollTarget::scroll_into_view()
//! ```
//!
//! **[`host`]**: The [`HostSignals`](host::HostSignals) capability provider
//! and the raw [`NetworkReading`](host::NetworkReading) it yields. A missing
//! network-information capability is a valid state, not an error.
//!
//! **[`network`]**: Connection sample, screen buckets, the good-connection
//! verdict, and the estimator with its single recompute entry point.
//!
//! **[`media`]**: Video-or-image decision and the one-way playback latch.
//!
//! **[`nav`]**: Ordered page sections and the clamped keyboard navigator.
//!
//! **[`contact`]**: Contact form draft, validation, and the outcome of a
//! submission to the mail endpoint.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod contact;
pub mod host;
pub mod media;
pub mod nav;
pub mod network;
pub mod trace;
