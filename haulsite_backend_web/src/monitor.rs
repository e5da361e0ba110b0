// Copyright 2026 the Haulsite Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive connection estimation.
//!
//! [`NetworkMonitor`] owns a [`ConnectionEstimator`] for one mounted view and
//! keeps it current: it measures once on start, then again whenever the
//! connection object fires `change` or the window fires `resize`. All three
//! paths go through the estimator's single recompute entry point. Dropping
//! the monitor releases both listeners.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use haulsite_core::network::{ConnectionEstimator, ConnectionSample, RecomputeTrigger};
use haulsite_core::trace::Tracer;
use wasm_bindgen::JsValue;

use crate::SharedSink;
use crate::listener::EventListener;
use crate::signals::BrowserSignals;

/// Keeps a [`ConnectionSample`] current for the lifetime of a view.
///
/// Create with [`NetworkMonitor::start`]. `on_change` receives the new sample
/// after every recompute, including the initial one.
pub struct NetworkMonitor {
    inner: Rc<MonitorInner>,
    /// Released on drop, which unsubscribes both triggers.
    listeners: Vec<EventListener>,
}

struct MonitorInner {
    signals: BrowserSignals,
    estimator: RefCell<ConnectionEstimator>,
    on_change: RefCell<Box<dyn FnMut(&ConnectionSample)>>,
    sink: SharedSink,
}

impl MonitorInner {
    fn recompute(&self, trigger: RecomputeTrigger) {
        // Borrows end before the callback runs, so it may read the monitor.
        let sample = {
            let mut sink = self.sink.borrow_mut();
            let mut tracer = Tracer::new(&mut *sink);
            self.estimator
                .borrow_mut()
                .recompute(&self.signals, trigger, &mut tracer)
                .clone()
        };
        self.on_change.borrow_mut()(&sample);
    }
}

impl NetworkMonitor {
    /// Subscribes to `change` (if the browser exposes a connection object) and
    /// `resize`, then performs the initial measurement.
    pub fn start(
        signals: BrowserSignals,
        sink: SharedSink,
        on_change: impl FnMut(&ConnectionSample) + 'static,
    ) -> Result<Self, JsValue> {
        let connection = signals.connection_target();
        let window = signals.window().clone();
        let inner = Rc::new(MonitorInner {
            signals,
            estimator: RefCell::new(ConnectionEstimator::new()),
            on_change: RefCell::new(Box::new(on_change)),
            sink,
        });

        let mut listeners = Vec::with_capacity(2);
        if let Some(connection) = connection {
            let inner = Rc::clone(&inner);
            listeners.push(EventListener::new(&connection, "change", move |_| {
                inner.recompute(RecomputeTrigger::NetworkChange);
            })?);
        }
        {
            let inner = Rc::clone(&inner);
            listeners.push(EventListener::new(&window, "resize", move |_| {
                inner.recompute(RecomputeTrigger::Resize);
            })?);
        }

        inner.recompute(RecomputeTrigger::Initial);
        Ok(Self { inner, listeners })
    }

    /// Returns a copy of the current sample.
    #[must_use]
    pub fn sample(&self) -> ConnectionSample {
        self.inner.estimator.borrow().sample().clone()
    }

    /// Returns the good-connection verdict for the current sample.
    #[must_use]
    pub fn is_good_connection(&self) -> bool {
        self.inner.estimator.borrow().is_good_connection()
    }

    /// Returns `true` if the browser exposed a connection object to listen on.
    #[must_use]
    pub fn watches_network(&self) -> bool {
        self.listeners.iter().any(|l| l.event_type() == "change")
    }
}

impl core::fmt::Debug for NetworkMonitor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NetworkMonitor")
            .field("sample", &self.inner.estimator.borrow().sample())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
