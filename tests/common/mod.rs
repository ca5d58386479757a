//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::{Catalog, DemoSlot, RenderFailure, Reporter, Section, from_fn};

/// Failures seen by a [`Reporter`], as `(label, message)` pairs.
pub type ReportLog = Rc<RefCell<Vec<(String, Option<String>)>>>;

/// A reporter that records every report it receives.
pub fn recording_reporter() -> (Reporter, ReportLog) {
    let log: ReportLog = Rc::default();
    let sink = Rc::clone(&log);
    let reporter = Reporter::new(move |report| {
        sink.borrow_mut().push((
            report.label.to_string(),
            report.failure.message().map(str::to_string),
        ));
    });
    (reporter, log)
}

/// A slot whose content always fails with `message`.
pub fn failing_slot(label: &str, message: &'static str) -> DemoSlot {
    DemoSlot::labeled(label, from_fn(move |_ctx| Err(RenderFailure::new(message))))
}

/// A slot whose content always panics with `message`.
pub fn panicking_slot(label: &str, message: &'static str) -> DemoSlot {
    DemoSlot::labeled(label, from_fn(move |_ctx| panic!("{message}")))
}

/// One section, one healthy slot and one failing slot.
pub fn mixed_catalog() -> Catalog {
    Catalog::new("Widget Test Suite", "fixture").section(
        Section::new("Mixed")
            .slot(DemoSlot::labeled("Healthy", "all good"))
            .slot(failing_slot("Failing", "boom")),
    )
}
