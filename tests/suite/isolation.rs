//! Failure isolation across boundaries, through the public API only.

use std::cell::Cell;
use std::rc::Rc;

use showcase_core::{
    BoundaryPhase, BoundaryState, Catalog, Content, DemoSlot, Group, IsolationBoundary,
    NO_MESSAGE_PLACEHOLDER, RenderContext, RenderFailure, Reporter, Section, from_fn,
};

use crate::common::{failing_slot, mixed_catalog, panicking_slot, recording_reporter};

fn ctx() -> RenderContext {
    RenderContext::new(40)
}

#[test]
fn healthy_child_renders_in_success_frame() {
    let mut boundary = IsolationBoundary::new("Widget");
    let mut child = "ok";
    let text = boundary.render(&mut child, &ctx()).to_plain_text();

    assert!(text.contains("✓ Widget"), "{text}");
    assert!(text.contains("ok"), "{text}");
    assert_eq!(boundary.state(), &BoundaryState::Healthy);
}

#[test]
fn failing_child_is_rendered_once_then_replaced_by_its_failure() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut child = from_fn(move |_ctx| {
        counter.set(counter.get() + 1);
        Err(RenderFailure::new("boom"))
    });
    let mut boundary = IsolationBoundary::new("Widget");

    let first = boundary.render(&mut child, &ctx());
    let second = boundary.render(&mut child, &ctx());

    let text = first.to_plain_text();
    assert!(text.contains("✗ Widget failed"), "{text}");
    assert!(text.contains("boom"), "{text}");
    assert_eq!(first, second);
    assert_eq!(calls.get(), 1);
}

#[test]
fn siblings_do_not_share_failure() {
    let mut catalog = mixed_catalog();
    let page = catalog.render(&ctx());

    let healthy = page.find("Healthy").unwrap();
    let failing = page.find("Failing").unwrap();
    assert_eq!(healthy.phase(), BoundaryPhase::Healthy);
    assert!(healthy.to_plain_text().contains("all good"));
    assert_eq!(failing.phase(), BoundaryPhase::Failed);
    assert!(failing.to_plain_text().contains("boom"));
}

#[test]
fn empty_label_and_empty_children_are_healthy() {
    let mut boundary = IsolationBoundary::new("");
    assert!(!boundary.is_failed());

    let view = boundary.render(&mut (), &ctx());
    assert_eq!(view.phase(), BoundaryPhase::Healthy);
    assert_eq!(view.title(), "✓ ");
    assert!(view.to_plain_text().contains('✓'));
}

#[test]
fn failure_without_message_shows_placeholder() {
    let mut child = from_fn(|_ctx| Err(RenderFailure::without_message()));
    let mut boundary = IsolationBoundary::new("Quiet");
    let text = boundary.render(&mut child, &ctx()).to_plain_text();
    assert!(text.contains(NO_MESSAGE_PLACEHOLDER), "{text}");
}

#[test]
fn message_is_shown_verbatim() {
    let message = "Tab index 7 out of range (max 3)";
    let mut child = from_fn(move |_ctx| Err(RenderFailure::new(message)));
    let mut boundary = IsolationBoundary::new("Tabs");
    boundary.render(&mut child, &ctx());
    assert_eq!(boundary.state().failure_message(), Some(message));
}

#[test]
fn panics_are_contained_like_errors() {
    let (reporter, log) = recording_reporter();
    let mut catalog = Catalog::new("t", "s").section(
        Section::new("Panics")
            .slot(panicking_slot("Loud", "exploded"))
            .slot(DemoSlot::labeled("Calm", "fine")),
    );
    catalog.set_reporter(&reporter);
    let page = catalog.render(&ctx());

    assert_eq!(page.find("Loud").unwrap().phase(), BoundaryPhase::Failed);
    assert_eq!(page.find("Calm").unwrap().phase(), BoundaryPhase::Healthy);
    assert_eq!(
        *log.borrow(),
        [("Loud".to_string(), Some("exploded".to_string()))]
    );
}

#[test]
fn nested_failure_stops_at_the_innermost_boundary() {
    let (reporter, log) = recording_reporter();
    let navigator = Group::default()
        .slot(DemoSlot::labeled("Home screen", "home"))
        .slot(failing_slot("Child screen", "route missing"));
    let mut catalog = Catalog::new("t", "s").section(
        Section::new("Navigation").slot(DemoSlot::labeled("Navigator", navigator)),
    );
    catalog.set_reporter(&reporter);
    let page = catalog.render(&ctx());

    let outer = page.find("Navigator").unwrap();
    assert_eq!(outer.phase(), BoundaryPhase::Healthy);
    let text = outer.to_plain_text();
    assert!(text.contains("✓ Home screen"), "{text}");
    assert!(text.contains("✗ Child screen failed"), "{text}");
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0].0, "Child screen");
}

#[test]
fn reset_reinstantiates_and_retries_once() {
    let passes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&passes);
    // Fails on the first pass only.
    let flaky = from_fn(move |ctx: &RenderContext| {
        counter.set(counter.get() + 1);
        if counter.get() == 1 {
            return Err(RenderFailure::new("warming up"));
        }
        let mut text = "ready";
        Content::render(&mut text, ctx)
    });
    let mut catalog = Catalog::new("t", "s")
        .section(Section::new("Flaky").slot(DemoSlot::labeled("Flaky", flaky)));

    catalog.render(&ctx());
    catalog.render(&ctx());
    assert_eq!(catalog.summary().failed, 1);
    assert_eq!(passes.get(), 1);

    assert_eq!(catalog.reset_failed(), 1);
    let page = catalog.render(&ctx());
    assert_eq!(page.find("Flaky").unwrap().phase(), BoundaryPhase::Healthy);
    assert_eq!(passes.get(), 2);
}

#[test]
fn panicking_reporter_leaves_outer_slot_healthy() {
    let navigator = Group::default().slot(failing_slot("Child screen", "route missing"));
    let mut catalog = Catalog::new("t", "s").section(
        Section::new("Navigation").slot(DemoSlot::labeled("Navigator", navigator)),
    );
    catalog.set_reporter(&Reporter::new(|_| panic!("sink closed")));

    let page = catalog.render(&ctx());
    catalog.render(&ctx());

    let outer = page.find("Navigator").unwrap();
    assert_eq!(outer.phase(), BoundaryPhase::Healthy);
    assert!(outer.to_plain_text().contains("route missing"));
    let summary = catalog.summary();
    assert_eq!((summary.healthy, summary.failed), (1, 1));
}
